/*!
# Directed Route Graph

[`RouteGraph`] stores, for every node, the routes leaving it in insertion order. This is
the only place routes live: there is no separate global edge set.

A route network is symmetric in practice (every logical connection is inserted once per
direction), but the graph itself operates on single directed routes. Keeping the two
directions in sync is the job of [`RouteNetwork`](crate::network::RouteNetwork).
*/

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph storing only **outgoing routes**.
#[derive(Clone, Debug, Default)]
pub struct RouteGraph {
    out_nbs: Vec<RouteNeighborhood>,
    num_edges: NumEdges,
}

impl RouteGraph {
    fn assert_route_in_range(&self, route: &Route) {
        assert!(
            self.contains_node(route.from()) && self.contains_node(route.to()),
            "route {} out of range for {} nodes",
            route.edge(),
            self.number_of_nodes()
        );
    }
}

impl GraphNodeOrder for RouteGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for RouteGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl RouteList for RouteGraph {
    fn routes_of(&self, u: Node) -> impl Iterator<Item = &Route> + '_ {
        self.out_nbs[u as usize].routes()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_routes()
    }
}

impl RoutesSlice for RouteGraph {
    fn as_routes_slice(&self, u: Node) -> &[Route] {
        self.out_nbs[u as usize].as_slice()
    }
}

impl AdjacencyTest for RouteGraph {
    fn find_route(&self, u: Node, v: Node) -> Option<&Route> {
        self.out_nbs[u as usize].find_route_to(v)
    }
}

impl GraphNew for RouteGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![RouteNeighborhood::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for RouteGraph {
    fn add_route(&mut self, route: Route) {
        self.assert_route_in_range(&route);
        self.out_nbs[route.from() as usize].add_route(route);
        self.num_edges += 1;
    }

    fn try_remove_route(&mut self, u: Node, v: Node) -> Option<Route> {
        let route = self.out_nbs[u as usize].try_remove_route_to(v)?;
        self.num_edges -= 1;
        Some(route)
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_route_graph,
    RouteGraph,
    (GraphNew, RouteList, AdjacencyTest, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_not_rejected_by_add_route() {
        let mut graph = RouteGraph::new(2);
        graph.add_route(Route::new(0, 1, 10, 1.0));
        graph.add_route(Route::new(0, 1, 20, 2.0));
        assert_eq!(graph.number_of_edges(), 2);

        // lookup and removal always hit the first stored route
        assert_eq!(graph.find_route(0, 1).unwrap().weight(), 10);
        assert_eq!(graph.remove_route(0, 1).weight(), 10);
        assert_eq!(graph.find_route(0, 1).unwrap().weight(), 20);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn routes_are_directed() {
        let graph = RouteGraph::from_routes(3, [Route::new(0, 2, 10, 1.0)]);
        assert!(graph.has_edge(0, 2));
        assert!(!graph.has_edge(2, 0));
        assert!(!graph.has_bidirected_edge(0, 2));
        assert_eq!(graph.as_routes_slice(0), [Route::new(0, 2, 10, 1.0)]);
        assert!(graph.as_routes_slice(2).is_empty());
    }

    #[test]
    #[should_panic]
    fn add_route_out_of_range() {
        let mut graph = RouteGraph::new(2);
        graph.add_route(Route::new(0, 2, 1, 1.0));
    }

    #[test]
    #[should_panic]
    fn remove_missing_route() {
        let mut graph = RouteGraph::new(2);
        graph.remove_route(0, 1);
    }
}
