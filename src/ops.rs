use std::ops::Range;

use crate::{error::RouteError, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all vertices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is a node of the graph
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `u` if it is a node of the graph and [`RouteError::OutOfRange`] otherwise
    fn check_node(&self, u: Node) -> Result<Node, RouteError> {
        if self.contains_node(u) {
            Ok(u)
        } else {
            Err(RouteError::OutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) routes of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for outgoing routes & neighborhoods
pub trait RouteList: GraphNodeOrder + Sized {
    /// Returns an iterator over the routes leaving `u` in insertion order.
    /// ** Panics if `u >= n` **
    fn routes_of(&self, u: Node) -> impl Iterator<Item = &Route> + '_;

    /// Returns the number of routes leaving `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the targets of all routes leaving `u`.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.routes_of(u).map(|r| r.to())
    }

    /// Returns an iterator over all routes in the graph, grouped by source node.
    /// If `only_normalized`, then only routes `(u, v)` with `u <= v` are considered.
    fn routes(&self, only_normalized: bool) -> impl Iterator<Item = &Route> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.routes_of(u)
                .filter(move |r| !only_normalized || r.edge().is_normalized())
        })
    }
}

/// Trait for accessing the outgoing routes of nodes as slices
pub trait RoutesSlice {
    /// Returns a slice-reference of the routes leaving a given vertex
    fn as_routes_slice(&self, u: Node) -> &[Route];
}

/// Trait to test existence of routes in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the first stored route from `u` to `v`.
    /// ** Panics if `u >= n` **
    fn find_route(&self, u: Node, v: Node) -> Option<&Route>;

    /// Returns *true* if the route (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.find_route(u, v).is_some()
    }

    /// Returns *true* if there exists a route (u,v) as well as (v,u) in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete routes
pub trait GraphEdgeEditing: GraphNew {
    /// Appends `route` to the routes leaving `route.from()`.
    /// Does not check whether a route with the same endpoints exists.
    /// ** Panics if `from >= n || to >= n` **
    fn add_route(&mut self, route: Route);

    /// Adds all routes in the collection
    fn add_routes(&mut self, routes: impl IntoIterator<Item = Route>) {
        for route in routes {
            self.add_route(route);
        }
    }

    /// Removes the first stored route *(u,v)* from the graph and returns it.
    /// Returns `None` (leaving the graph untouched) if no such route exists.
    /// ** Panics if `u >= n` **
    fn try_remove_route(&mut self, u: Node, v: Node) -> Option<Route>;

    /// Removes the first stored route *(u,v)* from the graph and returns it.
    /// ** Panics if the route is not present or `u >= n` **
    fn remove_route(&mut self, u: Node, v: Node) -> Route {
        match self.try_remove_route(u, v) {
            Some(route) => route,
            None => panic!("route {} is not present", Edge(u, v)),
        }
    }
}

/// A super trait for creating a graph from scratch from a set of routes and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over routes
    fn from_routes(n: NumNodes, routes: impl IntoIterator<Item = Route>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_routes(n: NumNodes, routes: impl IntoIterator<Item = Route>) -> Self {
        let mut graph = Self::new(n);
        graph.add_routes(routes);
        graph
    }
}
