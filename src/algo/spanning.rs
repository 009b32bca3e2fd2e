//! Minimum spanning routes via Kruskal's algorithm.

use super::*;

pub trait SpanningRoutes: RouteList + Sized {
    /// Returns a minimum-weight set of routes connecting every component of the graph.
    ///
    /// All stored routes (both directions of a symmetric network) are considered in ascending
    /// order of weight; among routes of equal weight the storage order decides. A route is kept
    /// if it joins two nodes that were not connected yet, so of the two directions of a logical
    /// route at most one ends up in the result. For a disconnected graph the result is a
    /// spanning forest with `n - #components` routes.
    ///
    /// # Examples
    /// ```
    /// use airroutes::{prelude::*, algo::*};
    ///
    /// let g = RouteGraph::from_routes(3, [
    ///     Route::new(0, 1, 5, 1.0),
    ///     Route::new(1, 2, 3, 1.0),
    ///     Route::new(0, 2, 9, 1.0),
    /// ]);
    ///
    /// let mst = g.minimum_spanning_routes();
    /// assert_eq!(mst.iter().map(|r| r.weight()).sum::<Weight>(), 8);
    /// ```
    fn minimum_spanning_routes(&self) -> Vec<Route> {
        let mut candidates: Vec<Route> = self.routes(false).copied().collect();
        candidates.sort_by_key(|r| r.weight());

        let mut uf = UnionFind::new(self.number_of_nodes());
        let mut tree = Vec::with_capacity(self.len().saturating_sub(1));

        for route in candidates {
            if uf.components() == 1 {
                break;
            }
            if !uf.union(route.to(), route.from()) {
                tree.push(route);
            }
        }

        tracing::debug!(
            routes = tree.len(),
            components = uf.components(),
            "spanning routes selected"
        );
        tree
    }
}

impl<G> SpanningRoutes for G where G: RouteList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{four_airports, random_symmetric_graph};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn four_airports_mst() {
        let graph = RouteGraph::from_routes(4, four_airports());
        let mst = graph.minimum_spanning_routes();

        assert_eq!(mst.len(), 3);
        assert_eq!(mst.iter().map(|r| r.weight()).sum::<Weight>(), 350);
        assert!(mst.iter().all(|r| r.edge().normalized() != Edge(0, 2)));
    }

    #[test]
    fn forest_of_disconnected_graph() {
        let graph = RouteGraph::from_routes(
            5,
            [
                Route::new(0, 1, 4, 1.0),
                Route::new(1, 0, 4, 1.0),
                Route::new(3, 4, 2, 1.0),
                Route::new(4, 3, 2, 1.0),
            ],
        );

        let mst = graph.minimum_spanning_routes();
        assert_eq!(mst.len(), 2);
        assert_eq!(mst[0].edge(), Edge(3, 4));
        assert_eq!(mst[1].edge(), Edge(0, 1));

        assert!(RouteGraph::new(0).minimum_spanning_routes().is_empty());
        assert!(RouteGraph::new(3).minimum_spanning_routes().is_empty());
    }

    #[test]
    fn random_connected_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [5 as NumNodes, 15, 40] {
            for _ in 0..5 {
                let graph: RouteGraph = random_symmetric_graph(rng, n, n * 3);
                let mst = graph.minimum_spanning_routes();

                // replaying the accepted routes never closes a cycle
                let mut uf = UnionFind::new(n);
                for r in &mst {
                    assert!(!uf.union(r.from(), r.to()));
                }

                // every route of the graph connects nodes within one tree
                for r in graph.routes(false) {
                    assert!(uf.connected(r.from(), r.to()));
                }

                // every logical route of the tree is a route of the graph
                for r in &mst {
                    assert!(graph.has_bidirected_edge(r.from(), r.to()));
                }

                if graph.is_connected() {
                    assert_eq!(mst.len() as NumNodes, n - 1);
                }

                let total: u64 = mst.iter().map(|r| r.weight() as u64).sum();
                let heavy: u64 = graph.routes(true).map(|r| r.weight() as u64).sum();
                assert!(total <= heavy);
            }
        }
    }
}
