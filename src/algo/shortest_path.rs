/*!
Single-source shortest paths over non-negative route lengths or prices.

The search finalizes one node per round: it relaxes all routes of the node finalized last and
then scans every unfinalized node for the smallest tentative value. There is no priority queue,
so a search costs `O(n^2 + m)`, which is fine for route networks of a few hundred airports.
*/

use std::{fmt::Debug, ops::Add};

use super::*;

/// A quantity attached to every route that can be summed along a path
pub trait Metric {
    type Value: Copy + PartialOrd + Add<Output = Self::Value> + Debug;

    /// Value of the empty path
    const ZERO: Self::Value;

    /// Value of unreached nodes; larger than any reachable total
    const INFINITY: Self::Value;

    /// Value contributed by a single route
    fn of(route: &Route) -> Self::Value;
}

/// Sums route lengths
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDistance;

impl Metric for ByDistance {
    type Value = Distance;

    const ZERO: Distance = 0;
    const INFINITY: Distance = Distance::MAX;

    fn of(route: &Route) -> Distance {
        route.weight() as Distance
    }
}

/// Sums route prices
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCost;

impl Metric for ByCost {
    type Value = Cost;

    const ZERO: Cost = 0.0;
    const INFINITY: Cost = Cost::INFINITY;

    fn of(route: &Route) -> Cost {
        route.cost()
    }
}

pub trait ShortestPath: RouteList + Sized {
    /// Computes the shortest-path tree from `source` with respect to metric `M`.
    ///
    /// Ties between equally short tentative values are broken towards the smaller node index.
    /// Nodes that cannot be reached remain unmarked in the returned tree.
    /// ** Panics if `source >= n` **
    fn shortest_path_tree<M: Metric>(&self, source: Node) -> SearchTree<M::Value> {
        let mut tree = SearchTree::new(self.len(), source, M::ZERO, M::INFINITY);
        let mut current = source;
        let mut num_marked = 1;

        while num_marked < self.len() {
            let base = tree.tentative(current);
            for route in self.routes_of(current) {
                let candidate = base + M::of(route);
                if !tree.is_marked(route.to()) && candidate < tree.tentative(route.to()) {
                    tree.set_tentative(route.to(), candidate, current);
                }
            }

            let mut next: Option<(Node, M::Value)> = None;
            for v in self.vertices_range().filter(|&v| !tree.is_marked(v)) {
                let dist = tree.tentative(v);
                let best = next.map_or(M::INFINITY, |(_, d)| d);
                if dist < best {
                    next = Some((v, dist));
                }
            }

            let Some((v, dist)) = next else {
                break;
            };

            tracing::trace!(node = v, dist = ?dist, "finalized");
            tree.mark(v);
            num_marked += 1;
            current = v;
        }

        tree
    }

    /// Shortest paths from `source` by summed route length
    /// ** Panics if `source >= n` **
    fn shortest_distance(&self, source: Node) -> SearchTree<Distance> {
        self.shortest_path_tree::<ByDistance>(source)
    }

    /// Cheapest paths from `source` by summed route price
    /// ** Panics if `source >= n` **
    fn shortest_cost(&self, source: Node) -> SearchTree<Cost> {
        self.shortest_path_tree::<ByCost>(source)
    }
}

impl<G> ShortestPath for G where G: RouteList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{four_airports, random_symmetric_graph};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn four_airports_by_distance() {
        let graph = RouteGraph::from_routes(4, four_airports());
        let tree = graph.shortest_distance(0);

        // A-C-D (250 + 50) beats A-B-C-D (100 + 200 + 50)
        assert_eq!(tree.distance_to(3), Some(300));
        assert_eq!(tree.path_to(3), Some(vec![0, 2, 3]));
        assert_eq!(tree.distance_to(1), Some(100));
        assert_eq!(tree.distance_to(0), Some(0));
        assert_eq!(tree.path_to(0), Some(vec![0]));
    }

    #[test]
    fn four_airports_by_cost() {
        let graph = RouteGraph::from_routes(4, four_airports());
        let tree = graph.shortest_cost(0);

        assert_eq!(tree.distance_to(2), Some(130.0));
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(tree.distances_along_path_to(2), Some(vec![0.0, 50.0, 130.0]));
        assert_eq!(tree.distance_to(3), Some(150.0));
    }

    #[test]
    fn ties_prefer_smaller_index() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 have equal length
        let graph = RouteGraph::from_routes(
            4,
            [
                Route::new(0, 2, 5, 1.0),
                Route::new(0, 1, 5, 1.0),
                Route::new(2, 3, 5, 1.0),
                Route::new(1, 3, 5, 1.0),
            ],
        );

        // 1 is finalized before 2 and sets the predecessor of 3 first
        assert_eq!(graph.shortest_distance(0).path_to(3), Some(vec![0, 1, 3]));
    }

    #[test]
    fn zero_weights_and_unreachable_nodes() {
        let graph = RouteGraph::from_routes(
            4,
            [Route::new(0, 1, 0, 0.0), Route::new(1, 2, 0, 0.0)],
        );
        let tree = graph.shortest_distance(0);

        assert_eq!(tree.distance_to(2), Some(0));
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(tree.distance_to(3), None);
        assert_eq!(tree.path_to(3), None);
        assert_eq!(tree.number_of_marked(), 3);

        assert_eq!(graph.shortest_cost(3).number_of_marked(), 1);
    }

    #[test]
    fn agrees_with_hop_search_on_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5 as NumNodes, 20, 40] {
            let graph: RouteGraph = random_symmetric_graph(rng, n, n);

            for s in graph.vertices() {
                let by_hops = graph.bfs_hops(s);
                let by_dist = graph.shortest_distance(s);

                for v in graph.vertices() {
                    assert_eq!(by_hops.is_marked(v), by_dist.is_marked(v));
                }

                // no route can improve a finalized distance
                for r in graph.routes(false) {
                    if let Some(d) = by_dist.distance_to(r.from()) {
                        assert!(by_dist.distance_to(r.to()).unwrap() <= d + r.weight() as Distance);
                    }
                }

                // path distances are prefix sums of the route lengths
                for v in graph.vertices() {
                    if let Some(path) = by_dist.path_to(v) {
                        let total: Distance = path
                            .iter()
                            .tuple_windows()
                            .map(|(&a, &b)| graph.find_route(a, b).unwrap().weight() as Distance)
                            .sum();
                        assert_eq!(by_dist.distance_to(v), Some(total));
                    }
                }
            }
        }
    }
}
