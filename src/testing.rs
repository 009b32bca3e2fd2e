//! Test helpers shared by the graph representation and algorithm tests.

#[cfg(test)]
use rand::Rng;

#[cfg(test)]
use crate::{ops::*, *};

/// Creates a list of at most `m_ub` random routes for nodes `0..n` with pairwise distinct
/// endpoints. Weights are drawn from `0..500`, costs are whole numbers from `0..300` so that
/// sums of costs are exact.
#[cfg(test)]
pub(crate) fn random_routes<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Route> {
    use itertools::Itertools;

    (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            Route::new(u, v, rng.random_range(0..500), rng.random_range(0..300u32) as Cost)
        })
        .unique_by(|r| r.edge())
        .collect_vec()
}

/// Creates a symmetric graph with at most `m_ub` logical routes, each inserted in both
/// directions. Self-loops are skipped.
#[cfg(test)]
pub(crate) fn random_symmetric_graph<R: Rng, G: GraphFromScratch>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
) -> G {
    use itertools::Itertools;

    let routes = random_routes(rng, n, m_ub)
        .into_iter()
        .filter(|r| !r.edge().is_loop())
        .unique_by(|r| r.edge().normalized())
        .flat_map(|r| [r, r.reversed()])
        .collect_vec();

    G::from_routes(n, routes)
}

/// Installs a fmt subscriber honoring `RUST_LOG` that writes through the test harness.
/// Safe to call from every test; only the first call has an effect.
#[cfg(test)]
pub(crate) fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The four-airport network `A=0, B=1, C=2, D=3` with the logical routes
/// A-B (100 mi, $50), B-C (200 mi, $80), A-C (250 mi, $150) and C-D (50 mi, $20),
/// each inserted in both directions.
#[cfg(test)]
pub(crate) fn four_airports() -> Vec<Route> {
    [
        Route::new(0, 1, 100, 50.0),
        Route::new(1, 2, 200, 80.0),
        Route::new(0, 2, 250, 150.0),
        Route::new(2, 3, 50, 20.0),
    ]
    .into_iter()
    .flat_map(|r| [r, r.reversed()])
    .collect()
}

/// Every graph should implement `GraphNodeOrder` and `GraphEdgeOrder`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::{random_routes, test_graph_ops}, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.is_empty(), n == 0);
            }
        }
    };
    ($graph:ident: RouteList) => {
        #[test]
        fn test_route_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let routes = random_routes(rng, n, m_ub as NumEdges);

                        let mut targets: Vec<Vec<Node>> = vec![Vec::new(); n as usize];
                        for r in &routes {
                            targets[r.from() as usize].push(r.to());
                        }

                        let graph = <$graph>::from_routes(n, routes.clone());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), routes.len() as NumEdges);

                        assert_eq!(
                            routes.iter().map(|r| r.edge()).sorted().collect_vec(),
                            graph.routes(false).map(|r| r.edge()).sorted().collect_vec()
                        );

                        for u in 0..n {
                            // insertion order is preserved per node
                            assert_eq!(graph.neighbors_of(u).collect_vec(), targets[u as usize]);
                            assert_eq!(graph.degree_of(u) as usize, targets[u as usize].len());
                            assert!(graph.routes_of(u).all(|r| r.from() == u));
                        }

                        assert_eq!(
                            graph.routes(true).count(),
                            routes.iter().filter(|r| r.edge().is_normalized()).count()
                        );
                    }
                }
            }
        }
    };
    ($graph:ident: AdjacencyTest) => {
        #[test]
        fn test_adjacency_test() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [10 as NumNodes, 20, 50] {
                let routes = random_routes(rng, n, n * 4);
                let graph = <$graph>::from_routes(n, routes.clone());

                for r in &routes {
                    assert!(graph.has_edge(r.from(), r.to()));
                    assert_eq!(graph.find_route(r.from(), r.to()), Some(r));
                }

                for _ in 0..100 {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let expected = routes.iter().any(|r| r.connects(u, v));
                    assert_eq!(graph.has_edge(u, v), expected);
                    assert_eq!(
                        graph.has_bidirected_edge(u, v),
                        expected && routes.iter().any(|r| r.connects(v, u))
                    );
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let routes = random_routes(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);
                        for r in &routes {
                            graph.add_route(*r);
                        }

                        let mut present = routes.iter().map(|r| r.edge()).collect_vec();
                        let mut m = graph.number_of_edges();
                        assert_eq!(m as usize, present.len());

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if let Some(pos) = present.iter().position(|e| *e == Edge(u, v)) {
                                present.remove(pos);
                                let removed = graph.try_remove_route(u, v).unwrap();
                                assert!(removed.connects(u, v));
                                m -= 1;
                            } else {
                                assert!(graph.try_remove_route(u, v).is_none());
                            }

                            assert_eq!(m, graph.number_of_edges());
                            assert!(!graph.has_edge(u, v));
                        }

                        for Edge(u, v) in present {
                            graph.remove_route(u, v);
                            m -= 1;
                            assert_eq!(m, graph.number_of_edges());
                        }
                        assert_eq!(graph.number_of_edges(), 0);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
