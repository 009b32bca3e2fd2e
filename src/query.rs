/*!
# Query Results

Structured answers of the caller-facing queries of [`RouteNetwork`](crate::network::RouteNetwork).
An unreachable destination is not an error: it is reported with `reachable == false`, an empty
path and zeroed totals.
*/

use std::{fmt::Display, ops::Sub};

use crate::{
    algo::{Hops, SearchTree},
    *,
};

/// Fewest-routes connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HopItinerary {
    pub reachable: bool,
    pub hop_count: Hops,
    pub path: Vec<Node>,
}

impl HopItinerary {
    /// Extracts the itinerary to `destination` from a hop search tree.
    /// ** Panics if `destination >= n` **
    pub fn from_tree(tree: &SearchTree<Hops>, destination: Node) -> Self {
        match (tree.distance_to(destination), tree.path_to(destination)) {
            (Some(hop_count), Some(path)) => Self {
                reachable: true,
                hop_count,
                path,
            },
            _ => Self::default(),
        }
    }
}

/// Shortest (or cheapest) connection between two nodes.
///
/// `legs[i]` is the contribution of the route from `path[i]` to `path[i + 1]`; the legs sum up
/// to `total`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary<D> {
    pub reachable: bool,
    pub total: D,
    pub path: Vec<Node>,
    pub legs: Vec<D>,
}

/// Itinerary measured in miles
pub type DistanceItinerary = Itinerary<Distance>;

/// Itinerary measured in price
pub type CostItinerary = Itinerary<Cost>;

impl<D> Itinerary<D>
where
    D: Copy + Default + Sub<Output = D>,
{
    /// Extracts the itinerary to `destination` from a shortest-path tree.
    /// ** Panics if `destination >= n` **
    pub fn from_tree(tree: &SearchTree<D>, destination: Node) -> Self {
        let (Some(path), Some(dists)) = (
            tree.path_to(destination),
            tree.distances_along_path_to(destination),
        ) else {
            return Self {
                reachable: false,
                total: D::default(),
                path: Vec::new(),
                legs: Vec::new(),
            };
        };

        Self {
            reachable: true,
            total: dists.last().copied().unwrap_or_default(),
            legs: dists.windows(2).map(|w| w[1] - w[0]).collect(),
            path,
        }
    }
}

/// An affordable sequence of routes found by the budget search
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Visited nodes, starting with the origin; never repeats a node
    pub path: Vec<Node>,
    /// Summed price of all routes along `path`
    pub total_cost: Cost,
}

impl Trip {
    /// Number of routes taken
    pub fn hop_count(&self) -> Hops {
        self.path.len().saturating_sub(1) as Hops
    }

    /// First node of the trip, `None` for an empty path
    pub fn origin(&self) -> Option<Node> {
        self.path.first().copied()
    }

    pub fn destination(&self) -> Option<Node> {
        self.path.last().copied()
    }
}

impl Display for Trip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, u) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{u}")?;
        }
        write!(f, " (${})", self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, prelude::*, testing::four_airports};

    #[test]
    fn itineraries_of_four_airports() {
        let graph = RouteGraph::from_routes(5, four_airports());

        let hops = HopItinerary::from_tree(&graph.bfs_hops(0), 3);
        assert!(hops.reachable);
        assert_eq!(hops.hop_count, 2);
        assert_eq!(hops.path, vec![0, 2, 3]);

        let by_dist = DistanceItinerary::from_tree(&graph.shortest_distance(0), 3);
        assert_eq!(by_dist.total, 300);
        assert_eq!(by_dist.legs, vec![250, 50]);
        assert_eq!(by_dist.legs.iter().sum::<Distance>(), by_dist.total);

        let by_cost = CostItinerary::from_tree(&graph.shortest_cost(0), 2);
        assert_eq!(by_cost.total, 130.0);
        assert_eq!(by_cost.path, vec![0, 1, 2]);
        assert_eq!(by_cost.legs, vec![50.0, 80.0]);
    }

    #[test]
    fn unreachable_and_trivial() {
        // node 4 has no routes
        let graph = RouteGraph::from_routes(5, four_airports());

        assert_eq!(
            HopItinerary::from_tree(&graph.bfs_hops(0), 4),
            HopItinerary::default()
        );

        let none = DistanceItinerary::from_tree(&graph.shortest_distance(0), 4);
        assert!(!none.reachable);
        assert_eq!(none.total, 0);
        assert!(none.path.is_empty() && none.legs.is_empty());

        let trivial = DistanceItinerary::from_tree(&graph.shortest_distance(1), 1);
        assert!(trivial.reachable);
        assert_eq!(trivial.total, 0);
        assert_eq!(trivial.path, vec![1]);
        assert!(trivial.legs.is_empty());
    }

    #[test]
    fn trip_display() {
        let trip = Trip {
            path: vec![2, 3],
            total_cost: 20.0,
        };
        assert_eq!(trip.to_string(), "2 -> 3 ($20)");
        assert_eq!(trip.hop_count(), 1);
        assert_eq!((trip.origin(), trip.destination()), (Some(2), Some(3)));

        let empty = Trip {
            path: Vec::new(),
            total_cost: 0.0,
        };
        assert_eq!((empty.origin(), empty.destination()), (None, None));
        assert_eq!(empty.hop_count(), 0);
    }
}
