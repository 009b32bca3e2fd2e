use std::slice::Iter;

use itertools::Itertools;

use super::*;

/// Outgoing routes of a single node, stored as an array in insertion order.
///
/// Removal keeps the relative order of the remaining routes: the order in which a node's
/// routes were inserted determines the order in which searches expand them.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct RouteNeighborhood(pub Vec<Route>);

impl RouteNeighborhood {
    /// Returns the number of routes in the Neighborhood
    pub fn num_of_routes(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns an iterator over all routes in the Neighborhood
    pub fn routes(&self) -> Iter<'_, Route> {
        self.0.iter()
    }

    /// Returns the first route leading to `v`
    pub fn find_route_to(&self, v: Node) -> Option<&Route> {
        self.0.iter().find(|r| r.to() == v)
    }

    /// Appends a route without checking if a route to the same target exists beforehand.
    /// This might lead to Multi-Edges
    pub fn add_route(&mut self, route: Route) {
        self.0.push(route);
    }

    /// Tries to remove the first route leading to `v` and returns it
    pub fn try_remove_route_to(&mut self, v: Node) -> Option<Route> {
        let (pos, _) = self.0.iter().find_position(|r| r.to() == v)?;
        Some(self.0.remove(pos))
    }

    /// Returns a slice-reference of the routes in the Neighborhood
    pub fn as_slice(&self) -> &[Route] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_keeps_insertion_order() {
        let mut nbs = RouteNeighborhood::default();
        for v in [3, 1, 4, 1, 5] {
            nbs.add_route(Route::new(0, v, v * 10, v as Cost));
        }
        assert_eq!(nbs.num_of_routes(), 5);

        let removed = nbs.try_remove_route_to(1).unwrap();
        assert_eq!(removed.weight(), 10);
        assert_eq!(
            nbs.routes().map(|r| r.to()).collect_vec(),
            vec![3, 4, 1, 5]
        );

        assert!(nbs.try_remove_route_to(9).is_none());
        assert_eq!(nbs.num_of_routes(), 4);
        assert_eq!(nbs.find_route_to(1).unwrap().weight(), 10);
        assert!(nbs.find_route_to(9).is_none());
    }
}
