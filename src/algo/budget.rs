/*!
Enumeration of trips whose summed price stays within a budget.

[`BudgetSearch`] holds the configuration, [`TripSearch`] is the lazy depth-first iterator
from a single start. The depth-first search enters every node at most once per start, but a
route leading to an already entered node is still reported if it is affordable and the node
is not on the current path.
*/

use super::*;
use crate::query::Trip;

/// Configuration of the budget-bounded trip enumeration.
///
/// # Examples
/// ```
/// use airroutes::{prelude::*, algo::*};
///
/// let g = RouteGraph::from_routes(3, [Route::new(0, 1, 5, 10.0), Route::new(1, 2, 5, 30.0)]);
///
/// let trips: Vec<_> = BudgetSearch::new(25.0).trips_from(&g, 0).collect();
/// assert_eq!(trips.len(), 1);
/// assert_eq!(trips[0].path, vec![0, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSearch {
    budget: Cost,
}

impl BudgetSearch {
    /// Creates a search reporting trips with total price at most `budget`
    pub fn new(budget: Cost) -> Self {
        Self { budget }
    }

    /// Sets the maximum total price of reported trips
    pub fn set_budget(&mut self, budget: Cost) {
        self.budget = budget;
    }

    /// Builder-style variant of [`Self::set_budget`].
    pub fn budget(mut self, budget: Cost) -> Self {
        self.set_budget(budget);
        self
    }

    /// Returns the configured maximum total price
    pub fn max_cost(&self) -> Cost {
        self.budget
    }

    /// Returns an iterator over all affordable trips starting at `source`
    /// ** Panics if `source >= n` **
    pub fn trips_from<'a, G>(&self, graph: &'a G, source: Node) -> TripSearch<'a, G>
    where
        G: RouteList + RoutesSlice,
    {
        TripSearch::new(graph, source, self.budget)
    }

    /// Runs [`Self::trips_from`] for every node as start, in ascending order.
    /// Trips found from different starts are not deduplicated.
    pub fn trips<'a, G>(self, graph: &'a G) -> impl Iterator<Item = Trip> + 'a
    where
        G: RouteList + RoutesSlice,
    {
        let budget = self.budget;
        graph
            .vertices_range()
            .flat_map(move |u| TripSearch::new(graph, u, budget))
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    cost: Cost,
    next_route: usize,
}

/// Depth-first iterator over the affordable trips from a single start.
///
/// Every call to `next` resumes the search exactly where the previous trip was reported; the
/// stack of frames replaces the call stack of a recursive search.
pub struct TripSearch<'a, G>
where
    G: RouteList + RoutesSlice,
{
    graph: &'a G,
    budget: Cost,
    visited: Vec<bool>,
    on_path: Vec<bool>,
    stack: Vec<Frame>,
}

impl<'a, G> TripSearch<'a, G>
where
    G: RouteList + RoutesSlice,
{
    /// Starts a new search at `source`.
    /// ** Panics if `source >= n` **
    pub fn new(graph: &'a G, source: Node, budget: Cost) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[source as usize] = true;
        let on_path = visited.clone();

        Self {
            graph,
            budget,
            visited,
            on_path,
            stack: vec![Frame {
                node: source,
                cost: 0.0,
                next_route: 0,
            }],
        }
    }

    fn trip_to(&self, v: Node, total_cost: Cost) -> Trip {
        let mut path: Vec<Node> = self.stack.iter().map(|f| f.node).collect();
        path.push(v);
        Trip { path, total_cost }
    }
}

impl<G> Iterator for TripSearch<'_, G>
where
    G: RouteList + RoutesSlice,
{
    type Item = Trip;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;

        loop {
            let top = self.stack.last_mut()?;
            let Some(route) = graph.as_routes_slice(top.node).get(top.next_route) else {
                if let Some(done) = self.stack.pop() {
                    self.on_path[done.node as usize] = false;
                }
                continue;
            };
            top.next_route += 1;

            let to = route.to();
            let total = top.cost + route.cost();

            let trip = (total <= self.budget && !self.on_path[to as usize])
                .then(|| self.trip_to(to, total));

            if !self.visited[to as usize] {
                self.visited[to as usize] = true;
                self.on_path[to as usize] = true;
                self.stack.push(Frame {
                    node: to,
                    cost: total,
                    next_route: 0,
                });
            }

            if let Some(trip) = trip {
                tracing::trace!(path = ?trip.path, total_cost = trip.total_cost, "affordable trip");
                return Some(trip);
            }
        }
    }
}
