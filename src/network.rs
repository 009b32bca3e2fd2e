/*!
# Route Network

[`RouteNetwork`] is the caller-facing layer on top of a [`RouteGraph`]: it attaches display
names to the nodes, validates indices and keeps both directions of every logical route in sync.

All indices are 0-based. Checked operations report [`RouteError`]s; an unreachable destination
is part of the query result rather than an error.
*/

use fxhash::FxHashMap;
use tracing::{debug, warn};

use crate::{
    algo::*,
    error::{Result, RouteError},
    prelude::*,
};

/// Named airports connected by symmetric routes
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    names: Vec<String>,
    name_index: FxHashMap<String, Node>,
    graph: RouteGraph,
}

impl RouteNetwork {
    /// Creates a network without routes, one node per name.
    /// If a name occurs several times, [`Self::node_by_name`] resolves it to its first node.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut name_index = FxHashMap::default();
        for (u, name) in names.iter().enumerate() {
            name_index.entry(name.clone()).or_insert(u as Node);
        }

        Self {
            graph: RouteGraph::new(names.len() as NumNodes),
            names,
            name_index,
        }
    }

    /// Creates a network from names and 0-based routes; every route is inserted in both
    /// directions without checking for duplicates.
    ///
    /// # Errors
    /// - [`RouteError::OutOfRange`] if a route references a node without name
    /// - [`RouteError::InvalidCost`] if a route has a negative or non-finite price
    pub fn from_routes<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        routes: impl IntoIterator<Item = Route>,
    ) -> Result<Self> {
        let mut network = Self::new(names);
        for route in routes {
            network.check_route(route.from(), route.to())?;
            check_cost(route.cost())?;
            network.insert_both_directions(route);
        }
        Ok(network)
    }

    /// Creates a network of `n` nodes from tuples `(from, to, weight, cost)` with **1-based**
    /// indices.
    ///
    /// # Errors
    /// - [`RouteError::NameCount`] if not exactly `n` names are given
    /// - [`RouteError::OutOfRange`] (carrying the 1-based index) if an index is `0` or larger than `n`
    /// - [`RouteError::InvalidCost`] if a route has a negative or non-finite price
    pub fn import<S: Into<String>>(
        n: NumNodes,
        names: impl IntoIterator<Item = S>,
        routes: impl IntoIterator<Item = (Node, Node, Weight, Cost)>,
    ) -> Result<Self> {
        let network = Self::new(names);
        if network.names.len() != n as usize {
            return Err(RouteError::NameCount {
                expected: n,
                found: network.names.len(),
            });
        }

        let to_zero_based = |u: Node| {
            if (1..=n).contains(&u) {
                Ok(u - 1)
            } else {
                Err(RouteError::OutOfRange {
                    node: u,
                    number_of_nodes: n,
                })
            }
        };

        let routes = routes
            .into_iter()
            .map(|(u, v, weight, cost)| {
                let (u, v) = (to_zero_based(u)?, to_zero_based(v)?);
                check_cost(cost)?;
                Ok(Route::new(u, v, weight, cost))
            })
            .collect::<Result<Vec<_>>>()?;

        let network = Self::from_routes(network.names, routes)?;
        debug!(
            nodes = network.number_of_nodes(),
            routes = network.number_of_routes(),
            "imported route network"
        );
        Ok(network)
    }

    /// The underlying directed graph
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    /// Number of stored (directed) routes, i.e. twice the number of logical routes
    pub fn number_of_routes(&self) -> NumEdges {
        self.graph.number_of_edges()
    }

    /// Display name of `u`
    pub fn name_of(&self, u: Node) -> Result<&str> {
        self.graph.check_node(u)?;
        Ok(&self.names[u as usize])
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Node carrying the display name `name`
    pub fn node_by_name(&self, name: &str) -> Option<Node> {
        self.name_index.get(name).copied()
    }

    /// Routes leaving `u` in insertion order
    pub fn routes_from(&self, u: Node) -> Result<&[Route]> {
        self.graph.check_node(u)?;
        Ok(self.graph.as_routes_slice(u))
    }

    /// All stored routes grouped by source node.
    /// If `only_normalized`, every logical route is reported once (`from <= to`).
    pub fn routes(&self, only_normalized: bool) -> impl Iterator<Item = &Route> + '_ {
        self.graph.routes(only_normalized)
    }

    /// Returns *true* if a route `from -> to` is stored
    pub fn contains_route(&self, from: Node, to: Node) -> Result<bool> {
        self.check_route(from, to)?;
        Ok(self.graph.has_edge(from, to))
    }

    /// Fewest-routes connection from `source` to `destination`
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn bfs_hops(&self, source: Node, destination: Node) -> Result<HopItinerary> {
        self.check_route(source, destination)?;
        let itinerary = HopItinerary::from_tree(&self.graph.bfs_hops(source), destination);
        debug!(reachable = itinerary.reachable, hops = itinerary.hop_count);
        Ok(itinerary)
    }

    /// Shortest connection by summed route length
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn shortest_by_distance(
        &self,
        source: Node,
        destination: Node,
    ) -> Result<DistanceItinerary> {
        self.check_route(source, destination)?;
        let itinerary =
            DistanceItinerary::from_tree(&self.graph.shortest_distance(source), destination);
        debug!(reachable = itinerary.reachable, miles = itinerary.total);
        Ok(itinerary)
    }

    /// Cheapest connection by summed route price
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn shortest_by_cost(&self, source: Node, destination: Node) -> Result<CostItinerary> {
        self.check_route(source, destination)?;
        let itinerary = CostItinerary::from_tree(&self.graph.shortest_cost(source), destination);
        debug!(reachable = itinerary.reachable, cost = itinerary.total);
        Ok(itinerary)
    }

    /// All trips starting at `source` whose summed price is at most `max_cost`
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn trips_from(&self, source: Node, max_cost: Cost) -> Result<Vec<Trip>> {
        self.graph.check_node(source)?;
        let trips: Vec<Trip> = BudgetSearch::new(max_cost)
            .trips_from(&self.graph, source)
            .collect();
        debug!(trips = trips.len());
        Ok(trips)
    }

    /// All trips from every start whose summed price is at most `max_cost`.
    /// The same connection may be reported once per start it is found from.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn trips_under_budget(&self, max_cost: Cost) -> Vec<Trip> {
        let trips: Vec<Trip> = BudgetSearch::new(max_cost).trips(&self.graph).collect();
        debug!(trips = trips.len());
        trips
    }

    /// Minimum-weight set of routes connecting all airports (per component)
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn spanning_routes(&self) -> Vec<Route> {
        self.graph.minimum_spanning_routes()
    }

    /// Adds the logical route `from - to` in both directions.
    ///
    /// # Errors
    /// - [`RouteError::OutOfRange`] if `from` or `to` is not a node
    /// - [`RouteError::InvalidCost`] if `cost` is negative or not finite
    /// - [`RouteError::EdgeAlreadyExists`] if `from -> to` is already stored
    pub fn add_route(&mut self, from: Node, to: Node, weight: Weight, cost: Cost) -> Result<()> {
        self.check_route(from, to)?;
        check_cost(cost)?;
        if self.graph.has_edge(from, to) {
            return Err(RouteError::EdgeAlreadyExists(Edge(from, to)));
        }

        self.insert_both_directions(Route::new(from, to, weight, cost));
        debug!(from, to, weight, cost, "added route");
        Ok(())
    }

    /// Replaces weight and price of the logical route `from - to` in both directions.
    ///
    /// # Errors
    /// - [`RouteError::OutOfRange`] if `from` or `to` is not a node
    /// - [`RouteError::InvalidCost`] if `cost` is negative or not finite; nothing is changed then
    /// - [`RouteError::EdgeNotFound`] if `from -> to` is not stored
    pub fn update_route(&mut self, from: Node, to: Node, weight: Weight, cost: Cost) -> Result<()> {
        self.check_route(from, to)?;
        check_cost(cost)?;
        self.remove_route(from, to)?;
        self.insert_both_directions(Route::new(from, to, weight, cost));
        debug!(from, to, weight, cost, "updated route");
        Ok(())
    }

    /// Removes the logical route `from - to` in both directions and returns the stored
    /// `from -> to` route.
    ///
    /// # Errors
    /// - [`RouteError::OutOfRange`] if `from` or `to` is not a node
    /// - [`RouteError::EdgeNotFound`] if `from -> to` is not stored; nothing is changed then
    pub fn remove_route(&mut self, from: Node, to: Node) -> Result<Route> {
        self.check_route(from, to)?;
        let route = self
            .graph
            .try_remove_route(from, to)
            .ok_or(RouteError::EdgeNotFound(Edge(from, to)))?;

        if from != to && self.graph.try_remove_route(to, from).is_none() {
            warn!(from = to, to = from, "reverse route was not stored");
        }

        debug!(from, to, "removed route");
        Ok(route)
    }

    fn check_route(&self, from: Node, to: Node) -> Result<()> {
        self.graph.check_node(from)?;
        self.graph.check_node(to)?;
        Ok(())
    }

    /// Self-loops are stored once
    fn insert_both_directions(&mut self, route: Route) {
        self.graph.add_route(route);
        if !route.edge().is_loop() {
            self.graph.add_route(route.reversed());
        }
    }
}

/// Prices must be finite and non-negative for the cost searches to be correct
fn check_cost(cost: Cost) -> Result<()> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(())
    } else {
        Err(RouteError::InvalidCost(cost))
    }
}
