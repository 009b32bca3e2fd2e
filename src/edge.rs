use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
///
/// In a route network the pair `(from, to)` is the identity of a [`Route`]: two routes with
/// equal endpoints are the same connection, regardless of their weight and cost.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Length of a single route (in miles)
pub type Weight = u32;

/// Accumulated length of several routes
pub type Distance = u64;

/// Price of a route (or of a sequence of routes)
pub type Cost = f64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Route> for Edge {
    fn from(value: &Route) -> Self {
        value.edge()
    }
}

/// A directed connection `from -> to` with a length (`weight`) and a price (`cost`).
///
/// Routes are immutable: changing the weight or price of a connection means removing the
/// route and inserting a new one.
#[derive(Copy, Clone, PartialEq)]
pub struct Route {
    from: Node,
    to: Node,
    weight: Weight,
    cost: Cost,
}

impl Route {
    /// Creates a new route `from -> to`.
    ///
    /// Weights are unsigned by type; costs are expected to be finite and non-negative.
    pub fn new(from: Node, to: Node, weight: Weight, cost: Cost) -> Self {
        debug_assert!(cost >= 0.0, "negative route cost {cost}");
        Self {
            from,
            to,
            weight,
            cost,
        }
    }

    /// Source of the route
    pub fn from(&self) -> Node {
        self.from
    }

    /// Target of the route
    pub fn to(&self) -> Node {
        self.to
    }

    /// Length of the route
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Price of the route
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The endpoints of the route, i.e. its identity
    pub fn edge(&self) -> Edge {
        Edge(self.from, self.to)
    }

    /// Returns *true* if the route goes from `u` to `v`
    pub fn connects(&self, u: Node, v: Node) -> bool {
        self.from == u && self.to == v
    }

    /// The complementary route `to -> from` with identical weight and cost
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..*self
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[miles:{}|cost:${}]",
            self.edge(),
            self.weight,
            self.cost
        )
    }
}

impl Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
