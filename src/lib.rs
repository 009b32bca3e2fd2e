/*!
`airroutes` is a route network library for airline-style networks: a fixed set of locations
connected by routes that carry a **length** (in miles) and a **price**.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of locations in the network.
A [`Route`] is a directed connection `from -> to` with a weight and a cost; its identity is the pair of
endpoints `Edge(from, to)`, so updating a route means replacing it.

The [`RouteGraph`](crate::repr::RouteGraph) stores for every node its outgoing routes in insertion order.
Logical routes are symmetric: they are stored once per direction. The [`RouteNetwork`](crate::network::RouteNetwork)
keeps both directions in sync and attaches display names to the nodes.

# Design

Algorithms are provided as traits on the graph itself (e.g. `graph.bfs_hops(source)` or
`graph.minimum_spanning_routes()`), configurable searches as structs using the *Builder* / *Setter* pattern
(e.g. [`BudgetSearch`](crate::algo::BudgetSearch)). Single-source searches return a
[`SearchTree`](crate::algo::SearchTree) that owns all scratch state of the call, so the graph is never mutated by a query.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, routes, basic graph operations, the graph representation and the network,
- [`algo`] includes the search algorithms: hop search, shortest paths by distance or price, budget-bounded trips and spanning routes,
- [`io`] includes readers and writers for the route-list file format,
- [`query`] includes the structured results of the caller-facing network queries.

In most use-cases, `use airroutes::{prelude::*, algo::*};` suffices for your needs.

```
use airroutes::prelude::*;

let network = RouteNetwork::import(
    4,
    ["A", "B", "C", "D"],
    [(1, 2, 100, 50.0), (2, 3, 200, 80.0), (1, 3, 250, 150.0), (3, 4, 50, 20.0)],
)
.unwrap();

let cheapest = network.shortest_by_cost(0, 2).unwrap();
assert_eq!(cheapest.total, 130.0);
assert_eq!(cheapest.path, vec![0, 1, 2]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod network;
pub mod node;
pub mod ops;
pub mod query;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `airroutes::prelude` includes definitions for nodes and routes, all basic graph operation traits,
/// the graph representation as well as the network and its query results.
pub mod prelude {
    pub use super::{
        edge::*, error::RouteError, network::RouteNetwork, node::*, ops::*, query::*, repr::*,
    };
}
