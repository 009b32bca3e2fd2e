/*!
# Route Algorithms

This module provides the **search algorithms** of the route network, built on top of the graph
representation in [`repr`](crate::repr). All algorithms are re-exported at the top level of this
module, so you can simply do:
```rust
use airroutes::algo::*;
```
and gain access to hop search, cheapest/shortest paths, budget-bounded trips and spanning routes.

Algorithms are implemented as traits on every graph providing [`RouteList`](crate::ops::RouteList).
Single-source searches return a [`SearchTree`], the budget search is an iterator over [`Trip`](crate::query::Trip)s.
*/

mod budget;
mod search_tree;
mod shortest_path;
mod spanning;
mod traversal;

use crate::{prelude::*, utils::*};

pub use budget::*;
pub use search_tree::*;
pub use shortest_path::*;
pub use spanning::*;
pub use traversal::*;
