/*!
# Node Representation

Locations of a route network are numbered `0` to `n - 1` and represented as `u32`.
Display names are attached by [`RouteNetwork`](crate::network::RouteNetwork); inside the
graph a location is nothing but its index.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid, e.g. the predecessor of a search root
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
