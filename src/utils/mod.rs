/*!
# Utilities

Helper structures used by the algorithms, currently the [`UnionFind`] structure that tracks
components while the spanning routes are selected.
*/

pub mod union_find;

pub use union_find::UnionFind;
