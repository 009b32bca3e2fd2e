/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking)
  over the routes of a graph.
- The breadth-first hop search that computes, for every node, the minimum number of
  routes needed to reach it from a source.
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Number of routes taken, i.e. the distance unit of the breadth-first search
pub type Hops = NumNodes;

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and the set of
/// already discovered nodes. A node is discovered (and pushed) at most once; routes to
/// discovered nodes are skipped.
pub struct TraversalSearch<'a, G, S, I>
where
    G: RouteList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: Vec<bool>,
    sequencer: S,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: RouteList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.sequencer.push(I::new_with_predecessor(u, v));
                self.visited[v as usize] = true;
            }
        }

        Some(popped)
    }

    // every item in the frontier is yielded, undiscovered nodes may follow
    fn size_hint(&self) -> (usize, Option<usize>) {
        let discovered = self.visited.iter().filter(|&&v| v).count();
        (
            self.sequencer.cardinality(),
            Some(self.sequencer.cardinality() + self.graph.len() - discovered),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: RouteList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            _item: PhantomData,
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS, hop search) on graphs
pub trait Traversal: RouteList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use airroutes::{prelude::*, algo::*};
    ///
    /// let g = RouteGraph::from_routes(3, [Route::new(0, 1, 5, 1.0), Route::new(1, 2, 5, 1.0)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (routes traversed).
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Computes the minimum number of routes from `source` to every node.
    ///
    /// The search expands nodes level by level in a FIFO order; each node is discovered
    /// once, receives the hop count of its discoverer plus one and remembers the
    /// discoverer as predecessor. Unreached nodes stay unmarked.
    ///
    /// # Examples
    /// ```
    /// use airroutes::{prelude::*, algo::*};
    ///
    /// let g = RouteGraph::from_routes(3, [Route::new(0, 1, 5, 1.0), Route::new(1, 2, 5, 1.0)]);
    ///
    /// let tree = g.bfs_hops(0);
    /// assert_eq!(tree.distance_to(2), Some(2));
    /// assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
    /// assert_eq!(g.bfs_hops(2).distance_to(0), None);
    /// ```
    fn bfs_hops(&self, source: Node) -> SearchTree<Hops> {
        let mut tree = SearchTree::new(self.len(), source, 0, Hops::MAX);

        // `bfs` first returns `source` which has no predecessor
        for (pred, v) in self.bfs_with_predecessor(source).skip(1) {
            let hops = tree.tentative(pred) + 1;
            tree.set_tentative(v, hops, pred);
            tree.mark(v);
        }

        tree
    }

    /// Returns *true* if every node can be reached from node `0`.
    /// For symmetric route networks this means the network is connected.
    fn is_connected(&self) -> bool {
        self.is_empty() || self.dfs(0).count() == self.len()
    }
}

impl<G> Traversal for G where G: RouteList + Sized {}
