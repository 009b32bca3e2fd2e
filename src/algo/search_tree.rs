/*!
Result of a single-source search.

A [`SearchTree`] owns the scratch arrays of one search call (`marked`, `dist_to`,
`edge_to`). Every search allocates a fresh tree, so consecutive queries on the same graph
never observe each other's state.
*/

use super::*;

/// Marks, tentative distances and predecessors of a single-source search.
///
/// `D` is the distance unit: [`Hops`] for breadth-first search, [`Distance`] or [`Cost`]
/// for the shortest-path searches.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree<D> {
    source: Node,
    marked: Vec<bool>,
    dist_to: Vec<D>,
    edge_to: Vec<Node>,
}

impl<D: Copy> SearchTree<D> {
    /// Creates an empty tree for `n` nodes where only `source` is marked (at distance `zero`)
    pub(crate) fn new(n: usize, source: Node, zero: D, infinity: D) -> Self {
        assert!((source as usize) < n, "source {source} out of range");

        let mut tree = Self {
            source,
            marked: vec![false; n],
            dist_to: vec![infinity; n],
            edge_to: vec![INVALID_NODE; n],
        };
        tree.marked[source as usize] = true;
        tree.dist_to[source as usize] = zero;
        tree
    }

    pub(crate) fn set_tentative(&mut self, v: Node, dist: D, predecessor: Node) {
        self.dist_to[v as usize] = dist;
        self.edge_to[v as usize] = predecessor;
    }

    pub(crate) fn mark(&mut self, v: Node) {
        self.marked[v as usize] = true;
    }

    pub(crate) fn tentative(&self, v: Node) -> D {
        self.dist_to[v as usize]
    }

    /// The root of the search
    pub fn source(&self) -> Node {
        self.source
    }

    /// Number of nodes the search ran on
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// Returns *true* if the search ran on an empty graph
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Returns *true* if `v` was reached (and, for shortest paths, finalized)
    /// ** Panics if `v >= n` **
    pub fn is_marked(&self, v: Node) -> bool {
        self.marked[v as usize]
    }

    /// Returns the number of reached nodes including the source
    pub fn number_of_marked(&self) -> NumNodes {
        self.marked.iter().filter(|&&m| m).count() as NumNodes
    }

    /// Returns the distance from the source to `v` or `None` if `v` is unreachable
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<D> {
        self.is_marked(v).then(|| self.dist_to[v as usize])
    }

    /// Returns the node preceding `v` on the path from the source.
    /// `None` for the source itself and for unreachable nodes.
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        (self.is_marked(v) && v != self.source).then(|| self.edge_to[v as usize])
    }

    /// Returns the nodes of the path from the source to `v` (both included) or `None` if
    /// `v` is unreachable. The path to the source is `[source]`.
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_marked(v) {
            return None;
        }

        let mut path = vec![v];
        let mut node = v;
        while let Some(p) = self.predecessor_of(node) {
            path.push(p);
            node = p;
        }

        path.reverse();
        Some(path)
    }

    /// Returns the distances of all nodes on the path from the source to `v`
    /// (in path order), or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn distances_along_path_to(&self, v: Node) -> Option<Vec<D>> {
        Some(
            self.path_to(v)?
                .into_iter()
                .map(|u| self.dist_to[u as usize])
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tree_only_knows_source() {
        let tree = SearchTree::new(4, 2, 0u64, u64::MAX);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.source(), 2);
        assert_eq!(tree.number_of_marked(), 1);
        assert_eq!(tree.distance_to(2), Some(0));
        assert_eq!(tree.distance_to(0), None);
        assert_eq!(tree.path_to(2), Some(vec![2]));
        assert_eq!(tree.path_to(1), None);
        assert_eq!(tree.predecessor_of(2), None);
    }

    #[test]
    fn path_follows_predecessors() {
        let mut tree = SearchTree::new(4, 0, 0u64, u64::MAX);
        tree.set_tentative(1, 5, 0);
        tree.set_tentative(3, 9, 1);
        tree.mark(1);
        tree.mark(3);

        assert_eq!(tree.path_to(3), Some(vec![0, 1, 3]));
        assert_eq!(tree.distances_along_path_to(3), Some(vec![0, 5, 9]));
        assert_eq!(tree.predecessor_of(3), Some(1));
        assert_eq!(tree.tentative(2), u64::MAX);
    }
}
