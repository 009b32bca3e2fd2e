//! Disjoint-set (union-find) over the nodes of a graph.
//!
//! Trees are merged by size; `find` does not compress paths, so it only needs `&self`.
//! The graphs handled here are small enough that the `O(log n)` tree height bound from
//! union-by-size suffices.

use crate::*;

/// Tracks which nodes belong to the same component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    components: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton components `{0}, ..., {n - 1}`
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            components: n,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of components
    pub fn components(&self) -> NumNodes {
        self.components
    }

    /// Returns the root of the tree containing `p`.
    /// ** Panics if `p >= n` **
    pub fn find(&self, mut p: Node) -> Node {
        while self.parent[p as usize] != p {
            p = self.parent[p as usize];
        }
        p
    }

    /// Returns the number of elements in the component of `p`
    /// ** Panics if `p >= n` **
    pub fn size_of(&self, p: Node) -> NumNodes {
        self.size[self.find(p) as usize]
    }

    /// Returns *true* if `p` and `q` are in the same component, i.e. if joining them
    /// would close a cycle.
    /// ** Panics if `p >= n || q >= n` **
    pub fn connected(&self, p: Node, q: Node) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges the components of `p` and `q`.
    ///
    /// Returns *true* if both were already in the same component (a cycle); nothing is
    /// changed in that case. Otherwise the smaller tree is attached below the root of the
    /// larger one (on equal sizes below the root of `p`) and *false* is returned.
    /// ** Panics if `p >= n || q >= n` **
    pub fn union(&mut self, p: Node, q: Node) -> bool {
        let i = self.find(p);
        let j = self.find(q);
        if i == j {
            return true;
        }

        let (root, child) = if self.size[i as usize] < self.size[j as usize] {
            (j, i)
        } else {
            (i, j)
        };

        self.parent[child as usize] = root;
        self.size[root as usize] += self.size[child as usize];
        self.components -= 1;
        false
    }
}
