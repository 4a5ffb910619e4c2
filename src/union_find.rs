// src/union_find.rs
//! Union-Find (disjoint-set forest) over a fixed universe `0..n`.
//!
//! Weighted by tree size with full path compression, giving near-constant
//! amortized cost per operation. Parents and sizes live in two flat vectors
//! indexed by element id.

use crate::error::{PercolationError, Result};

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

// Indexing is safe here: every public entry point runs `validate` first, and
// parent pointers only ever hold values produced from validated indices.
#[allow(clippy::indexing_slicing)]
impl UnionFind {
    /// Creates `n` singleton sets.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        let n = PercolationError::require_positive("n", n)?;
        Ok(Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        })
    }

    /// Returns the root of the set containing `x`, re-parenting every node on
    /// the path directly to that root.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `x` is not in `[0, n)`.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.validate(x)?;
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        Ok(root)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The smaller tree goes under the larger one; on a tie the root of `b`
    /// goes under the root of `a`.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if either element is not in `[0, n)`.
    pub fn union(&mut self, a: usize, b: usize) -> Result<()> {
        self.validate(a)?;
        self.validate(b)?;
        let ra = self.find(a)?;
        let rb = self.find(b)?;

        if ra == rb {
            return Ok(());
        }

        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb;
            self.size[rb] += self.size[ra];
        } else {
            self.parent[rb] = ra;
            self.size[ra] += self.size[rb];
        }
        self.count -= 1;
        Ok(())
    }

    /// # Errors
    /// Returns `IndexOutOfRange` if either element is not in `[0, n)`.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        self.validate(a)?;
        self.validate(b)?;
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of elements, fixed at construction and never zero.
    #[must_use]
    pub fn universe(&self) -> usize {
        self.parent.len()
    }

    fn validate(&self, x: usize) -> Result<()> {
        if x >= self.universe() {
            return Err(PercolationError::IndexOutOfRange {
                index: x,
                low: 0,
                high: self.universe() - 1,
            });
        }
        Ok(())
    }

    #[cfg(test)]
    fn parent_of(&self, x: usize) -> usize {
        self.parent[x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_singletons() {
        let mut uf = UnionFind::new(5).unwrap();
        for i in 0..5 {
            assert_eq!(uf.find(i).unwrap(), i);
        }
        assert_eq!(uf.count(), 5);
        assert_eq!(uf.universe(), 5);
    }

    #[test]
    fn new_rejects_empty_universe() {
        let err = UnionFind::new(0).unwrap_err();
        assert!(matches!(err, PercolationError::InvalidArgument { name: "n", value: 0 }));
    }

    #[test]
    fn union_joins_and_counts() {
        let mut uf = UnionFind::new(4).unwrap();
        uf.union(0, 1).unwrap();
        assert!(uf.connected(0, 1).unwrap());
        assert!(!uf.connected(0, 2).unwrap());
        assert_eq!(uf.count(), 3);

        // Already joined: no change.
        uf.union(1, 0).unwrap();
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn connectivity_is_transitive() {
        let mut uf = UnionFind::new(5).unwrap();
        uf.union(0, 1).unwrap();
        uf.union(1, 2).unwrap();
        uf.union(3, 4).unwrap();
        assert!(uf.connected(0, 2).unwrap());
        assert!(!uf.connected(2, 3).unwrap());
        uf.union(2, 4).unwrap();
        assert!(uf.connected(0, 3).unwrap());
        assert_eq!(uf.count(), 1);
    }

    #[test]
    fn equal_sizes_put_second_root_under_first() {
        let mut uf = UnionFind::new(2).unwrap();
        uf.union(0, 1).unwrap();
        assert_eq!(uf.find(1).unwrap(), 0);

        let mut uf = UnionFind::new(2).unwrap();
        uf.union(1, 0).unwrap();
        assert_eq!(uf.find(0).unwrap(), 1);
    }

    #[test]
    fn smaller_tree_goes_under_larger() {
        let mut uf = UnionFind::new(4).unwrap();
        uf.union(2, 3).unwrap();
        // {0} is smaller than {2,3}, so 0 hangs under root 2 even though it is `a`.
        uf.union(0, 2).unwrap();
        assert_eq!(uf.find(0).unwrap(), 2);
    }

    #[test]
    fn find_compresses_path() {
        let mut uf = UnionFind::new(4).unwrap();
        // Equal-size merges build 3 -> 2 -> 0 style chains.
        uf.union(2, 3).unwrap();
        uf.union(0, 1).unwrap();
        uf.union(0, 2).unwrap();
        assert_eq!(uf.parent_of(3), 2);

        assert_eq!(uf.find(3).unwrap(), 0);
        assert_eq!(uf.parent_of(3), 0);
        // Idempotent at a fixed tree state.
        assert_eq!(uf.find(3).unwrap(), 0);
    }

    #[test]
    fn out_of_range_elements_fail() {
        let mut uf = UnionFind::new(3).unwrap();
        let expected = PercolationError::IndexOutOfRange { index: 3, low: 0, high: 2 };
        assert_eq!(uf.find(3).unwrap_err(), expected);
        assert_eq!(uf.union(0, 3).unwrap_err(), expected);
        assert_eq!(uf.connected(3, 0).unwrap_err(), expected);
        // Failed calls leave the forest untouched.
        assert_eq!(uf.count(), 3);
    }
}
