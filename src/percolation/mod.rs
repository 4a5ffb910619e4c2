// src/percolation/mod.rs
//! The percolation engine: an N×N grid of open/blocked sites with
//! incremental top-to-bottom connectivity.
//!
//! Two union-find forests are kept side by side:
//!
//! - `full` holds every site plus a virtual top and a virtual bottom node and
//!   answers [`Percolation::percolates`] with a single connectivity query.
//! - `top` holds every site plus the virtual top only and answers
//!   [`Percolation::is_full`]. Without the bottom node, a site connected to the
//!   bottom row cannot appear full through some unrelated percolating column
//!   (backwash).

pub mod site;

pub use self::site::Site;

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    full: UnionFind,
    top: UnionFind,
    virtual_top: usize,
    virtual_bottom: usize,
}

// Grid indexing is bounded by `Site::from_external` validation.
#[allow(clippy::indexing_slicing)]
impl Percolation {
    /// Creates an `n`×`n` grid with every site blocked.
    ///
    /// The virtual nodes are wired to the top and bottom rows here,
    /// regardless of site state.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `n == 0`, or if `n * n` plus the two
    /// virtual nodes does not fit in `usize`.
    pub fn new(n: usize) -> Result<Self> {
        let n = PercolationError::require_positive("n", n)?;
        let sites = n
            .checked_mul(n)
            .filter(|s| s.checked_add(2).is_some())
            .ok_or(PercolationError::InvalidArgument { name: "n", value: n })?;
        let virtual_top = sites;
        let virtual_bottom = sites + 1;

        let mut full = UnionFind::new(sites + 2)?;
        let mut top = UnionFind::new(sites + 1)?;

        for col in 0..n {
            full.union(col, virtual_top)?;
            top.union(col, virtual_top)?;
        }
        for idx in (sites - n)..sites {
            full.union(idx, virtual_bottom)?;
        }

        Ok(Self {
            n,
            open: vec![false; sites],
            open_count: 0,
            full,
            top,
            virtual_top,
            virtual_bottom,
        })
    }

    /// Opens site `(i, j)` (1-based) and joins it with its open neighbours.
    /// Opening an already-open site does nothing.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if either coordinate is outside `[1, n]`.
    pub fn open(&mut self, i: usize, j: usize) -> Result<()> {
        let site = Site::from_external(i, j, self.n)?;
        let idx = site.index(self.n);
        if self.open[idx] {
            return Ok(());
        }

        self.open[idx] = true;
        self.open_count += 1;

        for neighbor in site.neighbors(self.n) {
            let other = neighbor.index(self.n);
            if self.open[other] {
                self.full.union(idx, other)?;
                self.top.union(idx, other)?;
            }
        }
        Ok(())
    }

    /// # Errors
    /// Returns `IndexOutOfRange` if either coordinate is outside `[1, n]`.
    pub fn is_open(&self, i: usize, j: usize) -> Result<bool> {
        let site = Site::from_external(i, j, self.n)?;
        Ok(self.open[site.index(self.n)])
    }

    /// True if `(i, j)` is open and reachable from the top row through open
    /// sites.
    ///
    /// Takes `&mut self` because queries compress paths in the forest.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if either coordinate is outside `[1, n]`.
    pub fn is_full(&mut self, i: usize, j: usize) -> Result<bool> {
        let site = Site::from_external(i, j, self.n)?;
        let idx = site.index(self.n);
        if !self.open[idx] {
            return Ok(false);
        }
        self.top.connected(idx, self.virtual_top)
    }

    /// True once an open path joins the top row to the bottom row.
    ///
    /// # Errors
    /// Never fails for a constructed grid; the `Result` carries union-find
    /// errors through unchanged.
    pub fn percolates(&mut self) -> Result<bool> {
        // With one cell, both virtual nodes are joined through site 0 at
        // construction, before it is ever opened.
        if self.n == 1 {
            return Ok(self.open[0]);
        }
        self.full.connected(self.virtual_top, self.virtual_bottom)
    }

    /// Side length `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Total number of sites, `n * n`.
    #[must_use]
    pub fn sites(&self) -> usize {
        self.open.len()
    }

    /// Number of open sites.
    #[must_use]
    pub fn open_sites(&self) -> usize {
        self.open_count
    }
}
