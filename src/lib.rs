//! Percolation on an N-by-N grid: a union-find connectivity engine and a
//! Monte Carlo estimator of the percolation threshold.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod percolation;
pub mod reporting;
pub mod stats;
pub mod union_find;

pub use error::{PercolationError, Result};
pub use percolation::Percolation;
pub use stats::{PercolationStats, TrialOptions};
pub use union_find::UnionFind;
