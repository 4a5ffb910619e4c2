// src/stats/mod.rs
//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial builds its own [`Percolation`](crate::percolation::Percolation)
//! and its own RNG, so trials are independent and run on the rayon pool
//! unless sequential mode is requested. Aggregation starts only after every
//! trial has reported.

pub mod sample;
pub mod trial;

pub use self::sample::Summary;

use std::time::{Duration, Instant};

use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::error::{PercolationError, Result};

/// How a batch of trials is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOptions {
    /// Base seed; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
    /// Run trials on the rayon pool.
    pub parallel: bool,
}

impl Default for TrialOptions {
    fn default() -> Self {
        Self {
            seed: None,
            parallel: true,
        }
    }
}

/// Thresholds from `trials` independent experiments on an `n`×`n` grid.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    seed: u64,
    thresholds: Vec<f64>,
    elapsed: Duration,
}

impl PercolationStats {
    /// Runs `trials` experiments with default options.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `n` or `trials` is zero.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_options(n, trials, &TrialOptions::default())
    }

    /// # Errors
    /// Returns `InvalidArgument` if `n` or `trials` is zero.
    pub fn with_options(n: usize, trials: usize, opts: &TrialOptions) -> Result<Self> {
        Self::check_arguments(n, trials)?;
        let seed = opts.seed.unwrap_or_else(rand::random);

        let start = Instant::now();
        let run = |index: usize| trial::run_trial(n, &mut trial::trial_rng(seed, index));

        let thresholds = if opts.parallel {
            (0..trials).into_par_iter().map(run).collect::<Result<Vec<f64>>>()?
        } else {
            (0..trials).map(run).collect::<Result<Vec<f64>>>()?
        };

        Ok(Self {
            n,
            seed,
            thresholds,
            elapsed: start.elapsed(),
        })
    }

    /// Rejects a zero grid size or trial count without running anything.
    ///
    /// # Errors
    /// Returns `InvalidArgument` naming the first zero argument.
    pub fn check_arguments(n: usize, trials: usize) -> Result<()> {
        PercolationError::require_positive("n", n)?;
        PercolationError::require_positive("trials", trials)?;
        Ok(())
    }

    /// Sample mean of the thresholds.
    #[must_use]
    pub fn mean(&self) -> f64 {
        sample::mean(&self.thresholds)
    }

    /// Sample standard deviation of the thresholds; NaN for a single trial.
    #[must_use]
    pub fn stddev(&self) -> f64 {
        sample::stddev(&self.thresholds)
    }

    /// Lower bound of the 95% confidence interval.
    #[must_use]
    pub fn confidence_lo(&self) -> f64 {
        self.interval().0
    }

    /// Upper bound of the 95% confidence interval.
    #[must_use]
    pub fn confidence_hi(&self) -> f64 {
        self.interval().1
    }

    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    #[must_use]
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// The base seed actually used, including a drawn one.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let (confidence_lo, confidence_hi) = self.interval();
        Summary {
            size: self.n,
            trials: self.trials(),
            seed: self.seed,
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_lo,
            confidence_hi,
            duration_ms: self.elapsed.as_millis(),
        }
    }

    fn interval(&self) -> (f64, f64) {
        sample::confidence_interval(self.mean(), self.stddev(), self.trials())
    }
}
