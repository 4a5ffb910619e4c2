// src/stats/sample.rs
//! Sample statistics over per-trial thresholds.

use serde::Serialize;

/// z-score of a two-sided 95% confidence interval.
pub const Z_95: f64 = 1.96;

/// Arithmetic mean. NaN for an empty sample.
#[must_use]
pub fn mean(samples: &[f64]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let len = samples.len() as f64;
    samples.iter().sum::<f64>() / len
}

/// Sample standard deviation (divisor `len - 1`). NaN for fewer than two samples.
#[must_use]
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let mu = mean(samples);
    let squares: f64 = samples.iter().map(|x| (x - mu).powi(2)).sum();
    #[allow(clippy::cast_precision_loss)]
    let dof = (samples.len() - 1) as f64;
    (squares / dof).sqrt()
}

/// `(lo, hi)` = `mean ∓ 1.96 · stddev / √len`.
#[must_use]
pub fn confidence_interval(mean: f64, stddev: f64, len: usize) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let half = Z_95 * stddev / (len as f64).sqrt();
    (mean - half, mean + half)
}

/// Snapshot of a finished run, ready for printing or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub size: usize,
    pub trials: usize,
    pub seed: u64,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
    pub duration_ms: u128,
}
