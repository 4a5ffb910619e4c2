// src/stats/trial.rs
//! A single Monte Carlo trial.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Result;
use crate::percolation::Percolation;

/// Seeds the RNG for trial `index` of a run with base seed `seed`.
///
/// Trials never share a generator, so the same seed yields the same
/// thresholds whether trials run in parallel or one after another.
#[must_use]
pub fn trial_rng(seed: u64, index: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add(index as u64))
}

/// Opens sites of a fresh `n`×`n` grid in uniformly random order until it
/// percolates, and returns the fraction of sites opened.
///
/// Walking a shuffled permutation of all sites picks a uniformly random
/// blocked site at every step, so no draw is ever wasted on an open one.
/// The result lies in `(0, 1]`.
///
/// # Errors
/// Returns `InvalidArgument` if `n == 0` or the grid is too large to index.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let mut perc = Percolation::new(n)?;
    let sites = perc.sites();
    let mut order: Vec<usize> = (0..sites).collect();
    order.shuffle(rng);

    for idx in order {
        if perc.percolates()? {
            break;
        }
        perc.open(idx / n + 1, idx % n + 1)?;
    }

    #[allow(clippy::cast_precision_loss)]
    let threshold = perc.open_sites() as f64 / sites as f64;
    Ok(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_needs_its_only_site() {
        let mut rng = trial_rng(7, 0);
        let t = run_trial(1, &mut rng).unwrap();
        assert!((t - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn two_by_two_needs_at_least_two_sites() {
        for seed in 0..50 {
            let t = run_trial(2, &mut trial_rng(seed, 0)).unwrap();
            assert!(t >= 0.5 && t <= 0.75, "threshold {t} for seed {seed}");
        }
    }

    #[test]
    fn threshold_lies_in_unit_interval() {
        for index in 0..20 {
            let t = run_trial(10, &mut trial_rng(99, index)).unwrap();
            assert!(t > 0.0 && t <= 1.0);
        }
    }

    #[test]
    fn same_seed_same_threshold() {
        let a = run_trial(16, &mut trial_rng(1234, 3)).unwrap();
        let b = run_trial(16, &mut trial_rng(1234, 3)).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(run_trial(0, &mut trial_rng(0, 0)).is_err());
    }
}
