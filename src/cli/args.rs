use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "percolate",
    version,
    about = "Estimate the percolation threshold of an N-by-N grid"
)]
pub struct Cli {
    /// Grid side length
    pub n: usize,
    /// Number of independent trials [default: `simulation.trials` from percolate.toml]
    pub trials: Option<usize>,
    /// Base RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
    /// Run trials one after another instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
    /// Print run status to stderr
    #[arg(long, short)]
    pub verbose: bool,
    /// Digits after the decimal point in text output
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,
    /// Settings file to read instead of ./percolate.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layers command-line flags over file settings. Flags that were not
    /// given leave the file value alone.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(trials) = self.trials {
            config.simulation.trials = trials;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.sequential {
            config.simulation.parallel = false;
        }
        if self.json {
            config.output.json = true;
        }
        if self.verbose {
            config.output.verbose = true;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
    }
}
