// src/cli/handlers.rs
use anyhow::Result;
use colored::Colorize;

use crate::cli::args::Cli;
use crate::config::Config;
use crate::exit::PercolateExit;
use crate::reporting;
use crate::stats::PercolationStats;

/// Runs the simulation described by `cli` and prints the results.
///
/// # Errors
/// Returns error if the settings file cannot be loaded or output fails.
pub fn handle_run(cli: &Cli) -> Result<PercolateExit> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);

    let mut opts = config.trial_options();
    // Pin the seed up front so the banner and the JSON report show the one used.
    let seed = opts.seed.unwrap_or_else(rand::random);
    opts.seed = Some(seed);

    let trials = config.simulation.trials;
    if let Err(e) = PercolationStats::check_arguments(cli.n, trials) {
        eprintln!("{} {e}", "Error:".red());
        return Ok(PercolateExit::InvalidInput);
    }
    if config.output.verbose {
        reporting::print_banner(cli.n, trials, &opts);
    }

    let stats = match PercolationStats::with_options(cli.n, trials, &opts) {
        Ok(stats) => stats,
        Err(e) if e.is_invalid_argument() => {
            eprintln!("{} {e}", "Error:".red());
            return Ok(PercolateExit::InvalidInput);
        }
        Err(e) => return Err(e.into()),
    };

    let summary = stats.summary();
    if config.output.verbose {
        reporting::print_elapsed(&summary);
    }
    reporting::print_report(&summary, &config.output)?;
    Ok(PercolateExit::Success)
}
