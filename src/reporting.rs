// src/reporting.rs
//! Result output (stdout) and run status lines (stderr).

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;

use crate::config::OutputConfig;
use crate::stats::{Summary, TrialOptions};

/// Prints the summary as text lines or JSON, depending on `output.json`.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(summary: &Summary, output: &OutputConfig) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", format_text(summary, output.precision));
    }
    Ok(())
}

/// The three result lines, each float fixed-point with `precision` digits.
#[must_use]
pub fn format_text(summary: &Summary, precision: usize) -> String {
    let p = precision;
    format!(
        "mean = {:.p$}\nstddev = {:.p$}\n95% confidence interval = {:.p$}, {:.p$}\n",
        summary.mean, summary.stddev, summary.confidence_lo, summary.confidence_hi,
    )
}

/// Announces a run on stderr.
pub fn print_banner(n: usize, trials: usize, opts: &TrialOptions) {
    let mode = if opts.parallel { "parallel" } else { "sequential" };
    let seed = opts
        .seed
        .map_or_else(|| "random".to_string(), |s| s.to_string());
    eprintln!(
        "{} {} {trials} {} on a {n}x{n} grid {}",
        "->".cyan().bold(),
        "Running".bold(),
        pluralize("trial", trials),
        format!("(seed: {seed}, {mode})").dimmed()
    );
}

/// Reports completion time on stderr.
pub fn print_elapsed(summary: &Summary) {
    let ms = u64::try_from(summary.duration_ms).unwrap_or(u64::MAX);
    eprintln!(
        "{} {} {} finished {}",
        "[OK]".green().bold(),
        summary.trials,
        pluralize("trial", summary.trials),
        format!("in {:.2?}", Duration::from_millis(ms)).dimmed()
    );
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary {
            size: 200,
            trials: 100,
            seed: 42,
            mean: 0.592_993_6,
            stddev: 0.008_770_9,
            confidence_lo: 0.591_274_8,
            confidence_hi: 0.594_712_7,
            duration_ms: 1234,
        }
    }

    #[test]
    fn text_report_uses_fixed_point() {
        let text = format_text(&summary(), 6);
        assert_eq!(
            text,
            "mean = 0.592994\nstddev = 0.008771\n95% confidence interval = 0.591275, 0.594713\n"
        );
    }

    #[test]
    fn precision_is_configurable() {
        let text = format_text(&summary(), 2);
        assert!(text.starts_with("mean = 0.59\n"));
    }

    #[test]
    fn pluralizes_counts() {
        assert_eq!(pluralize("trial", 1), "trial");
        assert_eq!(pluralize("trial", 3), "trials");
    }
}
