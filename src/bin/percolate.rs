use clap::Parser;
use colored::Colorize;
use percolate_core::cli::{self, Cli};
use percolate_core::exit::PercolateExit;

fn main() -> PercolateExit {
    let cli = Cli::parse();

    match cli::handlers::handle_run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            PercolateExit::Error
        }
    }
}
