//! ProjectKit CLI Binary

use clap::Parser;
use projectkit::logging::init_logging;
use projectkit::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(cli.project.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading project configuration: {}", e);
            process::exit(1);
        }
    };

    let mut logging = context.config().logging.clone();
    if let Err(e) = cli
        .apply_log_overrides(&mut logging)
        .and_then(|_| init_logging(&logging, cli.log_file.clone()))
    {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output.text);
            if !output.success {
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
