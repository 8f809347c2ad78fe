// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Opcache analyzer CLI
//!
//! Fetches an opcache status dump and prints one summary block per script.

use std::process::ExitCode;

use clap::Parser;

mod analyze;

const USAGE: &str = "Usage: analyze_opcache <opcache_data_url>";

/// analyze_opcache - Summarize a PHP opcache status endpoint
#[derive(Parser)]
#[command(name = "analyze_opcache")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL serving the opcache status JSON
    pub url: Option<String>,

    /// Enable verbose logging (written to stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Anything after the URL is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let Some(url) = cli.url else {
        println!("{}", USAGE);
        return ExitCode::from(1);
    };

    match analyze::execute(&url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
