//! Binary crate for the `weather-predict` command-line tool.
//!
//! This crate focuses on:
//! - Reading the city name from standard input
//! - Running the geocode -> current weather -> prediction sequence
//! - Human-friendly output and exit codes

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod driver;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
