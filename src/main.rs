//! Binary crate for the `clima` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring the weather, session, and history collaborators
//! - Human-friendly output in the display locale

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    clima_core::init()?;

    let cmd = cli::Cli::parse();
    cmd.run().await
}
