use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod converter;

/// A subcommand that converts Celsius to Fahrenheit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    converter::run(&mut stdin.lock(), &mut stdout.lock())
        .context("temperature conversion failed")?;

    Ok(())
}
