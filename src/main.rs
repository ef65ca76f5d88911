use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod convert;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("circos_bands=debug,info")
    } else {
        EnvFilter::new("circos_bands=warn")
    };

    // stdout carries band lines, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::run(&cli)?;

    Ok(())
}
