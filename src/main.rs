use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

use coverage_summary::cli::args::{Args, Config};
use coverage_summary::cli::summary;

fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries the summary, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Args::parse());
    let output = summary::run(&config)?;
    println!("{output}");

    Ok(())
}
