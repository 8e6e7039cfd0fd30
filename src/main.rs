use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use shape::Rectangle;
use tracing_subscriber::EnvFilter;

mod input;

#[derive(Parser, Debug)]
#[command(name = "rectangle")]
#[command(about = "Build a rectangle and print its dimensions", long_about = None)]
struct Args {
    /// The length of the rectangle.
    #[arg(default_value = "5", allow_negative_numbers = true)]
    length: String,
    /// The width of the rectangle.
    #[arg(default_value = "3", allow_negative_numbers = true)]
    width: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    let args = Args::parse();
    run(&args, std::io::stdout().lock())
}

/// Build the rectangle described by `args` and write its dimensions to `out`,
/// one per line. Nothing is written if the rectangle can't be built.
fn run(args: &Args, mut out: impl Write) -> Result<()> {
    let length = input::classify(&args.length);
    let width = input::classify(&args.width);
    tracing::debug!(%length, %width, "Parsed arguments");

    let rect = Rectangle::from_values(length, width)
        .with_context(|| format!("Building rectangle from length {length} and width {width}"))?;

    tracing::info!(%rect, "Constructed");

    for dimension in &rect {
        writeln!(out, "{dimension}")?;
    }

    out.flush()?;
    Ok(())
}
