#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_sample, print_output};
    use crate::balance::calculator::calculate;

    let args = Args::parse();
    let sample = parse_sample(&args)?;

    let result = calculate(Some(&sample));

    print_output(&sample, &result, &args)?;

    Ok(())
}
