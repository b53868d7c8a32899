use std::num::IntErrorKind;

use clap::Parser;

use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "mergeinsert",
    about = "Sort positive integers with Ford-Johnson merge-insertion on Vec and VecDeque",
    version
)]
pub struct Cli {
    /// Positive integers to sort.
    #[arg(
        required = true,
        num_args = 1..,
        allow_negative_numbers = true,
        value_parser = parse_positive
    )]
    pub values: Vec<i32>,

    /// Also report comparison counts against the information-theoretic bound.
    #[arg(short, long)]
    pub comparisons: bool,

    /// Only print timings.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parses one command-line token as an integer in `1..=i32::MAX`.
pub fn parse_positive(token: &str) -> Result<i32, CliError> {
    match token.parse::<i64>() {
        Ok(value) if value <= 0 => Err(CliError::NotPositive(token.to_string())),
        Ok(value) => i32::try_from(value).map_err(|_| CliError::OutOfRange(token.to_string())),
        Err(err) => Err(match err.kind() {
            IntErrorKind::PosOverflow => CliError::OutOfRange(token.to_string()),
            IntErrorKind::NegOverflow => CliError::NotPositive(token.to_string()),
            _ => CliError::NotANumber(token.to_string()),
        }),
    }
}
