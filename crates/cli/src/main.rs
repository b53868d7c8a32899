mod cli;
mod error;
mod report;

use anyhow::Result;
use clap::Parser;
use log::info;
use mergeinsert::{Contiguous, Deque, information_bound};

use crate::cli::Cli;
use crate::error::CliError;
use crate::report::{comparisons_line, first_mismatch, timed, timing_line, values_line};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let input = cli.values;
    info!("sorting {} values", input.len());

    if !cli.quiet {
        println!("{}", values_line("Before:", &input));
    }

    let vec_run = timed::<Contiguous>(&input);
    let deque_run = timed::<Deque>(&input);

    if let Some(index) = first_mismatch(&vec_run.sorted, &deque_run.sorted) {
        return Err(CliError::Mismatch { index }.into());
    }

    if !cli.quiet {
        println!("{}", values_line("After:", &vec_run.sorted));
    }
    println!("{}", timing_line(input.len(), &vec_run));
    println!("{}", timing_line(input.len(), &deque_run));

    if cli.comparisons {
        let bound = information_bound(input.len());
        println!("{}", comparisons_line(&vec_run, bound));
        println!("{}", comparisons_line(&deque_run, bound));
    }

    Ok(())
}
