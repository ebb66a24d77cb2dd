use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process,
};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use rref_solver::{
    input::read_augmented_system_with_prompts,
    presentation::{format_prompt, format_report},
    solver::solver_builder::SolverBuilder,
};

/// Solves a linear system by reducing its augmented matrix to RREF.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read the dimensions and entries from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Treat entries with an absolute value up to this as zero
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Require every coefficient of a row to be zero before calling it inconsistent
    #[arg(short, long, default_value_t = false)]
    pub strict_consistency: bool,

    /// Do not print input prompts
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn run_solver(args: &Args) -> Result<()> {
    let solver = SolverBuilder::new()
        .tolerance(args.tolerance)
        .strict_consistency(args.strict_consistency)
        .build()
        .context("configuring solver")?;
    let matrix = read_augmented_system_with_prompts(open_input(args.input.as_ref())?, |prompt| {
        if !args.quiet {
            println!("{}", format_prompt(prompt));
        }
    })?;
    log::debug!(
        "read a {}x{} augmented matrix",
        matrix.number_of_rows(),
        matrix.number_of_columns()
    );
    let report = solver.solve(matrix);
    println!("{}", format_report(&report));
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_solver(&args) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}
