use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use lacuna::io_utils::io_cli_error;

/// Reprint an input file line by line, trimmed. Handy for scraping
/// puzzle data out of pastes before feeding it to the solver.
#[derive(Parser)]
struct Args {
    /// Input file to echo
    input: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let file =
        File::open(&args.input).map_err(|e| io_cli_error("opening input file", &args.input, e))?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line.map_err(|e| io_cli_error("reading input file", &args.input, e))?;
        println!("{}", line.trim());
    }
    Ok(())
}
