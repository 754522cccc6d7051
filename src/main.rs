use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use lacuna::{
    io_utils::{io_cli_error, lacuna_cli_error},
    solve, Params, RunStats,
};

/// Solve gap-sequence puzzles, one `n,k,a,b,c,r` line at a time.
#[derive(Parser)]
struct Args {
    /// Input file with one puzzle per line
    input: PathBuf,
    /// Print the run summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let start_time = Instant::now();
    let mut stats = RunStats::new();

    let file =
        File::open(&args.input).map_err(|e| io_cli_error("opening input file", &args.input, e))?;
    let reader = BufReader::new(file);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| io_cli_error("reading input file", &args.input, e))?;
        stats.tick_line();
        let line = line.trim();
        if line.is_empty() {
            stats.tick_skipped();
            continue;
        }
        let params = Params::parse(line)
            .map_err(|e| lacuna_cli_error(&format!("line {}", number + 1), e))?;
        let answer = solve(&params)
            .map_err(|e| lacuna_cli_error(&format!("line {}", number + 1), e))?;
        writeln!(out, "{answer}")?;
        stats.tick_answer();
    }
    out.flush()?;

    stats.elapsed = start_time.elapsed();
    if args.json {
        eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        stats.report();
    }
    Ok(())
}
