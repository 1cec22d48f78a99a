//! wordgrid CLI
//!
//! Reads a sentence, prints its words as a grid of columns and the row-by-row encoding.

use std::io::{BufRead, Write};

use clap::Parser;
use growstr::GrowableString;
use tracing::info;
use wordgrid::{encode, logging, render, transform, Result};

#[derive(Debug, Parser)]
#[command(name = "wordgrid")]
#[command(about = "Encode a sentence by reading its words column by column", long_about = None)]
struct Cli {
    /// Sentence to encode; one line is read from stdin when absent
    #[arg(long)]
    text: Option<String>,

    /// Print the word grid before the encoding
    #[arg(long)]
    grid: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

fn run(cli: Cli) -> Result<()> {
    let input = match cli.text {
        Some(text) => text,
        None => read_line()?,
    };
    let text = GrowableString::try_from(input.as_str())?;

    let grid = transform(&text)?;
    info!(
        words = grid.columns(),
        longest = grid.rows(),
        "built word grid"
    );

    let mut stdout = std::io::stdout().lock();
    if cli.grid {
        write!(stdout, "{}", render(&grid)?)?;
    }
    writeln!(stdout, "{}", encode(&grid)?)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
