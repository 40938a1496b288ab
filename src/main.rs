// src/main.rs
//
// rewrap — re-wrap paragraphs in a file to a line width
//
// - The first selected line's leading indent/comment characters (space, tab, # / ; * ! -)
//   are reused as the prefix of every output line; other lines' prefixes are dropped.
// - Blank lines separate paragraphs and come back as one prefix-only blank line.
// - Two spaces after a word ending in '.' when the next word starts with A-Z.
// - Overlong words get their own line and are never split.
//
// CLI flags:
//   -w, --width N          : maximum line length (default 80)
//   -t, --tab-width N      : columns per tab in the prefix (default 8)
//   -l, --lines FIRST:LAST : only rewrap these lines (1-based, inclusive)
// Default: the whole file is rewrapped and written back over the input.
//
// Set RUST_LOG=rewrap=debug to trace what gets selected and reflowed.

use clap::Parser;
use rewrap::{rewrap_selection, Buffer, PreferenceSource, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Maximum line length
    #[arg(short, long, default_value_t = 80)]
    width: usize,

    /// Width of a tab character in the indent
    #[arg(short, long = "tab-width", default_value_t = 8)]
    tab_width: usize,

    /// Only rewrap lines FIRST:LAST (1-based, inclusive); FIRST alone selects one line
    #[arg(short, long, value_parser = parse_line_range)]
    lines: Option<(usize, usize)>,

    /// Input file
    input: PathBuf,

    /// Output file (default: overwrite input)
    output: Option<PathBuf>,
}

impl PreferenceSource for Cli {
    fn max_line_length(&self) -> usize {
        self.width
    }

    fn tab_width(&self) -> usize {
        self.tab_width
    }
}

fn parse_line_range(s: &str) -> std::result::Result<(usize, usize), String> {
    let parse = |n: &str| {
        n.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid line number {n:?}: {e}"))
    };
    match s.split_once(':') {
        Some((first, last)) => Ok((parse(first)?, parse(last)?)),
        None => {
            let line = parse(s)?;
            Ok((line, line))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let src = fs::read_to_string(&cli.input)?;
    let mut doc = Buffer::new(src);

    match cli.lines {
        Some((first, last)) => doc.select_lines(first, last)?,
        None => {
            let len = doc.text().len();
            doc.select(0, len);
        }
    }

    let changed = rewrap_selection(&mut doc, &cli)?;
    info!(input = %cli.input.display(), changed, "rewrap finished");

    let out_path = cli.output.as_ref().unwrap_or(&cli.input);
    fs::write(out_path, doc.into_text())?;
    Ok(())
}
