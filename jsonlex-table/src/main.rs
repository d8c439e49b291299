use std::fmt::Write as _;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::{fs, process};

use anyhow::{Context, Result};
use clap::Parser;
use jsonlex_core::{analyze_bytes, Token, TokenKind};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ALL_KINDS: [TokenKind; 11] = [
    TokenKind::LeftBrace,
    TokenKind::RightBrace,
    TokenKind::LeftBracket,
    TokenKind::RightBracket,
    TokenKind::Colon,
    TokenKind::Comma,
    TokenKind::WhiteSpace,
    TokenKind::Numeric,
    TokenKind::String,
    TokenKind::Boolean,
    TokenKind::Null,
];

/// Prints the tokens of a JSON document, one row per token.
#[derive(Parser, Debug)]
#[command(name = "jsonlex-table")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file to read, stdin when omitted
    file: Option<PathBuf>,

    /// Leave whitespace tokens out of the table
    #[arg(short, long)]
    skip_whitespace: bool,

    /// Print a count per token kind instead of the table
    #[arg(long)]
    summary: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(cli.file.as_ref())?;
    debug!("read {} bytes", input.len());

    let tokens = analyze_bytes(&input).context("could not decode input")?;
    let out = if cli.summary {
        summary(tokens.iter())
    } else {
        table(
            tokens
                .iter()
                .filter(|token| !cli.skip_whitespace || token.kind != TokenKind::WhiteSpace),
        )
    };

    io::stdout()
        .lock()
        .write_all(out.as_bytes())
        .context("could not write to stdout")
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("could not read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("could not read stdin")?;
            Ok(buf)
        }
    }
}

fn table<'a, 'input: 'a>(tokens: impl Iterator<Item = &'a Token<'input>>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<12}  value", "#", "kind");
    for (index, token) in tokens.enumerate() {
        let _ = writeln!(
            out,
            "{index:>5}  {:<12}  {}",
            token.kind.name(),
            token.text.escape_debug()
        );
    }
    out
}

fn summary<'a, 'input: 'a>(tokens: impl Iterator<Item = &'a Token<'input>>) -> String {
    let mut counts = [0usize; ALL_KINDS.len()];
    let mut total = 0;
    for token in tokens {
        counts[token.kind as usize] += 1;
        total += 1;
    }

    let mut out = String::new();
    for kind in ALL_KINDS {
        let _ = writeln!(out, "{:<12}  {}", kind.name(), counts[kind as usize]);
    }
    let _ = writeln!(out, "{:<12}  {total}", "total");
    out
}
