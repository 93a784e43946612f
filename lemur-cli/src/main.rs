//! Lemur CLI - CSS token dump
//!
//! Usage:
//!   lemur <file.css>              Print one line per token with its position
//!   lemur <file.css> --json       Output tokens as JSON
//!   lemur <file.css> --summary    Count tokens per kind
//!   lemur <file.css> --strict     Fail on the first malformed token
//!   lemur --css 'a{color:red}'    Scan an inline string
//!   lemur - < style.css           Read from standard input

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lemur_css::{Token, TokenKind, tokenize, tokenize_strict};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

/// Width of the kind column in the token listing.
const KIND_WIDTH: usize = 15;

#[derive(Debug, Parser)]
#[command(name = "lemur", version, about = "Scan CSS 2.1 into a positioned token stream")]
struct Cli {
    /// CSS file to scan; `-` or nothing reads standard input
    file: Option<PathBuf>,

    /// Scan this CSS text instead of a file
    #[arg(long, conflicts_with = "file")]
    css: Option<String>,

    /// Output tokens as JSON
    #[arg(short, long)]
    json: bool,

    /// Print the number of tokens of each kind
    #[arg(short, long, conflicts_with = "json")]
    summary: bool,

    /// Stop with an error at the first malformed token
    #[arg(long)]
    strict: bool,

    /// Disable colored output, warnings on standard error included
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        owo_colors::set_override(false);
    }
    let source = read_source(&cli)?;

    let tokens = if cli.strict {
        tokenize_strict(&source).context("Malformed CSS")?
    } else {
        tokenize(&source)
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else if cli.summary {
        print_summary(&tokens, !cli.no_color);
    } else {
        println!("=== Tokens ({}) ===", tokens.len());
        for token in &tokens {
            print_token(token, !cli.no_color);
        }
    }

    Ok(())
}

/// Get the CSS text from `--css`, a file, or standard input.
fn read_source(cli: &Cli) -> Result<String> {
    if let Some(css) = &cli.css {
        return Ok(css.clone());
    }
    match &cli.file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Error reading '{}'", path.display())),
        _ => io::read_to_string(io::stdin()).context("Error reading standard input"),
    }
}

fn print_token(token: &Token, color: bool) {
    let position = format!("{:>4}:{:<4}", token.line, token.column);
    let kind = format!("{:<width$}", token.kind.to_string(), width = KIND_WIDTH);
    let value = format!("{:?}", token.value);

    if !color {
        println!("{position} {kind} {value}");
    } else if token.is_malformed() {
        println!("{} {} {value}", position.dimmed(), kind.red().bold());
    } else {
        println!("{} {} {value}", position.dimmed(), kind.cyan());
    }
}

/// Print per-kind counts in declaration order, skipping kinds that never occur.
fn print_summary(tokens: &[Token], color: bool) {
    for kind in TokenKind::iter() {
        let count = tokens.iter().filter(|token| token.kind == kind).count();
        if count == 0 {
            continue;
        }
        let label = format!("{:<width$}", kind.to_string(), width = KIND_WIDTH);
        if color && kind.is_malformed() {
            println!("{} {count}", label.red());
        } else {
            println!("{label} {count}");
        }
    }
    println!("{:<width$} {}", "total", tokens.len(), width = KIND_WIDTH);
}
