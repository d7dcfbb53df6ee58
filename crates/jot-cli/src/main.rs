//! `jot` CLI — validate, reformat, and query JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"b":1,"a":2}' | jot fmt
//!
//! # Compact a file in place of pretty output
//! jot fmt --compact -i data.json -o data.min.json
//!
//! # Validate, reporting the first parse error
//! jot check -i data.json
//!
//! # Extract a value at a dotted path
//! echo '{"users":[{"name":"ada"}]}' | jot get users.0.name --raw
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jot_core::{parse_with_depth, Value, DEFAULT_MAX_DEPTH, DEFAULT_MAX_WIDTH};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jot", version, about = "JSON validation, formatting, and query CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat a JSON document (pretty by default)
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printing
        #[arg(long)]
        compact: bool,
        /// Indent width for pretty output
        #[arg(long, default_value_t = 4)]
        indent: usize,
    },
    /// Validate a JSON document, reporting the first structural error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum nesting depth to accept
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Print the value at a dotted path (array steps are numeric: users.0.name)
    Get {
        /// Dotted path into the document
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print string results without quotes
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt {
            input,
            output,
            compact,
            indent,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text)?;
            let rendered = if compact {
                value.serialize()
            } else {
                value
                    .serialize_pretty_with(indent, 0, DEFAULT_MAX_WIDTH)
                    .context("document nests too deeply for the indentation budget")?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input, max_depth } => {
            let text = read_input(input.as_deref())?;
            match parse_with_depth(&text, max_depth) {
                Ok(_) => println!("OK"),
                Err(e) => bail!("invalid JSON: {e}"),
            }
        }
        Commands::Get { path, input, raw } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text)?;
            let found = lookup(&value, &path)?;
            let rendered = match found.as_str() {
                Some(s) if raw => s.to_string(),
                _ => found.serialize(),
            };
            write_output(None, &rendered)?;
        }
    }

    Ok(())
}

fn parse_document(text: &str) -> Result<Value> {
    jot_core::parse(text).context("failed to parse JSON input")
}

/// Walk a dotted path. A segment that parses as an index steps into
/// arrays; everything else is an object key.
fn lookup<'v>(value: &'v Value, path: &str) -> Result<&'v Value> {
    let mut current = value;
    for segment in path.split('.') {
        if segment.is_empty() {
            bail!("empty segment in path {path:?}");
        }
        let step = if current.is_array() {
            let index: usize = segment
                .parse()
                .with_context(|| format!("path segment {segment:?} is not an array index"))?;
            current.at(index)
        } else {
            current.at(segment)
        };
        current = step.with_context(|| format!("cannot resolve {segment:?} in path {path:?}"))?;
    }
    Ok(current)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
