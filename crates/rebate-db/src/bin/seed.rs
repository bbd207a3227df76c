//! # Sample Catalog Writer
//!
//! Writes the bundled sample catalog as JSON, as a starting point for a
//! real catalog file.
//!
//! ## Usage
//! ```bash
//! # Print to stdout
//! cargo run -p rebate-db --bin seed
//!
//! # Write to a file
//! cargo run -p rebate-db --bin seed -- --out ./catalog.json
//! ```

use std::env;
use std::fs;
use std::process;

use rebate_db::{sample_catalog, DataStore};

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Write { out: Option<String> },
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut out: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => match args.get(i + 1) {
                Some(path) if !path.starts_with('-') => {
                    out = Some(path.clone());
                    i += 1;
                }
                _ => return Err(format!("{} needs a PATH", args[i])),
            },
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(Command::Write { out })
}

fn print_usage() {
    println!("Rebate Sample Catalog Writer");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -o, --out <PATH>   Write the catalog to PATH instead of stdout");
    println!("  -h, --help         Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let out = match parse_args(&args) {
        Ok(Command::Write { out }) => out,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Usage: seed [--out <PATH>]");
            process::exit(2);
        }
    };

    let catalog = sample_catalog();
    let json = catalog.to_json_pretty()?;

    match out {
        Some(path) => {
            fs::write(&path, json)?;

            // Read it back the way the CLI will
            let store = DataStore::open(&path)?;
            let (rebates, products) = store.size()?;
            eprintln!("Wrote {path}: {rebates} rebates, {products} products");
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("seed")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_writes_to_stdout() {
        assert_eq!(parse_args(&args(&[])), Ok(Command::Write { out: None }));
    }

    #[test]
    fn test_out_takes_a_path() {
        assert_eq!(
            parse_args(&args(&["--out", "catalog.json"])),
            Ok(Command::Write {
                out: Some("catalog.json".to_string())
            })
        );
        assert_eq!(
            parse_args(&args(&["-o", "c.json"])),
            Ok(Command::Write {
                out: Some("c.json".to_string())
            })
        );
    }

    #[test]
    fn test_out_without_path_is_an_error() {
        assert!(parse_args(&args(&["--out"])).is_err());
        assert!(parse_args(&args(&["--out", "--help"])).is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert_eq!(
            parse_args(&args(&["--output", "x.json"])),
            Err("unknown argument: --output".to_string())
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["-h"])), Ok(Command::Help));
    }
}
