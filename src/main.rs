use std::io::{self, BufRead};
use std::process;

use clap::Parser;

use cxml_rust::error::CxmlError;
use cxml_rust::translate;

/// Translate compact CXML expressions into XML
#[derive(Parser, Debug)]
#[command(name = "cxml", version, about)]
struct Args {
    /// Expressions to translate. Each non-blank line of stdin is translated when none are given.
    expressions: Vec<String>,

    /// Re-read every generated document as XML and fail if it is not well-formed
    #[arg(long)]
    check: bool,
}

#[derive(Debug)]
enum Failure {
    Translate(CxmlError),
    Check(roxmltree::Error),
}

fn run(cxml: &str, check: bool) -> Result<String, Failure> {
    let xml = translate(cxml).map_err(Failure::Translate)?;
    if check {
        roxmltree::Document::parse(&xml).map_err(Failure::Check)?;
        log::debug!("'{}' produced well-formed XML", cxml);
    }
    Ok(xml)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let expressions = if args.expressions.is_empty() {
        let stdin = io::stdin();
        let lines: Result<Vec<String>, io::Error> = stdin.lock().lines().collect();
        match lines {
            Ok(lines) => lines.into_iter().filter(|l| !l.trim().is_empty()).collect(),
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
    } else {
        args.expressions
    };

    let mut failed = false;
    for cxml in &expressions {
        match run(cxml, args.check) {
            Ok(xml) => print!("{}", xml),
            Err(Failure::Translate(err)) => {
                eprintln!("Error: {}", err);
                failed = true;
            }
            Err(Failure::Check(err)) => {
                eprintln!("Error: '{}' did not produce well-formed XML: {}", cxml, err);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
}
