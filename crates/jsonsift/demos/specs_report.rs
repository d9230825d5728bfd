//! Prints a specs document, whether it could be read, and the extracted
//! results block.
//!
//! ```text
//! cargo run --example specs_report -- --sample reordered
//! RUST_LOG=trace cargo run --example specs_report -- path/to/specs.json
//! ```
#![allow(missing_docs)]

use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser, ValueEnum};
use jsonsift::{
    ExtractError, ExtractOptions, Extractor, SkipPolicy, TokenizerOptions,
    specs::{self, SCHEMA, SpecsRecord},
};

#[derive(Parser, Debug)]
#[command(name = "specs_report", about = "Extract device specs from a JSON document")]
struct Args {
    /// JSON file to read. Omit to use a built-in sample.
    input: Option<String>,

    /// Built-in sample to use when no file is given.
    #[arg(long, value_enum, default_value_t = Sample::Complete)]
    sample: Sample,

    /// Token capacity of the extractor.
    #[arg(long, value_name = "tokens", default_value_t = 128)]
    capacity: usize,

    /// Step into unclaimed values instead of skipping them whole.
    #[arg(long)]
    token_skip: bool,

    /// Accept bare words where JSON wants a number or literal.
    #[arg(long = "no-strict", action = ArgAction::SetFalse, default_value_t = true)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Sample {
    Complete,
    Reordered,
    MissingTarget,
}

impl Sample {
    fn document(self) -> &'static str {
        match self {
            Sample::Complete => specs::COMPLETE,
            Sample::Reordered => specs::REORDERED,
            Sample::MissingTarget => specs::MISSING_TARGET,
        }
    }
}

fn validity(outcome: &Result<(), ExtractError>) -> String {
    match outcome {
        Ok(()) => "This is a valid json file!".to_owned(),
        Err(ExtractError::AllocationFailure { capacity }) => {
            format!("Could not allocate {capacity} tokens.")
        }
        Err(ExtractError::TokenizerFailure(err)) => {
            format!("This is not a json file or it is corrupted ({err}).")
        }
        Err(ExtractError::EmptyOrInvalidDocument) => "This json file is empty.".to_owned(),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let document = match &args.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("cannot read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => args.sample.document().to_owned(),
    };

    println!("Json file:\n\n{document}\n");

    let options = ExtractOptions {
        tokenizer: TokenizerOptions {
            strict: args.strict,
        },
        skip: if args.token_skip {
            SkipPolicy::Token
        } else {
            SkipPolicy::Subtree
        },
        ..ExtractOptions::default()
    };

    let mut record = SpecsRecord::default();
    let outcome = Extractor::with_options(SCHEMA, args.capacity, options)
        .and_then(|mut extractor| extractor.extract_into(document.as_bytes(), &mut record))
        .map(|completeness| log::debug!("{completeness:?}"));

    println!("{}", validity(&outcome));
    println!("\n{record}");

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
