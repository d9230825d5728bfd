#![no_main]

use arbitrary::Arbitrary;
use jsonsift::{
    ExtractError, ExtractOptions, Extractor, SkipPolicy, TokenizerOptions, count_tokens, extract,
    specs::{SCHEMA, SpecsField, SpecsRecord},
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Node {
    Null,
    Bool(bool),
    Int(i32),
    Str(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

#[derive(Arbitrary, Debug)]
enum Input<'a> {
    /// Arbitrary bytes with arbitrary options: must never panic.
    Raw {
        bytes: &'a [u8],
        capacity: u8,
        strict: bool,
        token_skip: bool,
        validate_arity: bool,
        strict_booleans: bool,
    },
    /// A well-formed object, duplicates and all: must extract, and agree with
    /// `serde_json` on the top-level flag.
    Object(Vec<(String, Node)>),
}

/// Serializes without a map in between, so key order and duplicate keys
/// survive.
fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Int(n) => out.push_str(&n.to_string()),
        Node::Str(s) => out.push_str(&serde_json::to_string(s).unwrap()),
        Node::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_node(item, out);
            }
            out.push(']');
        }
        Node::Object(entries) => write_object(entries, out),
    }
}

fn write_object(entries: &[(String, Node)], out: &mut String) {
    out.push('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&serde_json::to_string(key).unwrap());
        out.push(':');
        write_node(value, out);
    }
    out.push('}');
}

fn check_raw(bytes: &[u8], capacity: usize, options: ExtractOptions) {
    let Ok(mut extractor) = Extractor::with_options(SCHEMA, capacity, options) else {
        return;
    };
    let mut record = SpecsRecord::default();
    if extractor.extract_into(bytes, &mut record).is_err() {
        assert_eq!(record, SpecsRecord::default());
    }
}

fn check_object(entries: &[(String, Node)]) {
    let mut doc = String::new();
    write_object(entries, &mut doc);
    assert!(serde_json::from_str::<serde_json::Value>(&doc).is_ok());

    let capacity = count_tokens(doc.as_bytes(), TokenizerOptions::default()).unwrap();
    let extraction = match extract::<SpecsRecord>(doc.as_bytes(), SCHEMA, capacity) {
        Ok(extraction) => extraction,
        Err(ExtractError::TokenizerFailure(err)) => panic!("valid JSON rejected: {err}\n{doc}"),
        Err(err) => panic!("{err}"),
    };

    let flags: Vec<&Node> = entries
        .iter()
        .filter(|(key, _)| key == "Test")
        .map(|(_, value)| value)
        .collect();
    if flags.iter().all(|value| matches!(value, Node::Bool(_))) {
        let expected = matches!(flags.last(), Some(Node::Bool(true)));
        assert_eq!(extraction.record().test, expected, "{doc}");
        assert_eq!(
            extraction.missing().contains(&SpecsField::Test),
            flags.is_empty(),
            "{doc}"
        );
    }
}

fuzz_target!(|input: Input<'_>| {
    match input {
        Input::Raw {
            bytes,
            capacity,
            strict,
            token_skip,
            validate_arity,
            strict_booleans,
        } => {
            let options = ExtractOptions {
                tokenizer: TokenizerOptions { strict },
                skip: if token_skip {
                    SkipPolicy::Token
                } else {
                    SkipPolicy::Subtree
                },
                validate_arity,
                strict_booleans,
            };
            check_raw(bytes, usize::from(capacity), options);
        }
        Input::Object(entries) => check_object(&entries),
    }
});
