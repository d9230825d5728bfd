#![expect(missing_docs)]

use jsonsift::{
    ExtractOptions, Scope, Token, TokenArena, TokenKind, TokenizerOptions, count_tokens, key,
    skip_value,
    specs::{SCHEMA, SpecsField, SpecsRecord},
    tokenize, walk,
};

const DOC: &str = r#"{"Specs":{"Range":{"voltage":["-30","750"]},"colors":["blue","black"]},"Test":true}"#;

#[test]
fn caller_provided_token_slice() {
    let needed = count_tokens(DOC.as_bytes(), TokenizerOptions::default()).unwrap();
    let mut tokens = vec![Token::default(); needed];
    let count = tokenize(DOC.as_bytes(), &mut tokens, TokenizerOptions::default()).unwrap();
    assert_eq!(count, needed);
    assert_eq!(tokens[0].kind(), TokenKind::Object);
    assert_eq!(tokens[0].size(), 2);
    assert!(key::matches(DOC.as_bytes(), &tokens[1], "Specs"));
}

#[test]
fn arena_stream_and_walk() {
    let mut arena = TokenArena::with_capacity(32).unwrap();
    let stream = arena
        .tokenize(DOC.as_bytes(), TokenizerOptions::default())
        .unwrap();

    // "Specs" object at 2; "Test" follows its subtree.
    let specs = Scope::of(&stream, 2).unwrap();
    let after = skip_value(&stream, 2);
    assert!(!specs.contains(stream.get(after).unwrap()));
    assert_eq!(stream.text(stream.get(after).unwrap()), "Test");

    let mut record = SpecsRecord::default();
    let written = walk(&stream, &SCHEMA, &mut record, &ExtractOptions::default()).unwrap();
    assert_eq!(
        written,
        [
            SpecsField::VoltageMin,
            SpecsField::VoltageMax,
            SpecsField::Color0,
            SpecsField::Color1,
            SpecsField::Test,
        ]
    );
    assert_eq!(record.voltage.min, -30);
    assert_eq!(record.colors[0], "blue");
    assert!(record.test);
}

#[test]
fn decoders_are_public() {
    assert_eq!(jsonsift::decode::integer(b"-30"), -30);
    assert_eq!(jsonsift::decode::boolean(b"true", true), Some(true));
    let color = jsonsift::BoundedStr::<8>::from_span(b"magenta-ish");
    assert_eq!(color, "magenta");
    assert_eq!(color.to_string(), "magenta");
}
