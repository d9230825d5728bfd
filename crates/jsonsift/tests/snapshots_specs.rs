#![expect(missing_docs)]

use core::fmt::Write;

use jsonsift::{
    Extractor,
    specs::{self, SCHEMA, SpecsRecord},
};

fn report(src: &str) -> String {
    let mut extractor = Extractor::new(SCHEMA, 64).unwrap();
    let mut out = String::new();
    match extractor.extract::<SpecsRecord>(src.as_bytes()) {
        Ok(extraction) => {
            writeln!(out, "missing: {:?}", extraction.missing()).unwrap();
            write!(out, "{}", extraction.record()).unwrap();
        }
        Err(err) => write!(out, "error: {err}").unwrap(),
    }
    out
}

#[test]
fn snapshot_complete() {
    insta::assert_snapshot!(report(specs::COMPLETE), @r"
    missing: []
    ===== Results =====
    Voltage: [-30, 750]
    Current: [0, 20]
    Colors: [blue, black]
    Test: true
    ");
}

#[test]
fn snapshot_reordered() {
    insta::assert_snapshot!(report(specs::REORDERED), @r"
    missing: []
    ===== Results =====
    Voltage: [-35, 150]
    Current: [10, 45]
    Colors: [orange, black]
    Test: true
    ");
}

#[test]
fn snapshot_missing_target() {
    insta::assert_snapshot!(report(specs::MISSING_TARGET), @r"
    missing: [VoltageMin, VoltageMax, CurrentMin, CurrentMax, Color0, Color1, Test]
    ===== Results =====
    Voltage: [0, 0]
    Current: [0, 0]
    Colors: [, ]
    ");
}

#[test]
fn snapshot_partial_and_false_test() {
    insta::assert_snapshot!(
        report(r#"{"Test":false,"Specs":{"colors":["teal"],"Range":{"current":["-1","1"]}}}"#),
        @r"
    missing: [VoltageMin, VoltageMax, Color0, Color1]
    ===== Results =====
    Voltage: [0, 0]
    Current: [-1, 1]
    Colors: [, ]
    "
    );
}

#[test]
fn snapshot_errors() {
    insta::assert_snapshot!(report("[]"), @"error: document is empty or its root is not an object");
    insta::assert_snapshot!(
        report(r#"{"Specs":{"colors":["blue" "black"]]}"#),
        @"error: tokenizer failure: invalid character at byte 35"
    );
}
