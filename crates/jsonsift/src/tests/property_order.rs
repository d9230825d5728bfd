use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use quickcheck::QuickCheck;
use serde_json::{Map, Value, json};

use crate::{
    extract,
    specs::{SCHEMA, SpecsRecord},
};

const COLORS: [&str; 4] = ["blue", "black", "orange", "a somewhat longer color name"];

/// Fisher-Yates driven by caller-provided seeds, so quickcheck can shrink it.
fn permute<T>(mut items: Vec<T>, seeds: &[usize]) -> Vec<T> {
    for i in (1..items.len()).rev() {
        let j = seeds.get(i).copied().unwrap_or(0) % (i + 1);
        items.swap(i, j);
    }
    items
}

fn object(entries: Vec<(&str, Value)>) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.into(), value);
    }
    Value::Object(map)
}

#[derive(Debug, Clone)]
struct Inputs {
    voltage: (i32, i32),
    current: (i32, i32),
    colors: (usize, usize),
    test: bool,
}

/// The document for `inputs`, with every object's entries permuted by
/// `seeds`. Unclaimed keys that mimic claimed ones are mixed in at each
/// level.
fn document(inputs: &Inputs, seeds: &[usize]) -> String {
    let range = object(permute(
        vec![
            ("voltage", json!([inputs.voltage.0.to_string(), inputs.voltage.1])),
            ("current", json!([inputs.current.0, inputs.current.1.to_string()])),
            ("Test", json!(false)),
        ],
        seeds,
    ));
    let specs = object(permute(
        vec![
            ("Range", range),
            (
                "colors",
                json!([COLORS[inputs.colors.0 % 4], COLORS[inputs.colors.1 % 4]]),
            ),
            ("Extra", json!({"voltage": [9, 9], "colors": ["no", "no"]})),
        ],
        seeds.get(3..).unwrap_or_default(),
    ));
    let root = object(permute(
        vec![
            ("Specs", specs),
            ("Test", json!(inputs.test)),
            ("Range", json!({"current": [7, 7]})),
            ("Note", json!("Specs")),
        ],
        seeds.get(6..).unwrap_or_default(),
    ));
    serde_json::to_string_pretty(&root).unwrap()
}

/// Property: the extracted record depends on the values, never on the order
/// of keys within an object.
#[test]
fn key_order_does_not_matter_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(
        voltage: (i32, i32),
        current: (i32, i32),
        colors: (usize, usize),
        test: bool,
        seeds: Vec<usize>,
    ) -> bool {
        let inputs = Inputs {
            voltage,
            current,
            colors,
            test,
        };
        let canonical = document(&inputs, &[]);
        let shuffled = document(&inputs, &seeds);

        let expected = extract::<SpecsRecord>(canonical.as_bytes(), SCHEMA, 64).unwrap();
        let actual = extract::<SpecsRecord>(shuffled.as_bytes(), SCHEMA, 64).unwrap();

        let record = actual.record();
        expected == actual
            && actual.is_complete()
            && record.voltage.min == i64::from(voltage.0)
            && record.voltage.max == i64::from(voltage.1)
            && record.current.min == i64::from(current.0)
            && record.current.max == i64::from(current.1)
            && record.colors[0] == COLORS[colors.0 % 4]
            && record.colors[1] == COLORS[colors.1 % 4]
            && record.test == test
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn((i32, i32), (i32, i32), (usize, usize), bool, Vec<usize>) -> bool);
}
