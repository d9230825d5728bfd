//! Reference schema: a device specification with two numeric ranges, two
//! colors and a test flag.
//!
//! ```text
//! {
//!   "Specs": {
//!     "Range": { "voltage": ["-30", "750"], "current": ["0", "20"] },
//!     "colors": ["blue", "black"]
//!   },
//!   "Test": true
//! }
//! ```

use core::fmt;

use crate::{
    decode::BoundedStr,
    schema::{Record, Rule, Schema, Slot},
};

/// Output slots of [`SpecsRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecsField {
    VoltageMin,
    VoltageMax,
    CurrentMin,
    CurrentMax,
    Color0,
    Color1,
    Test,
}

pub static SCHEMA: Schema<'static, SpecsField> = Schema::new(&[
    Rule::object(
        "Specs",
        &[
            Rule::object(
                "Range",
                &[
                    Rule::array(
                        "voltage",
                        &[
                            Slot::integer(SpecsField::VoltageMin),
                            Slot::integer(SpecsField::VoltageMax),
                        ],
                    ),
                    Rule::array(
                        "current",
                        &[
                            Slot::integer(SpecsField::CurrentMin),
                            Slot::integer(SpecsField::CurrentMax),
                        ],
                    ),
                ],
            ),
            Rule::array(
                "colors",
                &[Slot::text(SpecsField::Color0), Slot::text(SpecsField::Color1)],
            ),
        ],
    ),
    Rule::boolean("Test", SpecsField::Test),
]);

/// Inclusive `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub struct SpecsRecord {
    pub voltage: Range,
    pub current: Range,
    pub colors: [BoundedStr<64>; 2],
    pub test: bool,
}

impl Record for SpecsRecord {
    type Field = SpecsField;

    fn put_integer(&mut self, field: SpecsField, value: i64) {
        match field {
            SpecsField::VoltageMin => self.voltage.min = value,
            SpecsField::VoltageMax => self.voltage.max = value,
            SpecsField::CurrentMin => self.current.min = value,
            SpecsField::CurrentMax => self.current.max = value,
            SpecsField::Color0 | SpecsField::Color1 | SpecsField::Test => {}
        }
    }

    fn put_text(&mut self, field: SpecsField, span: &[u8]) {
        match field {
            SpecsField::Color0 => self.colors[0].capture(span),
            SpecsField::Color1 => self.colors[1].capture(span),
            _ => {}
        }
    }

    fn put_boolean(&mut self, field: SpecsField, value: bool) {
        if field == SpecsField::Test {
            self.test = value;
        }
    }
}

/// The results block: ranges, colors, and a `Test` line only when set.
impl fmt::Display for SpecsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Results =====")?;
        writeln!(f, "Voltage: [{}, {}]", self.voltage.min, self.voltage.max)?;
        writeln!(f, "Current: [{}, {}]", self.current.min, self.current.max)?;
        write!(f, "Colors: [{}, {}]", self.colors[0], self.colors[1])?;
        if self.test {
            write!(f, "\nTest: true")?;
        }
        Ok(())
    }
}

/// Every field present, in the expected order.
pub const COMPLETE: &str = r#"{
  "Specs":
  {
    "Range":
    {
      "voltage": ["-30","750"],
      "current": ["0", "20"]
    },
    "colors": ["blue", "black"]
  },
  "Test":true
}"#;

/// Every field present, reordered, with a missing and a trailing comma.
pub const REORDERED: &str = r#"{
  "Specs":
  {
    "colors": ["orange", "black"],
    "Range":
    {
      "current": ["10", "45"]
      "voltage": ["-35","150"],
    }
  },
  "Test":true
}"#;

/// Same shape under different top-level names: nothing matches.
pub const MISSING_TARGET: &str = r#"{
  "Settings":
  {
    "colors": ["orange", "black"],
    "Range":
    {
      "current": ["10", "45"]
      "voltage": ["-35","150"],
    }
  },
  "TestData":true
}"#;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn schema_names_every_field_once() {
        assert_eq!(SCHEMA.depth(), 3);
        assert_eq!(
            SCHEMA.fields(),
            [
                SpecsField::VoltageMin,
                SpecsField::VoltageMax,
                SpecsField::CurrentMin,
                SpecsField::CurrentMax,
                SpecsField::Color0,
                SpecsField::Color1,
                SpecsField::Test,
            ]
        );
    }

    #[test]
    fn test_line_only_when_set() {
        let mut record = SpecsRecord::default();
        assert_eq!(
            record.to_string(),
            "===== Results =====\nVoltage: [0, 0]\nCurrent: [0, 0]\nColors: [, ]"
        );
        record.put_boolean(SpecsField::Test, true);
        assert!(record.to_string().ends_with("Colors: [, ]\nTest: true"));
    }

    #[test]
    fn mismatched_decoders_are_ignored() {
        let mut record = SpecsRecord::default();
        record.put_integer(SpecsField::Color0, 5);
        record.put_text(SpecsField::VoltageMin, b"12");
        record.put_boolean(SpecsField::CurrentMax, true);
        assert_eq!(record, SpecsRecord::default());
    }
}
