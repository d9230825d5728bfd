//! Extraction schemas as static data.
//!
//! A [`Schema`] is a tree of [`Rule`]s. Each rule binds a key, within the
//! scope of its parent rule, to what the key's value must look like and where
//! the decoded result goes. Adding a field means adding a table entry, not a
//! branch in the walker.
//!
//! ```rust
//! use jsonsift::{Rule, Schema, Slot};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Field {
//!     Low,
//!     High,
//!     Enabled,
//! }
//!
//! static SCHEMA: Schema<'static, Field> = Schema::new(&[
//!     Rule::object("limits", &[Rule::array(
//!         "range",
//!         &[Slot::integer(Field::Low), Slot::integer(Field::High)],
//!     )]),
//!     Rule::boolean("enabled", Field::Enabled),
//! ]);
//!
//! assert_eq!(SCHEMA.depth(), 2);
//! assert_eq!(SCHEMA.fields(), [Field::Low, Field::High, Field::Enabled]);
//! ```

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::token::TokenKind;

/// Destination of decoded values.
///
/// `Field` names an output slot. The walker never reads a record back; it only
/// writes the slots a rule matched, so whatever `Default` produces is what an
/// absent field looks like.
pub trait Record: Default {
    type Field: Copy + PartialEq + Debug;

    fn put_integer(&mut self, field: Self::Field, value: i64);
    fn put_text(&mut self, field: Self::Field, span: &[u8]);
    fn put_boolean(&mut self, field: Self::Field, value: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    Integer,
    Text,
    Boolean,
}

/// A decoder paired with the field it writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot<F> {
    pub decoder: Decoder,
    pub field: F,
}

impl<F> Slot<F> {
    #[must_use]
    pub const fn integer(field: F) -> Self {
        Self {
            decoder: Decoder::Integer,
            field,
        }
    }

    #[must_use]
    pub const fn text(field: F) -> Self {
        Self {
            decoder: Decoder::Text,
            field,
        }
    }

    #[must_use]
    pub const fn boolean(field: F) -> Self {
        Self {
            decoder: Decoder::Boolean,
            field,
        }
    }
}

/// What a matched key's value must be, and what to do with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action<'s, F> {
    /// The value is an object; apply the nested rules inside it.
    Descend(&'s [Rule<'s, F>]),
    /// The value is an array of exactly `slots.len()` elements, decoded in
    /// order.
    Array(&'s [Slot<F>]),
    /// The value is a single token of the given kind.
    Scalar(TokenKind, Slot<F>),
}

impl<F> Action<'_, F> {
    /// Token kind the value must have for the rule to apply.
    #[must_use]
    pub fn expects(&self) -> TokenKind {
        match self {
            Action::Descend(_) => TokenKind::Object,
            Action::Array(_) => TokenKind::Array,
            Action::Scalar(kind, _) => *kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule<'s, F> {
    pub key: &'s str,
    pub action: Action<'s, F>,
}

impl<'s, F> Rule<'s, F> {
    #[must_use]
    pub const fn object(key: &'s str, rules: &'s [Rule<'s, F>]) -> Self {
        Self {
            key,
            action: Action::Descend(rules),
        }
    }

    #[must_use]
    pub const fn array(key: &'s str, slots: &'s [Slot<F>]) -> Self {
        Self {
            key,
            action: Action::Array(slots),
        }
    }

    /// A `true`/`false` primitive.
    #[must_use]
    pub const fn boolean(key: &'s str, field: F) -> Self {
        Self {
            key,
            action: Action::Scalar(TokenKind::Primitive, Slot::boolean(field)),
        }
    }

    /// A numeric primitive.
    #[must_use]
    pub const fn integer(key: &'s str, field: F) -> Self {
        Self {
            key,
            action: Action::Scalar(TokenKind::Primitive, Slot::integer(field)),
        }
    }

    /// A string value.
    #[must_use]
    pub const fn text(key: &'s str, field: F) -> Self {
        Self {
            key,
            action: Action::Scalar(TokenKind::String, Slot::text(field)),
        }
    }
}

/// Root rule set, applied to the document's top-level object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema<'s, F> {
    rules: &'s [Rule<'s, F>],
}

impl<'s, F: Copy> Schema<'s, F> {
    #[must_use]
    pub const fn new(rules: &'s [Rule<'s, F>]) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &'s [Rule<'s, F>] {
        self.rules
    }

    /// Number of nested rule sets on the longest path, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        fn depth_of<F>(rules: &[Rule<'_, F>]) -> usize {
            1 + rules
                .iter()
                .filter_map(|rule| match rule.action {
                    Action::Descend(nested) => Some(depth_of(nested)),
                    _ => None,
                })
                .max()
                .unwrap_or(0)
        }
        depth_of(self.rules)
    }

    /// Every field the schema can write, in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<F> {
        fn collect<F: Copy>(rules: &[Rule<'_, F>], out: &mut Vec<F>) {
            for rule in rules {
                match rule.action {
                    Action::Descend(nested) => collect(nested, out),
                    Action::Array(slots) => out.extend(slots.iter().map(|slot| slot.field)),
                    Action::Scalar(_, slot) => out.push(slot.field),
                }
            }
        }
        let mut out = Vec::new();
        collect(self.rules, &mut out);
        out
    }
}
