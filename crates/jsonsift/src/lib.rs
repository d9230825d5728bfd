//! Bounded-memory extraction of known fields from JSON.
//!
//! A document is tokenized once into a fixed-capacity, flat token array; a
//! single forward walk then applies a [`Schema`] to it, decoding the values
//! of matching keys straight into a caller-defined [`Record`]. Nothing is
//! unescaped, copied or built into a tree along the way.
//!
//! ```rust
//! use jsonsift::specs::{self, SpecsRecord};
//!
//! let extraction = jsonsift::extract::<SpecsRecord>(specs::COMPLETE.as_bytes(), specs::SCHEMA, 64)?;
//! assert!(extraction.is_complete());
//! assert_eq!(extraction.record().colors[1], "black");
//! # Ok::<(), jsonsift::ExtractError>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod arena;
mod error;
mod extract;
mod options;
mod schema;
mod scope;
mod token;
mod tokenizer;
mod walker;

pub mod decode;
pub mod key;
pub mod specs;

#[cfg(test)]
mod tests;

pub use arena::TokenArena;
pub use decode::BoundedStr;
pub use error::{ExtractError, TokenizeError};
pub use extract::{Completeness, Extraction, Extractor, extract};
pub use options::{ExtractOptions, SkipPolicy, TokenizerOptions};
pub use schema::{Action, Decoder, Record, Rule, Schema, Slot};
pub use scope::{Scope, skip_value};
pub use token::{Token, TokenKind, TokenStream};
pub use tokenizer::{count_tokens, tokenize};
pub use walker::walk;
