//! Single forward pass over a token stream, applying a [`Schema`].
//!
//! The walker keeps one open scope per schema level it has descended into
//! and pops them lazily, by offset comparison, when the cursor moves past
//! their end. At each step the token under the cursor is tested against the
//! rules of the innermost scope; what happens next depends on the rule's
//! action or, if no rule claims the token, on the [`SkipPolicy`].
//!
//! The walk never allocates in proportion to the document: the scope stack
//! is bounded by the schema's depth and the written-field list by the number
//! of fields the schema names.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::{
    decode,
    error::ExtractError,
    key,
    options::{ExtractOptions, SkipPolicy},
    schema::{Action, Decoder, Record, Rule, Schema, Slot},
    scope::{Scope, ScopeStack, skip_value},
    token::{Token, TokenKind, TokenStream},
};

/// Walks `stream` once, writing every field `schema` matches into `record`.
///
/// Returns the fields that were written, each listed once, in the order they
/// were first written. A field whose key is absent, whose value has the wrong
/// shape, or whose boolean is rejected in strict mode is simply not written.
///
/// # Errors
///
/// [`ExtractError::EmptyOrInvalidDocument`] when the stream is empty or its
/// first token is not an object. The record is untouched in that case.
pub fn walk<R: Record>(
    stream: &TokenStream<'_>,
    schema: &Schema<'_, R::Field>,
    record: &mut R,
    options: &ExtractOptions,
) -> Result<Vec<R::Field>, ExtractError> {
    let Some(root) = stream.root().filter(|root| root.kind() == TokenKind::Object) else {
        debug!(
            "refusing to walk: {}",
            match stream.root() {
                None => "no tokens",
                Some(_) => "root is not an object",
            }
        );
        return Err(ExtractError::EmptyOrInvalidDocument);
    };

    let mut walker = Walker {
        stream,
        options,
        record,
        written: Vec::new(),
    };
    let mut scopes = ScopeStack::new(Scope::covering(root), schema.rules(), schema.depth());

    let mut index = 1;
    while let Some(token) = stream.get(index) {
        if !scopes.settle(token) {
            trace!("stopping at token {index}: past the end of the root object");
            break;
        }
        let (_, rules) = scopes.current();
        index = match walker.step(index, token, rules) {
            Step::Next(next) => next,
            Step::Enter { scope, rules, next } => {
                scopes.push(scope, rules);
                trace!("scope depth {} of {}", scopes.depth(), schema.depth());
                next
            }
        };
    }

    debug!(
        "walk finished: {} fields written from {} tokens",
        walker.written.len(),
        stream.len()
    );
    Ok(walker.written)
}

enum Step<'s, F> {
    Next(usize),
    Enter {
        scope: Scope,
        rules: &'s [Rule<'s, F>],
        next: usize,
    },
}

struct Walker<'w, 'a, R: Record> {
    stream: &'w TokenStream<'a>,
    options: &'w ExtractOptions,
    record: &'w mut R,
    written: Vec<R::Field>,
}

impl<'a, R: Record> Walker<'_, 'a, R> {
    fn step<'s>(
        &mut self,
        index: usize,
        token: &Token,
        rules: &'s [Rule<'s, R::Field>],
    ) -> Step<'s, R::Field> {
        let value_index = index + 1;
        let Some((rule, value)) = self.claim(token, rules, value_index) else {
            return Step::Next(self.skip(index, token));
        };

        match rule.action {
            Action::Descend(nested) => {
                trace!("entering {:?} at token {value_index}", rule.key);
                Step::Enter {
                    scope: Scope::covering(value),
                    rules: nested,
                    next: value_index + 1,
                }
            }
            Action::Array(slots) => Step::Next(self.array(rule.key, value_index, value, slots)),
            Action::Scalar(_, slot) => {
                self.apply(slot, value);
                Step::Next(skip_value(self.stream, value_index))
            }
        }
    }

    /// The first rule whose key is `token` and whose expected kind matches
    /// the token after it.
    fn claim<'s>(
        &self,
        token: &Token,
        rules: &'s [Rule<'s, R::Field>],
        value_index: usize,
    ) -> Option<(&'s Rule<'s, R::Field>, &'a Token)> {
        if !token.is_key() {
            return None;
        }
        let value = self.stream.get(value_index)?;
        let src = self.stream.src();
        rules
            .iter()
            .find(|rule| value.kind() == rule.action.expects() && key::matches(src, token, rule.key))
            .map(|rule| (rule, value))
    }

    fn skip(&self, index: usize, token: &Token) -> usize {
        match self.options.skip {
            SkipPolicy::Token => index + 1,
            // A key owns its value: skip both.
            SkipPolicy::Subtree if token.size() == 1 && !token.kind().is_container() => {
                skip_value(self.stream, index + 1)
            }
            SkipPolicy::Subtree => skip_value(self.stream, index),
        }
    }

    /// Decodes a fixed-arity array and returns the index to continue at.
    fn array(
        &mut self,
        key: &str,
        index: usize,
        array: &Token,
        slots: &[Slot<R::Field>],
    ) -> usize {
        let after = skip_value(self.stream, index);

        if !self.options.validate_arity {
            // Positional: the next N tokens, whatever they are.
            let first = index + 1;
            let last = (first + slots.len()).min(self.stream.len());
            for (slot, token) in slots.iter().zip(&self.stream.tokens()[first..last]) {
                self.apply(*slot, token);
            }
            return last;
        }

        if array.size() != slots.len() {
            trace!(
                "skipping {key:?}: array has {} elements, expected {}",
                array.size(),
                slots.len()
            );
            return after;
        }

        let mut element = index + 1;
        for slot in slots {
            let Some(token) = self.stream.get(element) else {
                break;
            };
            self.apply(*slot, token);
            element = skip_value(self.stream, element);
        }
        after
    }

    fn apply(&mut self, slot: Slot<R::Field>, token: &Token) {
        let span = self.stream.span(token);
        match slot.decoder {
            Decoder::Integer => self.record.put_integer(slot.field, decode::integer(span)),
            Decoder::Text => self.record.put_text(slot.field, span),
            Decoder::Boolean => {
                let Some(value) = decode::boolean(span, self.options.strict_booleans) else {
                    trace!("rejected boolean {:?}", self.stream.text(token));
                    return;
                };
                self.record.put_boolean(slot.field, value);
            }
        }
        if !self.written.contains(&slot.field) {
            self.written.push(slot.field);
        }
    }
}
