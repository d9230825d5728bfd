//! Scope tracking by offset comparison.
//!
//! Because tokens are in pre-order and every descendant of a container starts
//! inside the container's byte range, "still inside" is a single comparison:
//! `token.start < scope.end`. No parent links, no depth counters.

use alloc::vec::Vec;

use log::trace;

use crate::token::{Token, TokenStream};

/// Byte range `[start, end)` of a container and everything nested in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    end: usize,
}

impl Scope {
    /// The scope of the container at `index`, or `None` if that token is not
    /// an object or array.
    #[must_use]
    pub fn of(stream: &TokenStream<'_>, index: usize) -> Option<Self> {
        let token = stream.get(index)?;
        token.kind().is_container().then(|| Self::covering(token))
    }

    /// The byte range of any token, container or not.
    #[must_use]
    pub fn covering(token: &Token) -> Self {
        Self { end: token.end() }
    }

    /// Exclusive end offset.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        token.start() < self.end
    }

    /// First index at or after `from` whose token lies outside this scope,
    /// or the stream length.
    #[must_use]
    pub fn skip(&self, stream: &TokenStream<'_>, from: usize) -> usize {
        let tokens = stream.tokens();
        let from = from.min(tokens.len());
        from + tokens[from..].iter().take_while(|t| self.contains(t)).count()
    }
}

/// Index just past the value at `index` and all of its descendants.
///
/// Scalars occupy one slot; containers are skipped in bulk.
#[must_use]
pub fn skip_value(stream: &TokenStream<'_>, index: usize) -> usize {
    match stream.get(index) {
        Some(token) => Scope::covering(token).skip(stream, index + 1),
        None => stream.len(),
    }
}

/// Stack of open scopes, each carrying a payload (the rules active inside
/// it).
///
/// The root scope is never popped. Nested scopes are pushed on entry and
/// popped lazily, when the walk reaches the first token that starts at or past
/// their end.
#[derive(Debug)]
pub(crate) struct ScopeStack<T> {
    root: (Scope, T),
    nested: Vec<(Scope, T)>,
}

impl<T: Copy> ScopeStack<T> {
    pub(crate) fn new(root: Scope, payload: T, depth: usize) -> Self {
        Self {
            root: (root, payload),
            nested: Vec::with_capacity(depth.saturating_sub(1)),
        }
    }

    pub(crate) fn push(&mut self, scope: Scope, payload: T) {
        self.nested.push((scope, payload));
    }

    /// Innermost open scope and its payload.
    pub(crate) fn current(&self) -> (Scope, T) {
        *self.nested.last().unwrap_or(&self.root)
    }

    pub(crate) fn depth(&self) -> usize {
        1 + self.nested.len()
    }

    /// Pops every nested scope that `token` lies outside of. Returns `false`
    /// when the token is outside the root scope as well.
    pub(crate) fn settle(&mut self, token: &Token) -> bool {
        while let Some((scope, _)) = self.nested.last() {
            if scope.contains(token) {
                return true;
            }
            trace!("leaving scope ending at byte {}", scope.end());
            self.nested.pop();
        }
        self.root.0.contains(token)
    }
}
