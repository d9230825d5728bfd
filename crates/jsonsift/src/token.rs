//! Flat token array produced by the tokenizer.
//!
//! A token never copies source text; it records where its lexeme lives in the
//! input (`start..end`) and how many direct children it owns. Tokens appear in
//! pre-order, so the descendants of a container at index `i` occupy the
//! contiguous index range right after `i`, and all of them start inside
//! `tokens[i].start..tokens[i].end`.
//!
//! For strings the span excludes the quotes. An object key is a string token
//! whose `size` is 1: the key owns its value.

use bstr::BStr;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum TokenKind {
    /// Slot never written by the tokenizer (zero-cleared state).
    #[default]
    Undefined,
    Object,
    Array,
    String,
    /// Number, `true`, `false` or `null` (unvalidated in non-strict mode).
    Primitive,
}

impl TokenKind {
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, TokenKind::Object | TokenKind::Array)
    }
}

/// A lexical unit: kind, byte span and direct child count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) size: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, start: usize, end: usize, size: usize) -> Self {
        Self {
            kind,
            start,
            end,
            size,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Inclusive start byte offset.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end byte offset.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of direct children: members for objects, elements for arrays,
    /// 1 for an object key, 0 otherwise.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether this token is a string in key position.
    #[must_use]
    pub fn is_key(&self) -> bool {
        self.kind == TokenKind::String && self.size == 1
    }
}

/// Tokens of one document together with the bytes they point into.
#[derive(Debug, Clone, Copy)]
pub struct TokenStream<'a> {
    src: &'a [u8],
    tokens: &'a [Token],
}

impl<'a> TokenStream<'a> {
    /// Pairs `src` with the `tokens` produced from it.
    ///
    /// The caller guarantees every token span lies within `src`; spans are
    /// clamped on access regardless, so a mismatched pair yields short slices
    /// rather than panics.
    #[must_use]
    pub fn new(src: &'a [u8], tokens: &'a [Token]) -> Self {
        Self { src, tokens }
    }

    #[must_use]
    pub fn src(&self) -> &'a [u8] {
        self.src
    }

    #[must_use]
    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Token> {
        self.tokens.get(index)
    }

    /// The token spanning the whole document, if any.
    #[must_use]
    pub fn root(&self) -> Option<&'a Token> {
        self.tokens.first()
    }

    /// Source bytes of `token`, never extending past its end offset.
    #[must_use]
    pub fn span(&self, token: &Token) -> &'a [u8] {
        let end = token.end.min(self.src.len());
        let start = token.start.min(end);
        &self.src[start..end]
    }

    /// Lossy text view of a token's bytes, for diagnostics.
    #[must_use]
    pub fn text(&self, token: &Token) -> &'a BStr {
        BStr::new(self.span(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_clamped_to_source() {
        let src = b"{\"a\":1}";
        let tokens = [Token::new(TokenKind::Primitive, 5, 40, 0)];
        let stream = TokenStream::new(src, &tokens);
        assert_eq!(stream.span(&tokens[0]), b"1}");
        assert_eq!(stream.text(&tokens[0]), "1}");
    }

    #[test]
    fn zeroed_token_is_undefined() {
        let token = Token::default();
        assert_eq!(token.kind(), TokenKind::Undefined);
        assert!(!token.is_key());
        assert!(!token.kind().is_container());
    }
}
