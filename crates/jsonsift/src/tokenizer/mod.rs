//! Non-allocating JSON tokenizer.
//!
//! Fills a caller-provided token slice in a single pass and never grows it:
//! running out of slots is reported as [`TokenizeError::NotEnoughTokens`].
//!
//! What it does
//! - Emits one token per object, array, string and primitive, in pre-order.
//! - Tracks the innermost open container without a side stack: an open
//!   container is a token whose end offset is still unset, so closing one
//!   scans backwards for the nearest such token.
//! - Counts children as it goes (`size`). A key takes its value as its only
//!   child, which makes keys distinguishable from string values.
//!
//! What it does not do
//! - Validate separators. Missing or trailing commas are accepted.
//! - Validate primitives beyond their first byte (strict mode) and the
//!   printable-ASCII check.
//! - Unescape strings. Spans point at the raw bytes between the quotes.
//!
//! Passing no token slice ([`count_tokens`]) runs the same scanner and only
//! counts, so a caller can size a buffer exactly.


use log::trace;

use crate::{
    error::TokenizeError,
    options::TokenizerOptions,
    token::{Token, TokenKind},
};

/// End offset of a container whose closing bracket has not been seen yet.
const OPEN: usize = usize::MAX;

/// Tokenizes `src` into `tokens`, returning the number of slots written.
///
/// Slots past the returned count are left as they were.
///
/// # Errors
///
/// - [`TokenizeError::NotEnoughTokens`] when `tokens` is too short.
/// - [`TokenizeError::InvalidCharacter`] for bytes that cannot appear where
///   they do.
/// - [`TokenizeError::UnexpectedEnd`] when a string, container or (strict
///   mode) primitive is unterminated.
pub fn tokenize(
    src: &[u8],
    tokens: &mut [Token],
    options: TokenizerOptions,
) -> Result<usize, TokenizeError> {
    Tokenizer::new(src, Some(tokens), options).run()
}

/// Returns the number of tokens [`tokenize`] needs for `src`.
///
/// Structural checks that depend on token state (bracket matching, key
/// placement) are skipped in this mode, so a successful count does not imply
/// a successful tokenize.
///
/// # Errors
///
/// Same as [`tokenize`], except `NotEnoughTokens`.
pub fn count_tokens(src: &[u8], options: TokenizerOptions) -> Result<usize, TokenizeError> {
    Tokenizer::new(src, None, options).run()
}

struct Tokenizer<'src, 't> {
    src: &'src [u8],
    tokens: Option<&'t mut [Token]>,
    strict: bool,
    pos: usize,
    /// Next free slot; equals the token count so far.
    next: usize,
    /// Token that receives the next value as a child.
    parent: Option<usize>,
}

impl<'src, 't> Tokenizer<'src, 't> {
    fn new(src: &'src [u8], tokens: Option<&'t mut [Token]>, options: TokenizerOptions) -> Self {
        Self {
            src,
            tokens,
            strict: options.strict,
            pos: 0,
            next: 0,
            parent: None,
        }
    }

    fn run(mut self) -> Result<usize, TokenizeError> {
        while self.pos < self.src.len() {
            let byte = self.src[self.pos];
            match byte {
                b'{' => self.open(TokenKind::Object)?,
                b'[' => self.open(TokenKind::Array)?,
                b'}' => self.close(TokenKind::Object)?,
                b']' => self.close(TokenKind::Array)?,
                b'"' => {
                    self.leave_answered_key();
                    self.string()?;
                    self.adopt();
                }
                b'\t' | b'\r' | b'\n' | b' ' => {}
                b':' => self.parent = self.next.checked_sub(1),
                b',' => self.comma(),
                b'-' | b'0'..=b'9' | b't' | b'f' | b'n' if self.strict => {
                    self.check_primitive_position()?;
                    self.primitive()?;
                    self.adopt();
                }
                _ if self.strict => {
                    return Err(TokenizeError::InvalidCharacter { offset: self.pos });
                }
                _ => {
                    self.primitive()?;
                    self.adopt();
                }
            }
            self.pos += 1;
        }

        if let Some(tokens) = self.tokens.as_deref() {
            if tokens[..self.next].iter().any(|t| t.end == OPEN) {
                trace!("input ended with an unclosed container");
                return Err(TokenizeError::UnexpectedEnd);
            }
        }
        Ok(self.next)
    }

    fn alloc(&mut self, kind: TokenKind, start: usize, end: usize) -> Result<usize, TokenizeError> {
        let index = self.next;
        if let Some(tokens) = self.tokens.as_deref_mut() {
            let capacity = tokens.len();
            let slot = tokens
                .get_mut(index)
                .ok_or(TokenizeError::NotEnoughTokens {
                    capacity,
                    offset: self.pos,
                })?;
            *slot = Token::new(kind, start, end, 0);
        }
        self.next += 1;
        Ok(index)
    }

    /// Counts the token just produced as a child of the current parent.
    fn adopt(&mut self) {
        if let (Some(tokens), Some(parent)) = (self.tokens.as_deref_mut(), self.parent) {
            tokens[parent].size += 1;
        }
    }

    fn open(&mut self, kind: TokenKind) -> Result<(), TokenizeError> {
        let offset = self.pos;
        let index = self.alloc(kind, offset, OPEN)?;
        if let (Some(tokens), Some(parent)) = (self.tokens.as_deref_mut(), self.parent) {
            let parent = &mut tokens[parent];
            // A container cannot be a key.
            if self.strict && parent.kind == TokenKind::Object {
                return Err(TokenizeError::InvalidCharacter { offset });
            }
            parent.size += 1;
        }
        self.parent = Some(index);
        Ok(())
    }

    fn close(&mut self, kind: TokenKind) -> Result<(), TokenizeError> {
        let offset = self.pos;
        let Some(tokens) = self.tokens.as_deref_mut() else {
            return Ok(());
        };
        let Some(open) = (0..self.next).rev().find(|&i| tokens[i].end == OPEN) else {
            return Err(TokenizeError::InvalidCharacter { offset });
        };
        if tokens[open].kind != kind {
            return Err(TokenizeError::InvalidCharacter { offset });
        }
        tokens[open].end = offset + 1;
        self.parent = (0..open).rev().find(|&i| tokens[i].end == OPEN);
        Ok(())
    }

    /// After a value, the enclosing container becomes the parent again.
    fn comma(&mut self) {
        let (Some(tokens), Some(parent)) = (self.tokens.as_deref(), self.parent) else {
            return;
        };
        if tokens[parent].kind.is_container() {
            return;
        }
        if let Some(container) = (0..self.next)
            .rev()
            .find(|&i| tokens[i].kind.is_container() && tokens[i].end == OPEN)
        {
            self.parent = Some(container);
        }
    }

    /// A key that already holds its value takes no more children: with the
    /// separator missing, the next string belongs to the enclosing container.
    fn leave_answered_key(&mut self) {
        let (Some(tokens), Some(parent)) = (self.tokens.as_deref(), self.parent) else {
            return;
        };
        if tokens[parent].kind == TokenKind::String && tokens[parent].size != 0 {
            self.comma();
        }
    }

    fn check_primitive_position(&self) -> Result<(), TokenizeError> {
        let (Some(tokens), Some(parent)) = (self.tokens.as_deref(), self.parent) else {
            return Ok(());
        };
        let parent = &tokens[parent];
        // Primitives cannot be keys, and a key takes exactly one value.
        if parent.kind == TokenKind::Object || (parent.kind == TokenKind::String && parent.size != 0)
        {
            return Err(TokenizeError::InvalidCharacter { offset: self.pos });
        }
        Ok(())
    }

    fn string(&mut self) -> Result<(), TokenizeError> {
        let quote = self.pos;
        let mut pos = quote + 1;
        while pos < self.src.len() {
            match self.src[pos] {
                b'"' => {
                    self.alloc(TokenKind::String, quote + 1, pos)?;
                    self.pos = pos;
                    return Ok(());
                }
                b'\\' if pos + 1 < self.src.len() => {
                    pos += 1;
                    match self.src[pos] {
                        b'"' | b'/' | b'\\' | b'b' | b'f' | b'r' | b'n' | b't' => {}
                        b'u' => {
                            let hex_end = (pos + 5).min(self.src.len());
                            if let Some(bad) =
                                (pos + 1..hex_end).find(|&i| !self.src[i].is_ascii_hexdigit())
                            {
                                return Err(TokenizeError::InvalidCharacter { offset: bad });
                            }
                            pos = hex_end - 1;
                        }
                        _ => return Err(TokenizeError::InvalidCharacter { offset: pos }),
                    }
                }
                _ => {}
            }
            pos += 1;
        }
        Err(TokenizeError::UnexpectedEnd)
    }

    fn primitive(&mut self) -> Result<(), TokenizeError> {
        let start = self.pos;
        let mut pos = start;
        while pos < self.src.len() {
            match self.src[pos] {
                b':' if !self.strict => break,
                b'\t' | b'\r' | b'\n' | b' ' | b',' | b']' | b'}' => break,
                byte if !(0x20..0x7f).contains(&byte) => {
                    return Err(TokenizeError::InvalidCharacter { offset: pos });
                }
                _ => pos += 1,
            }
        }
        // Strict mode wants a delimiter after every primitive.
        if pos == self.src.len() && self.strict {
            return Err(TokenizeError::UnexpectedEnd);
        }
        self.alloc(TokenKind::Primitive, start, pos)?;
        self.pos = pos - 1;
        Ok(())
    }
}
