use alloc::vec::Vec;

use log::trace;

use crate::{
    error::{ExtractError, TokenizeError},
    options::TokenizerOptions,
    token::{Token, TokenStream},
    tokenizer,
};

/// Fixed-capacity token buffer.
///
/// The capacity is chosen once, up front, and never grows: a document that
/// needs more tokens fails with [`TokenizeError::NotEnoughTokens`] instead of
/// being truncated. An arena can be reused across documents; every
/// [`tokenize`](TokenArena::tokenize) zero-clears it first.
#[derive(Debug)]
pub struct TokenArena {
    slots: Vec<Token>,
}

impl TokenArena {
    /// Allocates room for exactly `capacity` tokens.
    ///
    /// # Errors
    ///
    /// [`ExtractError::AllocationFailure`] if the allocator refuses the
    /// request.
    pub fn with_capacity(capacity: usize) -> Result<Self, ExtractError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ExtractError::AllocationFailure { capacity })?;
        slots.resize(capacity, Token::default());
        Ok(Self { slots })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns every slot to the zeroed, [`Undefined`](crate::TokenKind)
    /// state.
    pub fn reset(&mut self) {
        self.slots.fill(Token::default());
    }

    /// Tokenizes `src` into this arena and returns a view over the result.
    ///
    /// # Errors
    ///
    /// Whatever [`tokenizer::tokenize`] reports.
    pub fn tokenize<'a>(
        &'a mut self,
        src: &'a [u8],
        options: TokenizerOptions,
    ) -> Result<TokenStream<'a>, TokenizeError> {
        self.reset();
        let count = tokenizer::tokenize(src, &mut self.slots, options)?;
        trace!(
            "tokenized {} bytes into {count} of {} tokens",
            src.len(),
            self.slots.len()
        );
        Ok(TokenStream::new(src, &self.slots[..count]))
    }
}
