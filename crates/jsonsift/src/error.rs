use thiserror::Error;

/// Failure reported by the tokenizer before any field is read.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// The token slice filled up before the document ended.
    #[error("not enough tokens: all {capacity} slots used before byte {offset}")]
    NotEnoughTokens { capacity: usize, offset: usize },
    /// A byte that cannot start or continue a token.
    #[error("invalid character at byte {offset}")]
    InvalidCharacter { offset: usize },
    /// The input ended inside a string, primitive or container.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

/// Reasons an extraction aborts without touching the output record.
///
/// A key that is simply missing from the document is not an error; see
/// [`Extraction::Partial`](crate::Extraction::Partial).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The token arena could not be allocated.
    #[error("token buffer allocation failed for {capacity} tokens")]
    AllocationFailure { capacity: usize },
    /// The document did not tokenize; no field was read.
    #[error("tokenizer failure: {0}")]
    TokenizerFailure(#[from] TokenizeError),
    /// No tokens, or the first token is not an object.
    #[error("document is empty or its root is not an object")]
    EmptyOrInvalidDocument,
}
