/// Configuration for the tokenizer.
///
/// # Examples
///
/// ```rust
/// use jsonsift::TokenizerOptions;
///
/// let lenient = TokenizerOptions { strict: false };
/// assert!(TokenizerOptions::default().strict);
/// # let _ = lenient;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Whether to reject input that is not shaped like JSON.
    ///
    /// In strict mode a primitive must start with `-`, a digit, `t`, `f` or
    /// `n`, must be followed by a delimiter, and can never be an object key.
    /// Containers can never be keys either. Any other byte outside a string
    /// is reported as an invalid character.
    ///
    /// When `false`, any unrecognized byte starts a primitive and `:` also
    /// terminates one, so `{a: b}` tokenizes as an object with one key.
    ///
    /// # Default
    ///
    /// `true`
    pub strict: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// How the walker moves past an object key that no rule claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Jump over the key and its entire value subtree using offset
    /// comparisons. Keys nested inside unclaimed values are never matched
    /// against the enclosing rules.
    #[default]
    Subtree,
    /// Step one token at a time, so keys nested inside unclaimed values are
    /// still tested against the current rule set.
    Token,
}

/// Configuration for a field extraction pass.
///
/// # Default
///
/// Strict tokenizing, subtree skipping, arity validation on, lenient
/// booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Options forwarded to the tokenizer.
    pub tokenizer: TokenizerOptions,

    /// How unclaimed keys are skipped.
    ///
    /// # Default
    ///
    /// [`SkipPolicy::Subtree`]
    pub skip: SkipPolicy,

    /// Whether a fixed-arity array rule requires the array's child count to
    /// equal the number of slots.
    ///
    /// When `false`, the next N tokens after the array are decoded whatever
    /// they are. A shorter array then feeds tokens from the values that
    /// follow it into the remaining slots.
    ///
    /// # Default
    ///
    /// `true`
    pub validate_arity: bool,

    /// Whether boolean slots accept only the literals `true` and `false`.
    ///
    /// When `false`, any primitive whose first byte is `t` decodes as `true`
    /// and everything else as `false`. When `true`, other primitives leave the
    /// slot untouched.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_booleans: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerOptions::default(),
            skip: SkipPolicy::default(),
            validate_arity: true,
            strict_booleans: false,
        }
    }
}
