//! Decoders from a token's raw bytes to typed values.
//!
//! Every decoder takes the token's span and nothing beyond it, so none can
//! read past the token's end offset.

use core::fmt;

use bstr::BStr;

/// Parses the leading optionally-signed decimal run of `span`.
///
/// Leading ASCII whitespace is skipped and parsing stops at the first
/// non-digit, so `"42abc"` is 42 and `"abc"` is 0. There is no error channel:
/// non-numeric input is indistinguishable from a literal zero. Values beyond
/// the `i64` range saturate.
#[must_use]
pub fn integer(span: &[u8]) -> i64 {
    let trimmed = span.trim_ascii_start();
    let (negative, digits) = match trimmed.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for &byte in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i64::from(byte - b'0');
        // Accumulate toward the sign so that i64::MIN is reachable.
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Decodes a boolean primitive.
///
/// Lenient: `true` iff the first byte is `t`. Strict: only the exact literals
/// `true` and `false` decode, anything else is `None`.
#[must_use]
pub fn boolean(span: &[u8], strict: bool) -> Option<bool> {
    if strict {
        match span {
            b"true" => Some(true),
            b"false" => Some(false),
            _ => None,
        }
    } else {
        Some(span.first() == Some(&b't'))
    }
}

/// Inline string buffer of `N` bytes that always keeps a trailing zero.
///
/// Holds at most `N - 1` bytes; longer input is cut silently. Truncation is
/// byte-based and may split a multi-byte character, so the contents are
/// exposed as bytes and rendered lossily.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoundedStr<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedStr<N> {
    /// Maximum number of content bytes.
    pub const CAPACITY: usize = N.saturating_sub(1);

    #[must_use]
    pub const fn new() -> Self {
        Self { buf: [0; N], len: 0 }
    }

    /// Replaces the contents with the first `N - 1` bytes of `span`.
    pub fn capture(&mut self, span: &[u8]) {
        let len = span.len().min(Self::CAPACITY);
        self.buf[..len].copy_from_slice(&span[..len]);
        self.buf[len..].fill(0);
        self.len = len;
    }

    #[must_use]
    pub fn from_span(span: &[u8]) -> Self {
        let mut out = Self::new();
        out.capture(span);
        out
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Contents including the terminating zero, if `N > 0`.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..(self.len + 1).min(N)]
    }

    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.capture(&[]);
    }
}

impl<const N: usize> Default for BoundedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl<const N: usize> fmt::Display for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl<const N: usize> PartialEq<str> for BoundedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for BoundedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

#[cfg(any(test, feature = "serde"))]
impl<const N: usize> serde::Serialize for BoundedStr<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self.as_bstr())
    }
}
