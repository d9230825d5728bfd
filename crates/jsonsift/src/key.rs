use crate::token::{Token, TokenKind};

/// Whether `token` is a string whose raw bytes equal `key`.
///
/// Comparison is exact and case-sensitive over the bytes between the quotes.
/// Escapes are not decoded first, so a key written as `"\u0041"` does not
/// match `"A"`.
#[must_use]
pub fn matches(src: &[u8], token: &Token, key: &str) -> bool {
    token.kind() == TokenKind::String
        && src.get(token.start()..token.end()) == Some(key.as_bytes())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const SRC: &[u8] = br#"{"Test":true,"\u0074est":1}"#;

    #[rstest]
    #[case(Token::new(TokenKind::String, 2, 6, 1), "Test", true)]
    #[case(Token::new(TokenKind::String, 2, 6, 1), "test", false)]
    #[case(Token::new(TokenKind::String, 2, 6, 1), "Tes", false)]
    #[case(Token::new(TokenKind::String, 2, 6, 1), "Tests", false)]
    #[case(Token::new(TokenKind::Primitive, 8, 12, 0), "true", false)]
    #[case(Token::new(TokenKind::String, 14, 23, 1), "test", false)]
    #[case(Token::new(TokenKind::String, 14, 23, 1), r"\u0074est", true)]
    #[case(Token::new(TokenKind::String, 20, 99, 1), "t", false)]
    fn compares_raw_spans(#[case] token: Token, #[case] key: &str, #[case] expected: bool) {
        assert_eq!(matches(SRC, &token, key), expected);
    }
}
