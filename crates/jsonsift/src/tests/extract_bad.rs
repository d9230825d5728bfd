use rstest::rstest;

use crate::{
    ExtractError, Extractor, TokenizeError, extract,
    specs::{self, SCHEMA, SpecsRecord},
};

fn specs(src: &str, capacity: usize) -> Result<SpecsRecord, ExtractError> {
    extract::<SpecsRecord>(src.as_bytes(), SCHEMA, capacity).map(crate::Extraction::into_record)
}

#[test]
fn too_few_tokens_aborts_with_record_untouched() {
    let mut extractor = Extractor::new(SCHEMA, 10).unwrap();
    let mut record = SpecsRecord::default();
    let err = extractor
        .extract_into(specs::COMPLETE.as_bytes(), &mut record)
        .unwrap_err();
    assert!(matches!(
        err,
        ExtractError::TokenizerFailure(TokenizeError::NotEnoughTokens { capacity: 10, .. })
    ));
    assert_eq!(record, SpecsRecord::default());
}

#[test]
fn exact_capacity_is_enough() {
    let needed =
        crate::count_tokens(specs::COMPLETE.as_bytes(), crate::TokenizerOptions::default()).unwrap();
    assert_eq!(needed, 19);
    assert!(specs(specs::COMPLETE, needed).is_ok());
    assert!(specs(specs::COMPLETE, needed - 1).is_err());
}

#[test]
fn allocation_failure() {
    assert_eq!(
        Extractor::new(SCHEMA, usize::MAX).unwrap_err(),
        ExtractError::AllocationFailure {
            capacity: usize::MAX
        }
    );
}

#[rstest]
#[case::empty("")]
#[case::whitespace(" \r\n\t")]
#[case::array_root(r#"[{"Test":true}]"#)]
#[case::string_root(r#""Specs""#)]
#[case::number_root("1 ")]
fn root_must_be_an_object(#[case] src: &str) {
    assert_eq!(specs(src, 16), Err(ExtractError::EmptyOrInvalidDocument));
}

#[test]
fn empty_object_is_partial_not_an_error() {
    let extraction = extract::<SpecsRecord>(b"{}", SCHEMA, 4).unwrap();
    assert_eq!(extraction.missing(), SCHEMA.fields().as_slice());
    assert_eq!(extraction.into_record(), SpecsRecord::default());
}

#[rstest]
#[case::bare_word(r#"{"Specs":x}"#, TokenizeError::InvalidCharacter { offset: 9 })]
#[case::unclosed(r#"{"Specs":{"#, TokenizeError::UnexpectedEnd)]
#[case::unterminated_string(r#"{"Test":"tru"#, TokenizeError::UnexpectedEnd)]
#[case::stray_closer(r#"{"Test":true}}"#, TokenizeError::InvalidCharacter { offset: 13 })]
#[case::numeric_key(r#"{"Specs":{1:2}}"#, TokenizeError::InvalidCharacter { offset: 10 })]
fn malformed_documents_abort(#[case] src: &str, #[case] expected: TokenizeError) {
    assert_eq!(specs(src, 32), Err(ExtractError::TokenizerFailure(expected)));
}

#[test]
fn errors_render_offsets() {
    use alloc::string::ToString;

    let err = specs(r#"{"Specs":x}"#, 32).unwrap_err();
    assert_eq!(
        err.to_string(),
        "tokenizer failure: invalid character at byte 9"
    );
}
