use alloc::vec::Vec;

use log::debug;

use crate::{
    arena::TokenArena,
    error::ExtractError,
    options::ExtractOptions,
    schema::{Record, Schema},
    walker,
};

/// Result of a successful extraction.
///
/// Absence is not an error: a document missing some schema keys still
/// yields a record, with the unmatched fields left at their defaults and
/// named in `missing`.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<R: Record> {
    /// Every field the schema names was written.
    Complete(R),
    /// Some fields were not found, or had the wrong shape.
    Partial { record: R, missing: Vec<R::Field> },
}

impl<R: Record> Extraction<R> {
    fn new(record: R, completeness: Completeness<R::Field>) -> Self {
        match completeness {
            Completeness::Complete => Extraction::Complete(record),
            Completeness::Partial { missing } => Extraction::Partial { record, missing },
        }
    }

    #[must_use]
    pub fn record(&self) -> &R {
        match self {
            Extraction::Complete(record) | Extraction::Partial { record, .. } => record,
        }
    }

    #[must_use]
    pub fn into_record(self) -> R {
        match self {
            Extraction::Complete(record) | Extraction::Partial { record, .. } => record,
        }
    }

    /// Fields left at their defaults, in schema order.
    #[must_use]
    pub fn missing(&self) -> &[R::Field] {
        match self {
            Extraction::Complete(_) => &[],
            Extraction::Partial { missing, .. } => missing,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Extraction::Complete(_))
    }
}

/// Whether [`Extractor::extract_into`] wrote every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness<F> {
    Complete,
    Partial { missing: Vec<F> },
}

impl<F> Completeness<F> {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Completeness::Complete)
    }
}

/// Reusable extraction pipeline: a schema, a fixed-capacity token arena and
/// the options that drive both passes.
///
/// ```rust
/// use jsonsift::{specs::{SCHEMA, SpecsRecord}, Extractor};
///
/// let mut extractor = Extractor::new(SCHEMA, 64)?;
/// let doc = br#"{"Specs":{"Range":{"voltage":[-30,750],"current":[0,5]},"colors":["red","black"]}}"#;
/// let extraction = extractor.extract::<SpecsRecord>(doc)?;
/// // No "test" key, so the boolean is missing.
/// assert!(!extraction.is_complete());
/// assert_eq!(extraction.record().voltage.max, 750);
/// # Ok::<(), jsonsift::ExtractError>(())
/// ```
#[derive(Debug)]
pub struct Extractor<'s, F> {
    schema: Schema<'s, F>,
    arena: TokenArena,
    options: ExtractOptions,
}

impl<'s, F: Copy + PartialEq + core::fmt::Debug> Extractor<'s, F> {
    /// Creates an extractor with default options and room for `capacity`
    /// tokens per document.
    ///
    /// # Errors
    ///
    /// [`ExtractError::AllocationFailure`] if the token arena cannot be
    /// allocated.
    pub fn new(schema: Schema<'s, F>, capacity: usize) -> Result<Self, ExtractError> {
        Self::with_options(schema, capacity, ExtractOptions::default())
    }

    /// # Errors
    ///
    /// [`ExtractError::AllocationFailure`] if the token arena cannot be
    /// allocated.
    pub fn with_options(
        schema: Schema<'s, F>,
        capacity: usize,
        options: ExtractOptions,
    ) -> Result<Self, ExtractError> {
        let arena = TokenArena::with_capacity(capacity).inspect_err(|err| debug!("{err}"))?;
        Ok(Self {
            schema,
            arena,
            options,
        })
    }

    #[must_use]
    pub fn schema(&self) -> &Schema<'s, F> {
        &self.schema
    }

    #[must_use]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Number of tokens a single document may use.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Extracts into a fresh, defaulted record.
    ///
    /// # Errors
    ///
    /// See [`extract_into`](Self::extract_into).
    pub fn extract<R: Record<Field = F>>(&mut self, src: &[u8]) -> Result<Extraction<R>, ExtractError> {
        let mut record = R::default();
        let completeness = self.extract_into(src, &mut record)?;
        Ok(Extraction::new(record, completeness))
    }

    /// Extracts into an existing record, overwriting only the fields found.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::TokenizerFailure`] when `src` does not tokenize
    ///   within the arena's capacity.
    /// - [`ExtractError::EmptyOrInvalidDocument`] when the root is not an
    ///   object.
    ///
    /// `record` is not modified when an error is returned.
    pub fn extract_into<R: Record<Field = F>>(
        &mut self,
        src: &[u8],
        record: &mut R,
    ) -> Result<Completeness<F>, ExtractError> {
        let stream = self
            .arena
            .tokenize(src, self.options.tokenizer)
            .inspect_err(|err| debug!("aborting extraction: {err}"))?;

        let written = walker::walk(&stream, &self.schema, record, &self.options)?;
        let missing: Vec<F> = self
            .schema
            .fields()
            .into_iter()
            .filter(|field| !written.contains(field))
            .collect();

        if missing.is_empty() {
            Ok(Completeness::Complete)
        } else {
            debug!("extraction partial, missing {missing:?}");
            Ok(Completeness::Partial { missing })
        }
    }
}

/// One-shot extraction with default options.
///
/// Allocates an arena of `capacity` tokens, tokenizes `src`, walks it with
/// `schema` and releases the arena.
///
/// # Errors
///
/// Any [`ExtractError`]; the record is only produced on success.
pub fn extract<R: Record>(
    src: &[u8],
    schema: Schema<'_, R::Field>,
    capacity: usize,
) -> Result<Extraction<R>, ExtractError> {
    Extractor::new(schema, capacity)?.extract(src)
}
