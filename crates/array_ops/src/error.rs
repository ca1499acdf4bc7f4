use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeqError>;

/// Failures raised by sequence operations.
///
/// Out-of-range and negative indices are never errors; they are normalized.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SeqError {
    /// A reduction without an initial value ran over an empty sequence.
    #[error("{op}() could not be performed with an empty sequence without initial value")]
    EmptyReduction { op: &'static str },

    /// A required sequence handle was unset.
    #[error("sequence argument is unset")]
    NullSequence,
}

/// Unwraps a nullable sequence handle.
pub fn require<S>(seq: Option<S>) -> Result<S> {
    seq.ok_or(SeqError::NullSequence)
}
