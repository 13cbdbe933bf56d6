// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// The two failure modes the dataset model can produce:
//   1. LengthMismatch   — the three columns disagree on row count
//                         (caught once, at construction time)
//   2. IndexOutOfBounds — a row index past the end of the dataset
//
// These are typed (not anyhow) because callers match on them:
// the loaders surface LengthMismatch as a data problem in the
// input file, and the CLI turns IndexOutOfBounds into a usage
// message. Everything above the domain layer wraps them in
// anyhow as usual.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

/// Errors raised by `Dataset` construction and row access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The question/context/response columns are not the same length.
    /// Carries all three observed lengths so the message can say
    /// exactly which column is off, not just "mismatch".
    #[error(
        "inconsistent dataset: {question} questions, {context} contexts, {response} responses"
    )]
    LengthMismatch {
        question: usize,
        context:  usize,
        response: usize,
    },

    /// A row index outside `[0, len)`.
    #[error("row index {index} out of range for dataset with {len} rows")]
    IndexOutOfBounds { index: usize, len: usize },
}
