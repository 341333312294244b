//! Codec errors.

use thiserror::Error;

/// Errors raised when a value does not fit its packed representation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// An index lies outside `1..=max`.
    #[error("index {index} is outside the supported range 1..={max}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Largest supported index.
        max: usize,
    },

    /// A formal symbol component does not fit into a packed slot.
    #[error("formal symbol component {value} does not fit into a packed key")]
    ComponentOverflow {
        /// The offending component.
        value: i64,
    },
}
