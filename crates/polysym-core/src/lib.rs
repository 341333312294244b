//! # polysym-core
//!
//! Compact term representation for the polysym algebra engine.
//!
//! This crate provides:
//! - Packed words with inline storage for short terms
//! - Bit-set letters for index subsets (Plücker-style minors)
//! - Formal symbols and their compressed keys
//! - The `Pack` sum type of "product of letters" vs. "formal symbol"
//!
//! ## Capacity
//!
//! Words of up to [`WORD_INLINE`] letters live on the stack; longer words
//! spill to the heap. Bit-set letters hold indices `1..=MAX_INDEX`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod formal;
pub mod index_set;
pub mod letter;
pub mod pack;
pub mod word;

#[cfg(test)]
mod proptests;

pub use error::CodecError;
pub use formal::{FormalKey, FormalSymbol};
pub use index_set::{IndexSet, MAX_INDEX};
pub use letter::Letter;
pub use pack::{Pack, PackKey, PACK_INLINE};
pub use word::{PackedWord, CO_INLINE, WORD_INLINE};
