//! Terms that are either a product of letters or a formal symbol.
//!
//! Some algebras mix ordinary tensor words with symbols that never
//! decompose into letters. [`Pack`] makes the two shapes an explicit sum
//! type, and [`PackKey`] is its packed counterpart.

use std::fmt;

use crate::formal::{FormalKey, FormalSymbol};
use crate::letter::Letter;
use crate::word::PackedWord;

/// Inline capacity of the product branch of a [`PackKey`].
pub const PACK_INLINE: usize = 4;

/// A product of letters or a formal symbol.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Pack<L: Letter> {
    /// A tensor product of letters. The empty product is the unit.
    Product(Vec<L>),
    /// An opaque formal symbol.
    Formal(FormalSymbol),
}

impl<L: Letter> Pack<L> {
    /// The unit of the shuffle algebra: the empty product.
    #[must_use]
    pub fn unity() -> Self {
        Pack::Product(Vec::new())
    }

    /// Returns true for the empty product.
    #[must_use]
    pub fn is_unity(&self) -> bool {
        matches!(self, Pack::Product(letters) if letters.is_empty())
    }

    /// Returns the weight: letter count or the symbol's total weight.
    #[must_use]
    pub fn weight(&self) -> usize {
        match self {
            Pack::Product(letters) => letters.len(),
            Pack::Formal(symbol) => symbol.total_weight(),
        }
    }

    /// Returns true if the product contains a nil letter.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        match self {
            Pack::Product(letters) => letters.iter().any(Letter::is_nil),
            Pack::Formal(_) => false,
        }
    }

    /// Encodes into a packed key.
    #[must_use]
    pub fn encode(&self) -> PackKey<L> {
        match self {
            Pack::Product(letters) => PackKey::Product(PackedWord::from_slice(letters)),
            Pack::Formal(symbol) => PackKey::Formal(FormalKey::encode(symbol)),
        }
    }
}

impl<L: Letter> fmt::Display for Pack<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pack::Product(letters) if letters.is_empty() => write!(f, "1"),
            Pack::Product(letters) => {
                let parts: Vec<String> = letters.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(" * "))
            }
            Pack::Formal(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// Packed form of a [`Pack`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum PackKey<L> {
    /// Packed product of letters.
    Product(PackedWord<L, PACK_INLINE>),
    /// Packed formal symbol.
    Formal(FormalKey),
}

impl<L: Letter> PackKey<L> {
    /// Decodes the key.
    #[must_use]
    pub fn decode(&self) -> Pack<L> {
        match self {
            PackKey::Product(word) => Pack::Product(word.to_vec()),
            PackKey::Formal(key) => Pack::Formal(key.decode()),
        }
    }

    /// Returns the weight without decoding.
    #[must_use]
    pub fn weight(&self) -> usize {
        match self {
            PackKey::Product(word) => word.len(),
            PackKey::Formal(key) => key.total_weight(),
        }
    }

    /// Returns the product word, if this is a product.
    #[must_use]
    pub fn as_product(&self) -> Option<&PackedWord<L, PACK_INLINE>> {
        match self {
            PackKey::Product(word) => Some(word),
            PackKey::Formal(_) => None,
        }
    }
}
