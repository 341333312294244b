//! Bit-set letters.
//!
//! An [`IndexSet`] is a subset of `1..=MAX_INDEX` packed into a single
//! `u16`. It models a minor of a `d × n` matrix by the set of columns it
//! uses, so equality, ordering and hashing are single integer operations.

use std::fmt;

use crate::error::CodecError;
use crate::letter::Letter;

/// Largest index an [`IndexSet`] can hold.
pub const MAX_INDEX: usize = 16;

const _: () = assert!(MAX_INDEX <= u16::BITS as usize);

/// A set of 1-based indices packed into a bit set.
///
/// The empty set is the nil letter: it stands for a degenerate minor
/// (one with a repeated column) and annihilates any word containing it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexSet(u16);

impl IndexSet {
    /// The nil letter.
    #[must_use]
    pub const fn nil() -> Self {
        Self(0)
    }

    /// Packs a list of indices.
    ///
    /// A repeated index or an empty list yields the nil letter. Indices
    /// outside `1..=MAX_INDEX` are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IndexOutOfRange`] for an index that does not
    /// fit the bit set.
    pub fn try_new(indices: &[usize]) -> Result<Self, CodecError> {
        let mut bits = 0u16;
        for &index in indices {
            if !(1..=MAX_INDEX).contains(&index) {
                return Err(CodecError::IndexOutOfRange {
                    index,
                    max: MAX_INDEX,
                });
            }
            let bit = 1u16 << (index - 1);
            if bits & bit != 0 {
                return Ok(Self::nil());
            }
            bits |= bit;
        }
        Ok(Self(bits))
    }

    /// Packs a list of indices, panicking on an out-of-range index.
    ///
    /// # Panics
    ///
    /// Panics if an index lies outside `1..=MAX_INDEX`.
    #[must_use]
    pub fn new(indices: &[usize]) -> Self {
        match Self::try_new(indices) {
            Ok(set) => set,
            Err(err) => panic!("cannot pack {indices:?}: {err}"),
        }
    }

    /// Creates a set from raw bits (bit `i` stands for index `i + 1`).
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Returns true for the nil letter.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of indices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true for the empty (nil) set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if `index` belongs to the set.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        (1..=MAX_INDEX).contains(&index) && self.0 & (1 << (index - 1)) != 0
    }

    /// Returns the indices in increasing order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=MAX_INDEX).filter(move |&i| self.contains(i))
    }
}

impl Letter for IndexSet {
    fn is_nil(&self) -> bool {
        IndexSet::is_nil(self)
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            return write!(f, "<nil>");
        }
        let parts: Vec<String> = self.indices().map(|i| i.to_string()).collect();
        write!(f, "({})", parts.join(","))
    }
}

impl fmt::Debug for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexSet{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let g = IndexSet::new(&[3, 1, 2]);
        assert_eq!(g.len(), 3);
        assert!(g.contains(1));
        assert!(!g.contains(4));
        assert_eq!(g.indices().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(g, IndexSet::new(&[1, 2, 3]));
    }

    #[test]
    fn test_repeated_index_is_nil() {
        assert!(IndexSet::new(&[1, 2, 1]).is_nil());
        assert!(IndexSet::new(&[]).is_nil());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            IndexSet::try_new(&[1, MAX_INDEX + 1]),
            Err(CodecError::IndexOutOfRange {
                index: MAX_INDEX + 1,
                max: MAX_INDEX
            })
        );
        assert!(IndexSet::try_new(&[0]).is_err());
        assert!(IndexSet::try_new(&[MAX_INDEX]).is_ok());
    }

    #[test]
    #[should_panic(expected = "outside the supported range")]
    fn test_new_fails_fast() {
        let _ = IndexSet::new(&[17]);
    }

    #[test]
    fn test_order_follows_bits() {
        let a = IndexSet::new(&[1, 2]);
        let b = IndexSet::new(&[1, 3]);
        let c = IndexSet::new(&[2, 3]);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_display() {
        assert_eq!(IndexSet::new(&[2, 5]).to_string(), "(2,5)");
        assert_eq!(IndexSet::nil().to_string(), "<nil>");
    }
}
