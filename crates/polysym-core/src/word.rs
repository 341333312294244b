//! Packed words.
//!
//! A word is an ordered sequence of letters. Words are stored in a
//! `SmallVec`, so typical terms never touch the heap; longer words spill
//! to heap storage transparently while keeping equality, hashing and
//! ordering identical.

use std::fmt;
use std::ops::{Deref, Range};

use smallvec::SmallVec;

/// Inline capacity of letter words.
pub const WORD_INLINE: usize = 10;

/// Inline capacity of co-terms (tuples of part keys).
pub const CO_INLINE: usize = 2;

/// A word of letters with `N` letters of inline storage.
///
/// Ordering is lexicographic over letters with a proper prefix first.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackedWord<T, const N: usize = WORD_INLINE>(SmallVec<[T; N]>);

impl<T, const N: usize> PackedWord<T, N> {
    /// Creates the empty word.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Appends a letter.
    pub fn push(&mut self, letter: T) {
        self.0.push(letter);
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the letters as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns true if the word outgrew its inline storage.
    #[must_use]
    pub fn spilled(&self) -> bool {
        self.0.spilled()
    }

    /// Converts into a vector of letters.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0.into_vec()
    }
}

impl<T: Clone, const N: usize> PackedWord<T, N> {
    /// Creates a word from a slice of letters.
    #[must_use]
    pub fn from_slice(letters: &[T]) -> Self {
        letters.iter().cloned().collect()
    }

    /// Returns the concatenation `self · other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = SmallVec::with_capacity(self.len() + other.len());
        out.extend(self.0.iter().cloned());
        out.extend(other.0.iter().cloned());
        Self(out)
    }

    /// Returns the subword covering `range`.
    #[must_use]
    pub fn subword(&self, range: Range<usize>) -> Self {
        Self::from_slice(&self.0[range])
    }
}

impl<T, const N: usize> Default for PackedWord<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for PackedWord<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> FromIterator<T> for PackedWord<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T, const N: usize> IntoIterator for PackedWord<T, N> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; N]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a PackedWord<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> From<Vec<T>> for PackedWord<T, N> {
    fn from(letters: Vec<T>) -> Self {
        Self(SmallVec::from_vec(letters))
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for PackedWord<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
