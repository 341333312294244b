//! Tensor words over a letter alphabet.
//!
//! [`Words`] is the basic term representation: a term is a word of
//! letters, its weight is its length, and the tensor product of two terms
//! is concatenation.

use std::marker::PhantomData;

use polysym_core::{IndexSet, Letter, PackedWord};

use crate::linear::Linear;
use crate::param::{Param, WordForm};

/// Term representation for words over the letter type `L`.
pub struct Words<L>(PhantomData<L>);

/// Expression over words of `L`.
pub type WordExpr<L> = Linear<Words<L>>;

/// Expression over words of plain integer symbols.
pub type SimpleExpr = WordExpr<i32>;

/// Expression over words of minors.
pub type MinorExpr = WordExpr<IndexSet>;

/// Returns the common dimension of a word's letters, ignoring nil ones.
///
/// # Panics
///
/// Panics if two letters disagree.
fn letters_dimension<L: Letter>(letters: &[L]) -> Option<usize> {
    let mut live = letters.iter().filter(|l| !l.is_nil());
    let first = live.next()?.dimension()?;
    for letter in live {
        assert_eq!(
            letter.dimension(),
            Some(first),
            "letters of different dimensions in one word: {}",
            render(letters)
        );
    }
    Some(first)
}

fn render<L: Letter>(letters: &[L]) -> String {
    if letters.is_empty() {
        return "1".to_string();
    }
    let parts: Vec<String> = letters.iter().map(ToString::to_string).collect();
    parts.join(" * ")
}

impl<L: Letter> Param for Words<L> {
    type Object = Vec<L>;
    type Key = PackedWord<L>;

    fn object_to_key(obj: &Vec<L>) -> PackedWord<L> {
        PackedWord::from_slice(obj)
    }

    fn key_to_object(key: &PackedWord<L>) -> Vec<L> {
        key.to_vec()
    }

    fn object_to_string(obj: &Vec<L>) -> String {
        render(obj)
    }

    fn object_to_weight(obj: &Vec<L>) -> usize {
        obj.len()
    }

    fn object_to_dimension(obj: &Vec<L>) -> Option<usize> {
        letters_dimension(obj)
    }

    fn is_nil(obj: &Vec<L>) -> bool {
        obj.iter().any(Letter::is_nil)
    }

    fn key_weight(key: &PackedWord<L>) -> usize {
        key.len()
    }

    fn key_dimension(key: &PackedWord<L>) -> Option<usize> {
        letters_dimension(key)
    }

    fn key_is_nil(key: &PackedWord<L>) -> bool {
        key.iter().any(Letter::is_nil)
    }

    fn monom_tensor_product(lhs: &PackedWord<L>, rhs: &PackedWord<L>) -> PackedWord<L> {
        lhs.concat(rhs)
    }
}

impl<L: Letter> WordForm for Words<L> {
    type Letter = L;

    fn key_to_word(key: &PackedWord<L>) -> PackedWord<L> {
        key.clone()
    }

    fn word_to_key(word: &[L]) -> PackedWord<L> {
        PackedWord::from_slice(word)
    }
}

/// A single word with coefficient 1; zero if a letter is nil.
#[must_use]
pub fn word<L: Letter>(letters: &[L]) -> WordExpr<L> {
    Linear::single(letters.to_vec())
}

/// A single one-letter word holding the minor on `indices`.
///
/// A degenerate minor (repeated index) gives zero.
///
/// # Panics
///
/// Panics if an index exceeds [`MAX_INDEX`](polysym_core::MAX_INDEX).
#[must_use]
pub fn minor(indices: &[usize]) -> MinorExpr {
    word(&[IndexSet::new(indices)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        let w = vec![3, 1, 4, 1, 5];
        assert_eq!(Words::<i32>::key_to_object(&Words::<i32>::object_to_key(&w)), w);
    }

    #[test]
    fn test_render() {
        assert_eq!(Words::<i32>::object_to_string(&vec![1, 2]), "1 * 2");
        assert_eq!(Words::<i32>::object_to_string(&vec![]), "1");
        let g = vec![IndexSet::new(&[1, 2]), IndexSet::new(&[3, 4])];
        assert_eq!(Words::<IndexSet>::object_to_string(&g), "(1,2) * (3,4)");
    }

    #[test]
    fn test_integer_words_have_no_dimension() {
        assert_eq!(word(&[1, 2, 3]).dimension(), None);
    }

    #[test]
    fn test_minor_dimension() {
        let w = vec![IndexSet::new(&[1, 2, 3]), IndexSet::new(&[2, 3, 4])];
        assert_eq!(Words::<IndexSet>::object_to_dimension(&w), Some(3));
    }

    #[test]
    fn test_nil_letter_beside_live_letters() {
        let w = vec![IndexSet::new(&[1, 2, 3]), IndexSet::nil()];
        assert_eq!(Words::<IndexSet>::object_to_dimension(&w), Some(3));
        assert!(word(&w).is_zero());
        assert!(Words::<IndexSet>::key_is_nil(&PackedWord::from_slice(&w)));
    }

    #[test]
    #[should_panic(expected = "letters of different dimensions")]
    fn test_mixed_letter_dimensions() {
        let _ = word(&[IndexSet::new(&[1, 2]), IndexSet::new(&[1, 2, 3])]);
    }
}
