//! The term representation contract.
//!
//! A [`Param`] tells [`Linear`](crate::Linear) how to turn a domain object
//! into a packed key and back, and how to measure it. All functions are
//! associated functions, so engines monomorphize over the parameter and
//! key comparison and hashing cost nothing extra.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use polysym_core::PackedWord;

/// A term representation usable as the basis of a [`Linear`](crate::Linear).
pub trait Param: Sized + 'static {
    /// The decoded term.
    type Object: Clone + Debug;
    /// The packed, canonical key of a term.
    type Key: Clone + Eq + Ord + Hash + Debug + Send + Sync;

    /// Encodes a term.
    fn object_to_key(obj: &Self::Object) -> Self::Key;

    /// Decodes a key.
    fn key_to_object(key: &Self::Key) -> Self::Object;

    /// Renders a term for humans.
    fn object_to_string(obj: &Self::Object) -> String;

    /// Returns the weight of a term.
    fn object_to_weight(obj: &Self::Object) -> usize;

    /// Returns the dimension of a term, if the algebra has one.
    ///
    /// Terms of different dimensions must never share an expression.
    fn object_to_dimension(_obj: &Self::Object) -> Option<usize> {
        None
    }

    /// Returns true if the term is degenerate and stands for zero.
    fn is_nil(_obj: &Self::Object) -> bool {
        false
    }

    /// Weight straight from the key.
    fn key_weight(key: &Self::Key) -> usize {
        Self::object_to_weight(&Self::key_to_object(key))
    }

    /// Dimension straight from the key.
    fn key_dimension(key: &Self::Key) -> Option<usize> {
        Self::object_to_dimension(&Self::key_to_object(key))
    }

    /// Nil check straight from the key.
    fn key_is_nil(key: &Self::Key) -> bool {
        Self::is_nil(&Self::key_to_object(key))
    }

    /// Number of parts of a key, for terms that are tuples.
    ///
    /// Keys with different part counts must never share an expression.
    fn key_arity(_key: &Self::Key) -> Option<usize> {
        None
    }

    /// Concatenates two keys.
    ///
    /// # Panics
    ///
    /// The default panics: the algebra has no tensor product.
    fn monom_tensor_product(lhs: &Self::Key, rhs: &Self::Key) -> Self::Key {
        panic!(
            "tensor product is not defined for {}: {lhs:?} and {rhs:?}",
            std::any::type_name::<Self>()
        )
    }
}

/// A [`Param`] whose keys are words over some letter type.
///
/// This is what the Lyndon layer and the coproduct engine operate on.
pub trait WordForm: Param {
    /// The letter type of the word form.
    type Letter: Clone + Eq + Ord + Hash + Debug + Send + Sync;

    /// Returns the key as a word.
    fn key_to_word(key: &Self::Key) -> PackedWord<Self::Letter>;

    /// Builds a key from a word.
    fn word_to_key(word: &[Self::Letter]) -> Self::Key;

    /// Letter order used for Lyndon canonicalization.
    fn lyndon_compare(lhs: &Self::Letter, rhs: &Self::Letter) -> Ordering {
        lhs.cmp(rhs)
    }
}
