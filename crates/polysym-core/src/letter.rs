//! The letter contract.
//!
//! Letters are the atomic generators of a word. Every alphabet used with
//! the linear engine implements [`Letter`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An atomic, immutable, totally ordered generator of a word.
pub trait Letter: Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static {
    /// Returns true for the degenerate letter that annihilates any word
    /// containing it.
    fn is_nil(&self) -> bool {
        false
    }

    /// Returns the arity of the letter, if the alphabet has one.
    ///
    /// Words mixing letters of different dimensions are ill-typed.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

/// Plain integer symbols, as used by the simplest word algebras.
impl Letter for i32 {}

impl Letter for u8 {}
