//! Terms mixing letter products with formal symbols.
//!
//! [`Packs`] stores [`Pack`] terms. The tensor product and the word form
//! exist only for products; asking for either on a formal symbol is a
//! contract violation.

use std::marker::PhantomData;

use polysym_core::{FormalSymbol, Letter, Pack, PackKey, PackedWord};

use crate::linear::Linear;
use crate::param::{Param, WordForm};

/// Term representation for [`Pack`] terms over the letter type `L`.
pub struct Packs<L>(PhantomData<L>);

/// Expression over [`Pack`] terms.
pub type PackExpr<L> = Linear<Packs<L>>;

fn product_dimension<L: Letter>(letters: &[L]) -> Option<usize> {
    let mut live = letters.iter().filter(|l| !l.is_nil());
    let first = live.next()?.dimension()?;
    assert!(
        live.all(|l| l.dimension() == Some(first)),
        "letters of different dimensions in one product: {letters:?}"
    );
    Some(first)
}

impl<L: Letter> Param for Packs<L> {
    type Object = Pack<L>;
    type Key = PackKey<L>;

    fn object_to_key(obj: &Pack<L>) -> PackKey<L> {
        obj.encode()
    }

    fn key_to_object(key: &PackKey<L>) -> Pack<L> {
        key.decode()
    }

    fn object_to_string(obj: &Pack<L>) -> String {
        obj.to_string()
    }

    fn object_to_weight(obj: &Pack<L>) -> usize {
        obj.weight()
    }

    fn object_to_dimension(obj: &Pack<L>) -> Option<usize> {
        match obj {
            Pack::Product(letters) => product_dimension(letters),
            Pack::Formal(_) => None,
        }
    }

    fn is_nil(obj: &Pack<L>) -> bool {
        obj.is_nil()
    }

    fn key_weight(key: &PackKey<L>) -> usize {
        key.weight()
    }

    fn key_dimension(key: &PackKey<L>) -> Option<usize> {
        match key {
            PackKey::Product(word) => product_dimension(word),
            PackKey::Formal(_) => None,
        }
    }

    fn key_is_nil(key: &PackKey<L>) -> bool {
        match key {
            PackKey::Product(word) => word.iter().any(Letter::is_nil),
            PackKey::Formal(_) => false,
        }
    }

    fn monom_tensor_product(lhs: &PackKey<L>, rhs: &PackKey<L>) -> PackKey<L> {
        match (lhs, rhs) {
            (PackKey::Product(a), PackKey::Product(b)) => PackKey::Product(a.concat(b)),
            _ => panic!("tensor product for formal symbols is not defined: {lhs:?} and {rhs:?}"),
        }
    }
}

impl<L: Letter> WordForm for Packs<L> {
    type Letter = L;

    fn key_to_word(key: &PackKey<L>) -> PackedWord<L> {
        match key {
            PackKey::Product(word) => PackedWord::from_slice(word),
            PackKey::Formal(formal) => {
                panic!("word form is not defined for formal symbols: {formal:?}")
            }
        }
    }

    fn word_to_key(word: &[L]) -> PackKey<L> {
        PackKey::Product(PackedWord::from_slice(word))
    }
}

/// A single product of letters.
#[must_use]
pub fn product<L: Letter>(letters: &[L]) -> PackExpr<L> {
    Linear::single(Pack::Product(letters.to_vec()))
}

/// A single formal symbol.
#[must_use]
pub fn formal<L: Letter>(symbol: FormalSymbol) -> PackExpr<L> {
    Linear::single(Pack::Formal(symbol))
}
