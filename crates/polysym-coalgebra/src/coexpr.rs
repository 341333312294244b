//! Co-expressions: linear combinations of tuples of terms.
//!
//! A co-term is an ordered tuple of part keys. [`CoWords`] turns any
//! [`Param`] into the co-parameter of its co-expressions; the
//! [`CoFlavor`] decides how co-terms are normalized and which
//! compositions a comultiplication sums over.
//!
//! All co-terms of one co-expression must have the same number of parts,
//! and all their parts must share one dimension. Both are checked by
//! [`Linear`] on insertion.

use std::cmp::Ordering;
use std::marker::PhantomData;

use polysym_core::{PackedWord, CO_INLINE};
use polysym_linear::ordering::{cmp_measure_first, MeasureOrder};
use polysym_linear::{Linear, Packs, Param, WordForm, Words};

/// A co-parameter: a word form whose letters are the keys of `Part`.
pub trait CoParam: WordForm<Letter = <Self::Part as Param>::Key> {
    /// Term representation of a single part.
    type Part: Param;

    /// Co-terms are normalized modulo shuffles, as in a Lie coalgebra.
    const IS_LIE_ALGEBRA: bool;

    /// Comultiplication uses the composition exactly as given instead of
    /// summing over its distinct permutations.
    const IS_ITERATED: bool;

    /// Borrows the part at `slot` of a co-term key.
    fn part(key: &Self::Key, slot: usize) -> Option<&<Self::Part as Param>::Key>;
}

/// Compile-time policy of a co-expression type.
pub trait CoFlavor: 'static {
    /// See [`CoParam::IS_LIE_ALGEBRA`].
    const IS_LIE_ALGEBRA: bool;
    /// See [`CoParam::IS_ITERATED`].
    const IS_ITERATED: bool;
    /// Order of parts by weight in the Lyndon order.
    const PART_ORDER: MeasureOrder = MeasureOrder::Ascending;
    /// Separator between rendered parts.
    const SEPARATOR: &'static str;
}

/// Iterated Lie coalgebra.
pub struct Iterated;

/// Normal (symmetrized) Lie coalgebra.
pub struct Normal;

/// Iterated deconcatenation without normalization.
pub struct Hopf;

/// Iterated Lie coalgebra with heavier parts first, for glued pairs.
pub struct Glued;

impl CoFlavor for Iterated {
    const IS_LIE_ALGEBRA: bool = true;
    const IS_ITERATED: bool = true;
    const SEPARATOR: &'static str = " @ ";
}

impl CoFlavor for Normal {
    const IS_LIE_ALGEBRA: bool = true;
    const IS_ITERATED: bool = false;
    const SEPARATOR: &'static str = " ^ ";
}

impl CoFlavor for Hopf {
    const IS_LIE_ALGEBRA: bool = false;
    const IS_ITERATED: bool = true;
    const SEPARATOR: &'static str = " @ ";
}

impl CoFlavor for Glued {
    const IS_LIE_ALGEBRA: bool = true;
    const IS_ITERATED: bool = true;
    const PART_ORDER: MeasureOrder = MeasureOrder::Descending;
    const SEPARATOR: &'static str = " @ ";
}

/// Co-parameter over parts described by `P`, with policy `F`.
pub struct CoWords<P, F>(PhantomData<(P, F)>);

/// Iterated Lie co-parameter.
pub type ICo<P> = CoWords<P, Iterated>;
/// Normal Lie co-parameter.
pub type NCo<P> = CoWords<P, Normal>;
/// Hopf co-parameter: plain deconcatenation.
pub type HopfCo<P> = CoWords<P, Hopf>;
/// Glued-pair co-parameter.
pub type ACo<P> = CoWords<P, Glued>;

/// Iterated Lie co-expression.
pub type ICoExpr<P> = Linear<ICo<P>>;
/// Normal Lie co-expression.
pub type NCoExpr<P> = Linear<NCo<P>>;
/// Hopf co-expression.
pub type HopfCoExpr<P> = Linear<HopfCo<P>>;
/// Glued-pair co-expression.
pub type ACoExpr<P> = Linear<ACo<P>>;

/// Iterated co-expression over words of integers.
pub type SimpleICoExpr = ICoExpr<Words<i32>>;
/// Normal co-expression over words of integers.
pub type SimpleNCoExpr = NCoExpr<Words<i32>>;
/// Hopf co-expression over integer packs.
pub type PackCoExpr = HopfCoExpr<Packs<i32>>;

/// Common dimension of the parts that have one.
fn parts_dimension<P: Param>(dimensions: impl Iterator<Item = Option<usize>>) -> Option<usize> {
    let mut common = None;
    for dim in dimensions.flatten() {
        match common {
            None => common = Some(dim),
            Some(existing) => assert_eq!(
                existing,
                dim,
                "parts of different dimensions in one {} co-term",
                std::any::type_name::<P>()
            ),
        }
    }
    common
}

impl<P: Param, F: CoFlavor> Param for CoWords<P, F> {
    type Object = Vec<P::Object>;
    type Key = PackedWord<P::Key, CO_INLINE>;

    fn object_to_key(obj: &Vec<P::Object>) -> Self::Key {
        obj.iter().map(P::object_to_key).collect()
    }

    fn key_to_object(key: &Self::Key) -> Vec<P::Object> {
        key.iter().map(P::key_to_object).collect()
    }

    fn object_to_string(obj: &Vec<P::Object>) -> String {
        let parts: Vec<String> = obj.iter().map(P::object_to_string).collect();
        parts.join(F::SEPARATOR)
    }

    fn object_to_weight(obj: &Vec<P::Object>) -> usize {
        obj.iter().map(P::object_to_weight).sum()
    }

    fn object_to_dimension(obj: &Vec<P::Object>) -> Option<usize> {
        parts_dimension::<P>(obj.iter().map(P::object_to_dimension))
    }

    fn is_nil(obj: &Vec<P::Object>) -> bool {
        obj.iter().any(P::is_nil)
    }

    fn key_weight(key: &Self::Key) -> usize {
        key.iter().map(P::key_weight).sum()
    }

    fn key_dimension(key: &Self::Key) -> Option<usize> {
        parts_dimension::<P>(key.iter().map(P::key_dimension))
    }

    fn key_is_nil(key: &Self::Key) -> bool {
        key.iter().any(P::key_is_nil)
    }

    fn key_arity(key: &Self::Key) -> Option<usize> {
        Some(key.len())
    }

    fn monom_tensor_product(lhs: &Self::Key, rhs: &Self::Key) -> Self::Key {
        lhs.concat(rhs)
    }
}

impl<P: Param, F: CoFlavor> WordForm for CoWords<P, F> {
    type Letter = P::Key;

    fn key_to_word(key: &Self::Key) -> PackedWord<P::Key> {
        PackedWord::from_slice(key)
    }

    fn word_to_key(word: &[P::Key]) -> Self::Key {
        PackedWord::from_slice(word)
    }

    fn lyndon_compare(lhs: &P::Key, rhs: &P::Key) -> Ordering {
        cmp_measure_first(lhs, rhs, P::key_weight, F::PART_ORDER)
    }
}

impl<P: Param, F: CoFlavor> CoParam for CoWords<P, F> {
    type Part = P;
    const IS_LIE_ALGEBRA: bool = F::IS_LIE_ALGEBRA;
    const IS_ITERATED: bool = F::IS_ITERATED;

    fn part(key: &Self::Key, slot: usize) -> Option<&P::Key> {
        key.get(slot)
    }
}
