//! The Lyndon layer.
//!
//! A Lyndon word is strictly smaller than all of its proper rotations.
//! Every word factors uniquely into a non-increasing sequence of Lyndon
//! words (Chen–Fox–Lyndon), and Lyndon words form a basis of the shuffle
//! algebra modulo products. This module provides:
//! - Duval's factorization and the Lyndon test
//! - Minimal rotation of a cyclic word in linear time
//! - Shuffle products of words and of expressions
//! - Reduction of an expression to the Lyndon basis modulo products

use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::linear::{Coeff, Linear};
use crate::param::WordForm;

/// Factors a word into Lyndon words `l1 ≥ l2 ≥ … ≥ lk` (Duval).
pub fn lyndon_factorize<T>(word: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Vec<&[T]> {
    let n = word.len();
    let mut factors = Vec::new();
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        let mut k = i;
        while j < n {
            match cmp(&word[k], &word[j]) {
                Ordering::Less => k = i,
                Ordering::Equal => k += 1,
                Ordering::Greater => break,
            }
            j += 1;
        }
        while i <= k {
            factors.push(&word[i..i + j - k]);
            i += j - k;
        }
    }
    factors
}

/// Returns true if `word` is a (non-empty) Lyndon word.
pub fn is_lyndon<T>(word: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> bool {
    !word.is_empty() && lyndon_factorize(word, cmp).len() == 1
}

/// Smallest period of a word (prefix function).
fn smallest_period<T>(word: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> usize {
    let n = word.len();
    let mut pi = vec![0usize; n];
    for i in 1..n {
        let mut k = pi[i - 1];
        while k > 0 && cmp(&word[i], &word[k]) != Ordering::Equal {
            k = pi[k - 1];
        }
        if cmp(&word[i], &word[k]) == Ordering::Equal {
            k += 1;
        }
        pi[i] = k;
    }
    n - pi.last().copied().unwrap_or(0)
}

/// Position of the minimal rotation of a cyclic word.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rotation {
    /// The minimal rotation starts at this index.
    pub offset: usize,
    /// False if the word is a proper power `u^k`, `k ≥ 2`.
    pub primitive: bool,
}

/// Finds the lexicographically minimal rotation in linear time.
///
/// For a non-primitive word the smallest offset is reported. The empty
/// word counts as primitive.
pub fn min_rotation<T>(word: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Rotation {
    let n = word.len();
    if n == 0 {
        return Rotation {
            offset: 0,
            primitive: true,
        };
    }
    let at = |idx: usize| &word[idx % n];
    let mut i = 0;
    let mut offset = 0;
    while i < n {
        offset = i;
        let mut j = i + 1;
        let mut k = i;
        while j < 2 * n {
            match cmp(at(k), at(j)) {
                Ordering::Less => k = i,
                Ordering::Equal => k += 1,
                Ordering::Greater => break,
            }
            j += 1;
        }
        while i <= k {
            i += j - k;
        }
    }
    let period = smallest_period(word, &cmp);
    Rotation {
        offset,
        primitive: period == n || n % period != 0,
    }
}

/// What to do with a cyclic word that is a proper power.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum NonPrimitivePolicy {
    /// The word contributes zero.
    #[default]
    Vanish,
    /// The word is kept as its minimal rotation.
    Keep,
}

/// The canonical representative of a cyclic word.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CanonicalRotation<T> {
    /// The minimal rotation.
    pub word: Vec<T>,
    /// How far the original word was rotated.
    pub offset: usize,
    /// Sign of the rotation as a permutation of the letters.
    pub sign: Coeff,
}

/// Picks the minimal rotation of a cyclic word and its permutation sign.
///
/// Returns `None` if the word is not primitive and `policy` says such
/// words vanish.
pub fn canonical_rotation<T: Clone>(
    word: &[T],
    cmp: impl Fn(&T, &T) -> Ordering,
    policy: NonPrimitivePolicy,
) -> Option<CanonicalRotation<T>> {
    let Rotation { offset, primitive } = min_rotation(word, cmp);
    if !primitive && policy == NonPrimitivePolicy::Vanish {
        return None;
    }
    let n = word.len();
    let rotated = word[offset..].iter().chain(&word[..offset]).cloned().collect();
    // a cyclic shift by r of n letters is a product of r(n-r) transpositions
    let sign = if (offset * (n - offset)) % 2 == 0 { 1 } else { -1 };
    Some(CanonicalRotation {
        word: rotated,
        offset,
        sign,
    })
}

fn shuffle_into<T: Clone>(a: &[T], b: &[T], prefix: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if a.is_empty() || b.is_empty() {
        let mut w = prefix.clone();
        w.extend_from_slice(a);
        w.extend_from_slice(b);
        out.push(w);
        return;
    }
    prefix.push(a[0].clone());
    shuffle_into(&a[1..], b, prefix, out);
    prefix.pop();
    prefix.push(b[0].clone());
    shuffle_into(a, &b[1..], prefix, out);
    prefix.pop();
}

/// All interleavings of two words, repeated according to multiplicity.
pub fn shuffle_pair<T: Clone>(a: &[T], b: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut prefix = Vec::with_capacity(a.len() + b.len());
    shuffle_into(a, b, &mut prefix, &mut out);
    out
}

/// Shuffle product of a list of words as `(word, multiplicity)` pairs.
///
/// # Panics
///
/// Panics if a multiplicity does not fit in a [`Coeff`].
pub fn shuffle_product<T: Clone + Eq + Hash>(words: &[&[T]]) -> Vec<(Vec<T>, Coeff)> {
    let mut acc: FxHashMap<Vec<T>, Coeff> = FxHashMap::default();
    acc.insert(Vec::new(), 1);
    for word in words {
        let mut next: FxHashMap<Vec<T>, Coeff> = FxHashMap::default();
        for (prefix, &coeff) in &acc {
            for w in shuffle_pair(prefix, word) {
                let entry = next.entry(w).or_insert(0);
                *entry = entry
                    .checked_add(coeff)
                    .unwrap_or_else(|| panic!("shuffle multiplicity overflows {}", Coeff::MAX));
            }
        }
        acc = next;
    }
    acc.into_iter().collect()
}

/// Shuffle product of two expressions.
#[must_use]
pub fn shuffle<P: WordForm>(lhs: &Linear<P>, rhs: &Linear<P>) -> Linear<P> {
    let mut ret = Linear::new();
    for (a, ca) in lhs.iter() {
        let wa = P::key_to_word(a);
        for (b, cb) in rhs.iter() {
            let wb = P::key_to_word(b);
            for w in shuffle_pair(&wa, &wb) {
                ret.add_to_key(P::word_to_key(&w), ca * cb);
            }
        }
    }
    ret
}

fn factorial(n: usize) -> Coeff {
    (2..=n as Coeff)
        .try_fold(1 as Coeff, Coeff::checked_mul)
        .unwrap_or_else(|| panic!("{n}! overflows {}", Coeff::MAX))
}

fn checked_product(a: Coeff, b: Coeff) -> Coeff {
    a.checked_mul(b)
        .unwrap_or_else(|| panic!("shuffle denominator {a} * {b} overflows {}", Coeff::MAX))
}

/// True for a power `a^k` of a single letter, whose factors shuffle only
/// into the word itself.
fn is_letter_power<T: Eq>(factors: &[&[T]]) -> bool {
    factors[0].len() == 1 && factors.iter().all(|f| *f == factors[0])
}

/// `Π mult_i!` over runs of equal consecutive factors.
fn repeated_factor_denominator<T: Eq>(factors: &[&[T]]) -> Coeff {
    let mut denominator = 1;
    let mut run = 1;
    for pair in factors.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
        } else {
            denominator = checked_product(denominator, factorial(run));
            run = 1;
        }
    }
    checked_product(denominator, factorial(run))
}

/// Rewrites an expression modulo shuffle products in the Lyndon basis.
///
/// A word with Lyndon factorization `l1 ≥ … ≥ lk`, `k ≥ 2`, equals
/// `(l1 ш … ш lk) / Π mult_i!` minus lexicographically smaller words;
/// the product vanishes, so the word is replaced by those smaller words
/// until only Lyndon words remain.
///
/// # Panics
///
/// Panics if a shuffle multiplicity is not divisible by the factorial
/// denominator, which would mean the letter order is inconsistent with
/// letter equality, or if a coefficient overflows.
#[tracing::instrument(level = "debug", skip_all, fields(terms = expr.len()))]
#[must_use]
pub fn to_lyndon_basis<P: WordForm>(expr: &Linear<P>) -> Linear<P> {
    let mut pending = expr.clone().without_annotations();
    let mut ret = Linear::new();
    let mut rounds = 0usize;
    while !pending.is_zero() {
        rounds += 1;
        let mut next = Linear::new();
        for (key, coeff) in pending.iter() {
            let word = P::key_to_word(key);
            let factors = lyndon_factorize(&word, P::lyndon_compare);
            if factors.len() <= 1 {
                ret.add_to_key(key.clone(), coeff);
                continue;
            }
            if is_letter_power(&factors) {
                continue;
            }
            let denominator = repeated_factor_denominator(&factors);
            for (shuffled, multiplicity) in shuffle_product(&factors) {
                if shuffled.as_slice() == word.as_slice() {
                    assert_eq!(
                        multiplicity, denominator,
                        "word {word:?} appears {multiplicity} times in the shuffle of its Lyndon factors"
                    );
                    continue;
                }
                assert!(
                    multiplicity % denominator == 0,
                    "shuffle multiplicity {multiplicity} of {shuffled:?} is not divisible by {denominator}"
                );
                let scaled = (multiplicity / denominator)
                    .checked_mul(coeff)
                    .unwrap_or_else(|| panic!("coefficient of {shuffled:?} overflows {}", Coeff::MAX));
                next.add_to_key(P::word_to_key(&shuffled), -scaled);
            }
        }
        pending = next;
    }
    tracing::trace!(rounds, terms = ret.len(), "reduced to Lyndon basis");
    ret
}
