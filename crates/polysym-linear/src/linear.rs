//! Sparse formal linear combinations.
//!
//! A [`Linear`] maps packed term keys to nonzero integer coefficients.
//! Every mutating operation keeps the map normalized: a key whose
//! coefficient reaches zero is removed immediately.

use std::collections::hash_map::Entry;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;
use rustc_hash::FxHashMap;

use crate::param::Param;

/// Coefficient type of all expressions.
pub type Coeff = i64;

/// A formal integer linear combination of terms described by `P`.
///
/// Equality compares coefficients only. Annotations are diagnostic labels
/// that never take part in equality; arithmetic operators concatenate
/// them, structural transforms drop them.
pub struct Linear<P: Param> {
    /// Nonzero coefficients by key.
    data: FxHashMap<P::Key, Coeff>,
    /// Dimension shared by the terms that have one.
    dimension: Shared,
    /// Part count shared by the terms that have one.
    arity: Shared,
    /// Diagnostic labels.
    annotations: Vec<String>,
}

/// A measure every stored key that declares it must agree on.
///
/// `holders` counts the stored keys that declare the measure, so the
/// value is forgotten as soon as the last of them cancels.
#[derive(Clone, Copy, Default, Debug)]
struct Shared {
    value: Option<usize>,
    holders: usize,
}

impl Shared {
    /// Accepts a new key's measure, or reports the one it conflicts with.
    fn admit(&mut self, measure: Option<usize>) -> Result<(), usize> {
        let Some(measure) = measure else {
            return Ok(());
        };
        match self.value {
            Some(existing) if existing != measure => return Err(existing),
            _ => self.value = Some(measure),
        }
        self.holders += 1;
        Ok(())
    }

    /// Forgets a removed key's measure.
    fn release(&mut self, measure: Option<usize>) {
        if measure.is_some() {
            self.holders -= 1;
            if self.holders == 0 {
                self.value = None;
            }
        }
    }
}

impl<P: Param> Linear<P> {
    /// Creates the zero expression.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: FxHashMap::default(),
            dimension: Shared::default(),
            arity: Shared::default(),
            annotations: Vec::new(),
        }
    }

    /// Creates the zero expression.
    #[must_use]
    pub fn zero() -> Self {
        Self::new()
    }

    /// Creates an expression with a single term of coefficient 1.
    ///
    /// A degenerate (nil) term yields the zero expression.
    #[must_use]
    pub fn single(obj: P::Object) -> Self {
        let mut ret = Self::new();
        ret.add_to(&obj, 1);
        ret
    }

    /// Creates an expression with a single key of coefficient 1.
    #[must_use]
    pub fn single_key(key: P::Key) -> Self {
        let mut ret = Self::new();
        ret.add_to_key(key, 1);
        ret
    }

    /// Builds an expression from `(term, coefficient)` pairs.
    pub fn from_terms<I: IntoIterator<Item = (P::Object, Coeff)>>(terms: I) -> Self {
        let mut ret = Self::new();
        for (obj, coeff) in terms {
            ret.add_to(&obj, coeff);
        }
        ret
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the coefficient of a term.
    #[must_use]
    pub fn coeff(&self, obj: &P::Object) -> Coeff {
        self.coeff_for_key(&P::object_to_key(obj))
    }

    /// Returns the coefficient of a key.
    #[must_use]
    pub fn coeff_for_key(&self, key: &P::Key) -> Coeff {
        self.data.get(key).copied().unwrap_or(0)
    }

    /// Adds `coeff` to the coefficient of `key`. Nil keys are absorbed
    /// silently.
    ///
    /// # Panics
    ///
    /// Panics if the key's dimension or part count differs from the
    /// expression's.
    pub fn add_to_key(&mut self, key: P::Key, coeff: Coeff) {
        if coeff == 0 || P::key_is_nil(&key) {
            return;
        }
        let dimension = P::key_dimension(&key);
        let arity = P::key_arity(&key);
        match self.data.entry(key) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coeff;
                if *entry.get() == 0 {
                    entry.remove();
                    self.dimension.release(dimension);
                    self.arity.release(arity);
                }
            }
            Entry::Vacant(entry) => {
                if let Err(existing) = self.dimension.admit(dimension) {
                    panic!(
                        "dimension mismatch: cannot add {} of dimension {} to an expression of dimension {existing}",
                        P::object_to_string(&P::key_to_object(entry.key())),
                        dimension.unwrap_or_default()
                    );
                }
                if let Err(existing) = self.arity.admit(arity) {
                    panic!(
                        "part count mismatch: cannot add {} with {} parts to an expression with {existing} parts",
                        P::object_to_string(&P::key_to_object(entry.key())),
                        arity.unwrap_or_default()
                    );
                }
                entry.insert(coeff);
            }
        }
    }

    /// Adds `coeff` times a term. Nil terms are absorbed silently.
    pub fn add_to(&mut self, obj: &P::Object, coeff: Coeff) {
        if P::is_nil(obj) {
            return;
        }
        self.add_to_key(P::object_to_key(obj), coeff);
    }

    /// Adds `factor * other` in place, ignoring `other`'s annotations.
    pub fn add_scaled(&mut self, other: &Self, factor: Coeff) {
        if factor == 0 {
            return;
        }
        for (key, &coeff) in &other.data {
            self.add_to_key(key.clone(), coeff * factor);
        }
    }

    /// Iterates over `(key, coefficient)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&P::Key, Coeff)> + '_ {
        self.data.iter().map(|(key, &coeff)| (key, coeff))
    }

    /// Returns `(key, coefficient)` pairs sorted by key.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<(&P::Key, Coeff)> {
        let mut keys: Vec<_> = self.iter().collect();
        keys.sort_by(|a, b| a.0.cmp(b.0));
        keys
    }

    /// Returns decoded terms sorted by key.
    #[must_use]
    pub fn terms(&self) -> Vec<(P::Object, Coeff)> {
        self.sorted_keys()
            .into_iter()
            .map(|(key, coeff)| (P::key_to_object(key), coeff))
            .collect()
    }

    /// Returns the common weight of all terms, or `None` for zero.
    ///
    /// # Panics
    ///
    /// Panics if terms of different weights are mixed.
    #[must_use]
    pub fn weight(&self) -> Option<usize> {
        let mut keys = self.data.keys();
        let first = keys.next()?;
        let weight = P::key_weight(first);
        for key in keys {
            let other = P::key_weight(key);
            assert_eq!(
                weight,
                other,
                "expression mixes weights: {} has weight {weight}, {} has weight {other}",
                P::object_to_string(&P::key_to_object(first)),
                P::object_to_string(&P::key_to_object(key))
            );
        }
        Some(weight)
    }

    /// Returns the common dimension of all terms, if any.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.dimension.value
    }

    /// Returns the common part count of all terms, if any.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        self.arity.value
    }

    /// Returns the sum of absolute values of the coefficients.
    #[must_use]
    pub fn l1_norm(&self) -> Coeff {
        self.data.values().map(|c| c.abs()).sum()
    }

    /// Applies `f` to every term and sums like terms.
    #[must_use]
    pub fn mapped<Q: Param>(&self, f: impl Fn(&P::Object) -> Q::Object) -> Linear<Q> {
        let mut ret = Linear::new();
        for (key, coeff) in self.iter() {
            ret.add_to(&f(&P::key_to_object(key)), coeff);
        }
        ret
    }

    /// Applies `f` to every key and sums like keys.
    #[must_use]
    pub fn mapped_key<Q: Param>(&self, f: impl Fn(&P::Key) -> Q::Key) -> Linear<Q> {
        let mut ret = Linear::new();
        for (key, coeff) in self.iter() {
            ret.add_to_key(f(key), coeff);
        }
        ret
    }

    /// Replaces every term by a linear combination.
    #[must_use]
    pub fn mapped_expanding<Q: Param>(&self, f: impl Fn(&P::Object) -> Linear<Q>) -> Linear<Q> {
        let mut ret = Linear::new();
        for (key, coeff) in self.iter() {
            ret.add_scaled(&f(&P::key_to_object(key)), coeff);
        }
        ret
    }

    /// Replaces every key by a linear combination.
    #[must_use]
    pub fn mapped_expanding_key<Q: Param>(&self, f: impl Fn(&P::Key) -> Linear<Q>) -> Linear<Q> {
        let mut ret = Linear::new();
        for (key, coeff) in self.iter() {
            ret.add_scaled(&f(key), coeff);
        }
        ret
    }

    /// Keeps the terms that satisfy `pred`.
    #[must_use]
    pub fn filtered(&self, pred: impl Fn(&P::Object) -> bool) -> Self {
        self.filtered_key(|key| pred(&P::key_to_object(key)))
    }

    /// Keeps the keys that satisfy `pred`.
    #[must_use]
    pub fn filtered_key(&self, pred: impl Fn(&P::Key) -> bool) -> Self {
        let mut ret = Self::new();
        for (key, coeff) in self.iter().filter(|(key, _)| pred(key)) {
            ret.add_to_key(key.clone(), coeff);
        }
        ret
    }

    /// Returns true if some term satisfies `pred`.
    #[must_use]
    pub fn contains(&self, pred: impl Fn(&P::Object) -> bool) -> bool {
        self.data.keys().any(|key| pred(&P::key_to_object(key)))
    }

    /// Replaces the annotations with a single label.
    #[must_use]
    pub fn annotate(mut self, label: impl Into<String>) -> Self {
        self.annotations = vec![label.into()];
        self
    }

    /// Returns the annotations.
    #[must_use]
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Drops all annotations.
    #[must_use]
    pub fn without_annotations(mut self) -> Self {
        self.annotations.clear();
        self
    }
}

/// Tensor product: `Σ coeff(a) coeff(b) · (a ⊗ b)` over all pairs.
#[must_use]
pub fn tensor_product<P: Param>(lhs: &Linear<P>, rhs: &Linear<P>) -> Linear<P> {
    let mut ret = Linear::new();
    for (a, ca) in lhs.iter() {
        for (b, cb) in rhs.iter() {
            ret.add_to_key(P::monom_tensor_product(a, b), ca * cb);
        }
    }
    ret
}

/// Tensor product of a non-empty list of expressions, left to right.
///
/// # Panics
///
/// Panics on an empty list.
#[must_use]
pub fn tensor_product_all<P: Param>(exprs: &[Linear<P>]) -> Linear<P> {
    let Some((first, rest)) = exprs.split_first() else {
        panic!("tensor product of an empty list of expressions");
    };
    rest.iter()
        .fold(first.clone().without_annotations(), |acc, expr| tensor_product(&acc, expr))
}

impl<P: Param> Default for Linear<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Param> Clone for Linear<P> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            dimension: self.dimension,
            arity: self.arity,
            annotations: self.annotations.clone(),
        }
    }
}

impl<P: Param> PartialEq for Linear<P> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<P: Param> Eq for Linear<P> {}

impl<P: Param> AddAssign<&Linear<P>> for Linear<P> {
    fn add_assign(&mut self, rhs: &Linear<P>) {
        self.add_scaled(rhs, 1);
        self.annotations.extend(rhs.annotations.iter().cloned());
    }
}

impl<P: Param> AddAssign for Linear<P> {
    fn add_assign(&mut self, rhs: Linear<P>) {
        *self += &rhs;
    }
}

impl<P: Param> SubAssign<&Linear<P>> for Linear<P> {
    fn sub_assign(&mut self, rhs: &Linear<P>) {
        self.add_scaled(rhs, -1);
        self.annotations.extend(rhs.annotations.iter().cloned());
    }
}

impl<P: Param> SubAssign for Linear<P> {
    fn sub_assign(&mut self, rhs: Linear<P>) {
        *self -= &rhs;
    }
}

impl<P: Param> MulAssign<Coeff> for Linear<P> {
    fn mul_assign(&mut self, rhs: Coeff) {
        if rhs == 0 {
            self.data.clear();
            self.dimension = Shared::default();
            self.arity = Shared::default();
            return;
        }
        for coeff in self.data.values_mut() {
            *coeff *= rhs;
        }
    }
}

impl<P: Param> Add for Linear<P> {
    type Output = Linear<P>;

    fn add(mut self, rhs: Linear<P>) -> Linear<P> {
        self += &rhs;
        self
    }
}

impl<P: Param> Add<&Linear<P>> for &Linear<P> {
    type Output = Linear<P>;

    fn add(self, rhs: &Linear<P>) -> Linear<P> {
        let mut ret = self.clone();
        ret += rhs;
        ret
    }
}

impl<P: Param> Sub for Linear<P> {
    type Output = Linear<P>;

    fn sub(mut self, rhs: Linear<P>) -> Linear<P> {
        self -= &rhs;
        self
    }
}

impl<P: Param> Sub<&Linear<P>> for &Linear<P> {
    type Output = Linear<P>;

    fn sub(self, rhs: &Linear<P>) -> Linear<P> {
        let mut ret = self.clone();
        ret -= rhs;
        ret
    }
}

impl<P: Param> Neg for Linear<P> {
    type Output = Linear<P>;

    fn neg(mut self) -> Linear<P> {
        self *= -1;
        self
    }
}

impl<P: Param> Neg for &Linear<P> {
    type Output = Linear<P>;

    fn neg(self) -> Linear<P> {
        -self.clone()
    }
}

impl<P: Param> Mul<Coeff> for Linear<P> {
    type Output = Linear<P>;

    fn mul(mut self, rhs: Coeff) -> Linear<P> {
        self *= rhs;
        self
    }
}

impl<P: Param> Mul<Coeff> for &Linear<P> {
    type Output = Linear<P>;

    fn mul(self, rhs: Coeff) -> Linear<P> {
        self.clone() * rhs
    }
}

impl<P: Param> Mul<Linear<P>> for Coeff {
    type Output = Linear<P>;

    fn mul(self, rhs: Linear<P>) -> Linear<P> {
        rhs * self
    }
}

impl<P: Param> Mul<&Linear<P>> for Coeff {
    type Output = Linear<P>;

    fn mul(self, rhs: &Linear<P>) -> Linear<P> {
        rhs * self
    }
}

impl<P: Param> Sum for Linear<P> {
    fn sum<I: Iterator<Item = Linear<P>>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, expr| acc + expr)
    }
}

impl<P: Param> Zero for Linear<P> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<P: Param> fmt::Display for Linear<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.annotations {
            writeln!(f, "# {label}")?;
        }
        if self.is_zero() {
            return write!(f, "0");
        }
        let lines: Vec<String> = self
            .sorted_keys()
            .into_iter()
            .map(|(key, coeff)| format!("{coeff:+} {}", P::object_to_string(&P::key_to_object(key))))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl<P: Param> fmt::Debug for Linear<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted_keys()).finish()
    }
}
