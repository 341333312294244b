//! Coproduct and comultiplication.
//!
//! [`comultiply`] splits every term of an expression into contiguous
//! blocks whose sizes follow a composition. For Lie co-parameters the
//! input and every block are first rewritten in the Lyndon basis, and the
//! resulting co-terms are normalized modulo shuffles of their parts, which
//! makes two-part co-terms antisymmetric. Non-iterated co-parameters sum
//! over every distinct permutation of the composition.

use polysym_linear::parallel::par_mapped_expanding_key;
use polysym_linear::{to_lyndon_basis, Coeff, Linear, ParallelConfig, Param, WordForm};

use crate::coexpr::{ACo, CoParam, ICo, NCo};

type PartKey<C> = <<C as CoParam>::Part as Param>::Key;

/// Tensors part expressions into a co-expression, without normalization.
fn tensor_parts<'a, C: CoParam>(parts: impl IntoIterator<Item = &'a Linear<C::Part>>) -> Linear<C> {
    let mut acc: Vec<(Vec<PartKey<C>>, Coeff)> = vec![(Vec::new(), 1)];
    for part in parts {
        let mut next = Vec::with_capacity(acc.len() * part.len());
        for (prefix, coeff) in &acc {
            for (key, part_coeff) in part.iter() {
                let mut co_term = prefix.clone();
                co_term.push(key.clone());
                next.push((co_term, coeff * part_coeff));
            }
        }
        acc = next;
    }
    let mut ret = Linear::new();
    for (co_term, coeff) in acc {
        ret.add_to_key(C::word_to_key(&co_term), coeff);
    }
    ret
}

/// Brings a co-expression to normal form.
///
/// Lie co-terms are rewritten in the Lyndon basis over their parts; other
/// co-expressions are returned unchanged.
#[must_use]
pub fn normalize_coproduct<C: CoParam>(expr: Linear<C>) -> Linear<C> {
    if C::IS_LIE_ALGEBRA {
        to_lyndon_basis(&expr)
    } else {
        expr
    }
}

/// The co-expression `Σ coeff(a) coeff(b) · (a, b)`, normalized.
#[must_use]
pub fn coproduct<C: CoParam>(lhs: &Linear<C::Part>, rhs: &Linear<C::Part>) -> Linear<C> {
    normalize_coproduct(tensor_parts::<C>([lhs, rhs]))
}

/// The n-ary coproduct of a list of expressions, normalized.
///
/// # Panics
///
/// Panics on an empty list.
#[must_use]
pub fn coproduct_vec<C: CoParam>(exprs: &[Linear<C::Part>]) -> Linear<C> {
    assert!(!exprs.is_empty(), "coproduct of an empty list of expressions");
    normalize_coproduct(tensor_parts::<C>(exprs))
}

/// Every distinct permutation of `form`, in lexicographic order.
fn distinct_permutations(form: &[usize]) -> Vec<Vec<usize>> {
    let mut current = form.to_vec();
    current.sort_unstable();
    let mut ret = vec![current.clone()];
    loop {
        // next permutation
        let Some(i) = (1..current.len()).rev().find(|&i| current[i - 1] < current[i]) else {
            return ret;
        };
        let pivot = i - 1;
        let Some(j) = (i..current.len()).rev().find(|&j| current[j] > current[pivot]) else {
            return ret;
        };
        current.swap(pivot, j);
        current[i..].reverse();
        ret.push(current.clone());
    }
}

/// Checks the composition and returns the compositions to sum over.
///
/// Returns `None` for the zero expression.
fn prepare<C: CoParam>(expr: &Linear<C::Part>, form: &[usize]) -> Option<Vec<Vec<usize>>> {
    assert!(!form.is_empty(), "comultiply: empty composition");
    assert!(
        form.iter().all(|&size| size > 0),
        "comultiply: composition {form:?} has a zero part"
    );
    let weight = expr.weight()?;
    let total: usize = form.iter().sum();
    assert_eq!(
        total, weight,
        "comultiply: composition {form:?} does not sum to the expression weight {weight}"
    );
    Some(if C::IS_ITERATED {
        vec![form.to_vec()]
    } else {
        distinct_permutations(form)
    })
}

/// Splits one term along each composition.
fn split_term<C>(key: &PartKey<C>, compositions: &[Vec<usize>]) -> Linear<C>
where
    C: CoParam,
    C::Part: WordForm,
{
    let word = <C::Part as WordForm>::key_to_word(key);
    let mut ret = Linear::new();
    for form in compositions {
        let mut offset = 0;
        let mut parts = Vec::with_capacity(form.len());
        for &size in form {
            let block = Linear::single_key(<C::Part as WordForm>::word_to_key(&word[offset..offset + size]));
            parts.push(if C::IS_LIE_ALGEBRA {
                to_lyndon_basis(&block)
            } else {
                block
            });
            offset += size;
        }
        ret += tensor_parts::<C>(&parts);
    }
    ret
}

fn lie_input<P: WordForm>(expr: &Linear<P>, lie: bool) -> Linear<P> {
    if lie {
        to_lyndon_basis(expr)
    } else {
        expr.clone().without_annotations()
    }
}

/// Comultiplies an expression against a composition of its weight.
///
/// The zero expression gives the zero co-expression.
///
/// # Panics
///
/// Panics if the composition is empty, has a zero part, or does not sum
/// to the weight of the expression.
#[tracing::instrument(level = "debug", skip_all, fields(terms = expr.len(), form = ?form))]
#[must_use]
pub fn comultiply<C>(expr: &Linear<C::Part>, form: &[usize]) -> Linear<C>
where
    C: CoParam,
    C::Part: WordForm,
{
    let Some(compositions) = prepare::<C>(expr, form) else {
        return Linear::new();
    };
    let input = lie_input(expr, C::IS_LIE_ALGEBRA);
    let ret = input.mapped_expanding_key(|key| split_term::<C>(key, &compositions));
    tracing::debug!(compositions = compositions.len(), terms = ret.len(), "split terms");
    normalize_coproduct(ret)
}

/// [`comultiply`] with the term splitting spread over rayon workers.
///
/// # Panics
///
/// Panics under the same conditions as [`comultiply`].
#[tracing::instrument(level = "debug", skip_all, fields(terms = expr.len(), form = ?form))]
#[must_use]
pub fn comultiply_parallel<C>(expr: &Linear<C::Part>, form: &[usize], config: &ParallelConfig) -> Linear<C>
where
    C: CoParam,
    C::Part: WordForm,
{
    let Some(compositions) = prepare::<C>(expr, form) else {
        return Linear::new();
    };
    let input = lie_input(expr, C::IS_LIE_ALGEBRA);
    let ret = par_mapped_expanding_key(&input, |key| split_term::<C>(key, &compositions), config);
    normalize_coproduct(ret)
}

/// Iterated comultiplication.
#[must_use]
pub fn icomultiply<P: WordForm>(expr: &Linear<P>, form: &[usize]) -> Linear<ICo<P>> {
    comultiply::<ICo<P>>(expr, form)
}

/// Normal comultiplication.
#[must_use]
pub fn ncomultiply<P: WordForm>(expr: &Linear<P>, form: &[usize]) -> Linear<NCo<P>> {
    comultiply::<NCo<P>>(expr, form)
}

/// Keeps the co-terms whose part at `slot` satisfies `pred`.
///
/// # Panics
///
/// Panics if a co-term has no part at `slot`.
#[must_use]
pub fn filter_coexpr<C: CoParam>(
    expr: &Linear<C>,
    slot: usize,
    pred: impl Fn(&<C::Part as Param>::Object) -> bool,
) -> Linear<C> {
    expr.filtered_key(|key| {
        let Some(part) = C::part(key, slot) else {
            panic!(
                "filter slot {slot} is out of range for {}",
                C::object_to_string(&C::key_to_object(key))
            );
        };
        pred(&<C::Part as Param>::key_to_object(part))
    })
}

/// Glues each pair of neighboring letters in turn.
///
/// A term `x1 x2 … xn` becomes
/// `Σ_i x1 @ … @ (xi xi+1) @ … @ xn`, normalized in [`ACo`]. Terms
/// shorter than two letters contribute nothing.
#[must_use]
pub fn expand_into_glued_pairs<P: WordForm>(expr: &Linear<P>) -> Linear<ACo<P>> {
    let ret = expr.mapped_expanding_key(|key| {
        let word = P::key_to_word(key);
        let mut glued = Linear::new();
        for i in 0..word.len().saturating_sub(1) {
            let co_term: Vec<P::Key> = (0..i)
                .map(|j| P::word_to_key(&word[j..=j]))
                .chain(std::iter::once(P::word_to_key(&word[i..i + 2])))
                .chain((i + 2..word.len()).map(|j| P::word_to_key(&word[j..=j])))
                .collect();
            glued.add_to_key(ACo::<P>::word_to_key(&co_term), 1);
        }
        glued
    });
    normalize_coproduct(ret)
}
