//! # polysym-coalgebra
//!
//! Coproducts and comultiplication of polysym expressions.
//!
//! This crate provides:
//! - Co-expressions: [`Linear`](polysym_linear::Linear) over tuples of
//!   part keys, in several flavors ([`ICo`], [`NCo`], [`HopfCo`], [`ACo`])
//! - The binary and n-ary coproduct of independent expressions
//! - Comultiplication against a composition of the weight, sequential or
//!   spread over rayon workers
//! - Selective filtering of co-terms by the part in one slot
//!
//! ## Example
//!
//! ```
//! use polysym_coalgebra::{icomultiply, SimpleICoExpr};
//! use polysym_linear::{word, Linear};
//!
//! let co = icomultiply(&word(&[2, 1]), &[1, 1]);
//! let expected: SimpleICoExpr = Linear::single(vec![vec![1], vec![2]]);
//! assert_eq!(co, -expected);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coexpr;
pub mod coproduct;

#[cfg(test)]
mod proptests;

pub use coexpr::{
    ACo, ACoExpr, CoFlavor, CoParam, CoWords, HopfCo, HopfCoExpr, ICo, ICoExpr, NCo, NCoExpr, PackCoExpr,
    SimpleICoExpr, SimpleNCoExpr,
};
pub use coproduct::{
    comultiply, comultiply_parallel, coproduct, coproduct_vec, expand_into_glued_pairs, filter_coexpr,
    icomultiply, ncomultiply, normalize_coproduct,
};
