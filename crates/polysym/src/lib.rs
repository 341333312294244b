//! # Polysym
//!
//! Symbolic linear algebra over tensor words, with the Hopf and Lie
//! coalgebra structure used in computations with polylogarithm symbols.
//!
//! ## Features
//!
//! - **Packed Terms**: inline small-vector keys, bit-set minors, formal symbols
//! - **Sparse Expressions**: integer linear combinations over any term representation
//! - **Lyndon Layer**: minimal rotations, Lyndon factorization, shuffle products
//! - **Coproducts**: iterated and normal comultiplication, co-term filtering
//! - **Parallel Batches**: rayon-backed term transforms with order-free merging
//!
//! ## Quick Start
//!
//! ```rust
//! use polysym::prelude::*;
//!
//! let expr = word(&[1, 3, 2, 4]) + word(&[4, 3, 2, 1]);
//! let co = icomultiply(&expr, &[2, 2]);
//! assert_eq!(co.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polysym_coalgebra as coalgebra;
pub use polysym_core as core;
pub use polysym_linear as linear;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polysym_coalgebra::{
        comultiply, comultiply_parallel, coproduct, coproduct_vec, filter_coexpr, icomultiply, ncomultiply,
        ACo, CoParam, HopfCo, ICo, ICoExpr, NCo, NCoExpr,
    };
    pub use polysym_core::{FormalSymbol, IndexSet, Letter, Pack, PackedWord};
    pub use polysym_linear::{
        formal, minor, product, shuffle, tensor_product, to_lyndon_basis, word, Coeff, Linear, MinorExpr,
        PackExpr, Packs, ParallelConfig, Param, SimpleExpr, WordForm, WordOrder, Words,
    };
}
