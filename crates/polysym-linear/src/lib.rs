//! # polysym-linear
//!
//! Sparse integer linear combinations of symbolic terms.
//!
//! This crate provides:
//! - The [`Param`] contract every term representation implements
//! - [`Linear`], a normalized key → coefficient map with arithmetic,
//!   tensor products and structural transforms
//! - The Lyndon layer: word orders, minimal rotations, Lyndon
//!   factorization, shuffle products and Lyndon-basis reduction
//! - Parallel batch transforms via rayon
//!
//! ## Term representations
//!
//! - [`Words`]: tensor words over any [`Letter`](polysym_core::Letter)
//! - [`Packs`]: products of letters mixed with formal symbols

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod linear;
pub mod lyndon;
pub mod ordering;
pub mod packs;
pub mod parallel;
pub mod param;
pub mod words;

#[cfg(test)]
mod proptests;

pub use linear::{tensor_product, tensor_product_all, Coeff, Linear};
pub use lyndon::{shuffle, to_lyndon_basis, NonPrimitivePolicy};
pub use ordering::{cmp_measure_first, MeasureOrder, WordOrder};
pub use packs::{formal, product, PackExpr, Packs};
pub use parallel::ParallelConfig;
pub use param::{Param, WordForm};
pub use words::{minor, word, MinorExpr, SimpleExpr, WordExpr, Words};
