//! Symbolic differentiation and simplification of expression trees.
//!
//! All of the functionality lives in the [`symbolic`] module. Trees are usually produced by the
//! `deriv-parser` crate, but can be built directly with the constructors on
//! [`Expr`](symbolic::Expr).

pub mod symbolic;
