//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes. Each node is one of a closed set of
//! variants: numeric literals, identifiers, the binary operators `+ - * / ^`, and the functions
//! `log exp sin cos tan`. Composite nodes own their children, and no operation in this module
//! mutates a tree in place.
//!
//! # Operations
//!
//! - [`derivative()`] computes the derivative of an expression with respect to the single
//!   implicit variable, applying one structural rule per node type.
//! - [`simplify()`] applies a fixed table of identity and constant-folding rules in one
//!   post-order pass.
//! - The [`Display`](std::fmt::Display) implementation of [`Expr`] renders the canonical,
//!   fully-parenthesized prefix form.
//!
//! ```
//! use deriv_compute::symbolic::{derivative, simplify, Expr};
//!
//! // d/dx ln(x) = 1/x
//! let expr = Expr::log(Expr::ident("x"));
//! let result = simplify(&derivative(&expr)).unwrap();
//! assert_eq!(result, Expr::div(Expr::lit(1.0), Expr::ident("x")));
//! assert_eq!(result.to_string(), "(/ 1 x)");
//! ```

pub mod derivative;
pub mod expr;
pub mod simplify;

pub use derivative::{derivative, nth_derivative, nth_derivative_with};
pub use expr::{Expr, ExprKind};
pub use simplify::{simplify, simplify_with, simplify_with_steps, SimplifyError};
pub use simplify::step::{Step, StepCollector};
