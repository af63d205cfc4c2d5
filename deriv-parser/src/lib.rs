//! Tokenizer and parser for fully-parenthesized prefix expressions.
//!
//! This crate turns source text such as `(* 2 (sin x))` into the [`Expr`] tree defined in
//! `deriv-compute`. The [`tokenizer`] module splits the source into tokens with [`logos`], and the
//! [`parser`] module assembles those tokens into a tree by scanning them right to left with an
//! operand stack.
//!
//! # Usage
//!
//! ```
//! use deriv_compute::symbolic::Expr;
//! use deriv_parser::parse;
//!
//! let expr = parse("(- x 3)").unwrap();
//! assert_eq!(expr, Expr::sub(Expr::ident("x"), Expr::lit(3.0)));
//! ```
//!
//! Malformed input produces one or more [`Error`]s, each of which can render a report that
//! highlights the offending parts of the source:
//!
//! ```
//! use deriv_parser::{parse, parser::error::kind::ArityMismatch};
//!
//! let errors = parse("(+ 1)").unwrap_err();
//! assert!(errors[0].is::<ArityMismatch>());
//! ```

pub mod parser;
pub mod tokenizer;

use deriv_compute::symbolic::Expr;
pub use parser::{error::Error, Parser};

/// Parses a single expression from the given source with a fresh [`Parser`].
pub fn parse(source: &str) -> Result<Expr, Vec<Error>> {
    Parser::new().parse(source)
}
