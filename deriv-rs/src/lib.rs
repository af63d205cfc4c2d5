//! Symbolic differentiation of prefix expressions, from source text to rendered result.
//!
//! This crate ties together the parser in `deriv-parser` and the differentiation and
//! simplification engines in `deriv-compute`:
//!
//! ```
//! use deriv_rs::{differentiate, Options};
//!
//! let derivation = differentiate("(^ x 2)", Options::default()).unwrap();
//! assert_eq!(derivation.output.to_string(), "(* 2 x)");
//! ```
//!
//! The `deriv` binary built from this crate exposes the same pipeline on the command line, with an
//! interactive mode when no input is given.

pub mod error;

use deriv_compute::symbolic::{derivative, nth_derivative_with, Expr, Step};
use deriv_parser::Parser;
use log::debug;

pub use error::Error;

/// Options that control how an expression is differentiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// How many times to differentiate the expression.
    ///
    /// An order of zero returns the input unchanged.
    pub order: usize,

    /// Whether to simplify after each differentiation.
    pub simplify: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { order: 1, simplify: true }
    }
}

/// The result of differentiating an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    /// The parsed input expression.
    pub input: Expr,

    /// The derivative of the input, simplified if requested.
    pub output: Expr,

    /// Every simplification step taken, in the order they were applied across all orders.
    pub steps: Vec<Step>,
}

impl Derivation {
    /// Evaluates the derivative, substituting `x` for the variable.
    pub fn eval(&self, x: f64) -> f64 {
        self.output.eval(x)
    }
}

/// Parses the given source as a single expression and differentiates it with a fresh parser.
pub fn differentiate(source: &str, options: Options) -> Result<Derivation, Error> {
    differentiate_with(&mut Parser::new(), source, options)
}

/// Parses the given source as a single expression and differentiates it, reusing the given
/// parser.
pub fn differentiate_with(
    parser: &mut Parser,
    source: &str,
    options: Options,
) -> Result<Derivation, Error> {
    let input = parser.parse(source)?;
    derive_parsed(input, source, options)
}

/// Differentiates every non-blank line of the given source as its own expression, reusing the
/// given parser.
///
/// Returns each line paired with its result, so that errors can be reported against the line
/// they came from.
pub fn differentiate_batch<'a>(
    parser: &mut Parser,
    source: &'a str,
    options: Options,
) -> Vec<(&'a str, Result<Derivation, Error>)> {
    parser.parse_batch(source)
        .into_iter()
        .map(|(line, parsed)| {
            let result = parsed
                .map_err(Error::from)
                .and_then(|input| derive_parsed(input, line, options));
            (line, result)
        })
        .collect()
}

/// Differentiates an expression parsed from the given source.
///
/// A simplification error is reported against the whole source, since the trees being simplified
/// no longer correspond to any particular part of it.
fn derive_parsed(input: Expr, source: &str, options: Options) -> Result<Derivation, Error> {
    let mut steps = Vec::new();
    let output = if options.simplify {
        nth_derivative_with(&input, options.order, &mut steps)
            .map_err(|err| err.into_error(0..source.len()))?
    } else {
        (0..options.order).fold(input.clone(), |expr, _| derivative(&expr))
    };
    debug!("order {} derivative of `{}`: {}", options.order, source, output);

    Ok(Derivation { input, output, steps })
}
