//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which applies a fixed table of identity and
//! constant-folding rules to an expression. It is **not** a canonicalizer: the expression is
//! traversed once, in post-order (children first), and at most one rule is applied at each node.
//! There is no iteration to a fixed point, so cancellations that would need several rules at the
//! same node are not found.
//!
//! ```
//! use deriv_compute::symbolic::{simplify, Expr};
//!
//! // (+ (* 0 x) (* 3 1)) -> (+ 0 3) -> 3
//! let expr = Expr::add(
//!     Expr::mul(Expr::lit(0.0), Expr::ident("x")),
//!     Expr::mul(Expr::lit(3.0), Expr::lit(1.0)),
//! );
//! assert_eq!(simplify(&expr).unwrap(), Expr::lit(3.0));
//! ```
//!
//! The only error is dividing a non-constant expression by zero; see [`SimplifyError`].

mod error;
pub mod rules;
pub mod step;

use log::trace;
use step::{Step, StepCollector};
use super::expr::Expr;

pub use error::{DivisionByZeroReport, SimplifyError};

/// Base implementation of the simplification algorithm.
fn inner_simplify(
    expr: &Expr,
    step_collector: &mut dyn StepCollector,
) -> Result<Expr, SimplifyError> {
    // simplify the children first, then rebuild this node around them
    let node = if let Some((lhs, rhs)) = expr.as_binary() {
        let lhs = inner_simplify(lhs, step_collector)?;
        let rhs = inner_simplify(rhs, step_collector)?;
        expr.kind().build_binary(lhs, rhs)
    } else if let Some(inner) = expr.as_unary() {
        let inner = inner_simplify(inner, step_collector)?;
        expr.kind().build_unary(inner)
    } else {
        None
    };

    let Some(node) = node else {
        // leaves are already as simple as they get
        return Ok(expr.clone());
    };

    match rules::all(&node, step_collector)? {
        Some(simplified) => {
            trace!("simplified {} => {}", node, simplified);
            Ok(simplified)
        },
        None => Ok(node),
    }
}

/// Simplify the given expression with a single post-order pass of the rule table.
///
/// Returns [`Err`] if a non-constant expression is divided by zero.
pub fn simplify(expr: &Expr) -> Result<Expr, SimplifyError> {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression, collecting the steps taken by the simplifier into the given
/// collector.
pub fn simplify_with(
    expr: &Expr,
    step_collector: &mut dyn StepCollector,
) -> Result<Expr, SimplifyError> {
    inner_simplify(expr, step_collector)
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), SimplifyError> {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps)?;
    Ok((expr, steps))
}
