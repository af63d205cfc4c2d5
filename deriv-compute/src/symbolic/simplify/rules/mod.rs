//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; the children are expected to
//! have been simplified already.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;
pub mod subtract;

use super::{error::SimplifyError, step::{Step, StepCollector}, Expr};

/// If the expression is an add expression, calls the given transformation function with the
/// left and right operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Add(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a subtract expression, calls the given transformation function with the
/// left and right operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_subtract(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Subtract(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a multiplication expression, calls the given transformation function
/// with the left and right operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Multiply(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a division expression, calls the given transformation function with the
/// numerator and denominator.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_divide(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Divide(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a power expression, calls the given transformation function with the
/// base and exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Pow(lhs, rhs) = expr {
        f(lhs, rhs)
    } else {
        None
    }
}

/// Records the given step if a rule produced an expression.
fn record(opt: Option<Expr>, step: Step, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let expr = opt?;
    step_collector.push(step);
    Some(expr)
}

/// Applies the first rule that matches the given node.
///
/// Functions (`log`, `exp`, `sin`, `cos`, `tan`) have no rules of their own. Returns [`Err`] if
/// the node divides a non-constant expression by zero.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector) -> Result<Option<Expr>, SimplifyError> {
    Ok(match expr {
        Expr::Add(..) => add::all(expr, step_collector),
        Expr::Subtract(..) => subtract::all(expr, step_collector),
        Expr::Multiply(..) => multiply::all(expr, step_collector),
        Expr::Divide(..) => divide::all(expr, step_collector)?,
        Expr::Pow(..) => power::all(expr, step_collector),
        Expr::Literal(_)
        | Expr::Identifier(_)
        | Expr::Log(_)
        | Expr::Exp(_)
        | Expr::Sin(_)
        | Expr::Cos(_)
        | Expr::Tan(_) => None,
    })
}
