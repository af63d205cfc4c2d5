//! Simplification rules for subtraction.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::{do_subtract, record}, step::{Step, StepCollector}},
};

/// `5-3 = 2`
pub fn fold(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        Some(Expr::lit(lhs.as_literal()? - rhs.as_literal()?))
    });
    record(opt, Step::FoldConstants, step_collector)
}

/// `0-a = a`
/// `a-0 = a`
///
/// The first form drops the sign of `a`.
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        if lhs.is_literal_value(0.0) {
            Some(rhs.clone())
        } else if rhs.is_literal_value(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    });
    record(opt, Step::SubtractZero, step_collector)
}

/// Applies all subtraction rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    fold(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
}
