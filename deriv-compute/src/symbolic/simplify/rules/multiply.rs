//! Simplification rules for multiplication.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::{do_multiply, record}, step::{Step, StepCollector}},
};

/// `2*3 = 6`
pub fn fold(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        Some(Expr::lit(lhs.as_literal()? * rhs.as_literal()?))
    });
    record(opt, Step::FoldConstants, step_collector)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_literal_value(0.0) || rhs.is_literal_value(0.0) {
            Some(Expr::lit(0.0))
        } else {
            None
        }
    });
    record(opt, Step::MultiplyZero, step_collector)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_literal_value(1.0) {
            Some(rhs.clone())
        } else if rhs.is_literal_value(1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    });
    record(opt, Step::MultiplyOne, step_collector)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    fold(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
}
