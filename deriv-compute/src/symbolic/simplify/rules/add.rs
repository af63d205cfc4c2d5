//! Simplification rules for addition.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::{do_add, record}, step::{Step, StepCollector}},
};

/// `2+3 = 5`
pub fn fold(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        Some(Expr::lit(lhs.as_literal()? + rhs.as_literal()?))
    });
    record(opt, Step::FoldConstants, step_collector)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if lhs.is_literal_value(0.0) {
            Some(rhs.clone())
        } else if rhs.is_literal_value(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    });
    record(opt, Step::AddZero, step_collector)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    fold(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
}
