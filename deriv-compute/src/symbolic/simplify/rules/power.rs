//! Simplification rules for exponentiation.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::{do_power, record}, step::{Step, StepCollector}},
};

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_power(expr, |_, rhs| {
        rhs.is_literal_value(0.0).then(|| Expr::lit(1.0))
    });
    record(opt, Step::PowerZero, step_collector)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        rhs.is_literal_value(1.0).then(|| lhs.clone())
    });
    record(opt, Step::PowerOne, step_collector)
}

/// `2^3 = 8`
pub fn fold(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        Some(Expr::lit(lhs.as_literal()?.powf(rhs.as_literal()?)))
    });
    record(opt, Step::FoldConstants, step_collector)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| fold(expr, step_collector))
}
