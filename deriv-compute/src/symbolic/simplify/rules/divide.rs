//! Simplification rules for division.

use crate::symbolic::{
    expr::Expr,
    simplify::{error::SimplifyError, rules::{do_divide, record}, step::{Step, StepCollector}},
};

/// `6/3 = 2`
///
/// Division by a literal zero follows IEEE-754: `4/0 = inf`, `0/0 = NaN`.
pub fn fold(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, rhs| {
        Some(Expr::lit(lhs.as_literal()? / rhs.as_literal()?))
    });
    record(opt, Step::FoldConstants, step_collector)
}

/// `0/a = 0`
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, _| {
        lhs.is_literal_value(0.0).then(|| Expr::lit(0.0))
    });
    record(opt, Step::DivideZero, step_collector)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector) -> Option<Expr> {
    let opt = do_divide(expr, |lhs, rhs| {
        rhs.is_literal_value(1.0).then(|| lhs.clone())
    });
    record(opt, Step::DivideOne, step_collector)
}

/// Returns [`Err`] if a non-constant numerator is divided by zero.
///
/// Must run after [`fold`], which handles a constant numerator.
fn check_division_by_zero(expr: &Expr) -> Result<(), SimplifyError> {
    if let Expr::Divide(lhs, rhs) = expr {
        if !lhs.is_literal() && rhs.is_literal_value(0.0) {
            return Err(SimplifyError::DivisionByZero { numerator: (**lhs).clone() });
        }
    }
    Ok(())
}

/// Applies all division rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector) -> Result<Option<Expr>, SimplifyError> {
    if let Some(folded) = fold(expr, step_collector) {
        return Ok(Some(folded));
    }

    check_division_by_zero(expr)?;
    Ok(divide_zero(expr, step_collector)
        .or_else(|| divide_one(expr, step_collector)))
}
