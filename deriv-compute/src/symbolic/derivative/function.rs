//! Derivatives of the elementary functions, each combined with the chain rule.

use crate::symbolic::Expr;
use super::derivative;

/// `ln(f)' = f' / f`
pub(super) fn log(inner: &Expr) -> Expr {
    Expr::div(derivative(inner), inner.clone())
}

/// `exp(f)' = exp(f) * f'`
pub(super) fn exp(inner: &Expr) -> Expr {
    Expr::mul(Expr::exp(inner.clone()), derivative(inner))
}

/// `sin(f)' = f' * cos(f)`
pub(super) fn sin(inner: &Expr) -> Expr {
    Expr::mul(derivative(inner), Expr::cos(inner.clone()))
}

/// `cos(f)' = f' * (-1 * sin(f))`
pub(super) fn cos(inner: &Expr) -> Expr {
    Expr::mul(
        derivative(inner),
        Expr::mul(Expr::lit(-1.0), Expr::sin(inner.clone())),
    )
}

/// `tan(f)' = f' * (1 + tan(f)^2)`
pub(super) fn tan(inner: &Expr) -> Expr {
    Expr::mul(
        derivative(inner),
        Expr::add(
            Expr::lit(1.0),
            Expr::pow(Expr::tan(inner.clone()), Expr::lit(2.0)),
        ),
    )
}
