//! Structural differentiation.
//!
//! Every node type has exactly one rule, applied recursively. The result is **not** simplified;
//! pass it through [`simplify`](crate::symbolic::simplify()) to clean it up.
//!
//! There is a single, implicit variable of differentiation: every [`Expr::Identifier`]
//! differentiates to `1`, regardless of its name. Expressions with several distinct identifiers
//! are differentiated as if all of them were the same variable.

mod function;

use log::trace;
use super::{simplify_with, Expr, SimplifyError, StepCollector};

/// `(f + g)' = f' + g'`
fn sum_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::add(derivative(f), derivative(g))
}

/// `(f - g)' = f' - g'`
fn difference_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::sub(derivative(f), derivative(g))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::add(
        Expr::mul(derivative(f), g.clone()),
        Expr::mul(f.clone(), derivative(g)),
    )
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::div(
        Expr::sub(
            Expr::mul(derivative(f), g.clone()),
            Expr::mul(f.clone(), derivative(g)),
        ),
        Expr::pow(g.clone(), Expr::lit(2.0)),
    )
}

/// `(f^g)' = (g * f' + f * ln(f) * g') * f^(g - 1)`
///
/// This combines the power rule and the exponential rule, so it holds whether the variable
/// appears in the base, the exponent, or both. When `g` is constant, `g'` is zero and the second
/// term vanishes after simplification.
fn power_rule(f: &Expr, g: &Expr) -> Expr {
    Expr::mul(
        Expr::add(
            Expr::mul(g.clone(), derivative(f)),
            Expr::mul(
                Expr::mul(f.clone(), Expr::log(f.clone())),
                derivative(g),
            ),
        ),
        Expr::pow(f.clone(), Expr::sub(g.clone(), Expr::lit(1.0))),
    )
}

/// Computes the derivative of the given expression with respect to the implicit variable.
///
/// The input is left untouched; a new tree is returned.
pub fn derivative(f: &Expr) -> Expr {
    match f {
        Expr::Literal(_) => Expr::lit(0.0),
        Expr::Identifier(_) => Expr::lit(1.0),
        Expr::Add(l, r) => sum_rule(l, r),
        Expr::Subtract(l, r) => difference_rule(l, r),
        Expr::Multiply(l, r) => product_rule(l, r),
        Expr::Divide(l, r) => quotient_rule(l, r),
        Expr::Pow(base, exponent) => power_rule(base, exponent),
        Expr::Log(inner) => function::log(inner),
        Expr::Exp(inner) => function::exp(inner),
        Expr::Sin(inner) => function::sin(inner),
        Expr::Cos(inner) => function::cos(inner),
        Expr::Tan(inner) => function::tan(inner),
    }
}

/// Computes the `n`th derivative of the given expression, simplifying after every
/// differentiation so that the intermediate trees do not grow needlessly.
///
/// The zeroth derivative is the expression itself, returned unsimplified. Returns [`Err`] if any
/// intermediate simplification divides by zero.
pub fn nth_derivative(f: &Expr, n: usize) -> Result<Expr, SimplifyError> {
    nth_derivative_with(f, n, &mut ())
}

/// Computes the `n`th derivative of the given expression like [`nth_derivative`], collecting the
/// steps taken by every simplification into the given collector.
pub fn nth_derivative_with(
    f: &Expr,
    n: usize,
    step_collector: &mut dyn StepCollector,
) -> Result<Expr, SimplifyError> {
    let mut current = f.clone();
    for order in 1..=n {
        current = simplify_with(&derivative(&current), step_collector)?;
        trace!("derivative of order {}: {}", order, current);
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{simplify, simplify_with_steps, Step};
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::ident("x")
    }

    fn lit(value: f64) -> Expr {
        Expr::lit(value)
    }

    /// Approximates the derivative of the expression at `x` with a central difference.
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (e.eval(x + DX) - e.eval(x - DX)) / (2.0 * DX)
    }

    /// Checks the symbolic derivative against a numeric approximation at the given points.
    fn test_for_function(function: Expr, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let symbolic = simplify(&derivative(&function)).unwrap();
        for point in points.into_iter() {
            let symbolically_computed = symbolic.eval(point);
            let numerically_computed = finite_difference(&function, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "For \"{function}\" at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
            );
        }
    }

    #[test]
    fn leaves() {
        assert_eq!(derivative(&lit(7.5)), lit(0.0));
        assert_eq!(derivative(&x()), lit(1.0));
        // every identifier is the variable of differentiation
        assert_eq!(derivative(&Expr::ident("y")), lit(1.0));
    }

    #[test]
    fn sum_and_difference() {
        assert_eq!(derivative(&Expr::add(x(), lit(2.0))), Expr::add(lit(1.0), lit(0.0)));
        assert_eq!(derivative(&Expr::sub(lit(2.0), x())), Expr::sub(lit(0.0), lit(1.0)));
    }

    #[test]
    fn product() {
        let f = Expr::mul(lit(3.0), x());
        assert_eq!(derivative(&f), Expr::add(
            Expr::mul(lit(0.0), x()),
            Expr::mul(lit(3.0), lit(1.0)),
        ));
    }

    #[test]
    fn quotient() {
        let f = Expr::div(lit(1.0), x());
        assert_eq!(derivative(&f), Expr::div(
            Expr::sub(
                Expr::mul(lit(0.0), x()),
                Expr::mul(lit(1.0), lit(1.0)),
            ),
            Expr::pow(x(), lit(2.0)),
        ));
    }

    #[test]
    fn power() {
        let f = Expr::pow(x(), lit(2.0));
        assert_eq!(derivative(&f), Expr::mul(
            Expr::add(
                Expr::mul(lit(2.0), lit(1.0)),
                Expr::mul(Expr::mul(x(), Expr::log(x())), lit(0.0)),
            ),
            Expr::pow(x(), Expr::sub(lit(2.0), lit(1.0))),
        ));
    }

    #[test]
    fn log_and_exp() {
        assert_eq!(derivative(&Expr::log(x())), Expr::div(lit(1.0), x()));
        assert_eq!(derivative(&Expr::exp(x())), Expr::mul(Expr::exp(x()), lit(1.0)));
    }

    #[test]
    fn trigonometry() {
        assert_eq!(derivative(&Expr::sin(x())), Expr::mul(lit(1.0), Expr::cos(x())));
        assert_eq!(
            derivative(&Expr::cos(x())),
            Expr::mul(lit(1.0), Expr::mul(lit(-1.0), Expr::sin(x()))),
        );
        assert_eq!(
            derivative(&Expr::tan(x())),
            Expr::mul(lit(1.0), Expr::add(lit(1.0), Expr::pow(Expr::tan(x()), lit(2.0)))),
        );
    }

    #[test]
    fn chain_rule_uses_inner_derivative() {
        // sin(2x)' = (0 * x + 2 * 1) * cos(2x)
        let inner = Expr::mul(lit(2.0), x());
        assert_eq!(derivative(&Expr::sin(inner.clone())), Expr::mul(
            Expr::add(Expr::mul(lit(0.0), x()), Expr::mul(lit(2.0), lit(1.0))),
            Expr::cos(inner),
        ));
    }

    #[test]
    fn input_is_not_modified() {
        let f = Expr::mul(Expr::sin(x()), Expr::pow(x(), lit(3.0)));
        let before = f.clone();
        let _ = derivative(&f);
        assert_eq!(f, before);
    }

    #[test]
    fn nth_derivative_of_cubic() {
        let f = Expr::pow(x(), lit(3.0));
        assert_eq!(nth_derivative(&f, 0).unwrap(), f);

        // evaluate instead of comparing trees: single-pass simplification leaves extra structure
        let third = nth_derivative(&f, 3).unwrap();
        for point in [0.5, 1.0, 2.0] {
            assert!((third.eval(point) - 6.0).abs() < 1e-9);
        }
    }

    #[test]
    fn nth_derivative_collects_steps_of_every_order() {
        let f = Expr::pow(x(), lit(2.0));

        let mut steps = Vec::new();
        let first = nth_derivative_with(&f, 1, &mut steps).unwrap();
        let (expected, expected_steps) = simplify_with_steps(&derivative(&f)).unwrap();
        assert_eq!(first, expected);
        assert_eq!(steps, expected_steps);

        let mut steps: Vec<Step> = Vec::new();
        let second = nth_derivative_with(&f, 2, &mut steps).unwrap();
        assert_eq!(second, nth_derivative(&f, 2).unwrap());
        assert!(steps.len() > expected_steps.len());

        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(nth_derivative_with(&f, 0, &mut steps).unwrap(), f);
        assert!(steps.is_empty());
    }

    #[test]
    fn numeric_agreement() {
        test_for_function(Expr::add(Expr::pow(x(), lit(2.0)), Expr::add(x(), lit(1.0))), [0., 1., 2., 5., 8.]);
        test_for_function(Expr::mul(Expr::sin(x()), Expr::cos(x())), [0., 0.5, 1., 2.]);
        test_for_function(Expr::tan(Expr::mul(lit(2.0), x())), [0., 0.25, 0.5]);
        test_for_function(Expr::div(Expr::exp(x()), Expr::add(x(), lit(3.0))), [0., 1., 2.]);
        test_for_function(Expr::log(Expr::pow(x(), lit(2.0))), [0.5, 1., 3.]);
        test_for_function(Expr::pow(x(), x()), [0.5, 1., 2.]);
    }
}
