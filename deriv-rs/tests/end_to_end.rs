use assert_float_eq::*;
use deriv_compute::symbolic::{simplify::DivisionByZeroReport, Expr, Step};
use deriv_parser::{parser::error::kind::ArityMismatch, Parser};
use deriv_rs::{differentiate, differentiate_batch, differentiate_with, Error, Options};
use pretty_assertions::assert_eq;

/// Differentiates the input once and simplifies the result, returning the rendered output.
fn derive(input: &str) -> String {
    differentiate(input, Options::default()).unwrap().output.to_string()
}

fn plain(err: &Error, input: &str) -> String {
    let report = err.report_to_string("input", input);
    String::from_utf8(strip_ansi_escapes::strip(report.as_bytes())).unwrap()
}

#[test]
fn natural_log() {
    assert_eq!(derive("(ln x)"), "(/ 1 x)");
    assert_eq!(derive("(log x)"), "(/ 1 x)");
}

#[test]
fn sum_with_constant() {
    let derivation = differentiate("(+ x 2)", Options::default()).unwrap();
    assert_eq!(derivation.input, Expr::add(Expr::ident("x"), Expr::lit(2.0)));
    assert_eq!(derivation.output, Expr::lit(1.0));
    assert_eq!(derivation.steps, vec![Step::FoldConstants]);
}

#[test]
fn square() {
    let derivation = differentiate("(^ x 2)", Options::default()).unwrap();
    assert_eq!(derivation.output, Expr::mul(Expr::lit(2.0), Expr::ident("x")));
    assert_eq!(derivation.output.to_string(), "(* 2 x)");
}

#[test]
fn difference_keeps_operand_order() {
    let derivation = differentiate("(- x 3)", Options::default()).unwrap();
    assert_eq!(derivation.input, Expr::sub(Expr::ident("x"), Expr::lit(3.0)));
    assert_eq!(derivation.output, Expr::lit(1.0));
}

#[test]
fn chain_rule() {
    assert_eq!(derive("(sin (* 2 x))"), "(* 2 (cos (* 2 x)))");
    assert_eq!(derive("(exp x)"), "(exp x)");
}

#[test]
fn without_simplification() {
    let options = Options { simplify: false, ..Options::default() };
    let derivation = differentiate("(+ x 2)", options).unwrap();
    assert_eq!(derivation.output.to_string(), "(+ 1 0)");
    assert!(derivation.steps.is_empty());
}

#[test]
fn second_derivative() {
    let options = Options { order: 2, ..Options::default() };
    let derivation = differentiate("(^ x 3)", options).unwrap();
    assert_eq!(derivation.output.to_string(), "(* 3 (* 2 x))");
    assert_float_absolute_eq!(derivation.eval(1.5), 9.0);
}

#[test]
fn order_zero_returns_input_unchanged() {
    for simplify in [true, false] {
        let options = Options { order: 0, simplify };
        let derivation = differentiate("(* 1 (+ x 0))", options).unwrap();
        assert_eq!(derivation.output, derivation.input);
        assert_eq!(derivation.output.to_string(), "(* 1 (+ x 0))");
        assert!(derivation.steps.is_empty());
    }
}

#[test]
fn constant_division_by_zero_folds() {
    // 4/0 folds to infinity, and its derivative folds 0/0 to NaN
    let derivation = differentiate("(* (/ 4 0) x)", Options::default()).unwrap();
    assert_eq!(derivation.output.to_string(), "(+ (* NaN x) inf)");
}

#[test]
fn batch_reports_each_line() {
    let mut parser = Parser::new();
    let results = differentiate_batch(
        &mut parser,
        "(ln x)\n\n   \n(+ 1)\n(sin (/ x 0))\n(^ x 2)\n",
        Options::default(),
    );

    let lines = results.iter().map(|(line, _)| *line).collect::<Vec<_>>();
    assert_eq!(lines, vec!["(ln x)", "(+ 1)", "(sin (/ x 0))", "(^ x 2)"]);

    assert_eq!(results[0].1.as_ref().unwrap().output.to_string(), "(/ 1 x)");
    assert!(matches!(&results[1].1, Err(Error::Parse(_))));
    let Err(Error::Simplify(err)) = &results[2].1 else {
        panic!("expected a simplification error, got {:?}", results[2].1);
    };
    assert_eq!(err.spans, vec![0.."(sin (/ x 0))".len()]);
    assert_eq!(results[3].1.as_ref().unwrap().output.to_string(), "(* 2 x)");
}

#[test]
fn division_by_zero_is_reported() {
    let input = "(sin (/ x 0))";
    let err = differentiate(input, Options::default()).unwrap_err();
    let Error::Simplify(inner) = &err else {
        panic!("expected a simplification error, got {:?}", err);
    };
    assert_eq!(inner.spans, vec![0..input.len()]);
    assert_eq!(
        inner.downcast_ref::<DivisionByZeroReport>(),
        Some(&DivisionByZeroReport { numerator: "x".to_string() }),
    );

    let report = plain(&err, input);
    assert!(report.contains("division by zero"));
    assert!(report.contains("`x` is divided by zero here"));
}

#[test]
fn parse_errors_are_reported() {
    let input = "(+ 1)";
    let err = differentiate(input, Options::default()).unwrap_err();
    assert_eq!(err.errors().len(), 1);
    assert!(err.errors()[0].is::<ArityMismatch>());

    let report = plain(&err, input);
    assert!(report.contains("wrong number of operands for `+`"));
    assert!(report.contains("this operator expects 2 operands, but 1 was given"));
}

#[test]
fn parser_is_reusable() {
    let mut parser = Parser::new();
    assert!(differentiate_with(&mut parser, "(+ 1 2) (+ 3 4)", Options::default()).is_err());
    let derivation = differentiate_with(&mut parser, "(cos x)", Options::default()).unwrap();
    assert_eq!(derivation.output.to_string(), "(* -1 (sin x))");
}

#[test]
fn derivatives_agree_with_finite_differences() {
    let h = 1e-6;
    for input in [
        "(* (sin x) (exp x))",
        "(/ (cos x) (+ x 2))",
        "(tan (* 2 x))",
        "(^ x (sin x))",
        "(ln (+ (^ x 2) 1))",
    ] {
        let derivation = differentiate(input, Options::default()).unwrap();
        for x in [0.3, 0.7, 1.1] {
            let expected = (derivation.input.eval(x + h) - derivation.input.eval(x - h)) / (2.0 * h);
            assert_float_relative_eq!(derivation.eval(x), expected, 1e-5);
        }
    }
}
