use deriv_attrs::ErrorKind;
use deriv_error::{Error, ErrorKind};

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "something went wrong",
    labels = ["this part".to_string(), format!("and {} part", which)],
    help = "try something else",
)]
struct TwoLabels {
    which: &'static str,
}

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "unit error", labels = ["here"])]
struct Unit;

fn plain(err: &Error, input: &str) -> String {
    let report = err.report_to_string("input", input);
    String::from_utf8(strip_ansi_escapes::strip(report.as_bytes())).unwrap()
}

#[test]
fn report_contains_message_labels_and_help() {
    let input = "(+ x y)";
    let err = Error::new(vec![3..4, 5..6], TwoLabels { which: "that" });
    let report = plain(&err, input);

    assert!(report.contains("something went wrong"));
    assert!(report.contains("this part"));
    assert!(report.contains("and that part"));
    assert!(report.contains("try something else"));
}

#[test]
fn downcast_to_concrete_kind() {
    let err = Error::new(vec![0..1], Unit);
    assert!(err.is::<Unit>());
    assert!(!err.is::<TwoLabels>());
    assert_eq!(err.downcast_ref::<Unit>(), Some(&Unit));
}
