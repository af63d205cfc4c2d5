use ariadne::Fmt;
use deriv_attrs::ErrorKind;
use deriv_error::{ErrorKind, EXPR};

/// The input contained no expression at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
    help = "an expression looks like `(+ 2 x)`",
)]
pub struct EmptyInput;

/// A character that cannot appear in a prefix expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", symbol),
    labels = ["here"],
    help = format!(
        "expressions may only contain parentheses, the operators {}, names, and whole numbers",
        "+ - * / ^".fg(EXPR),
    ),
)]
pub struct UnknownSymbol {
    /// The character that was found.
    pub symbol: String,
}

/// A run of digits that does not fit in an integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number literal",
    labels = ["this number is too large"],
    help = format!("numbers must be at most {}", i64::MAX.fg(EXPR)),
)]
pub struct InvalidLiteral;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// An operator or function was not written directly after an opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` must come right after an opening parenthesis", operator),
    labels = ["this operator"],
    help = format!("write it in prefix form: {}", format!("({} ...)", operator).fg(EXPR)),
)]
pub struct OperatorPosition {
    /// The operator that was misplaced.
    pub operator: String,
}

/// An operator was given the wrong number of operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of operands for `{}`", operator),
    labels = [format!(
        "this operator expects {} operand{}, but {} {} given",
        expected,
        if *expected == 1 { "" } else { "s" },
        found,
        if *found == 1 { "was" } else { "were" },
    )],
)]
pub struct ArityMismatch {
    /// The operator that was applied.
    pub operator: String,

    /// The number of operands the operator takes.
    pub expected: usize,

    /// The number of operands that were given.
    pub found: usize,
}

/// More than one expression was found in an input that should contain exactly one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a single expression",
    labels = std::iter::repeat("I could not attach this expression to the first one").take(*count),
    help = "put each expression on its own line",
)]
pub struct ExtraExpression {
    /// The number of extra expressions.
    pub count: usize,
}
