use deriv_attrs::ErrorKind;
use deriv_error::{Error, ErrorKind};
use std::{fmt, ops::Range};
use super::Expr;

/// The reportable kind of [`SimplifyError::DivisionByZero`]: a non-constant expression was
/// divided by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = [format!("`{}` is divided by zero here", numerator)],
    help = "only constant expressions may be divided by zero, producing infinity or NaN",
)]
pub struct DivisionByZeroReport {
    /// The rendered numerator of the division.
    pub numerator: String,
}

/// An error that can occur while simplifying an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum SimplifyError {
    /// A non-constant expression was divided by the literal `0`.
    ///
    /// Dividing a constant by `0` is **not** an error; it folds to an IEEE-754 infinity or NaN.
    DivisionByZero {
        /// The (simplified) numerator of the offending division.
        numerator: Expr,
    },
}

impl SimplifyError {
    /// Converts this error into a reportable [`Error`] pointing at the given region of the
    /// source code.
    ///
    /// Simplification works on trees that no longer know where they came from, so the caller
    /// chooses the span, usually the whole input.
    pub fn into_error(self, span: Range<usize>) -> Error {
        match self {
            Self::DivisionByZero { numerator } => Error::new(vec![span], DivisionByZeroReport {
                numerator: numerator.to_string(),
            }),
        }
    }
}

impl fmt::Display for SimplifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { numerator } => {
                write!(f, "division by zero: `{}` is divided by zero", numerator)
            },
        }
    }
}

impl std::error::Error for SimplifyError {}
