//! The fixed table of operator and function keywords.

use deriv_compute::symbolic::ExprKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Maps every operator and function keyword to the kind of node it builds.
///
/// Contains the prefix symbol of every operator (`+ - * / ^ log exp sin cos tan`), plus `ln` as
/// an alternate spelling of the natural logarithm. The table is read-only after it is first
/// accessed.
pub static KEYWORDS: Lazy<HashMap<&'static str, ExprKind>> = Lazy::new(|| {
    let mut table = ExprKind::OPERATORS
        .into_iter()
        .filter_map(|kind| Some((kind.symbol()?, kind)))
        .collect::<HashMap<_, _>>();
    table.insert("ln", ExprKind::Log);
    table
});

/// Returns the kind of node built by the given keyword, or [`None`] if the lexeme is not a
/// keyword.
pub fn lookup(lexeme: &str) -> Option<ExprKind> {
    KEYWORDS.get(lexeme).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_and_functions() {
        assert_eq!(lookup("+"), Some(ExprKind::Add));
        assert_eq!(lookup("-"), Some(ExprKind::Subtract));
        assert_eq!(lookup("*"), Some(ExprKind::Multiply));
        assert_eq!(lookup("/"), Some(ExprKind::Divide));
        assert_eq!(lookup("^"), Some(ExprKind::Pow));
        assert_eq!(lookup("exp"), Some(ExprKind::Exp));
        assert_eq!(lookup("sin"), Some(ExprKind::Sin));
        assert_eq!(lookup("cos"), Some(ExprKind::Cos));
        assert_eq!(lookup("tan"), Some(ExprKind::Tan));
    }

    #[test]
    fn both_log_spellings() {
        assert_eq!(lookup("ln"), Some(ExprKind::Log));
        assert_eq!(lookup("log"), Some(ExprKind::Log));
    }

    #[test]
    fn identifiers_are_not_keywords() {
        assert_eq!(lookup("x"), None);
        assert_eq!(lookup("sinh"), None);
        assert_eq!(lookup("Sin"), None);
    }
}
