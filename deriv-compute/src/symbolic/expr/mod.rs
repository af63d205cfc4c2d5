//! The expression tree that every other part of the crate operates on.
//!
//! An [`Expr`] is one node of a strict tree: composite variants exclusively own their children,
//! so there is no sharing and no cycles. Trees are never mutated once built; differentiation and
//! simplification borrow a tree and produce a brand new one.
//!
//! # Equality
//!
//! The [`PartialEq`] implementation is **structural**. `(+ x 1)` and `(+ 1 x)` are different
//! trees, even though they are semantically equal. Two trees are interchangeable if and only if
//! they render to the same string.
//!
//! # Rendering
//!
//! The [`Display`](std::fmt::Display) implementation renders the tree in fully-parenthesized
//! prefix notation, the same notation accepted by the parser:
//!
//! ```
//! use deriv_compute::symbolic::Expr;
//!
//! let expr = Expr::add(Expr::lit(2.0), Expr::ident("x"));
//! assert_eq!(expr.to_string(), "(+ 2 x)");
//!
//! let expr = Expr::log(Expr::mul(Expr::lit(0.5), Expr::ident("x")));
//! assert_eq!(expr.to_string(), "(log (* 0.500000 x))");
//! ```

mod eval;
mod iter;

use iter::ExprIter;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of a mathematical expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant, such as `2` or `0.5`.
    Literal(f64),

    /// A free variable, such as `x`.
    ///
    /// There is no notion of scope or binding. Every identifier is treated as **the** variable of
    /// differentiation.
    Identifier(String),

    /// `left + right`
    Add(Box<Expr>, Box<Expr>),

    /// `left - right`
    Subtract(Box<Expr>, Box<Expr>),

    /// `left * right`
    Multiply(Box<Expr>, Box<Expr>),

    /// `left / right`
    Divide(Box<Expr>, Box<Expr>),

    /// `base ^ exponent`, where both operands may be arbitrary expressions.
    Pow(Box<Expr>, Box<Expr>),

    /// The natural logarithm.
    Log(Box<Expr>),

    /// The natural exponential function, `e^x`.
    Exp(Box<Expr>),

    /// The sine function.
    Sin(Box<Expr>),

    /// The cosine function.
    Cos(Box<Expr>),

    /// The tangent function.
    Tan(Box<Expr>),
}

/// The kind of an [`Expr`], without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Literal,
    Identifier,
    Add,
    Subtract,
    Multiply,
    Divide,
    Pow,
    Log,
    Exp,
    Sin,
    Cos,
    Tan,
}

impl ExprKind {
    /// All operator kinds, in the order they are listed in the prefix notation grammar.
    pub const OPERATORS: [ExprKind; 10] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Pow,
        Self::Log,
        Self::Exp,
        Self::Sin,
        Self::Cos,
        Self::Tan,
    ];

    /// Returns the symbol used to write this kind of node in prefix notation, or [`None`] for
    /// leaves.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Literal | Self::Identifier => None,
            Self::Add => Some("+"),
            Self::Subtract => Some("-"),
            Self::Multiply => Some("*"),
            Self::Divide => Some("/"),
            Self::Pow => Some("^"),
            Self::Log => Some("log"),
            Self::Exp => Some("exp"),
            Self::Sin => Some("sin"),
            Self::Cos => Some("cos"),
            Self::Tan => Some("tan"),
        }
    }

    /// Returns the number of operands this kind of node has.
    pub fn arity(self) -> usize {
        match self {
            Self::Literal | Self::Identifier => 0,
            Self::Log | Self::Exp | Self::Sin | Self::Cos | Self::Tan => 1,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Pow => 2,
        }
    }

    /// Builds a unary node of this kind around the given operand. Returns [`None`] if this kind
    /// is not unary.
    pub fn build_unary(self, inner: Expr) -> Option<Expr> {
        let inner = Box::new(inner);
        Some(match self {
            Self::Log => Expr::Log(inner),
            Self::Exp => Expr::Exp(inner),
            Self::Sin => Expr::Sin(inner),
            Self::Cos => Expr::Cos(inner),
            Self::Tan => Expr::Tan(inner),
            _ => return None,
        })
    }

    /// Builds a binary node of this kind from the given operands, in order. Returns [`None`] if
    /// this kind is not binary.
    pub fn build_binary(self, left: Expr, right: Expr) -> Option<Expr> {
        let (left, right) = (Box::new(left), Box::new(right));
        Some(match self {
            Self::Add => Expr::Add(left, right),
            Self::Subtract => Expr::Subtract(left, right),
            Self::Multiply => Expr::Multiply(left, right),
            Self::Divide => Expr::Divide(left, right),
            Self::Pow => Expr::Pow(left, right),
            _ => return None,
        })
    }
}

impl Expr {
    /// Creates a [`Expr::Literal`].
    pub fn lit(value: f64) -> Self {
        Self::Literal(value)
    }

    /// Creates an [`Expr::Identifier`].
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates an [`Expr::Add`].
    pub fn add(left: Expr, right: Expr) -> Self {
        Self::Add(Box::new(left), Box::new(right))
    }

    /// Creates an [`Expr::Subtract`].
    pub fn sub(left: Expr, right: Expr) -> Self {
        Self::Subtract(Box::new(left), Box::new(right))
    }

    /// Creates an [`Expr::Multiply`].
    pub fn mul(left: Expr, right: Expr) -> Self {
        Self::Multiply(Box::new(left), Box::new(right))
    }

    /// Creates an [`Expr::Divide`].
    pub fn div(left: Expr, right: Expr) -> Self {
        Self::Divide(Box::new(left), Box::new(right))
    }

    /// Creates an [`Expr::Pow`].
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self::Pow(Box::new(base), Box::new(exponent))
    }

    /// Creates an [`Expr::Log`].
    pub fn log(inner: Expr) -> Self {
        Self::Log(Box::new(inner))
    }

    /// Creates an [`Expr::Exp`].
    pub fn exp(inner: Expr) -> Self {
        Self::Exp(Box::new(inner))
    }

    /// Creates an [`Expr::Sin`].
    pub fn sin(inner: Expr) -> Self {
        Self::Sin(Box::new(inner))
    }

    /// Creates an [`Expr::Cos`].
    pub fn cos(inner: Expr) -> Self {
        Self::Cos(Box::new(inner))
    }

    /// Creates an [`Expr::Tan`].
    pub fn tan(inner: Expr) -> Self {
        Self::Tan(Box::new(inner))
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> ExprKind {
        match self {
            Self::Literal(_) => ExprKind::Literal,
            Self::Identifier(_) => ExprKind::Identifier,
            Self::Add(..) => ExprKind::Add,
            Self::Subtract(..) => ExprKind::Subtract,
            Self::Multiply(..) => ExprKind::Multiply,
            Self::Divide(..) => ExprKind::Divide,
            Self::Pow(..) => ExprKind::Pow,
            Self::Log(_) => ExprKind::Log,
            Self::Exp(_) => ExprKind::Exp,
            Self::Sin(_) => ExprKind::Sin,
            Self::Cos(_) => ExprKind::Cos,
            Self::Tan(_) => ExprKind::Tan,
        }
    }

    /// If the expression is an [`Expr::Literal`], returns the contained value.
    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Self::Literal(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is an [`Expr::Literal`].
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns true if the expression is an [`Expr::Literal`] with exactly the given value.
    pub fn is_literal_value(&self, value: f64) -> bool {
        self.as_literal() == Some(value)
    }

    /// Returns the operands of a binary node, or [`None`] for any other node.
    pub fn as_binary(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Self::Add(l, r)
            | Self::Subtract(l, r)
            | Self::Multiply(l, r)
            | Self::Divide(l, r)
            | Self::Pow(l, r) => Some((l, r)),
            _ => None,
        }
    }

    /// Returns the operand of a unary node, or [`None`] for any other node.
    pub fn as_unary(&self) -> Option<&Expr> {
        match self {
            Self::Log(inner)
            | Self::Exp(inner)
            | Self::Sin(inner)
            | Self::Cos(inner)
            | Self::Tan(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first, children before their parent).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the depth of the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal(_) | Self::Identifier(_) => 1,
            Self::Add(l, r)
            | Self::Subtract(l, r)
            | Self::Multiply(l, r)
            | Self::Divide(l, r)
            | Self::Pow(l, r) => 1 + l.depth().max(r.depth()),
            Self::Log(inner)
            | Self::Exp(inner)
            | Self::Sin(inner)
            | Self::Cos(inner)
            | Self::Tan(inner) => 1 + inner.depth(),
        }
    }
}

/// Formats a literal the way the renderer prints numbers: integers without a fractional part,
/// everything else with six decimal places.
fn fmt_literal(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value == 0.0 {
        // also catches `-0`
        write!(f, "0")
    } else if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{}", value)
    } else if value.is_finite() {
        write!(f, "{:.6}", value)
    } else {
        write!(f, "{}", value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // leaves are handled here, so every other node has a symbol
        let symbol = self.kind().symbol();
        match self {
            Self::Literal(value) => fmt_literal(*value, f),
            Self::Identifier(name) => write!(f, "{}", name),
            Self::Add(l, r)
            | Self::Subtract(l, r)
            | Self::Multiply(l, r)
            | Self::Divide(l, r)
            | Self::Pow(l, r) => write!(f, "({} {} {})", symbol.unwrap_or_default(), l, r),
            Self::Log(inner)
            | Self::Exp(inner)
            | Self::Sin(inner)
            | Self::Cos(inner)
            | Self::Tan(inner) => write!(f, "({} {})", symbol.unwrap_or_default(), inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn render_integer_literals() {
        assert_eq!(Expr::lit(2.0).to_string(), "2");
        assert_eq!(Expr::lit(-1.0).to_string(), "-1");
        assert_eq!(Expr::lit(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Expr::lit(-0.0).to_string(), "0");
    }

    #[test]
    fn render_fractional_literals() {
        assert_eq!(Expr::lit(0.5).to_string(), "0.500000");
        assert_eq!(Expr::lit(-2.25).to_string(), "-2.250000");
        assert_eq!(Expr::lit(1.0 / 3.0).to_string(), "0.333333");
    }

    #[test]
    fn render_non_finite_literals() {
        assert_eq!(Expr::lit(f64::INFINITY).to_string(), "inf");
        assert_eq!(Expr::lit(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Expr::lit(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn render_every_operator() {
        let x = || Expr::ident("x");
        let cases = [
            (Expr::add(x(), Expr::lit(1.0)), "(+ x 1)"),
            (Expr::sub(x(), Expr::lit(1.0)), "(- x 1)"),
            (Expr::mul(x(), Expr::lit(1.0)), "(* x 1)"),
            (Expr::div(x(), Expr::lit(1.0)), "(/ x 1)"),
            (Expr::pow(x(), Expr::lit(1.0)), "(^ x 1)"),
            (Expr::log(x()), "(log x)"),
            (Expr::exp(x()), "(exp x)"),
            (Expr::sin(x()), "(sin x)"),
            (Expr::cos(x()), "(cos x)"),
            (Expr::tan(x()), "(tan x)"),
        ];

        for (expr, expected) in cases {
            assert_eq!(expr.to_string(), expected);
        }
    }

    #[test]
    fn render_nested() {
        let expr = Expr::mul(
            Expr::cos(Expr::add(Expr::ident("x"), Expr::lit(1.0))),
            Expr::pow(Expr::ident("velocity"), Expr::lit(2.0)),
        );
        assert_eq!(expr.to_string(), "(* (cos (+ x 1)) (^ velocity 2))");
    }

    #[test]
    fn kind_table_is_consistent() {
        for kind in ExprKind::OPERATORS {
            let symbol = kind.symbol().unwrap();
            assert!(!symbol.is_empty());
            match kind.arity() {
                1 => {
                    let built = kind.build_unary(Expr::ident("x")).unwrap();
                    assert_eq!(built.kind(), kind);
                    assert!(kind.build_binary(Expr::ident("x"), Expr::ident("y")).is_none());
                },
                2 => {
                    let built = kind.build_binary(Expr::ident("x"), Expr::ident("y")).unwrap();
                    assert_eq!(built.kind(), kind);
                    assert!(kind.build_unary(Expr::ident("x")).is_none());
                },
                n => panic!("operator {:?} has arity {}", kind, n),
            }
        }

        assert_eq!(ExprKind::Literal.arity(), 0);
        assert_eq!(ExprKind::Identifier.symbol(), None);
    }

    #[test]
    fn node_count_and_depth() {
        let expr = Expr::add(Expr::sin(Expr::ident("x")), Expr::lit(2.0));
        assert_eq!(expr.node_count(), 4);
        assert_eq!(expr.depth(), 3);
        assert_eq!(Expr::ident("x").depth(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_preserves_structure() {
        let expr = Expr::div(Expr::tan(Expr::ident("x")), Expr::lit(0.25));
        let json = serde_json::to_string(&expr).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }

    #[test]
    fn structural_equality() {
        let a = Expr::add(Expr::ident("x"), Expr::lit(1.0));
        let b = Expr::add(Expr::lit(1.0), Expr::ident("x"));
        assert_eq!(a.clone(), a);
        assert!(a != b);
    }
}
