use super::Expr;

impl Expr {
    /// Numerically evaluates the expression, substituting `x` for **every** identifier.
    ///
    /// This follows IEEE-754 semantics throughout: dividing by zero produces an infinity or NaN,
    /// and the logarithm of a negative number is NaN. No error is ever returned.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Literal(value) => *value,
            Self::Identifier(_) => x,
            Self::Add(l, r) => l.eval(x) + r.eval(x),
            Self::Subtract(l, r) => l.eval(x) - r.eval(x),
            Self::Multiply(l, r) => l.eval(x) * r.eval(x),
            Self::Divide(l, r) => l.eval(x) / r.eval(x),
            Self::Pow(base, exponent) => base.eval(x).powf(exponent.eval(x)),
            Self::Log(inner) => inner.eval(x).ln(),
            Self::Exp(inner) => inner.eval(x).exp(),
            Self::Sin(inner) => inner.eval(x).sin(),
            Self::Cos(inner) => inner.eval(x).cos(),
            Self::Tan(inner) => inner.eval(x).tan(),
        }
    }
}
