use std::fmt;

/// Possible simplification steps.
///
/// One step is recorded every time a rule rewrites a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2+3 = 5`, `2*3 = 6`, `2^3 = 8`, etc.
    FoldConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0-a = a`
    /// `a-0 = a`
    SubtractZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0/a = 0`
    DivideZero,

    /// `a/1 = a`
    DivideOne,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identity = match self {
            Self::FoldConstants => "evaluate operation on constants",
            Self::AddZero => "a+0 = a",
            Self::SubtractZero => "a-0 = a",
            Self::MultiplyZero => "a*0 = 0",
            Self::MultiplyOne => "a*1 = a",
            Self::DivideZero => "0/a = 0",
            Self::DivideOne => "a/1 = a",
            Self::PowerZero => "a^0 = 1",
            Self::PowerOne => "a^1 = a",
        };
        write!(f, "{}", identity)
    }
}

/// A type that collects the steps taken by the simplifier.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. This
/// is what [`simplify`](super::simplify) uses.
pub trait StepCollector {
    /// Adds a step to the collector.
    fn push(&mut self, step: Step);
}

impl StepCollector for () {
    #[inline]
    fn push(&mut self, _: Step) {}
}

impl StepCollector for Vec<Step> {
    #[inline]
    fn push(&mut self, step: Step) {
        Vec::push(self, step);
    }
}
