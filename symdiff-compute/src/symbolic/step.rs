use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `f(a) = b`, for a single-operand function `f` and literal `a`
    FoldFunction,

    /// `a op b = c`, for literals `a` and `b`
    FoldOperation,

    /// `(x op a) op b = x op c`, and the other arrangements of a chain with two literals
    CombineChain,

    /// `x + 0 = x`
    /// `0 + x = x`
    AddZero,

    /// `x - 0 = x`
    SubtractZero,

    /// `0 - x = -1 * x`
    SubtractFromZero,

    /// `x * 1 = x`
    /// `1 * x = x`
    MultiplyOne,

    /// `x * 0 = 0`
    /// `0 * x = 0`
    MultiplyZero,

    /// `x / 1 = x`
    DivideOne,

    /// `0 / x = 0`
    DivideIntoZero,

    /// `x / 0 = inf`
    DivideByZero,

    /// `x ^ 1 = x`
    PowerOne,

    /// `x ^ 0 = 1`
    PowerZero,

    /// `1 ^ x = 1`
    OneToPower,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::FoldFunction => "evaluate a function of a constant",
            Self::FoldOperation => "evaluate an operation on two constants",
            Self::CombineChain => "combine the constants of a chained operation",
            Self::AddZero => "remove an added zero",
            Self::SubtractZero => "remove a subtracted zero",
            Self::SubtractFromZero => "rewrite subtraction from zero as negation",
            Self::MultiplyOne => "remove a factor of one",
            Self::MultiplyZero => "multiplication by zero is zero",
            Self::DivideOne => "remove division by one",
            Self::DivideIntoZero => "zero divided by anything is zero",
            Self::DivideByZero => "division by zero is infinite",
            Self::PowerOne => "remove an exponent of one",
            Self::PowerZero => "anything to the zeroth power is one",
            Self::OneToPower => "one to any power is one",
        };
        write!(f, "{}", text)
    }
}

/// Receives the steps taken by an algorithm as it runs.
///
/// Pass `&mut ()` to discard the steps, or a `&mut Vec<S>` to record them in order.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
