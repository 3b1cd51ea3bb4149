//! The operator and function table.
//!
//! Every operator, built-in function and named constant the parser recognizes is listed here,
//! along with its arity, precedence and associativity. Evaluation rules live in
//! `symdiff-compute`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of function application, such as `sin` or `log`.
    Function,
}

/// A built-in function that takes exactly one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,
}

impl UnaryOpKind {
    /// Every single-operand function.
    pub const ALL: [UnaryOpKind; 8] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sqrt,
        Self::Ln,
    ];

    /// Returns the name the function is written with.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sqrt => "sqrt",
            Self::Ln => "ln",
        }
    }

    /// Looks up a single-operand function by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Returns the precedence of the function.
    pub fn precedence(self) -> Precedence {
        Precedence::Function
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An operation that takes two operands: either a symbolic operator like `+`, or a two-operand
/// function like `log`.
///
/// Two-operand functions can be written in call syntax, `log(x, 2)`, or infix, `x log 2`. Both
/// produce the same tree, with the first argument as the left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,

    /// `log(value, base)`, the logarithm of the left operand in the base of the right operand.
    Log,
    Max,
    Min,
}

impl BinOpKind {
    /// Every two-operand operation.
    pub const ALL: [BinOpKind; 8] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Exp,
        Self::Log,
        Self::Max,
        Self::Min,
    ];

    /// Returns the symbol or function name of the operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
            Self::Log => "log",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Looks up a two-operand function by name. Symbolic operators are not names, and return
    /// [`None`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter()
            .filter(|op| op.is_function())
            .find(|op| op.symbol() == name)
    }

    /// Returns true if the operation is written as a function name rather than a symbol.
    pub fn is_function(self) -> bool {
        matches!(self, Self::Log | Self::Max | Self::Min)
    }

    /// Returns true if `a op (b op c) = (a op b) op c` and `a op b = b op a`.
    pub fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Mul | Self::Max | Self::Min)
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Log | Self::Max | Self::Min => Precedence::Function,
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div
                | Self::Log | Self::Max | Self::Min => Associativity::Left,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns the value of a named constant. Constants are replaced by their value during parsing,
/// and never become variables.
///
/// `inf` and `NaN` are included so that any number the reconstructor prints can be parsed back.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "inf" => Some(f64::INFINITY),
        "NaN" => Some(f64::NAN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(UnaryOpKind::from_name("asin"), Some(UnaryOpKind::Asin));
        assert_eq!(UnaryOpKind::from_name("log"), None);
        assert_eq!(BinOpKind::from_name("log"), Some(BinOpKind::Log));
        assert_eq!(BinOpKind::from_name("+"), None);
        assert_eq!(constant("x"), None);
    }

    #[test]
    fn precedence_order() {
        assert!(Precedence::Function > Precedence::Exp);
        assert!(BinOpKind::Exp.precedence() > BinOpKind::Div.precedence());
        assert!(BinOpKind::Mul.precedence() > BinOpKind::Sub.precedence());
        assert_eq!(BinOpKind::Max.precedence(), UnaryOpKind::Sqrt.precedence());
    }
}
