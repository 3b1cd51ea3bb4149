use std::{fmt, ops::Range};
use super::{fmt::fmt_number, op::{BinOpKind, UnaryOpKind}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The term carried by a [`PostfixToken`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    /// A numeric literal, or the value of a named constant.
    Number(f64),

    /// A variable.
    Variable(String),

    /// A single-operand function.
    Function(UnaryOpKind),

    /// A binary operator or two-operand function.
    Operator(BinOpKind),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt_number(f, *n),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Function(op) => write!(f, "{}", op),
            Self::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// A single entry of a postfix sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PostfixToken {
    /// The term.
    pub term: Term,

    /// The region of the source text the term came from. For the implicit `-1 *` produced by a
    /// unary minus, this is the span of the minus sign.
    pub span: Range<usize>,
}

/// An expression in Reverse-Polish order, along with the variables it mentions.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Postfix {
    /// The terms, in evaluation order.
    pub tokens: Vec<PostfixToken>,

    /// The distinct variable names, in the order they first appear in the source.
    pub variables: Vec<String>,
}

impl Postfix {
    /// Returns the span of the first occurrence of the given variable.
    pub fn first_span_of(&self, name: &str) -> Option<Range<usize>> {
        self.tokens.iter()
            .find(|token| matches!(&token.term, Term::Variable(var) if var == name))
            .map(|token| token.span.clone())
    }
}

impl fmt::Display for Postfix {
    /// Writes the terms separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token.term)?;
        }
        Ok(())
    }
}
