use crate::parser::op::BinOpKind;
use logos::Logos;
use std::ops::Range;

/// The kinds of tokens in an infix expression.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    /// Subtraction, or negation when no operand precedes it.
    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    /// Separates the arguments of a two-operand function.
    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A number literal, with at most one decimal point.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    /// A variable, function, or constant name.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Name,

    /// Any character that is not part of the grammar.
    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns the binary operator written with this token's symbol, if any.
    pub fn as_operator(self) -> Option<BinOpKind> {
        match self {
            TokenKind::Add => Some(BinOpKind::Add),
            TokenKind::Sub => Some(BinOpKind::Sub),
            TokenKind::Mul => Some(BinOpKind::Mul),
            TokenKind::Div => Some(BinOpKind::Div),
            TokenKind::Exp => Some(BinOpKind::Exp),
            _ => None,
        }
    }
}

/// A significant token, along with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The byte range of the token in the source.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The source text of the token.
    pub lexeme: &'source str,
}
