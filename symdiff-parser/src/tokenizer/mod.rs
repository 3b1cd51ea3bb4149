pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Creates a lexer over the input. Whitespace is kept, and unmatched input yields `Err(())`.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Splits the input into spanned tokens for the parser.
///
/// Whitespace is dropped. Input the lexer cannot match becomes a [`TokenKind::Symbol`] token, which
/// the parser reports as unexpected.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    tokenize(input)
        .spanned()
        .map(|(result, span)| Token {
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: &input[span.clone()],
            span,
        })
        .filter(|token| !token.kind.is_whitespace())
        .collect()
}
