pub mod error;
pub mod fmt;
pub mod node;
pub mod op;
pub mod postfix;
pub mod tree;

use error::{Error, kind};
use log::debug;
use node::Node;
use op::{constant, Associativity, BinOpKind, Precedence, UnaryOpKind};
use postfix::{Postfix, PostfixToken, Term};
use std::ops::Range;
use super::tokenizer::{tokenize_complete, Token, TokenKind};

pub use tree::build_tree;

/// An entry waiting on the operator stack.
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    /// An opening parenthesis.
    Paren(Range<usize>),

    /// A single-operand function.
    Function(UnaryOpKind, Range<usize>),

    /// A binary operator or two-operand function.
    Operator(BinOpKind, Range<usize>),
}

impl Pending {
    /// Returns the precedence of the entry, or [`None`] for a parenthesis.
    fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Paren(_) => None,
            Self::Function(op, _) => Some(op.precedence()),
            Self::Operator(op, _) => Some(op.precedence()),
        }
    }

    /// Returns true if the entry is a function call that is complete once its parenthesized
    /// arguments are.
    fn is_function(&self) -> bool {
        match self {
            Self::Paren(_) => false,
            Self::Function(..) => true,
            Self::Operator(op, _) => op.is_function(),
        }
    }

    /// Converts the entry into a postfix token. Parentheses never reach the output.
    fn into_token(self) -> Option<PostfixToken> {
        match self {
            Self::Paren(_) => None,
            Self::Function(op, span) => Some(PostfixToken { term: Term::Function(op), span }),
            Self::Operator(op, span) => Some(PostfixToken { term: Term::Operator(op), span }),
        }
    }
}

/// Converts infix source text into a postfix sequence using the shunting-yard algorithm.
///
/// The parser discovers variables in the order they first appear, and resolves named constants
/// to their values as it goes.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The postfix output built so far.
    output: Vec<PostfixToken>,

    /// The operator stack.
    pending: Vec<Pending>,

    /// Distinct variable names, in order of first appearance.
    variables: Vec<String>,

    /// True if the next token must begin an operand.
    expect_operand: bool,

    /// The span of an unapplied unary minus. Two consecutive unary minuses cancel out.
    negate: Option<Range<usize>>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            output: Vec::new(),
            pending: Vec::new(),
            variables: Vec::new(),
            expect_operand: true,
            negate: None,
        }
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the next token to be parsed, then advances the cursor. Returns [`None`] at the end
    /// of the stream.
    fn next_token(&mut self) -> Option<Token<'source>> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Parses the whole source into a postfix sequence.
    pub fn parse_postfix(mut self) -> Result<Postfix, Error> {
        if self.tokens.is_empty() {
            return Err(Error::new(Vec::new(), kind::EmptyExpression));
        }

        while let Some(token) = self.next_token() {
            self.parse_token(token)?;
        }

        if self.expect_operand {
            let span = self.negate.take().unwrap_or_else(|| self.eof_span());
            return Err(Error::new(vec![span], kind::MissingOperand));
        }

        while let Some(entry) = self.pending.pop() {
            if let Pending::Paren(span) = entry {
                return Err(Error::new(vec![span], kind::MismatchedParenthesis { opening: true }));
            }
            self.output.extend(entry.into_token());
        }

        Ok(Postfix {
            tokens: self.output,
            variables: self.variables,
        })
    }

    /// Handles a single token.
    fn parse_token(&mut self, token: Token<'source>) -> Result<(), Error> {
        if let Some(op) = token.kind.as_operator() {
            return self.parse_operator(op, token.span);
        }

        match token.kind {
            TokenKind::Number => {
                let value = token.lexeme.parse::<f64>()
                    .map_err(|_| Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                        found: token.lexeme.to_string(),
                    }))?;
                self.push_number(value, token.span)
            },
            TokenKind::Name => self.parse_name(token),
            TokenKind::OpenParen => {
                self.begin_operand(&token)?;
                self.pending.push(Pending::Paren(token.span));
                Ok(())
            },
            TokenKind::CloseParen => {
                self.end_operand(&token)?;
                if !self.pop_to_paren() {
                    return Err(Error::new(vec![token.span], kind::MismatchedParenthesis { opening: false }));
                }
                self.pending.pop();

                // the parenthesized arguments complete a function call
                if self.pending.last().is_some_and(Pending::is_function) {
                    self.output.extend(self.pending.pop().and_then(Pending::into_token));
                }

                self.expect_operand = false;
                Ok(())
            },
            TokenKind::Comma => {
                self.end_operand(&token)?;
                if !self.pop_to_paren() {
                    return Err(Error::new(vec![token.span], kind::UnexpectedToken {
                        found: token.lexeme.to_string(),
                    }));
                }
                self.expect_operand = true;
                Ok(())
            },
            TokenKind::Symbol => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                found: token.lexeme.to_string(),
            })),
            _ => Ok(()),
        }
    }

    /// Handles an operator symbol, which is unary if no operand precedes it.
    fn parse_operator(&mut self, op: BinOpKind, span: Range<usize>) -> Result<(), Error> {
        if !self.expect_operand {
            self.push_operator(op, span);
            return Ok(());
        }

        match op {
            BinOpKind::Sub => {
                // consecutive unary minuses cancel
                self.negate = match self.negate.take() {
                    Some(_) => None,
                    None => Some(span),
                };
                Ok(())
            },
            BinOpKind::Add => Ok(()),
            _ => Err(Error::new(vec![span], kind::MissingOperand)),
        }
    }

    /// Handles an identifier: a constant, a function name, or a variable.
    fn parse_name(&mut self, token: Token<'source>) -> Result<(), Error> {
        if let Some(value) = constant(token.lexeme) {
            return self.push_number(value, token.span);
        }

        if let Some(op) = UnaryOpKind::from_name(token.lexeme) {
            self.begin_operand(&token)?;
            self.pending.push(Pending::Function(op, token.span));
            return Ok(());
        }

        if let Some(op) = BinOpKind::from_name(token.lexeme) {
            if self.expect_operand {
                // call syntax: `log(a, b)`
                self.apply_negation();
                self.pending.push(Pending::Operator(op, token.span));
            } else {
                // infix syntax: `a log b`
                self.push_operator(op, token.span);
                self.expect_operand = true;
            }
            return Ok(());
        }

        self.begin_operand(&token)?;
        let name = token.lexeme.to_string();
        if !self.variables.contains(&name) {
            self.variables.push(name.clone());
        }
        self.output.push(PostfixToken { term: Term::Variable(name), span: token.span });
        self.expect_operand = false;
        Ok(())
    }

    /// Emits a numeric literal, folding a pending unary minus into it.
    fn push_number(&mut self, value: f64, span: Range<usize>) -> Result<(), Error> {
        if !self.expect_operand {
            return Err(Error::new(vec![span], kind::MissingOperator));
        }

        let (value, span) = match self.negate.take() {
            Some(minus) => (-value, minus.start..span.end),
            None => (value, span),
        };
        self.output.push(PostfixToken { term: Term::Number(value), span });
        self.expect_operand = false;
        Ok(())
    }

    /// Checks that an operand may begin at the given token, and applies any pending unary minus
    /// to it.
    fn begin_operand(&mut self, token: &Token<'source>) -> Result<(), Error> {
        if !self.expect_operand {
            return Err(Error::new(vec![token.span.clone()], kind::MissingOperator));
        }
        self.apply_negation();
        Ok(())
    }

    /// Checks that an operand was completed before the given token.
    fn end_operand(&self, token: &Token<'source>) -> Result<(), Error> {
        if self.expect_operand {
            Err(Error::new(vec![token.span.clone()], kind::MissingOperand))
        } else {
            Ok(())
        }
    }

    /// Turns a pending unary minus into a multiplication by `-1`. The `*` is pushed without
    /// popping, so it applies to exactly the operand that follows.
    fn apply_negation(&mut self) {
        if let Some(span) = self.negate.take() {
            self.output.push(PostfixToken { term: Term::Number(-1.0), span: span.clone() });
            self.pending.push(Pending::Operator(BinOpKind::Mul, span));
        }
    }

    /// Pushes a binary operator, first popping every operator that binds at least as tightly.
    fn push_operator(&mut self, op: BinOpKind, span: Range<usize>) {
        let precedence = op.precedence();
        while let Some(top) = self.pending.last().and_then(Pending::precedence) {
            let pop = top > precedence
                || (top == precedence && op.associativity() == Associativity::Left);
            if !pop {
                break;
            }
            self.output.extend(self.pending.pop().and_then(Pending::into_token));
        }
        self.pending.push(Pending::Operator(op, span));
        self.expect_operand = true;
    }

    /// Pops operators to the output until an opening parenthesis is at the top of the stack.
    /// Returns false if there is no opening parenthesis.
    fn pop_to_paren(&mut self) -> bool {
        while let Some(entry) = self.pending.pop() {
            if let Pending::Paren(_) = entry {
                self.pending.push(entry);
                return true;
            }
            self.output.extend(entry.into_token());
        }
        false
    }
}

/// Converts infix source text into a postfix sequence.
pub fn to_postfix(source: &str) -> Result<Postfix, Error> {
    Parser::new(source).parse_postfix()
}

/// The result of parsing source text: the postfix sequence and the tree built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The postfix sequence, including the discovered variables.
    pub postfix: Postfix,

    /// The expression tree.
    pub tree: Node,
}

/// Parses source text into a postfix sequence and an expression tree.
pub fn parse(source: &str) -> Result<Parsed, Error> {
    let postfix = to_postfix(source)?;
    let tree = build_tree(&postfix)?;
    debug!("parsed `{}` into postfix `{}`", source, postfix);
    Ok(Parsed { postfix, tree })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Node {
        Node::Variable(name.to_string())
    }

    fn num(n: f64) -> Node {
        Node::Number(n)
    }

    fn bin(op: BinOpKind, left: Node, right: Node) -> Node {
        Node::binary(op, left, right)
    }

    /// Parses the source and returns the rendered postfix text.
    fn postfix_text(source: &str) -> String {
        to_postfix(source).unwrap().to_string()
    }

    #[test]
    fn precedence() {
        assert_eq!(postfix_text("2 + 3 * 4"), "2.0 3.0 4.0 * +");
        assert_eq!(postfix_text("(2 + 3) * 4"), "2.0 3.0 + 4.0 *");
        assert_eq!(postfix_text("8 / 4 / 2"), "8.0 4.0 / 2.0 /");
        assert_eq!(postfix_text("5 - 3 + 1"), "5.0 3.0 - 1.0 +");
    }

    #[test]
    fn exponent_is_right_associative() {
        assert_eq!(postfix_text("2 ^ 3 ^ 2"), "2.0 3.0 2.0 ^ ^");
    }

    #[test]
    fn functions() {
        assert_eq!(postfix_text("sin(x) + 1"), "x sin 1.0 +");
        assert_eq!(postfix_text("sqrt x ^ 2"), "x sqrt 2.0 ^");
        assert_eq!(postfix_text("log(8, 2)"), "8.0 2.0 log");
        assert_eq!(postfix_text("max(x + 1, 2 * y) - 1"), "x 1.0 + 2.0 y * max 1.0 -");
        assert_eq!(postfix_text("( 8.0 log 2.0 )"), "8.0 2.0 log");
    }

    #[test]
    fn call_and_infix_forms_agree() {
        let call = parse("min(x, 3)").unwrap();
        let infix = parse("( x min 3.0 )").unwrap();
        assert_eq!(call.tree, infix.tree);
        assert_eq!(call.tree, bin(BinOpKind::Min, var("x"), num(3.0)));
    }

    #[test]
    fn unary_minus() {
        assert_eq!(postfix_text("-5"), "-5.0");
        assert_eq!(postfix_text("2 * -5"), "2.0 -5.0 *");
        assert_eq!(postfix_text("-x + 1"), "-1.0 x * 1.0 +");
        assert_eq!(postfix_text("2 ^ -x"), "2.0 -1.0 x * ^");
        assert_eq!(postfix_text("-(x + 1)"), "-1.0 x 1.0 + *");
        assert_eq!(postfix_text("-sin(x)"), "-1.0 x sin *");
        assert_eq!(postfix_text("(x) - 1"), "x 1.0 -");
        assert_eq!(postfix_text("--x"), "x");
        assert_eq!(postfix_text("- - 5"), "5.0");
        assert_eq!(postfix_text("+x"), "x");
        assert_eq!(postfix_text("-pi"), format!("{}", -std::f64::consts::PI));
    }

    #[test]
    fn constants_are_not_variables() {
        let postfix = to_postfix("pi * r ^ 2 + e + inf").unwrap();
        assert_eq!(postfix.variables, vec!["r".to_string()]);
    }

    #[test]
    fn identifiers_are_read_whole() {
        let postfix = to_postfix("sinx + logy + pie").unwrap();
        assert_eq!(
            postfix.variables,
            vec!["sinx".to_string(), "logy".to_string(), "pie".to_string()],
        );
    }

    #[test]
    fn variables_in_first_seen_order() {
        let postfix = to_postfix("y * x + 2 * y + z1").unwrap();
        assert_eq!(
            postfix.variables,
            vec!["y".to_string(), "x".to_string(), "z1".to_string()],
        );
    }

    #[test]
    fn tree_operand_order() {
        let parsed = parse("5 - 3").unwrap();
        assert_eq!(parsed.tree, bin(BinOpKind::Sub, num(5.0), num(3.0)));

        let parsed = parse("2 ^ 3 ^ 2").unwrap();
        assert_eq!(
            parsed.tree,
            bin(BinOpKind::Exp, num(2.0), bin(BinOpKind::Exp, num(3.0), num(2.0))),
        );
    }

    #[test]
    fn round_trip() {
        let sources = [
            "x + 2 * x",
            "sin(x) ^ 2 + cos(x) ^ 2",
            "log(x, 2) - -0.5 * atan(y / 3)",
            "max(a, min(b, c)) / sqrt(ln(x))",
            "-x ^ -2.25",
            "1 / 0 - 1 / 0",
        ];

        for source in sources {
            let tree = parse(source).unwrap().tree;
            let text = tree.to_string();
            assert_eq!(parse(&text).unwrap().tree, tree, "{}", text);
        }
    }

    #[test]
    fn mismatched_parenthesis() {
        let err = to_postfix("(1 + 2").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::MismatchedParenthesis { opening: true }));
        assert_eq!(err.spans, vec![0..1]);

        let err = to_postfix("1 + 2)").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::MismatchedParenthesis { opening: false }));
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn missing_operator() {
        let err = to_postfix("2 x").unwrap_err();
        assert!(err.is::<kind::MissingOperator>());
        assert_eq!(err.spans, vec![2..3]);

        assert!(to_postfix("(1) (2)").unwrap_err().is::<kind::MissingOperator>());
    }

    #[test]
    fn missing_operand() {
        assert!(to_postfix("1 +").unwrap_err().is::<kind::MissingOperand>());
        assert!(to_postfix("* 2").unwrap_err().is::<kind::MissingOperand>());
        assert!(to_postfix("sin()").unwrap_err().is::<kind::MissingOperand>());
        assert!(to_postfix("-").unwrap_err().is::<kind::MissingOperand>());
        assert!(to_postfix("log(2,)").unwrap_err().is::<kind::MissingOperand>());
    }

    #[test]
    fn unexpected_token() {
        let err = to_postfix("1 + $").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::UnexpectedToken { found: "$".to_string() }));
        assert_eq!(err.spans, vec![4..5]);

        assert!(to_postfix("1, 2").unwrap_err().is::<kind::UnexpectedToken>());
    }

    #[test]
    fn empty_expression() {
        assert!(to_postfix("").unwrap_err().is::<kind::EmptyExpression>());
        assert!(to_postfix("   ").unwrap_err().is::<kind::EmptyExpression>());
    }
}
