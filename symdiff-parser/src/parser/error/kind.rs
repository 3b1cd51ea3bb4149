use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// The expression contained no tokens.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("expected an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// A closing parenthesis had no matching opening parenthesis, or an opening parenthesis was never
/// closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "mismatched parenthesis",
    labels = [if *opening {
        "this parenthesis is never closed"
    } else {
        "this parenthesis has no matching `(`"
    }],
    help = if *opening {
        format!("add a closing parenthesis {}", "`)`".fg(EXPR))
    } else {
        format!("remove this parenthesis, or add an opening parenthesis {}", "`(`".fg(EXPR))
    },
)]
pub struct MismatchedParenthesis {
    /// True if the unmatched parenthesis is an opening parenthesis.
    pub opening: bool,
}

/// A character or token was found where it is not allowed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected token `{}`", found),
    labels = ["here"],
)]
pub struct UnexpectedToken {
    /// The text of the token that was found.
    pub found: String,
}

/// Two operands appeared next to each other with no operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator",
    labels = ["this operand directly follows another operand"],
    help = format!("add an operator, such as {}, before it", "`*`".fg(EXPR)),
)]
pub struct MissingOperator;

/// An operator or function did not have enough operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operand",
    labels = [format!("this needs another {}", "operand".fg(EXPR))],
)]
pub struct MissingOperand;
