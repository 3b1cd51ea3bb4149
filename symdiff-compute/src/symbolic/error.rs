use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

pub use symdiff_error::Error;

/// The derivative of the expression cannot be expressed with the supported functions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}`", name),
    labels = ["this function"],
    help = format!("the derivative of {} depends on which operand is larger", name.fg(EXPR)),
)]
pub struct NonDifferentiable {
    /// The name of the function.
    pub name: String,
}
