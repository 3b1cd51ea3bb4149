use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// Some variables of the expression have no value in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "missing value for {}",
        names.iter().map(|name| format!("`{}`", name)).collect::<Vec<_>>().join(", "),
    ),
    labels = names.iter().map(|_| "this variable has no value").collect::<Vec<_>>(),
    help = if suggestions.is_empty() {
        format!("bind a value to each {} before evaluating", "variable".fg(EXPR))
    } else {
        format!("the context has similar variables: {}", suggestions.join(", ").fg(EXPR))
    },
)]
pub struct MissingVariable {
    /// The names of the unbound variables, in the order they appear in the expression.
    pub names: Vec<String>,

    /// Bound variables with names similar to the missing ones.
    pub suggestions: Vec<String>,
}

/// Integration was requested for an expression with more than one variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot integrate an expression of {} variables", names.len()),
    labels = names.iter().map(|name| format!("variable `{}`", name)).collect::<Vec<_>>(),
    help = "integration is supported for expressions with at most one variable",
)]
pub struct TooManyVariables {
    /// The variables of the expression.
    pub names: Vec<String>,
}

/// The step size of a numerical integration is not a positive, finite number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid integration step `{}`", step),
    help = format!("the step must be {}", "a positive, finite number".fg(EXPR)),
)]
pub struct InvalidStep {
    /// The step that was given.
    pub step: f64,
}

/// A bound of a numerical integration is not finite.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid integration interval `[{}, {}]`", lower, upper),
    help = format!("both bounds must be {}", "finite".fg(EXPR)),
)]
pub struct InvalidInterval {
    /// The lower bound.
    pub lower: f64,

    /// The upper bound.
    pub upper: f64,
}
