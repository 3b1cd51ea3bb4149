//! Symbolic differentiation.
//!
//! The derivative is produced as expression text, built from the reconstructed text of the
//! operands. Parsing the text gives the derivative's tree, which is usually worth simplifying.

mod function;

use symdiff_parser::parser::{node::Node, op::BinOpKind};
use super::error::{Error, NonDifferentiable};

/// Formats a literal the way the reconstructor does.
fn literal(n: f64) -> String {
    Node::Number(n).to_string()
}

/// `(f ^ n)' = n * f ^ (n - 1) * f'`, for a literal `n`
/// `(f ^ g)' = (f ^ g) * (f' / f * g + g' * ln(f))`, otherwise
fn power_rule(left: &Node, right: &Node, var: &str) -> Result<String, Error> {
    let f = left.to_string();
    let df = derivative(left, var)?;

    if let Some(n) = right.as_number() {
        return Ok(format!("{} * {} ^ {} * ( {} )", literal(n), f, literal(n - 1.0), df));
    }

    let g = right.to_string();
    let dg = derivative(right, var)?;
    Ok(format!(
        "( {f} ^ {g} ) * ( ( ( {df} ) / {f} ) * {g} + ( {dg} ) * ln ( {f} ) )",
    ))
}

/// `log(f, g)' = f' / (f * ln(g))`, if the base `g` does not depend on the variable
///
/// Otherwise, `log(f, g) = ln(f) / ln(g)` is differentiated with the quotient rule.
fn log_rule(left: &Node, right: &Node, var: &str) -> Result<String, Error> {
    let f = left.to_string();
    let g = right.to_string();
    let df = derivative(left, var)?;

    if !right.contains_variable(var) {
        return Ok(format!("( {df} ) / ( {f} * ln ( {g} ) )"));
    }

    let dg = derivative(right, var)?;
    Ok(format!(
        "( ( ( {df} ) / {f} ) * ln ( {g} ) - ln ( {f} ) * ( ( {dg} ) / {g} ) ) / ( ln ( {g} ) ^ 2.0 )",
    ))
}

/// Computes the derivative of the given node with respect to the variable `var`, returning the
/// unsimplified text of the derivative.
///
/// Returns [`Err`] if the node contains a function with no derivative, such as `max`.
pub fn derivative(node: &Node, var: &str) -> Result<String, Error> {
    match node {
        Node::Number(_) => Ok(literal(0.0)),
        Node::Variable(name) => Ok(literal(if name == var { 1.0 } else { 0.0 })),
        Node::Unary { op, operand } => function::function_derivative(*op, operand, var),
        Node::Binary { op, left, right } => match op {
            BinOpKind::Add | BinOpKind::Sub => Ok(format!(
                "( {} ) {} ( {} )",
                derivative(left, var)?,
                op,
                derivative(right, var)?,
            )),

            // (f * g)' = g' * f + f' * g
            BinOpKind::Mul => Ok(format!(
                "( {} ) * {} + ( {} ) * {}",
                derivative(right, var)?,
                left,
                derivative(left, var)?,
                right,
            )),

            // (f / g)' = (f' * g - f * g') / g ^ 2
            BinOpKind::Div => Ok(format!(
                "( ( {} ) * {g} - {} * ( {} ) ) / ( {g} ^ 2.0 )",
                derivative(left, var)?,
                left,
                derivative(right, var)?,
                g = right,
            )),

            BinOpKind::Exp => power_rule(left, right, var),
            BinOpKind::Log => log_rule(left, right, var),
            BinOpKind::Max | BinOpKind::Min => Err(Error::new(Vec::new(), NonDifferentiable {
                name: op.symbol().to_string(),
            })),
        },
    }
}
