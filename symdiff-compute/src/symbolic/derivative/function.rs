//! Derivatives of the single-operand functions, with the chain rule applied.

use symdiff_parser::parser::{node::Node, op::UnaryOpKind};
use super::{derivative, Error};

/// Computes the derivative of `op(operand)`, multiplied by the derivative of the operand.
pub(super) fn function_derivative(op: UnaryOpKind, operand: &Node, var: &str) -> Result<String, Error> {
    let g = operand.to_string();
    let dg = derivative(operand, var)?;

    Ok(match op {
        UnaryOpKind::Sin => format!("( {} ) * cos ( {} )", dg, g),
        UnaryOpKind::Cos => format!("( {} ) * -1.0 * sin ( {} )", dg, g),
        UnaryOpKind::Tan => format!("( {} ) / cos ( {} ) ^ 2.0", dg, g),
        UnaryOpKind::Asin => format!("( {} ) / sqrt ( 1.0 - {} ^ 2.0 )", dg, g),
        UnaryOpKind::Acos => format!("-1.0 * ( {} ) / sqrt ( 1.0 - {} ^ 2.0 )", dg, g),
        UnaryOpKind::Atan => format!("( {} ) / ( {} ^ 2.0 + 1.0 )", dg, g),
        UnaryOpKind::Sqrt => format!("( {} ) / ( 2.0 * sqrt ( {} ) )", dg, g),
        UnaryOpKind::Ln => format!("( {} ) / {}", dg, g),
    })
}
