//! Text rendering of expression trees.
//!
//! The [`Display`] implementation of [`Node`] produces fully parenthesized text that the parser
//! reads back into the same tree.

use std::fmt::{Display, Formatter, Result};
use super::node::Node;

/// Formats a number so that it always contains a decimal point, or is one of `inf`, `-inf` and
/// `NaN`.
pub fn fmt_number(f: &mut Formatter, n: f64) -> Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n > 0.0 {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else {
        // `Display` for f64 is the shortest text that round-trips, and never uses an exponent
        let text = n.to_string();
        if text.contains('.') {
            write!(f, "{}", text)
        } else {
            write!(f, "{}.0", text)
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Node::Number(n) => fmt_number(f, *n),
            Node::Variable(name) => write!(f, "{}", name),
            Node::Unary { op, operand } => {
                if operand.is_leaf() {
                    write!(f, "( {} ( {} ) )", op, operand)
                } else {
                    write!(f, "( {} {} )", op, operand)
                }
            },
            Node::Binary { op, left, right } => write!(f, "( {} {} {} )", left, op, right),
        }
    }
}

/// A wrapper around a [`Node`] that renders it as an indented tree diagram.
///
/// ```text
/// *
/// ├── x
/// └── sin
///     └── y
/// ```
pub struct Diagram<'a>(&'a Node);

impl Node {
    /// Returns a value that renders this node as an indented tree diagram.
    pub fn diagram(&self) -> Diagram<'_> {
        Diagram(self)
    }
}

/// Writes the label of a single node, without its children.
fn fmt_label(f: &mut Formatter, node: &Node) -> Result {
    match node {
        Node::Number(n) => fmt_number(f, *n),
        Node::Variable(name) => write!(f, "{}", name),
        Node::Unary { op, .. } => write!(f, "{}", op),
        Node::Binary { op, .. } => write!(f, "{}", op),
    }
}

/// Writes the children of `node`, each on its own line, indented by `prefix`.
fn fmt_children(f: &mut Formatter, node: &Node, prefix: &str) -> Result {
    let children: Vec<&Node> = match node {
        Node::Number(_) | Node::Variable(_) => return Ok(()),
        Node::Unary { operand, .. } => vec![&**operand],
        Node::Binary { left, right, .. } => vec![&**left, &**right],
    };

    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        let last = i + 1 == count;
        write!(f, "\n{}{}", prefix, if last { "└── " } else { "├── " })?;
        fmt_label(f, child)?;
        let next_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        fmt_children(f, child, &next_prefix)?;
    }

    Ok(())
}

impl Display for Diagram<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_label(f, self.0)?;
        fmt_children(f, self.0, "")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::op::{BinOpKind, UnaryOpKind};

    fn var(name: &str) -> Node {
        Node::Variable(name.to_string())
    }

    #[test]
    fn numbers() {
        assert_eq!(Node::Number(14.0).to_string(), "14.0");
        assert_eq!(Node::Number(-0.5).to_string(), "-0.5");
        assert_eq!(Node::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Node::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Node::Number(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Node::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn binary_and_unary() {
        let node = Node::binary(
            BinOpKind::Mul,
            var("x"),
            Node::unary(UnaryOpKind::Sin, var("y")),
        );
        assert_eq!(node.to_string(), "( x * ( sin ( y ) ) )");

        let nested = Node::unary(
            UnaryOpKind::Ln,
            Node::binary(BinOpKind::Add, var("x"), Node::Number(1.0)),
        );
        assert_eq!(nested.to_string(), "( ln ( x + 1.0 ) )");
    }

    #[test]
    fn binary_function_is_infix() {
        let node = Node::binary(BinOpKind::Log, Node::Number(8.0), Node::Number(2.0));
        assert_eq!(node.to_string(), "( 8.0 log 2.0 )");
    }

    #[test]
    fn diagram() {
        let node = Node::binary(
            BinOpKind::Mul,
            Node::binary(BinOpKind::Add, var("x"), Node::Number(1.0)),
            Node::unary(UnaryOpKind::Sin, var("y")),
        );
        assert_eq!(
            node.diagram().to_string(),
            "*\n├── +\n│   ├── x\n│   └── 1.0\n└── sin\n    └── y",
        );
    }
}
