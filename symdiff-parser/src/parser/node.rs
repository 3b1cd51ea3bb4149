use super::op::{BinOpKind, UnaryOpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
///
/// Each node exclusively owns its children, so cloning a node produces an independent deep copy
/// of the whole sub-tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A numeric literal, such as `2.5`. Named constants like `pi` are stored as their value.
    Number(f64),

    /// A named variable, such as `x`.
    Variable(String),

    /// A single-operand function applied to an operand, such as `sin(x)`.
    Unary {
        op: UnaryOpKind,
        operand: Box<Node>,
    },

    /// A binary operator or two-operand function. `left` is the operand that appears first when
    /// the expression is read infix.
    Binary {
        op: BinOpKind,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Creates a [`Node::Unary`] node.
    pub fn unary(op: UnaryOpKind, operand: Node) -> Self {
        Self::Unary { op, operand: Box::new(operand) }
    }

    /// Creates a [`Node::Binary`] node.
    pub fn binary(op: BinOpKind, left: Node, right: Node) -> Self {
        Self::Binary { op, left: Box::new(left), right: Box::new(right) }
    }

    /// Returns the value of the node if it is a numeric literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Variable(_))
    }

    /// Returns true if the node is the literal `0`.
    pub fn is_zero(&self) -> bool {
        self.as_number() == Some(0.0)
    }

    /// Returns true if the node is the literal `1`.
    pub fn is_one(&self) -> bool {
        self.as_number() == Some(1.0)
    }

    /// Returns true if the variable with the given name appears anywhere in this sub-tree.
    pub fn contains_variable(&self, name: &str) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Variable(var) => var == name,
            Self::Unary { operand, .. } => operand.contains_variable(name),
            Self::Binary { left, right, .. } => {
                left.contains_variable(name) || right.contains_variable(name)
            },
        }
    }

    /// Returns the distinct variable names in this sub-tree, in the order they appear when the
    /// expression is read infix.
    pub fn variables(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables(&self, out: &mut Vec<String>) {
        match self {
            Self::Number(_) => (),
            Self::Variable(var) => {
                if !out.contains(var) {
                    out.push(var.clone());
                }
            },
            Self::Unary { operand, .. } => operand.collect_variables(out),
            Self::Binary { left, right, .. } => {
                left.collect_variables(out);
                right.collect_variables(out);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_in_order() {
        // y * (x + y)
        let node = Node::binary(
            BinOpKind::Mul,
            Node::Variable("y".to_string()),
            Node::binary(
                BinOpKind::Add,
                Node::Variable("x".to_string()),
                Node::Variable("y".to_string()),
            ),
        );
        assert_eq!(node.variables(), vec!["y".to_string(), "x".to_string()]);
        assert!(node.contains_variable("x"));
        assert!(!node.contains_variable("z"));
    }

    #[test]
    fn clone_is_independent() {
        let original = Node::unary(UnaryOpKind::Sin, Node::Variable("x".to_string()));
        let mut copy = original.clone();
        if let Node::Unary { operand, .. } = &mut copy {
            **operand = Node::Number(1.0);
        }
        assert_eq!(original, Node::unary(UnaryOpKind::Sin, Node::Variable("x".to_string())));
        assert_ne!(original, copy);
    }

    #[test]
    fn literal_checks() {
        assert!(Node::Number(0.0).is_zero());
        assert!(Node::Number(-0.0).is_zero());
        assert!(Node::Number(1.0).is_one());
        assert!(!Node::Variable("x".to_string()).is_one());
        assert!(Node::Number(3.0).is_leaf());
    }
}
