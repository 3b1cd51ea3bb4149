//! Combining the literals of two nested operations.

use crate::numerical::builtin::Apply;
use crate::symbolic::step::{Step, StepCollector};
use symdiff_parser::parser::{node::Node, op::BinOpKind};

/// If the node is an `op` operation with exactly one literal operand, returns the literal and the
/// other operand.
fn split_literal(op: BinOpKind, node: &Node) -> Option<(f64, &Node)> {
    let Node::Binary { op: inner, left, right } = node else {
        return None;
    };
    if *inner != op {
        return None;
    }

    match (left.as_number(), right.as_number()) {
        (Some(n), None) => Some((n, &**right)),
        (None, Some(n)) => Some((n, &**left)),
        _ => None,
    }
}

/// `a op (b op x) = c op x`
/// `(x op a) op b = x op c`
///
/// and the mirrored arrangements, for commutative operations. The combined literal is placed on
/// the side the outer literal was on.
fn combine_commutative(op: BinOpKind, left: &Node, right: &Node) -> Option<Node> {
    if let Some(a) = left.as_number() {
        let (b, rest) = split_literal(op, right)?;
        Some(Node::binary(op, Node::Number(op.apply((a, b))), rest.clone()))
    } else {
        let b = right.as_number()?;
        let (a, rest) = split_literal(op, left)?;
        Some(Node::binary(op, rest.clone(), Node::Number(op.apply((a, b)))))
    }
}

/// `(x - a) - b = x - (a + b)`
/// `(a - x) - b = (a - b) - x`
/// `(x / a) / b = x / (a * b)`
/// `(a / x) / b = (a / b) / x`
///
/// `inverse` is the operation that combines two literals subtracted from (or dividing) the same
/// value: `+` for `-`, and `*` for `/`.
fn combine_left_nested(op: BinOpKind, inverse: BinOpKind, left: &Node, right: &Node) -> Option<Node> {
    let b = right.as_number()?;
    let Node::Binary { op: inner, left: p, right: q } = left else {
        return None;
    };
    if *inner != op {
        return None;
    }

    match (p.as_number(), q.as_number()) {
        (None, Some(a)) => Some(Node::binary(op, (**p).clone(), Node::Number(inverse.apply((a, b))))),
        (Some(a), None) => Some(Node::binary(op, Node::Number(op.apply((a, b))), (**q).clone())),
        _ => None,
    }
}

/// Combines the literals of a chain of two operations into one literal. Exponentiation and
/// logarithms are never combined.
pub fn combine_chain(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Binary { op, left, right } = node else {
        return None;
    };

    let combined = match op {
        BinOpKind::Add | BinOpKind::Mul | BinOpKind::Max | BinOpKind::Min => {
            combine_commutative(*op, left, right)
        },
        BinOpKind::Sub => combine_left_nested(*op, BinOpKind::Add, left, right),
        BinOpKind::Div => combine_left_nested(*op, BinOpKind::Mul, left, right),
        BinOpKind::Exp | BinOpKind::Log => None,
    }?;

    step_collector.push(Step::CombineChain);
    Some(combined)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Node {
        Node::Variable("x".to_string())
    }

    fn combine(node: Node) -> Option<Node> {
        combine_chain(&node, &mut ())
    }

    #[test]
    fn commutative_both_sides() {
        // 2 * (x * 3) = 6 * x
        let node = Node::binary(
            BinOpKind::Mul,
            Node::Number(2.0),
            Node::binary(BinOpKind::Mul, x(), Node::Number(3.0)),
        );
        assert_eq!(combine(node), Some(Node::binary(BinOpKind::Mul, Node::Number(6.0), x())));

        // (2 + x) + 3 = x + 5
        let node = Node::binary(
            BinOpKind::Add,
            Node::binary(BinOpKind::Add, Node::Number(2.0), x()),
            Node::Number(3.0),
        );
        assert_eq!(combine(node), Some(Node::binary(BinOpKind::Add, x(), Node::Number(5.0))));

        // max(max(x, 1), 4) = max(x, 4)
        let node = Node::binary(
            BinOpKind::Max,
            Node::binary(BinOpKind::Max, x(), Node::Number(1.0)),
            Node::Number(4.0),
        );
        assert_eq!(combine(node), Some(Node::binary(BinOpKind::Max, x(), Node::Number(4.0))));
    }

    #[test]
    fn subtraction_and_division() {
        // (x - 2) - 3 = x - 5
        let node = Node::binary(
            BinOpKind::Sub,
            Node::binary(BinOpKind::Sub, x(), Node::Number(2.0)),
            Node::Number(3.0),
        );
        assert_eq!(combine(node), Some(Node::binary(BinOpKind::Sub, x(), Node::Number(5.0))));

        // (10 - x) - 3 = 7 - x
        let node = Node::binary(
            BinOpKind::Sub,
            Node::binary(BinOpKind::Sub, Node::Number(10.0), x()),
            Node::Number(3.0),
        );
        assert_eq!(combine(node), Some(Node::binary(BinOpKind::Sub, Node::Number(7.0), x())));

        // (x / 2) / 4 = x / 8
        let node = Node::binary(
            BinOpKind::Div,
            Node::binary(BinOpKind::Div, x(), Node::Number(2.0)),
            Node::Number(4.0),
        );
        assert_eq!(combine(node), Some(Node::binary(BinOpKind::Div, x(), Node::Number(8.0))));

        // (8 / x) / 4 = 2 / x
        let node = Node::binary(
            BinOpKind::Div,
            Node::binary(BinOpKind::Div, Node::Number(8.0), x()),
            Node::Number(4.0),
        );
        assert_eq!(combine(node), Some(Node::binary(BinOpKind::Div, Node::Number(2.0), x())));
    }

    #[test]
    fn right_nested_subtraction_is_kept() {
        // 3 - (x - 2) is not combined
        let node = Node::binary(
            BinOpKind::Sub,
            Node::Number(3.0),
            Node::binary(BinOpKind::Sub, x(), Node::Number(2.0)),
        );
        assert_eq!(combine(node), None);
    }

    #[test]
    fn powers_are_kept() {
        // (x ^ 2) ^ 3 is not combined
        let node = Node::binary(
            BinOpKind::Exp,
            Node::binary(BinOpKind::Exp, x(), Node::Number(2.0)),
            Node::Number(3.0),
        );
        assert_eq!(combine(node), None);
    }
}
