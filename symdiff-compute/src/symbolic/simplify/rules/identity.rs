//! Elimination of operations against identity and absorbing literals.

use crate::symbolic::step::{Step, StepCollector};
use symdiff_parser::parser::{node::Node, op::BinOpKind};
use super::do_binary;

/// `x + 0 = x`
/// `0 + x = x`
pub fn add_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Add, |left, right| {
        if right.is_zero() {
            Some(left.clone())
        } else if left.is_zero() {
            Some(right.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `x - 0 = x`
pub fn subtract_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Sub, |left, right| {
        right.is_zero().then(|| left.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0 - x = -1 * x`
pub fn subtract_from_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Sub, |left, right| {
        left.is_zero().then(|| Node::binary(BinOpKind::Mul, Node::Number(-1.0), right.clone()))
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `x * 0 = 0`
/// `0 * x = 0`
pub fn multiply_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Mul, |left, right| {
        (left.is_zero() || right.is_zero()).then_some(Node::Number(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `x * 1 = x`
/// `1 * x = x`
pub fn multiply_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Mul, |left, right| {
        if right.is_one() {
            Some(left.clone())
        } else if left.is_one() {
            Some(right.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `x / 1 = x`
pub fn divide_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Div, |left, right| {
        right.is_one().then(|| left.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `0 / x = 0`
pub fn divide_into_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Div, |left, _| {
        left.is_zero().then_some(Node::Number(0.0))
    })?;

    step_collector.push(Step::DivideIntoZero);
    Some(opt)
}

/// `x / 0 = inf`
pub fn divide_by_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Div, |_, right| {
        right.is_zero().then_some(Node::Number(f64::INFINITY))
    })?;

    step_collector.push(Step::DivideByZero);
    Some(opt)
}

/// `1 ^ x = 1`
pub fn one_to_power(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Exp, |left, _| {
        left.is_one().then_some(Node::Number(1.0))
    })?;

    step_collector.push(Step::OneToPower);
    Some(opt)
}

/// `x ^ 0 = 1`
pub fn power_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Exp, |_, right| {
        right.is_zero().then_some(Node::Number(1.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `x ^ 1 = x`
pub fn power_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(node, BinOpKind::Exp, |left, right| {
        right.is_one().then(|| left.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    add_zero(node, step_collector)
        .or_else(|| subtract_zero(node, step_collector))
        .or_else(|| subtract_from_zero(node, step_collector))
        .or_else(|| multiply_zero(node, step_collector))
        .or_else(|| multiply_one(node, step_collector))
        .or_else(|| divide_one(node, step_collector))
        .or_else(|| divide_into_zero(node, step_collector))
        .or_else(|| divide_by_zero(node, step_collector))
        .or_else(|| one_to_power(node, step_collector))
        .or_else(|| power_zero(node, step_collector))
        .or_else(|| power_one(node, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Node {
        Node::Variable("x".to_string())
    }

    fn rewrite(op: BinOpKind, left: Node, right: Node) -> (Option<Node>, Vec<Step>) {
        let mut steps = Vec::new();
        let node = all(&Node::binary(op, left, right), &mut steps);
        (node, steps)
    }

    #[test]
    fn additive() {
        assert_eq!(rewrite(BinOpKind::Add, x(), Node::Number(0.0)), (Some(x()), vec![Step::AddZero]));
        assert_eq!(rewrite(BinOpKind::Add, Node::Number(0.0), x()), (Some(x()), vec![Step::AddZero]));
        assert_eq!(rewrite(BinOpKind::Sub, x(), Node::Number(0.0)), (Some(x()), vec![Step::SubtractZero]));
        assert_eq!(
            rewrite(BinOpKind::Sub, Node::Number(0.0), x()),
            (
                Some(Node::binary(BinOpKind::Mul, Node::Number(-1.0), x())),
                vec![Step::SubtractFromZero],
            ),
        );
    }

    #[test]
    fn multiplicative() {
        assert_eq!(rewrite(BinOpKind::Mul, x(), Node::Number(1.0)).0, Some(x()));
        assert_eq!(rewrite(BinOpKind::Mul, Node::Number(1.0), x()).0, Some(x()));
        assert_eq!(rewrite(BinOpKind::Mul, x(), Node::Number(0.0)).0, Some(Node::Number(0.0)));
        assert_eq!(rewrite(BinOpKind::Mul, Node::Number(0.0), x()).0, Some(Node::Number(0.0)));
        assert_eq!(rewrite(BinOpKind::Div, x(), Node::Number(1.0)).0, Some(x()));
        assert_eq!(rewrite(BinOpKind::Div, Node::Number(0.0), x()).0, Some(Node::Number(0.0)));
        assert_eq!(rewrite(BinOpKind::Div, x(), Node::Number(0.0)).0, Some(Node::Number(f64::INFINITY)));
    }

    #[test]
    fn powers() {
        assert_eq!(rewrite(BinOpKind::Exp, x(), Node::Number(1.0)).0, Some(x()));
        assert_eq!(rewrite(BinOpKind::Exp, x(), Node::Number(0.0)).0, Some(Node::Number(1.0)));
        assert_eq!(rewrite(BinOpKind::Exp, Node::Number(1.0), x()).0, Some(Node::Number(1.0)));
    }

    #[test]
    fn no_identity() {
        assert_eq!(rewrite(BinOpKind::Add, x(), Node::Number(2.0)), (None, Vec::new()));
        assert_eq!(rewrite(BinOpKind::Log, x(), Node::Number(1.0)), (None, Vec::new()));
    }
}
