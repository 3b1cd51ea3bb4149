//! Constant folding.

use crate::numerical::builtin::Apply;
use crate::symbolic::step::{Step, StepCollector};
use symdiff_parser::parser::node::Node;

/// `f(a) = b`
pub fn fold_function(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Unary { op, operand } = node else {
        return None;
    };
    let value = op.apply(operand.as_number()?);
    step_collector.push(Step::FoldFunction);
    Some(Node::Number(value))
}

/// `a op b = c`
pub fn fold_operation(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Binary { op, left, right } = node else {
        return None;
    };
    let value = op.apply((left.as_number()?, right.as_number()?));
    step_collector.push(Step::FoldOperation);
    Some(Node::Number(value))
}

/// Applies all rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    fold_function(node, step_collector)
        .or_else(|| fold_operation(node, step_collector))
}
