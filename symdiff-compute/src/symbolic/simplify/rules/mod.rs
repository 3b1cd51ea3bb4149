//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the node to simplify as an argument, and
//! returns `Some(node)` with the rewritten node if the rule applies, or `None` if the rule does
//! not apply. The children of the node are assumed to be simplified already.

pub mod chain;
pub mod fold;
pub mod identity;

use symdiff_parser::parser::{node::Node, op::BinOpKind};
use super::super::step::{Step, StepCollector};

/// If the node is a binary operation with the given operator, calls the given transformation
/// function with the left and right operands.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_binary(
    node: &Node,
    op: BinOpKind,
    f: impl FnOnce(&Node, &Node) -> Option<Node>,
) -> Option<Node> {
    match node {
        Node::Binary { op: node_op, left, right } if *node_op == op => f(&**left, &**right),
        _ => None,
    }
}

/// Applies the first rule that matches the node.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    fold::all(node, step_collector)
        .or_else(|| chain::combine_chain(node, step_collector))
        .or_else(|| identity::all(node, step_collector))
}
