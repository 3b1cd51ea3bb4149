//! Best-effort algebraic simplification of expression trees.
//!
//! The tree is simplified bottom-up. Once the children of a node are simplified, the rules in
//! [`rules`] are applied to the node repeatedly until none of them match. Every rule replaces the
//! node with a smaller one, so this always terminates.

pub mod rules;

use log::trace;
use symdiff_parser::parser::node::Node;
use super::step::{Step, StepCollector};

/// Simplifies the given node with the given step collector.
pub fn simplify_with(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    let mut node = match node {
        Node::Number(_) | Node::Variable(_) => node.clone(),
        Node::Unary { op, operand } => Node::unary(*op, simplify_with(operand, step_collector)),
        Node::Binary { op, left, right } => Node::binary(
            *op,
            simplify_with(left, step_collector),
            simplify_with(right, step_collector),
        ),
    };

    while let Some(next) = rules::all(&node, step_collector) {
        trace!("simplified `{}` to `{}`", node, next);
        node = next;
    }

    node
}

/// Simplifies the given node.
pub fn simplify(node: &Node) -> Node {
    simplify_with(node, &mut ())
}

/// Simplifies the given node, returning the steps taken to simplify it.
pub fn simplify_with_steps(node: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let node = simplify_with(node, &mut steps);
    (node, steps)
}
