use std::ops::Range;
use super::{
    error::{kind, Error},
    node::Node,
    postfix::{Postfix, Term},
};

/// Builds an expression tree from a postfix sequence.
///
/// Operands are pushed onto a working stack. A single-operand function pops its operand, and a
/// binary operation pops its right operand and then its left operand. Exactly one tree must
/// remain at the end.
pub fn build_tree(postfix: &Postfix) -> Result<Node, Error> {
    // each sub-tree remembers the span of the term that produced its root
    let mut stack: Vec<(Node, Range<usize>)> = Vec::new();

    for token in &postfix.tokens {
        let node = match &token.term {
            Term::Number(n) => Node::Number(*n),
            Term::Variable(name) => Node::Variable(name.clone()),
            Term::Function(op) => {
                let (operand, _) = stack.pop()
                    .ok_or_else(|| Error::new(vec![token.span.clone()], kind::MissingOperand))?;
                Node::unary(*op, operand)
            },
            Term::Operator(op) => {
                let (right, _) = stack.pop()
                    .ok_or_else(|| Error::new(vec![token.span.clone()], kind::MissingOperand))?;
                let (left, _) = stack.pop()
                    .ok_or_else(|| Error::new(vec![token.span.clone()], kind::MissingOperand))?;
                Node::binary(*op, left, right)
            },
        };
        stack.push((node, token.span.clone()));
    }

    let Some((root, span)) = stack.pop() else {
        return Err(Error::new(Vec::new(), kind::EmptyExpression));
    };

    if stack.is_empty() {
        Ok(root)
    } else {
        Err(Error::new(vec![span], kind::MissingOperator))
    }
}
