use symdiff_parser::parser::node::Node;
use super::{
    builtin::Apply,
    ctxt::Ctxt,
    error::{kind::MissingVariable, Error},
};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

/// Returns the variables of the node that have no value in the context, in the order they
/// appear.
pub fn unbound_variables(node: &Node, ctxt: &Ctxt) -> Vec<String> {
    node.variables()
        .into_iter()
        .filter(|name| ctxt.get_var(name).is_none())
        .collect()
}

/// Builds the error for the given unbound variables, suggesting similarly named variables that
/// are bound in the context.
pub fn missing_variables(names: Vec<String>, spans: Vec<std::ops::Range<usize>>, ctxt: &Ctxt) -> Error {
    let mut suggestions = Vec::new();
    for name in &names {
        for similar in ctxt.get_similar_vars(name) {
            if !suggestions.iter().any(|s| s == similar) {
                suggestions.push(similar.to_string());
            }
        }
    }
    Error::new(spans, MissingVariable { names, suggestions })
}

/// Evaluates a node whose variables are known to be bound.
fn eval_bound(node: &Node, ctxt: &Ctxt) -> f64 {
    match node {
        Node::Number(n) => *n,
        Node::Variable(name) => ctxt.get_var(name).unwrap_or(f64::NAN),
        Node::Unary { op, operand } => op.apply(eval_bound(operand, ctxt)),
        Node::Binary { op, left, right } => {
            op.apply((eval_bound(left, ctxt), eval_bound(right, ctxt)))
        },
    }
}

impl Eval for Node {
    /// Evaluates the tree in post-order. Every variable of the tree must have a value in the
    /// context; otherwise, the error names all of the unbound variables.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let unbound = unbound_variables(self, ctxt);
        if !unbound.is_empty() {
            return Err(missing_variables(unbound, Vec::new(), ctxt));
        }
        Ok(eval_bound(self, ctxt))
    }
}
