use log::debug;
use std::{fmt, str::FromStr};
use symdiff_error::Error;
use symdiff_parser::parser::{fmt::Diagram, node::Node, parse, postfix::Postfix};
use crate::{
    numerical::{self, ctxt::Ctxt, eval::{self, Eval}},
    symbolic::{self, Step},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed expression.
///
/// An expression remembers the text it was created from, along with its postfix sequence and
/// tree. It is never modified after it is created: [`Expression::simplify`] and
/// [`Expression::derivative`] return new expressions, parsed from their own text.
///
/// ```
/// use symdiff_compute::Expression;
///
/// let expr = Expression::new("x ^ 3 + 2 * x").unwrap();
/// assert_eq!(expr.evaluate_positional(&[2.0]).unwrap(), 12.0);
///
/// let derivative = expr.derivative("x").unwrap();
/// assert_eq!(derivative.evaluate_positional(&[2.0]).unwrap(), 14.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    /// The source text, as given.
    text: String,

    /// The postfix sequence, including the variables in order of first appearance.
    postfix: Postfix,

    /// The expression tree.
    tree: Node,
}

/// Removes the parentheses that the reconstructor wraps around every operation.
fn strip_outer_parens(text: &str) -> &str {
    text.strip_prefix("( ")
        .and_then(|inner| inner.strip_suffix(" )"))
        .unwrap_or(text)
}

impl Expression {
    /// Parses an expression from source text.
    pub fn new(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        let parsed = parse(&text)?;
        Ok(Self {
            text,
            postfix: parsed.postfix,
            tree: parsed.tree,
        })
    }

    /// Parses the canonical text of a tree into a new, independent expression.
    fn from_tree(tree: &Node) -> Result<Self, Error> {
        Self::new(strip_outer_parens(&tree.to_string()))
    }

    /// Returns the source text of the expression.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the distinct variables of the expression, in order of first appearance.
    pub fn variables(&self) -> &[String] {
        &self.postfix.variables
    }

    /// Returns the postfix sequence of the expression.
    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    /// Returns the expression tree.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Returns a value that renders the expression tree as an indented diagram.
    pub fn diagram(&self) -> Diagram<'_> {
        self.tree.diagram()
    }

    /// Evaluates the expression with the variable values in the given context.
    ///
    /// Fails if any variable of the expression has no value; the error names all of them, and
    /// points at the first occurrence of each.
    pub fn evaluate(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let unbound = self.variables()
            .iter()
            .filter(|name| ctxt.get_var(name).is_none())
            .cloned()
            .collect::<Vec<_>>();

        if !unbound.is_empty() {
            let spans = unbound.iter()
                .filter_map(|name| self.postfix.first_span_of(name))
                .collect();
            return Err(eval::missing_variables(unbound, spans, ctxt));
        }

        self.tree.eval(ctxt)
    }

    /// Evaluates the expression, assigning the `i`-th value to the `i`-th variable returned by
    /// [`Expression::variables`]. Extra values are ignored.
    pub fn evaluate_positional(&self, values: &[f64]) -> Result<f64, Error> {
        let ctxt = self.variables()
            .iter()
            .zip(values)
            .map(|(name, value)| (name.as_str(), *value))
            .collect::<Ctxt>();
        self.evaluate(&ctxt)
    }

    /// Evaluates an expression that has no variables.
    pub fn evaluate_const(&self) -> Result<f64, Error> {
        self.evaluate(&Ctxt::new())
    }

    /// Returns a simplified copy of the expression.
    pub fn simplify(&self) -> Result<Self, Error> {
        self.simplify_with_steps().map(|(expr, _)| expr)
    }

    /// Returns a simplified copy of the expression, along with the rewrites that were applied.
    pub fn simplify_with_steps(&self) -> Result<(Self, Vec<Step>), Error> {
        let (tree, steps) = symbolic::simplify_with_steps(&self.tree);
        let simplified = Self::from_tree(&tree)?;
        debug!("simplified `{}` to `{}` in {} steps", self, simplified, steps.len());
        Ok((simplified, steps))
    }

    /// Returns the unsimplified text of the derivative with respect to `var`.
    pub fn derivative_text(&self, var: &str) -> Result<String, Error> {
        symbolic::derivative(&self.tree, var)
    }

    /// Returns the simplified derivative with respect to `var`.
    pub fn derivative(&self, var: &str) -> Result<Self, Error> {
        let text = self.derivative_text(var)?;
        let derivative = Self::new(text)?.simplify()?;
        debug!("derivative of `{}` with respect to `{}` is `{}`", self, var, derivative);
        Ok(derivative)
    }

    /// Numerically integrates the absolute value of the expression over `[lower, upper]`. See
    /// [`numerical::integrate()`] for details.
    pub fn integrate(&self, lower: f64, upper: f64, step: f64) -> Result<f64, Error> {
        let mut result = numerical::integrate(&self.tree, lower, upper, step);

        // point the error at the variables
        if let Err(err) = &mut result {
            if err.spans.is_empty() {
                err.spans = self.variables()
                    .iter()
                    .filter_map(|name| self.postfix.first_span_of(name))
                    .collect();
            }
        }

        result
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Expression {
    /// Writes the canonical, fully parenthesized text of the expression.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tree)
    }
}

impl PartialEq for Expression {
    /// Two expressions are equal if their canonical text is identical.
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
