use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values bound to variables.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new, empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, sorted by
    /// name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

impl From<HashMap<String, f64>> for Ctxt {
    fn from(vars: HashMap<String, f64>) -> Self {
        Self { vars }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for Ctxt {
    fn from(vars: [(S, f64); N]) -> Self {
        vars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_replace() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 1.0);
        ctxt.add_var("x", 2.0);
        assert_eq!(ctxt.get_var("x"), Some(2.0));
        assert_eq!(ctxt.get_var("y"), None);
        assert_eq!(ctxt.get_vars().len(), 1);
    }

    #[test]
    fn from_pairs() {
        let ctxt = Ctxt::from([("x", 1.0), ("y", 2.0)]);
        assert_eq!(ctxt.get_var("y"), Some(2.0));
    }

    #[test]
    fn similar_names() {
        let ctxt = Ctxt::from([("x1", 1.0), ("x2", 2.0), ("theta", 3.0)]);
        assert_eq!(ctxt.get_similar_vars("x"), vec!["x1", "x2"]);
        assert!(ctxt.get_similar_vars("phi").is_empty());
    }
}
