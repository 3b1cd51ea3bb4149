use log::trace;
use symdiff_parser::parser::node::Node;
use super::{
    ctxt::Ctxt,
    error::{kind::{InvalidInterval, InvalidStep, TooManyVariables}, Error},
    eval::Eval,
};

/// Numerically integrates the absolute value of `node` over `[lower, upper]` with a left Riemann
/// sum.
///
/// Samples are taken at `lower + i * step` for `i = 0, 1, 2, ...` while the sample does not
/// exceed `upper`. Each sample's value is multiplied by `step`; products that are not finite are
/// skipped, and the absolute values of the rest are summed. The result is never negative.
///
/// The node may have at most one variable, which receives the sample point.
pub fn integrate(node: &Node, lower: f64, upper: f64, step: f64) -> Result<f64, Error> {
    let variables = node.variables();
    if variables.len() > 1 {
        return Err(Error::new(Vec::new(), TooManyVariables { names: variables }));
    }

    if !(step.is_finite() && step > 0.0) {
        return Err(Error::new(Vec::new(), InvalidStep { step }));
    }

    if !(lower.is_finite() && upper.is_finite()) {
        return Err(Error::new(Vec::new(), InvalidInterval { lower, upper }));
    }

    let variable = variables.first();
    let mut ctxt = Ctxt::new();
    let mut sum = 0.0;
    let mut i = 0u64;

    loop {
        let x = lower + i as f64 * step;
        if x > upper {
            break;
        }
        i += 1;

        if let Some(name) = variable {
            ctxt.add_var(name, x);
        }

        let area = node.eval(&ctxt)? * step;
        if area.is_finite() {
            sum += area.abs();
        } else {
            trace!("skipping non-finite sample at {}", x);
        }
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use symdiff_parser::parser::parse;
    use super::*;

    fn integrate_str(source: &str, lower: f64, upper: f64, step: f64) -> Result<f64, Error> {
        integrate(&parse(source).unwrap().tree, lower, upper, step)
    }

    #[test]
    fn linear() {
        assert_float_absolute_eq!(integrate_str("x", 0.0, 1.0, 0.001).unwrap(), 0.5, 1e-3);
    }

    #[test]
    fn constant() {
        assert_float_absolute_eq!(integrate_str("2", 0.0, 3.0, 0.5).unwrap(), 7.0);
    }

    #[test]
    fn area_is_absolute() {
        assert_float_absolute_eq!(integrate_str("t", -1.0, 1.0, 0.001).unwrap(), 1.0, 1e-2);
    }

    #[test]
    fn skips_non_finite_samples() {
        // the sample at 0 is infinite
        let area = integrate_str("1 / x", 0.0, 1.0, 0.5).unwrap();
        assert_float_absolute_eq!(area, 1.0 + 0.5);
    }

    #[test]
    fn empty_interval() {
        assert_eq!(integrate_str("x", 1.0, 0.0, 0.1).unwrap(), 0.0);
    }

    #[test]
    fn invalid_arguments() {
        assert!(integrate_str("x * y", 0.0, 1.0, 0.1).unwrap_err().is::<TooManyVariables>());
        assert!(integrate_str("x", 0.0, 1.0, 0.0).unwrap_err().is::<InvalidStep>());
        assert!(integrate_str("x", 0.0, 1.0, -0.1).unwrap_err().is::<InvalidStep>());
        assert!(integrate_str("x", 0.0, 1.0, f64::NAN).unwrap_err().is::<InvalidStep>());
        assert!(integrate_str("x", 0.0, f64::INFINITY, 0.1).unwrap_err().is::<InvalidInterval>());
    }
}
