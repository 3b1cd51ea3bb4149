//! Evaluation rules for the built-in operators and functions.

use symdiff_parser::parser::op::{BinOpKind, UnaryOpKind};

/// Applies an operation to `f64` operands.
pub trait Apply<Args> {
    /// Applies the operation.
    fn apply(self, args: Args) -> f64;
}

impl Apply<f64> for UnaryOpKind {
    fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sqrt => x.sqrt(),
            Self::Ln => x.ln(),
        }
    }
}

impl Apply<(f64, f64)> for BinOpKind {
    /// Applies the operation as `left op right`. For [`BinOpKind::Log`], `left` is the value and
    /// `right` is the base.
    fn apply(self, (left, right): (f64, f64)) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Exp => left.powf(right),
            Self::Log => left.log(right),
            Self::Max => left.max(right),
            Self::Min => left.min(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use super::*;

    #[test]
    fn operand_order() {
        assert_eq!(BinOpKind::Sub.apply((5.0, 3.0)), 2.0);
        assert_eq!(BinOpKind::Div.apply((1.0, 4.0)), 0.25);
        assert_eq!(BinOpKind::Exp.apply((2.0, 3.0)), 8.0);
        assert_float_absolute_eq!(BinOpKind::Log.apply((8.0, 2.0)), 3.0);
        assert_eq!(BinOpKind::Max.apply((-1.0, 2.0)), 2.0);
        assert_eq!(BinOpKind::Min.apply((-1.0, 2.0)), -1.0);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(BinOpKind::Div.apply((1.0, 0.0)), f64::INFINITY);
        assert!(BinOpKind::Div.apply((0.0, 0.0)).is_nan());
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(UnaryOpKind::Sin.apply(std::f64::consts::FRAC_PI_2), 1.0);
        assert_float_absolute_eq!(UnaryOpKind::Ln.apply(std::f64::consts::E), 1.0);
        assert_eq!(UnaryOpKind::Sqrt.apply(16.0), 4.0);
        assert!(UnaryOpKind::Sqrt.apply(-1.0).is_nan());
        assert_float_absolute_eq!(UnaryOpKind::Atan.apply(1.0), std::f64::consts::FRAC_PI_4);
    }
}
