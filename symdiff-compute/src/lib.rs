//! Evaluation, simplification, differentiation and integration of expressions parsed by
//! [`symdiff_parser`].
//!
//! Most users only need [`Expression`], which ties the pieces together:
//!
//! ```
//! use symdiff_compute::{numerical::ctxt::Ctxt, Expression};
//!
//! let expr: Expression = "x * sin(x) + 0 * y".parse().unwrap();
//! assert_eq!(expr.variables(), ["x".to_string(), "y".to_string()]);
//!
//! let simplified = expr.simplify().unwrap();
//! assert_eq!(simplified.to_string(), "( x * ( sin ( x ) ) )");
//!
//! let value = simplified.evaluate(&Ctxt::from([("x", 0.0)])).unwrap();
//! assert_eq!(value, 0.0);
//! ```
//!
//! The lower-level [`numerical`] and [`symbolic`] modules work directly on
//! [`Node`](symdiff_parser::parser::node::Node) trees.
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`Expression`], [`symbolic::Step`] and
//!   [`numerical::ctxt::Ctxt`], along with the parser's types.

pub mod expression;
pub mod numerical;
pub mod symbolic;

pub use expression::Expression;
pub use symdiff_error::Error;
