//! Algebraic manipulation of expression trees.
//!
//! # Simplification
//!
//! [`simplify()`] rewrites a tree into a smaller, equivalent tree by folding constants, combining
//! the literals of chained operations, and removing identity operations such as `x * 1`. It is
//! best-effort: two equivalent expressions are not guaranteed to simplify to the same tree.
//!
//! ```
//! use symdiff_compute::symbolic::simplify;
//! use symdiff_parser::parser::parse;
//!
//! let tree = parse("(x + 2) + 3 * 1").unwrap().tree;
//! assert_eq!(simplify(&tree).to_string(), "( x + 5.0 )");
//! ```
//!
//! Each rewrite is reported to a [`StepCollector`]; use [`simplify_with_steps()`] to see which
//! rules were applied.
//!
//! # Differentiation
//!
//! [`derivative()`] produces the text of the derivative with respect to a variable. The text is
//! not simplified.
//!
//! ```
//! use symdiff_compute::symbolic::derivative;
//! use symdiff_parser::parser::parse;
//!
//! let tree = parse("x ^ 3").unwrap().tree;
//! assert_eq!(derivative(&tree, "x").unwrap(), "3.0 * x ^ 2.0 * ( 1.0 )");
//! ```

pub mod derivative;
pub mod error;
pub mod simplify;
pub mod step;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step::{Step, StepCollector};
