//! Parser for infix mathematical expressions.
//!
//! Source text is tokenized with [`logos`], converted into a postfix sequence with the
//! shunting-yard algorithm, and then built into an expression tree of [`Node`]s. The tree's
//! [`Display`](std::fmt::Display) implementation writes fully parenthesized text that parses back
//! into the same tree.
//!
//! ```
//! use symdiff_parser::parser::parse;
//!
//! let parsed = parse("x ^ 2 + sin(y)").unwrap();
//! assert_eq!(parsed.postfix.to_string(), "x 2.0 ^ y sin +");
//! assert_eq!(parsed.tree.to_string(), "( ( x ^ 2.0 ) + ( sin ( y ) ) )");
//! ```
//!
//! [`Node`]: parser::node::Node

pub mod parser;
pub mod tokenizer;
