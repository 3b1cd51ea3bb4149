//! Numerical evaluation of expression trees.
//!
//! Values are plain `f64`s. Variables receive their values from a [`Ctxt`].
//!
//! [`Ctxt`]: ctxt::Ctxt

pub mod builtin;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod integrate;

pub use integrate::integrate;
