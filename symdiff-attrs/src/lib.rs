//! Procedural macros for the `symdiff` crates.

mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_macro_input;

/// Implements `symdiff_error::ErrorKind` for a unit struct or a struct with named fields.
///
/// The report is described by the `error` attribute:
///
/// ```ignore
/// use symdiff_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown variable `{}`", name),
///     labels = ["not bound in this context"],
///     help = "bind it before evaluating",
/// )]
/// pub struct UnknownVariable {
///     pub name: String,
/// }
/// ```
///
/// - `message` (required): the headline of the report.
/// - `labels`: anything iterable whose items implement [`ToString`]. The `n`-th item labels the
///   `n`-th span of the error; an empty item leaves its span unlabeled.
/// - `help`: a note printed under the report.
///
/// Every tag is an arbitrary expression. Named fields are in scope as references while it is
/// evaluated.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    parse_macro_input!(item as ErrorKindTarget)
        .into_token_stream()
        .into()
}
