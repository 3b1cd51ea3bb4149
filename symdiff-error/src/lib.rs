//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that carries an error kind along with the regions of source
//! text it originated from.

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

// lets `#[derive(ErrorKind)]` refer to this crate by name in the tests below
#[cfg(test)]
extern crate self as symdiff_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `symdiff_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns this error kind as [`Any`], so callers can check which kind of error occurred.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. This can be empty if the
    /// error is not tied to any particular piece of source text.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns a reference to the error kind if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the error kind is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use super::*;
    use symdiff_attrs::ErrorKind;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = "something went wrong",
        labels = ["right here"],
        help = "try something else",
    )]
    struct Unit;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("`{}` is broken", name),
        labels = [format!("this is `{}`", name)],
    )]
    struct Named {
        name: String,
    }

    /// Renders the report for the error into a string with the ANSI color codes removed.
    fn render(err: &Error, src: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![0..1], Named { name: "x".to_string() });
        assert_eq!(err.to_string(), "`x` is broken");
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], Unit);
        assert!(err.is::<Unit>());
        assert!(!err.is::<Named>());
        assert_eq!(err.downcast_ref::<Unit>(), Some(&Unit));
    }

    #[test]
    fn report_contains_labels_and_help() {
        let err = Error::new(vec![4..5], Unit);
        let report = render(&err, "1 + $");
        assert!(report.contains("something went wrong"));
        assert!(report.contains("right here"));
        assert!(report.contains("try something else"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(Vec::new(), Named { name: "y".to_string() });
        let report = render(&err, "y");
        assert!(report.contains("`y` is broken"));
        assert!(!report.contains("this is `y`"));
    }
}
