//! Error types for xtree

use std::fmt;
use thiserror::Error;

/// Boxed error returned by caller-supplied decorators
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn at(pos: Pos) -> Self {
        Self { start: pos, end: pos }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }

    /// Whether this span points at real input
    pub const fn is_empty(&self) -> bool {
        self.start.line == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", self.start)
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidToken,
    UnexpectedEof,
    MismatchedTag { expected: String, found: String },
    DuplicateAttribute { name: String },
    InvalidEntity,
    InvalidUtf8,
    EmptyDocument,
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
    /// The element tree cannot be addressed by paths
    MalformedInput { reason: String },
    /// The title decorator returned an error for `path`
    DecoratorFailure { path: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken => write!(f, "invalid token"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::MismatchedTag { expected, found } => {
                write!(f, "mismatched closing tag: expected </{expected}>, found </{found}>")
            }
            Self::DuplicateAttribute { name } => write!(f, "duplicate attribute: {name}"),
            Self::InvalidEntity => write!(f, "invalid xml entity"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
            Self::EmptyDocument => write!(f, "document has no root element"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
            Self::MalformedInput { reason } => write!(f, "malformed input: {reason}"),
            Self::DecoratorFailure { path } => {
                write!(f, "decorator failed for path {path:?}")
            }
        }
    }
}

/// Main error type for xtree
#[derive(Error, Debug)]
#[error("error at {span}: {message}")]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
    source: Option<BoxError>,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
            source: None,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            source: None,
        }
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        Self::new(kind, Span::at(pos))
    }

    /// Element tree that cannot be converted
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::MalformedInput {
                reason: reason.into(),
            },
            Span::empty(),
        )
    }

    /// Wrap a decorator error without altering it
    pub fn decorator(path: &str, source: impl Into<BoxError>) -> Self {
        let source = source.into();
        let message = format!("decorator failed for path {path:?}: {source}");
        Self {
            kind: ErrorKind::DecoratorFailure {
                path: path.to_string(),
            },
            span: Span::empty(),
            message,
            source: Some(source),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The decorator's original error, if it has type `E`
    pub fn decorator_source<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.source.as_deref()?.downcast_ref::<E>()
    }
}

/// Result type alias for xtree
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("lookup table missing")]
    struct LookupError;

    #[test]
    fn test_pos_display() {
        let pos = Pos::new(42, 10, 5);
        assert_eq!(pos.to_string(), "10:5");
    }

    #[test]
    fn test_error_creation() {
        let err = Error::at(ErrorKind::InvalidToken, Pos::new(0, 1, 1));
        assert_eq!(err.kind(), &ErrorKind::InvalidToken);
        assert_eq!(err.to_string(), "error at 1:1: invalid token");
    }

    #[test]
    fn test_malformed_has_no_position() {
        let err = Error::malformed("empty tag name");
        assert!(err.span().is_empty());
        assert_eq!(err.to_string(), "error at -: malformed input: empty tag name");
    }

    #[test]
    fn test_decorator_source_is_preserved() {
        let err = Error::decorator("/Root/Name", LookupError);
        assert_eq!(
            err.kind(),
            &ErrorKind::DecoratorFailure {
                path: "/Root/Name".to_string()
            }
        );
        assert!(err.decorator_source::<LookupError>().is_some());
        assert!(err.message().contains("lookup table missing"));

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("lookup table missing"));
    }
}
