use std::{error::Error, fmt, io};

use crate::{nag::InvalidNag, san::ParseSanError};

/// Broad classes of [`ErrorKind`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Category {
    /// A token where the grammar required a different one.
    Syntax,
    /// A move token that is not valid SAN.
    Move,
    /// Movetext without a result marker in strict mode.
    Termination,
    /// The underlying reader failed.
    Io,
}

/// What went wrong.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// `[` not followed by a tag name.
    ExpectedTagName { found: String },
    /// Tag name not followed by a quoted value.
    ExpectedTagValue { found: String },
    /// Tag value not followed by `]`.
    UnclosedTag { found: String },
    /// A token that cannot appear where it was found.
    UnexpectedToken { found: String },
    /// An annotation before the first move of a line.
    NagWithoutMove,
    /// `(` before the first move of a line.
    VariationWithoutMove,
    /// A variation not closed by `)`.
    UnclosedVariation { found: String },
    /// `)` without a matching `(`.
    UnmatchedCloseParen,
    /// `(` nested deeper than the configured limit.
    VariationTooDeep { limit: usize },
    /// `$` followed by a number too large to store.
    InvalidNag { nag: String, source: InvalidNag },
    InvalidMove { san: String, source: ParseSanError },
    /// Strict mode requires a result marker after the movetext.
    MissingResult { found: String },
    Io(io::Error),
}

impl ErrorKind {
    pub fn category(&self) -> Category {
        match *self {
            ErrorKind::InvalidMove { .. } => Category::Move,
            ErrorKind::MissingResult { .. } => Category::Termination,
            ErrorKind::Io(_) => Category::Io,
            _ => Category::Syntax,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ExpectedTagName { found } => {
                write!(f, "expected tag name, got {found}")
            }
            ErrorKind::ExpectedTagValue { found } => {
                write!(f, "expected string for tag value, got {found}")
            }
            ErrorKind::UnclosedTag { found } => write!(f, "expected ']' to close tag, got {found}"),
            ErrorKind::UnexpectedToken { found } => write!(f, "unexpected {found}"),
            ErrorKind::NagWithoutMove => f.write_str("annotation before any move"),
            ErrorKind::VariationWithoutMove => f.write_str("variation before any move"),
            ErrorKind::UnclosedVariation { found } => {
                write!(f, "expected ')' to close variation, got {found}")
            }
            ErrorKind::UnmatchedCloseParen => f.write_str("unmatched ')'"),
            ErrorKind::VariationTooDeep { limit } => {
                write!(f, "variations nested deeper than {limit} levels")
            }
            ErrorKind::InvalidNag { nag, source } => write!(f, "{source}: ${nag}"),
            ErrorKind::InvalidMove { san, source } => write!(f, "{source}: {san}"),
            ErrorKind::MissingResult { found } => {
                write!(f, "game must end with a result marker, got {found}")
            }
            ErrorKind::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

/// Error when a game cannot be parsed.
///
/// The position points at the first byte of the offending token.
#[derive(Debug)]
pub struct ParseError {
    kind: ErrorKind,
    line: u32,
    column: u32,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, line: u32, column: u32) -> ParseError {
        ParseError { kind, line, column }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// 1-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column, counted in bytes.
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.kind)
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ErrorKind::InvalidNag { source, .. } => Some(source),
            ErrorKind::InvalidMove { source, .. } => Some(source),
            ErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> io::Error {
        match err.kind {
            ErrorKind::Io(err) => err,
            _ => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        assert_eq!(ErrorKind::NagWithoutMove.category(), Category::Syntax);
        assert_eq!(
            ErrorKind::MissingResult {
                found: "end of input".to_owned()
            }
            .category(),
            Category::Termination
        );
        assert_eq!(
            ErrorKind::Io(io::Error::from(io::ErrorKind::UnexpectedEof)).category(),
            Category::Io
        );
    }

    #[test]
    fn test_display() {
        let err = ParseError::new(ErrorKind::UnmatchedCloseParen, 3, 14);
        assert_eq!(err.to_string(), "3:14: unmatched ')'");
        assert!(err.source().is_none());

        let err = ParseError::new(ErrorKind::VariationTooDeep { limit: 2 }, 1, 1);
        assert_eq!(err.to_string(), "1:1: variations nested deeper than 2 levels");
    }

    #[test]
    fn test_into_io_error() {
        let err = ParseError::new(ErrorKind::NagWithoutMove, 1, 1);
        assert_eq!(io::Error::from(err).kind(), io::ErrorKind::InvalidData);

        let err = ParseError::new(ErrorKind::Io(io::ErrorKind::BrokenPipe.into()), 1, 1);
        assert_eq!(io::Error::from(err).kind(), io::ErrorKind::BrokenPipe);
    }
}
