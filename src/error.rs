//! Error types for this crate.
use thiserror::Error;

/// Any kind of error that can happen when parsing rows into [crate::Transaction] values.
///
/// The displayed message never mentions the row: callers match on it verbatim. Use
/// [ParseError::line_number] and [ParseError::row] to locate the culprit.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum ParseError {
    #[error("Incorrect number of data in row")]
    MalformedRow { line: usize, row: String },
    #[error("Such operation does not exist")]
    UnknownOperation { line: usize, row: String },
    #[error("Wrong input type, int type expected")]
    InvalidQuantity { line: usize, row: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// The 1-based line of the offending row, the header being line 1.
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedRow { line, .. }
            | Self::UnknownOperation { line, .. }
            | Self::InvalidQuantity { line, .. } => *line,
        }
    }

    /// The offending row, as it was given.
    pub fn row(&self) -> &str {
        match self {
            Self::MalformedRow { row, .. }
            | Self::UnknownOperation { row, .. }
            | Self::InvalidQuantity { row, .. } => row,
        }
    }
}
