use crate::symbolic::element::ElementError;
use std::fmt;

/// Why a piece of text was rejected by the matrix grammar.
/// Rows are counted from 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCause {
    /// text does not start with `[[`
    MissingOpeningBrackets,
    /// nothing between two separators, or an empty row
    EmptyToken { row: usize },
    /// token is neither an integer nor (for symbolic matrices) a single letter
    InvalidToken { row: usize, token: String },
    /// row length differs from the length of the first row
    NonSquareRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// number of rows differs from the row length
    RowCountMismatch { expected: usize, found: usize },
    /// something other than `[` or `]` after a row
    UnexpectedCharacter { position: usize, found: char },
    /// text ended before the closing brackets
    Unterminated,
    /// characters after the final `]`
    TrailingCharacters(String),
}

impl fmt::Display for ParseCause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseCause::MissingOpeningBrackets => write!(f, "matrix must start with '[['"),
            ParseCause::EmptyToken { row } => write!(f, "empty value in row {}", row),
            ParseCause::InvalidToken { row, token } => {
                write!(f, "invalid value '{}' in row {}", token, row)
            }
            ParseCause::NonSquareRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} values, expected {}",
                row, found, expected
            ),
            ParseCause::RowCountMismatch { expected, found } => {
                write!(f, "matrix has {} rows, expected {}", found, expected)
            }
            ParseCause::UnexpectedCharacter { position, found } => {
                write!(f, "unexpected character '{}' at position {}", found, position)
            }
            ParseCause::Unterminated => write!(f, "missing closing bracket"),
            ParseCause::TrailingCharacters(rest) => {
                write!(f, "unexpected characters after matrix: '{}'", rest)
            }
        }
    }
}

/// Errors of matrix construction, arithmetic and evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// text does not follow `[[a11,...,a1n]...[an1,...,ann]]`
    MalformedMatrixText { text: String, cause: ParseCause },
    /// arithmetic between matrices of different size
    DimensionMismatch { left: usize, right: usize },
    /// a cell could not be evaluated; row-major position of the first failing cell
    EvaluationFailed {
        row: usize,
        column: usize,
        source: ElementError,
    },
}

impl MatrixError {
    pub fn malformed(text: &str, cause: ParseCause) -> Self {
        MatrixError::MalformedMatrixText {
            text: text.to_string(),
            cause,
        }
    }

    /// grammar failure cause, if this is a parsing error
    pub fn parse_cause(&self) -> Option<&ParseCause> {
        match self {
            MatrixError::MalformedMatrixText { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::MalformedMatrixText { text, cause } => write!(
                f,
                "String '{}' must be in format [[a11,...,a1n]...[an1,...,ann]]: {}",
                text, cause
            ),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "Matrices are not the same size ({}x{} and {}x{})",
                left, left, right, right
            ),
            MatrixError::EvaluationFailed {
                row,
                column,
                source,
            } => write!(
                f,
                "Could not do evaluation at ({}, {}): {}",
                row, column, source
            ),
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrixError::EvaluationFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
