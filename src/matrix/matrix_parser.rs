//! Parser/validator for the bracketed matrix notation
//!
//! ```text
//! matrix  = "[" row+ "]"
//! row     = "[" value ("," value)* "]"
//! value   = integer | letter        (letter only for symbolic matrices)
//! integer = ["-"] digit+
//! ```
//! The number of rows must equal the length of every row. No whitespace is allowed.
//!
//! The scan walks the text row by row:
//!
//!   "[[13,4,7][2,51,12][11,30,9]]"
//!    ^^                              opening brackets
//!      ^^^^^^                        row 0 -> n = 3
//!            ^                       '[' : next row follows
//!             ^^^^^^^                row 1, must have n values
//!                    ^               '[' : next row follows
//!                     ^^^^^^^        row 2
//!                            ^       ']' : rows == n and nothing left -> done
use crate::matrix::matrix_errors::{MatrixError, ParseCause};
use crate::symbolic::element::{Element, IntElement};

use log::{debug, trace};
use nom::{
    IResult, Parser,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::pair,
};

/// Lexical rule of a matrix cell: how one comma-separated token becomes an element
pub trait ElementToken: Sized {
    fn parse_token(token: &str) -> Option<Self>;
}

fn integer_literal(input: &str) -> IResult<&str, i64> {
    let mut parser = all_consuming(map_res(
        recognize(pair(opt(char('-')), digit1)),
        |digits: &str| digits.parse::<i64>(),
    ));
    parser.parse(input)
}

/// strict `["-"] digit+`, no sign other than '-', no spaces, must fit into i64
pub fn parse_signed_integer(token: &str) -> Option<i64> {
    integer_literal(token).ok().map(|(_, value)| value)
}

// concrete matrices accept integers only
impl ElementToken for IntElement {
    fn parse_token(token: &str) -> Option<Self> {
        parse_signed_integer(token).map(IntElement::new)
    }
}

// symbolic matrices: integer first, otherwise exactly one ASCII letter
impl ElementToken for Element {
    fn parse_token(token: &str) -> Option<Self> {
        if let Some(value) = parse_signed_integer(token) {
            return Some(Element::Const(value));
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(name), None) if name.is_ascii_alphabetic() => Some(Element::Var(name)),
            _ => None,
        }
    }
}

fn parse_row<T: ElementToken>(segment: &str, row: usize) -> Result<Vec<T>, ParseCause> {
    segment
        .split(',')
        .map(|token| {
            if token.is_empty() {
                return Err(ParseCause::EmptyToken { row });
            }
            T::parse_token(token).ok_or_else(|| ParseCause::InvalidToken {
                row,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Scan the whole text into rows of elements, or report the first grammar violation
pub fn scan_matrix<T: ElementToken>(text: &str) -> Result<Vec<Vec<T>>, ParseCause> {
    let mut rest = text
        .strip_prefix("[[")
        .ok_or(ParseCause::MissingOpeningBrackets)?;
    let mut rows: Vec<Vec<T>> = Vec::new();
    let mut n = 0;

    loop {
        let row_index = rows.len();
        let Some(end) = rest.find(']') else {
            return Err(ParseCause::Unterminated);
        };
        let row = parse_row::<T>(&rest[..end], row_index)?;
        rest = &rest[end + 1..];

        if row_index == 0 {
            n = row.len();
        } else if row.len() != n {
            return Err(ParseCause::NonSquareRow {
                row: row_index,
                expected: n,
                found: row.len(),
            });
        }
        rows.push(row);
        trace!("row {} scanned, {} of {} rows", row_index, rows.len(), n);

        let position = text.len() - rest.len();
        let mut chars = rest.chars();
        match chars.next() {
            Some('[') => {
                if rows.len() == n {
                    return Err(ParseCause::RowCountMismatch {
                        expected: n,
                        found: n + 1,
                    });
                }
                rest = chars.as_str();
            }
            Some(']') => {
                if rows.len() != n {
                    return Err(ParseCause::RowCountMismatch {
                        expected: n,
                        found: rows.len(),
                    });
                }
                let remaining = chars.as_str();
                if !remaining.is_empty() {
                    return Err(ParseCause::TrailingCharacters(remaining.to_string()));
                }
                return Ok(rows);
            }
            Some(found) => return Err(ParseCause::UnexpectedCharacter { position, found }),
            None => return Err(ParseCause::Unterminated),
        }
    }
}

/// Parse text into `(n, rows)`; every grammar violation becomes `MalformedMatrixText`
pub fn parse_matrix<T: ElementToken>(text: &str) -> Result<(usize, Vec<Vec<T>>), MatrixError> {
    match scan_matrix::<T>(text) {
        Ok(rows) => Ok((rows.len(), rows)),
        Err(cause) => {
            debug!("matrix text '{}' rejected: {}", text, cause);
            Err(MatrixError::malformed(text, cause))
        }
    }
}

/// true if the text is a well-formed square matrix for element kind `T`
pub fn is_square_matrix<T: ElementToken>(text: &str) -> bool {
    scan_matrix::<T>(text).is_ok()
}
