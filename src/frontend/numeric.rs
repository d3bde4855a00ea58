//! Numeric form: one decimal cell value per line.

use nom::character::complete::digit1;
use nom::combinator::all_consuming;
use crate::{Cell, CellAddress};
use super::error::{ParseError, ParseErrorKind, ParseResult};

/// A single digits-only token.
fn number(i: &str) -> nom::IResult<&str, &str> {
    all_consuming(digit1)(i)
}

/// Splits source into non-empty lines along with their byte offset in the source.
fn lines(code: &str) -> impl Iterator<Item = (CellAddress, &str)> {
    code.split(|c: char| c == '\r' || c == '\n')
        .scan(0, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1; // one byte for the line break
            Some((start, line))
        })
        .filter(|(_, line)| !line.is_empty())
}

/// Parses numeric-form source into a cell list. Whitespace within a line is ignored, blank lines are skipped.
/// Values are not limited in size.
pub fn parse_numeric(code: &str) -> ParseResult<Vec<Cell>> {
    let mut cells = Vec::new();
    for (position, line) in lines(code) {
        let token: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if token.is_empty() {
            continue;
        }
        let value = number(&token).ok().and_then(|(_, digits)| digits.parse::<Cell>().ok());
        match value {
            Some(value) => cells.push(value),
            None => return Err(ParseError::new(ParseErrorKind::InvalidNumber(token), position)),
        }
    }
    tracing::debug!(cells = cells.len(), "parsed numeric form");
    Ok(cells)
}
