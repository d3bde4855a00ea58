//! Source parsing. Both source forms compile into the same cell list.

pub mod error;
mod numeric;
mod symbolic;
mod format;

use crate::Cell;
use error::ParseResult;

pub use numeric::parse_numeric;
pub use symbolic::parse_symbolic;
pub use format::to_symbolic;

/// Returns whether the source is treated as numeric form.
///
/// Any ASCII digit anywhere in the source selects the numeric form. This is intentionally naive: symbolic source
/// containing a digit (e.g. `meow;2;` with a typo between groups) is routed to the numeric parser and rejected there.
pub fn is_numeric_form(code: &str) -> bool {
    code.chars().any(|c| c.is_ascii_digit())
}

/// Parses source of either form into a cell list.
pub fn parse(code: &str) -> ParseResult<Vec<Cell>> {
    if is_numeric_form(code) {
        parse_numeric(code)
    } else {
        parse_symbolic(code)
    }
}
