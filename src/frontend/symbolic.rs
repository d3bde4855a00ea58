//! Symbolic form: groups of meow tokens, each terminated by the separator.

use nom::bytes::complete::tag_no_case;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map};
use nom::error::ErrorKind;
use nom::multi::{many0, many0_count};
use nom::sequence::terminated;
use crate::{Cell, CellAddress, SEPARATOR};
use crate::shared::language::Language;
use super::error::{ParseError, ParseErrorKind, ParseResult};

type Input<'a> = &'a str;
type Failure<'a> = nom::error::Error<Input<'a>>;
type Output<'a, O> = nom::IResult<Input<'a>, O, Failure<'a>>;

// meow token of any language, any case

fn meow<'a>(tokens: &'a [&'static str]) -> impl Fn(Input<'a>) -> Output<'a, Input<'a>> + 'a {
    move |i: Input<'a>| {
        for token in tokens {
            if let Ok(result) = tag_no_case::<_, _, Failure<'a>>(*token)(i) {
                return Ok(result);
            }
        }
        Err(nom::Err::Error(Failure::new(i, ErrorKind::Tag)))
    }
}

// group (meow meow meow;)

fn group<'a>(tokens: &'a [&'static str]) -> impl FnMut(Input<'a>) -> Output<'a, Cell> + 'a {
    map(terminated(many0_count(meow(tokens)), char(SEPARATOR)), Cell::from)
}

/// Maps a byte offset within the whitespace-free source back to the original source.
fn source_offset(code: &str, stripped_offset: CellAddress) -> CellAddress {
    let mut seen = 0;
    for (offset, c) in code.char_indices().filter(|(_, c)| !c.is_whitespace()) {
        if seen >= stripped_offset {
            return offset;
        }
        seen += c.len_utf8();
    }
    code.len()
}

/// Parses symbolic-form source into a cell list. Each separator terminated group becomes one cell holding the number
/// of meow tokens in the group. Whitespace is ignored everywhere.
pub fn parse_symbolic(code: &str) -> ParseResult<Vec<Cell>> {
    let stripped: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    let tokens = Language::tokens();
    let result = all_consuming(many0(group(&tokens)))(stripped.as_str());
    match result {
        Ok((_, cells)) => {
            tracing::debug!(cells = cells.len(), "parsed symbolic form");
            Ok(cells)
        },
        Err(nom::Err::Error(failure)) | Err(nom::Err::Failure(failure)) => {
            let position = source_offset(code, stripped.len() - failure.input.len());
            Err(ParseError::new(ParseErrorKind::SyntaxError, position))
        },
        Err(nom::Err::Incomplete(_)) => {
            Err(ParseError::new(ParseErrorKind::SyntaxError, code.len()))
        },
    }
}
