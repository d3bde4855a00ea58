use num_traits::Zero;
use crate::{Cell, SEPARATOR};
use crate::shared::language::Language;

/// Formats a cell list as symbolic source in the given language, one group per line.
///
/// The result parses back into the same cell list. Note that a cell value of `n` produces `n` tokens, so this is only
/// sensible for lists of small values.
pub fn to_symbolic(cells: &[Cell], language: Language) -> String {
    let token = language.token();
    let mut result = String::new();
    for cell in cells {
        let mut remaining = cell.clone();
        while !remaining.is_zero() {
            result.push_str(token);
            remaining -= 1u32;
        }
        result.push(SEPARATOR);
        result.push('\n');
    }
    result
}
