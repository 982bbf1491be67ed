//! Hexadecimal digit expansion to fixed-width binary text

use crate::io::error::{PuzzleError, Result};

/// Expand one hexadecimal digit to its 4-bit binary representation
///
/// Accepts either case and zero-pads to width 4, so `'f'` becomes `"1111"`
/// and `'1'` becomes `"0001"`.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidHexDigit`] when `ch` is not a hexadecimal
/// digit.
pub fn nibble_to_binary(ch: char) -> Result<String> {
    let value = ch
        .to_digit(16)
        .ok_or(PuzzleError::InvalidHexDigit { ch })?;
    Ok(format!("{value:04b}"))
}
