//! Digit selection puzzle: best fixed-length subsequence per line
//!
//! Each input line is a string of digits. Keeping digit order, the largest
//! `SELECTED_DIGIT_COUNT`-digit number is selected from each line; the
//! answer is the sum of those numbers across all lines.

use crate::io::configuration::SELECTED_DIGIT_COUNT;
use crate::io::error::{Result, malformed_input};

/// Sum the best digit subsequence of every input line
///
/// # Errors
///
/// Returns [`crate::PuzzleError::MalformedInput`] when a line contains a
/// non-digit character.
pub fn solve(input: &str) -> Result<i64> {
    let mut total = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let digits = line
            .chars()
            .map(|ch| {
                ch.to_digit(10)
                    .ok_or_else(|| malformed_input(index + 1, &format!("'{ch}' is not a digit")))
            })
            .collect::<Result<Vec<_>>>()?;

        let best = best_subsequence(&digits, SELECTED_DIGIT_COUNT);
        total += best
            .iter()
            .fold(0_i64, |value, &digit| value * 10 + i64::from(digit));
    }

    Ok(total)
}

/// Greedily select the largest `count`-digit subsequence preserving order
///
/// Monotonic stack: while removals remain, a smaller stacked digit is
/// dropped in favor of the incoming larger one. Inputs shorter than
/// `count` are returned whole.
pub fn best_subsequence(digits: &[u32], count: usize) -> Vec<u32> {
    let mut stack: Vec<u32> = Vec::with_capacity(digits.len());
    let mut removable = digits.len().saturating_sub(count);

    for &digit in digits {
        while removable > 0 && stack.last().is_some_and(|&top| top < digit) {
            stack.pop();
            removable -= 1;
        }
        stack.push(digit);
    }

    stack.truncate(count);
    stack
}
