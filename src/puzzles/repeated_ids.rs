//! Repeated-pattern id puzzle: sum invalid product ids across ranges
//!
//! Input lines hold comma-separated inclusive ranges like `11-22,95-115`.
//! An id is invalid when its decimal form is some shorter pattern repeated
//! at least twice (11, 6464, 123123). The answer is the sum of every
//! invalid id in any range, found by brute force over the ranges.

use crate::io::configuration::MIN_PATTERN_REPETITIONS;
use crate::io::error::{Result, malformed_input};

/// Sum every repeated-pattern id across all ranges in the input
///
/// # Errors
///
/// Returns [`crate::PuzzleError::MalformedInput`] for range entries that
/// are not `start-end` with integer bounds.
pub fn solve(input: &str) -> Result<i64> {
    let mut total = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        for part in line.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (start, end) = parse_range(index + 1, part)?;
            for id in start..=end {
                if is_repeated_id(id) {
                    total += id;
                }
            }
        }
    }

    Ok(total)
}

/// Check whether an id's decimal form is a shorter pattern repeated
///
/// `11`, `6464`, and `123123` are repeated; `7`, `121`, and `123456` are
/// not.
pub fn is_repeated_id(id: i64) -> bool {
    let digits = id.to_string();
    let bytes = digits.as_bytes();
    let len = bytes.len();

    (1..=len / 2).any(|pattern_len| {
        if len % pattern_len != 0 || len / pattern_len < MIN_PATTERN_REPETITIONS {
            return false;
        }

        let mut chunks = bytes.chunks(pattern_len);
        match chunks.next() {
            Some(pattern) => chunks.all(|chunk| chunk == pattern),
            None => false,
        }
    })
}

fn parse_range(line_number: usize, part: &str) -> Result<(i64, i64)> {
    let (start, end) = part
        .split_once('-')
        .ok_or_else(|| malformed_input(line_number, &format!("range '{part}' is missing '-'")))?;

    let start = start
        .trim()
        .parse()
        .map_err(|err| malformed_input(line_number, &err))?;
    let end = end
        .trim()
        .parse()
        .map_err(|err| malformed_input(line_number, &err))?;

    Ok((start, end))
}
