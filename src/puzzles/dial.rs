//! Rotation dial puzzle: count completed passes over position zero
//!
//! The dial has positions `0..DIAL_POSITIONS` and starts at `DIAL_START`.
//! Each input line is a rotation like `R48` or `L17`; the answer is how
//! many times the pointer passes position zero across all rotations.

use crate::io::configuration::{DIAL_POSITIONS, DIAL_START};
use crate::io::error::{Result, malformed_input};

/// Count passes over position zero for a list of rotations
///
/// # Errors
///
/// Returns [`crate::PuzzleError::MalformedInput`] for lines that are not a
/// direction character (`R` or `L`) followed by a non-negative amount.
pub fn solve(input: &str) -> Result<i64> {
    let mut passes = 0;
    let mut position = DIAL_START;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (direction, amount) = parse_rotation(index + 1, line)?;
        if direction == 'R' {
            passes += (position + amount) / DIAL_POSITIONS - position / DIAL_POSITIONS;
            position = (position + amount) % DIAL_POSITIONS;
        } else {
            // Mirror the dial so a left turn reuses the right-turn count
            let reflected = (DIAL_POSITIONS - position) % DIAL_POSITIONS;
            passes += (reflected + amount) / DIAL_POSITIONS - reflected / DIAL_POSITIONS;
            position = (position - amount).rem_euclid(DIAL_POSITIONS);
        }
    }

    Ok(passes)
}

fn parse_rotation(line_number: usize, line: &str) -> Result<(char, i64)> {
    let mut chars = line.chars();
    let direction = chars
        .next()
        .ok_or_else(|| malformed_input(line_number, &"empty rotation"))?;

    if direction != 'R' && direction != 'L' {
        return Err(malformed_input(
            line_number,
            &format!("unknown rotation direction '{direction}'"),
        ));
    }

    let amount = chars
        .as_str()
        .parse::<i64>()
        .map_err(|err| malformed_input(line_number, &err))?;
    if amount < 0 {
        return Err(malformed_input(line_number, &"negative rotation amount"));
    }

    Ok((direction, amount))
}
