//! Location list puzzle: pairwise distance and similarity scoring
//!
//! Input is two whitespace-separated columns of location ids, one pair per
//! line. The same input answers two questions: the total distance between
//! the sorted columns, and a similarity score weighting each left id by
//! its number of appearances on the right.

use crate::io::error::{Result, malformed_input};

/// Sum of pairwise distances after sorting both columns
///
/// # Errors
///
/// Returns [`crate::PuzzleError::MalformedInput`] for lines without two
/// integer fields.
pub fn total_distance(input: &str) -> Result<i64> {
    let (mut left, mut right) = parse_columns(input)?;
    left.sort_unstable();
    right.sort_unstable();

    Ok(left
        .iter()
        .zip(&right)
        .map(|(l, r)| (l - r).abs())
        .sum())
}

/// Sum of each left id times its occurrence count on the right
///
/// # Errors
///
/// Returns [`crate::PuzzleError::MalformedInput`] for lines without two
/// integer fields.
pub fn similarity_score(input: &str) -> Result<i64> {
    let (left, right) = parse_columns(input)?;

    Ok(left
        .iter()
        .map(|l| l * right.iter().filter(|r| *r == l).count() as i64)
        .sum())
}

fn parse_columns(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line_number = index + 1;
        let mut fields = line.split_whitespace();
        let first = fields
            .next()
            .ok_or_else(|| malformed_input(line_number, &"expected two location ids"))?;
        let second = fields
            .next_back()
            .ok_or_else(|| malformed_input(line_number, &"expected two location ids"))?;

        left.push(
            first
                .parse()
                .map_err(|err| malformed_input(line_number, &err))?,
        );
        right.push(
            second
                .parse()
                .map_err(|err| malformed_input(line_number, &err))?,
        );
    }

    Ok((left, right))
}
