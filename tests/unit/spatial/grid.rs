//! Tests for character grid construction, access disciplines, and traversal

#[cfg(test)]
mod tests {
    use puzzlekit::PuzzleError;
    use puzzlekit::spatial::CharGrid;

    fn sample_grid() -> CharGrid {
        CharGrid::from_lines(&["ab", "cd"]).unwrap()
    }

    // Tests dimensions and strict access on a 2x2 grid
    #[test]
    fn test_construction_and_get() {
        let grid = sample_grid();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(0, 1).unwrap(), 'b');
        assert_eq!(grid.get(1, 0).unwrap(), 'c');
    }

    // Tests the strict accessor reports the offending position
    // Verified by clamping instead of erroring
    #[test]
    fn test_get_out_of_bounds_is_an_error() {
        let grid = sample_grid();

        match grid.get(0, 2) {
            Err(PuzzleError::OutOfBounds {
                position,
                dimensions,
            }) => {
                assert_eq!(position, [0, 2]);
                assert_eq!(dimensions, (2, 2));
            }
            other => unreachable!("Expected OutOfBounds, got {other:?}"),
        }
        assert!(grid.get(-1, 0).is_err());
    }

    // Tests the speculative accessor agrees with the strict one in bounds
    #[test]
    fn test_get_opt_matches_get_in_bounds() {
        let grid = sample_grid();

        for pos in grid.coordinates().collect::<Vec<_>>() {
            assert_eq!(grid.get_opt(pos), grid.get(pos[0], pos[1]).ok());
        }
        assert_eq!(grid.get_opt([0, 2]), None);
        assert_eq!(grid.get_opt([-1, 0]), None);
    }

    #[test]
    fn test_is_in_bound() {
        let grid = sample_grid();

        assert!(grid.is_in_bound([0, 0]));
        assert!(grid.is_in_bound([1, 1]));
        assert!(!grid.is_in_bound([0, 2]));
        assert!(!grid.is_in_bound([2, 0]));
        assert!(!grid.is_in_bound([-1, 0]));
    }

    // Tests digit parsing distinguishes non-digits from out-of-bounds
    #[test]
    fn test_digit_parsing() {
        let grid = CharGrid::from_lines(&["1a", "90"]).unwrap();

        assert_eq!(grid.digit(0, 0), Some(1));
        assert_eq!(grid.digit(1, 0), Some(9));
        assert_eq!(grid.digit(0, 1), None);
        assert_eq!(grid.digit(5, 5), None);
        assert_eq!(grid.digit_at([1, 1]), Some(0));
    }

    // Tests set replaces exactly the target cell
    // Verified by rebuilding the whole row on write
    #[test]
    fn test_set_touches_one_cell() {
        let mut grid = sample_grid();

        grid.set(0, 1, 'x').unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), 'a');
        assert_eq!(grid.get(0, 1).unwrap(), 'x');
        assert_eq!(grid.get(1, 0).unwrap(), 'c');
        assert_eq!(grid.get(1, 1).unwrap(), 'd');

        assert!(grid.set(2, 0, 'y').is_err());
    }

    // Tests row-major coordinate order and restartability
    // Verified by iterating columns before rows
    #[test]
    fn test_coordinates_row_major() {
        let grid = CharGrid::from_lines(&["abc", "def"]).unwrap();

        let coords: Vec<_> = grid.coordinates().collect();
        assert_eq!(
            coords,
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );

        // A second traversal starts over from the first coordinate
        assert_eq!(grid.coordinates().count(), grid.rows() * grid.cols());
    }

    // Tests double swap restores the grid and out-of-bounds swap is a no-op
    // Verified by writing the first cell before checking the second
    #[test]
    fn test_swap_all_or_nothing() {
        let mut grid = sample_grid();

        grid.swap([0, 0], [1, 1]);
        assert_eq!(grid.get(0, 0).unwrap(), 'd');
        assert_eq!(grid.get(1, 1).unwrap(), 'a');

        grid.swap([0, 0], [1, 1]);
        assert_eq!(grid, sample_grid());

        grid.swap([0, 0], [5, 5]);
        assert_eq!(grid, sample_grid());
        grid.swap([-1, 0], [0, 0]);
        assert_eq!(grid, sample_grid());
    }

    // Tests ragged input is rejected with the offending row
    #[test]
    fn test_ragged_rows_are_rejected() {
        match CharGrid::from_lines(&["abc", "de"]) {
            Err(PuzzleError::RaggedRows {
                row,
                expected,
                actual,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => unreachable!("Expected RaggedRows, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_grid() {
        let grid = CharGrid::from_lines::<&str>(&[]).unwrap();

        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert!(!grid.is_in_bound([0, 0]));
        assert_eq!(grid.coordinates().count(), 0);
    }

    // Tests the display form spaces cells and ends rows with newlines
    #[test]
    fn test_display_spaces_cells() {
        let grid = sample_grid();
        assert_eq!(grid.to_string(), "a b\nc d\n");
    }
}
