//! Tests for coordinate step arithmetic and distances

#[cfg(test)]
mod tests {
    use puzzlekit::spatial::Direction;
    use puzzlekit::spatial::coordinate::{manhattan_distance, next_position};

    // Tests unit steps in all four directions
    // Verified by swapping the row and column components
    #[test]
    fn test_next_position_steps() {
        assert_eq!(next_position([3, 3], Direction::Up), [2, 3]);
        assert_eq!(next_position([3, 3], Direction::Down), [4, 3]);
        assert_eq!(next_position([3, 3], Direction::Left), [3, 2]);
        assert_eq!(next_position([3, 3], Direction::Right), [3, 4]);
    }

    // Tests stepping is unchecked and may leave any grid
    #[test]
    fn test_next_position_is_unchecked() {
        assert_eq!(next_position([0, 1], Direction::Right), [0, 2]);
        assert_eq!(next_position([0, 0], Direction::Up), [-1, 0]);
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance([0, 0], [3, 4]), 7);
        assert_eq!(manhattan_distance([3, 4], [0, 0]), 7);
        assert_eq!(manhattan_distance([-2, 5], [-2, 5]), 0);
        assert_eq!(manhattan_distance([-1, -1], [1, 1]), 4);
    }
}
