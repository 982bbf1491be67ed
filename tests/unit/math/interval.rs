//! Tests for integer range and closed interval overlap

#[cfg(test)]
mod tests {
    use puzzlekit::math::interval::{closed_intervals_intersect, int_ranges_intersect};

    // Tests symmetry and self-intersection of non-empty ranges
    // Verified by swapping the inclusive-end comparison operands
    #[test]
    fn test_int_ranges_symmetry() {
        let a = 0_i64..5;
        let b = 4_i64..10;
        assert!(int_ranges_intersect(&a, &b));
        assert!(int_ranges_intersect(&b, &a));
        assert!(int_ranges_intersect(&a, &a));
    }

    // Tests that touching half-open ranges share no integer
    #[test]
    fn test_int_ranges_adjacent_do_not_intersect() {
        assert!(!int_ranges_intersect(&(0..5), &(5..10)));
        assert!(int_ranges_intersect(&(0..6), &(5..10)));
    }

    // Tests empty ranges intersect nothing, including themselves
    // Verified by removing the empty-range guard
    #[test]
    fn test_int_ranges_empty() {
        assert!(!int_ranges_intersect(&(5..5), &(0..10)));
        assert!(!int_ranges_intersect(&(0..10), &(7..3)));
        assert!(!int_ranges_intersect(&(5..5), &(5..5)));
    }

    // Tests closed intervals overlap including shared endpoints
    #[test]
    fn test_closed_intervals_overlap() {
        assert!(closed_intervals_intersect((0.0, 2.0), (2.0, 4.0)));
        assert!(closed_intervals_intersect((2.0, 4.0), (0.0, 2.0)));
        assert!(closed_intervals_intersect((0.0, 10.0), (3.5, 4.5)));
        assert!(!closed_intervals_intersect((0.0, 1.9), (2.0, 4.0)));
    }
}
