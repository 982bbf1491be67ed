//! Lazy enumeration of unordered element pairs

/// All index-ordered pairs `(items[i], items[j])` with `i < j`
///
/// Yields `n * (n - 1) / 2` pairs for `n` items, lazily and in index
/// order.
pub fn unique_pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items.iter().enumerate().flat_map(move |(index, first)| {
        items
            .iter()
            .skip(index + 1)
            .map(move |second| (first, second))
    })
}
