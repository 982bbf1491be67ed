//! Iterative Cartesian-power enumeration over a finite alphabet
//!
//! Enumerates every fixed-length sequence drawn from an alphabet with
//! repetition, using an index odometer rather than recursion so large
//! sequence lengths cannot exhaust the stack. The first position varies
//! slowest, cycling through the alphabet in slice order.

/// Iterator over all sequences of a fixed length drawn from an alphabet
///
/// Yields `alphabet.len().pow(length)` sequences, each an independent
/// `Vec<T>`. A zero length yields exactly one empty sequence; an empty
/// alphabet with a nonzero length yields nothing.
#[derive(Debug, Clone)]
pub struct CartesianPower<'a, T> {
    alphabet: &'a [T],
    indices: Vec<usize>,
    exhausted: bool,
}

/// Enumerate every `length`-element sequence over `alphabet` with repetition
pub fn cartesian_power<T>(alphabet: &[T], length: usize) -> CartesianPower<'_, T> {
    CartesianPower {
        alphabet,
        indices: vec![0; length],
        exhausted: alphabet.is_empty() && length > 0,
    }
}

/// Collect the full Cartesian power into a vector of sequences
pub fn sequences<T: Clone>(alphabet: &[T], length: usize) -> Vec<Vec<T>> {
    cartesian_power(alphabet, length).collect()
}

impl<T: Clone> Iterator for CartesianPower<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let sequence = self
            .indices
            .iter()
            .filter_map(|&index| self.alphabet.get(index).cloned())
            .collect();

        // Odometer increment from the rightmost position; full carry-out
        // means every sequence has been produced
        self.exhausted = true;
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < self.alphabet.len() {
                self.exhausted = false;
                break;
            }
            *index = 0;
        }

        Some(sequence)
    }
}
