//! Unbiased shuffling
//!
//! Fisher-Yates (Durstenfeld) backward pass. The random source is a
//! parameter so callers can seed it; production passes `thread_rng()`.

use rand::Rng;

/// Shuffle `items` in place
///
/// For `i` from `len - 1` down to `1`, swap element `i` with a uniformly
/// chosen element in `[0, i]`. Every permutation is equally likely given a
/// uniform source.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`, leaving the input untouched
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();
        let output = shuffled(&input, &mut rng);

        assert_eq!(output.len(), input.len());
        let mut sorted = output.clone();
        sorted.sort();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_shuffle_keeps_duplicates() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec!["a", "a", "b", "c", "c", "c"];
        let mut output = shuffled(&input, &mut rng);
        output.sort();
        assert_eq!(output, vec!["a", "a", "b", "c", "c", "c"]);
    }

    #[test]
    fn test_shuffle_seeded_is_deterministic() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffled(&input, &mut StdRng::seed_from_u64(42));
        let b = shuffled(&input, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty: Vec<u8> = Vec::new();
        assert!(shuffled(&empty, &mut rng).is_empty());
        assert_eq!(shuffled(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn test_shuffle_reaches_every_ordering() {
        // 3 elements -> 6 orderings, each should show up with a fair share
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..6000 {
            *counts.entry(shuffled(&[1, 2, 3], &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1200).contains(count), "skewed count {}", count);
        }
    }
}
