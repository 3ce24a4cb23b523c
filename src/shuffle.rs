//! Fisher-Yates shuffle.

use rand::Rng;

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// Walks `i` from the last index down to 1 and swaps element `i` with a
/// uniformly chosen index in `[0, i]`. Slices of length 0 or 1 are untouched
/// and consume no randomness.
///
/// ```
/// use hilors::shuffle::fisher_yates;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut items = [1, 2, 3, 4, 5];
/// fisher_yates(&mut items, &mut rng);
///
/// let mut sorted = items;
/// sorted.sort_unstable();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn short_slices_are_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut rng);

        let mut single = [9];
        fisher_yates(&mut single, &mut rng);
        assert_eq!(single, [9]);

        // Nothing was drawn from the generator.
        let mut fresh = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(rng.random::<u64>(), fresh.random::<u64>());
    }

    #[test]
    fn every_order_is_equally_likely() {
        const TRIALS: u32 = 60_000;

        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        // Indexed by `first * 3 + second`; six slots are reachable.
        let mut counts = [0u32; 9];
        for _ in 0..TRIALS {
            let mut items = [0usize, 1, 2];
            fisher_yates(&mut items, &mut rng);
            counts[items[0] * 3 + items[1]] += 1;
        }

        for (slot, &count) in counts.iter().enumerate() {
            if matches!(slot, 1 | 2 | 3 | 5 | 6 | 7) {
                // 10_000 expected per order.
                assert!((9_000..=11_000).contains(&count), "order {slot}: {count}");
            } else {
                assert_eq!(count, 0);
            }
        }
    }

    #[test]
    fn same_seed_same_order() {
        let mut a: alloc::vec::Vec<u8> = (0..52).collect();
        let mut b = a.clone();
        fisher_yates(&mut a, &mut ChaCha8Rng::seed_from_u64(42));
        fisher_yates(&mut b, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
