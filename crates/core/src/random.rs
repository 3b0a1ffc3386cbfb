//! Entropy port and weighted random selection.
//!
//! The simulation never touches a global RNG: every roll goes through an
//! [`EntropySource`], so tests can substitute a seeded or scripted source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed values in `[0, 1)`.
pub trait EntropySource {
    fn next_unit(&mut self) -> f64;
}

impl<E> EntropySource for &mut E
where
    E: EntropySource + ?Sized,
{
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<E> EntropySource for Box<E>
where
    E: EntropySource + ?Sized,
{
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// [`EntropySource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandEntropy<R = ChaCha8Rng> {
    rng: R,
}

impl RandEntropy<ChaCha8Rng> {
    /// Reproducible source; the same seed always yields the same rolls.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_os() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> EntropySource for RandEntropy<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// A candidate value with its relative likelihood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighted<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub const fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Pick one item with equal probability. `None` only for an empty slice.
pub fn uniform_choice<'a, T>(items: &'a [T], rng: &mut impl EntropySource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = (rng.next_unit() * items.len() as f64).floor() as usize;
    items.get(idx.min(items.len() - 1))
}

/// Draw one value from `items`, biased by `weights`.
///
/// - With no weights the draw is uniform over `items`.
/// - Otherwise every item missing from `weights` gets weight 1. Explicit entries
///   are walked first (in order), then the implicit ones; the first entry that
///   brings the remaining roll to `<= 0` wins.
/// - If rounding leaves nothing selected, the last entry is returned.
pub fn weighted_choice<T>(
    items: &[T],
    weights: &[Weighted<T>],
    rng: &mut impl EntropySource,
) -> Option<T>
where
    T: Clone + PartialEq,
{
    if weights.is_empty() {
        return uniform_choice(items, rng).cloned();
    }

    let implicit = items
        .iter()
        .filter(|item| !weights.iter().any(|w| &w.value == *item))
        .map(|item| (item, 1.0));

    let entries: Vec<(&T, f64)> = weights
        .iter()
        .map(|w| (&w.value, w.weight))
        .chain(implicit)
        .collect();

    let total: f64 = entries.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.next_unit() * total;

    for (value, weight) in &entries {
        roll -= weight;
        if roll <= 0.0 {
            return Some((*value).clone());
        }
    }

    entries.last().map(|(value, _)| (*value).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence of rolls, cycling when exhausted.
    struct Scripted {
        rolls: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        fn new(rolls: &[f64]) -> Self {
            Self {
                rolls: rolls.to_vec(),
                next: 0,
            }
        }
    }

    impl EntropySource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let v = self.rolls[self.next % self.rolls.len()];
            self.next += 1;
            v
        }
    }

    #[test]
    fn uniform_choice_maps_roll_to_index() {
        let items = ["a", "b", "c", "d"];
        assert_eq!(uniform_choice(&items, &mut Scripted::new(&[0.0])), Some(&"a"));
        assert_eq!(uniform_choice(&items, &mut Scripted::new(&[0.49])), Some(&"b"));
        assert_eq!(uniform_choice(&items, &mut Scripted::new(&[0.99])), Some(&"d"));
    }

    #[test]
    fn uniform_choice_on_empty_slice_is_none() {
        let items: [u8; 0] = [];
        assert_eq!(uniform_choice(&items, &mut Scripted::new(&[0.5])), None);
    }

    #[test]
    fn no_weights_falls_back_to_uniform() {
        let items = ['x', 'y'];
        assert_eq!(weighted_choice(&items, &[], &mut Scripted::new(&[0.7])), Some('y'));
    }

    #[test]
    fn explicit_weights_are_walked_before_implicit_ones() {
        // Total = 2 + 1 (implicit 'b') = 3.
        let items = ['a', 'b', 'c'];
        let weights = [Weighted::new('c', 1.0), Weighted::new('a', 1.0)];

        // 0.2 * 3 = 0.6 -> first explicit entry ('c').
        assert_eq!(weighted_choice(&items, &weights, &mut Scripted::new(&[0.2])), Some('c'));
        // 0.5 * 3 = 1.5 -> second explicit entry ('a').
        assert_eq!(weighted_choice(&items, &weights, &mut Scripted::new(&[0.5])), Some('a'));
        // 0.9 * 3 = 2.7 -> implicit weight-1 entry ('b').
        assert_eq!(weighted_choice(&items, &weights, &mut Scripted::new(&[0.9])), Some('b'));
    }

    #[test]
    fn single_full_weight_is_deterministic() {
        let items = ["common", "rare", "epic"];
        let weights = [
            Weighted::new("common", 100.0),
            Weighted::new("rare", 0.0),
            Weighted::new("epic", 0.0),
        ];
        let mut rng = RandEntropy::seeded(7);
        for _ in 0..1_000 {
            assert_eq!(weighted_choice(&items, &weights, &mut rng), Some("common"));
        }
    }

    #[test]
    fn rounding_leftover_returns_last_entry() {
        // (0.1 + 0.2) - 0.1 - 0.2 leaves a tiny positive remainder.
        let items = [1, 2];
        let weights = [Weighted::new(1, 0.1), Weighted::new(2, 0.2)];
        assert_eq!(weighted_choice(&items, &weights, &mut Scripted::new(&[1.0])), Some(2));
    }

    #[test]
    fn draws_converge_to_configured_proportions() {
        let items = ["common", "uncommon", "rare"];
        let weights = [
            Weighted::new("common", 60.0),
            Weighted::new("uncommon", 30.0),
            Weighted::new("rare", 10.0),
        ];
        let mut rng = RandEntropy::seeded(42);
        let draws = 100_000;
        let mut counts = [0usize; 3];
        for _ in 0..draws {
            let picked = weighted_choice(&items, &weights, &mut rng).unwrap();
            let idx = items.iter().position(|i| *i == picked).unwrap();
            counts[idx] += 1;
        }

        for (count, expected) in counts.iter().zip([0.6, 0.3, 0.1]) {
            let observed = *count as f64 / draws as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn seeded_sources_replay_identically() {
        let mut a = RandEntropy::seeded(99);
        let mut b = RandEntropy::seeded(99);
        for _ in 0..32 {
            let (x, y) = (a.next_unit(), b.next_unit());
            assert_eq!(x, y);
            assert!((0.0..1.0).contains(&x));
        }
    }
}
