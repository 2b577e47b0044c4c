//! Input data for tests and benchmarks.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Uniformly distributed values.
    Random,
    /// A sorted uniform draw with a fraction of the elements swapped a bounded distance away.
    MostlySorted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    pub low: f32,
    pub high: f32,
    /// Fraction of the length that gets swapped in mostly sorted inputs.
    pub displace_fraction: f32,
    /// Maximum swap distance, as a fraction of the length.
    pub offset_fraction: f32,
    pub seed: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            low: -16.0,
            high: 16.0,
            displace_fraction: 0.10,
            offset_fraction: 0.15,
            seed: 1234,
        }
    }
}

pub fn generate<R: Rng>(kind: InputKind, len: usize, config: &InputConfig, rng: &mut R) -> Vec<f32> {
    let mut values = (0..len)
        .map(|_| rng.gen_range(config.low..config.high))
        .collect::<Vec<f32>>();

    if kind == InputKind::MostlySorted && len > 0 {
        values.sort_unstable_by(f32::total_cmp);
        displace(&mut values, config, rng);
    }
    values
}

fn displace<R: Rng>(values: &mut [f32], config: &InputConfig, rng: &mut R) {
    let len = values.len();
    let range = (len as f32 * config.offset_fraction) as i64;
    let swaps = (len as f32 * config.displace_fraction) as usize;
    let last = len as i64 - 1;

    for _ in 0..swaps {
        let i = rng.gen_range(0..len);
        let offset = rng.gen_range(-range..=range);
        let k = (i as i64 + offset).clamp(0, last) as usize;
        values.swap(i, k);
    }
}

/// Generate `trials` independent vectors of length `len` from a generator seeded with `config.seed`.
pub fn generate_trials(kind: InputKind, trials: usize, len: usize, config: &InputConfig) -> Vec<Vec<f32>> {
    debug!("generating {trials} x {len} {kind:?} inputs");
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..trials).map(|_| generate(kind, len, config, &mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::check_sorted;

    #[test]
    fn test_random_in_range() {
        let config = InputConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let values = generate(InputKind::Random, 10_000, &config, &mut rng);
        assert_eq!(values.len(), 10_000);
        assert!(values.iter().all(|v| (-16.0..16.0).contains(v)));
        assert!(check_sorted(&values).is_err());
    }

    #[test]
    fn test_mostly_sorted() {
        let config = InputConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let values = generate(InputKind::MostlySorted, 10_000, &config, &mut rng);
        assert!(check_sorted(&values).is_err());

        let ascending = values.windows(2).filter(|w| w[0] <= w[1]).count();
        assert!(ascending > values.len() / 2, "only {ascending} ascending pairs");
    }

    #[test]
    fn test_no_displacement_is_sorted() {
        let config = InputConfig {
            displace_fraction: 0.0,
            ..InputConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let values = generate(InputKind::MostlySorted, 1000, &config, &mut rng);
        assert!(check_sorted(&values).is_ok());
    }

    #[test]
    fn test_trials_deterministic() {
        let config = InputConfig::default();
        let a = generate_trials(InputKind::MostlySorted, 3, 257, &config);
        let b = generate_trials(InputKind::MostlySorted, 3, 257, &config);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_ne!(a[0], a[1]);
    }

    #[test]
    fn test_tiny_lengths() {
        let config = InputConfig::default();
        assert!(generate_trials(InputKind::MostlySorted, 2, 0, &config).iter().all(Vec::is_empty));
        assert_eq!(generate_trials(InputKind::MostlySorted, 1, 1, &config)[0].len(), 1);
    }
}
