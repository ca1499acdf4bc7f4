use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_SIZE: usize = 15;
const WARM_UP_MS: u64 = 100;
const MEASURE_MS_SMALL: u64 = 200;
const MEASURE_MS_LARGE: u64 = 600;
const MEASURE_MS_XL: u64 = 1200;
const SMALL_LEN_MAX: usize = 16_384;
const LARGE_LEN_MAX: usize = 65_536;
const RNG_SEED: u64 = 0x5EED_2026;

/// Picks sampling mode and measurement time from the sequence length under test.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if len <= SMALL_LEN_MAX {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(MEASURE_MS_SMALL));
    } else if len <= LARGE_LEN_MAX {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_XL));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` values drawn uniformly from `-bound..bound`.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, bound: i64) -> Vec<i64> {
    let bound = bound.max(1);
    (0..len).map(|_| rng.random_range(-bound..bound)).collect()
}

/// Ascending values with roughly 1% of positions swapped at random.
pub fn nearly_sorted_values<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    let mut data: Vec<i64> = (0..len as i64).collect();
    if len < 2 {
        return data;
    }
    for _ in 0..(len / 100).max(1) {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

/// A raw relative index for a sequence of `len`: anywhere in `-(len+1)..=len+1`,
/// so negative, in-range and past-the-end positions all occur.
pub fn random_relative_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> isize {
    let span = i64::try_from(len).unwrap_or(i64::MAX / 2).saturating_add(1);
    let raw = rng.random_range(-span..=span);
    isize::try_from(raw).unwrap_or(if raw < 0 { isize::MIN } else { isize::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_indices_cover_both_signs_and_overflow() {
        let mut rng = default_rng();
        let samples: Vec<isize> = (0..2_000).map(|_| random_relative_index(&mut rng, 5)).collect();
        assert!(samples.iter().all(|&i| (-6..=6).contains(&i)));
        assert!(samples.iter().any(|&i| i < 0));
        assert!(samples.iter().any(|&i| i >= 5));
    }

    #[test]
    fn nearly_sorted_is_a_permutation() {
        let mut rng = default_rng();
        let mut data = nearly_sorted_values(&mut rng, 1_000);
        data.sort_unstable();
        assert_eq!(data, (0..1_000).collect::<Vec<i64>>());
        assert!(nearly_sorted_values(&mut rng, 0).is_empty());
    }
}
