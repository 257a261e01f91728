#![allow(dead_code)]

use histog::{Distribution, DistributionConfig};
use rand::SeedableRng;

pub const SEED: u64 = 0xC0FFEE;

/// Draws `size` samples from `sampler` with a fixed seed.
pub fn make_points<S: rand_distr::Distribution<f64>>(sampler: S, size: usize) -> Vec<f64> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(SEED);
    sampler.sample_iter(&mut rng).take(size).collect()
}

pub fn fill(config: DistributionConfig, points: &[f64]) -> Distribution {
    let mut d = Distribution::new(config).expect("config should be valid");
    d.update_all(points.iter().copied())
        .expect("samples should be finite");
    d
}

/// Fraction of `sorted` strictly below `value`.
pub fn empirical_rank(sorted: &[f64], value: f64) -> f64 {
    sorted.partition_point(|v| *v < value) as f64 / sorted.len() as f64
}

pub fn sorted(points: &[f64]) -> Vec<f64> {
    let mut sorted = points.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
