//! Random rig orientations

use nalgebra::{Quaternion, UnitQuaternion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw a random rotation.
///
/// `w, x, y, z` are drawn independently from `[-1, 1]` and the 4-vector is
/// normalized. Without a rejection step this is not exactly uniform on the
/// unit hypersphere (the cube's corners are over-represented); the bias is
/// kept so datasets stay comparable with earlier runs.
pub fn sample_uniform_quaternion<R: Rng + ?Sized>(rng: &mut R) -> UnitQuaternion<f64> {
    loop {
        let w: f64 = rng.gen_range(-1.0..=1.0);
        let x: f64 = rng.gen_range(-1.0..=1.0);
        let y: f64 = rng.gen_range(-1.0..=1.0);
        let z: f64 = rng.gen_range(-1.0..=1.0);
        let q = Quaternion::new(w, x, y, z);
        // only the exact origin cannot be normalized
        if q.norm() > 0.0 {
            return UnitQuaternion::from_quaternion(q);
        }
    }
}

/// Running composition of sampled deltas: `o_i = o_{i-1} * delta_i`, `o_{-1} = seed`.
///
/// Entry `i` is the rig orientation after iteration `i`.
pub fn orientation_sequence(
    seed: UnitQuaternion<f64>,
    deltas: &[UnitQuaternion<f64>],
) -> Vec<UnitQuaternion<f64>> {
    deltas
        .iter()
        .scan(seed, |current, delta| {
            *current = *current * delta;
            Some(*current)
        })
        .collect()
}

/// Seedable source of rig orientation deltas
#[derive(Debug, Clone)]
pub struct OrientationSampler {
    rng: StdRng,
}

impl OrientationSampler {
    /// Sampler with a fixed seed, for reproducible sessions
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed when given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Next orientation delta
    pub fn sample(&mut self) -> UnitQuaternion<f64> {
        sample_uniform_quaternion(&mut self.rng)
    }

    /// The next `count` deltas, in draw order
    pub fn pre_sample(&mut self, count: usize) -> Vec<UnitQuaternion<f64>> {
        (0..count).map(|_| self.sample()).collect()
    }
}
