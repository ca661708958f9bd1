//! Test spectra generation
//!
//! Seeded generators so failures reproduce across runs.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tristimulus_core::{SpectralPowerDistribution, SpectralShape};

/// A random positive quadratic sampled on `shape`.
///
/// Quadratics are reconstructed exactly by both the degree-3/4 Lagrange
/// windows of the weighting-factor tables and by Sprague interpolation,
/// so integrals over them agree to floating-point error.
pub fn random_quadratic_spd(seed: u64, shape: SpectralShape) -> SpectralPowerDistribution {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    // coefficient ranges keep the polynomial positive over [0, 1]
    let a = rng.gen_range(0.5..0.9);
    let b = rng.gen_range(-0.2..0.2);
    let c = rng.gen_range(-0.2..0.2);
    let span = shape.end() - shape.start();
    let values: Vec<f64> = shape
        .wavelengths()
        .iter()
        .map(|&wl| {
            let t = (wl - shape.start()) / span;
            a + b * t + c * t * t
        })
        .collect();
    SpectralPowerDistribution::new(
        format!("Quadratic Sample {seed}"),
        shape.wavelengths(),
        values,
    )
    .unwrap()
}

/// A smooth Gaussian reflectance bump sampled on `shape`, with seeded
/// centre and width
pub fn smooth_bump_spd(seed: u64, shape: SpectralShape) -> SpectralPowerDistribution {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centre = rng.gen_range(480.0..650.0);
    let width = rng.gen_range(60.0..120.0);
    let height = rng.gen_range(0.3..0.9);
    let values: Vec<f64> = shape
        .wavelengths()
        .iter()
        .map(|&wl| {
            let d = (wl - centre) / width;
            0.05 + height * (-d * d).exp()
        })
        .collect();
    SpectralPowerDistribution::new(
        format!("Bump Sample {seed}"),
        shape.wavelengths(),
        values,
    )
    .unwrap()
}
