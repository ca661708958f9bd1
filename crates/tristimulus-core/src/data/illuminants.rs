//! Standard illuminant spectral power distributions

use std::sync::OnceLock;

use crate::spectral::{SpectralPowerDistribution, SpectralShape};

/// Name of the shipped D50 dataset
pub const D50_NAME: &str = "D50";

/// CIE Standard Illuminant D50 relative spectral power distribution,
/// 5 nm steps from 360 nm to 830 nm, normalized to 100 at 560 nm.
///
/// Values are the published CIE 15 table (~5003 K correlated colour
/// temperature); the 5 nm entries are linear midpoints of the 10 nm ones,
/// as in the standard.
const D50_DATA: [f64; 95] = [
    23.94, // 360 nm
    25.45, 26.96, 25.72, 24.49, 27.18, 29.87, 39.59, 49.31, 52.91, 56.51, // 410 nm
    58.27, 60.03, 58.93, 57.82, 66.32, 74.82, 81.04, 87.25, 88.93, 90.61, // 460 nm
    90.99, 91.37, 93.24, 95.11, 93.54, 91.96, 93.84, 95.72, 96.17, 96.61, // 510 nm
    96.87, 97.13, 99.61, 102.10, 101.43, 100.75, 101.54, 102.32, 101.16, 100.00, // 560 nm
    98.87, 97.74, 98.33, 98.92, 96.21, 93.50, 95.59, 97.69, 98.48, 99.27, // 610 nm
    99.16, 99.04, 97.38, 95.72, 97.29, 98.86, 97.26, 95.67, 96.93, 98.19, // 660 nm
    100.60, 103.00, 101.07, 99.13, 93.26, 87.38, 89.49, 91.60, 92.25, 92.89, // 710 nm
    84.87, 76.85, 81.68, 86.51, 89.55, 92.58, 85.40, 78.23, 67.96, 57.69, // 760 nm
    70.31, 82.92, 80.60, 78.27, 78.91, 79.55, 76.48, 73.40, 68.66, 63.92, // 810 nm
    67.35, 70.78, 72.61, 74.44, // 830 nm
];

/// The CIE D50 relative spectral power distribution, built lazily on
/// first use
pub fn d50() -> &'static SpectralPowerDistribution {
    static D50: OnceLock<SpectralPowerDistribution> = OnceLock::new();
    D50.get_or_init(|| {
        let wavelengths = (0..D50_DATA.len())
            .map(|i| 360.0 + 5.0 * i as f64)
            .collect();
        SpectralPowerDistribution::new(D50_NAME, wavelengths, D50_DATA.to_vec())
            .unwrap_or_else(|_| unreachable!("embedded D50 table is valid"))
    })
}

/// Look up a shipped illuminant by its dataset name
pub fn illuminant(name: &str) -> Option<&'static SpectralPowerDistribution> {
    match name {
        D50_NAME => Some(d50()),
        _ => None,
    }
}

/// CIE Standard Illuminant A evaluated on `shape`.
///
/// A is defined analytically as a Planckian radiator (~2856 K on the 1931
/// temperature scale), relative to 100 at 560 nm:
///
/// `S_A(λ) = 100 (560 / λ)^5 (e^(1.435e7 / (2848 · 560)) - 1)
///           / (e^(1.435e7 / (2848 λ)) - 1)`
pub fn illuminant_a(shape: SpectralShape) -> SpectralPowerDistribution {
    let wavelengths = shape.wavelengths();
    let values = wavelengths.iter().map(|&wl| planck_a(wl)).collect();
    SpectralPowerDistribution::new("A", wavelengths, values)
        .unwrap_or_else(|_| unreachable!("shape grids are valid spectral data"))
}

fn planck_a(wl: f64) -> f64 {
    // c2 / T on the 1931 temperature scale (c2 = 1.435e7 nm K, T = 2848 K)
    let c = 1.435e7_f64 / 2848.0;
    100.0 * (560.0 / wl).powi(5) * ((c / 560.0).exp() - 1.0) / ((c / wl).exp() - 1.0)
}
