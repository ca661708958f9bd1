//! ASTM E2022-11 coefficient and weighting-factor tables

use crate::error::{Error, Result};
use crate::math::lagrange_basis;
use crate::spectral::shape::WAVELENGTH_EPSILON;
use crate::spectral::{ColorMatchingFunctions, SpectralPowerDistribution, SpectralShape};
use crate::tristimulus::context::{IntervalKind, TristimulusContext};

/// Lagrange coefficient rows: one row per interior fine-grained point,
/// 4 coefficients for inner intervals, 3 for boundary intervals
pub type CoefficientTable = Vec<Vec<f64>>;

/// Weighting-factor rows: one `[X, Y, Z]` row per macro-interval wavelength
pub type WeightingTable = Vec<[f64; 3]>;

/// Lagrange coefficients for an `interval` nm measurement interval.
///
/// Evaluation points are `n / interval` for `n = 1 .. interval - 1`; inner
/// intervals shift them by +1 to sit inside the centre of a 4-node window.
pub(crate) fn compute_lagrange_coefficients(
    interval: u32,
    kind: IntervalKind,
) -> CoefficientTable {
    let (shift, nodes) = match kind {
        IntervalKind::Inner => (1.0, 4),
        IntervalKind::Boundary => (0.0, 3),
    };
    (1..interval)
        .map(|n| lagrange_basis(shift + n as f64 / interval as f64, nodes))
        .collect()
}

/// Build the ASTM E2022-11 tristimulus weighting-factor table.
///
/// `cmfs` and `illuminant` must be 1 nm data; `shape.interval()` is the
/// macro measurement interval. See
/// [`TristimulusContext::tristimulus_weighting_factors`] for the caller
/// surface and caching.
pub(crate) fn compute_weighting_factors(
    ctx: &TristimulusContext,
    cmfs: &ColorMatchingFunctions,
    illuminant: &SpectralPowerDistribution,
    shape: &SpectralShape,
) -> Result<WeightingTable> {
    let cmfs_interval = cmfs.shape().interval();
    if (cmfs_interval - 1.0).abs() > WAVELENGTH_EPSILON {
        return Err(Error::IntervalMismatch {
            name: cmfs.name().to_string(),
            interval: cmfs_interval,
        });
    }
    let illuminant_interval = illuminant.shape().interval();
    if (illuminant_interval - 1.0).abs() > WAVELENGTH_EPSILON {
        return Err(Error::IntervalMismatch {
            name: illuminant.name().to_string(),
            interval: illuminant_interval,
        });
    }

    let macro_interval = shape.interval();
    let h = macro_interval.round();
    if (macro_interval - h).abs() > WAVELENGTH_EPSILON || h < 2.0 {
        return Err(Error::InvalidData(format!(
            "weighting factors need an integral macro interval of at least 2 nm, \
             got {macro_interval}"
        )));
    }
    let h = h as usize;

    // align the illuminant onto the CMFS grid; lossless when the grids
    // already agree
    let aligned;
    let illuminant_values: &[f64] = if illuminant.shape() == cmfs.shape() {
        illuminant.values()
    } else {
        aligned = illuminant.zeros(&cmfs.shape());
        aligned.values()
    };
    let s = illuminant_values;
    let y = cmfs.values();
    let w_c = y.len();

    // macro downsample: the base contribution of each measured wavelength
    let mut w: WeightingTable = (0..w_c)
        .step_by(h)
        .map(|j| {
            let row = y[j];
            [s[j] * row[0], s[j] * row[1], s[j] * row[2]]
        })
        .collect();
    let i_c = w.len();
    if i_c < 4 {
        return Err(Error::NotEnoughSamples {
            required: 4,
            actual: i_c,
        });
    }
    let i_cm = i_c - 1;

    let boundary = ctx.lagrange_coefficients(h as u32, IntervalKind::Boundary)?;
    let inner = ctx.lagrange_coefficients(h as u32, IntervalKind::Inner)?;

    // interior fine points per interval
    let r_c = inner.len();
    // first interpolated wavelength of the last complete interval
    let w_lif = w_c - (w_c - 1) % h - 1 - r_c;

    for i in 0..3 {
        // first interval: fine points distribute into the first 3 rows
        for (j, coeffs) in boundary.iter().enumerate() {
            let product = s[j + 1] * y[j + 1][i];
            for (k, &c) in coeffs.iter().enumerate() {
                w[k][i] += c * product;
            }
        }

        // last interval: symmetric, boundary rows in reverse order
        for j in 0..r_c {
            let product = s[j + w_lif] * y[j + w_lif][i];
            for (off, &c) in boundary[r_c - 1 - j].iter().enumerate() {
                w[i_cm - off][i] += c * product;
            }
        }

        // intermediate intervals: each fine point spreads over the 4
        // neighbouring rows through the degree-4 coefficients
        for j in 0..i_c - 3 {
            for (k, coeffs) in inner.iter().enumerate() {
                let w_i = h * (j + 1) + 1 + k;
                let product = s[w_i] * y[w_i][i];
                for (off, &c) in coeffs.iter().enumerate() {
                    w[j + off][i] += c * product;
                }
            }
        }

        // ragged tail beyond the last complete interval sums in unweighted
        for j in (w_c - (w_c - 1) % h)..w_c {
            w[i_cm][i] += s[j] * y[j][i];
        }
    }

    // fix the table to the direct-integration normalization convention
    let y_sum: f64 = w.iter().map(|row| row[1]).sum();
    if y_sum <= 0.0 {
        return Err(Error::InvalidData(
            "weighting factors are degenerate: Y column sums to zero".into(),
        ));
    }
    let factor = 100.0 / y_sum;
    for row in &mut w {
        for v in row {
            *v *= factor;
        }
    }

    Ok(w)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_inner_coefficients_interval_10() {
        let table = compute_lagrange_coefficients(10, IntervalKind::Inner);
        assert_eq!(table.len(), 9);
        assert!(table.iter().all(|row| row.len() == 4));

        let expected_first = [-0.0285, 0.9405, 0.1045, -0.0165];
        for (c, e) in table[0].iter().zip(expected_first) {
            assert!((c - e).abs() < EPSILON, "{c} vs {e}");
        }
        // centre row is symmetric
        let expected_centre = [-0.0625, 0.5625, 0.5625, -0.0625];
        for (c, e) in table[4].iter().zip(expected_centre) {
            assert!((c - e).abs() < EPSILON);
        }
    }

    #[test]
    fn test_boundary_coefficients_interval_10() {
        let table = compute_lagrange_coefficients(10, IntervalKind::Boundary);
        assert_eq!(table.len(), 9);
        assert!(table.iter().all(|row| row.len() == 3));

        let expected_first = [0.855, 0.19, -0.045];
        for (c, e) in table[0].iter().zip(expected_first) {
            assert!((c - e).abs() < EPSILON);
        }
    }

    #[test]
    fn test_coefficient_rows_partition_unity() {
        for kind in [IntervalKind::Inner, IntervalKind::Boundary] {
            for interval in [2, 5, 10, 20] {
                let table = compute_lagrange_coefficients(interval, kind);
                assert_eq!(table.len(), interval as usize - 1);
                for row in &table {
                    let sum: f64 = row.iter().sum();
                    assert!((sum - 1.0).abs() < 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_lagrange_memoization() {
        let ctx = TristimulusContext::new();
        let a = ctx.lagrange_coefficients(10, IntervalKind::Inner).unwrap();
        let b = ctx.lagrange_coefficients(10, IntervalKind::Inner).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let c = ctx.lagrange_coefficients(10, IntervalKind::Boundary).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
    }

    /// Smooth synthetic 1 nm observer over 360-460 nm
    fn synthetic_cmfs(interval: f64) -> ColorMatchingFunctions {
        let shape = SpectralShape::new(360.0, 460.0, interval).unwrap();
        let rows: Vec<[f64; 3]> = shape
            .wavelengths()
            .iter()
            .map(|&wl| {
                let t = (wl - 360.0) / 100.0;
                [
                    (-((t - 0.3) * (t - 0.3)) / 0.02).exp(),
                    (-((t - 0.5) * (t - 0.5)) / 0.05).exp(),
                    (-((t - 0.7) * (t - 0.7)) / 0.03).exp(),
                ]
            })
            .collect();
        ColorMatchingFunctions::new("Synthetic Observer", shape.wavelengths(), rows).unwrap()
    }

    #[test]
    fn test_weighting_y_column_normalization() {
        let ctx = TristimulusContext::new();
        let cmfs = synthetic_cmfs(1.0);
        let illuminant = SpectralPowerDistribution::ones(cmfs.shape());
        let shape = SpectralShape::new(360.0, 460.0, 10.0).unwrap();

        let table = ctx
            .tristimulus_weighting_factors(&cmfs, &illuminant, &shape)
            .unwrap();
        assert_eq!(table.len(), 11);
        let y_sum: f64 = table.iter().map(|row| row[1]).sum();
        assert!((y_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_weighting_memoization() {
        let ctx = TristimulusContext::new();
        let cmfs = synthetic_cmfs(1.0);
        let illuminant = SpectralPowerDistribution::ones(cmfs.shape());
        let shape = SpectralShape::new(360.0, 460.0, 10.0).unwrap();

        let a = ctx
            .tristimulus_weighting_factors(&cmfs, &illuminant, &shape)
            .unwrap();
        let b = ctx
            .tristimulus_weighting_factors(&cmfs, &illuminant, &shape)
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_interval_mismatch() {
        let ctx = TristimulusContext::new();
        let shape = SpectralShape::new(360.0, 460.0, 10.0).unwrap();

        let coarse = synthetic_cmfs(5.0);
        let illuminant = SpectralPowerDistribution::ones(coarse.shape());
        assert!(matches!(
            ctx.tristimulus_weighting_factors(&coarse, &illuminant, &shape),
            Err(Error::IntervalMismatch { name, .. }) if name == "Synthetic Observer"
        ));

        let fine = synthetic_cmfs(1.0);
        let coarse_illuminant =
            SpectralPowerDistribution::ones(SpectralShape::new(360.0, 460.0, 5.0).unwrap());
        assert!(matches!(
            ctx.tristimulus_weighting_factors(&fine, &coarse_illuminant, &shape),
            Err(Error::IntervalMismatch { name, .. }) if name == "1 Constant"
        ));
    }

    #[test]
    fn test_non_integral_macro_interval_rejected() {
        let ctx = TristimulusContext::new();
        let cmfs = synthetic_cmfs(1.0);
        let illuminant = SpectralPowerDistribution::ones(cmfs.shape());
        let shape = SpectralShape::new(360.0, 460.0, 2.5).unwrap();
        assert!(matches!(
            ctx.tristimulus_weighting_factors(&cmfs, &illuminant, &shape),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_ragged_tail_handled() {
        // 360-455 is not divisible by 10: the trailing wavelengths sum
        // into the last row unweighted
        let ctx = TristimulusContext::new();
        let shape = SpectralShape::new(360.0, 455.0, 1.0).unwrap();
        let rows: Vec<[f64; 3]> = shape
            .wavelengths()
            .iter()
            .map(|&wl| {
                let t = (wl - 360.0) / 95.0;
                [t, t * t, 1.0 - t]
            })
            .collect();
        let cmfs =
            ColorMatchingFunctions::new("Ragged Observer", shape.wavelengths(), rows).unwrap();
        let illuminant = SpectralPowerDistribution::ones(shape);
        let macro_shape = SpectralShape::new(360.0, 455.0, 10.0).unwrap();

        let table = ctx
            .tristimulus_weighting_factors(&cmfs, &illuminant, &macro_shape)
            .unwrap();
        assert_eq!(table.len(), 10);
        let y_sum: f64 = table.iter().map(|row| row[1]).sum();
        assert!((y_sum - 100.0).abs() < 1e-6);
    }
}
