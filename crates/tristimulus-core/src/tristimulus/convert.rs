//! Spectral data to CIE XYZ conversion

use crate::color::Xyz;
use crate::error::{Error, Result};
use crate::math::{InterpolationMethod, Interpolator};
use crate::spectral::{ColorMatchingFunctions, SpectralPowerDistribution};

/// Integrate a spectral power distribution to CIE XYZ.
///
/// The distribution and the optional illuminant are aligned onto the
/// observer grid by exact lookup, with missing wavelengths contributing
/// zero; a `None` illuminant is the equi-energy constant 1. The result is
/// normalized by `100 / sum(ybar * S)`, placing Y for a perfect diffuser
/// at 100.
pub fn spectral_to_xyz(
    spd: &SpectralPowerDistribution,
    cmfs: &ColorMatchingFunctions,
    illuminant: Option<&SpectralPowerDistribution>,
) -> Xyz {
    let mut sums = [0.0; 3];
    let mut normalization = 0.0;
    for (&wl, row) in cmfs.wavelengths().iter().zip(cmfs.values()) {
        let s = illuminant.map_or(1.0, |il| il.get(wl).unwrap_or(0.0));
        let v = spd.get(wl).unwrap_or(0.0);
        normalization += row[1] * s;
        for (sum, &bar) in sums.iter_mut().zip(row) {
            *sum += v * bar * s;
        }
    }
    let k = 100.0 / normalization;
    Xyz::new(k * sums[0], k * sums[1], k * sums[2])
}

/// Colour matching function values for a single wavelength in nm.
///
/// See [`wavelengths_to_xyz`] for the lookup and interpolation rules.
pub fn wavelength_to_xyz(
    wavelength: f64,
    cmfs: &ColorMatchingFunctions,
    method: Option<InterpolationMethod>,
) -> Result<Xyz> {
    let mut values = wavelengths_to_xyz(&[wavelength], cmfs, method)?;
    Ok(values.pop().unwrap_or_default())
}

/// Colour matching function values for a batch of wavelengths in nm.
///
/// Every wavelength must lie within the observer domain. Wavelengths that
/// hit stored grid points exactly are read back without interpolation;
/// otherwise the three channels are fitted once and evaluated per query.
/// With `method` of `None` the strategy is selected from the grid spacing:
/// Sprague (1880) for uniform data, cubic spline otherwise. Requesting
/// Sprague on non-uniform data is an error.
pub fn wavelengths_to_xyz(
    wavelengths: &[f64],
    cmfs: &ColorMatchingFunctions,
    method: Option<InterpolationMethod>,
) -> Result<Vec<Xyz>> {
    let shape = cmfs.shape();
    for &wl in wavelengths {
        if !wl.is_finite() || wl < shape.start() || wl > shape.end() {
            return Err(Error::DomainRange {
                wavelength: wl,
                start: shape.start(),
                end: shape.end(),
            });
        }
    }

    if wavelengths.iter().all(|&wl| cmfs.contains(wl)) {
        return Ok(wavelengths
            .iter()
            // contains() was checked above, the row lookup cannot miss
            .filter_map(|&wl| cmfs.get(wl))
            .map(Xyz::from_array)
            .collect());
    }

    let uniform = cmfs.is_uniform();
    let method = match method {
        Some(InterpolationMethod::Sprague) if !uniform => {
            return Err(Error::UnsupportedSpragueSpacing);
        }
        Some(method) => method,
        None => InterpolationMethod::for_spacing(uniform),
    };

    let x = cmfs.wavelengths();
    let interpolators = [
        Interpolator::fit(method, x, &cmfs.channel_values(0))?,
        Interpolator::fit(method, x, &cmfs.channel_values(1))?,
        Interpolator::fit(method, x, &cmfs.channel_values(2))?,
    ];

    Ok(wavelengths
        .iter()
        .map(|&wl| {
            Xyz::new(
                interpolators[0].evaluate(wl),
                interpolators[1].evaluate(wl),
                interpolators[2].evaluate(wl),
            )
        })
        .collect())
}
