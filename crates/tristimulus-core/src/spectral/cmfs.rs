//! Colour matching functions: the spectral response of a standard observer

use crate::error::{Error, Result};
use crate::math::interpolation::{InterpolationMethod, Interpolator};
use crate::spectral::shape::{SpectralShape, WAVELENGTH_EPSILON};
use crate::spectral::spd::{is_uniform, position};

/// Colour matching functions: three co-indexed spectral channels
/// (x̄, ȳ, z̄) sharing one wavelength grid, with a name.
///
/// The name participates in weighting-factor cache identity, like
/// [`SpectralPowerDistribution`](crate::spectral::SpectralPowerDistribution)
/// names.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatchingFunctions {
    name: String,
    wavelengths: Vec<f64>,
    values: Vec<[f64; 3]>,
}

impl ColorMatchingFunctions {
    /// Create colour matching functions from co-indexed wavelength and
    /// channel-row arrays. Wavelengths must be finite, strictly ascending
    /// and unique.
    pub fn new(
        name: impl Into<String>,
        wavelengths: Vec<f64>,
        values: Vec<[f64; 3]>,
    ) -> Result<Self> {
        if wavelengths.len() != values.len() {
            return Err(Error::InvalidData(format!(
                "wavelength and row counts differ: {} vs {}",
                wavelengths.len(),
                values.len()
            )));
        }
        if wavelengths.is_empty() {
            return Err(Error::InvalidData("empty colour matching functions".into()));
        }
        if wavelengths.iter().any(|w| !w.is_finite())
            || values.iter().flatten().any(|v| !v.is_finite())
        {
            return Err(Error::InvalidData(
                "non-finite colour matching function data".into(),
            ));
        }
        if wavelengths.windows(2).any(|w| w[1] - w[0] <= 0.0) {
            return Err(Error::InvalidData(
                "wavelengths must be strictly ascending".into(),
            ));
        }
        Ok(Self {
            name: name.into(),
            wavelengths,
            values,
        })
    }

    /// Create colour matching functions from a uniformly spaced table
    /// starting at `start` nm with `interval` nm steps
    pub fn from_table(
        name: impl Into<String>,
        start: f64,
        interval: f64,
        rows: &[[f64; 3]],
    ) -> Result<Self> {
        let wavelengths = (0..rows.len())
            .map(|i| start + i as f64 * interval)
            .collect();
        Self::new(name, wavelengths, rows.to_vec())
    }

    /// Name of the observer
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sampled wavelengths in nm, ascending
    #[inline]
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// Channel rows `[x̄, ȳ, z̄]`, co-indexed with [`Self::wavelengths`]
    #[inline]
    pub fn values(&self) -> &[[f64; 3]] {
        &self.values
    }

    /// Number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Always false: construction rejects empty data
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Shape of the sampled domain (smallest adjacent spacing for
    /// non-uniform data)
    pub fn shape(&self) -> SpectralShape {
        let start = self.wavelengths[0];
        let end = self.wavelengths[self.wavelengths.len() - 1];
        let interval = self
            .wavelengths
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold(f64::INFINITY, f64::min);
        let interval = if interval.is_finite() { interval } else { 1.0 };
        SpectralShape::new(start, end, interval)
            .unwrap_or_else(|_| unreachable!("sampled domain is always a valid shape"))
    }

    /// True if the sample spacing is constant
    pub fn is_uniform(&self) -> bool {
        is_uniform(&self.wavelengths)
    }

    /// True if `wavelength` is one of the sampled wavelengths
    pub fn contains(&self, wavelength: f64) -> bool {
        position(&self.wavelengths, wavelength).is_some()
    }

    /// The `[x̄, ȳ, z̄]` row at a sampled wavelength, if present
    pub fn get(&self, wavelength: f64) -> Option<[f64; 3]> {
        position(&self.wavelengths, wavelength).map(|i| self.values[i])
    }

    /// Values of one channel (0 = x̄, 1 = ȳ, 2 = z̄)
    pub fn channel_values(&self, channel: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[channel]).collect()
    }

    /// Resample all three channels onto `shape` by interpolation.
    ///
    /// With `method = None`: Sprague (1880) for uniform spacing, cubic
    /// spline otherwise. Fails with [`Error::DomainRange`] if `shape`
    /// leaves the sampled domain.
    pub fn interpolated(
        &self,
        shape: &SpectralShape,
        method: Option<InterpolationMethod>,
    ) -> Result<Self> {
        let own = self.shape();
        if shape.start() < own.start() - WAVELENGTH_EPSILON
            || shape.end() > own.end() + WAVELENGTH_EPSILON
        {
            return Err(Error::DomainRange {
                wavelength: shape.start().min(shape.end()),
                start: own.start(),
                end: own.end(),
            });
        }
        let method = method.unwrap_or(InterpolationMethod::for_spacing(self.is_uniform()));
        let wavelengths = shape.wavelengths();
        let mut values = vec![[0.0; 3]; wavelengths.len()];
        for channel in 0..3 {
            let ys = self.channel_values(channel);
            let interpolator = Interpolator::fit(method, &self.wavelengths, &ys)?;
            for (row, &w) in values.iter_mut().zip(&wavelengths) {
                row[channel] = interpolator.evaluate(w);
            }
        }
        Ok(Self {
            name: self.name.clone(),
            wavelengths,
            values,
        })
    }
}
