//! Spectral power distributions: wavelength-indexed intensity data

use crate::error::{Error, Result};
use crate::math::interpolation::{InterpolationMethod, Interpolator};
use crate::spectral::shape::{SpectralShape, WAVELENGTH_EPSILON};

/// A spectral power distribution: an ordered mapping from wavelength (nm)
/// to a scalar value, with a name.
///
/// The name participates in weighting-factor cache identity, so two
/// distributions with the same name are treated as the same data by the
/// cache (see [`crate::tristimulus::TristimulusContext`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralPowerDistribution {
    name: String,
    wavelengths: Vec<f64>,
    values: Vec<f64>,
}

impl SpectralPowerDistribution {
    /// Create a distribution from co-indexed wavelength and value arrays.
    ///
    /// Wavelengths must be finite, strictly ascending and unique.
    pub fn new(
        name: impl Into<String>,
        wavelengths: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if wavelengths.len() != values.len() {
            return Err(Error::InvalidData(format!(
                "wavelength and value counts differ: {} vs {}",
                wavelengths.len(),
                values.len()
            )));
        }
        if wavelengths.is_empty() {
            return Err(Error::InvalidData("empty spectral data".into()));
        }
        if wavelengths.iter().any(|w| !w.is_finite())
            || values.iter().any(|v| !v.is_finite())
        {
            return Err(Error::InvalidData("non-finite spectral data".into()));
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

    /// Create a distribution from (wavelength, value) pairs, sorting them
    pub fn from_pairs(name: impl Into<String>, pairs: &[(f64, f64)]) -> Result<Self> {
        let mut pairs = pairs.to_vec();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (wavelengths, values) = pairs.into_iter().unzip();
        Self::new(name, wavelengths, values)
    }

    /// An all-ones distribution over `shape`: the uniform illuminant
    pub fn ones(shape: SpectralShape) -> Self {
        let wavelengths = shape.wavelengths();
        let values = vec![1.0; wavelengths.len()];
        Self {
            name: "1 Constant".into(),
            wavelengths,
            values,
        }
    }

    /// Name of the distribution
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sampled wavelengths in nm, ascending
    #[inline]
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// Sampled values, co-indexed with [`Self::wavelengths`]
    #[inline]
    pub fn values(&self) -> &[f64] {
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

    /// Shape of the sampled domain.
    ///
    /// For non-uniform data the interval is the smallest adjacent spacing.
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

    /// Index of a sampled wavelength, if present
    fn position(&self, wavelength: f64) -> Option<usize> {
        position(&self.wavelengths, wavelength)
    }

    /// True if `wavelength` is one of the sampled wavelengths
    pub fn contains(&self, wavelength: f64) -> bool {
        self.position(wavelength).is_some()
    }

    /// Value at a sampled wavelength, if present
    pub fn get(&self, wavelength: f64) -> Option<f64> {
        self.position(wavelength).map(|i| self.values[i])
    }

    /// Resample onto `shape`, filling wavelengths absent from the sampled
    /// data with zero. Returns a new distribution; the original is untouched.
    pub fn zeros(&self, shape: &SpectralShape) -> Self {
        let wavelengths = shape.wavelengths();
        let values = wavelengths
            .iter()
            .map(|&w| self.get(w).unwrap_or(0.0))
            .collect();
        Self {
            name: self.name.clone(),
            wavelengths,
            values,
        }
    }

    /// Resample onto `shape` by interpolation.
    ///
    /// With `method = None` the CIE recommendation applies: Sprague (1880)
    /// for uniformly spaced samples, cubic spline otherwise. Fails with
    /// [`Error::DomainRange`] if `shape` leaves the sampled domain.
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
        let interpolator = Interpolator::fit(method, &self.wavelengths, &self.values)?;
        let wavelengths = shape.wavelengths();
        let values = wavelengths.iter().map(|&w| interpolator.evaluate(w)).collect();
        Ok(Self {
            name: self.name.clone(),
            wavelengths,
            values,
        })
    }
}

/// True if adjacent spacings of `wavelengths` are all equal
pub(crate) fn is_uniform(wavelengths: &[f64]) -> bool {
    if wavelengths.len() < 3 {
        return true;
    }
    let first = wavelengths[1] - wavelengths[0];
    wavelengths
        .windows(2)
        .all(|w| ((w[1] - w[0]) - first).abs() < WAVELENGTH_EPSILON)
}

/// Binary search for `wavelength` in a sorted array, with fp tolerance
pub(crate) fn position(wavelengths: &[f64], wavelength: f64) -> Option<usize> {
    let i = wavelengths.partition_point(|&w| w < wavelength - WAVELENGTH_EPSILON);
    if i < wavelengths.len() && (wavelengths[i] - wavelength).abs() < WAVELENGTH_EPSILON {
        Some(i)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> SpectralPowerDistribution {
        SpectralPowerDistribution::new(
            "Ramp",
            vec![400.0, 410.0, 420.0, 430.0],
            vec![0.1, 0.2, 0.3, 0.4],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let spd = ramp();
        assert_eq!(spd.get(410.0), Some(0.2));
        assert_eq!(spd.get(415.0), None);
        assert!(spd.contains(430.0));
        assert!(!spd.contains(395.0));
    }

    #[test]
    fn test_shape_and_uniformity() {
        let spd = ramp();
        let shape = spd.shape();
        assert_eq!(shape.start(), 400.0);
        assert_eq!(shape.end(), 430.0);
        assert_eq!(shape.interval(), 10.0);
        assert!(spd.is_uniform());

        let spd = SpectralPowerDistribution::new(
            "Jagged",
            vec![400.0, 410.0, 425.0],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        assert!(!spd.is_uniform());
        assert_eq!(spd.shape().interval(), 10.0);
    }

    #[test]
    fn test_zeros_resample() {
        let spd = SpectralPowerDistribution::from_pairs(
            "Custom",
            &[(390.0, 0.06), (380.0, 0.06)],
        )
        .unwrap();
        let shape = SpectralShape::new(360.0, 400.0, 5.0).unwrap();
        let resampled = spd.zeros(&shape);
        assert_eq!(resampled.len(), 9);
        assert_eq!(resampled.get(380.0), Some(0.06));
        assert_eq!(resampled.get(390.0), Some(0.06));
        assert_eq!(resampled.get(385.0), Some(0.0));
        assert_eq!(resampled.get(360.0), Some(0.0));
        assert_eq!(resampled.name(), "Custom");
    }

    #[test]
    fn test_ones() {
        let shape = SpectralShape::new(380.0, 780.0, 5.0).unwrap();
        let ones = SpectralPowerDistribution::ones(shape);
        assert_eq!(ones.len(), 81);
        assert!(ones.values().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(SpectralPowerDistribution::new("x", vec![400.0], vec![1.0, 2.0]).is_err());
        assert!(SpectralPowerDistribution::new("x", vec![], vec![]).is_err());
        assert!(
            SpectralPowerDistribution::new("x", vec![410.0, 400.0], vec![1.0, 2.0]).is_err()
        );
        assert!(
            SpectralPowerDistribution::new("x", vec![400.0, 400.0], vec![1.0, 2.0]).is_err()
        );
    }

    #[test]
    fn test_interpolated_within_domain() {
        let spd = SpectralPowerDistribution::new(
            "Smooth",
            vec![400.0, 410.0, 420.0, 430.0, 440.0, 450.0, 460.0],
            vec![0.0, 0.1, 0.4, 0.9, 1.6, 2.5, 3.6],
        )
        .unwrap();
        let fine = SpectralShape::new(400.0, 460.0, 5.0).unwrap();
        let out = spd.interpolated(&fine, None).unwrap();
        assert_eq!(out.len(), 13);
        // nodes are reproduced exactly
        assert!((out.get(430.0).unwrap() - 0.9).abs() < 1e-12);

        let outside = SpectralShape::new(390.0, 460.0, 5.0).unwrap();
        assert!(matches!(
            spd.interpolated(&outside, None),
            Err(Error::DomainRange { .. })
        ));
    }
}
