//! Spectral shape: the discrete wavelength grid of a measurement

use std::fmt;

use crate::error::{Error, Result};

/// Tolerance for deciding that a wavelength falls on a grid node.
///
/// Grids are generated as `start + i * interval`, so accumulated floating
/// point error stays far below this.
pub(crate) const WAVELENGTH_EPSILON: f64 = 1e-6;

/// The wavelength grid of a spectral quantity: `start, start + interval,
/// ..., end`, all in nanometers.
///
/// The textual form produced by [`fmt::Display`] is stable and is used as
/// part of the weighting-factor cache key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralShape {
    start: f64,
    end: f64,
    interval: f64,
}

impl SpectralShape {
    /// Create a shape, validating `start <= end` and `interval > 0`
    pub fn new(start: f64, end: f64, interval: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || !interval.is_finite() {
            return Err(Error::InvalidData(
                "spectral shape bounds must be finite".into(),
            ));
        }
        if start > end {
            return Err(Error::InvalidData(format!(
                "spectral shape start {start} exceeds end {end}"
            )));
        }
        if interval <= 0.0 {
            return Err(Error::InvalidData(format!(
                "spectral shape interval must be positive, got {interval}"
            )));
        }
        Ok(Self {
            start,
            end,
            interval,
        })
    }

    /// First wavelength of the grid in nm
    #[inline]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Last wavelength of the grid in nm
    #[inline]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Grid spacing in nm
    #[inline]
    pub const fn interval(&self) -> f64 {
        self.interval
    }

    /// Number of grid nodes
    pub fn len(&self) -> usize {
        ((self.end - self.start) / self.interval + WAVELENGTH_EPSILON) as usize + 1
    }

    /// A shape always holds at least one node
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The grid wavelengths in ascending order
    pub fn wavelengths(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.start + i as f64 * self.interval)
            .collect()
    }

    /// True if `wavelength` falls on a grid node
    pub fn contains(&self, wavelength: f64) -> bool {
        if wavelength < self.start - WAVELENGTH_EPSILON
            || wavelength > self.end + WAVELENGTH_EPSILON
        {
            return false;
        }
        let steps = (wavelength - self.start) / self.interval;
        (steps - steps.round()).abs() * self.interval < WAVELENGTH_EPSILON
    }
}

impl fmt::Display for SpectralShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.start, self.end, self.interval)
    }
}
