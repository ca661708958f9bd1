//! Error types for tristimulus computation

use thiserror::Error;

/// Result type for tristimulus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during spectral-to-XYZ computation
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Sample spacing is not the 1 nm the weighting-factor method requires
    #[error("\"{name}\" shape interval must be 1 nm, got {interval} nm")]
    IntervalMismatch { name: String, interval: f64 },

    /// Requested wavelength lies outside the colour matching functions domain
    #[error("{wavelength} nm wavelength is not in [{start}, {end}] domain")]
    DomainRange {
        wavelength: f64,
        start: f64,
        end: f64,
    },

    /// Unrecognized interpolation method name
    #[error("undefined \"{0}\" interpolation method")]
    UndefinedMethod(String),

    /// Sprague (1880) interpolation forced on non-uniformly spaced samples
    #[error("Sprague (1880) interpolation requires uniformly spaced samples")]
    UnsupportedSpragueSpacing,

    /// Too few samples for the selected operation
    #[error("not enough samples: need at least {required}, got {actual}")]
    NotEnoughSamples { required: usize, actual: usize },

    /// Malformed spectral data or shape
    #[error("invalid spectral data: {0}")]
    InvalidData(String),
}
