//! # tristimulus - spectral data to CIE XYZ
//!
//! Colorimetric integration of spectral power distributions against
//! standard observer colour matching functions.
//!
//! ## Goals
//!
//! - **Faithful**: tristimulus weighting factors per ASTM E2022-11,
//!   single-wavelength lookups via Sprague (1880) interpolation
//! - **Explicit**: memoized coefficient tables live in a caller-owned
//!   [`TristimulusContext`], never in hidden globals
//! - **Self-contained**: ships the CIE 1931 2-deg observer and the D50
//!   and A illuminants
//!
//! ## Quick Start
//!
//! ```
//! use tristimulus_core::data::{cie_1931_2_degree, d50};
//! use tristimulus_core::{spectral_to_xyz, wavelength_to_xyz, SpectralPowerDistribution};
//!
//! // Integrate a reflectance sample under D50
//! let spd = SpectralPowerDistribution::from_pairs(
//!     "Sample",
//!     &[(500.0, 0.0651), (510.0, 0.0705), (520.0, 0.0772)],
//! ).unwrap();
//! let xyz = spectral_to_xyz(&spd, cie_1931_2_degree(), Some(d50()));
//!
//! // Observer response at an off-grid wavelength
//! let row = wavelength_to_xyz(480.5, cie_1931_2_degree(), None).unwrap();
//! assert!(row.y > 0.0 && row.y < 1.0);
//! ```

pub mod color;
pub mod data;
pub mod error;
pub mod math;
pub mod spectral;
pub mod tristimulus;

pub use color::Xyz;
pub use error::{Error, Result};
pub use math::{InterpolationMethod, Interpolator};
pub use spectral::{ColorMatchingFunctions, SpectralPowerDistribution, SpectralShape};
pub use tristimulus::{
    spectral_to_xyz, wavelength_to_xyz, wavelengths_to_xyz, IntervalKind, TristimulusContext,
};
