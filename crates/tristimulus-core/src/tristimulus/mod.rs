//! Tristimulus computation
//!
//! This module provides:
//! - [`TristimulusContext`]: owner of the memoized ASTM E2022-11 tables
//! - [`spectral_to_xyz`]: spectral power distribution to CIE XYZ
//! - [`wavelength_to_xyz`] / [`wavelengths_to_xyz`]: observer lookups at
//!   arbitrary wavelengths

pub mod context;
pub mod convert;
pub mod weighting;

pub use context::{IntervalKind, TristimulusContext};
pub use convert::{spectral_to_xyz, wavelength_to_xyz, wavelengths_to_xyz};
pub use weighting::{CoefficientTable, WeightingTable};
