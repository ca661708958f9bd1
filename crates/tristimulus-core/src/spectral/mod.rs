//! Spectral data primitives
//!
//! This module provides:
//! - [`SpectralShape`]: the discrete wavelength grid of a measurement
//! - [`SpectralPowerDistribution`]: wavelength-indexed intensity data
//! - [`ColorMatchingFunctions`]: the three response curves of a standard
//!   observer

pub mod cmfs;
pub mod shape;
pub mod spd;

pub use cmfs::ColorMatchingFunctions;
pub use shape::SpectralShape;
pub use spd::SpectralPowerDistribution;
