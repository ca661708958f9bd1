//! Embedded CIE datasets
//!
//! The crate ships the data its operations are exercised against:
//! - the CIE 1931 2-deg standard observer (5 nm, 360-830 nm)
//! - the CIE D50 relative spectral power distribution (5 nm, 360-830 nm)
//! - CIE Standard Illuminant A as its exact Planckian formula

pub mod illuminants;
pub mod observers;

pub use illuminants::{d50, illuminant, illuminant_a, D50_NAME};
pub use observers::{cie_1931_2_degree, observer, CIE_1931_2_DEGREE_NAME};
