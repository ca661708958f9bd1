//! Mathematical building blocks for tristimulus computation
//!
//! This module provides:
//! - Lagrange basis evaluation for the ASTM E2022-11 coefficient tables
//! - The interpolation strategies used to reconstruct spectral values
//!   between measured samples

pub mod interpolation;
pub mod lagrange;

pub use interpolation::{InterpolationMethod, Interpolator};
pub use lagrange::lagrange_basis;
