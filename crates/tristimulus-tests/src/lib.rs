//! # tristimulus-tests
//!
//! Agreement tests for tristimulus-core.
//!
//! This crate provides:
//! - Weighting-factor agreement tests against direct 1 nm integration
//! - End-to-end observer pipeline tests on the embedded CIE datasets
//! - Seeded random spectra generation shared across the test files

pub mod spectra;

pub use spectra::{random_quadratic_spd, smooth_bump_spd};
