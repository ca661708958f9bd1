//! Colour value types

pub mod xyz;

pub use xyz::Xyz;
