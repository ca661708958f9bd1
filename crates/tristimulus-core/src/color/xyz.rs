//! CIE XYZ tristimulus values
//!
//! XYZ is the destination of every conversion in this crate: spectral
//! integration produces values in domain [0, 100], single-wavelength
//! lookups in domain [0, 1].

use std::ops::{Add, Mul, Sub};

/// CIE 1931 XYZ tristimulus values
///
/// Y carries luminance; X and Z are mixes of the observer cone responses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create new tristimulus values
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create from an `[X, Y, Z]` array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to an `[X, Y, Z]` array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// The (x, y) chromaticity coordinates
    #[inline]
    pub fn chromaticity(&self) -> (f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            (self.x / sum, self.y / sum)
        } else {
            (0.0, 0.0)
        }
    }

    /// Componentwise comparison within `epsilon`
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    /// Componentwise comparison within relative tolerance `rel`.
    ///
    /// Components whose reference magnitude is zero fall back to an
    /// absolute comparison against `rel`.
    pub fn approx_eq_rel(&self, other: &Self, rel: f64) -> bool {
        let close = |a: f64, b: f64| {
            if b == 0.0 {
                a.abs() < rel
            } else {
                ((a - b) / b).abs() < rel
            }
        };
        close(self.x, other.x) && close(self.y, other.y) && close(self.z, other.z)
    }
}

impl Add for Xyz {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Xyz {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}
