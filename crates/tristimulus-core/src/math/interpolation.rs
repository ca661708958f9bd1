//! Interpolation strategies for spectral data
//!
//! This module provides the four evaluators used to reconstruct spectral
//! values between measured samples:
//! - Linear (segment lerp)
//! - Natural cubic spline
//! - Pchip (Fritsch-Carlson shape-preserving Hermite)
//! - Sprague (1880), the CIE-recommended quintic for uniformly spaced data
//!
//! Each strategy is fitted once to its node/value arrays and then evaluated
//! at arbitrary query points within the node domain.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::spectral::spd::is_uniform;

/// Selection of an interpolation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// Natural cubic spline
    CubicSpline,
    /// Piecewise linear
    Linear,
    /// Fritsch-Carlson monotone cubic Hermite
    Pchip,
    /// Sprague (1880) quintic, uniform spacing only
    Sprague,
}

impl InterpolationMethod {
    /// The CIE-recommended method for the given sample spacing:
    /// Sprague (1880) for uniform data, cubic spline otherwise
    pub fn for_spacing(uniform: bool) -> Self {
        if uniform {
            Self::Sprague
        } else {
            Self::CubicSpline
        }
    }

    /// Minimum node count the strategy needs
    pub fn min_samples(&self) -> usize {
        match self {
            Self::Linear | Self::Pchip => 2,
            Self::CubicSpline => 3,
            Self::Sprague => 6,
        }
    }
}

impl FromStr for InterpolationMethod {
    type Err = Error;

    /// Parse a method name, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cubic spline" => Ok(Self::CubicSpline),
            "linear" => Ok(Self::Linear),
            "pchip" => Ok(Self::Pchip),
            "sprague" => Ok(Self::Sprague),
            _ => Err(Error::UndefinedMethod(s.to_string())),
        }
    }
}

/// A fitted interpolation strategy
///
/// Construct with [`Interpolator::fit`]; evaluate at query points within
/// the node domain with [`Interpolator::evaluate`].
#[derive(Debug, Clone)]
pub enum Interpolator {
    /// Piecewise linear
    Linear(LinearInterpolator),
    /// Natural cubic spline
    CubicSpline(CubicSplineInterpolator),
    /// Fritsch-Carlson monotone cubic
    Pchip(PchipInterpolator),
    /// Sprague (1880) quintic
    Sprague(SpragueInterpolator),
}

impl Interpolator {
    /// Fit `method` to the given nodes and values
    pub fn fit(method: InterpolationMethod, x: &[f64], y: &[f64]) -> Result<Self> {
        match method {
            InterpolationMethod::Linear => LinearInterpolator::new(x, y).map(Self::Linear),
            InterpolationMethod::CubicSpline => {
                CubicSplineInterpolator::new(x, y).map(Self::CubicSpline)
            }
            InterpolationMethod::Pchip => PchipInterpolator::new(x, y).map(Self::Pchip),
            InterpolationMethod::Sprague => SpragueInterpolator::new(x, y).map(Self::Sprague),
        }
    }

    /// Evaluate at a query point within the node domain
    pub fn evaluate(&self, q: f64) -> f64 {
        match self {
            Self::Linear(i) => i.evaluate(q),
            Self::CubicSpline(i) => i.evaluate(q),
            Self::Pchip(i) => i.evaluate(q),
            Self::Sprague(i) => i.evaluate(q),
        }
    }
}

/// Validate co-indexed node/value arrays for fitting
fn check_nodes(x: &[f64], y: &[f64], required: usize) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::InvalidData(format!(
            "node and value counts differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < required {
        return Err(Error::NotEnoughSamples {
            required,
            actual: x.len(),
        });
    }
    if x.iter().any(|v| !v.is_finite()) || y.iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidData("non-finite interpolation nodes".into()));
    }
    if x.windows(2).any(|w| w[1] - w[0] <= 0.0) {
        return Err(Error::InvalidData(
            "interpolation nodes must be strictly ascending".into(),
        ));
    }
    Ok(())
}

/// Index of the segment `[x[i], x[i + 1]]` bracketing `q`
///
/// Queries at or beyond the last node land in the final segment.
fn segment(x: &[f64], q: f64) -> usize {
    let i = x.partition_point(|&v| v <= q);
    i.clamp(1, x.len() - 1) - 1
}

/// Piecewise linear interpolation between adjacent nodes
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LinearInterpolator {
    /// Fit to nodes; requires at least 2
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        check_nodes(x, y, 2)?;
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Evaluate at `q`
    pub fn evaluate(&self, q: f64) -> f64 {
        let i = segment(&self.x, q);
        let t = (q - self.x[i]) / (self.x[i + 1] - self.x[i]);
        self.y[i] + t * (self.y[i + 1] - self.y[i])
    }
}

/// Natural cubic spline: C2-continuous piecewise cubics with zero second
/// derivative at both ends
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives at the nodes
    m: Vec<f64>,
}

impl CubicSplineInterpolator {
    /// Fit to nodes; requires at least 3
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        check_nodes(x, y, 3)?;
        let n = x.len();

        // assemble the tridiagonal system for the second derivatives,
        // natural boundary rows at both ends
        let mut sub = vec![0.0; n];
        let mut diag = vec![0.0; n];
        let mut sup = vec![0.0; n];
        let mut rhs = vec![0.0; n];
        diag[0] = 1.0;
        diag[n - 1] = 1.0;
        for i in 1..n - 1 {
            let h0 = x[i] - x[i - 1];
            let h1 = x[i + 1] - x[i];
            sub[i] = h0;
            diag[i] = 2.0 * (h0 + h1);
            sup[i] = h1;
            rhs[i] = 6.0 * ((y[i + 1] - y[i]) / h1 - (y[i] - y[i - 1]) / h0);
        }

        // Thomas algorithm
        for i in 1..n {
            let w = sub[i] / diag[i - 1];
            diag[i] -= w * sup[i - 1];
            rhs[i] -= w * rhs[i - 1];
        }
        let mut m = vec![0.0; n];
        m[n - 1] = rhs[n - 1] / diag[n - 1];
        for i in (0..n - 1).rev() {
            m[i] = (rhs[i] - sup[i] * m[i + 1]) / diag[i];
        }

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
        })
    }

    /// Evaluate at `q`
    pub fn evaluate(&self, q: f64) -> f64 {
        let i = segment(&self.x, q);
        let h = self.x[i + 1] - self.x[i];
        let a = (self.x[i + 1] - q) / h;
        let b = (q - self.x[i]) / h;
        a * self.y[i]
            + b * self.y[i + 1]
            + ((a.powi(3) - a) * self.m[i] + (b.powi(3) - b) * self.m[i + 1]) * h * h / 6.0
    }
}

/// Fritsch-Carlson monotone cubic Hermite interpolation
///
/// Shape preserving: never overshoots monotone data.
#[derive(Debug, Clone)]
pub struct PchipInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Slopes at the nodes
    d: Vec<f64>,
}

impl PchipInterpolator {
    /// Fit to nodes; requires at least 2
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        check_nodes(x, y, 2)?;
        let n = x.len();

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let delta: Vec<f64> = y
            .windows(2)
            .zip(&h)
            .map(|(w, &hi)| (w[1] - w[0]) / hi)
            .collect();

        let mut d = vec![0.0; n];
        if n == 2 {
            d[0] = delta[0];
            d[1] = delta[0];
            return Ok(Self {
                x: x.to_vec(),
                y: y.to_vec(),
                d,
            });
        }

        // interior slopes: weighted harmonic mean, zero across extrema
        for k in 1..n - 1 {
            let s1 = delta[k - 1];
            let s2 = delta[k];
            if s1 == 0.0 || s2 == 0.0 || s1.signum() != s2.signum() {
                d[k] = 0.0;
            } else {
                let w1 = 2.0 * h[k] + h[k - 1];
                let w2 = h[k] + 2.0 * h[k - 1];
                d[k] = (w1 + w2) / (w1 / s1 + w2 / s2);
            }
        }

        // shape-preserving three-point endpoint slopes
        let endpoint = |h0: f64, h1: f64, d0: f64, d1: f64| {
            let t = ((2.0 * h0 + h1) * d0 - h0 * d1) / (h0 + h1);
            if t * d0 <= 0.0 {
                0.0
            } else if d0 * d1 < 0.0 && t.abs() > 3.0 * d0.abs() {
                3.0 * d0
            } else {
                t
            }
        };
        d[0] = endpoint(h[0], h[1], delta[0], delta[1]);
        d[n - 1] = endpoint(h[n - 2], h[n - 3], delta[n - 2], delta[n - 3]);

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            d,
        })
    }

    /// Evaluate at `q`
    pub fn evaluate(&self, q: f64) -> f64 {
        let i = segment(&self.x, q);
        let h = self.x[i + 1] - self.x[i];
        let t = (q - self.x[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        h00 * self.y[i] + h10 * h * self.d[i] + h01 * self.y[i + 1] + h11 * h * self.d[i + 1]
    }
}

/// Sprague (1880) quintic interpolation for uniformly spaced data
///
/// The CIE-recommended method for spectral data on a constant-interval
/// grid (CIE 167:2005). The sample array is extended by two virtual points
/// on each side via fixed extrapolation stencils, then a quintic is fitted
/// over each 6-point window.
#[derive(Debug, Clone)]
pub struct SpragueInterpolator {
    start: f64,
    interval: f64,
    count: usize,
    /// Values padded with two extrapolated points on each side
    padded: Vec<f64>,
}

impl SpragueInterpolator {
    /// Fit to nodes; requires at least 6 and uniform spacing
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        check_nodes(x, y, 6)?;
        if !is_uniform(x) {
            return Err(Error::UnsupportedSpragueSpacing);
        }

        // boundary extrapolation stencils, all over 209
        const HEAD_OUTER: [f64; 6] = [884.0, -1960.0, 3033.0, -2648.0, 1080.0, -180.0];
        const HEAD_INNER: [f64; 6] = [508.0, -540.0, 488.0, -367.0, 144.0, -24.0];

        let stencil = |coeffs: &[f64; 6], window: &[f64], reversed: bool| -> f64 {
            let dot: f64 = if reversed {
                coeffs
                    .iter()
                    .rev()
                    .zip(window)
                    .map(|(c, v)| c * v)
                    .sum()
            } else {
                coeffs.iter().zip(window).map(|(c, v)| c * v).sum()
            };
            dot / 209.0
        };

        let head = &y[..6];
        let tail = &y[y.len() - 6..];
        let mut padded = Vec::with_capacity(y.len() + 4);
        padded.push(stencil(&HEAD_OUTER, head, false));
        padded.push(stencil(&HEAD_INNER, head, false));
        padded.extend_from_slice(y);
        padded.push(stencil(&HEAD_INNER, tail, true));
        padded.push(stencil(&HEAD_OUTER, tail, true));

        Ok(Self {
            start: x[0],
            interval: x[1] - x[0],
            count: x.len(),
            padded,
        })
    }

    /// Evaluate at `q`
    pub fn evaluate(&self, q: f64) -> f64 {
        let pos = ((q - self.start) / self.interval).max(0.0);
        let i = (pos.floor() as usize).min(self.count - 2);
        let t = pos - i as f64;

        // padded array offset: r[i] is two points before node i
        let r = &self.padded[i..i + 6];
        let a0 = r[2];
        let a1 = (2.0 * r[0] - 16.0 * r[1] + 16.0 * r[3] - 2.0 * r[4]) / 24.0;
        let a2 = (-r[0] + 16.0 * r[1] - 30.0 * r[2] + 16.0 * r[3] - r[4]) / 24.0;
        let a3 =
            (-9.0 * r[0] + 39.0 * r[1] - 70.0 * r[2] + 66.0 * r[3] - 33.0 * r[4] + 7.0 * r[5])
                / 24.0;
        let a4 = (13.0 * r[0] - 64.0 * r[1] + 126.0 * r[2] - 124.0 * r[3] + 61.0 * r[4]
            - 12.0 * r[5])
            / 24.0;
        let a5 =
            (-5.0 * r[0] + 25.0 * r[1] - 50.0 * r[2] + 50.0 * r[3] - 25.0 * r[4] + 5.0 * r[5])
                / 24.0;

        a0 + t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))))
    }
}
