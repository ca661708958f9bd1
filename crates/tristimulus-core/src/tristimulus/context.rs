//! Computation context owning the coefficient caches
//!
//! The ASTM E2022-11 tables are pure functions of their keys, so they are
//! memoized. Rather than hiding the memo tables in module globals, a
//! [`TristimulusContext`] owns them explicitly; callers share one context
//! for the lifetime of their computation (or the process).

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::spectral::{ColorMatchingFunctions, SpectralPowerDistribution, SpectralShape};
use crate::tristimulus::weighting::{
    compute_lagrange_coefficients, compute_weighting_factors, CoefficientTable, WeightingTable,
};

/// Which measurement interval a Lagrange coefficient table serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalKind {
    /// Interior interval: degree-4 window of 4 nodes, evaluation points
    /// shifted into the window centre
    Inner,
    /// First or last interval: degree-3 window of 3 nodes
    Boundary,
}

/// A write-once memo table: same key, same `Arc`, no recomputation.
///
/// The builder runs outside the lock, so a race between two callers can
/// compute the same value twice; the first insert wins and both callers
/// observe it. Builder failures leave the table untouched.
#[derive(Debug)]
struct Memo<K, V> {
    entries: Mutex<HashMap<K, Arc<V>>>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Memo<K, V> {
    fn new() -> Self {
        Self::default()
    }

    fn get_or_compute(&self, key: &K, build: impl FnOnce() -> Result<V>) -> Result<Arc<V>> {
        if let Some(cached) = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return Ok(Arc::clone(cached));
        }
        let value = Arc::new(build()?);
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(key.clone()).or_insert(value);
        Ok(Arc::clone(entry))
    }
}

/// Cache key for weighting-factor tables: CMFS name, illuminant name and
/// the textual shape. Identity is by name, as in ASTM E308 practice:
/// distinct datasets sharing a name alias to one entry.
type WeightingKey = (String, String, String);

/// Owner of the memoized ASTM E2022-11 tables
///
/// All methods are `&self`; the context can be shared across threads.
#[derive(Debug, Default)]
pub struct TristimulusContext {
    lagrange: Memo<(u32, IntervalKind), CoefficientTable>,
    weighting: Memo<WeightingKey, WeightingTable>,
}

impl TristimulusContext {
    /// Create a context with empty caches
    pub fn new() -> Self {
        Self {
            lagrange: Memo::new(),
            weighting: Memo::new(),
        }
    }

    /// Lagrange coefficients for reconstructing fine-grained samples
    /// within a measurement interval, per ASTM E2022-11.
    ///
    /// One row per interior point `n / interval`, `n = 1 .. interval - 1`;
    /// `Inner` rows hold 4 coefficients (degree-4 window), `Boundary` rows
    /// hold 3. Memoized: repeated calls with the same key return the same
    /// table.
    pub fn lagrange_coefficients(
        &self,
        interval: u32,
        kind: IntervalKind,
    ) -> Result<Arc<CoefficientTable>> {
        if interval < 2 {
            return Err(Error::InvalidData(format!(
                "Lagrange coefficients need an interval of at least 2 nm, got {interval}"
            )));
        }
        self.lagrange
            .get_or_compute(&(interval, kind), || {
                Ok(compute_lagrange_coefficients(interval, kind))
            })
    }

    /// Tristimulus weighting factors per ASTM E2022-11.
    ///
    /// `cmfs` and `illuminant` must both be sampled at 1 nm (bandpass
    /// corrected); `shape.interval()` is the macro measurement interval.
    /// The returned table has one `[X, Y, Z]` row per macro wavelength and
    /// is normalized so its Y column sums to 100; dotting it with SPD
    /// values sampled at the macro interval approximates full 1 nm
    /// integration.
    ///
    /// Memoized under `(cmfs.name, illuminant.name, shape)`.
    pub fn tristimulus_weighting_factors(
        &self,
        cmfs: &ColorMatchingFunctions,
        illuminant: &SpectralPowerDistribution,
        shape: &SpectralShape,
    ) -> Result<Arc<WeightingTable>> {
        let key = (
            cmfs.name().to_string(),
            illuminant.name().to_string(),
            shape.to_string(),
        );
        self.weighting
            .get_or_compute(&key, || compute_weighting_factors(self, cmfs, illuminant, shape))
    }
}
