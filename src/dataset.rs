//! Caller-owned working copy of a sample.
//!
//! A [`Dataset`] holds values loaded once and queried many times. Every
//! statistic borrows the stored values and returns a fresh result; only
//! [`Dataset::load`] changes the contents, and it replaces them
//! wholesale.
//!
//! ```
//! use u_describe::Dataset;
//! let mut ds = Dataset::new();
//! ds.load([10.0, 20.0, 30.0, 40.0]);
//! assert_eq!(ds.mean().unwrap(), 25.0);
//! assert_eq!(ds.median().unwrap(), 25.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::OutlierConfig;
use crate::error::StatsResult;
use crate::stats;
use crate::summary::Summary;

/// An owned sample of `f64` values; serializes as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored values.
    pub fn load(&mut self, values: impl Into<Vec<f64>>) {
        self.values = values.into();
        trace!(len = self.values.len(), "dataset loaded");
    }

    /// Borrows the stored values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the dataset, returning the stored values.
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }

    /// See [`stats::mean`].
    pub fn mean(&self) -> StatsResult<f64> {
        stats::mean(&self.values)
    }

    /// See [`stats::median`].
    pub fn median(&self) -> StatsResult<f64> {
        stats::median(&self.values)
    }

    /// See [`stats::mode`].
    pub fn mode(&self) -> StatsResult<f64> {
        stats::mode(&self.values)
    }

    /// See [`stats::variance`].
    pub fn variance(&self) -> StatsResult<f64> {
        stats::variance(&self.values)
    }

    /// See [`stats::std_dev`].
    pub fn std_dev(&self) -> StatsResult<f64> {
        stats::std_dev(&self.values)
    }

    /// See [`stats::filter_outliers`].
    pub fn filter_outliers(&self, threshold: f64) -> StatsResult<Vec<f64>> {
        stats::filter_outliers(&self.values, threshold)
    }

    /// See [`stats::filter_outliers_with`].
    pub fn filter_outliers_with(&self, config: &OutlierConfig) -> StatsResult<Vec<f64>> {
        stats::filter_outliers_with(&self.values, config)
    }

    /// See [`stats::normalize`].
    pub fn normalize(&self) -> StatsResult<Vec<f64>> {
        stats::normalize(&self.values)
    }

    /// See [`stats::summary`].
    pub fn summary(&self) -> StatsResult<Option<Summary>> {
        stats::summary(&self.values)
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl From<&[f64]> for Dataset {
    fn from(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl FromIterator<f64> for Dataset {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[f64]> for Dataset {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
