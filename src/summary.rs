//! Summary record for a sample.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary statistics for a non-empty sample, produced by
/// [`stats::summary`](crate::stats::summary).
///
/// `std_dev` is present only for samples of two or more values and is
/// serialized under the key `std`, omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median.
    pub median: f64,
    /// Sample standard deviation, absent below two values.
    #[serde(rename = "std", default, skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count: {}", self.count)?;
        writeln!(f, "min: {:.2}", self.min)?;
        writeln!(f, "max: {:.2}", self.max)?;
        writeln!(f, "mean: {:.2}", self.mean)?;
        write!(f, "median: {:.2}", self.median)?;
        if let Some(sd) = self.std_dev {
            write!(f, "\nstd: {sd:.2}")?;
        }
        Ok(())
    }
}
