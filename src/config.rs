//! Outlier filtering configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{StatsError, StatsResult};

/// Number of standard deviations from the mean beyond which a value is
/// treated as an outlier.
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 2.0;

/// Outlier filtering configuration.
///
/// Missing keys fall back to their defaults, so an empty TOML document
/// yields [`OutlierConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// Allowed distance from the mean, in sample standard deviations.
    pub threshold: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_OUTLIER_THRESHOLD,
        }
    }
}

impl OutlierConfig {
    /// Creates a config with the given threshold.
    ///
    /// # Errors
    /// [`StatsError::InvalidThreshold`] if `threshold` is negative or
    /// non-finite.
    pub fn new(threshold: f64) -> StatsResult<Self> {
        check_threshold(threshold)?;
        Ok(Self { threshold })
    }

    /// Rejects a negative or non-finite threshold.
    pub fn validate(&self) -> StatsResult<()> {
        check_threshold(self.threshold)
    }

    /// Parses and validates a TOML document such as `threshold = 1.5`.
    ///
    /// # Examples
    /// ```
    /// use u_describe::OutlierConfig;
    /// let config = OutlierConfig::from_toml_str("threshold = 1.5").unwrap();
    /// assert_eq!(config.threshold, 1.5);
    /// ```
    pub fn from_toml_str(source: &str) -> StatsResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| StatsError::Config(e.to_string()))?;
        if let Err(err) = config.validate() {
            warn!(%err, "rejecting outlier config");
            return Err(err);
        }
        Ok(config)
    }
}

pub(crate) fn check_threshold(threshold: f64) -> StatsResult<()> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(())
    } else {
        Err(StatsError::InvalidThreshold(threshold))
    }
}
