//! # u-describe
//!
//! Descriptive statistics over `f64` samples.
//!
//! This crate computes the usual summary measures of a sample: mean,
//! median, mode, sample standard deviation, min-max normalization,
//! standard-deviation outlier filtering, and a combined summary record.
//!
//! ## Modules
//!
//! - [`stats`] — Free functions over `&[f64]`
//! - [`dataset`] — [`Dataset`], an owned sample with the same operations as methods
//! - [`summary`] — [`Summary`] record
//! - [`config`] — [`OutlierConfig`], loadable from TOML
//! - [`error`] — [`StatsError`]
//!
//! ## Design Philosophy
//!
//! - **No hidden state**: data is passed in explicitly or held in a
//!   caller-owned [`Dataset`]
//! - **Errors, not panics**: empty input, too few values and NaN/Inf are
//!   reported through [`StatsError`]
//! - **Numerical stability**: compensated summation for means and
//!   squared deviations
//! - **Property-based testing**: invariants verified via proptest
//!
//! ```
//! use u_describe::stats;
//! let data = [1.0, 2.0, 3.0, 100.0];
//! assert_eq!(stats::median(&data).unwrap(), 2.5);
//! assert_eq!(stats::filter_outliers(&data, 1.0).unwrap(), vec![1.0, 2.0, 3.0]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod stats;
pub mod summary;

pub use config::{OutlierConfig, DEFAULT_OUTLIER_THRESHOLD};
pub use dataset::Dataset;
pub use error::{StatsError, StatsResult};
pub use summary::Summary;
