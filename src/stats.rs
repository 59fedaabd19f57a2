//! Descriptive statistics over `f64` samples.
//!
//! Every function borrows its input, never mutates it, and reports
//! failure through [`StatsError`] instead of panicking. Values must be
//! finite: NaN or ±∞ anywhere in the input yields
//! [`StatsError::NonFinite`] with the first offending index.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation, O(ε) error independent of n.
//! - **Variance/StdDev**: two-pass, sum of squared deviations from the
//!   compensated mean, divided by `n − 1` (Bessel's correction).
//!   Deviations are scaled by the largest one before squaring.
//! - **Median**: sort a copy, average the two middle elements for even n.
//! - **Normalize**: min-max scaling onto `[0, 1]`.
//!
//! Any finite input is accepted, up to `±f64::MAX`: sums, midpoints and
//! ranges that would leave the `f64` range are computed on halved values.

use std::collections::HashMap;

use tracing::debug;

use crate::config::{check_threshold, OutlierConfig};
use crate::error::{StatsError, StatsResult};
use crate::summary::Summary;

fn ensure_finite(data: &[f64]) -> StatsResult<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(StatsError::NonFinite { index }),
        None => Ok(()),
    }
}

fn ensure_len(data: &[f64], required: usize) -> StatsResult<()> {
    match data.len() {
        0 => Err(StatsError::EmptyInput),
        actual if actual < required => Err(StatsError::InsufficientData { required, actual }),
        _ => Ok(()),
    }
}

/// Computes the arithmetic mean using compensated summation.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFinite`] if `data` contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_describe::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, 1)?;
    ensure_finite(data)?;
    let total = kahan_sum(data);
    if total.is_finite() {
        return Ok(total / data.len() as f64);
    }
    // the sum left the f64 range; a running mean stays within the extremes
    let mut m = 0.0_f64;
    for (k, &x) in data.iter().enumerate() {
        let k = (k + 1) as f64;
        m += x / k - m / k;
    }
    Ok(m)
}

/// Computes the median of `data` without mutating the input.
///
/// Sorts a copy ascending, then returns the middle element (odd length)
/// or the average of the two middle elements (even length).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_describe::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, 1)?;
    ensure_finite(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok(midpoint(sorted[n / 2 - 1], sorted[n / 2]))
    }
}

/// Returns the most frequent value in `data`.
///
/// When several values share the highest count, the one appearing
/// earliest in `data` wins. Values are compared numerically, so `0.0`
/// and `-0.0` count as the same value.
///
/// # Examples
/// ```
/// use u_describe::stats::mode;
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0, 3.0, 3.0]).unwrap(), 3.0);
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 1.0]).unwrap(), 1.0);
/// ```
pub fn mode(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, 1)?;
    ensure_finite(data)?;

    // bit pattern -> (count, first index)
    let mut tally: HashMap<u64, (usize, usize)> = HashMap::with_capacity(data.len());
    for (i, &x) in data.iter().enumerate() {
        let key = if x == 0.0 { 0.0_f64.to_bits() } else { x.to_bits() };
        tally.entry(key).or_insert((0, i)).0 += 1;
    }

    let (_, first) = tally
        .into_values()
        .max_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
        .ok_or(StatsError::EmptyInput)?;
    Ok(data[first])
}

/// Computes the sample variance (denominator `n − 1`).
///
/// Deviations are rescaled by the largest one before squaring, so the
/// result only overflows when the variance itself exceeds `f64::MAX`.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::InsufficientData`] if `data` has a single element.
/// - [`StatsError::NonFinite`] if `data` contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_describe::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> StatsResult<f64> {
    Spread::of(data).map(|spread| spread.variance())
}

/// Computes the sample standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// Same as [`variance`]: empty input, fewer than two values, or
/// non-finite values.
///
/// # Examples
/// ```
/// use u_describe::stats::std_dev;
/// use u_describe::StatsError;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((std_dev(&v).unwrap() - 2.138089935299395).abs() < 1e-10);
/// assert_eq!(
///     std_dev(&[5.0]),
///     Err(StatsError::InsufficientData { required: 2, actual: 1 })
/// );
/// ```
pub fn std_dev(data: &[f64]) -> StatsResult<f64> {
    Spread::of(data).map(|spread| spread.std_dev())
}

/// Deviation from the mean, measured in units of the widest deviation.
///
/// The sample variance is `unit · widest²` (times 4 when `halved`).
/// Every scaled deviation lies
/// in `[-1, 1]`, so squaring neither overflows nor underflows to zero.
struct Spread {
    mean: f64,
    /// Largest `|deviation|`, on halved values when `halved` is set.
    widest: f64,
    /// `x − mean` overflows for some `x`, so deviations use `x/2 − mean/2`.
    halved: bool,
    unit: f64,
}

impl Spread {
    fn of(data: &[f64]) -> StatsResult<Self> {
        ensure_len(data, 2)?;
        ensure_finite(data)?;
        let mean = mean(data)?;
        let halved = data.iter().any(|&x| !(x - mean).is_finite());
        let mut spread = Self {
            mean,
            widest: 0.0,
            halved,
            unit: 0.0,
        };

        let widest = data
            .iter()
            .map(|&x| spread.deviation(x).abs())
            .fold(0.0_f64, f64::max);
        spread.widest = widest;
        if widest > 0.0 {
            let squared = compensated_sum(data.iter().map(|&x| {
                let d = spread.relative(x);
                d * d
            }));
            spread.unit = squared / (data.len() - 1) as f64;
        }
        Ok(spread)
    }

    fn deviation(&self, x: f64) -> f64 {
        if self.halved {
            x / 2.0 - self.mean / 2.0
        } else {
            x - self.mean
        }
    }

    /// `|x − mean|` divided by the widest deviation.
    fn relative(&self, x: f64) -> f64 {
        if self.widest == 0.0 {
            0.0
        } else {
            self.deviation(x).abs() / self.widest
        }
    }

    /// Undoes the halving last, so the result only overflows when the
    /// value itself exceeds `f64::MAX`.
    fn unhalve(&self, value: f64, power: i32) -> f64 {
        if self.halved {
            value * 2.0_f64.powi(power)
        } else {
            value
        }
    }

    fn variance(&self) -> f64 {
        self.unhalve(self.unit * self.widest * self.widest, 2)
    }

    fn std_dev(&self) -> f64 {
        self.unhalve(self.unit.sqrt() * self.widest, 1)
    }
}

/// Returns the minimum value in the slice.
///
/// # Examples
/// ```
/// use u_describe::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]).unwrap(), 1.0);
/// ```
pub fn min(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, 1)?;
    ensure_finite(data)?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Returns the maximum value in the slice.
///
/// # Examples
/// ```
/// use u_describe::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]).unwrap(), 5.0);
/// ```
pub fn max(data: &[f64]) -> StatsResult<f64> {
    ensure_len(data, 1)?;
    ensure_finite(data)?;
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Keeps the values lying within `threshold` standard deviations of the
/// mean, i.e. those with `|x − mean| <= threshold × std_dev`.
///
/// Input order is preserved. Fewer than two values are returned
/// unchanged, since the standard deviation is undefined for them.
///
/// # Errors
/// - [`StatsError::InvalidThreshold`] if `threshold` is negative or
///   non-finite.
/// - [`StatsError::NonFinite`] if `data` (of length ≥ 2) contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_describe::stats::filter_outliers;
/// let kept = filter_outliers(&[1.0, 2.0, 3.0, 100.0], 1.0).unwrap();
/// assert_eq!(kept, vec![1.0, 2.0, 3.0]);
/// ```
pub fn filter_outliers(data: &[f64], threshold: f64) -> StatsResult<Vec<f64>> {
    check_threshold(threshold)?;
    if data.len() < 2 {
        return Ok(data.to_vec());
    }
    ensure_finite(data)?;
    if data.iter().all(|&x| x == data[0]) {
        return Ok(data.to_vec());
    }

    let spread = Spread::of(data)?;
    // compared in widest-deviation units so a tiny or huge std_dev keeps its precision
    let limit = threshold * spread.unit.sqrt();
    let kept: Vec<f64> = data
        .iter()
        .copied()
        .filter(|&x| spread.relative(x) <= limit)
        .collect();

    if kept.len() < data.len() {
        debug!(
            kept = kept.len(),
            removed = data.len() - kept.len(),
            mean = spread.mean,
            std_dev = spread.std_dev(),
            threshold,
            "filtered outliers"
        );
    }
    Ok(kept)
}

/// [`filter_outliers`] with the threshold taken from an [`OutlierConfig`].
pub fn filter_outliers_with(data: &[f64], config: &OutlierConfig) -> StatsResult<Vec<f64>> {
    filter_outliers(data, config.threshold)
}

/// Min-max scales every value onto `[0, 1]`.
///
/// The minimum maps to exactly `0.0` and the maximum to exactly `1.0`.
/// When all values are equal there is no range to divide by, and every
/// output is `0.5`.
///
/// # Examples
/// ```
/// use u_describe::stats::normalize;
/// assert_eq!(normalize(&[10.0, 20.0, 30.0]).unwrap(), vec![0.0, 0.5, 1.0]);
/// assert_eq!(normalize(&[7.0, 7.0]).unwrap(), vec![0.5, 0.5]);
/// ```
pub fn normalize(data: &[f64]) -> StatsResult<Vec<f64>> {
    let lo = min(data)?;
    let hi = max(data)?;
    if lo == hi {
        debug!(len = data.len(), "constant input, normalizing to midpoint");
        return Ok(vec![0.5; data.len()]);
    }
    let range = hi - lo;
    if range.is_finite() {
        return Ok(data.iter().map(|&x| (x - lo) / range).collect());
    }
    let (lo, range) = (lo / 2.0, hi / 2.0 - lo / 2.0);
    Ok(data.iter().map(|&x| (x / 2.0 - lo) / range).collect())
}

/// Collects count, extremes, mean, median and (for two or more values)
/// the sample standard deviation.
///
/// Empty input yields `Ok(None)` rather than an error.
///
/// # Examples
/// ```
/// use u_describe::stats::summary;
/// let s = summary(&[1.0, 2.0, 3.0, 4.0]).unwrap().unwrap();
/// assert_eq!(s.count, 4);
/// assert_eq!(s.median, 2.5);
/// assert!(s.std_dev.is_some());
/// assert_eq!(summary(&[]).unwrap(), None);
/// ```
pub fn summary(data: &[f64]) -> StatsResult<Option<Summary>> {
    if data.is_empty() {
        return Ok(None);
    }
    let spread = if data.len() >= 2 {
        Some(std_dev(data)?)
    } else {
        None
    };
    Ok(Some(Summary {
        count: data.len(),
        min: min(data)?,
        max: max(data)?,
        mean: mean(data)?,
        median: median(data)?,
        std_dev: spread,
    }))
}

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation over a slice.
///
/// Returns `0.0` for an empty slice. The result is not finite when an
/// intermediate sum leaves the `f64` range.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
///
/// # Examples
/// ```
/// use u_describe::stats::kahan_sum;
/// assert_eq!(kahan_sum(&[1e16, 1.0, -1e16]), 1.0);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    compensated_sum(data.iter().copied())
}

/// Average of two values without overflowing their sum.
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

fn compensated_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in values {
        let t = sum + x;
        // recover the low-order bits of whichever operand was smaller
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    const SPREAD: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), Ok(42.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_mean_non_finite() {
        assert_eq!(
            mean(&[1.0, f64::NAN, 3.0]),
            Err(StatsError::NonFinite { index: 1 })
        );
        assert_eq!(
            mean(&[1.0, 2.0, f64::INFINITY]),
            Err(StatsError::NonFinite { index: 2 })
        );
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(2.0));
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = vec![5.0, 3.0, 9.0, 1.0];
        let _ = median(&data);
        assert_eq!(data, vec![5.0, 3.0, 9.0, 1.0]);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), Err(StatsError::EmptyInput));
    }

    // --- mode ---

    #[test]
    fn test_mode_basic() {
        assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0, 3.0, 3.0]), Ok(3.0));
    }

    #[test]
    fn test_mode_tie_takes_earliest() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 1.0]), Ok(1.0));
        assert_eq!(mode(&[4.0, 3.0, 2.0]), Ok(4.0));
        assert_eq!(mode(&[9.0, 5.0, 5.0, 9.0, 7.0, 7.0]), Ok(9.0));
    }

    #[test]
    fn test_mode_signed_zero() {
        let m = mode(&[1.0, -0.0, 1.0, 0.0, 0.0]).unwrap();
        assert_eq!(m, 0.0);
        assert!(m.is_sign_negative(), "first occurrence is returned");
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(&[]), Err(StatsError::EmptyInput));
    }

    // --- variance / std_dev ---

    #[test]
    fn test_variance_basic() {
        let var = variance(&SPREAD).unwrap();
        assert!((var - 4.571428571428571).abs() < 1e-10);
    }

    #[test]
    fn test_std_dev_sample() {
        let sd = std_dev(&SPREAD).unwrap();
        assert!((sd - 2.1381).abs() < 1e-4, "got {sd}");
    }

    #[test]
    fn test_std_dev_constant() {
        assert!(std_dev(&[5.0; 100]).unwrap().abs() < 1e-15);
    }

    #[test]
    fn test_std_dev_errors() {
        assert_eq!(std_dev(&[]), Err(StatsError::EmptyInput));
        assert_eq!(
            std_dev(&[5.0]),
            Err(StatsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(
            std_dev(&[1.0, f64::NAN]),
            Err(StatsError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn test_variance_large_offset() {
        // naive E[X²] − E[X]² loses everything here
        let data: Vec<f64> = (1..=5).map(|i| 1e9 + i as f64).collect();
        let var = variance(&data).unwrap();
        assert!((var - 2.5).abs() < 1e-5, "got {var}");
    }

    // --- min / max ---

    #[test]
    fn test_min_max() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        assert_eq!(min(&v), Ok(1.0));
        assert_eq!(max(&v), Ok(9.0));
    }

    #[test]
    fn test_min_max_empty() {
        assert_eq!(min(&[]), Err(StatsError::EmptyInput));
        assert_eq!(max(&[]), Err(StatsError::EmptyInput));
    }

    // --- filter_outliers ---

    #[test]
    fn test_filter_outliers_removes_far_value() {
        let kept = filter_outliers(&[1.0, 2.0, 3.0, 100.0], 1.0).unwrap();
        assert_eq!(kept, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_filter_outliers_default_threshold() {
        let data = [10.0, 20.0, 30.0, 40.0, 50.0, 35.0, 25.0, 15.0, 45.0, 100.0];
        let kept = filter_outliers_with(&data, &OutlierConfig::default()).unwrap();
        assert_eq!(kept, data[..9].to_vec());
    }

    #[test]
    fn test_filter_outliers_short_input_unchanged() {
        assert_eq!(filter_outliers(&[], 2.0), Ok(vec![]));
        assert_eq!(filter_outliers(&[7.0], 2.0), Ok(vec![7.0]));
        assert_eq!(filter_outliers(&[f64::NAN], 2.0).unwrap().len(), 1);
    }

    #[test]
    fn test_filter_outliers_constant_keeps_all() {
        let data = [0.1; 7];
        assert_eq!(filter_outliers(&data, 0.0), Ok(data.to_vec()));
    }

    #[test]
    fn test_filter_outliers_bad_threshold() {
        assert_eq!(
            filter_outliers(&[1.0, 2.0], -1.0),
            Err(StatsError::InvalidThreshold(-1.0))
        );
        assert!(matches!(
            filter_outliers(&[1.0, 2.0], f64::NAN),
            Err(StatsError::InvalidThreshold(_))
        ));
    }

    // --- normalize ---

    #[test]
    fn test_normalize_basic() {
        assert_eq!(
            normalize(&[10.0, 20.0, 30.0, 40.0, 50.0]),
            Ok(vec![0.0, 0.25, 0.5, 0.75, 1.0])
        );
    }

    #[test]
    fn test_normalize_constant() {
        assert_eq!(normalize(&[3.0, 3.0, 3.0]), Ok(vec![0.5, 0.5, 0.5]));
        assert_eq!(normalize(&[-8.0]), Ok(vec![0.5]));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(&[]), Err(StatsError::EmptyInput));
    }

    // --- summary ---

    #[test]
    fn test_summary_empty_is_none() {
        assert_eq!(summary(&[]), Ok(None));
    }

    #[test]
    fn test_summary_single_has_no_std_dev() {
        let s = summary(&[4.0]).unwrap().unwrap();
        assert_eq!(s.count, 1);
        assert_eq!((s.min, s.max, s.mean, s.median), (4.0, 4.0, 4.0, 4.0));
        assert_eq!(s.std_dev, None);
    }

    #[test]
    fn test_summary_full() {
        let s = summary(&SPREAD).unwrap().unwrap();
        assert_eq!(s.count, 8);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.median, 4.5);
        assert!((s.std_dev.unwrap() - 2.138089935299395).abs() < 1e-10);
    }

    #[test]
    fn test_summary_non_finite() {
        assert_eq!(
            summary(&[1.0, f64::NEG_INFINITY]),
            Err(StatsError::NonFinite { index: 1 })
        );
    }

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_precision() {
        let result = kahan_sum(&[1e16, 1.0, -1e16]);
        assert!((result - 1.0).abs() < 1e-10, "got {result}");
        assert_eq!(kahan_sum(&[]), 0.0);
    }

    // --- extreme magnitudes ---

    #[test]
    fn test_normalize_range_beyond_max() {
        assert_eq!(normalize(&[-1e308, 0.0, 1e308]), Ok(vec![0.0, 0.5, 1.0]));
        assert_eq!(normalize(&[f64::MAX, -f64::MAX]), Ok(vec![1.0, 0.0]));
    }

    #[test]
    fn test_mean_sum_beyond_max() {
        assert_eq!(mean(&[1e308, 1e308]), Ok(1e308));
        assert_eq!(mean(&[f64::MAX, f64::MAX, f64::MAX]), Ok(f64::MAX));
    }

    #[test]
    fn test_median_midpoint_beyond_max() {
        assert_eq!(median(&[f64::MAX, f64::MAX]), Ok(f64::MAX));
        assert_eq!(median(&[-f64::MAX, f64::MAX]), Ok(0.0));
    }

    #[test]
    fn test_filter_outliers_huge_values() {
        assert_eq!(
            filter_outliers(&[1e308, 1e308, 1.0], 2.0),
            Ok(vec![1e308, 1e308, 1.0])
        );

        // deviations of ±1.8e308 overflow when squared directly
        let mut data = vec![1e308; 9];
        data.push(-1e308);
        let sd = std_dev(&data).unwrap();
        assert!((sd / 6.324555320336759e307 - 1.0).abs() < 1e-9, "got {sd}");
        assert_eq!(filter_outliers(&data, 2.0), Ok(vec![1e308; 9]));
    }

    #[test]
    fn test_filter_outliers_subnormal_values() {
        // std_dev underflows to zero here, the lone value sits 8.8 deviations out
        let mut data = vec![0.0; 79];
        data.push(5e-324);
        assert_eq!(filter_outliers(&data, 9.0).unwrap().len(), 80);
        assert_eq!(filter_outliers(&data, 2.0), Ok(vec![0.0; 79]));
    }

    // --- order invariance ---

    #[test]
    fn test_shuffled_input_same_location_and_spread() {
        let data: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64 * 0.7 - 20.0).collect();
        let mut shuffled = data.clone();
        let mut rng = StdRng::seed_from_u64(42);
        shuffled.shuffle(&mut rng);

        assert_eq!(median(&data), median(&shuffled));
        assert!((mean(&data).unwrap() - mean(&shuffled).unwrap()).abs() < 1e-12);
        assert!((std_dev(&data).unwrap() - std_dev(&shuffled).unwrap()).abs() < 1e-10);
    }
}
