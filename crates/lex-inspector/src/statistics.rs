//! Quartile and IQR fence computation for the outlier check.

use crate::error::Result;
use polars::prelude::*;
use serde::Serialize;

/// IQR fences computed from one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierBounds {
    /// 25th percentile.
    pub q1: f64,
    /// 75th percentile.
    pub q3: f64,
    /// `q3 - q1`.
    pub iqr: f64,
    /// `q1 - k * iqr`.
    pub lower: f64,
    /// `q3 + k * iqr`.
    pub upper: f64,
}

impl OutlierBounds {
    /// Fences for quartiles `q1`/`q3` at multiplier `k`.
    pub fn from_quartiles(q1: f64, q3: f64, k: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        }
    }

    /// True if `value` falls outside the fences. NaN is never an outlier.
    #[inline]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Quantile `q` of already sorted values, interpolating linearly between the
/// two closest ranks.
///
/// Returns `None` for an empty slice or a `q` outside `[0, 1]`.
pub fn linear_quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Sorted non-missing, non-NaN values of a numeric series as `f64`.
pub(crate) fn sorted_values(series: &Series) -> Result<Vec<f64>> {
    let float_series = series.cast(&DataType::Float64)?;
    let mut values: Vec<f64> = float_series
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect();
    values.sort_by(f64::total_cmp);
    Ok(values)
}

/// Compute the IQR fences of a numeric series.
///
/// Missing values and NaN are skipped. Returns `None` when nothing is left.
pub fn iqr_bounds(series: &Series, multiplier: f64) -> Result<Option<OutlierBounds>> {
    let values = sorted_values(series)?;

    let (Some(q1), Some(q3)) = (
        linear_quantile(&values, 0.25),
        linear_quantile(&values, 0.75),
    ) else {
        return Ok(None);
    };

    Ok(Some(OutlierBounds::from_quartiles(q1, q3, multiplier)))
}
