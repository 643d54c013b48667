use serde::Serialize;

use crate::moments::Welford;
use crate::quantile;

/// Per-column summary matching the classic describe() table: count, sample
/// mean and deviation, extrema and quartiles.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarize one sample. An empty sample yields NaN everywhere; a singleton
/// has a mean but no deviation. Quartiles interpolate linearly between order
/// statistics, so `min <= q25 <= median <= q75 <= max` holds for any
/// non-empty input.
pub fn describe(xs: &[f64]) -> ColumnSummary {
    let mut w = Welford::new();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in xs {
        w.update(x);
        min = min.min(x);
        max = max.max(x);
    }
    if xs.is_empty() {
        min = f64::NAN;
        max = f64::NAN;
    }
    ColumnSummary {
        count: xs.len(),
        mean: w.mean(),
        std: w.stddev_sample(),
        min,
        q25: quantile(xs.to_vec(), 0.25),
        median: quantile(xs.to_vec(), 0.50),
        q75: quantile(xs.to_vec(), 0.75),
        max,
    }
}
