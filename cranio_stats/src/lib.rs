//! Statistical core of the cranio toolkit.
//!
//! Everything operates on plain `f64` slices that have already had their
//! missing values dropped (each group independently, so unequal sample
//! sizes are fine). Degenerate inputs surface as NaN rather than panics:
//! an empty sample has no mean, a singleton has no sample deviation.
//!
//! Welch test with p-value (example ignored in doctest):
//! ```ignore
//! use cranio_stats::welch_t_test;
//! let etruscans = [141.0, 148.0, 132.0, 138.0, 154.0];
//! let italians = [133.0, 138.0, 130.0, 138.0, 134.0];
//! let res = welch_t_test(&etruscans, &italians);
//! println!("t={:.3} df={:.1} p={:.4}", res.t_stat, res.df, res.p_value);
//! ```

mod describe;
mod interval;
mod moments;
mod probplot;
mod resample;
mod ttest;

pub use describe::*;
pub use interval::*;
pub use moments::*;
pub use probplot::*;
pub use resample::*;
pub use ttest::*;

pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

pub fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        (xs[n / 2 - 1] + xs[n / 2]) / 2.0
    }
}

/// Unbiased sample variance (n-1 denominator)
pub fn variance_sample(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / ((n as f64) - 1.0)
}

/// Unbiased sample standard deviation (n-1 denominator)
pub fn stddev_sample(xs: &[f64]) -> f64 {
    variance_sample(xs).sqrt()
}

/// Quantile with linear interpolation between order statistics, `q` in
/// [0, 1]. Matches the convention of the classic describe() table.
pub fn quantile(mut xs: Vec<f64>, q: f64) -> f64 {
    if xs.is_empty() || !(0.0..=1.0).contains(&q) {
        return f64::NAN;
    }
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let h = ((xs.len() - 1) as f64) * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    xs[lo] + (xs[hi] - xs[lo]) * (h - lo as f64)
}
