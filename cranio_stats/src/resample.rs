//! Resampling cross-checks: bootstrap intervals and permutation tests
use rand::prelude::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::mean;

/// Percentile bootstrap confidence interval for a statistic over a sample.
/// Returns NaN bounds for an empty sample, zero resamples, or a confidence
/// level outside (0, 1).
pub fn bootstrap_ci(
    data: &[f64],
    statistic: fn(&[f64]) -> f64,
    n_bootstrap: usize,
    confidence: f64,
) -> (f64, f64) {
    if data.is_empty() || n_bootstrap == 0 || !(confidence > 0.0 && confidence < 1.0) {
        return (f64::NAN, f64::NAN);
    }
    let alpha = (1.0 - confidence) / 2.0;

    let mut rng = StdRng::from_entropy();
    let n = data.len();
    let mut stats = Vec::with_capacity(n_bootstrap);
    let mut resample = vec![0.0f64; n];

    for _ in 0..n_bootstrap {
        for slot in resample.iter_mut() {
            *slot = data[rng.gen_range(0..n)];
        }
        stats.push(statistic(&resample));
    }

    stats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let lo = ((alpha * n_bootstrap as f64).floor() as usize).min(n_bootstrap - 1);
    let hi = (((1.0 - alpha) * n_bootstrap as f64).ceil() as usize)
        .saturating_sub(1)
        .min(n_bootstrap - 1);
    (stats[lo], stats[hi])
}

/// Two-sample permutation test for the difference in means: the proportion
/// of label shuffles whose |mean difference| reaches the observed one
/// (two-sided, add-one smoothing). Distribution-free companion to the
/// Welch test. NaN when either sample is empty or no permutations are run.
pub fn permutation_test_diff_means(a: &[f64], b: &[f64], n_perm: usize) -> f64 {
    if a.is_empty() || b.is_empty() || n_perm == 0 {
        return f64::NAN;
    }
    let observed = mean(a) - mean(b);
    let mut pool = Vec::with_capacity(a.len() + b.len());
    pool.extend_from_slice(a);
    pool.extend_from_slice(b);

    let mut rng = StdRng::from_entropy();
    let mut extreme = 0usize;
    for _ in 0..n_perm {
        pool.shuffle(&mut rng);
        let (pa, pb) = pool.split_at(a.len());
        if (mean(pa) - mean(pb)).abs() >= observed.abs() {
            extreme += 1;
        }
    }
    (extreme as f64 + 1.0) / (n_perm as f64 + 1.0)
}
