use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::{mean, stddev_sample, variance_sample};

/// Result of a two-sided Welch two-sample t-test.
#[derive(Debug, Clone, Serialize)]
pub struct WelchTTest {
    pub t_stat: f64,
    pub df: f64,
    pub p_value: f64,
}

/// Whether the sample variance of `a` strictly exceeds that of `b`.
/// False when either variance is undefined (fewer than two values).
pub fn variance_exceeds(a: &[f64], b: &[f64]) -> bool {
    let va = variance_sample(a);
    let vb = variance_sample(b);
    va.is_finite() && vb.is_finite() && va > vb
}

/// Welch's t-test (unequal variances), two-sided.
///
/// The statistic uses separately estimated variances and the
/// Welch-Satterthwaite degrees-of-freedom approximation; no pooled form is
/// ever substituted, whatever the variance comparison says. Inputs are the
/// per-group samples with their own missing values already dropped.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> WelchTTest {
    let ma = mean(a);
    let mb = mean(b);
    let sa = stddev_sample(a);
    let sb = stddev_sample(b);
    let na = a.len() as f64;
    let nb = b.len() as f64;

    let se2 = sa.powi(2) / na + sb.powi(2) / nb;
    let t = if se2 == 0.0 {
        0.0
    } else {
        (ma - mb) / se2.sqrt()
    };

    let num = se2.powi(2);
    let den = (sa.powi(2) / na).powi(2) / (na - 1.0) + (sb.powi(2) / nb).powi(2) / (nb - 1.0);
    let df = if den == 0.0 { f64::INFINITY } else { num / den };

    WelchTTest {
        t_stat: t,
        df,
        p_value: two_sided_p(t, df),
    }
}

fn two_sided_p(t: f64, df: f64) -> f64 {
    if !t.is_finite() || !df.is_finite() || df <= 0.0 {
        return f64::NAN;
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * (1.0 - dist.cdf(t.abs())),
        Err(_) => f64::NAN,
    }
}
