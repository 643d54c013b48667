use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::{mean, stddev_sample};

/// Two-sided Student-t confidence interval for the mean of a sample.
///
/// Builds a t distribution with n-1 degrees of freedom, location at the
/// sample mean and scale s/sqrt(n), and reports its central `confidence`
/// mass, e.g. the 2.5th and 97.5th percentiles at 0.95. Returns NaN bounds
/// when the sample has fewer than two values or `confidence` is not in
/// (0, 1); a zero-spread sample collapses to a point interval.
pub fn t_interval_mean(xs: &[f64], confidence: f64) -> (f64, f64) {
    let n = xs.len();
    if n < 2 || !(confidence > 0.0 && confidence < 1.0) {
        return (f64::NAN, f64::NAN);
    }
    let m = mean(xs);
    let se = stddev_sample(xs) / (n as f64).sqrt();
    if se == 0.0 {
        return (m, m);
    }
    let dist = match StudentsT::new(m, se, (n - 1) as f64) {
        Ok(d) => d,
        Err(_) => return (f64::NAN, f64::NAN),
    };
    let alpha = (1.0 - confidence) / 2.0;
    (dist.inverse_cdf(alpha), dist.inverse_cdf(1.0 - alpha))
}
