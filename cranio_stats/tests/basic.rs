use approx::assert_abs_diff_eq;
use cranio_stats::{mean, median, quantile, stddev_sample, variance_sample};

#[test]
fn mean_median_stddev() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    assert_abs_diff_eq!(mean(&xs), 2.5, epsilon = 1e-12);
    assert_abs_diff_eq!(median(xs.to_vec()), 2.5, epsilon = 1e-12);
    // Sample stddev for [1,2,3,4] is sqrt(1.6666...) ~ 1.29099
    assert_abs_diff_eq!(stddev_sample(&xs), 1.2909944487358056, epsilon = 1e-12);
    assert_abs_diff_eq!(variance_sample(&xs), 5.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn degenerate_samples_are_nan() {
    assert!(mean(&[]).is_nan());
    assert!(median(Vec::new()).is_nan());
    assert!(stddev_sample(&[1.0]).is_nan());
    assert!(quantile(Vec::new(), 0.5).is_nan());
    assert!(quantile(vec![1.0, 2.0], 1.5).is_nan());
}

#[test]
fn quantile_interpolates_linearly() {
    let xs = vec![1.0, 2.0, 3.0, 4.0];
    assert_abs_diff_eq!(quantile(xs.clone(), 0.0), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(quantile(xs.clone(), 0.25), 1.75, epsilon = 1e-12);
    assert_abs_diff_eq!(quantile(xs.clone(), 0.5), 2.5, epsilon = 1e-12);
    assert_abs_diff_eq!(quantile(xs.clone(), 0.75), 3.25, epsilon = 1e-12);
    assert_abs_diff_eq!(quantile(xs, 1.0), 4.0, epsilon = 1e-12);
}

#[test]
fn quantile_does_not_require_sorted_input() {
    let shuffled = vec![3.0, 1.0, 4.0, 2.0];
    assert_abs_diff_eq!(quantile(shuffled, 0.5), 2.5, epsilon = 1e-12);
}
