use approx::assert_abs_diff_eq;
use cranio_stats::{t_interval_mean, variance_exceeds, welch_t_test};

#[test]
fn welch_small_sample_matches_reference() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [2.0, 3.0, 4.0, 5.0];
    let res = welch_t_test(&a, &b);
    // Reference values from the closed form: t = -1/sqrt(5/6), df = 6.
    assert_abs_diff_eq!(res.t_stat, -1.0954451150103321, epsilon = 1e-12);
    assert_abs_diff_eq!(res.df, 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(res.p_value, 0.3153335962012299, epsilon = 1e-9);
}

#[test]
fn swapping_groups_negates_t_and_keeps_p() {
    let a = [141.0, 148.0, 132.0, 138.0, 154.0, 142.0, 150.0];
    let b = [133.0, 138.0, 130.0, 138.0, 134.0];
    let ab = welch_t_test(&a, &b);
    let ba = welch_t_test(&b, &a);
    assert_abs_diff_eq!(ab.t_stat, -ba.t_stat, epsilon = 1e-12);
    assert_abs_diff_eq!(ab.df, ba.df, epsilon = 1e-12);
    assert_abs_diff_eq!(ab.p_value, ba.p_value, epsilon = 1e-12);
}

#[test]
fn test_is_invariant_to_row_order() {
    let a = [141.0, 148.0, 132.0, 138.0, 154.0, 142.0];
    let mut a_rev = a;
    a_rev.reverse();
    let b = [133.0, 138.0, 130.0, 138.0];
    let mut b_rev = b;
    b_rev.reverse();

    let fwd = welch_t_test(&a, &b);
    let rev = welch_t_test(&a_rev, &b_rev);
    assert_abs_diff_eq!(fwd.t_stat, rev.t_stat, epsilon = 1e-9);
    assert_abs_diff_eq!(fwd.p_value, rev.p_value, epsilon = 1e-9);
}

#[test]
fn degenerate_groups_surface_nan() {
    let res = welch_t_test(&[], &[1.0, 2.0]);
    assert!(res.t_stat.is_nan());
    assert!(res.p_value.is_nan());

    let single = welch_t_test(&[1.0], &[1.0, 2.0]);
    assert!(single.df.is_nan() || single.p_value.is_nan());
}

#[test]
fn variance_comparison_is_strict_and_nan_safe() {
    let wide = [100.0, 150.0, 120.0, 180.0];
    let tight = [130.0, 131.0, 132.0, 133.0];
    assert!(variance_exceeds(&wide, &tight));
    assert!(!variance_exceeds(&tight, &wide));
    assert!(!variance_exceeds(&tight, &tight));
    assert!(!variance_exceeds(&[], &tight));
}

#[test]
fn t_interval_matches_reference_small_sample() {
    // n = 4, mean 2.5, s = 1.29099..., t(0.975; 3) = 3.1824463...
    let xs = [1.0, 2.0, 3.0, 4.0];
    let (lo, hi) = t_interval_mean(&xs, 0.95);
    assert_abs_diff_eq!(lo, 0.4457397432394812, epsilon = 1e-8);
    assert_abs_diff_eq!(hi, 4.554260256760519, epsilon = 1e-8);
}

#[test]
fn t_interval_is_symmetric_about_the_mean() {
    let xs = [141.0, 148.0, 132.0, 138.0, 154.0, 142.0, 150.0, 146.0];
    let m = cranio_stats::mean(&xs);
    let (lo, hi) = t_interval_mean(&xs, 0.95);
    assert_abs_diff_eq!(m - lo, hi - m, epsilon = 1e-9);
    assert!(lo < m && m < hi);
}

#[test]
fn t_interval_widens_with_standard_error() {
    let tight = [140.0, 141.0, 142.0, 143.0, 144.0];
    // Same mean, doubled spread.
    let wide = [138.0, 140.0, 142.0, 144.0, 146.0];
    let (lo_t, hi_t) = t_interval_mean(&tight, 0.95);
    let (lo_w, hi_w) = t_interval_mean(&wide, 0.95);
    assert!(hi_w - lo_w > hi_t - lo_t);
}

#[test]
fn t_interval_degenerate_inputs() {
    assert!(t_interval_mean(&[], 0.95).0.is_nan());
    assert!(t_interval_mean(&[1.0], 0.95).0.is_nan());
    assert!(t_interval_mean(&[1.0, 2.0], 1.5).0.is_nan());
    // zero spread collapses to a point
    let (lo, hi) = t_interval_mean(&[3.0, 3.0, 3.0], 0.95);
    assert_eq!((lo, hi), (3.0, 3.0));
}
