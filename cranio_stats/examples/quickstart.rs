use cranio_stats::{describe, t_interval_mean, welch_t_test};

fn main() {
    let etruscans = [141.0, 148.0, 132.0, 138.0, 154.0, 142.0, 150.0];
    let italians = [133.0, 138.0, 130.0, 138.0, 134.0];

    let s = describe(&etruscans);
    println!("n={} mean={:.2} std={:.2}", s.count, s.mean, s.std);

    let (lo, hi) = t_interval_mean(&etruscans, 0.95);
    println!("95% t-interval for the mean: ({lo:.2}, {hi:.2})");

    let res = welch_t_test(&etruscans, &italians);
    println!("t={:.3} df={:.1} p={:.4}", res.t_stat, res.df, res.p_value);
}
