//! End-to-end checks over the shipped skull-breadth dataset: 84 Etruscan
//! and 70 Italian maximum skull breadths, the worked example the whole
//! toolkit is pinned against.

use approx::assert_abs_diff_eq;
use cranio_data::{load_csv, melt};
use cranio_stats::{describe, t_interval_mean, variance_exceeds, welch_t_test};
use tests::data_path;

#[test]
fn fixture_loads_with_expected_shape() {
    let table = load_csv(data_path("skulls.csv")).unwrap();
    assert_eq!(table.n_columns(), 2);
    assert_eq!(table.n_rows(), 84);
    assert_eq!(table.column_names(), vec!["Etruscans", "Italians"]);

    let etr = table.column("Etruscans").unwrap();
    let ita = table.column("Italians").unwrap();
    assert_eq!(etr.count_non_missing(), 84);
    assert_eq!(ita.count_non_missing(), 70);
}

#[test]
fn melt_preserves_non_missing_cardinality() {
    let table = load_csv(data_path("skulls.csv")).unwrap();
    let long = melt(&table);
    assert_eq!(long.len(), 84 + 70);
    assert_eq!(long.groups(), vec!["Etruscans", "Italians"]);
    assert_eq!(long.group_sizes("Etruscans").len(), 84);
    assert!(long.rows().iter().all(|r| r.size > 0));
}

#[test]
fn describe_matches_the_published_summaries() {
    let table = load_csv(data_path("skulls.csv")).unwrap();

    let etr = describe(&table.column("Etruscans").unwrap().non_missing());
    assert_eq!(etr.count, 84);
    assert_abs_diff_eq!(etr.mean, 143.77380952380952, epsilon = 1e-9);
    assert_abs_diff_eq!(etr.std, 5.970512259260548, epsilon = 1e-9);
    assert_eq!(etr.min, 126.0);
    assert_abs_diff_eq!(etr.q25, 140.0, epsilon = 1e-9);
    assert_abs_diff_eq!(etr.median, 143.5, epsilon = 1e-9);
    assert_abs_diff_eq!(etr.q75, 148.0, epsilon = 1e-9);
    assert_eq!(etr.max, 158.0);

    let ita = describe(&table.column("Italians").unwrap().non_missing());
    assert_eq!(ita.count, 70);
    assert_abs_diff_eq!(ita.mean, 132.44285714285715, epsilon = 1e-9);
    assert_abs_diff_eq!(ita.std, 5.749948239932666, epsilon = 1e-9);
    assert_eq!(ita.min, 116.0);
    assert_abs_diff_eq!(ita.q75, 136.75, epsilon = 1e-9);
    assert_eq!(ita.max, 148.0);

    for s in [&etr, &ita] {
        assert!(s.min <= s.q25 && s.q25 <= s.median);
        assert!(s.median <= s.q75 && s.q75 <= s.max);
    }
}

#[test]
fn etruscan_variance_exceeds_italian() {
    let table = load_csv(data_path("skulls.csv")).unwrap();
    let etr = table.column("Etruscans").unwrap().non_missing();
    let ita = table.column("Italians").unwrap().non_missing();
    assert!(variance_exceeds(&etr, &ita));
}

#[test]
fn t_intervals_match_the_reference_values() {
    let table = load_csv(data_path("skulls.csv")).unwrap();
    let etr = table.column("Etruscans").unwrap().non_missing();
    let ita = table.column("Italians").unwrap().non_missing();

    let (lo_e, hi_e) = t_interval_mean(&etr, 0.95);
    assert_abs_diff_eq!(lo_e, 142.47812893485786, epsilon = 1e-6);
    assert_abs_diff_eq!(hi_e, 145.06949011276117, epsilon = 1e-6);

    let (lo_i, hi_i) = t_interval_mean(&ita, 0.95);
    assert_abs_diff_eq!(lo_i, 131.0718303799465, epsilon = 1e-6);
    assert_abs_diff_eq!(hi_i, 133.8138839057678, epsilon = 1e-6);

    // The two population intervals do not even overlap.
    assert!(lo_e > hi_i);
}

#[test]
fn welch_test_finds_the_populations_differ() {
    let table = load_csv(data_path("skulls.csv")).unwrap();
    let etr = table.column("Etruscans").unwrap().non_missing();
    let ita = table.column("Italians").unwrap().non_missing();

    let res = welch_t_test(&etr, &ita);
    assert_abs_diff_eq!(res.t_stat, 11.965948989249831, epsilon = 1e-9);
    assert_abs_diff_eq!(res.df, 148.8193074065703, epsilon = 1e-6);
    assert!(res.p_value >= 0.0);
    assert!(res.p_value < 1e-3, "p = {}", res.p_value);
}

#[test]
fn swapping_group_labels_negates_t_only() {
    let table = load_csv(data_path("skulls.csv")).unwrap();
    let etr = table.column("Etruscans").unwrap().non_missing();
    let ita = table.column("Italians").unwrap().non_missing();

    let fwd = welch_t_test(&etr, &ita);
    let rev = welch_t_test(&ita, &etr);
    assert_abs_diff_eq!(fwd.t_stat, -rev.t_stat, epsilon = 1e-12);
    assert_abs_diff_eq!(fwd.df, rev.df, epsilon = 1e-12);
    assert_abs_diff_eq!(fwd.p_value, rev.p_value, epsilon = 1e-12);
}
