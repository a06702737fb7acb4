use super::common::*;
use crate::evaluation::{aggregate_ratings, compute_overall_score, ensure_overall_score};

#[test]
fn averages_component_scores_in_equal_thirds() {
    let ratings = vec![rating(9.5, 8.0, 9.0)];
    assert_eq!(aggregate_ratings(&ratings), Some(8.83));
}

#[test]
fn averages_periods_without_weighting_by_length() {
    let mut long = rating(6.0, 6.0, 6.0);
    long.period_start = date(2020, 1, 1);
    let short = rating(9.0, 9.0, 9.0);

    assert_eq!(aggregate_ratings(&[long, short]), Some(7.5));
}

#[test]
fn rounds_to_two_decimals() {
    let ratings = vec![rating(6.0, 5.0, 6.0)];
    assert_eq!(aggregate_ratings(&ratings), Some(5.67));
}

#[test]
fn no_ratings_means_no_score() {
    assert_eq!(aggregate_ratings(&[]), None);

    let mut supplier = bare_supplier("Unrated");
    assert_eq!(compute_overall_score(&mut supplier), None);
    assert_eq!(supplier.overall_score, None);
}

#[test]
fn recomputation_overwrites_a_seeded_score() {
    let mut supplier = machining_supplier().with_overall_score(2.0);

    assert_eq!(compute_overall_score(&mut supplier), Some(9.0));
    assert_eq!(supplier.overall_score, Some(9.0));
}

#[test]
fn seeded_score_survives_when_there_is_nothing_to_recompute() {
    let mut supplier = bare_supplier("Imported").with_overall_score(7.25);

    assert_eq!(compute_overall_score(&mut supplier), None);
    assert_eq!(supplier.overall_score, Some(7.25));
}

#[test]
fn ensure_only_computes_when_absent() {
    let mut seeded = machining_supplier().with_overall_score(4.0);
    assert_eq!(ensure_overall_score(&mut seeded), Some(4.0));

    let mut fresh = machining_supplier();
    assert_eq!(ensure_overall_score(&mut fresh), Some(9.0));
    assert_eq!(fresh.overall_score, Some(9.0));
}
