use super::domain::{round_to_hundredths, PerformanceRating, Supplier};

/// Mean of the per-period averages, rounded to two decimals. `None` without ratings.
pub fn aggregate_ratings(ratings: &[PerformanceRating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }

    let total: f64 = ratings.iter().map(PerformanceRating::period_average).sum();
    Some(round_to_hundredths(total / ratings.len() as f64))
}

/// Recompute `overall_score` from the ratings and store it on the supplier.
///
/// A supplier without ratings yields `None` and keeps whatever score it was
/// seeded with; otherwise the stored value is always overwritten.
pub fn compute_overall_score(supplier: &mut Supplier) -> Option<f64> {
    let score = aggregate_ratings(&supplier.ratings)?;
    supplier.overall_score = Some(score);
    Some(score)
}

/// Return the stored `overall_score`, computing it first when absent.
pub fn ensure_overall_score(supplier: &mut Supplier) -> Option<f64> {
    match supplier.overall_score {
        Some(score) => Some(score),
        None => compute_overall_score(supplier),
    }
}
