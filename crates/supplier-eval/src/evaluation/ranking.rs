use std::cmp::Ordering;

use tracing::debug;

use super::config::EvaluationConfig;
use super::domain::{EvaluationCriteria, RankedSupplier, Supplier};
use super::risk::assess_risk_with;
use super::scoring::calculate_fit_score;

/// Score and risk-assess every supplier, then order them by fit, best first.
///
/// Risk is recomputed for each supplier regardless of any stored level. The
/// sort is stable, so equal fit scores keep their input order.
pub fn rank_with(
    suppliers: Vec<Supplier>,
    criteria: &EvaluationCriteria,
    config: &EvaluationConfig,
) -> Vec<RankedSupplier> {
    let mut ranked: Vec<RankedSupplier> = suppliers
        .into_iter()
        .map(|mut supplier| {
            let risk_level = assess_risk_with(&mut supplier, &config.risk);
            let result = calculate_fit_score(&mut supplier, criteria, config);

            debug!(
                supplier = %supplier.name,
                fit_score = result.total_score,
                risk = risk_level.label(),
                cost_alignment = result.cost_alignment.label(),
                "supplier scored"
            );

            RankedSupplier {
                supplier_name: supplier.name.clone(),
                fit_score: result.total_score,
                risk_level,
                cost_alignment: result.cost_alignment,
                details: supplier,
            }
        })
        .collect();

    ranked.sort_by(|left, right| {
        right
            .fit_score
            .partial_cmp(&left.fit_score)
            .unwrap_or(Ordering::Equal)
    });

    debug!(
        suppliers = ranked.len(),
        item = %criteria.required_item,
        "ranking complete"
    );

    ranked
}

pub fn rank_suppliers(
    suppliers: Vec<Supplier>,
    criteria: &EvaluationCriteria,
) -> Vec<RankedSupplier> {
    rank_with(suppliers, criteria, &EvaluationConfig::default())
}
