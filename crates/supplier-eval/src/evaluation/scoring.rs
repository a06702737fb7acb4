use std::collections::BTreeSet;

use super::config::{CostPolicy, EvaluationConfig};
use super::domain::{
    round_to_hundredths, CostAlignment, EvaluationCriteria, Region, ScoringResult, Supplier,
};
use super::performance::ensure_overall_score;

const MAX_SCORE: f64 = 100.0;

/// Share of the required services the supplier offers, scaled to [0, 100].
pub fn capability_score(supplier: &Supplier, required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return MAX_SCORE;
    }

    let offered = supplier.services();
    let matched = required
        .iter()
        .filter(|service| offered.contains(service.as_str()))
        .count();

    matched as f64 / required.len() as f64 * MAX_SCORE
}

/// Score the first cost entry matching the required item and currency.
///
/// No currency conversion: a quote in another currency counts as missing.
pub fn cost_score(
    supplier: &Supplier,
    criteria: &EvaluationCriteria,
    policy: &CostPolicy,
) -> (f64, CostAlignment) {
    let Some(cost) = supplier.cost_for(&criteria.required_item, &criteria.target_currency) else {
        return (0.0, CostAlignment::None);
    };

    if cost.unit_cost <= criteria.target_price {
        (policy.full_score, CostAlignment::High)
    } else if cost.unit_cost <= policy.tolerance_ceiling(criteria.target_price) {
        (policy.partial_score, CostAlignment::Medium)
    } else {
        (0.0, CostAlignment::Low)
    }
}

/// A blank target state is no state requirement at all.
pub fn region_score(supplier: &Supplier, target: &Region) -> f64 {
    let target_state = target
        .state_province
        .as_ref()
        .filter(|state| !state.is_empty());

    let covered = supplier.regions.iter().any(|region| {
        region.country == target.country
            && match target_state {
                Some(state) => region.state_province.as_ref() == Some(state),
                None => true,
            }
    });

    if covered {
        MAX_SCORE
    } else {
        0.0
    }
}

/// `overall_score` on [0, 10] mapped to [0, 100]; unrated suppliers score 0.
pub fn performance_score(overall_score: Option<f64>) -> f64 {
    overall_score.unwrap_or(0.0) * 10.0
}

/// Weighted fit of one supplier against one set of criteria.
pub fn calculate_fit_score(
    supplier: &mut Supplier,
    criteria: &EvaluationCriteria,
    config: &EvaluationConfig,
) -> ScoringResult {
    let capability_score = capability_score(supplier, &criteria.required_capabilities);
    let (cost_score, cost_alignment) = cost_score(supplier, criteria, &config.cost);
    let region_score = region_score(supplier, &criteria.target_region);
    let performance_score = performance_score(ensure_overall_score(supplier));

    let weights = &config.weights;
    let total_score = capability_score * weights.capability
        + cost_score * weights.cost
        + region_score * weights.region
        + performance_score * weights.performance;

    ScoringResult {
        total_score: round_to_hundredths(total_score),
        cost_alignment,
        capability_score,
        cost_score,
        region_score,
        performance_score,
    }
}
