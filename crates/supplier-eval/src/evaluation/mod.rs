//! Supplier scoring, risk assessment, and ranking.
//!
//! Every evaluation is a full recomputation over the records handed in. The
//! only state written back is the pair of derived fields on [`Supplier`]
//! (`overall_score`, `risk_level`), so callers should pass per-request copies.

mod config;
mod domain;
pub mod performance;
pub mod ranking;
pub mod risk;
pub mod scoring;
pub mod validation;

#[cfg(test)]
mod tests;

pub use config::{
    CostPolicy, EvaluationConfig, RiskThresholds, ScoringWeights, CAPABILITY_WEIGHT,
    COST_TOLERANCE_MULTIPLIER, COST_WEIGHT, FULL_COST_SCORE, HIGH_PERFORMANCE_RISK_BELOW,
    LOW_RISK_MIN_COUNTRIES, MEDIUM_PERFORMANCE_RISK_BELOW, MEDIUM_RISK_COUNTRIES,
    PARTIAL_COST_SCORE, PERFORMANCE_WEIGHT, REGION_WEIGHT,
};
pub use domain::{
    Capability, ContactInfo, CostAlignment, CostModel, EvaluationCriteria, PerformanceRating,
    RankedSupplier, Region, RiskLevel, ScoringResult, Supplier,
};
pub use performance::{aggregate_ratings, compute_overall_score, ensure_overall_score};
pub use ranking::rank_suppliers;
pub use risk::{assess_risk, RiskAssessment};
pub use scoring::calculate_fit_score;
pub use validation::{validate_criteria, validate_supplier, ValidationError};

/// Stateless evaluator that applies one policy configuration to suppliers.
#[derive(Debug, Clone, Default)]
pub struct SupplierEvaluator {
    config: EvaluationConfig,
}

impl SupplierEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn assess(&self, supplier: &mut Supplier) -> RiskAssessment {
        risk::assess(supplier, &self.config.risk)
    }

    pub fn assess_risk(&self, supplier: &mut Supplier) -> RiskLevel {
        risk::assess_risk_with(supplier, &self.config.risk)
    }

    pub fn score(&self, supplier: &mut Supplier, criteria: &EvaluationCriteria) -> ScoringResult {
        scoring::calculate_fit_score(supplier, criteria, &self.config)
    }

    pub fn rank(
        &self,
        suppliers: Vec<Supplier>,
        criteria: &EvaluationCriteria,
    ) -> Vec<RankedSupplier> {
        ranking::rank_with(suppliers, criteria, &self.config)
    }
}
