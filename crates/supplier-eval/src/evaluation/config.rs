use serde::{Deserialize, Serialize};

pub const CAPABILITY_WEIGHT: f64 = 0.40;
pub const COST_WEIGHT: f64 = 0.30;
pub const REGION_WEIGHT: f64 = 0.20;
pub const PERFORMANCE_WEIGHT: f64 = 0.10;

/// Unit cost up to `target_price * COST_TOLERANCE_MULTIPLIER` (inclusive) is a partial match.
pub const COST_TOLERANCE_MULTIPLIER: f64 = 1.10;
pub const FULL_COST_SCORE: f64 = 100.0;
pub const PARTIAL_COST_SCORE: f64 = 50.0;

pub const HIGH_PERFORMANCE_RISK_BELOW: f64 = 5.0;
pub const MEDIUM_PERFORMANCE_RISK_BELOW: f64 = 8.0;
pub const MEDIUM_RISK_COUNTRIES: usize = 2;
pub const LOW_RISK_MIN_COUNTRIES: usize = 3;

/// Relative weight of each sub-score in the fit score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub capability: f64,
    pub cost: f64,
    pub region: f64,
    pub performance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            capability: CAPABILITY_WEIGHT,
            cost: COST_WEIGHT,
            region: REGION_WEIGHT,
            performance: PERFORMANCE_WEIGHT,
        }
    }
}

/// Price bands used for cost alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPolicy {
    pub tolerance_multiplier: f64,
    pub full_score: f64,
    pub partial_score: f64,
}

impl CostPolicy {
    pub fn tolerance_ceiling(&self, target_price: f64) -> f64 {
        target_price * self.tolerance_multiplier
    }
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self {
            tolerance_multiplier: COST_TOLERANCE_MULTIPLIER,
            full_score: FULL_COST_SCORE,
            partial_score: PARTIAL_COST_SCORE,
        }
    }
}

/// Cut-offs for the performance and geographic-concentration risk checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub high_performance_below: f64,
    pub medium_performance_below: f64,
    pub medium_risk_countries: usize,
    pub low_risk_min_countries: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_performance_below: HIGH_PERFORMANCE_RISK_BELOW,
            medium_performance_below: MEDIUM_PERFORMANCE_RISK_BELOW,
            medium_risk_countries: MEDIUM_RISK_COUNTRIES,
            low_risk_min_countries: LOW_RISK_MIN_COUNTRIES,
        }
    }
}

/// Policy bundle consumed by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub weights: ScoringWeights,
    pub cost: CostPolicy,
    pub risk: RiskThresholds,
}
