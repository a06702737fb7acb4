use serde::{Deserialize, Serialize};

use super::config::RiskThresholds;
use super::domain::{RiskLevel, Supplier};
use super::performance::ensure_overall_score;

/// Both risk sub-assessments and their combined level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub performance: RiskLevel,
    pub geographic: RiskLevel,
    pub level: RiskLevel,
    pub overall_score: Option<f64>,
    pub distinct_countries: usize,
}

pub fn performance_risk(overall_score: Option<f64>, thresholds: &RiskThresholds) -> RiskLevel {
    match overall_score {
        None => RiskLevel::High,
        Some(score) if score < thresholds.high_performance_below => RiskLevel::High,
        Some(score) if score < thresholds.medium_performance_below => RiskLevel::Medium,
        Some(_) => RiskLevel::Low,
    }
}

pub fn geographic_risk(distinct_countries: usize, thresholds: &RiskThresholds) -> RiskLevel {
    if distinct_countries >= thresholds.low_risk_min_countries {
        RiskLevel::Low
    } else if distinct_countries >= thresholds.medium_risk_countries {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Derive the assessment without touching `risk_level`; only the lazy
/// `overall_score` computation may write to the supplier.
pub fn assess(supplier: &mut Supplier, thresholds: &RiskThresholds) -> RiskAssessment {
    let overall_score = ensure_overall_score(supplier);
    let distinct_countries = supplier.distinct_countries();

    let performance = performance_risk(overall_score, thresholds);
    let geographic = geographic_risk(distinct_countries, thresholds);

    RiskAssessment {
        performance,
        geographic,
        level: performance.max(geographic),
        overall_score,
        distinct_countries,
    }
}

/// Assess risk with the given thresholds and store the level on the supplier.
pub fn assess_risk_with(supplier: &mut Supplier, thresholds: &RiskThresholds) -> RiskLevel {
    let assessment = assess(supplier, thresholds);
    supplier.risk_level = Some(assessment.level);
    assessment.level
}

pub fn assess_risk(supplier: &mut Supplier) -> RiskLevel {
    assess_risk_with(supplier, &RiskThresholds::default())
}
