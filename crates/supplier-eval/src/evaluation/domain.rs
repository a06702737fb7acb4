use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service capability offered by a supplier under one category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capability {
    pub category: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Capability {
    pub fn new<I, S>(category: impl Into<String>, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            services: services.into_iter().map(Into::into).collect(),
            certifications: Vec::new(),
        }
    }

    pub fn with_certification(mut self, certification: impl Into<String>) -> Self {
        self.certifications.push(certification.into());
        self
    }
}

/// Geographic footprint entry. Matching is country first, then state/province.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub country: String,
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub service_radius_km: Option<f64>,
}

impl Region {
    pub fn country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    pub fn with_state(country: impl Into<String>, state_province: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            state_province: Some(state_province.into()),
            service_radius_km: None,
        }
    }
}

/// Quoted unit price for one item or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    pub item_name: String,
    pub unit_cost: f64,
    pub currency: String,
    #[serde(default)]
    pub bulk_discount_available: bool,
}

/// Time-bounded performance observation with component scores on [0, 10].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRating {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub quality_score: f64,
    pub timeliness_score: f64,
    pub communication_score: f64,
    #[serde(default)]
    pub reviewer_comments: Option<String>,
}

impl PerformanceRating {
    /// Equal-thirds average of the three component scores.
    pub fn period_average(&self) -> f64 {
        (self.quality_score + self.timeliness_score + self.communication_score) / 3.0
    }
}

/// Supplier contact metadata. Carried through evaluation untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Qualitative supplier risk, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// How a supplier's unit cost compares to the buyer's target price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostAlignment {
    None,
    Low,
    Medium,
    High,
}

impl CostAlignment {
    pub const fn label(self) -> &'static str {
        match self {
            CostAlignment::None => "None",
            CostAlignment::Low => "Low",
            CostAlignment::Medium => "Medium",
            CostAlignment::High => "High",
        }
    }
}

/// Supplier record plus the two derived fields (`overall_score`, `risk_level`).
///
/// The derived fields are cache-like: they are always recomputable from the
/// ratings and regions, and the evaluation functions write them in place. Hand
/// each evaluation its own copy rather than sharing one record across callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub pricing: Vec<CostModel>,
    #[serde(default)]
    pub ratings: Vec<PerformanceRating>,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
}

impl Supplier {
    /// Pooled service names across every capability entry.
    pub fn services(&self) -> BTreeSet<&str> {
        self.capabilities
            .iter()
            .flat_map(|capability| capability.services.iter().map(String::as_str))
            .collect()
    }

    /// Distinct countries in the supplier's footprint; state/province is ignored.
    pub fn distinct_countries(&self) -> usize {
        self.regions
            .iter()
            .map(|region| region.country.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// First cost entry quoting `item_name` in `currency`, in listed order.
    pub fn cost_for(&self, item_name: &str, currency: &str) -> Option<&CostModel> {
        self.pricing
            .iter()
            .find(|cost| cost.item_name == item_name && cost.currency == currency)
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn with_cost(mut self, cost: CostModel) -> Self {
        self.pricing.push(cost);
        self
    }

    pub fn with_rating(mut self, rating: PerformanceRating) -> Self {
        self.ratings.push(rating);
        self
    }

    /// Seed `overall_score` directly, as imported catalogs do.
    pub fn with_overall_score(mut self, score: f64) -> Self {
        self.overall_score = Some(score);
        self
    }
}

/// Buyer requirement a supplier is evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCriteria {
    #[serde(default)]
    pub required_capabilities: BTreeSet<String>,
    pub target_region: Region,
    pub target_price: f64,
    pub target_currency: String,
    pub required_item: String,
}

/// Fit score with its four unweighted sub-scores, all on [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub total_score: f64,
    pub cost_alignment: CostAlignment,
    pub capability_score: f64,
    pub cost_score: f64,
    pub region_score: f64,
    pub performance_score: f64,
}

/// One row of a ranking: fit, risk, cost alignment and the supplier snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSupplier {
    pub supplier_name: String,
    pub fit_score: f64,
    pub risk_level: RiskLevel,
    pub cost_alignment: CostAlignment,
    pub details: Supplier,
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
