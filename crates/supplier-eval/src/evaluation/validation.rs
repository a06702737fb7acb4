use std::collections::BTreeSet;

use chrono::NaiveDate;
use uuid::Uuid;

use super::domain::{ContactInfo, CostModel, EvaluationCriteria, PerformanceRating, Region, Supplier};

const MIN_COMPONENT_SCORE: f64 = 0.0;
const MAX_COMPONENT_SCORE: f64 = 10.0;
const CURRENCY_CODE_LEN: usize = 3;

/// Record-construction failures. Evaluation itself never produces these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("supplier name must not be empty")]
    EmptyName,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("unit cost for '{item}' must be greater than zero (found {found})")]
    NonPositiveCost { item: String, found: f64 },
    #[error("currency code must be exactly three letters (found '{0}')")]
    InvalidCurrency(String),
    #[error("{field} must be between 0 and 10 (found {found})")]
    ScoreOutOfRange { field: &'static str, found: f64 },
    #[error("overall score must be between 0 and 10 (found {0})")]
    OverallScoreOutOfRange(f64),
    #[error("rating period ends {end} before it starts {start}")]
    PeriodEndsBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("target price must be greater than zero (found {0})")]
    NonPositiveTargetPrice(f64),
    #[error("required item must not be empty")]
    EmptyRequiredItem,
    #[error("region country must not be empty")]
    EmptyCountry,
    #[error("requested volume must be greater than zero")]
    ZeroVolume,
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidEmail(email.to_string());
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty());

    if local.is_empty() || !domain_ok {
        return Err(invalid());
    }
    Ok(())
}

fn check_currency(code: &str) -> Result<(), ValidationError> {
    if code.len() == CURRENCY_CODE_LEN && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrency(code.to_string()))
    }
}

fn check_component(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (MIN_COMPONENT_SCORE..=MAX_COMPONENT_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::ScoreOutOfRange {
            field,
            found: value,
        })
    }
}

fn check_region(region: &Region) -> Result<(), ValidationError> {
    if region.country.trim().is_empty() {
        return Err(ValidationError::EmptyCountry);
    }
    Ok(())
}

pub fn validate_contact(contact: &ContactInfo) -> Result<(), ValidationError> {
    check_email(&contact.email)
}

pub fn validate_cost(cost: &CostModel) -> Result<(), ValidationError> {
    // NaN fails this comparison as well
    if !(cost.unit_cost > 0.0) {
        return Err(ValidationError::NonPositiveCost {
            item: cost.item_name.clone(),
            found: cost.unit_cost,
        });
    }
    check_currency(&cost.currency)
}

pub fn validate_rating(rating: &PerformanceRating) -> Result<(), ValidationError> {
    if rating.period_end < rating.period_start {
        return Err(ValidationError::PeriodEndsBeforeStart {
            start: rating.period_start,
            end: rating.period_end,
        });
    }

    check_component("quality_score", rating.quality_score)?;
    check_component("timeliness_score", rating.timeliness_score)?;
    check_component("communication_score", rating.communication_score)
}

/// Check a supplier that arrived through deserialization rather than [`Supplier::new`].
pub fn validate_supplier(supplier: &Supplier) -> Result<(), ValidationError> {
    if supplier.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if let Some(score) = supplier.overall_score {
        if !(MIN_COMPONENT_SCORE..=MAX_COMPONENT_SCORE).contains(&score) {
            return Err(ValidationError::OverallScoreOutOfRange(score));
        }
    }

    validate_contact(&supplier.contact_info)?;
    supplier.regions.iter().try_for_each(check_region)?;
    supplier.pricing.iter().try_for_each(validate_cost)?;
    supplier.ratings.iter().try_for_each(validate_rating)
}

pub fn validate_criteria(criteria: &EvaluationCriteria) -> Result<(), ValidationError> {
    if !(criteria.target_price > 0.0) {
        return Err(ValidationError::NonPositiveTargetPrice(criteria.target_price));
    }
    if criteria.required_item.trim().is_empty() {
        return Err(ValidationError::EmptyRequiredItem);
    }

    check_region(&criteria.target_region)?;
    check_currency(&criteria.target_currency)
}

impl ContactInfo {
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let contact = Self {
            email: email.into(),
            phone: None,
            address: None,
        };
        validate_contact(&contact)?;
        Ok(contact)
    }
}

impl CostModel {
    pub fn new(
        item_name: impl Into<String>,
        unit_cost: f64,
        currency: impl Into<String>,
        bulk_discount_available: bool,
    ) -> Result<Self, ValidationError> {
        let cost = Self {
            item_name: item_name.into(),
            unit_cost,
            currency: currency.into(),
            bulk_discount_available,
        };
        validate_cost(&cost)?;
        Ok(cost)
    }
}

impl PerformanceRating {
    pub fn new(
        period_start: NaiveDate,
        period_end: NaiveDate,
        quality_score: f64,
        timeliness_score: f64,
        communication_score: f64,
    ) -> Result<Self, ValidationError> {
        let rating = Self {
            period_start,
            period_end,
            quality_score,
            timeliness_score,
            communication_score,
            reviewer_comments: None,
        };
        validate_rating(&rating)?;
        Ok(rating)
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.reviewer_comments = Some(comments.into());
        self
    }
}

impl Supplier {
    /// Build an empty supplier profile with a freshly assigned id.
    pub fn new(
        name: impl Into<String>,
        contact_info: ContactInfo,
    ) -> Result<Self, ValidationError> {
        let supplier = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            contact_info,
            capabilities: Vec::new(),
            regions: Vec::new(),
            pricing: Vec::new(),
            ratings: Vec::new(),
            overall_score: None,
            risk_level: None,
        };
        validate_supplier(&supplier)?;
        Ok(supplier)
    }
}

impl EvaluationCriteria {
    pub fn new<I, S>(
        required_capabilities: I,
        target_region: Region,
        target_price: f64,
        target_currency: impl Into<String>,
        required_item: impl Into<String>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let criteria = Self {
            required_capabilities: required_capabilities
                .into_iter()
                .map(Into::into)
                .collect::<BTreeSet<_>>(),
            target_region,
            target_price,
            target_currency: target_currency.into(),
            required_item: required_item.into(),
        };
        validate_criteria(&criteria)?;
        Ok(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn rejects_rating_period_that_ends_before_it_starts() {
        let err = PerformanceRating::new(date(2023, 6, 30), date(2023, 1, 1), 8.0, 8.0, 8.0)
            .expect_err("inverted period rejected");
        assert!(matches!(err, ValidationError::PeriodEndsBeforeStart { .. }));
    }

    #[test]
    fn accepts_single_day_rating_period() {
        let day = date(2023, 3, 15);
        assert!(PerformanceRating::new(day, day, 0.0, 10.0, 5.0).is_ok());
    }

    #[test]
    fn rejects_component_scores_outside_zero_to_ten() {
        let err = PerformanceRating::new(date(2023, 1, 1), date(2023, 12, 31), 10.5, 8.0, 8.0)
            .expect_err("score above ten rejected");
        assert_eq!(
            err,
            ValidationError::ScoreOutOfRange {
                field: "quality_score",
                found: 10.5
            }
        );
    }

    #[test]
    fn rejects_malformed_email_addresses() {
        for email in ["", "no-at-sign", "@example.com", "a@b", "a b@example.com", "a@@b.com"] {
            assert!(
                ContactInfo::new(email).is_err(),
                "expected '{email}' to be rejected"
            );
        }
        assert!(ContactInfo::new("sales@globalmfg.com").is_ok());
    }

    #[test]
    fn cost_requires_positive_price_and_three_letter_currency() {
        assert!(matches!(
            CostModel::new("Widget", 0.0, "USD", false),
            Err(ValidationError::NonPositiveCost { .. })
        ));
        assert!(matches!(
            CostModel::new("Widget", 5.0, "US", false),
            Err(ValidationError::InvalidCurrency(_))
        ));
        assert!(matches!(
            CostModel::new("Widget", 5.0, "U5D", false),
            Err(ValidationError::InvalidCurrency(_))
        ));
        assert!(CostModel::new("Widget", 5.0, "EUR", true).is_ok());
    }

    #[test]
    fn supplier_requires_a_name_and_gets_unique_ids() {
        let contact = ContactInfo::new("ops@acme.test").expect("valid contact");
        assert_eq!(
            Supplier::new("  ", contact.clone()).expect_err("blank name"),
            ValidationError::EmptyName
        );

        let first = Supplier::new("Acme", contact.clone()).expect("valid supplier");
        let second = Supplier::new("Acme", contact).expect("valid supplier");
        assert_ne!(first.id, second.id);
        assert!(first.overall_score.is_none());
        assert!(first.risk_level.is_none());
    }

    #[test]
    fn criteria_rejects_non_positive_target_price() {
        let err = EvaluationCriteria::new(["CNC"], Region::country("USA"), 0.0, "USD", "Widget")
            .expect_err("zero target price rejected");
        assert_eq!(err, ValidationError::NonPositiveTargetPrice(0.0));
    }

    #[test]
    fn criteria_deduplicates_required_capabilities() {
        let criteria = EvaluationCriteria::new(
            ["CNC", "CNC", "Welding"],
            Region::country("USA"),
            10.0,
            "USD",
            "Widget",
        )
        .expect("valid criteria");
        assert_eq!(criteria.required_capabilities.len(), 2);
    }

    #[test]
    fn validate_supplier_checks_nested_records() {
        let mut supplier = Supplier::new("Acme", ContactInfo::new("ops@acme.test").unwrap())
            .expect("valid supplier");
        supplier.pricing.push(CostModel {
            item_name: "Widget".to_string(),
            unit_cost: -1.0,
            currency: "USD".to_string(),
            bulk_discount_available: false,
        });

        assert!(matches!(
            validate_supplier(&supplier),
            Err(ValidationError::NonPositiveCost { .. })
        ));
    }

    #[test]
    fn validate_supplier_rejects_seeded_overall_score_outside_zero_to_ten() {
        let contact = ContactInfo::new("ops@acme.test").expect("valid contact");
        let supplier = Supplier::new("Acme", contact).expect("valid supplier");

        assert_eq!(
            validate_supplier(&supplier.clone().with_overall_score(50.0)),
            Err(ValidationError::OverallScoreOutOfRange(50.0))
        );
        assert!(matches!(
            validate_supplier(&supplier.clone().with_overall_score(f64::NAN)),
            Err(ValidationError::OverallScoreOutOfRange(_))
        ));
        assert!(validate_supplier(&supplier.clone().with_overall_score(10.0)).is_ok());
        assert!(validate_supplier(&supplier.with_overall_score(0.0)).is_ok());
    }
}
