//! Supplier catalog import (JSON) and ranking export (CSV).

use crate::evaluation::{validate_supplier, RankedSupplier, Supplier, ValidationError};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    InvalidSupplier {
        index: usize,
        source: ValidationError,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read supplier catalog: {}", err),
            CatalogError::Json(err) => write!(f, "invalid supplier catalog JSON: {}", err),
            CatalogError::Csv(err) => write!(f, "failed to write ranking CSV: {}", err),
            CatalogError::InvalidSupplier { index, source } => {
                write!(f, "catalog entry {} rejected: {}", index, source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::InvalidSupplier { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads supplier records from a JSON array, validating each entry.
pub struct SupplierCatalog;

impl SupplierCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Supplier>, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Supplier>, CatalogError> {
        let suppliers: Vec<Supplier> = serde_json::from_reader(reader)?;
        for (index, supplier) in suppliers.iter().enumerate() {
            validate_supplier(supplier)
                .map_err(|source| CatalogError::InvalidSupplier { index, source })?;
        }
        Ok(suppliers)
    }
}

#[derive(Debug, Serialize)]
struct RankingRow<'a> {
    rank: usize,
    supplier_name: &'a str,
    fit_score: f64,
    risk_level: &'static str,
    cost_alignment: &'static str,
    overall_score: Option<f64>,
    countries: usize,
}

/// Write one CSV row per ranked supplier, in ranking order.
pub fn write_rankings_csv<W: Write>(
    writer: W,
    ranked: &[RankedSupplier],
) -> Result<(), CatalogError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (index, row) in ranked.iter().enumerate() {
        csv_writer.serialize(RankingRow {
            rank: index + 1,
            supplier_name: &row.supplier_name,
            fit_score: row.fit_score,
            risk_level: row.risk_level.label(),
            cost_alignment: row.cost_alignment.label(),
            overall_score: row.details.overall_score,
            countries: row.details.distinct_countries(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{rank_suppliers, EvaluationCriteria, Region};
    use std::io::Cursor;

    const CATALOG: &str = r#"[
        {
            "name": "Local Precision Inc",
            "contact_info": { "email": "info@localprecision.com" },
            "capabilities": [{ "category": "Manufacturing", "services": ["Widget"] }],
            "regions": [{ "country": "USA", "state_province": "CA" }],
            "pricing": [{ "item_name": "Widget", "unit_cost": 8.0, "currency": "USD" }],
            "ratings": [{
                "period_start": "2023-01-01",
                "period_end": "2023-12-31",
                "quality_score": 9.5,
                "timeliness_score": 9.5,
                "communication_score": 9.0
            }]
        }
    ]"#;

    #[test]
    fn loads_json_catalog_with_defaults() {
        let suppliers =
            SupplierCatalog::from_reader(Cursor::new(CATALOG)).expect("catalog parses");

        assert_eq!(suppliers.len(), 1);
        let supplier = &suppliers[0];
        assert_eq!(supplier.name, "Local Precision Inc");
        assert!(supplier.overall_score.is_none());
        assert!(!supplier.pricing[0].bulk_discount_available);
        assert!(supplier.capabilities[0].certifications.is_empty());
    }

    #[test]
    fn rejects_entries_that_fail_validation() {
        let payload = CATALOG.replace("info@localprecision.com", "not-an-email");

        let err = SupplierCatalog::from_reader(Cursor::new(payload)).expect_err("invalid email");

        assert!(matches!(
            err,
            CatalogError::InvalidSupplier {
                index: 0,
                source: ValidationError::InvalidEmail(_)
            }
        ));
    }

    #[test]
    fn rejects_inverted_rating_periods() {
        let payload = CATALOG.replace("2023-12-31", "2022-12-31");

        let err = SupplierCatalog::from_reader(Cursor::new(payload)).expect_err("bad period");

        assert!(err.to_string().contains("before it starts"));
    }

    #[test]
    fn csv_export_lists_ranked_rows() {
        let suppliers = SupplierCatalog::from_reader(Cursor::new(CATALOG)).expect("parses");
        let criteria = EvaluationCriteria::new(
            ["Widget"],
            Region::with_state("USA", "CA"),
            10.0,
            "USD",
            "Widget",
        )
        .expect("valid criteria");
        let ranked = rank_suppliers(suppliers, &criteria);

        let mut buffer = Vec::new();
        write_rankings_csv(&mut buffer, &ranked).expect("csv writes");
        let output = String::from_utf8(buffer).expect("utf8");

        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("rank,supplier_name,fit_score,risk_level,cost_alignment,overall_score,countries")
        );
        assert_eq!(lines.next(), Some("1,Local Precision Inc,99.33,High,High,9.33,1"));
    }
}
