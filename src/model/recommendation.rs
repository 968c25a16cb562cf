// src/model/recommendation.rs

use crate::error::ProcurementError;
use crate::model::supplier::ResourceCategory;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Component scores after any AI-enhanced adjustments have been folded in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub distance: f64,
    pub reliability: f64,
    pub preference: f64,
    pub delivery: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.distance + self.reliability + self.preference + self.delivery
    }
}

/// One ranked (shortage, supplier) pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub supplier_id: String,
    pub supplier_name: String,
    pub resource_type: String,
    pub category: ResourceCategory,
    pub quantity_needed: u32,
    pub preferred_vendor: bool,
    pub in_stock: bool,
    pub distance_km: f64,
    pub estimated_delivery_hours: f64,
    pub estimated_price: f64,
    pub priority_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Identifies the input record a diagnostic refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum RecordRef {
    Hospital,
    Supplier(String),
    Shortage(String),
    /// A raw input row that could not be turned into a record at all.
    Row(u64),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Hospital => write!(f, "hospital"),
            RecordRef::Supplier(id) => write!(f, "supplier '{}'", id),
            RecordRef::Shortage(resource_type) => write!(f, "shortage '{}'", resource_type),
            RecordRef::Row(line) => write!(f, "row {}", line),
        }
    }
}

/// A rejected input record, reported next to the partial results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub record: RecordRef,
    pub message: String,
}

impl Diagnostic {
    pub fn new(record: RecordRef, error: &ProcurementError) -> Self {
        Self {
            record,
            message: error.to_string(),
        }
    }
}

/// Output of one engine run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    /// Ranked recommendations keyed by resource type.
    pub recommendations: BTreeMap<String, Vec<Recommendation>>,
    /// Resource types for which no eligible supplier exists.
    pub unmet: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RecommendationReport {
    pub fn for_resource(&self, resource_type: &str) -> &[Recommendation] {
        self.recommendations
            .get(resource_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn best_for(&self, resource_type: &str) -> Option<&Recommendation> {
        self.for_resource(resource_type).first()
    }

    pub fn is_unmet(&self, resource_type: &str) -> bool {
        self.unmet.iter().any(|r| r == resource_type)
    }

    pub fn total_recommendations(&self) -> usize {
        self.recommendations.values().map(Vec::len).sum()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_total_sums_components() {
        let breakdown = ScoreBreakdown {
            distance: 10.0,
            reliability: 5.0,
            preference: 2.0,
            delivery: 5.7,
        };
        assert!((breakdown.total() - 22.7).abs() < 1e-9);
    }

    #[test]
    fn empty_report_lookups() {
        let report = RecommendationReport::default();
        assert!(report.for_resource("respiradores").is_empty());
        assert!(report.best_for("respiradores").is_none());
        assert!(!report.is_unmet("respiradores"));
        assert_eq!(report.total_recommendations(), 0);
    }

    #[test]
    fn diagnostic_carries_error_message() {
        let err = ProcurementError::invalid("supplier 'x'", "rating 9 outside 1..=5");
        let diagnostic = Diagnostic::new(RecordRef::Supplier("x".into()), &err);
        assert_eq!(
            diagnostic.message,
            "invalid input for supplier 'x': rating 9 outside 1..=5"
        );
        assert_eq!(diagnostic.record.to_string(), "supplier 'x'");
    }
}
