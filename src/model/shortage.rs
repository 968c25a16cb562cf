// src/model/shortage.rs

use crate::error::ProcurementError;
use crate::model::supplier::ResourceCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pressing a shortage is. Urgency expedites delivery and, in
/// AI-enhanced mode, reweights the delivery and proximity scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Critical,
        UrgencyLevel::High,
        UrgencyLevel::Medium,
        UrgencyLevel::Low,
    ];

    /// Factor applied to a supplier's baseline delivery time (expedited shipping).
    pub fn delivery_multiplier(self) -> f64 {
        match self {
            UrgencyLevel::Critical => 0.5,
            UrgencyLevel::High => 0.7,
            UrgencyLevel::Medium => 0.9,
            UrgencyLevel::Low => 1.0,
        }
    }

    pub fn is_critical(self) -> bool {
        self == UrgencyLevel::Critical
    }

    /// Critical and high shortages weight delivery speed more heavily.
    pub fn prioritises_delivery(self) -> bool {
        matches!(self, UrgencyLevel::Critical | UrgencyLevel::High)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::High => "high",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::Low => "low",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = ProcurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(UrgencyLevel::Critical),
            "high" => Ok(UrgencyLevel::High),
            "medium" => Ok(UrgencyLevel::Medium),
            "low" => Ok(UrgencyLevel::Low),
            other => Err(ProcurementError::invalid(
                "urgencyLevel",
                format!("unknown urgency level '{}'", other),
            )),
        }
    }
}

/// A hospital's unmet need for a specific resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceShortage {
    pub resource_type: String,
    pub category: ResourceCategory,
    pub quantity_needed: u32,
    pub urgency_level: UrgencyLevel,
}

impl ResourceShortage {
    pub fn new(
        resource_type: impl Into<String>,
        category: ResourceCategory,
        quantity_needed: u32,
        urgency_level: UrgencyLevel,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            category,
            quantity_needed,
            urgency_level,
        }
    }
}
