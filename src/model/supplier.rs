// src/model/supplier.rs

use crate::error::ProcurementError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Broad class of a hospital resource. Drives eligibility and the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Equipment,
    Supplies,
    Medication,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 3] = [
        ResourceCategory::Equipment,
        ResourceCategory::Supplies,
        ResourceCategory::Medication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Equipment => "equipment",
            ResourceCategory::Supplies => "supplies",
            ResourceCategory::Medication => "medication",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = ProcurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equipment" => Ok(ResourceCategory::Equipment),
            "supplies" => Ok(ResourceCategory::Supplies),
            "medication" => Ok(ResourceCategory::Medication),
            other => Err(ProcurementError::invalid(
                "category",
                format!("unknown resource category '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Inactive,
}

impl FromStr for SupplierStatus {
    type Err = ProcurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(SupplierStatus::Active),
            "inactive" => Ok(SupplierStatus::Inactive),
            other => Err(ProcurementError::invalid(
                "status",
                format!("unknown supplier status '{}'", other),
            )),
        }
    }
}

/// An external vendor from the supplier catalog.
///
/// The engine treats every supplier as an immutable snapshot for the duration
/// of a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub categories: BTreeSet<ResourceCategory>,
    pub resource_types: BTreeSet<String>,
    /// Resource types this vendor is known to specialise in.
    #[serde(default)]
    pub specialties: BTreeSet<String>,
    /// Reliability rating, 1 to 5.
    pub rating: u8,
    /// Baseline logistics time before any urgency expediting.
    pub delivery_time_hours: f64,
    pub preferred_vendor: bool,
    #[serde(default)]
    pub last_supply_date: Option<NaiveDate>,
    pub status: SupplierStatus,
}

impl Supplier {
    /// Creates an active supplier with a neutral rating and a one-day lead time.
    /// Capabilities are added with the `with_*` builders.
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            categories: BTreeSet::new(),
            resource_types: BTreeSet::new(),
            specialties: BTreeSet::new(),
            rating: 3,
            delivery_time_hours: 24.0,
            preferred_vendor: false,
            last_supply_date: None,
            status: SupplierStatus::Active,
        }
    }

    pub fn with_category(mut self, category: ResourceCategory) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_types.insert(resource_type.into());
        self
    }

    pub fn with_specialty(mut self, resource_type: impl Into<String>) -> Self {
        self.specialties.insert(resource_type.into());
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_delivery_time(mut self, hours: f64) -> Self {
        self.delivery_time_hours = hours;
        self
    }

    pub fn preferred(mut self, preferred: bool) -> Self {
        self.preferred_vendor = preferred;
        self
    }

    pub fn with_last_supply(mut self, date: NaiveDate) -> Self {
        self.last_supply_date = Some(date);
        self
    }

    pub fn with_status(mut self, status: SupplierStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == SupplierStatus::Active
    }

    /// True when the supplier declares both the category and the specific resource type.
    pub fn supplies(&self, category: ResourceCategory, resource_type: &str) -> bool {
        self.categories.contains(&category) && self.resource_types.contains(resource_type)
    }

    pub fn specialises_in(&self, resource_type: &str) -> bool {
        self.specialties.contains(resource_type)
    }

    /// Whole days elapsed between the last transaction and `today`.
    /// Negative when the recorded date lies in the future.
    pub fn days_since_last_supply(&self, today: NaiveDate) -> Option<i64> {
        self.last_supply_date
            .map(|date| today.signed_duration_since(date).num_days())
    }
}
