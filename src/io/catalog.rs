// src/io/catalog.rs

//! CSV readers for supplier catalogs and shortage lists.
//!
//! List columns are `;`-separated and dates are ISO `YYYY-MM-DD`. A row that
//! cannot be turned into a record is reported as a diagnostic and skipped.

use crate::error::{ProcurementError, Result};
use crate::model::recommendation::{Diagnostic, RecordRef};
use crate::model::shortage::{ResourceShortage, UrgencyLevel};
use crate::model::supplier::{Coordinates, ResourceCategory, Supplier, SupplierStatus};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct SupplierRow {
    id: String,
    name: String,
    lat: f64,
    lng: f64,
    categories: String,
    resource_types: String,
    #[serde(default)]
    specialties: Option<String>,
    rating: u8,
    delivery_time_hours: f64,
    preferred_vendor: bool,
    #[serde(default)]
    last_supply_date: Option<String>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ShortageRow {
    resource_type: String,
    category: String,
    quantity_needed: u32,
    urgency_level: String,
}

impl SupplierRow {
    fn into_supplier(self) -> Result<Supplier> {
        let record = RecordRef::Supplier(self.id.clone()).to_string();

        let categories = split_list(&self.categories)
            .map(|c| c.parse::<ResourceCategory>())
            .collect::<Result<BTreeSet<_>>>()
            .map_err(attributed(&record))?;
        let status = self
            .status
            .parse::<SupplierStatus>()
            .map_err(attributed(&record))?;
        let last_supply_date = match self.last_supply_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                ProcurementError::invalid(
                    record.clone(),
                    format!("bad last_supply_date '{}': {}", raw, e),
                )
            })?),
        };

        Ok(Supplier {
            id: self.id,
            name: self.name,
            coordinates: Coordinates::new(self.lat, self.lng),
            categories,
            resource_types: split_list(&self.resource_types).map(String::from).collect(),
            specialties: self
                .specialties
                .as_deref()
                .map(|s| split_list(s).map(String::from).collect())
                .unwrap_or_default(),
            rating: self.rating,
            delivery_time_hours: self.delivery_time_hours,
            preferred_vendor: self.preferred_vendor,
            last_supply_date,
            status,
        })
    }
}

impl ShortageRow {
    fn into_shortage(self) -> Result<ResourceShortage> {
        let record = RecordRef::Shortage(self.resource_type.clone()).to_string();
        let category = self
            .category
            .parse::<ResourceCategory>()
            .map_err(attributed(&record))?;
        let urgency = self
            .urgency_level
            .parse::<UrgencyLevel>()
            .map_err(attributed(&record))?;

        Ok(ResourceShortage::new(
            self.resource_type.trim(),
            category,
            self.quantity_needed,
            urgency,
        ))
    }
}

/// Re-labels a field-level parse error with the record it came from.
fn attributed(record: &str) -> impl Fn(ProcurementError) -> ProcurementError + '_ {
    move |err| match err {
        ProcurementError::InvalidInput { reason, .. } => ProcurementError::invalid(record, reason),
        other => other,
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// Reads suppliers from CSV with a header row.
pub fn read_suppliers<R: Read>(reader: R) -> (Vec<Supplier>, Vec<Diagnostic>) {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut suppliers = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, result) in rdr.deserialize::<SupplierRow>().enumerate() {
        let row = index as u64 + 1;
        match result {
            Ok(raw) => {
                let id = raw.id.clone();
                match raw.into_supplier() {
                    Ok(supplier) => suppliers.push(supplier),
                    Err(err) => {
                        warn!(row, supplier_id = %id, error = %err, "Skipping supplier row");
                        diagnostics.push(Diagnostic::new(RecordRef::Supplier(id), &err));
                    }
                }
            }
            Err(err) => {
                let err = ProcurementError::from(err);
                warn!(row, error = %err, "Unreadable supplier row");
                diagnostics.push(Diagnostic::new(RecordRef::Row(row), &err));
            }
        }
    }

    (suppliers, diagnostics)
}

/// Reads shortages from CSV with a header row.
pub fn read_shortages<R: Read>(reader: R) -> (Vec<ResourceShortage>, Vec<Diagnostic>) {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut shortages = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, result) in rdr.deserialize::<ShortageRow>().enumerate() {
        let row = index as u64 + 1;
        match result.map_err(ProcurementError::from) {
            Ok(raw) => {
                let resource_type = raw.resource_type.clone();
                match raw.into_shortage() {
                    Ok(shortage) => shortages.push(shortage),
                    Err(err) => {
                        warn!(row, resource_type = %resource_type, error = %err, "Skipping shortage row");
                        diagnostics.push(Diagnostic::new(RecordRef::Shortage(resource_type), &err));
                    }
                }
            }
            Err(err) => {
                warn!(row, error = %err, "Unreadable shortage row");
                diagnostics.push(Diagnostic::new(RecordRef::Row(row), &err));
            }
        }
    }

    (shortages, diagnostics)
}

pub fn load_suppliers(path: impl AsRef<Path>) -> Result<(Vec<Supplier>, Vec<Diagnostic>)> {
    let file = std::fs::File::open(path)?;
    Ok(read_suppliers(file))
}

pub fn load_shortages(path: impl AsRef<Path>) -> Result<(Vec<ResourceShortage>, Vec<Diagnostic>)> {
    let file = std::fs::File::open(path)?;
    Ok(read_shortages(file))
}
