// src/engine/validation.rs

//! Per-record input checks. A bad record is dropped with a diagnostic;
//! it never aborts the rest of the batch.

use crate::error::{ProcurementError, Result};
use crate::model::recommendation::{Diagnostic, RecordRef};
use crate::model::shortage::ResourceShortage;
use crate::model::supplier::{Coordinates, Supplier};
use std::collections::HashSet;
use tracing::warn;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub fn validate_hospital(coordinates: &Coordinates) -> Result<()> {
    if !coordinates.is_finite() {
        return Err(ProcurementError::invalid(
            RecordRef::Hospital.to_string(),
            format!(
                "non-finite coordinates ({}, {})",
                coordinates.lat, coordinates.lng
            ),
        ));
    }
    Ok(())
}

pub fn validate_supplier(supplier: &Supplier) -> Result<()> {
    let record = || RecordRef::Supplier(supplier.id.clone()).to_string();

    if supplier.id.trim().is_empty() {
        return Err(ProcurementError::invalid(record(), "empty supplier id"));
    }
    if !supplier.coordinates.is_finite() {
        return Err(ProcurementError::invalid(
            record(),
            format!(
                "non-finite coordinates ({}, {})",
                supplier.coordinates.lat, supplier.coordinates.lng
            ),
        ));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&supplier.rating) {
        return Err(ProcurementError::invalid(
            record(),
            format!(
                "rating {} outside {}..={}",
                supplier.rating, MIN_RATING, MAX_RATING
            ),
        ));
    }
    if !supplier.delivery_time_hours.is_finite() || supplier.delivery_time_hours <= 0.0 {
        return Err(ProcurementError::invalid(
            record(),
            format!(
                "deliveryTimeHours must be positive, got {}",
                supplier.delivery_time_hours
            ),
        ));
    }
    Ok(())
}

pub fn validate_shortage(shortage: &ResourceShortage) -> Result<()> {
    let record = || RecordRef::Shortage(shortage.resource_type.clone()).to_string();

    if shortage.resource_type.trim().is_empty() {
        return Err(ProcurementError::invalid(record(), "empty resource type"));
    }
    if shortage.quantity_needed == 0 {
        return Err(ProcurementError::invalid(
            record(),
            "quantityNeeded must be positive",
        ));
    }
    Ok(())
}

/// Keeps the valid suppliers. Invalid ones, and repeats of an id already
/// seen, become diagnostics.
pub fn partition_suppliers<'a>(
    catalog: &'a [Supplier],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<&'a Supplier> {
    let mut seen = HashSet::new();
    let mut valid = Vec::with_capacity(catalog.len());

    for supplier in catalog {
        let outcome = validate_supplier(supplier).and_then(|_| {
            if seen.insert(supplier.id.as_str()) {
                Ok(())
            } else {
                Err(ProcurementError::invalid(
                    RecordRef::Supplier(supplier.id.clone()).to_string(),
                    "duplicate supplier id",
                ))
            }
        });

        match outcome {
            Ok(()) => valid.push(supplier),
            Err(err) => {
                warn!(supplier_id = %supplier.id, error = %err, "Rejected supplier record");
                diagnostics.push(Diagnostic::new(
                    RecordRef::Supplier(supplier.id.clone()),
                    &err,
                ));
            }
        }
    }

    valid
}

/// Keeps the valid shortages. The report is keyed by resource type, so a
/// second shortage for the same type is rejected rather than merged.
pub fn partition_shortages<'a>(
    shortages: &'a [ResourceShortage],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<&'a ResourceShortage> {
    let mut seen = HashSet::new();
    let mut valid = Vec::with_capacity(shortages.len());

    for shortage in shortages {
        let outcome = validate_shortage(shortage).and_then(|_| {
            if seen.insert(shortage.resource_type.as_str()) {
                Ok(())
            } else {
                Err(ProcurementError::invalid(
                    RecordRef::Shortage(shortage.resource_type.clone()).to_string(),
                    "duplicate shortage for resource type",
                ))
            }
        });

        match outcome {
            Ok(()) => valid.push(shortage),
            Err(err) => {
                warn!(resource_type = %shortage.resource_type, error = %err, "Rejected shortage record");
                diagnostics.push(Diagnostic::new(
                    RecordRef::Shortage(shortage.resource_type.clone()),
                    &err,
                ));
            }
        }
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shortage::UrgencyLevel;
    use crate::model::supplier::ResourceCategory;

    fn supplier(id: &str) -> Supplier {
        Supplier::new(id, "Vendor", Coordinates::new(-23.0, -46.0))
            .with_category(ResourceCategory::Supplies)
            .with_resource_type("luvas")
    }

    #[test]
    fn hospital_coordinates_must_be_finite() {
        assert!(validate_hospital(&Coordinates::new(-23.5, -46.6)).is_ok());
        assert!(validate_hospital(&Coordinates::new(f64::NAN, -46.6)).is_err());
        assert!(validate_hospital(&Coordinates::new(-23.5, f64::INFINITY)).is_err());
    }

    #[test]
    fn supplier_rules() {
        assert!(validate_supplier(&supplier("ok")).is_ok());
        assert!(validate_supplier(&supplier("r0").with_rating(0)).is_err());
        assert!(validate_supplier(&supplier("r6").with_rating(6)).is_err());
        assert!(validate_supplier(&supplier("d0").with_delivery_time(0.0)).is_err());
        assert!(validate_supplier(&supplier("dn").with_delivery_time(-4.0)).is_err());
        assert!(validate_supplier(&supplier("nan").with_delivery_time(f64::NAN)).is_err());
        assert!(validate_supplier(&supplier(" ")).is_err());

        let mut lost = supplier("lost");
        lost.coordinates.lat = f64::NAN;
        assert!(validate_supplier(&lost).is_err());
    }

    #[test]
    fn shortage_rules() {
        let ok = ResourceShortage::new("luvas", ResourceCategory::Supplies, 10, UrgencyLevel::Low);
        assert!(validate_shortage(&ok).is_ok());

        let zero = ResourceShortage::new("luvas", ResourceCategory::Supplies, 0, UrgencyLevel::Low);
        assert!(validate_shortage(&zero).is_err());

        let blank = ResourceShortage::new("", ResourceCategory::Supplies, 1, UrgencyLevel::Low);
        assert!(validate_shortage(&blank).is_err());
    }

    #[test]
    fn partition_keeps_valid_and_reports_rest() {
        let catalog = vec![
            supplier("a"),
            supplier("b").with_rating(9),
            supplier("a"),
            supplier("c"),
        ];
        let mut diagnostics = Vec::new();
        let valid = partition_suppliers(&catalog, &mut diagnostics);

        let ids: Vec<&str> = valid.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].record, RecordRef::Supplier("b".into()));
        assert!(diagnostics[1].message.contains("duplicate supplier id"));
    }

    #[test]
    fn duplicate_shortage_is_rejected() {
        let shortages = vec![
            ResourceShortage::new("luvas", ResourceCategory::Supplies, 10, UrgencyLevel::Low),
            ResourceShortage::new("luvas", ResourceCategory::Supplies, 5, UrgencyLevel::High),
        ];
        let mut diagnostics = Vec::new();
        let valid = partition_shortages(&shortages, &mut diagnostics);

        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].quantity_needed, 10);
        assert_eq!(diagnostics[0].record, RecordRef::Shortage("luvas".into()));
    }
}
