// src/io/mock.rs

//! Mock data generators standing in for the supplier catalog and the
//! needs-extraction collaborators. Pass a seeded RNG for reproducible data.

use crate::error::{ProcurementError, Result};
use crate::model::shortage::{ResourceShortage, UrgencyLevel};
use crate::model::supplier::{Coordinates, ResourceCategory, Supplier, SupplierStatus};
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Resource types the mock catalog knows about, grouped by category.
pub const RESOURCE_TYPES: &[(ResourceCategory, &str)] = &[
    (ResourceCategory::Equipment, "respiradores"),
    (ResourceCategory::Equipment, "monitores"),
    (ResourceCategory::Equipment, "desfibriladores"),
    (ResourceCategory::Supplies, "mascaras"),
    (ResourceCategory::Supplies, "luvas"),
    (ResourceCategory::Supplies, "seringas"),
    (ResourceCategory::Medication, "antibioticos"),
    (ResourceCategory::Medication, "analgesicos"),
    (ResourceCategory::Medication, "sedativos"),
];

const NAME_PREFIXES: &[&str] = &["Medi", "Saude", "Vita", "Clinic", "Hosp", "Bio"];
const NAME_SUFFIXES: &[&str] = &["Supply", "Log", "Pharma", "Tech", "Distribuidora"];

/// Kilometres per degree of latitude.
const KM_PER_DEGREE: f64 = 111.2;

/// Generates `count` suppliers scattered around `center`.
///
/// # Arguments
/// * `center` - The hospital the catalog is built around.
/// * `spread_km` - Standard deviation of the coordinate jitter.
/// * `today` - Anchor for the generated last-supply dates.
pub fn generate_supplier_catalog<R: Rng + ?Sized>(
    rng: &mut R,
    center: Coordinates,
    count: usize,
    spread_km: f64,
    today: NaiveDate,
) -> Result<Vec<Supplier>> {
    let jitter = Normal::new(0.0, (spread_km / KM_PER_DEGREE).abs())
        .map_err(|e| ProcurementError::invalid("spread_km", e.to_string()))?;
    let lead_time = Normal::<f64>::new(24.0, 10.0)
        .map_err(|e| ProcurementError::invalid("lead time distribution", e.to_string()))?;

    let catalog = (0..count)
        .map(|i| {
            let coordinates = Coordinates::new(
                center.lat + jitter.sample(rng),
                center.lng + jitter.sample(rng),
            );
            let name = format!(
                "{}{} {:02}",
                NAME_PREFIXES.choose(rng).copied().unwrap_or("Medi"),
                NAME_SUFFIXES.choose(rng).copied().unwrap_or("Supply"),
                i + 1
            );

            let mut supplier = Supplier::new(format!("SUP-{:03}", i + 1), name, coordinates)
                .with_rating(rng.gen_range(1..=5))
                .with_delivery_time(lead_time.sample(rng).max(2.0).round())
                .preferred(rng.gen_bool(0.3));

            let category = ResourceCategory::ALL
                .choose(rng)
                .copied()
                .unwrap_or(ResourceCategory::Supplies);
            supplier = supplier.with_category(category);

            let stocked: Vec<&str> = RESOURCE_TYPES
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, rt)| *rt)
                .filter(|_| rng.gen_bool(0.6))
                .collect();
            let stocked: Vec<&str> = if stocked.is_empty() {
                RESOURCE_TYPES
                    .iter()
                    .filter(|(c, _)| *c == category)
                    .map(|(_, rt)| *rt)
                    .take(1)
                    .collect()
            } else {
                stocked
            };

            if rng.gen_bool(0.25) {
                if let Some(specialty) = stocked.choose(rng) {
                    supplier = supplier.with_specialty(*specialty);
                }
            }
            for resource_type in stocked {
                supplier = supplier.with_resource_type(resource_type);
            }

            if rng.gen_bool(0.8) {
                supplier = supplier.with_last_supply(today - Duration::days(rng.gen_range(0..120)));
            }
            if rng.gen_bool(0.1) {
                supplier = supplier.with_status(SupplierStatus::Inactive);
            }

            supplier
        })
        .collect();

    Ok(catalog)
}

/// Generates up to `count` shortages over distinct resource types.
pub fn generate_shortages<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<ResourceShortage>> {
    let quantity = Normal::<f64>::new(20.0, 8.0)
        .map_err(|e| ProcurementError::invalid("quantity distribution", e.to_string()))?;

    let picked: Vec<(ResourceCategory, &str)> =
        RESOURCE_TYPES.choose_multiple(rng, count).copied().collect();

    let shortages = picked
        .into_iter()
        .map(|(category, resource_type)| {
            let quantity_needed = quantity.sample(rng).round().max(1.0) as u32;
            let urgency = UrgencyLevel::ALL
                .choose(rng)
                .copied()
                .unwrap_or(UrgencyLevel::Medium);
            ResourceShortage::new(resource_type, category, quantity_needed, urgency)
        })
        .collect();

    Ok(shortages)
}
