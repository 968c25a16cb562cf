// src/io/reporting.rs

use crate::error::Result;
use crate::model::recommendation::RecommendationReport;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

// One flattened CSV row per ranked recommendation
#[derive(Debug, Serialize)]
struct RecommendationRow<'a> {
    resource_type: &'a str,
    rank: usize,
    supplier_id: &'a str,
    supplier_name: &'a str,
    category: &'static str,
    quantity_needed: u32,
    preferred_vendor: bool,
    in_stock: bool,
    distance_km: f64,
    estimated_delivery_hours: f64,
    estimated_price: f64,
    priority_score: f64,
}

/// Writes every ranked recommendation as CSV to `writer`.
///
/// Returns the number of rows written (header excluded).
pub fn write_recommendations<W: Write>(writer: W, report: &RecommendationReport) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for (resource_type, recommendations) in &report.recommendations {
        for (index, rec) in recommendations.iter().enumerate() {
            wtr.serialize(RecommendationRow {
                resource_type,
                rank: index + 1,
                supplier_id: &rec.supplier_id,
                supplier_name: &rec.supplier_name,
                category: rec.category.as_str(),
                quantity_needed: rec.quantity_needed,
                preferred_vendor: rec.preferred_vendor,
                in_stock: rec.in_stock,
                distance_km: rec.distance_km,
                estimated_delivery_hours: rec.estimated_delivery_hours,
                estimated_price: rec.estimated_price,
                priority_score: rec.priority_score,
            })?;
            rows += 1;
        }
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(rows)
}

/// Writes the report to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/recommendations.csv").
/// * `report` - The output of a recommendation run.
pub fn write_recommendations_csv(
    file_path: impl AsRef<Path>,
    report: &RecommendationReport,
) -> Result<usize> {
    let path = file_path.as_ref();
    let file = std::fs::File::create(path)?;
    let rows = write_recommendations(file, report)?;

    info!(rows, path = %path.display(), "Exported recommendations");
    Ok(rows)
}

/// Renders the report as the JSON body a `POST /recommendations` endpoint returns.
pub fn to_json(report: &RecommendationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
