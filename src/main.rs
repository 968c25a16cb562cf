use chrono::Utc;
use procurement_recommender::io::{mock, reporting};
use procurement_recommender::{
    Coordinates, EngineConfig, RandomStock, RecommendationEngine, RecommendationRequest,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        error!(error = %e, "Recommendation run failed");
        std::process::exit(1);
    }
}

fn run() -> procurement_recommender::Result<()> {
    println!("=== Hospital Procurement Recommendations ===");

    // 1. SETUP
    let hospital = Coordinates::new(-23.561684, -46.655291);
    let now = Utc::now();
    let mut rng = StdRng::seed_from_u64(2024);

    // 2. MOCK COLLABORATORS
    // Catalog and shortages normally come from the catalog service and the
    // needs extractor; seeded mock data keeps the demo reproducible.
    let catalog = mock::generate_supplier_catalog(&mut rng, hospital, 40, 25.0, now.date_naive())?;
    let shortages = mock::generate_shortages(&mut rng, 5)?;
    println!(
        "Catalog: {} suppliers, {} shortages to cover",
        catalog.len(),
        shortages.len()
    );

    // 3. RUN ENGINE
    let engine = RecommendationEngine::new(
        EngineConfig::default().with_max_per_shortage(3),
        RandomStock::default(),
    );
    let request = RecommendationRequest::new(hospital, shortages.clone(), catalog).at(now);
    let report = engine.recommend(&request)?;

    // 4. PRINT RANKINGS
    for shortage in &shortages {
        println!(
            "\n{} ({}, {} units, {})",
            shortage.resource_type, shortage.category, shortage.quantity_needed, shortage.urgency_level
        );
        if report.is_unmet(&shortage.resource_type) {
            println!("  UNMET: no eligible supplier");
            continue;
        }
        for (rank, rec) in report.for_resource(&shortage.resource_type).iter().enumerate() {
            println!(
                "  {}. {} [{}] score {:.2} | {:.1} km | {:.1} h | ${:.2} | {}",
                rank + 1,
                rec.supplier_name,
                rec.supplier_id,
                rec.priority_score,
                rec.distance_km,
                rec.estimated_delivery_hours,
                rec.estimated_price,
                if rec.in_stock { "in stock" } else { "on order" }
            );
        }
    }

    for diagnostic in &report.diagnostics {
        println!("Rejected {}: {}", diagnostic.record, diagnostic.message);
    }

    // 5. EXPORT RESULTS
    let output_file = "recommendations.csv";
    let rows = reporting::write_recommendations_csv(output_file, &report)?;
    println!("\nSuccess! {} rows written to ./{}", rows, output_file);

    Ok(())
}
