// src/engine/recommender.rs

use crate::engine::config::EngineConfig;
use crate::engine::validation::{partition_shortages, partition_suppliers, validate_hospital};
use crate::error::Result;
use crate::model::recommendation::{Recommendation, RecommendationReport};
use crate::model::shortage::ResourceShortage;
use crate::model::supplier::{Coordinates, Supplier};
use crate::strategy::geo::distance_between;
use crate::strategy::implementations::RandomStock;
use crate::strategy::scoring::{
    estimated_delivery_hours, estimated_price, rank, score_pair, ScoringContext,
};
use crate::strategy::traits::InventoryLookup;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, info};

/// Everything one engine call needs. The engine never fetches or caches;
/// the catalog and shortages are snapshots owned by the caller.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    pub hospital: Coordinates,
    pub shortages: Vec<ResourceShortage>,
    pub catalog: Vec<Supplier>,
    /// `None` defers to `EngineConfig::ai_enhanced`.
    pub ai_enhanced: Option<bool>,
    pub now: DateTime<Utc>,
}

impl RecommendationRequest {
    pub fn new(hospital: Coordinates, shortages: Vec<ResourceShortage>, catalog: Vec<Supplier>) -> Self {
        Self {
            hospital,
            shortages,
            catalog,
            ai_enhanced: None,
            now: Utc::now(),
        }
    }

    pub fn with_ai_enhanced(mut self, enabled: bool) -> Self {
        self.ai_enhanced = Some(enabled);
        self
    }

    /// Pins the clock used for recency and loyalty checks.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Suppliers that are active and declare both the shortage's category and
/// resource type.
pub fn eligible_suppliers<'a, I>(shortage: &ResourceShortage, catalog: I) -> Vec<&'a Supplier>
where
    I: IntoIterator<Item = &'a Supplier>,
{
    catalog
        .into_iter()
        .filter(|supplier| {
            supplier.is_active() && supplier.supplies(shortage.category, &shortage.resource_type)
        })
        .collect()
}

struct ShortageOutcome {
    resource_type: String,
    recommendations: Vec<Recommendation>,
    unmet: bool,
}

#[derive(Debug)]
pub struct RecommendationEngine<L: InventoryLookup> {
    config: EngineConfig,
    lookup: L,
}

impl<L: InventoryLookup> RecommendationEngine<L> {
    pub fn new(config: EngineConfig, lookup: L) -> Self {
        Self { config, lookup }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores every eligible (shortage, supplier) pair and ranks the results
    /// per resource type.
    ///
    /// Fails only when the hospital coordinates are unusable. Bad supplier or
    /// shortage records are dropped and reported in `diagnostics`.
    pub fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationReport> {
        validate_hospital(&request.hospital)?;

        let ctx = ScoringContext {
            ai_enhanced: request.ai_enhanced.unwrap_or(self.config.ai_enhanced),
            today: request.now.date_naive(),
            recency_window_days: self.config.recency_window_days,
            loyalty_window_days: self.config.loyalty_window_days,
        };

        let mut report = RecommendationReport::default();
        let catalog = partition_suppliers(&request.catalog, &mut report.diagnostics);
        let shortages = partition_shortages(&request.shortages, &mut report.diagnostics);

        // Collect preserves input order on both paths
        let outcomes: Vec<ShortageOutcome> = if shortages.len() > self.config.parallel_threshold {
            shortages
                .par_iter()
                .map(|shortage| self.recommend_for(shortage, &catalog, &request.hospital, &ctx))
                .collect()
        } else {
            shortages
                .iter()
                .map(|shortage| self.recommend_for(shortage, &catalog, &request.hospital, &ctx))
                .collect()
        };

        for outcome in outcomes {
            if outcome.unmet {
                report.unmet.push(outcome.resource_type.clone());
            }
            report
                .recommendations
                .insert(outcome.resource_type, outcome.recommendations);
        }

        info!(
            shortages = shortages.len(),
            suppliers = catalog.len(),
            recommendations = report.total_recommendations(),
            unmet = report.unmet.len(),
            diagnostics = report.diagnostics.len(),
            ai_enhanced = ctx.ai_enhanced,
            "Recommendation run complete"
        );

        Ok(report)
    }

    fn recommend_for(
        &self,
        shortage: &ResourceShortage,
        catalog: &[&Supplier],
        hospital: &Coordinates,
        ctx: &ScoringContext,
    ) -> ShortageOutcome {
        let mut recommendations: Vec<Recommendation> =
            eligible_suppliers(shortage, catalog.iter().copied())
                .into_iter()
                .map(|supplier| self.build_recommendation(shortage, supplier, hospital, ctx))
                .collect();

        let unmet = recommendations.is_empty();
        rank(&mut recommendations);
        if let Some(max) = self.config.max_per_shortage {
            recommendations.truncate(max);
        }

        debug!(
            resource_type = %shortage.resource_type,
            urgency = %shortage.urgency_level,
            candidates = recommendations.len(),
            top = recommendations.first().map(|r| r.supplier_id.as_str()).unwrap_or("-"),
            "Ranked suppliers for shortage"
        );

        ShortageOutcome {
            resource_type: shortage.resource_type.clone(),
            recommendations,
            unmet,
        }
    }

    fn build_recommendation(
        &self,
        shortage: &ResourceShortage,
        supplier: &Supplier,
        hospital: &Coordinates,
        ctx: &ScoringContext,
    ) -> Recommendation {
        let distance_km = distance_between(hospital, &supplier.coordinates);
        let breakdown = score_pair(shortage, supplier, distance_km, ctx);

        Recommendation {
            supplier_id: supplier.id.clone(),
            supplier_name: supplier.name.clone(),
            resource_type: shortage.resource_type.clone(),
            category: shortage.category,
            quantity_needed: shortage.quantity_needed,
            preferred_vendor: supplier.preferred_vendor,
            in_stock: self.lookup.check_stock(&supplier.id, &shortage.resource_type),
            distance_km,
            estimated_delivery_hours: estimated_delivery_hours(supplier, shortage.urgency_level),
            estimated_price: estimated_price(shortage.category, supplier, distance_km, ctx),
            priority_score: breakdown.total(),
            breakdown,
        }
    }
}

/// Runs the engine with default configuration and the mocked stock signal.
pub fn recommend_default(request: &RecommendationRequest) -> Result<RecommendationReport> {
    RecommendationEngine::new(EngineConfig::default(), RandomStock::default()).recommend(request)
}
