// src/strategy/scoring.rs

//! Per-pair scoring, delivery and price estimates, and the ranking order.
//!
//! Scores are unnormalised and only comparable within a single run:
//!
//! Priority = Distance + Reliability + Preference + Delivery
//!
//! Where (before AI-enhanced adjustments):
//! - Distance    = max(0, 5 - km / 10)
//! - Reliability = rating (1..=5)
//! - Preference  = 2 for preferred vendors, else 0
//! - Delivery    = 5 - deliveryTimeHours / 10 (not floored)

use crate::model::recommendation::{Recommendation, ScoreBreakdown};
use crate::model::shortage::{ResourceShortage, UrgencyLevel};
use crate::model::supplier::{ResourceCategory, Supplier};
use chrono::NaiveDate;
use std::cmp::Ordering;

pub const MAX_PROXIMITY_SCORE: f64 = 5.0;
pub const PREFERRED_VENDOR_BONUS: f64 = 2.0;
pub const MAX_DELIVERY_SCORE: f64 = 5.0;

pub const RECENCY_BONUS: f64 = 1.5;
pub const SPECIALIZATION_BONUS: f64 = 1.0;
pub const EXPEDITED_DELIVERY_WEIGHT: f64 = 1.5;
pub const CRITICAL_PROXIMITY_WEIGHT: f64 = 2.0;

const EQUIPMENT_BASE_PRICE: f64 = 5000.0;
const CONSUMABLE_BASE_PRICE: f64 = 500.0;
const PRICE_PER_KM: f64 = 10.0;
const LOYALTY_DISCOUNT: f64 = 0.95;
const PREFERRED_DISCOUNT: f64 = 0.90;

/// Per-run inputs that shape scoring but are not part of either record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    pub ai_enhanced: bool,
    pub today: NaiveDate,
    /// Last supply younger than this earns the recency bonus.
    pub recency_window_days: i64,
    /// Last supply younger than this earns the loyalty discount.
    pub loyalty_window_days: i64,
}

/// Computes the four component scores for one (shortage, supplier) pair.
///
/// In AI-enhanced mode:
/// - a recent transaction adds `RECENCY_BONUS` to preference,
/// - a declared specialty for the resource type adds `SPECIALIZATION_BONUS` to reliability,
/// - critical and high urgency multiply delivery by `EXPEDITED_DELIVERY_WEIGHT`,
/// - critical urgency multiplies distance by `CRITICAL_PROXIMITY_WEIGHT`.
pub fn score_pair(
    shortage: &ResourceShortage,
    supplier: &Supplier,
    distance_km: f64,
    ctx: &ScoringContext,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        distance: (MAX_PROXIMITY_SCORE - distance_km / 10.0).max(0.0),
        reliability: f64::from(supplier.rating),
        preference: if supplier.preferred_vendor {
            PREFERRED_VENDOR_BONUS
        } else {
            0.0
        },
        delivery: MAX_DELIVERY_SCORE - supplier.delivery_time_hours / 10.0,
    };

    if !ctx.ai_enhanced {
        return breakdown;
    }

    if supplied_within(supplier, ctx.today, ctx.recency_window_days) {
        breakdown.preference += RECENCY_BONUS;
    }
    if supplier.specialises_in(&shortage.resource_type) {
        breakdown.reliability += SPECIALIZATION_BONUS;
    }
    if shortage.urgency_level.prioritises_delivery() {
        breakdown.delivery *= EXPEDITED_DELIVERY_WEIGHT;
    }
    if shortage.urgency_level.is_critical() {
        breakdown.distance *= CRITICAL_PROXIMITY_WEIGHT;
    }

    breakdown
}

/// Promised delivery time once urgency expediting is applied.
pub fn estimated_delivery_hours(supplier: &Supplier, urgency: UrgencyLevel) -> f64 {
    supplier.delivery_time_hours * urgency.delivery_multiplier()
}

/// Base price by category plus a per-kilometre freight charge.
/// AI-enhanced mode applies loyalty and preferred-vendor discounts, which compose.
pub fn estimated_price(
    category: ResourceCategory,
    supplier: &Supplier,
    distance_km: f64,
    ctx: &ScoringContext,
) -> f64 {
    let base_price = match category {
        ResourceCategory::Equipment => EQUIPMENT_BASE_PRICE,
        _ => CONSUMABLE_BASE_PRICE,
    };
    let mut price = base_price + distance_km * PRICE_PER_KM;

    if ctx.ai_enhanced {
        if supplied_within(supplier, ctx.today, ctx.loyalty_window_days) {
            price *= LOYALTY_DISCOUNT;
        }
        if supplier.preferred_vendor {
            price *= PREFERRED_DISCOUNT;
        }
    }

    price
}

fn supplied_within(supplier: &Supplier, today: NaiveDate, window_days: i64) -> bool {
    supplier
        .days_since_last_supply(today)
        .map(|days| days < window_days)
        .unwrap_or(false)
}

/// Ranking order: priority score descending, then preferred vendors first,
/// then faster estimated delivery, then supplier id ascending.
pub fn compare_ranked(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.priority_score
        .total_cmp(&a.priority_score)
        .then_with(|| b.preferred_vendor.cmp(&a.preferred_vendor))
        .then_with(|| {
            a.estimated_delivery_hours
                .total_cmp(&b.estimated_delivery_hours)
        })
        .then_with(|| a.supplier_id.cmp(&b.supplier_id))
}

pub fn rank(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(compare_ranked);
}
