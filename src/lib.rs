//! Procurement recommendation engine for a hospital network.
//!
//! Given a hospital's critical shortages and a supplier catalog, ranks which
//! supplier should fulfil each shortage by proximity, reliability,
//! urgency-adjusted delivery time and estimated price.

pub mod engine;
pub mod error;
pub mod io;
pub mod model;
pub mod strategy;

pub use engine::config::EngineConfig;
pub use engine::recommender::{
    eligible_suppliers, recommend_default, RecommendationEngine, RecommendationRequest,
};
pub use error::{ProcurementError, Result};
pub use model::recommendation::{
    Diagnostic, RecommendationReport, Recommendation, RecordRef, ScoreBreakdown,
};
pub use model::shortage::{ResourceShortage, UrgencyLevel};
pub use model::supplier::{Coordinates, ResourceCategory, Supplier, SupplierStatus};
pub use strategy::geo::distance_km;
pub use strategy::implementations::{AlwaysInStock, FixedStock, RandomStock};
pub use strategy::traits::InventoryLookup;
