// src/strategy/implementations.rs

use crate::strategy::traits::InventoryLookup;
use rand::Rng;
use std::collections::HashMap;

/// Share of supplier/resource pairs the mocked inventory reports as stocked.
pub const DEFAULT_STOCK_PROBABILITY: f64 = 0.7;

// =========================================================================
// 1. Random Stock (mocked availability)
// =========================================================================

/// Reports stock by coin flip. Stands in for a real inventory query until
/// suppliers expose one; every call is independent.
#[derive(Debug, Clone)]
pub struct RandomStock {
    probability: f64,
}

impl RandomStock {
    /// Probabilities outside `[0, 1]` are clamped; NaN falls back to the default.
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() {
            DEFAULT_STOCK_PROBABILITY
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomStock {
    fn default() -> Self {
        Self::new(DEFAULT_STOCK_PROBABILITY)
    }
}

impl InventoryLookup for RandomStock {
    fn check_stock(&self, _supplier_id: &str, _resource_type: &str) -> bool {
        let mut rng = rand::thread_rng();
        rng.gen_bool(self.probability)
    }
}

// =========================================================================
// 2. Always In Stock
// =========================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysInStock;

impl InventoryLookup for AlwaysInStock {
    fn check_stock(&self, _supplier_id: &str, _resource_type: &str) -> bool {
        true
    }
}

// =========================================================================
// 3. Fixed Stock (table-driven)
// =========================================================================

/// Answers from an explicit (supplier, resource type) table, falling back to
/// `default` for pairs it does not know. Used to pin availability in tests
/// and when a caller already holds an inventory snapshot.
#[derive(Debug, Clone, Default)]
pub struct FixedStock {
    entries: HashMap<(String, String), bool>,
    default: bool,
}

impl FixedStock {
    pub fn new(default: bool) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    pub fn with_entry(
        mut self,
        supplier_id: impl Into<String>,
        resource_type: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        self.entries
            .insert((supplier_id.into(), resource_type.into()), in_stock);
        self
    }
}

impl InventoryLookup for FixedStock {
    fn check_stock(&self, supplier_id: &str, resource_type: &str) -> bool {
        self.entries
            .get(&(supplier_id.to_string(), resource_type.to_string()))
            .copied()
            .unwrap_or(self.default)
    }
}
