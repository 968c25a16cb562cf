// src/strategy/traits.rs

use std::fmt::Debug;

/// Answers whether a supplier currently holds a resource type.
///
/// We require `Debug` so the engine can be printed with its lookup.
/// We require `Send` + `Sync` because shortages may be scored in parallel.
pub trait InventoryLookup: Debug + Send + Sync {
    /// Returns true when `supplier_id` can ship `resource_type` from stock.
    fn check_stock(&self, supplier_id: &str, resource_type: &str) -> bool;
}

impl<T: InventoryLookup + ?Sized> InventoryLookup for &T {
    fn check_stock(&self, supplier_id: &str, resource_type: &str) -> bool {
        (**self).check_stock(supplier_id, resource_type)
    }
}

impl<T: InventoryLookup + ?Sized> InventoryLookup for Box<T> {
    fn check_stock(&self, supplier_id: &str, resource_type: &str) -> bool {
        (**self).check_stock(supplier_id, resource_type)
    }
}
