//! Custom actions for the Product actor.
//!
//! [`ProductAction`] operates on a single product; [`ProductStoreAction`]
//! operates on the whole catalog in one actor turn, which is what the order
//! workflow relies on for its bulk stock decrement.

use crate::model::StockLevel;

/// Operations on a single product beyond standard CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
}

/// Results from [`ProductAction`]s, variant for variant.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// The current stock level.
    CheckStock(u32),
}

/// Operations over the whole product store.
#[derive(Debug, Clone)]
pub enum ProductStoreAction {
    /// Sets each listed product's stock to the given absolute quantity.
    /// Ids with no matching product are ignored.
    UpdateQuantities(Vec<StockLevel>),
}
