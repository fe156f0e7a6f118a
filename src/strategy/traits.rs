// src/strategy/traits.rs

use std::fmt::Debug;

/// Decides the reorder point for the current stock level.
///
/// We require `Send` + `Sync` so a policy can be shared across worker threads.
pub trait ReorderRule: Debug + Send + Sync {
    /// Returns the threshold at or below which an order is placed.
    ///
    /// # Arguments
    /// * `inventory` - Stock after this step's failure, before the clamp at
    ///   zero, so it may be -1.
    fn reorder_point(&self, inventory: i64) -> u32;
}
