// src/strategy/implementations.rs

use crate::strategy::traits::ReorderRule;
use log::trace;
use serde::{Deserialize, Serialize};

// =========================================================================
// 1. Reorder Table
// =========================================================================

/// A reorder point per stock level, e.g. learned by the optimizer.
///
/// `thresholds[level]` applies at that level. Levels outside the table
/// (negative, or at/after its end) use `fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderTable {
    pub thresholds: Vec<u32>,
    pub fallback: u32,
}

impl ReorderTable {
    pub fn new(thresholds: Vec<u32>, fallback: u32) -> Self {
        Self {
            thresholds,
            fallback,
        }
    }

    /// Table entry for `inventory`, or `None` if the level is not covered.
    pub fn lookup(&self, inventory: i64) -> Option<u32> {
        usize::try_from(inventory)
            .ok()
            .and_then(|level| self.thresholds.get(level).copied())
    }
}

impl ReorderRule for ReorderTable {
    fn reorder_point(&self, inventory: i64) -> u32 {
        match self.lookup(inventory) {
            Some(threshold) => threshold,
            None => {
                trace!(
                    "Level {} outside reorder table of {} entries, using fallback {}",
                    inventory,
                    self.thresholds.len(),
                    self.fallback
                );
                self.fallback
            }
        }
    }
}

// =========================================================================
// 2. Reorder Policy
// =========================================================================

/// The policy driving one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReorderPolicy {
    /// One reorder point regardless of stock level.
    Scalar(u32),
    /// Reorder point looked up by stock level.
    TableLookup(ReorderTable),
}

impl ReorderPolicy {
    /// Wraps a learned table, falling back to `fallback` outside its domain.
    pub fn from_table(thresholds: Vec<u32>, fallback: u32) -> Self {
        ReorderPolicy::TableLookup(ReorderTable::new(thresholds, fallback))
    }
}

impl ReorderRule for ReorderPolicy {
    fn reorder_point(&self, inventory: i64) -> u32 {
        match self {
            ReorderPolicy::Scalar(threshold) => *threshold,
            ReorderPolicy::TableLookup(table) => table.reorder_point(inventory),
        }
    }
}
