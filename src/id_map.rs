//! Identifier map: bijection between arbitrary external node IDs and the
//! dense internal indices `0..n` used everywhere else in the engine.

use crate::error::{GnError, Result};
use std::collections::HashMap;

/// Built once from a raw edge list and consulted at ingest (rewriting
/// endpoints to internal indices) and at output (emitting external IDs).
/// The forward map is released after callers are done rewriting endpoints;
/// keep the `IdMap` around only as long as lookups are still needed.
#[derive(Debug, Clone)]
pub struct IdMap {
    to_internal: HashMap<u64, usize>,
    to_external: Vec<u64>,
}

impl IdMap {
    /// Builds the map from an iterator of raw external endpoint values.
    /// Endpoints are deduplicated and sorted ascending; the internal index
    /// of a value is its position in that sorted order.
    pub fn build(endpoints: impl IntoIterator<Item = u64>) -> Self {
        let mut externals: Vec<u64> = endpoints.into_iter().collect();
        externals.sort_unstable();
        externals.dedup();

        let mut to_internal = HashMap::with_capacity(externals.len());
        for (idx, &external) in externals.iter().enumerate() {
            to_internal.insert(external, idx);
        }

        IdMap {
            to_internal,
            to_external: externals,
        }
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.to_external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_external.is_empty()
    }

    /// Maps an external ID to its dense internal index.
    pub fn to_internal(&self, external: u64) -> Result<usize> {
        self.to_internal
            .get(&external)
            .copied()
            .ok_or_else(|| GnError::unknown_node(format!("external id {} not in build set", external)))
    }

    /// Maps an internal index back to its external ID.
    pub fn to_external(&self, internal: usize) -> Result<u64> {
        self.to_external
            .get(internal)
            .copied()
            .ok_or_else(|| GnError::unknown_node(format!("internal index {} out of range", internal)))
    }
}
