use std::sync::Arc;

use futures::future::try_join_all;
use serde_json::Value;

use crate::core::error::Result;
use crate::features::regions::projection::HierarchyShape;
use crate::features::regions::store::RegionStore;

/// Service for listing Rwanda's administrative hierarchy
pub struct RegionService {
    store: Arc<dyn RegionStore>,
}

impl RegionService {
    pub fn new(store: Arc<dyn RegionStore>) -> Self {
        Self { store }
    }

    /// Read every level the shape covers and fold the rows into its response.
    ///
    /// Any failed read fails the whole listing.
    pub async fn list(&self, shape: &HierarchyShape) -> Result<Vec<Value>> {
        let levels = shape.levels();
        // One store read per level in flight at once: the full village
        // listing holds up to five pool connections (DB_MAX_CONNECTIONS)
        let rows_by_level =
            try_join_all(levels.iter().map(|level| self.store.list(*level))).await?;

        tracing::debug!(
            root = %shape.root(),
            depth = shape.depth(),
            rows = rows_by_level.iter().map(Vec::len).sum::<usize>(),
            "Assembling hierarchy listing"
        );

        Ok(shape.assemble(rows_by_level))
    }
}
