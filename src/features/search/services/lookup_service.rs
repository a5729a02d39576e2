use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Level, RegionRow};
use crate::features::regions::projection::Projection;
use crate::features::regions::store::RegionStore;
use crate::features::search::normalization::normalize_name;

/// Service resolving entities by human-entered name
pub struct LookupService {
    store: Arc<dyn RegionStore>,
}

impl LookupService {
    pub fn new(store: Arc<dyn RegionStore>) -> Self {
        Self { store }
    }

    /// First row of `level` matching the normalized `name`, with its
    /// ancestor chain nested under singular keys (`cell`, `sector`, ...).
    pub async fn find_one(&self, level: Level, name: &str) -> Result<Value> {
        let key = normalize_name(level, name);
        tracing::debug!(%level, raw = name, normalized = %key, "Looking up by name");

        let row = self
            .store
            .find_first_by_name(level, &key)
            .await?
            .ok_or_else(|| not_found(level))?;

        self.with_ancestors(level, row).await.map(Value::Object)
    }

    /// Every row of `level` matching the normalized `name`, each with its
    /// ancestor chain. Zero matches is a not-found outcome.
    pub async fn find_all(&self, level: Level, name: &str) -> Result<Vec<Value>> {
        let key = normalize_name(level, name);
        tracing::debug!(%level, raw = name, normalized = %key, "Looking up all by name");

        let rows = self.store.find_all_by_name(level, &key).await?;
        if rows.is_empty() {
            return Err(not_found(level));
        }

        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(Value::Object(self.with_ancestors(level, row).await?));
        }
        Ok(results)
    }

    /// Render `row` with every column, then attach each ancestor inside the
    /// previous one: village -> cell -> sector -> district -> province.
    async fn with_ancestors(&self, level: Level, row: RegionRow) -> Result<Map<String, Value>> {
        let mut chain = vec![(level, row)];

        while let Some((current_level, current_row)) = chain.last() {
            let (Some(parent_level), Some(parent_id)) =
                (current_level.parent(), current_row.parent_id)
            else {
                break;
            };

            let parent = self
                .store
                .find_by_id(parent_level, parent_id)
                .await?
                .ok_or_else(|| {
                    AppError::Internal(format!(
                        "{} {} references missing {} {}",
                        current_level, current_row.id, parent_level, parent_id
                    ))
                })?;
            chain.push((parent_level, parent));
        }

        let mut nested: Option<(Level, Map<String, Value>)> = None;
        for (chain_level, chain_row) in chain.into_iter().rev() {
            let mut object = Projection::ID_NAME_PARENT.project(chain_level, &chain_row);
            if let Some((parent_level, parent_object)) = nested.take() {
                object.insert(
                    parent_level.singular_key().to_string(),
                    Value::Object(parent_object),
                );
            }
            nested = Some((chain_level, object));
        }

        nested
            .map(|(_, object)| object)
            .ok_or_else(|| AppError::Internal("empty ancestor chain".to_string()))
    }
}

fn not_found(level: Level) -> AppError {
    AppError::NotFound(format!("{} not found", level.label()))
}
