use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Level, RegionRow};
use crate::features::regions::store::RegionStore;

/// PostgreSQL-backed store over the `provinces` .. `villages` tables
pub struct PgRegionStore {
    pool: PgPool,
}

impl PgRegionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// `SELECT` clause mapping any level onto the `RegionRow` columns.
    ///
    /// Table and column names come from `Level`, never from user input.
    fn select_clause(level: Level) -> String {
        let parent = level.parent_column().unwrap_or("NULL::INTEGER");
        format!(
            "SELECT {id} AS id, name, {parent} AS parent_id FROM {table}",
            id = level.id_column(),
            parent = parent,
            table = level.table(),
        )
    }
}

#[async_trait]
impl RegionStore for PgRegionStore {
    async fn list(&self, level: Level) -> Result<Vec<RegionRow>> {
        let query = format!(
            "{} ORDER BY {}",
            Self::select_clause(level),
            level.id_column()
        );

        sqlx::query_as::<_, RegionRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list {}: {:?}", level.table(), e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, level: Level, id: i32) -> Result<Option<RegionRow>> {
        let query = format!(
            "{} WHERE {} = $1",
            Self::select_clause(level),
            level.id_column()
        );

        sqlx::query_as::<_, RegionRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {} {}: {:?}", level, id, e);
                AppError::Database(e)
            })
    }

    async fn find_first_by_name(&self, level: Level, name: &str) -> Result<Option<RegionRow>> {
        let query = format!(
            "{} WHERE name = $1 ORDER BY {} LIMIT 1",
            Self::select_clause(level),
            level.id_column()
        );

        sqlx::query_as::<_, RegionRow>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find {} by name '{}': {:?}", level, name, e);
                AppError::Database(e)
            })
    }

    async fn find_all_by_name(&self, level: Level, name: &str) -> Result<Vec<RegionRow>> {
        let query = format!(
            "{} WHERE name = $1 ORDER BY {}",
            Self::select_clause(level),
            level.id_column()
        );

        sqlx::query_as::<_, RegionRow>(&query)
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find {} rows by name '{}': {:?}", level, name, e);
                AppError::Database(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_clause_for_root_has_null_parent() {
        assert_eq!(
            PgRegionStore::select_clause(Level::Province),
            "SELECT province_id AS id, name, NULL::INTEGER AS parent_id FROM provinces"
        );
    }

    #[test]
    fn test_select_clause_for_child_uses_parent_column() {
        assert_eq!(
            PgRegionStore::select_clause(Level::Village),
            "SELECT village_id AS id, name, cell_id AS parent_id FROM villages"
        );
    }
}
