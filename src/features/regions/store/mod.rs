//! Read access to the administrative hierarchy.
//!
//! Services depend on the [`RegionStore`] trait rather than on a concrete
//! pool so that handlers can be exercised against in-memory doubles.

mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::regions::models::{Level, RegionRow};

pub use postgres::PgRegionStore;

#[async_trait]
pub trait RegionStore: Send + Sync {
    /// Every row of `level`
    async fn list(&self, level: Level) -> Result<Vec<RegionRow>>;

    /// Row of `level` with the given identity
    async fn find_by_id(&self, level: Level, id: i32) -> Result<Option<RegionRow>>;

    /// First row of `level` whose name equals `name` exactly
    async fn find_first_by_name(&self, level: Level, name: &str) -> Result<Option<RegionRow>>;

    /// All rows of `level` whose name equals `name` exactly
    async fn find_all_by_name(&self, level: Level, name: &str) -> Result<Vec<RegionRow>>;
}
