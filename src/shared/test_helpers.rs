use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;

use crate::core::app::{build_app, Interceptors};
use crate::core::config::{
    AppConfig, CacheConfig, Config, DatabaseConfig, RateLimitConfig, SecurityHeadersConfig,
    SwaggerConfig,
};
use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Level, RegionRow};
use crate::features::regions::store::RegionStore;

/// Store double holding rows in memory, returned in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegionStore {
    rows: BTreeMap<Level, Vec<RegionRow>>,
}

impl InMemoryRegionStore {
    /// Two provinces with a small subtree each. Cell "Kigarama" and village
    /// "Bugomba" appear twice so duplicate-name lookups can be checked.
    pub fn sample() -> Self {
        Self::default()
            .with_row(Level::Province, RegionRow::new(1, "KIGALI CITY", None))
            .with_row(Level::Province, RegionRow::new(2, "SOUTHERN PROVINCE", None))
            .with_row(Level::District, RegionRow::new(11, "NYARUGENGE", Some(1)))
            .with_row(Level::District, RegionRow::new(12, "GASABO", Some(1)))
            .with_row(Level::District, RegionRow::new(21, "NYANZA", Some(2)))
            .with_row(Level::Sector, RegionRow::new(111, "GITEGA", Some(11)))
            .with_row(Level::Sector, RegionRow::new(112, "KIMISAGARA", Some(11)))
            .with_row(Level::Sector, RegionRow::new(121, "REMERA", Some(12)))
            .with_row(Level::Sector, RegionRow::new(211, "BUSASAMANA", Some(21)))
            .with_row(Level::Cell, RegionRow::new(1111, "Akabahizi", Some(111)))
            .with_row(Level::Cell, RegionRow::new(1112, "Kigarama", Some(111)))
            .with_row(Level::Cell, RegionRow::new(1211, "Rukiri I", Some(121)))
            .with_row(Level::Cell, RegionRow::new(2111, "Kigarama", Some(211)))
            .with_row(Level::Village, RegionRow::new(11111, "Bugomba", Some(1111)))
            .with_row(Level::Village, RegionRow::new(11112, "Gihanga", Some(1111)))
            .with_row(Level::Village, RegionRow::new(12111, "Amahoro", Some(1211)))
            .with_row(Level::Village, RegionRow::new(21111, "Bugomba", Some(2111)))
    }

    pub fn with_row(mut self, level: Level, row: RegionRow) -> Self {
        self.rows.entry(level).or_default().push(row);
        self
    }

    pub fn rows(&self, level: Level) -> &[RegionRow] {
        self.rows.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[async_trait]
impl RegionStore for InMemoryRegionStore {
    async fn list(&self, level: Level) -> Result<Vec<RegionRow>> {
        Ok(self.rows(level).to_vec())
    }

    async fn find_by_id(&self, level: Level, id: i32) -> Result<Option<RegionRow>> {
        Ok(self.rows(level).iter().find(|row| row.id == id).cloned())
    }

    async fn find_first_by_name(&self, level: Level, name: &str) -> Result<Option<RegionRow>> {
        Ok(self.rows(level).iter().find(|row| row.name == name).cloned())
    }

    async fn find_all_by_name(&self, level: Level, name: &str) -> Result<Vec<RegionRow>> {
        Ok(self
            .rows(level)
            .iter()
            .filter(|row| row.name == name)
            .cloned()
            .collect())
    }
}

/// Store double whose reads fail, either always or only for one level.
/// Reads of other levels are served from [`InMemoryRegionStore::sample`].
#[derive(Debug, Clone)]
pub struct FailingRegionStore {
    failing: Option<Level>,
    fallback: InMemoryRegionStore,
}

impl FailingRegionStore {
    pub fn always() -> Self {
        Self {
            failing: None,
            fallback: InMemoryRegionStore::sample(),
        }
    }

    pub fn on_level(level: Level) -> Self {
        Self {
            failing: Some(level),
            fallback: InMemoryRegionStore::sample(),
        }
    }

    fn check(&self, level: Level) -> Result<()> {
        match self.failing {
            Some(failing) if failing != level => Ok(()),
            _ => Err(AppError::Database(sqlx::Error::PoolTimedOut)),
        }
    }
}

#[async_trait]
impl RegionStore for FailingRegionStore {
    async fn list(&self, level: Level) -> Result<Vec<RegionRow>> {
        self.check(level)?;
        self.fallback.list(level).await
    }

    async fn find_by_id(&self, level: Level, id: i32) -> Result<Option<RegionRow>> {
        self.check(level)?;
        self.fallback.find_by_id(level, id).await
    }

    async fn find_first_by_name(&self, level: Level, name: &str) -> Result<Option<RegionRow>> {
        self.check(level)?;
        self.fallback.find_first_by_name(level, name).await
    }

    async fn find_all_by_name(&self, level: Level, name: &str) -> Result<Vec<RegionRow>> {
        self.check(level)?;
        self.fallback.find_all_by_name(level, name).await
    }
}

/// Config with rate limiting and caching off, so tests see raw handler output
pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgres://localhost/rwanda_locations_test".to_string(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout_secs: 1,
            idle_timeout_secs: 60,
            max_lifetime_secs: 60,
        },
        rate_limit: RateLimitConfig {
            enabled: false,
            ..RateLimitConfig::default()
        },
        cache: CacheConfig {
            enabled: false,
            ttl: Duration::from_secs(300),
            max_entries: 1000,
        },
        security_headers: SecurityHeadersConfig::default(),
        swagger: SwaggerConfig {
            title: "Rwanda Locations API".to_string(),
            version: "0.1.0".to_string(),
            description: "Read-only access to Rwanda's administrative divisions".to_string(),
        },
    }
}

/// Full application over `store`, with [`test_config`]
pub fn test_server<S: RegionStore + 'static>(store: S) -> TestServer {
    let config = test_config();
    let app = build_app(Arc::new(store), &config, &Interceptors::from_config(&config));
    TestServer::new(app).unwrap()
}

/// Sorted keys of a JSON object
pub fn object_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}
