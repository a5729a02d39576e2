use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub cache: CacheConfig,
    pub security_headers: SecurityHeadersConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Fixed-window, per-client request limit
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub window: Duration,
    pub max_requests: u32,
}

/// In-memory cache for successful GET responses
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl: Duration,
    pub max_entries: u64,
}

#[derive(Debug, Clone)]
pub struct SecurityHeadersConfig {
    pub hsts_max_age_secs: u64,
    pub content_security_policy: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            rate_limit: RateLimitConfig::from_env()?,
            cache: CacheConfig::from_env()?,
            security_headers: SecurityHeadersConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

/// Read `key` from the environment, falling back to `default` when unset.
fn parse_var<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid value, got '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 3400;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", Self::DEFAULT_PORT)?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_var("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_var("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
        })
    }
}

impl RateLimitConfig {
    const DEFAULT_WINDOW_SECS: u64 = 15 * 60;
    const DEFAULT_MAX_REQUESTS: u32 = 100;

    pub fn from_env() -> Result<Self, String> {
        let enabled = parse_var("RATE_LIMIT_ENABLED", true)?;
        let window_secs = parse_var("RATE_LIMIT_WINDOW_SECS", Self::DEFAULT_WINDOW_SECS)?;
        let max_requests = parse_var("RATE_LIMIT_MAX_REQUESTS", Self::DEFAULT_MAX_REQUESTS)?;

        if window_secs == 0 {
            return Err("RATE_LIMIT_WINDOW_SECS must be greater than zero".to_string());
        }

        Ok(Self {
            enabled,
            window: Duration::from_secs(window_secs),
            max_requests,
        })
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window: Duration::from_secs(Self::DEFAULT_WINDOW_SECS),
            max_requests: Self::DEFAULT_MAX_REQUESTS,
        }
    }
}

impl CacheConfig {
    const DEFAULT_TTL_SECS: u64 = 5 * 60;
    const DEFAULT_MAX_ENTRIES: u64 = 1000;

    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            enabled: parse_var("CACHE_ENABLED", true)?,
            ttl: Duration::from_secs(parse_var("CACHE_TTL_SECS", Self::DEFAULT_TTL_SECS)?),
            max_entries: parse_var("CACHE_MAX_ENTRIES", Self::DEFAULT_MAX_ENTRIES)?,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Duration::from_secs(Self::DEFAULT_TTL_SECS),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl SecurityHeadersConfig {
    const DEFAULT_HSTS_MAX_AGE_SECS: u64 = 15_552_000; // 180 days
    const DEFAULT_CSP: &'static str = "default-src 'self';base-uri 'self';font-src 'self' https: data:;form-action 'self';frame-ancestors 'self';img-src 'self' data:;object-src 'none';script-src 'self';script-src-attr 'none';style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests";

    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            hsts_max_age_secs: parse_var("HSTS_MAX_AGE_SECS", Self::DEFAULT_HSTS_MAX_AGE_SECS)?,
            content_security_policy: env::var("CONTENT_SECURITY_POLICY")
                .unwrap_or_else(|_| Self::DEFAULT_CSP.to_string()),
        })
    }
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            hsts_max_age_secs: Self::DEFAULT_HSTS_MAX_AGE_SECS,
            content_security_policy: Self::DEFAULT_CSP.to_string(),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Rwanda Locations API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Read-only access to Rwanda's administrative divisions".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        let value: u32 = parse_var("RWANDA_LOCATIONS_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_var_reads_and_trims_value() {
        env::set_var("RWANDA_LOCATIONS_TEST_PARSE_OK", " 250 ");
        let value: u64 = parse_var("RWANDA_LOCATIONS_TEST_PARSE_OK", 0).unwrap();
        assert_eq!(value, 250);
    }

    #[test]
    fn test_parse_var_rejects_invalid_number() {
        env::set_var("RWANDA_LOCATIONS_TEST_PARSE_BAD", "fifteen");
        let err = parse_var::<u64>("RWANDA_LOCATIONS_TEST_PARSE_BAD", 0).unwrap_err();
        assert!(err.contains("RWANDA_LOCATIONS_TEST_PARSE_BAD"));
        assert!(err.contains("fifteen"));
    }

    #[test]
    fn test_defaults_match_documented_limits() {
        let rate_limit = RateLimitConfig::default();
        assert_eq!(rate_limit.window, Duration::from_secs(900));
        assert_eq!(rate_limit.max_requests, 100);

        let cache = CacheConfig::default();
        assert_eq!(cache.ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3400,
            cors_allowed_origins: vec!["*".to_string()],
        };
        assert_eq!(app.server_address(), "0.0.0.0:3400");
    }
}
