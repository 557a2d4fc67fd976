//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the service
//! is built.
//!
//! ## Cache backend
//!
//! ```bash
//! export CACHE_BACKEND="memory"   # default, in-process map
//! export CACHE_BACKEND="redis"    # requires REDIS_URL or REDIS_HOST
//! export CACHE_BACKEND="none"     # caching disabled
//! ```
//!
//! ### Redis: full URL or individual components
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//!
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! ## Optional Variables
//!
//! - `CACHE_KEY_PREFIX` - Redis key namespace (default: `customer-cache:`)
//! - `CUSTOMER_SEED_FILE` - JSON array of customers served by the data source
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::infrastructure::cache::DEFAULT_KEY_PREFIX;
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which [`crate::infrastructure::cache::CacheStorage`] implementation to inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackend {
    #[default]
    Memory,
    Redis,
    None,
}

impl FromStr for CacheBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            "none" | "disabled" => Ok(Self::None),
            other => anyhow::bail!(
                "CACHE_BACKEND must be 'memory', 'redis' or 'none', got '{}'",
                other
            ),
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Memory => "memory",
            Self::Redis => "redis",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub cache_backend: CacheBackend,
    pub redis_url: Option<String>,
    /// Namespace prepended to every Redis key. Has no effect for other backends.
    pub cache_key_prefix: String,
    /// Optional JSON file seeding the in-memory customer data source.
    pub customer_seed_file: Option<PathBuf>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_backend: CacheBackend::default(),
            redis_url: None,
            cache_key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            customer_seed_file: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CACHE_BACKEND` is not a known backend.
    pub fn from_env() -> Result<Self> {
        let cache_backend = match env::var("CACHE_BACKEND") {
            Ok(v) => v.parse().context("Failed to parse CACHE_BACKEND")?,
            Err(_) => CacheBackend::default(),
        };

        let redis_url = Self::load_redis_url();

        let cache_key_prefix =
            env::var("CACHE_KEY_PREFIX").unwrap_or_else(|_| DEFAULT_KEY_PREFIX.to_string());

        let customer_seed_file = env::var("CUSTOMER_SEED_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            cache_backend,
            redis_url,
            cache_key_prefix,
            customer_seed_file,
            log_level,
            log_format,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - the backend is `redis` but no Redis URL is configured
    /// - the backend is `redis` and the Redis URL has an unknown scheme
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.cache_backend == CacheBackend::Redis {
            let Some(ref redis_url) = self.redis_url else {
                anyhow::bail!("CACHE_BACKEND=redis requires REDIS_URL or REDIS_HOST");
            };

            if !redis_url.starts_with("redis://") && !redis_url.starts_with("rediss://") {
                anyhow::bail!(
                    "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                    mask_connection_string(redis_url)
                );
            }
        }

        if self.cache_key_prefix.is_empty() {
            anyhow::bail!("CACHE_KEY_PREFIX must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Cache backend: {}", self.cache_backend);

        if self.cache_backend == CacheBackend::Redis
            && let Some(ref redis_url) = self.redis_url
        {
            tracing::info!("  Redis: {}", mask_connection_string(redis_url));
            tracing::info!("  Key prefix: {}", self.cache_key_prefix);
        }

        match self.customer_seed_file {
            Some(ref path) => tracing::info!("  Customer seed file: {}", path.display()),
            None => tracing::info!("  Customer seed file: none (empty data source)"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// `redis://:password@host:port/db` becomes `redis://:***@host:port/db`.
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables are malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
