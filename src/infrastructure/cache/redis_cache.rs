//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheStorage};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::Value;
use tracing::{debug, error, info, warn};

/// Default namespace prepended to every key.
pub const DEFAULT_KEY_PREFIX: &str = "customer-cache:";

/// Redis cache implementation.
///
/// Values are stored as JSON strings with a plain `SET`, so entries live
/// until removed. Uses `ConnectionManager` for connection reuse.
/// Backend I/O errors are fail-open: logged, then reported as a miss or a
/// no-op. Stored data that is not JSON is a [`CacheError::TypeMismatch`].
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every key (`CACHE_KEY_PREFIX`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        prefixed_key(&self.key_prefix, key)
    }
}

fn prefixed_key(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}

/// Decodes a stored payload. Anything that is not JSON was not written by
/// this cache and is reported as a type mismatch rather than a miss.
fn decode_payload(key: &str, payload: &str) -> CacheResult<Value> {
    serde_json::from_str(payload).map_err(|e| CacheError::TypeMismatch {
        key: key.to_string(),
        expected: "JSON",
        reason: e.to_string(),
    })
}

#[async_trait]
impl CacheStorage for RedisCache {
    async fn store_value(&self, key: &str, value: Value) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let payload = serde_json::to_string(&value)
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        let mut conn = self.client.clone();

        match conn.set::<_, _, ()>(&full_key, payload).await {
            Ok(_) => {
                debug!("Cache SET: {}", key);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn retrieve_value(&self, key: &str) -> CacheResult<Option<Value>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&full_key).await {
            Ok(Some(payload)) => {
                debug!("Cache HIT: {}", key);
                decode_payload(key, &payload).map(Some)
            }
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&full_key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: {}", key);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefixed_key() {
        assert_eq!(
            prefixed_key(DEFAULT_KEY_PREFIX, "GetAllCustomers"),
            "customer-cache:GetAllCustomers"
        );
        assert_eq!(prefixed_key("tenant-a:", "k"), "tenant-a:k");
    }

    #[test]
    fn test_decode_payload_json() {
        let value = decode_payload("k", r#"[{"id":1}]"#).unwrap();

        assert_eq!(value, json!([{ "id": 1 }]));
    }

    #[test]
    fn test_decode_payload_empty_list() {
        assert_eq!(decode_payload("k", "[]").unwrap(), json!([]));
    }

    #[test]
    fn test_decode_payload_not_json_is_type_mismatch() {
        let result = decode_payload("GetAllCustomers", "not json");

        match result {
            Err(CacheError::TypeMismatch { key, expected, .. }) => {
                assert_eq!(key, "GetAllCustomers");
                assert_eq!(expected, "JSON");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }
}
