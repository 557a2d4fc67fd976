#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use customer_cache::domain::entities::Customer;
use customer_cache::infrastructure::cache::{CacheResult, CacheStorage, MemoryCache};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn create_test_customer(id: i64, name: &str) -> Customer {
    Customer::new(
        id,
        name.to_string(),
        Some(format!("{}@example.com", name.to_lowercase())),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}

pub fn create_test_customers() -> Vec<Customer> {
    vec![
        create_test_customer(1, "Alice"),
        create_test_customer(2, "Bob"),
        create_test_customer(3, "Carol"),
    ]
}

/// Memory cache that counts calls per operation.
#[derive(Default)]
pub struct CountingCache {
    inner: MemoryCache,
    pub stores: AtomicUsize,
    pub retrieves: AtomicUsize,
    pub removes: AtomicUsize,
}

impl CountingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stores(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }

    pub fn retrieves(&self) -> usize {
        self.retrieves.load(Ordering::SeqCst)
    }

    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStorage for CountingCache {
    async fn store_value(&self, key: &str, value: Value) -> CacheResult<()> {
        self.stores.fetch_add(1, Ordering::SeqCst);
        self.inner.store_value(key, value).await
    }

    async fn retrieve_value(&self, key: &str) -> CacheResult<Option<Value>> {
        self.retrieves.fetch_add(1, Ordering::SeqCst);
        self.inner.retrieve_value(key).await
    }

    async fn remove(&self, key: &str) -> CacheResult<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key).await
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }

    fn backend_name(&self) -> &'static str {
        "counting"
    }
}
