//! String keyed cache used by the fuel price service.
//!
//! Only two capabilities are needed: read a string and write a string with an
//! absolute expiration. Backends that cannot be reached should report an error,
//! callers treat that the same as a miss.

use std::{
    fmt,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use moka::{future::Cache, Expiry};

use crate::error::CacheError;

#[async_trait]
pub trait StringCache: Send + Sync + fmt::Debug {
    async fn get_string(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set_string(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;
}

#[derive(Debug, Clone)]
struct CachedString {
    value: String,
    ttl: Duration,
}

/// Expires every entry a fixed time after it was last written.
struct AbsoluteExpiry;

impl Expiry<String, CachedString> for AbsoluteExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedString,
        _current_time: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedString,
        _current_time: Instant,
        _current_duration: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-process cache backed by moka.
#[derive(Clone)]
pub struct MemoryCache {
    inner: Cache<String, CachedString>,
}

impl MemoryCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .expire_after(AbsoluteExpiry)
                .build(),
        }
    }
}

impl fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entry_count", &self.inner.entry_count())
            .finish()
    }
}

#[async_trait]
impl StringCache for MemoryCache {
    async fn get_string(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.inner.get(key).map(|entry| entry.value))
    }

    async fn set_string(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.inner
            .insert(key.to_owned(), CachedString { value, ttl })
            .await;
        Ok(())
    }
}

/// Never stores anything, every read is a miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl StringCache for NoopCache {
    async fn get_string(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set_string(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }
}
