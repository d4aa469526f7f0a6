use std::{net::SocketAddr, str::FromStr, sync::Arc};

use color_eyre::eyre::eyre;

use crate::{
    cache::{MemoryCache, NoopCache, StringCache},
    upstream::DEFAULT_FUEL_PRICE_API_URL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Memory,
    None,
}

impl FromStr for CacheBackend {
    type Err = color_eyre::eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "none" | "off" => Ok(Self::None),
            other => Err(eyre!("unknown cache backend {other:?}, expected memory or none")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub fuel_price_api_url: String,
    pub cache_backend: CacheBackend,
    pub cache_max_capacity: u64,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Self> {
        Ok(Self {
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            fuel_price_api_url: lookup("FUEL_PRICE_API_URL")
                .unwrap_or_else(|| DEFAULT_FUEL_PRICE_API_URL.to_string()),
            cache_backend: parse_or(&lookup, "CACHE_BACKEND", CacheBackend::Memory)?,
            cache_max_capacity: parse_or(&lookup, "CACHE_MAX_CAPACITY", 64)?,
        })
    }

    pub fn build_cache(&self) -> Arc<dyn StringCache> {
        match self.cache_backend {
            CacheBackend::Memory => Arc::new(MemoryCache::new(self.cache_max_capacity)),
            CacheBackend::None => Arc::new(NoopCache),
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> color_eyre::Result<T>
where
    T: FromStr,
    T::Err: Into<color_eyre::eyre::Error>,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.parse::<T>().map_err(|err| {
            let err: color_eyre::eyre::Error = err.into();
            err.wrap_err(format!("invalid {key} value {raw:?}"))
        })
    })
}
