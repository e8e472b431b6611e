//! Persistent key-value cache for the last-known ledger snapshot.
//!
//! The cache is an injected capability rather than ambient storage, so the
//! dashboard can run against browser `localStorage`, an in-memory map in
//! tests, or any other backend that stores strings under keys.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Cache key for the serialized transaction list.
pub const TRANSACTIONS_KEY: &str = "@finview:transactions";

/// Cache key for the serialized balance snapshot.
pub const BALANCE_KEY: &str = "@finview:balance";

/// A key-value store durable across reloads.
pub trait LedgerCache {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Error decoding previously cached text.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cached value under `{key}` is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory cache backend for tests and non-browser embeddings.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Decodes the JSON stored under `key`, if anything is stored at all.
pub fn read_json<T: DeserializeOwned>(
    cache: &impl LedgerCache,
    key: &str,
) -> Result<Option<T>, CacheError> {
    match cache.get(key) {
        Some(text) => serde_json::from_str(&text).map(Some).map_err(|source| {
            CacheError::Corrupt {
                key: key.to_string(),
                source,
            }
        }),
        None => Ok(None),
    }
}

/// Serializes `value` as JSON under `key`.
pub fn write_json<T: Serialize>(cache: &impl LedgerCache, key: &str, value: &T) {
    if let Ok(text) = serde_json::to_string(value) {
        cache.set(key, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Balance;

    #[test]
    fn test_get_returns_what_set_stored() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("missing"), None);

        cache.set("key", "first");
        assert_eq!(cache.get("key"), Some("first".to_string()));

        cache.set("key", "second");
        assert_eq!(cache.get("key"), Some("second".to_string()));
    }

    #[test]
    fn test_json_round_trip() {
        let cache = MemoryCache::new();
        let balance = Balance {
            income: "100.00".to_string(),
            outcome: "40.00".to_string(),
            total: "60.00".to_string(),
        };

        write_json(&cache, BALANCE_KEY, &balance);
        let restored: Option<Balance> = read_json(&cache, BALANCE_KEY).unwrap();
        assert_eq!(restored, Some(balance));
    }

    #[test]
    fn test_read_json_missing_key() {
        let cache = MemoryCache::new();
        let restored: Option<Balance> = read_json(&cache, BALANCE_KEY).unwrap();
        assert_eq!(restored, None);
    }

    #[test]
    fn test_read_json_corrupt_value() {
        let cache = MemoryCache::new();
        cache.set(BALANCE_KEY, "{ not json");

        let result: Result<Option<Balance>, _> = read_json(&cache, BALANCE_KEY);
        let err = result.unwrap_err();
        assert!(err.to_string().contains(BALANCE_KEY));
    }
}
