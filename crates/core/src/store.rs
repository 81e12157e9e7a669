//! Raw JSON store
//!
//! A per-request accumulator that keeps the original JSON of every mapped value
//! so callers can inspect exactly what the API returned. The caller owns the
//! store and hands it to the mapping functions, which only write to it when
//! [`Configuration::is_json_store_enabled`](crate::config::Configuration::is_json_store_enabled)
//! is set. Every top-level mapping call clears it first.

use std::collections::HashMap;

use serde_json::Value;

/// Key under which a mapped value's raw JSON is stored
///
/// Entities are keyed by kind and `id`, the same identity their `Eq` and
/// `Hash` impls use. Lists are keyed by the kind of their elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Entity {
        kind: &'static str,
        id: Option<String>,
    },
    List {
        kind: &'static str,
    },
}

impl StoreKey {
    pub fn entity(kind: &'static str, id: Option<&str>) -> Self {
        StoreKey::Entity {
            kind,
            id: id.map(str::to_string),
        }
    }

    pub fn list(kind: &'static str) -> Self {
        StoreKey::List { kind }
    }
}

/// Values that can be looked up in a [`JsonStore`]
pub trait StoreKeyed {
    fn store_key(&self) -> StoreKey;
}

#[derive(Debug, Default, Clone)]
pub struct JsonStore {
    entries: HashMap<StoreKey, Value>,
}

impl JsonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record the raw JSON a value was mapped from, replacing any previous entry
    /// with the same identity.
    pub fn register<K: StoreKeyed + ?Sized>(&mut self, value: &K, json: Value) {
        let key = value.store_key();
        log::trace!("Registering raw JSON for {:?}", key);
        self.entries.insert(key, json);
    }

    pub fn raw_json<K: StoreKeyed + ?Sized>(&self, value: &K) -> Option<&Value> {
        self.entries.get(&value.store_key())
    }

    /// Compact string form of the stored JSON
    pub fn raw_json_string<K: StoreKeyed + ?Sized>(&self, value: &K) -> Option<String> {
        self.raw_json(value).map(Value::to_string)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
