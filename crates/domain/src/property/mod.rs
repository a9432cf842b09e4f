//! Property store contract and property source types

mod source;

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

pub use source::{PropertySource, PropertySources};

/// Read-only mapping from property key to property value.
///
/// This is the lookup surface placeholder resolution runs against. It is only
/// ever read through `&self`, so a store may be shared across concurrent
/// callers as long as writers are serialized by its owner.
pub trait PropertyStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&str>;

    /// Returns true if a value is stored under `key`.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value stored under `key`, or `default` when it is absent.
    ///
    /// This is a single query against the store.
    fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }
}

impl<S: BuildHasher> PropertyStore for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }

    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl PropertyStore for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }

    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }
}

impl<T: PropertyStore + ?Sized> PropertyStore for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        (**self).get_or(key, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_store() {
        let map = HashMap::from([("host".to_string(), "localhost".to_string())]);

        assert_eq!(PropertyStore::get(&map, "host"), Some("localhost"));
        assert!(PropertyStore::contains_key(&map, "host"));
        assert!(!PropertyStore::contains_key(&map, "port"));
    }

    #[test]
    fn test_get_or_fallback() {
        let map = BTreeMap::from([("port".to_string(), "8080".to_string())]);

        assert_eq!(map.get_or("port", "80"), "8080");
        assert_eq!(map.get_or("host", "localhost"), "localhost");
    }

    #[test]
    fn test_empty_value_is_present() {
        let map = HashMap::from([("empty".to_string(), String::new())]);

        assert!(PropertyStore::contains_key(&map, "empty"));
        assert_eq!(map.get_or("empty", "fallback"), "");
    }

    #[test]
    fn test_store_through_reference() {
        fn lookup<S: PropertyStore>(store: S, key: &str) -> Option<String> {
            store.get(key).map(str::to_owned)
        }

        let map = HashMap::from([("a".to_string(), "1".to_string())]);
        assert_eq!(lookup(&map, "a"), Some("1".to_string()));
    }
}
