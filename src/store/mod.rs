// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Insertion-ordered key/value store.
//!
//! Values live in an `FxHashMap` keyed by string, and a separate key
//! vector records the order entries were inserted in (or the order the
//! last `shuffle`/`sort` left them in). Every traversal, export, and
//! JSON rendering walks the key vector, so output order never depends on
//! hashing.
//!
//! # Invariants
//!
//! - The key vector holds exactly the keys of the map, each once.
//! - Overwriting an existing key keeps its position; new keys go last.
//!
//! Both are checked after every mutation in debug builds.

mod cursor;
mod numeric;
mod order;
mod step;

use std::fmt;
use std::ops::Index;
use std::ops::IndexMut;

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::de::Deserialize;
use serde::de::Deserializer;
use serde::ser::Serialize;
use serde::ser::SerializeMap;
use serde::ser::Serializer;
use serde_json::Map;
use serde_json::Value;
use tracing::debug;
use tracing::trace;

use crate::error::Error;
use crate::error::Result;

pub use cursor::Cursor;
pub use numeric::Numeric;
pub use order::SortOrder;
pub use order::compare_keys;
pub use step::Step;

/// Read through `Index` for keys that are not present.
static NULL: Value = Value::Null;

/// A string-keyed store that remembers key order.
#[derive(Clone, Default, PartialEq)]
pub struct Store {
    /// Values by key.
    items: FxHashMap<String, Value>,
    /// Keys in iteration order.
    keys: Vec<String>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Store {
        return Store {
            items: FxHashMap::default(),
            keys: Vec::new(),
        };
    }

    /// Parse a JSON object into a store, keeping the document's key order.
    pub fn from_json(json: &str) -> Result<Store> {
        return match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Store::from(map)),
            _ => Err(Error::NotAnObject),
        };
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        return self.keys.len();
    }

    /// Check if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.keys.is_empty();
    }

    /// Check if `key` is present. A key holding `null` is still present.
    #[inline]
    pub fn has(&self, key: &str) -> bool {
        return self.items.contains_key(key);
    }

    /// Get the value of a key, if present.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        return self.items.get(key);
    }

    /// Get the value of a key, or `default` if it is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        return self.items.get(key).unwrap_or(default);
    }

    /// Get a mutable reference to the value of a key.
    ///
    /// This cannot add or remove keys, so key order is unaffected.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        return self.items.get_mut(key);
    }

    /// Set the value of a key.
    ///
    /// A new key is appended to the key order. An existing key is
    /// overwritten in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Store {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.items.get_mut(&key) {
            *slot = value;
        } else {
            self.keys.push(key.clone());
            self.items.insert(key, value);
        }
        self.check_invariants();
        return self;
    }

    /// Set the value of a dynamically typed key.
    ///
    /// Fails with `InvalidKeyType` unless `key` is a JSON string.
    pub fn try_set(
        &mut self,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<&mut Store> {
        return match key.into() {
            Value::String(key) => Ok(self.set(key, value)),
            _ => Err(Error::InvalidKeyType),
        };
    }

    /// Remove a key, returning its value. Absent keys are ignored.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let value = self.items.remove(key)?;
        if let Some(index) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(index);
        }
        self.check_invariants();
        return Some(value);
    }

    /// Add 1 to a numeric value.
    pub fn increase(&mut self, key: &str) -> Result<&mut Store> {
        return self.change(key, Value::from(1), false);
    }

    /// Add `amount` to a numeric value.
    ///
    /// Fails with `InvalidAmount` if `amount` is not numeric, and with
    /// `NonNumericValue` if the key is missing or holds a non-numeric
    /// value. Integers stay integers unless a float is involved.
    pub fn increase_by(&mut self, key: &str, amount: impl Into<Value>) -> Result<&mut Store> {
        return self.change(key, amount.into(), false);
    }

    /// Subtract 1 from a numeric value.
    pub fn decrease(&mut self, key: &str) -> Result<&mut Store> {
        return self.change(key, Value::from(1), true);
    }

    /// Subtract `amount` from a numeric value.
    ///
    /// Fails the same way as [`Store::increase_by`].
    pub fn decrease_by(&mut self, key: &str, amount: impl Into<Value>) -> Result<&mut Store> {
        return self.change(key, amount.into(), true);
    }

    fn change(&mut self, key: &str, amount: Value, negative: bool) -> Result<&mut Store> {
        let amount = Numeric::coerce(&amount).ok_or_else(|| rejected(key, Error::InvalidAmount))?;
        let slot = self.items.get_mut(key).ok_or_else(|| rejected(key, Error::NonNumericValue))?;
        let current = Numeric::coerce(slot).ok_or_else(|| rejected(key, Error::NonNumericValue))?;

        let result = if negative { current - amount } else { current + amount };
        *slot = result.into_value().ok_or_else(|| rejected(key, Error::NonFiniteResult))?;
        return Ok(self);
    }

    /// Put the entries in a random order.
    pub fn shuffle(&mut self) -> &mut Store {
        return self.shuffle_with(&mut rand::thread_rng());
    }

    /// Put the entries in a random order drawn from `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Store {
        self.keys.shuffle(rng);
        trace!(len = self.len(), "shuffled store");
        self.check_invariants();
        return self;
    }

    /// Order the entries by key. See [`compare_keys`] for the comparison.
    pub fn sort(&mut self, order: SortOrder) -> &mut Store {
        match order {
            SortOrder::Asc => self.keys.sort_unstable_by(|a, b| compare_keys(a, b)),
            SortOrder::Desc => self.keys.sort_unstable_by(|a, b| compare_keys(b, a)),
        }
        trace!(len = self.len(), ?order, "sorted store");
        self.check_invariants();
        return self;
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> &mut Store {
        trace!(len = self.len(), "cleared store");
        self.items.clear();
        self.keys.clear();
        return self;
    }

    /// Call `handler` on each entry in order.
    ///
    /// The walk stops early when the handler returns `false` or
    /// `ControlFlow::Break(())`. Returns whether every entry was visited.
    pub fn each<F, R>(&self, mut handler: F) -> bool
    where
        F: FnMut(&str, &Value) -> R,
        R: Step,
    {
        for (key, value) in self.iter() {
            if !handler(key, value).proceed() {
                return false;
            }
        }
        return true;
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> Iter<'_> {
        return Iter {
            keys: self.keys.iter(),
            items: &self.items,
        };
    }

    /// Iterate over the keys in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        return self.keys.iter().map(String::as_str);
    }

    /// Iterate over the values in key order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        return self.iter().map(|(_, value)| value);
    }

    /// An external cursor positioned at the first entry.
    pub fn cursor(&self) -> Cursor<'_> {
        return Cursor::new(self);
    }

    /// Copy the entries into a JSON map that iterates in key order.
    pub fn to_map(&self) -> Map<String, Value> {
        return self
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
    }

    /// Copy the entries into a vector of pairs in key order.
    pub fn to_vec(&self) -> Vec<(String, Value)> {
        return self
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
    }

    /// Render the store as a compact JSON object in key order.
    pub fn to_json(&self) -> String {
        return serde_json::to_string(self).expect("string-keyed maps always serialize");
    }

    /// Render the store as an indented JSON object in key order.
    pub fn to_json_pretty(&self) -> String {
        return serde_json::to_string_pretty(self).expect("string-keyed maps always serialize");
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        assert_eq!(
            self.keys.len(),
            self.items.len(),
            "INVARIANT VIOLATED: key order has {} keys but map has {}",
            self.keys.len(),
            self.items.len(),
        );
        for key in &self.keys {
            assert!(
                self.items.contains_key(key),
                "INVARIANT VIOLATED: ordered key {key:?} missing from map",
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

/// Log a rejected numeric change and hand back the error.
fn rejected(key: &str, error: Error) -> Error {
    debug!(key, %error, "rejected numeric change");
    return error;
}

/// Iterator over `(key, value)` pairs in key order.
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, String>,
    items: &'a FxHashMap<String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let value = self.items.get(key)?;
        return Some((key.as_str(), value));
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.keys.size_hint();
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        let value = self.items.get(key)?;
        return Some((key.as_str(), value));
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Store {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        return self.iter();
    }
}

impl Index<&str> for Store {
    type Output = Value;

    /// Missing keys read as `null`.
    fn index(&self, key: &str) -> &Value {
        return self.items.get(key).unwrap_or(&NULL);
    }
}

impl IndexMut<&str> for Store {
    /// Missing keys are inserted as `null` at the end of the key order.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        if !self.items.contains_key(key) {
            self.set(key, Value::Null);
        }
        return self.items.get_mut(key).expect("key is present");
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Store {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Store {
        let mut store = Store::new();
        store.extend(iter);
        return store;
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Store {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl From<Map<String, Value>> for Store {
    fn from(map: Map<String, Value>) -> Store {
        return map.into_iter().collect();
    }
}

impl From<Store> for Map<String, Value> {
    fn from(store: Store) -> Map<String, Value> {
        return store.to_map();
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_map().entries(self.iter()).finish();
    }
}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        return map.end();
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Store, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        return Ok(Store::from(map));
    }
}
