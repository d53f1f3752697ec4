//! # Canonical Projection
//!
//! Every model type declares its `pass.json` projection explicitly through
//! [`Canonicalize`]. There is no reflection: a type lists its keys once, in
//! its `to_canonical` body, and the omission rules are applied uniformly by
//! [`CanonicalMap`].
//!
//! ## Omission Rule
//!
//! Absent values, empty strings, and empty lists never appear in the output.
//! Booleans are emitted as-is unless the key is declared with
//! [`CanonicalMap::flag`], which drops `false`.

use serde_json::{Map, Value};

/// A model object with a JSON-object projection.
pub trait Canonicalize {
    /// Build the key/value map for this object.
    ///
    /// Nested model objects canonicalize themselves; callers never flatten
    /// another type's keys into their own map.
    fn to_canonical(&self) -> Map<String, Value>;
}

/// Builder that applies the omission rule while a projection is assembled.
#[derive(Debug, Default)]
pub struct CanonicalMap(Map<String, Value>);

impl CanonicalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unconditionally.
    pub fn insert(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Insert text unless absent or empty.
    pub fn text(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(s) if !s.is_empty() => self.insert(key, s),
            _ => self,
        }
    }

    /// Insert any value unless absent.
    pub fn opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.insert(key, v),
            None => self,
        }
    }

    /// Insert `true`; omit `false`.
    pub fn flag(self, key: &str, value: bool) -> Self {
        if value {
            self.insert(key, true)
        } else {
            self
        }
    }

    /// Insert a nested object unless absent.
    pub fn nested<C: Canonicalize>(self, key: &str, value: Option<&C>) -> Self {
        match value {
            Some(inner) => self.insert(key, Value::Object(inner.to_canonical())),
            None => self,
        }
    }

    /// Insert an array of nested objects unless the slice is empty.
    pub fn list<C: Canonicalize>(self, key: &str, items: &[C]) -> Self {
        if items.is_empty() {
            return self;
        }
        let values = items
            .iter()
            .map(|item| Value::Object(item.to_canonical()))
            .collect::<Vec<_>>();
        self.insert(key, Value::Array(values))
    }

    /// Insert an array of strings unless empty.
    pub fn strings<S: AsRef<str>>(self, key: &str, items: &[S]) -> Self {
        if items.is_empty() {
            return self;
        }
        let values = items
            .iter()
            .map(|s| Value::from(s.as_ref()))
            .collect::<Vec<_>>();
        self.insert(key, Value::Array(values))
    }

    /// Merge another projection's keys into this one.
    pub fn extend(mut self, other: Map<String, Value>) -> Self {
        self.0.extend(other);
        self
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
