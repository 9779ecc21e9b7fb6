/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::datetime::{TYPE_KEY, encode_datetime};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Object storage of a [`ZfValue`]
pub type ZfMap = BTreeMap<String, ZfValue>;

static NULL: ZfValue = ZfValue::Null;

/// A value returned by the Zenfolio API.
///
/// Mirrors [`serde_json::Value`] with an additional [`ZfValue::DateTime`] variant holding
/// decoded service dates. Nested fields can be reached by key, by attribute or by a dotted
/// path:
///
/// ```rust
/// use zenfolio::v1::ZfValue;
/// use serde_json::json;
///
/// let v = ZfValue::from(json!({"Owner": {"LoginName": "jdoe"}}));
/// assert_eq!(v["Owner"]["LoginName"].as_str(), Some("jdoe"));
/// assert_eq!(v.attr("Owner").and_then(|o| o.attr("LoginName")), Some(&v["Owner"]["LoginName"]));
/// assert_eq!(v.path("Owner.LoginName").and_then(|o| o.as_str()), Some("jdoe"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ZfValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    DateTime(NaiveDateTime),
    Array(Vec<ZfValue>),
    Object(ZfMap),
}

impl ZfValue {
    /// Looks up a field of an object
    pub fn attr(&self, name: &str) -> Option<&ZfValue> {
        match self {
            Self::Object(map) => map.get(name),
            _ => None,
        }
    }

    /// Mutable lookup of a field of an object
    pub fn attr_mut(&mut self, name: &str) -> Option<&mut ZfValue> {
        match self {
            Self::Object(map) => map.get_mut(name),
            _ => None,
        }
    }

    /// Looks up a field by name or an array element by position
    pub fn get(&self, segment: &str) -> Option<&ZfValue> {
        match self {
            Self::Object(map) => map.get(segment),
            Self::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    fn get_mut(&mut self, segment: &str) -> Option<&mut ZfValue> {
        match self {
            Self::Object(map) => map.get_mut(segment),
            Self::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(move |i| items.get_mut(i)),
            _ => None,
        }
    }

    /// Follows a dotted path such as `"Elements.0.Title"`.
    ///
    /// Numeric segments index into arrays.
    pub fn path(&self, path: &str) -> Option<&ZfValue> {
        path.split('.').try_fold(self, |v, segment| v.get(segment))
    }

    /// Mutable form of [`ZfValue::path`]
    pub fn path_mut(&mut self, path: &str) -> Option<&mut ZfValue> {
        path.split('.').try_fold(self, |v, segment| v.get_mut(segment))
    }

    /// Returns the `$type` tag of a typed service object
    pub fn type_tag(&self) -> Option<&str> {
        self.attr(TYPE_KEY).and_then(ZfValue::as_str)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<ZfValue>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ZfMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ZfMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<Value> for ZfValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

// Dates go back out in their tagged wire form
impl From<ZfValue> for Value {
    fn from(value: ZfValue) -> Self {
        match value {
            ZfValue::Null => Value::Null,
            ZfValue::Bool(b) => Value::Bool(b),
            ZfValue::Number(n) => Value::Number(n),
            ZfValue::String(s) => Value::String(s),
            ZfValue::DateTime(dt) => encode_datetime(&dt),
            ZfValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            ZfValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<NaiveDateTime> for ZfValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<&str> for ZfValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ZfValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for ZfValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for ZfValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl Serialize for ZfValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::DateTime(dt) => encode_datetime(dt).serialize(serializer),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ZfValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ZfValue::from)
    }
}

impl fmt::Display for ZfValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl Index<&str> for ZfValue {
    type Output = ZfValue;

    fn index(&self, key: &str) -> &ZfValue {
        self.attr(key).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for ZfValue {
    /// Inserts `Null` for a missing key. A `Null` value is first turned into an empty object.
    ///
    /// Panics if the value is neither an object nor `Null`, matching [`serde_json::Value`].
    fn index_mut(&mut self, key: &str) -> &mut ZfValue {
        if self.is_null() {
            *self = Self::Object(ZfMap::new());
        }
        match self {
            Self::Object(map) => map.entry(key.to_string()).or_default(),
            other => panic!("cannot access key {key:?} in non-object value {other}"),
        }
    }
}

impl Index<usize> for ZfValue {
    type Output = ZfValue;

    fn index(&self, idx: usize) -> &ZfValue {
        match self {
            Self::Array(items) => items.get(idx).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

impl IndexMut<usize> for ZfValue {
    fn index_mut(&mut self, idx: usize) -> &mut ZfValue {
        match self {
            Self::Array(items) => {
                let len = items.len();
                items
                    .get_mut(idx)
                    .unwrap_or_else(|| panic!("index {idx} out of bounds for array of length {len}"))
            }
            other => panic!("cannot index into non-array value {other}"),
        }
    }
}
