//! Raw value holder and the submitted-data abstraction.

use std::collections::HashMap;

use serde::Serialize;

/// A cleaned field value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value was submitted.
    #[default]
    Nil,
    /// A single string.
    Text(String),
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean (checkbox).
    Bool(bool),
    /// Several strings (multi-select).
    List(Vec<String>),
}

impl Value {
    /// Returns the value as a number, if it is numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// The raw-value container owned by one field instance.
///
/// `raw_str` is what widgets redisplay, `raw_values` keeps every submitted
/// value in order, and `value` is the typed result of cleaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct V {
    /// The first (or only) raw string.
    pub raw_str: String,
    /// All raw strings submitted for the field.
    pub raw_values: Vec<String>,
    /// The cleaned value.
    pub value: Value,
}

impl V {
    /// Creates a holder seeded with a raw string and no cleaned value.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            raw_values: vec![raw.clone()],
            raw_str: raw,
            value: Value::Nil,
        }
    }

    /// Returns whether no value has been cleaned into this holder.
    pub fn is_nil(&self) -> bool {
        self.value == Value::Nil
    }

    /// Returns whether the raw input is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.raw_values.iter().all(|v| v.trim().is_empty())
    }
}

/// Submitted request data keyed by field name.
///
/// The library never parses request bodies; callers hand over whatever
/// they already extracted.
pub trait Data {
    /// Returns every value submitted under `name`, or `None` if the name
    /// is absent.
    fn values(&self, name: &str) -> Option<Vec<String>>;

    /// Returns the first value submitted under `name`.
    fn value(&self, name: &str) -> Option<String> {
        self.values(name).and_then(|v| v.into_iter().next())
    }

    /// Returns whether anything was submitted under `name`.
    fn contains(&self, name: &str) -> bool {
        self.values(name).is_some()
    }
}

impl Data for HashMap<String, String> {
    fn values(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).map(|v| vec![v.clone()])
    }
}

impl Data for HashMap<String, Vec<String>> {
    fn values(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).cloned()
    }
}

impl Data for serde_json::Map<String, serde_json::Value> {
    fn values(&self, name: &str) -> Option<Vec<String>> {
        match self.get(name)? {
            serde_json::Value::Null => None,
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(json_to_raw)
                    .collect(),
            ),
            other => Some(vec![json_to_raw(other)]),
        }
    }
}

fn json_to_raw(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Ordered, multi-valued form data, as produced by an urlencoded or
/// multipart body after it has been decoded elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    /// Creates empty form data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates form data from name/value pairs.
    pub fn from_pairs<K, T>(pairs: impl IntoIterator<Item = (K, T)>) -> Self
    where
        K: Into<String>,
        T: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Appends a value under `name`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Builder form of [`FormData::append`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns whether no pairs were submitted.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Data for FormData {
    fn values(&self, name: &str) -> Option<Vec<String>> {
        let values: Vec<String> = self
            .pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }
}
