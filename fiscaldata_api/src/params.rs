//! Request-parameter data model shared by the session and the services.

use chrono::{DateTime, NaiveDateTime, Utc};

/// A single request-parameter value.
///
/// Lists and datetimes are kept structured here; the session decides how to
/// flatten them into query pairs right before transmission.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    List(Vec<String>),
    DateTime(NaiveDateTime),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|item| item.to_string()).collect())
    }
}

impl From<NaiveDateTime> for ParamValue {
    fn from(value: NaiveDateTime) -> Self {
        ParamValue::DateTime(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::DateTime(value.naive_utc())
    }
}

/// An insertion-ordered parameter mapping.
///
/// Order is preserved so the transmitted query string is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the first value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, ParamValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
