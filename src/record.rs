use crate::error::FvResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single cell as it came out of the source, before any coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<u32> for RawValue {
    fn from(v: u32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

/// Coerces a raw cell into a counter.
///
/// Missing, blank, non-numeric, non-finite and negative inputs all become `0.0`.
/// Text is trimmed before parsing. This is the only place the zero policy lives.
pub fn to_number(raw: Option<&RawValue>) -> f64 {
    let parsed = match raw {
        Some(RawValue::Number(n)) => *n,
        Some(RawValue::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return 0.0;
            }
            s.parse::<f64>().unwrap_or(0.0)
        }
        Some(RawValue::Bool(_)) | Some(RawValue::Null) | None => 0.0,
    };

    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

/// One snapshot of every funnel counter, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, RawValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> FvResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn insert<K: Into<String>, V: Into<RawValue>>(&mut self, key: K, value: V) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key)
    }

    #[inline]
    pub fn number(&self, key: &str) -> f64 {
        to_number(self.fields.get(key))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
