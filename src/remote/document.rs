//! # Documents
//!
//! The document store speaks in untyped records: a document is an id plus a map of
//! [`FieldValue`]s. Entities are decoded from documents through [`FromDocument`], with
//! explicit defaults for absent fields:
//!
//! | Accessor | Missing / null | Wrong type |
//! |----------|----------------|------------|
//! | [`Document::text`] | `""` | scalars and timestamps are stringified |
//! | [`Document::optional_text`] | `None` | scalars and timestamps are stringified |
//! | [`Document::number`] | `0.0` | `0.0` (text is parsed) |
//! | [`Document::timestamp`] | `None` | `None` (RFC 3339 / `YYYY-MM-DD` text is parsed) |
//!
//! The only field a decode rejects is an unresolved [`FieldValue::ServerTimestamp`]: a store
//! never hands one back, so seeing it means the document did not come from a store.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

/// One field of a stored document.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    /// Written by clients; the store replaces it with its own clock on every write.
    ServerTimestamp,
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Integer(_) => "integer",
            FieldValue::Double(_) => "double",
            FieldValue::Text(_) => "text",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::ServerTimestamp => "server timestamp",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Double(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Field map of one document.
pub type Fields = BTreeMap<String, FieldValue>;

/// Builds a [`Fields`] map from `(name, value)` pairs.
pub fn fields<I, V>(pairs: I) -> Fields
where
    I: IntoIterator<Item = (&'static str, V)>,
    V: Into<FieldValue>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.into()))
        .collect()
}

/// A stored record: its id plus its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecodeError {
    #[error("Field '{field}' of document {id} should be {expected}, found {found}")]
    WrongType {
        id: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Text field; missing or null reads as the empty string.
    pub fn text(&self, field: &str) -> Result<String, DecodeError> {
        Ok(self.optional_text(field)?.unwrap_or_default())
    }

    /// Optional text field; missing or null reads as `None`. Numbers, booleans and
    /// timestamps read as their text form.
    pub fn optional_text(&self, field: &str) -> Result<Option<String>, DecodeError> {
        match self.fields.get(field) {
            None | Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::Text(text)) => Ok(Some(text.clone())),
            Some(FieldValue::Bool(flag)) => Ok(Some(flag.to_string())),
            Some(FieldValue::Integer(n)) => Ok(Some(n.to_string())),
            Some(FieldValue::Double(n)) => Ok(Some(n.to_string())),
            Some(FieldValue::Timestamp(at)) => Ok(Some(at.to_rfc3339())),
            Some(other) => Err(DecodeError::WrongType {
                id: self.id.clone(),
                field: field.to_string(),
                expected: "text",
                found: other.kind(),
            }),
        }
    }

    /// Numeric field. Numeric text is parsed; anything else reads as `0.0`.
    pub fn number(&self, field: &str) -> f64 {
        match self.fields.get(field) {
            Some(FieldValue::Integer(n)) => *n as f64,
            Some(FieldValue::Double(n)) => *n,
            Some(FieldValue::Text(text)) => text.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Timestamp field. Accepts stored timestamps as well as RFC 3339 or `YYYY-MM-DD` text.
    pub fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(field) {
            Some(FieldValue::Timestamp(at)) => Some(*at),
            Some(FieldValue::Text(text)) => parse_timestamp(text),
            _ => None,
        }
    }
}

/// Parses RFC 3339 text, or a bare `YYYY-MM-DD` date taken as midnight UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Typed entities that can be read back from a stored document.
pub trait FromDocument: Sized {
    fn from_document(doc: &Document) -> Result<Self, DecodeError>;
}

/// Decodes every document, failing on the first malformed one.
pub fn decode_all<T: FromDocument>(docs: &[Document]) -> Result<Vec<T>, DecodeError> {
    docs.iter().map(T::from_document).collect()
}
