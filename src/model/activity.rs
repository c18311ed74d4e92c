use crate::remote::document::{fields, DecodeError, Document, FieldValue, Fields, FromDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slice_framework::Keyed;
use std::fmt;

/// Kind of logged activity. Values outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    Walk,
    Feeding,
    Medication,
    Playtime,
    Other(String),
}

impl ActivityType {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Walk => "walk",
            ActivityType::Feeding => "feeding",
            ActivityType::Medication => "medication",
            ActivityType::Playtime => "playtime",
            ActivityType::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ActivityType::Other(_))
    }
}

impl From<String> for ActivityType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "walk" => ActivityType::Walk,
            "feeding" => ActivityType::Feeding,
            "medication" => ActivityType::Medication,
            "playtime" => ActivityType::Playtime,
            _ => ActivityType::Other(raw),
        }
    }
}

impl From<ActivityType> for String {
    fn from(kind: ActivityType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged activity of a pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub pet_id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Form payload for a new activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub pet_id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub notes: Option<String>,
}

impl NewActivity {
    pub fn new(pet_id: impl Into<String>, kind: ActivityType) -> Self {
        Self {
            pet_id: pet_id.into(),
            kind,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn to_fields(&self, user_id: &str) -> Fields {
        fields([
            ("petId", FieldValue::from(self.pet_id.as_str())),
            ("type", FieldValue::from(self.kind.as_str())),
            ("notes", FieldValue::from(self.notes.clone())),
            ("userId", FieldValue::from(user_id)),
            ("createdAt", FieldValue::ServerTimestamp),
            ("updatedAt", FieldValue::ServerTimestamp),
        ])
    }
}

impl FromDocument for Activity {
    fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        Ok(Self {
            id: doc.id.clone(),
            pet_id: doc.text("petId")?,
            user_id: doc.text("userId")?,
            kind: ActivityType::from(doc.text("type")?),
            notes: doc.optional_text("notes")?,
            created_at: doc.timestamp("createdAt"),
            updated_at: doc.timestamp("updatedAt"),
        })
    }
}

impl Keyed for Activity {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_is_kept() {
        let doc = Document::new("a1", fields([("type", "grooming"), ("petId", "p1")]));
        let activity = Activity::from_document(&doc).unwrap();
        assert_eq!(activity.kind, ActivityType::Other("grooming".into()));
        assert!(!activity.kind.is_known());
    }

    #[test]
    fn test_type_serializes_as_plain_text() {
        let activity = Activity {
            id: "a1".into(),
            pet_id: "p1".into(),
            user_id: "u1".into(),
            kind: ActivityType::Walk,
            notes: None,
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "walk");
        assert_eq!(json["petId"], "p1");
        assert!(json["createdAt"].is_null());
    }
}
