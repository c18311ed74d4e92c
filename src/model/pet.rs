use crate::model::Status;
use crate::remote::document::{fields, DecodeError, Document, FieldValue, Fields, FromDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slice_framework::{Keyed, Patch};

/// A pet profile owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
    pub medical_history: Option<String>,
    pub status: Option<Status>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Form payload for a new pet profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
    pub medical_history: Option<String>,
}

impl NewPet {
    pub fn new(name: impl Into<String>, breed: impl Into<String>, age: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            age,
            weight,
            medical_history: None,
        }
    }

    pub fn with_medical_history(mut self, history: impl Into<String>) -> Self {
        self.medical_history = Some(history.into());
        self
    }

    /// Fields written to `pets`, stamped with the owner and server time.
    pub fn to_fields(&self, user_id: &str) -> Fields {
        let mut out = fields([
            ("name", FieldValue::from(self.name.as_str())),
            ("breed", FieldValue::from(self.breed.as_str())),
            ("age", FieldValue::from(self.age)),
            ("weight", FieldValue::from(self.weight)),
            ("userId", FieldValue::from(user_id)),
            ("createdAt", FieldValue::ServerTimestamp),
            ("updatedAt", FieldValue::ServerTimestamp),
        ]);
        if let Some(history) = &self.medical_history {
            out.insert("medicalHistory".to_string(), FieldValue::from(history.as_str()));
        }
        out
    }
}

impl FromDocument for Pet {
    fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        Ok(Self {
            id: doc.id.clone(),
            user_id: doc.text("userId")?,
            name: doc.text("name")?,
            breed: doc.text("breed")?,
            age: doc.number("age"),
            weight: doc.number("weight"),
            medical_history: doc.optional_text("medicalHistory")?,
            status: doc.optional_text("status")?.map(|s| Status::parse(&s)),
            created_at: doc.timestamp("createdAt"),
            updated_at: doc.timestamp("updatedAt"),
        })
    }
}

impl Keyed for Pet {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Admin edit of a pet profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PetEdit {
    pub name: String,
    pub status: Status,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PetEdit {
    pub fn new(name: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
            updated_at: None,
        }
    }

    pub fn to_fields(&self) -> Fields {
        fields([
            ("name", FieldValue::from(self.name.as_str())),
            ("status", FieldValue::from(self.status.as_str())),
            ("updatedAt", FieldValue::ServerTimestamp),
        ])
    }
}

impl Patch<Pet> for PetEdit {
    fn apply(self, target: &mut Pet) {
        target.name = self.name;
        target.status = Some(self.status);
        if self.updated_at.is_some() {
            target.updated_at = self.updated_at;
        }
    }
}
