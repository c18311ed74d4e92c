use crate::model::Status;
use crate::remote::document::{fields, DecodeError, Document, FieldValue, Fields, FromDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slice_framework::{Keyed, Patch};
use std::fmt;

/// What an account is allowed to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    Vet,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Vet => "vet",
        }
    }

    /// Unknown or empty roles fall back to [`Role::User`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Role::Admin,
            "vet" => Role::Vet,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account's profile, stored at `users/{uid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Fields written for a freshly registered account.
    pub fn registration_fields(name: &str, email: &str) -> Fields {
        fields([
            ("email", FieldValue::from(email)),
            ("name", FieldValue::from(name)),
            ("role", FieldValue::from(Role::User.as_str())),
            ("status", FieldValue::from(Status::Active.as_str())),
            ("createdAt", FieldValue::ServerTimestamp),
        ])
    }
}

impl FromDocument for User {
    fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        Ok(Self {
            id: doc.id.clone(),
            name: doc.text("name")?,
            email: doc.text("email")?,
            role: Role::parse(&doc.text("role")?),
            status: Status::parse(&doc.text("status")?),
            created_at: doc.timestamp("createdAt"),
            updated_at: doc.timestamp("updatedAt"),
        })
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Admin edit of an account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserEdit {
    pub name: String,
    pub role: Role,
    pub status: Status,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserEdit {
    pub fn new(name: impl Into<String>, role: Role, status: Status) -> Self {
        Self {
            name: name.into(),
            role,
            status,
            updated_at: None,
        }
    }

    pub fn to_fields(&self) -> Fields {
        fields([
            ("name", FieldValue::from(self.name.as_str())),
            ("role", FieldValue::from(self.role.as_str())),
            ("status", FieldValue::from(self.status.as_str())),
            ("updatedAt", FieldValue::ServerTimestamp),
        ])
    }
}

impl Patch<User> for UserEdit {
    fn apply(self, target: &mut User) {
        target.name = self.name;
        target.role = self.role;
        target.status = self.status;
        if self.updated_at.is_some() {
            target.updated_at = self.updated_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_defaults_role_and_status() {
        let doc = Document::new("u1", fields([("name", "Ann"), ("role", "owner")]));
        let user = User::from_document(&doc).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.status, Status::Disabled);
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_timestamps_serialize_as_rfc3339_or_null() {
        let doc = Document::new(
            "u1",
            fields([
                ("name", FieldValue::from("Ann")),
                ("status", FieldValue::from("active")),
                ("createdAt", FieldValue::from("2024-05-01T09:30:00Z")),
            ]),
        );
        let user = User::from_document(&doc).unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["createdAt"], "2024-05-01T09:30:00Z");
        assert!(json["updatedAt"].is_null());
        assert_eq!(json["status"], "active");
        assert_eq!(json["role"], "user");
    }
}
