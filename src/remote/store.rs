//! The document half of the remote collaborator contract.

use crate::remote::document::{Document, FieldValue, Fields};
use crate::remote::RemoteError;
use async_trait::async_trait;

pub const USERS: &str = "users";
pub const PETS: &str = "pets";
pub const ACTIVITIES: &str = "activities";
pub const APPOINTMENTS: &str = "appointments";

/// A store of named collections of documents.
///
/// Writes return the document as stored, with every
/// [`FieldValue::ServerTimestamp`] replaced by the store's clock.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates a document with a store-assigned id.
    async fn add(&self, collection: &str, fields: Fields) -> Result<Document, RemoteError>;

    /// Creates or overwrites the document with the given id.
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<Document, RemoteError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, RemoteError>;

    async fn list(&self, collection: &str) -> Result<Vec<Document>, RemoteError>;

    /// Documents whose `field` equals `value`.
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &FieldValue,
    ) -> Result<Vec<Document>, RemoteError>;

    /// Merges `fields` into an existing document. An unknown id is a not-found failure.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<Document, RemoteError>;
}
