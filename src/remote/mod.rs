//! # Remote Collaborators
//!
//! The application talks to a backend-as-a-service through two traits:
//!
//! - [`AuthProvider`] - email/password accounts
//! - [`DocumentStore`] - named collections of untyped [`Document`]s
//!
//! [`MemoryBackend`] implements both in process so the app and its tests run offline.

pub mod auth;
pub mod document;
pub mod error;
pub mod memory;
pub mod store;

pub use auth::{AuthAccount, AuthProvider};
pub use document::{Document, FieldValue, Fields, FromDocument};
pub use error::{AuthErrorCode, RemoteError};
pub use memory::{MemoryBackend, Operation};
pub use store::DocumentStore;
