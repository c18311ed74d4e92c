//! The authentication half of the remote collaborator contract.

use crate::remote::RemoteError;
use async_trait::async_trait;

/// An account as the authentication provider knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthAccount {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Email/password authentication.
///
/// Creating an account or signing in binds that account as the provider's current
/// account; signing out clears it.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn create_account(&self, email: &str, password: &str) -> Result<AuthAccount, RemoteError>;

    async fn update_display_name(&self, uid: &str, display_name: &str) -> Result<(), RemoteError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthAccount, RemoteError>;

    async fn sign_out(&self) -> Result<(), RemoteError>;

    async fn current_account(&self) -> Option<AuthAccount>;
}
