//! Error types reported by the remote collaborators.

use std::fmt;
use thiserror::Error;

/// Closed set of authentication failure reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    EmailAlreadyInUse,
    InvalidEmail,
    WeakPassword,
    UserNotFound,
    WrongPassword,
    TooManyRequests,
}

impl AuthErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthErrorCode::EmailAlreadyInUse => "auth/email-already-in-use",
            AuthErrorCode::InvalidEmail => "auth/invalid-email",
            AuthErrorCode::WeakPassword => "auth/weak-password",
            AuthErrorCode::UserNotFound => "auth/user-not-found",
            AuthErrorCode::WrongPassword => "auth/wrong-password",
            AuthErrorCode::TooManyRequests => "auth/too-many-requests",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed remote call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RemoteError {
    /// The authentication provider refused the request.
    #[error("{message}")]
    Auth { code: AuthErrorCode, message: String },

    /// Any other provider failure, with the provider's code when it supplied one.
    #[error("{message}")]
    Provider {
        code: Option<String>,
        message: String,
    },
}

impl RemoteError {
    pub fn auth(code: AuthErrorCode) -> Self {
        RemoteError::Auth {
            code,
            message: format!("Error ({}).", code),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        RemoteError::Provider {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError::Provider {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::with_code("not-found", format!("No document to update: {}/{}", collection, id))
    }

    /// The provider's code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            RemoteError::Auth { code, .. } => Some(code.as_str()),
            RemoteError::Provider { code, .. } => code.as_deref(),
        }
    }

    pub fn auth_code(&self) -> Option<AuthErrorCode> {
        match self {
            RemoteError::Auth { code, .. } => Some(*code),
            RemoteError::Provider { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RemoteError::Auth { message, .. } | RemoteError::Provider { message, .. } => message,
        }
    }
}
