//! Error type shared by every slice action.

use slice_framework::FrameworkError;
use thiserror::Error;

/// Why an action rejected. `Display` yields the text shown to the user, which is also
/// what the slice records in its error field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    /// The action needs a signed-in user.
    #[error("User not authenticated")]
    NotAuthenticated,

    /// The action needs an admin session.
    #[error("Access denied: Admin privileges required")]
    Forbidden,

    /// The profile behind the credentials is not active.
    #[error("Your account is disabled. Please contact admin.")]
    AccountDisabled,

    /// A remote call or the decoding of its result failed.
    #[error("{0}")]
    Rejected(String),

    /// The session record could not be written to or removed from local storage.
    #[error("Failed to persist session: {0}")]
    Storage(String),

    /// The slice actor is gone.
    #[error("State container unavailable: {0}")]
    Dispatch(String),
}

impl From<FrameworkError> for ActionError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EffectFailed(inner) => ActionError::Storage(inner.to_string()),
            other => ActionError::Dispatch(other.to_string()),
        }
    }
}
