//! # Session Slice
//!
//! Holds the signed-in user, the last authentication error and an in-flight flag.
//!
//! ## Structure
//!
//! - [`state`] - [`SessionState`] and its reducer; persists the session record as a side effect
//! - [`error`] - user-facing texts for authentication failures
//! - [`restore`] - reads the persisted record at startup
//! - [`new()`] - creates the actor and its [`SessionClient`]
//!
//! ## Persistence
//!
//! | Event | Local storage |
//! |-------|---------------|
//! | login fulfilled | write `user` |
//! | login rejected | remove `user` |
//! | sign-up fulfilled | remove `user` |
//! | logout fulfilled | remove `user` |

pub mod error;
pub mod state;

pub use error::*;
pub use state::*;

use crate::clients::SessionClient;
use crate::model::SessionUser;
use crate::remote::{AuthProvider, DocumentStore};
use crate::storage::{load_json, LocalStorage};
use slice_framework::SliceActor;
use std::sync::Arc;
use tracing::{info, warn};

/// Reads the persisted session record. A missing or unreadable record yields an empty
/// session.
pub async fn restore(storage: &dyn LocalStorage) -> SessionState {
    match load_json::<SessionUser>(storage, SESSION_KEY).await {
        Ok(Some(user)) => {
            info!(uid = %user.uid, "Session restored");
            SessionState::signed_in(user)
        }
        Ok(None) => SessionState::default(),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable session record");
            SessionState::default()
        }
    }
}

/// Creates the session actor, seeded with `initial`, and its client.
pub fn new(
    initial: SessionState,
    buffer_size: usize,
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn DocumentStore>,
) -> (SliceActor<SessionState>, SessionClient) {
    let (actor, client) = SliceActor::new(initial, buffer_size);
    (actor, SessionClient::new(client, auth, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, Status};
    use crate::storage::{save_json, MemoryStorage};

    #[tokio::test]
    async fn test_restore_reads_persisted_record() {
        let storage = MemoryStorage::new();
        let user = SessionUser {
            uid: "u1".into(),
            email: "i@g.com".into(),
            display_name: "Ivy".into(),
            role: Role::Admin,
            status: Status::Active,
        };
        save_json(&storage, SESSION_KEY, &user).await.unwrap();

        let state = restore(&storage).await;
        assert_eq!(state.user, Some(user));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_restore_tolerates_garbage() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "{not json").await.unwrap();
        assert_eq!(restore(&storage).await, SessionState::default());
    }
}
