//! [`Slice`] implementation for [`SessionState`].

use crate::model::SessionUser;
use crate::storage::{save_json, LocalStorage, StorageError};
use async_trait::async_trait;
use slice_framework::{Phase, Slice};
use std::sync::Arc;
use tracing::{debug, warn};

/// Local storage key of the persisted session record.
pub const SESSION_KEY: &str = "user";

/// Who is signed in, plus the bookkeeping of the last auth action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub error: Option<String>,
    pub loading: bool,
}

impl SessionState {
    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SignUp(Phase<()>),
    Login(Phase<SessionUser>),
    Logout(Phase<()>),
}

#[async_trait]
impl Slice for SessionState {
    type Event = SessionEvent;
    type Context = Arc<dyn LocalStorage>;
    type Error = StorageError;

    fn reduce(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SignUp(Phase::Pending)
            | SessionEvent::Login(Phase::Pending)
            | SessionEvent::Logout(Phase::Pending) => {
                self.loading = true;
                self.error = None;
            }
            SessionEvent::SignUp(Phase::Fulfilled(())) | SessionEvent::Logout(Phase::Fulfilled(())) => {
                self.loading = false;
                self.user = None;
                self.error = None;
            }
            SessionEvent::Login(Phase::Fulfilled(user)) => {
                self.loading = false;
                self.user = Some(user);
                self.error = None;
            }
            SessionEvent::SignUp(Phase::Rejected(error)) | SessionEvent::Login(Phase::Rejected(error)) => {
                self.loading = false;
                self.user = None;
                self.error = Some(error);
            }
            // A failed sign-out leaves the user signed in.
            SessionEvent::Logout(Phase::Rejected(error)) => {
                self.loading = false;
                self.error = Some(error);
            }
        }
    }

    async fn on_event(&self, event: &SessionEvent, storage: &Arc<dyn LocalStorage>) -> Result<(), StorageError> {
        match event {
            SessionEvent::Login(Phase::Fulfilled(user)) => {
                debug!(uid = %user.uid, "Persisting session");
                save_json(storage.as_ref(), SESSION_KEY, user).await
            }
            SessionEvent::SignUp(Phase::Fulfilled(())) | SessionEvent::Logout(Phase::Fulfilled(())) => {
                debug!("Removing persisted session");
                storage.remove(SESSION_KEY).await
            }
            SessionEvent::Login(Phase::Rejected(_)) => {
                if let Err(e) = storage.remove(SESSION_KEY).await {
                    warn!(error = %e, "Could not remove persisted session");
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
