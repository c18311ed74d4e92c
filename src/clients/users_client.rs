//! # Users Client
use crate::clients::settle;
use crate::error::ActionError;
use crate::model::User;
use crate::remote::document::decode_all;
use crate::remote::store::USERS;
use crate::remote::DocumentStore;
use crate::users_slice::{UsersEvent, UsersState, FETCH_USERS_FAILED};
use async_trait::async_trait;
use slice_framework::{FrameworkError, Phase, SliceClient, SliceHandle};
use std::sync::Arc;
use tracing::{instrument, warn};

#[derive(Clone)]
pub struct UsersClient {
    inner: SliceClient<UsersState>,
    store: Arc<dyn DocumentStore>,
}

impl UsersClient {
    pub fn new(inner: SliceClient<UsersState>, store: Arc<dyn DocumentStore>) -> Self {
        Self { inner, store }
    }

    /// Loads the whole account directory. Every failure reads the same to the user.
    #[instrument(skip(self))]
    pub async fn fetch_users(&self) -> Result<Vec<User>, ActionError> {
        self.inner.dispatch(UsersEvent::FetchUsers(Phase::Pending)).await?;
        let outcome = match self.store.list(USERS).await {
            Ok(docs) => decode_all::<User>(&docs).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        }
        .map_err(|cause| {
            warn!(%cause, "Directory fetch failed");
            ActionError::Rejected(FETCH_USERS_FAILED.to_string())
        });
        settle(&self.inner, UsersEvent::FetchUsers, outcome).await
    }
}

#[async_trait]
impl SliceHandle<UsersState> for UsersClient {
    type Error = ActionError;

    fn inner(&self) -> &SliceClient<UsersState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
