//! # Session Client
//!
//! Sign-up, login and logout against the [`AuthProvider`], with the profile read from
//! and written to the `users` collection.

use crate::clients::settle;
use crate::error::ActionError;
use crate::model::{SessionUser, Status, User};
use crate::remote::document::{Document, FromDocument};
use crate::remote::store::USERS;
use crate::remote::{AuthProvider, DocumentStore, Fields, RemoteError};
use crate::session_slice::{
    login_error_text, logout_error_text, sign_up_error_text, SessionEvent, SessionState,
};
use async_trait::async_trait;
use slice_framework::{FrameworkError, Phase, SliceClient, SliceHandle};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Display name used when neither the profile nor the account has one.
const FALLBACK_DISPLAY_NAME: &str = "Guest";

#[derive(Clone)]
pub struct SessionClient {
    inner: SliceClient<SessionState>,
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn DocumentStore>,
}

impl SessionClient {
    pub fn new(
        inner: SliceClient<SessionState>,
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self { inner, auth, store }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.inner.current().user
    }

    /// Registers an account and its profile, then signs it out again.
    ///
    /// The new account is never left signed in: on success the caller still has to log in.
    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<(), ActionError> {
        self.inner.dispatch(SessionEvent::SignUp(Phase::Pending)).await?;
        let outcome = self.register(name, email, password).await;
        settle(&self.inner, SessionEvent::SignUp, outcome).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ActionError> {
        let reject = |e: RemoteError| ActionError::Rejected(sign_up_error_text(&e));

        let account = self.auth.create_account(email, password).await.map_err(reject)?;
        info!(uid = %account.uid, "Account created");

        let written = async {
            self.auth.update_display_name(&account.uid, name).await?;
            self.store
                .set(USERS, &account.uid, User::registration_fields(name, email))
                .await?;
            self.auth.sign_out().await
        }
        .await;

        if let Err(e) = written {
            self.sign_out_quietly("failed registration").await;
            return Err(reject(e));
        }
        Ok(())
    }

    /// Signs in and binds the session to the account's profile.
    ///
    /// A profile whose status is not active is refused after the fact: the account is
    /// signed out again and the action rejects with [`ActionError::AccountDisabled`].
    ///
    /// When the session record cannot be persisted the login rejects with
    /// [`ActionError::Storage`] and the account is signed out, so the provider never keeps
    /// a session the slice does not hold.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ActionError> {
        self.inner.dispatch(SessionEvent::Login(Phase::Pending)).await?;
        let outcome = self.authenticate(email, password).await;
        let result = settle(&self.inner, SessionEvent::Login, outcome).await;
        if let Err(ActionError::Storage(_)) = &result {
            self.sign_out_quietly("unpersisted login").await;
        }
        result
    }

    async fn sign_out_quietly(&self, after: &str) {
        if let Err(e) = self.auth.sign_out().await {
            warn!(error = %e, after, "Sign-out failed");
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<SessionUser, ActionError> {
        let reject = |e: RemoteError| ActionError::Rejected(login_error_text(&e));

        let account = self.auth.sign_in(email, password).await.map_err(reject)?;
        let doc = self
            .store
            .get(USERS, &account.uid)
            .await
            .map_err(reject)?
            .unwrap_or_else(|| Document::new(account.uid.clone(), Fields::new()));
        let profile = User::from_document(&doc).map_err(|e| ActionError::Rejected(e.to_string()))?;

        if profile.status != Status::Active {
            debug!(uid = %account.uid, "Profile is not active");
            self.sign_out_quietly("disabled profile").await;
            return Err(ActionError::AccountDisabled);
        }

        let display_name = [Some(profile.name), account.display_name]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string());

        Ok(SessionUser {
            uid: account.uid,
            email: account.email,
            display_name,
            role: profile.role,
            status: profile.status,
        })
    }

    /// Signs out and forgets the persisted session.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ActionError> {
        self.inner.dispatch(SessionEvent::Logout(Phase::Pending)).await?;
        let outcome = self
            .auth
            .sign_out()
            .await
            .map_err(|e| ActionError::Rejected(logout_error_text(&e)));
        settle(&self.inner, SessionEvent::Logout, outcome).await
    }
}

#[async_trait]
impl SliceHandle<SessionState> for SessionClient {
    type Error = ActionError;

    fn inner(&self) -> &SliceClient<SessionState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
