//! # In-Process Backend
//!
//! [`MemoryBackend`] keeps accounts and collections in memory behind one async lock.
//! It validates credentials the way the hosted provider does and can be told to fail
//! the next call of any [`Operation`], which is how tests exercise rejected actions.

use crate::remote::document::{Document, FieldValue, Fields};
use crate::remote::{AuthAccount, AuthErrorCode, AuthProvider, DocumentStore, RemoteError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Minimum password length accepted on account creation.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Consecutive wrong passwords after which an address is locked out.
pub const MAX_FAILED_SIGN_INS: u32 = 5;

/// Remote calls that can be made to fail on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateAccount,
    UpdateDisplayName,
    SignIn,
    SignOut,
    Add,
    Set,
    Get,
    List,
    Query,
    Update,
}

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    email: String,
    password: String,
    display_name: Option<String>,
    failed_sign_ins: u32,
}

impl Account {
    fn public(&self) -> AuthAccount {
        AuthAccount {
            uid: self.uid.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct BackendState {
    /// Accounts keyed by lowercase email.
    accounts: HashMap<String, Account>,
    current: Option<String>,
    /// Documents per collection, in insertion order.
    collections: HashMap<String, Vec<Document>>,
    failures: HashMap<Operation, VecDeque<RemoteError>>,
}

impl BackendState {
    fn take_failure(&mut self, op: Operation) -> Result<(), RemoteError> {
        match self.failures.get_mut(&op).and_then(VecDeque::pop_front) {
            Some(error) => {
                warn!(?op, error = %error, "Injected failure");
                Err(error)
            }
            None => Ok(()),
        }
    }

    fn account_by_uid(&self, uid: &str) -> Option<&Account> {
        self.accounts.values().find(|account| account.uid == uid)
    }

    fn collection(&mut self, name: &str) -> &mut Vec<Document> {
        self.collections.entry(name.to_string()).or_default()
    }
}

/// Accounts and collections held in memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<BackendState>,
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Replaces server-timestamp sentinels with the current time.
fn resolve(fields: Fields) -> Fields {
    let now = Utc::now();
    fields
        .into_iter()
        .map(|(name, value)| match value {
            FieldValue::ServerTimestamp => (name, FieldValue::Timestamp(now)),
            other => (name, other),
        })
        .collect()
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call of `op` fail with `error`. Calls queue up.
    pub async fn fail_next(&self, op: Operation, error: RemoteError) {
        let mut state = self.state.lock().await;
        state.failures.entry(op).or_default().push_back(error);
    }

    /// Registers an account without binding it as the current account.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<AuthAccount, RemoteError> {
        let mut state = self.state.lock().await;
        Self::insert_account(&mut state, email, password, display_name)
    }

    /// Number of documents in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        let state = self.state.lock().await;
        state.collections.get(collection).map_or(0, Vec::len)
    }

    fn insert_account(
        state: &mut BackendState,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<AuthAccount, RemoteError> {
        if !is_valid_email(email) {
            return Err(RemoteError::auth(AuthErrorCode::InvalidEmail));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RemoteError::auth(AuthErrorCode::WeakPassword));
        }
        let key = email.to_lowercase();
        if state.accounts.contains_key(&key) {
            return Err(RemoteError::auth(AuthErrorCode::EmailAlreadyInUse));
        }

        let account = Account {
            uid: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password: password.to_string(),
            display_name: display_name.map(str::to_string),
            failed_sign_ins: 0,
        };
        info!(uid = %account.uid, "Account created");
        let public = account.public();
        state.accounts.insert(key, account);
        Ok(public)
    }
}

#[async_trait]
impl AuthProvider for MemoryBackend {
    async fn create_account(&self, email: &str, password: &str) -> Result<AuthAccount, RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::CreateAccount)?;
        let account = Self::insert_account(&mut state, email, password, None)?;
        state.current = Some(account.uid.clone());
        Ok(account)
    }

    async fn update_display_name(&self, uid: &str, display_name: &str) -> Result<(), RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::UpdateDisplayName)?;
        let account = state
            .accounts
            .values_mut()
            .find(|account| account.uid == uid)
            .ok_or_else(|| RemoteError::auth(AuthErrorCode::UserNotFound))?;
        account.display_name = Some(display_name.to_string());
        debug!(uid, "Display name updated");
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthAccount, RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::SignIn)?;
        if !is_valid_email(email) {
            return Err(RemoteError::auth(AuthErrorCode::InvalidEmail));
        }

        let account = state
            .accounts
            .get_mut(&email.to_lowercase())
            .ok_or_else(|| RemoteError::auth(AuthErrorCode::UserNotFound))?;

        if account.failed_sign_ins >= MAX_FAILED_SIGN_INS {
            warn!(uid = %account.uid, "Sign-in locked out");
            return Err(RemoteError::auth(AuthErrorCode::TooManyRequests));
        }
        if account.password != password {
            account.failed_sign_ins += 1;
            debug!(uid = %account.uid, attempts = account.failed_sign_ins, "Wrong password");
            return Err(RemoteError::auth(AuthErrorCode::WrongPassword));
        }

        account.failed_sign_ins = 0;
        let public = account.public();
        state.current = Some(public.uid.clone());
        info!(uid = %public.uid, "Signed in");
        Ok(public)
    }

    async fn sign_out(&self) -> Result<(), RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::SignOut)?;
        if let Some(uid) = state.current.take() {
            info!(uid = %uid, "Signed out");
        }
        Ok(())
    }

    async fn current_account(&self) -> Option<AuthAccount> {
        let state = self.state.lock().await;
        let uid = state.current.as_deref()?;
        state.account_by_uid(uid).map(Account::public)
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    async fn add(&self, collection: &str, fields: Fields) -> Result<Document, RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::Add)?;
        let doc = Document::new(Uuid::new_v4().to_string(), resolve(fields));
        debug!(collection, id = %doc.id, "Add");
        state.collection(collection).push(doc.clone());
        Ok(doc)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<Document, RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::Set)?;
        let doc = Document::new(id, resolve(fields));
        debug!(collection, id, "Set");
        let docs = state.collection(collection);
        match docs.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = doc.clone(),
            None => docs.push(doc.clone()),
        }
        Ok(doc)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::Get)?;
        Ok(state
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::List)?;
        Ok(state.collections.get(collection).cloned().unwrap_or_default())
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &FieldValue,
    ) -> Result<Vec<Document>, RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::Query)?;
        Ok(state
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| doc.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<Document, RemoteError> {
        let mut state = self.state.lock().await;
        state.take_failure(Operation::Update)?;
        let doc = state
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| RemoteError::not_found(collection, id))?;
        doc.fields.extend(resolve(fields));
        debug!(collection, id, "Update");
        Ok(doc.clone())
    }
}
