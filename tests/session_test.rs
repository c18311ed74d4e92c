use petcare::config::AppConfig;
use petcare::error::ActionError;
use petcare::lifecycle::PetCare;
use petcare::model::{Role, SessionUser, Status, User};
use petcare::remote::document::FieldValue;
use petcare::remote::store::USERS;
use petcare::remote::{AuthProvider, DocumentStore, MemoryBackend, Operation, RemoteError};
use petcare::session_slice::SESSION_KEY;
use petcare::storage::{load_json, save_json, LocalStorage, MemoryStorage, StorageError};
use slice_framework::SliceHandle;
use std::path::PathBuf;
use std::sync::Arc;

/// Local storage whose writes always fail.
struct ReadOnlyStorage;

#[async_trait::async_trait]
impl LocalStorage for ReadOnlyStorage {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: PathBuf::from(format!("{}.json", key)),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        data_dir: std::env::temp_dir().join(format!("petcare_session_{}", uuid::Uuid::new_v4())),
        slice_buffer: 8,
        log_filter: "info".to_string(),
    }
}

async fn start() -> (PetCare, Arc<MemoryBackend>, Arc<MemoryStorage>) {
    let backend = Arc::new(MemoryBackend::new());
    let storage = Arc::new(MemoryStorage::new());
    let app = PetCare::start(&test_config(), backend.clone(), backend.clone(), storage.clone()).await;
    (app, backend, storage)
}

async fn stored_session(storage: &MemoryStorage) -> Option<SessionUser> {
    load_json(storage, SESSION_KEY).await.expect("Unreadable session record")
}

#[tokio::test]
async fn test_sign_up_leaves_nobody_signed_in() {
    let (app, backend, storage) = start().await;

    app.session
        .sign_up("Ivy", "i@g.com", "12345678")
        .await
        .expect("Sign-up failed");

    let state = app.session.state();
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert!(!state.loading);
    assert!(stored_session(&storage).await.is_none());
    assert!(backend.current_account().await.is_none());

    // The profile was written with the defaults
    let users = backend.list(USERS).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].text("name").unwrap(), "Ivy");
    assert_eq!(users[0].text("role").unwrap(), "user");
    assert_eq!(users[0].text("status").unwrap(), "active");

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sign_up_with_taken_email() {
    let (app, _backend, _storage) = start().await;
    app.session.sign_up("Ivy", "i@g.com", "12345678").await.unwrap();

    let result = app.session.sign_up("Ivy again", "i@g.com", "87654321").await;

    match result {
        Err(ActionError::Rejected(text)) => assert_eq!(text, "This email is already registered."),
        other => panic!("Expected rejection, got {:?}", other),
    }
    assert_eq!(
        app.session.state().error.as_deref(),
        Some("This email is already registered.")
    );

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_login_persists_session() {
    let (app, _backend, storage) = start().await;
    app.session.sign_up("Ivy", "i@g.com", "12345678").await.unwrap();

    let user = app
        .session
        .login("i@g.com", "12345678")
        .await
        .expect("Login failed");

    assert_eq!(user.email, "i@g.com");
    assert_eq!(user.display_name, "Ivy");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.status, Status::Active);
    assert_eq!(app.session.state().user.as_ref(), Some(&user));
    assert_eq!(stored_session(&storage).await, Some(user));

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_disabled_account_is_refused() {
    let (app, backend, storage) = start().await;
    let account = backend.register("d@g.com", "12345678", Some("Dee")).await.unwrap();
    let mut profile = User::registration_fields("Dee", "d@g.com");
    profile.insert("status".to_string(), FieldValue::from(Status::Disabled.as_str()));
    backend.set(USERS, &account.uid, profile).await.unwrap();

    let result = app.session.login("d@g.com", "12345678").await;

    assert!(matches!(result, Err(ActionError::AccountDisabled)));
    let state = app.session.state();
    assert!(state.user.is_none());
    assert_eq!(
        state.error.as_deref(),
        Some("Your account is disabled. Please contact admin.")
    );
    assert!(backend.current_account().await.is_none());
    assert!(stored_session(&storage).await.is_none());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_disabled_account_is_refused_even_if_sign_out_fails() {
    let (app, backend, _storage) = start().await;
    let account = backend.register("d@g.com", "12345678", Some("Dee")).await.unwrap();
    let mut profile = User::registration_fields("Dee", "d@g.com");
    profile.insert("status".to_string(), FieldValue::from(Status::Disabled.as_str()));
    backend.set(USERS, &account.uid, profile).await.unwrap();
    backend
        .fail_next(Operation::SignOut, RemoteError::provider("network down"))
        .await;

    let result = app.session.login("d@g.com", "12345678").await;

    assert!(matches!(result, Err(ActionError::AccountDisabled)));
    let state = app.session.state();
    assert!(state.user.is_none());
    assert_eq!(
        state.error.as_deref(),
        Some("Your account is disabled. Please contact admin.")
    );

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unpersisted_login_signs_out() {
    let backend = Arc::new(MemoryBackend::new());
    let app = PetCare::start(
        &test_config(),
        backend.clone(),
        backend.clone(),
        Arc::new(ReadOnlyStorage),
    )
    .await;
    app.session.sign_up("Ivy", "i@g.com", "12345678").await.unwrap();

    let result = app.session.login("i@g.com", "12345678").await;

    assert!(matches!(result, Err(ActionError::Storage(_))));
    let state = app.session.state();
    assert!(state.user.is_none());
    assert!(state
        .error
        .as_deref()
        .is_some_and(|text| text.starts_with("Failed to persist session:")));
    assert!(backend.current_account().await.is_none());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_login_failure_texts() {
    let (app, backend, _storage) = start().await;
    backend.register("i@g.com", "12345678", None).await.unwrap();

    let not_found = app.session.login("nobody@g.com", "12345678").await;
    assert_eq!(not_found.unwrap_err().to_string(), "User not found!");

    let invalid = app.session.login("not-an-email", "12345678").await;
    assert_eq!(invalid.unwrap_err().to_string(), "Invalid Email");

    for _ in 0..5 {
        let wrong = app.session.login("i@g.com", "wrong-password").await;
        assert_eq!(wrong.unwrap_err().to_string(), "Password is wrong");
    }
    let locked = app.session.login("i@g.com", "12345678").await;
    assert_eq!(
        locked.unwrap_err().to_string(),
        "Too many attempts. Please try again later."
    );
    assert_eq!(
        app.session.state().error.as_deref(),
        Some("Too many attempts. Please try again later.")
    );

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_logout_forgets_session() {
    let (app, _backend, storage) = start().await;
    app.session.sign_up("Ivy", "i@g.com", "12345678").await.unwrap();
    app.session.login("i@g.com", "12345678").await.unwrap();
    assert!(stored_session(&storage).await.is_some());

    app.session.logout().await.expect("Logout failed");

    assert!(app.session.current_user().is_none());
    assert!(stored_session(&storage).await.is_none());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_session_is_restored_on_start() {
    let backend = Arc::new(MemoryBackend::new());
    let storage = Arc::new(MemoryStorage::new());
    let user = SessionUser {
        uid: "u1".to_string(),
        email: "i@g.com".to_string(),
        display_name: "Ivy".to_string(),
        role: Role::Admin,
        status: Status::Active,
    };
    save_json(storage.as_ref(), SESSION_KEY, &user).await.unwrap();

    let app = PetCare::start(&test_config(), backend.clone(), backend, storage).await;

    assert_eq!(app.session.current_user(), Some(user));
    app.shutdown().await.unwrap();
}
