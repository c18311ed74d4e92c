use petcare::config::AppConfig;
use petcare::error::ActionError;
use petcare::lifecycle::PetCare;
use petcare::model::{ActivityType, NewActivity, NewPet};
use petcare::remote::store::PETS;
use petcare::remote::{AuthErrorCode, MemoryBackend, Operation, RemoteError};
use petcare::storage::MemoryStorage;
use petcare::views::dashboard::owner_dashboard;
use petcare::views::forms::AppointmentForm;
use petcare::views::notices::RetryAction;
use slice_framework::SliceHandle;
use std::sync::Arc;

fn test_config() -> AppConfig {
    AppConfig {
        data_dir: std::env::temp_dir().join(format!("petcare_pets_{}", uuid::Uuid::new_v4())),
        slice_buffer: 8,
        log_filter: "info".to_string(),
    }
}

/// Starts the core with one signed-in owner, i@g.com.
async fn signed_in() -> (PetCare, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let storage = Arc::new(MemoryStorage::new());
    let app = PetCare::start(&test_config(), backend.clone(), backend.clone(), storage).await;
    app.session.sign_up("Ivy", "i@g.com", "12345678").await.unwrap();
    app.session.login("i@g.com", "12345678").await.unwrap();
    (app, backend)
}

#[tokio::test]
async fn test_add_pet_appends_owned_record() {
    let (app, _backend) = signed_in().await;
    let uid = app.session.current_user().unwrap().uid;

    let pet = app
        .pets
        .add_pet(NewPet::new("Tommy", "Labrador", 3.0, 12.0))
        .await
        .expect("Add pet failed");

    assert!(!pet.id.is_empty());
    assert_eq!(pet.user_id, uid);
    assert_eq!(pet.name, "Tommy");
    assert!(pet.created_at.is_some());

    let state = app.pets.state();
    assert_eq!(state.pets.items, vec![pet]);
    assert!(!state.pets.loading);
    assert!(state.pets.error.is_none());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_timestamps_serialize_as_iso_or_null() {
    let (app, _backend) = signed_in().await;
    let pet = app
        .pets
        .add_pet(NewPet::new("Tommy", "Labrador", 3.0, 12.0))
        .await
        .unwrap();

    let json = serde_json::to_value(&pet).unwrap();
    for field in ["createdAt", "updatedAt"] {
        let at = json[field].as_str().expect("Timestamp is not a string");
        assert!(chrono::DateTime::parse_from_rfc3339(at).is_ok());
    }

    // Profiles are never stamped with updatedAt at registration
    let users = app.users.fetch_users().await.unwrap();
    let json = serde_json::to_value(&users[0]).unwrap();
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_null());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_owner_actions_require_session() {
    let backend = Arc::new(MemoryBackend::new());
    let app = PetCare::start(
        &test_config(),
        backend.clone(),
        backend.clone(),
        Arc::new(MemoryStorage::new()),
    )
    .await;

    let result = app.pets.add_pet(NewPet::new("Tommy", "Labrador", 3.0, 12.0)).await;

    assert!(matches!(result, Err(ActionError::NotAuthenticated)));
    assert_eq!(app.pets.state().pets.error.as_deref(), Some("User not authenticated"));
    assert_eq!(backend.count(PETS).await, 0);

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_fetch_failure_keeps_list() {
    let (app, backend) = signed_in().await;
    app.pets
        .add_pet(NewPet::new("Tommy", "Labrador", 3.0, 12.0))
        .await
        .unwrap();
    let before = app.pets.fetch_pets().await.unwrap();

    backend
        .fail_next(Operation::Query, RemoteError::provider("network error"))
        .await;
    let result = app.pets.fetch_pets().await;

    assert!(matches!(result, Err(ActionError::Rejected(ref text)) if text == "network error"));
    let state = app.pets.state();
    assert_eq!(state.pets.items, before);
    assert_eq!(state.pets.error.as_deref(), Some("network error"));
    assert!(!state.pets.loading);

    // Retrying clears the error
    app.retry(RetryAction::FetchPets).await.unwrap();
    assert!(app.pets.state().pets.error.is_none());

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_provider_code_is_shown() {
    let (app, backend) = signed_in().await;
    backend
        .fail_next(
            Operation::Add,
            RemoteError::with_code("permission-denied", "Missing or insufficient permissions."),
        )
        .await;

    let result = app
        .pets
        .add_activity(NewActivity::new("p1", ActivityType::Walk))
        .await;

    assert_eq!(result.unwrap_err().to_string(), "Firebase: permission-denied");
    assert_eq!(
        app.pets.state().activities.error.as_deref(),
        Some("Firebase: permission-denied")
    );

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_fetch_is_idempotent() {
    let (app, _backend) = signed_in().await;
    app.pets
        .add_pet(NewPet::new("Tommy", "Labrador", 3.0, 12.0))
        .await
        .unwrap();

    let first = app.pets.fetch_pets().await.unwrap();
    let state_after_first = app.pets.state();
    let second = app.pets.fetch_pets().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(app.pets.state(), state_after_first);

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_owners_only_see_their_records() {
    let (app, _backend) = signed_in().await;
    app.pets
        .add_pet(NewPet::new("Tommy", "Labrador", 3.0, 12.0))
        .await
        .unwrap();
    app.session.logout().await.unwrap();

    app.session.sign_up("Bo", "b@g.com", "12345678").await.unwrap();
    app.session.login("b@g.com", "12345678").await.unwrap();

    assert!(app.pets.fetch_pets().await.unwrap().is_empty());
    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dashboard_joins_vet_names() {
    let (app, backend) = signed_in().await;
    let vet = backend.register("vet@g.com", "12345678", Some("Dr. Vee")).await.unwrap();
    petcare::remote::DocumentStore::set(
        backend.as_ref(),
        petcare::remote::store::USERS,
        &vet.uid,
        petcare::model::User::registration_fields("Dr. Vee", "vet@g.com"),
    )
    .await
    .unwrap();

    let pet = app
        .pets
        .add_pet(NewPet::new("Tommy", "Labrador", 3.0, 12.0))
        .await
        .unwrap();
    let booking = AppointmentForm {
        pet_id: pet.id.clone(),
        date: "2030-05-01".to_string(),
        reason: "Annual checkup".to_string(),
        vet_id: vet.uid.clone(),
        location: "Main Street Clinic".to_string(),
        notes: String::new(),
    }
    .validate()
    .unwrap();
    app.pets.add_appointment(booking).await.unwrap();
    app.users.fetch_users().await.unwrap();

    let dashboard = owner_dashboard(&app.session.state(), &app.pets.state(), &app.users.state());

    assert_eq!(dashboard.greeting, "Welcome, Ivy!");
    assert_eq!(dashboard.pets.items.len(), 1);
    let line = &dashboard.appointments.items[0];
    assert_eq!(line.pet_name, "Tommy");
    assert_eq!(line.vet_name, "Dr. Vee");
    assert_eq!(line.date, "2030-05-01");

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_directory_failure_is_generic() {
    let (app, backend) = signed_in().await;
    backend
        .fail_next(Operation::List, RemoteError::auth(AuthErrorCode::TooManyRequests))
        .await;

    let result = app.users.fetch_users().await;

    assert_eq!(result.unwrap_err().to_string(), "Failed to fetch users");
    assert_eq!(
        app.users.state().all_users.error.as_deref(),
        Some("Failed to fetch users")
    );

    app.shutdown().await.unwrap();
}
