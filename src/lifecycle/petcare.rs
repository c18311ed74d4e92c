use crate::clients::{AdminClient, PetsClient, SessionClient, UsersClient};
use crate::config::AppConfig;
use crate::error::ActionError;
use crate::remote::{AuthProvider, DocumentStore, MemoryBackend};
use crate::storage::{FileStorage, LocalStorage};
use crate::views::notices::RetryAction;
use std::sync::Arc;
use tracing::{error, info};

/// The running application core.
///
/// `PetCare` is responsible for:
/// - **Lifecycle Management**: restoring the session, then starting and stopping every slice actor
/// - **Dependency Wiring**: handing the session client to the pets and admin clients, and the
///   local storage to the session actor
///
/// # Example
///
/// ```ignore
/// let app = PetCare::start(&config, auth, store, storage).await;
///
/// app.session.login("i@g.com", "12345678").await?;
/// app.pets.fetch_pets().await?;
///
/// app.shutdown().await?;
/// ```
pub struct PetCare {
    pub session: SessionClient,
    pub pets: PetsClient,
    pub admin: AdminClient,
    pub users: UsersClient,

    /// Task handles of the slice actors, awaited on shutdown
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PetCare {
    /// Restores the persisted session and starts every slice actor.
    pub async fn start(
        config: &AppConfig,
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn DocumentStore>,
        storage: Arc<dyn LocalStorage>,
    ) -> Self {
        let buffer = config.slice_buffer;

        // 1. Seed the session from local storage
        let initial = crate::session_slice::restore(storage.as_ref()).await;

        // 2. Create actors and clients
        let (session_actor, session) = crate::session_slice::new(initial, buffer, auth, store.clone());
        let (pets_actor, pets) = crate::pets_slice::new(buffer, session.clone(), store.clone());
        let (admin_actor, admin) = crate::admin_slice::new(buffer, session.clone(), store.clone());
        let (users_actor, users) = crate::users_slice::new(buffer, store);

        // 3. Start actors with injected context
        let handles = vec![
            tokio::spawn(session_actor.run(storage)),
            tokio::spawn(pets_actor.run(())),
            tokio::spawn(admin_actor.run(())),
            tokio::spawn(users_actor.run(())),
        ];

        info!(signed_in = session.current_user().is_some(), "PetCare started");
        Self {
            session,
            pets,
            admin,
            users,
            handles,
        }
    }

    /// Starts against a fresh in-memory backend, persisting the session under the
    /// configured data directory. Returns the backend so callers can seed it.
    pub async fn with_memory_backend(config: &AppConfig) -> (Self, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let storage = Arc::new(FileStorage::new(config.data_dir.clone()));
        let app = Self::start(config, backend.clone(), backend.clone(), storage).await;
        (app, backend)
    }

    /// Re-issues the fetch behind a retry affordance.
    pub async fn retry(&self, action: RetryAction) -> Result<(), ActionError> {
        info!(?action, "Retry");
        match action {
            RetryAction::FetchPets => self.pets.fetch_pets().await.map(drop),
            RetryAction::FetchActivities => self.pets.fetch_activities().await.map(drop),
            RetryAction::FetchAppointments => self.pets.fetch_appointments().await.map(drop),
            RetryAction::FetchAllUsers => self.admin.fetch_users().await.map(drop),
            RetryAction::FetchAllPets => self.admin.fetch_all_pets().await.map(drop),
            RetryAction::FetchAllActivities => self.admin.fetch_all_activities().await.map(drop),
            RetryAction::FetchAllAppointments => self.admin.fetch_all_appointments().await.map(drop),
            RetryAction::FetchDirectory => self.users.fetch_users().await.map(drop),
        }
    }

    /// Gracefully shuts down every slice actor.
    ///
    /// Dropping the clients closes the request channels; each actor then leaves its loop.
    /// Clients cloned by the caller keep their actor alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down PetCare...");

        // Pets and admin hold session clones, so the session actor stops last.
        drop(self.pets);
        drop(self.admin);
        drop(self.users);
        drop(self.session);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Slice task failed: {:?}", e);
                return Err(format!("Slice task failed: {:?}", e));
            }
        }

        info!("PetCare shutdown complete.");
        Ok(())
    }
}
