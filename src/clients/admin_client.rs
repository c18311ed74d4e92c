//! # Admin Client
//!
//! Moderation actions over whole collections. Failures surface the provider's message
//! as is.
use crate::clients::{settle, SessionClient};
use crate::error::ActionError;
use crate::guard::{check_access, Access, Area};
use crate::model::{Activity, Appointment, AppointmentEdit, Pet, PetEdit, User, UserEdit};
use crate::admin_slice::{AdminEvent, AdminState};
use crate::remote::document::{decode_all, FromDocument};
use crate::remote::store::{ACTIVITIES, APPOINTMENTS, PETS, USERS};
use crate::remote::{Document, DocumentStore, Fields, RemoteError};
use async_trait::async_trait;
use slice_framework::{Edited, FrameworkError, Phase, SliceClient, SliceHandle};
use std::sync::Arc;
use tracing::{debug, instrument};

fn rejected(e: RemoteError) -> ActionError {
    ActionError::Rejected(e.message().to_string())
}

#[derive(Clone)]
pub struct AdminClient {
    inner: SliceClient<AdminState>,
    session: SessionClient,
    store: Arc<dyn DocumentStore>,
}

impl AdminClient {
    pub fn new(inner: SliceClient<AdminState>, session: SessionClient, store: Arc<dyn DocumentStore>) -> Self {
        Self { inner, session, store }
    }

    fn authorize(&self) -> Result<(), ActionError> {
        match check_access(Area::Admin, self.session.current_user().as_ref()) {
            Access::Granted => Ok(()),
            Access::SignInRequired => Err(ActionError::NotAuthenticated),
            Access::AdminRequired => Err(ActionError::Forbidden),
        }
    }

    async fn fetch_all<T: FromDocument>(&self, collection: &str) -> Result<Vec<T>, ActionError> {
        self.authorize()?;
        let docs = self.store.list(collection).await.map_err(rejected)?;
        debug!(collection, count = docs.len(), "Fetched");
        decode_all(&docs).map_err(|e| ActionError::Rejected(e.to_string()))
    }

    /// Merges `fields` into document `id` and returns the stored document.
    async fn write_edit(&self, collection: &str, id: &str, fields: Fields) -> Result<Document, ActionError> {
        self.authorize()?;
        let doc = self.store.update(collection, id, fields).await.map_err(rejected)?;
        debug!(collection, id, "Edited");
        Ok(doc)
    }

    #[instrument(skip(self))]
    pub async fn fetch_users(&self) -> Result<Vec<User>, ActionError> {
        self.inner.dispatch(AdminEvent::FetchUsers(Phase::Pending)).await?;
        let outcome = self.fetch_all(USERS).await;
        settle(&self.inner, AdminEvent::FetchUsers, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn edit_user(&self, id: &str, mut edit: UserEdit) -> Result<Edited<UserEdit>, ActionError> {
        self.inner.dispatch(AdminEvent::EditUser(Phase::Pending)).await?;
        let outcome = self.write_edit(USERS, id, edit.to_fields()).await.map(|doc| {
            edit.updated_at = doc.timestamp("updatedAt");
            Edited { id: doc.id, patch: edit }
        });
        settle(&self.inner, AdminEvent::EditUser, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_all_pets(&self) -> Result<Vec<Pet>, ActionError> {
        self.inner.dispatch(AdminEvent::FetchPets(Phase::Pending)).await?;
        let outcome = self.fetch_all(PETS).await;
        settle(&self.inner, AdminEvent::FetchPets, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn edit_pet(&self, id: &str, mut edit: PetEdit) -> Result<Edited<PetEdit>, ActionError> {
        self.inner.dispatch(AdminEvent::EditPet(Phase::Pending)).await?;
        let outcome = self.write_edit(PETS, id, edit.to_fields()).await.map(|doc| {
            edit.updated_at = doc.timestamp("updatedAt");
            Edited { id: doc.id, patch: edit }
        });
        settle(&self.inner, AdminEvent::EditPet, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_all_activities(&self) -> Result<Vec<Activity>, ActionError> {
        self.inner.dispatch(AdminEvent::FetchActivities(Phase::Pending)).await?;
        let outcome = self.fetch_all(ACTIVITIES).await;
        settle(&self.inner, AdminEvent::FetchActivities, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_all_appointments(&self) -> Result<Vec<Appointment>, ActionError> {
        self.inner.dispatch(AdminEvent::FetchAppointments(Phase::Pending)).await?;
        let outcome = self.fetch_all(APPOINTMENTS).await;
        settle(&self.inner, AdminEvent::FetchAppointments, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn edit_appointment(
        &self,
        id: &str,
        mut edit: AppointmentEdit,
    ) -> Result<Edited<AppointmentEdit>, ActionError> {
        self.inner.dispatch(AdminEvent::EditAppointment(Phase::Pending)).await?;
        let outcome = self.write_edit(APPOINTMENTS, id, edit.to_fields()).await.map(|doc| {
            edit.updated_at = doc.timestamp("updatedAt");
            Edited { id: doc.id, patch: edit }
        });
        settle(&self.inner, AdminEvent::EditAppointment, outcome).await
    }
}

#[async_trait]
impl SliceHandle<AdminState> for AdminClient {
    type Error = ActionError;

    fn inner(&self) -> &SliceClient<AdminState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
