//! # Pets Client
//!
//! Owner-scoped actions on the `pets`, `activities` and `appointments` collections.
use crate::clients::{settle, SessionClient};
use crate::error::ActionError;
use crate::model::{Activity, Appointment, NewActivity, NewAppointment, NewPet, Pet};
use crate::pets_slice::{remote_error_text, PetsEvent, PetsState};
use crate::remote::document::{decode_all, FromDocument};
use crate::remote::store::{ACTIVITIES, APPOINTMENTS, PETS};
use crate::remote::{DocumentStore, FieldValue, Fields, RemoteError};
use async_trait::async_trait;
use slice_framework::{FrameworkError, Phase, SliceClient, SliceHandle};
use std::sync::Arc;
use tracing::{debug, instrument};

fn rejected(e: RemoteError) -> ActionError {
    ActionError::Rejected(remote_error_text(&e))
}

#[derive(Clone)]
pub struct PetsClient {
    inner: SliceClient<PetsState>,
    session: SessionClient,
    store: Arc<dyn DocumentStore>,
}

impl PetsClient {
    pub fn new(inner: SliceClient<PetsState>, session: SessionClient, store: Arc<dyn DocumentStore>) -> Self {
        Self { inner, session, store }
    }

    fn uid(&self) -> Result<String, ActionError> {
        self.session
            .current_user()
            .map(|user| user.uid)
            .ok_or(ActionError::NotAuthenticated)
    }

    /// Writes a new document owned by the session user and decodes what was stored.
    async fn add_owned<T: FromDocument>(
        &self,
        collection: &str,
        to_fields: impl FnOnce(&str) -> Fields,
    ) -> Result<T, ActionError> {
        let uid = self.uid()?;
        let doc = self.store.add(collection, to_fields(&uid)).await.map_err(rejected)?;
        debug!(collection, id = %doc.id, "Stored");
        T::from_document(&doc).map_err(|e| ActionError::Rejected(e.to_string()))
    }

    /// Reads every document of `collection` owned by the session user.
    async fn fetch_owned<T: FromDocument>(&self, collection: &str) -> Result<Vec<T>, ActionError> {
        let uid = self.uid()?;
        let docs = self
            .store
            .query_eq(collection, "userId", &FieldValue::from(uid))
            .await
            .map_err(rejected)?;
        debug!(collection, count = docs.len(), "Fetched");
        decode_all(&docs).map_err(|e| ActionError::Rejected(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn add_pet(&self, pet: NewPet) -> Result<Pet, ActionError> {
        self.inner.dispatch(PetsEvent::AddPet(Phase::Pending)).await?;
        let outcome = self.add_owned(PETS, |uid| pet.to_fields(uid)).await;
        settle(&self.inner, PetsEvent::AddPet, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_pets(&self) -> Result<Vec<Pet>, ActionError> {
        self.inner.dispatch(PetsEvent::FetchPets(Phase::Pending)).await?;
        let outcome = self.fetch_owned(PETS).await;
        settle(&self.inner, PetsEvent::FetchPets, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn add_activity(&self, activity: NewActivity) -> Result<Activity, ActionError> {
        self.inner.dispatch(PetsEvent::AddActivity(Phase::Pending)).await?;
        let outcome = self.add_owned(ACTIVITIES, |uid| activity.to_fields(uid)).await;
        settle(&self.inner, PetsEvent::AddActivity, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_activities(&self) -> Result<Vec<Activity>, ActionError> {
        self.inner.dispatch(PetsEvent::FetchActivities(Phase::Pending)).await?;
        let outcome = self.fetch_owned(ACTIVITIES).await;
        settle(&self.inner, PetsEvent::FetchActivities, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn add_appointment(&self, appointment: NewAppointment) -> Result<Appointment, ActionError> {
        self.inner.dispatch(PetsEvent::AddAppointment(Phase::Pending)).await?;
        let outcome = self.add_owned(APPOINTMENTS, |uid| appointment.to_fields(uid)).await;
        settle(&self.inner, PetsEvent::AddAppointment, outcome).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_appointments(&self) -> Result<Vec<Appointment>, ActionError> {
        self.inner.dispatch(PetsEvent::FetchAppointments(Phase::Pending)).await?;
        let outcome = self.fetch_owned(APPOINTMENTS).await;
        settle(&self.inner, PetsEvent::FetchAppointments, outcome).await
    }
}

#[async_trait]
impl SliceHandle<PetsState> for PetsClient {
    type Error = ActionError;

    fn inner(&self) -> &SliceClient<PetsState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
