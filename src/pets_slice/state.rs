use crate::model::{Activity, Appointment, Pet};
use crate::remote::RemoteError;
use slice_framework::{Collection, Phase, Slice};

/// Shown when adding a pet fails without a message.
pub const ADD_PET_FALLBACK: &str = "Failed to add pet";

/// The signed-in user's own pets, activities and appointments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetsState {
    pub pets: Collection<Pet>,
    pub activities: Collection<Activity>,
    pub appointments: Collection<Appointment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PetsEvent {
    AddPet(Phase<Pet>),
    FetchPets(Phase<Vec<Pet>>),
    AddActivity(Phase<Activity>),
    FetchActivities(Phase<Vec<Activity>>),
    AddAppointment(Phase<Appointment>),
    FetchAppointments(Phase<Vec<Appointment>>),
}

impl Slice for PetsState {
    type Event = PetsEvent;
    type Context = ();
    type Error = std::convert::Infallible;

    fn reduce(&mut self, event: PetsEvent) {
        match event {
            PetsEvent::AddPet(Phase::Rejected(message)) if message.is_empty() => {
                self.pets.apply_add(Phase::Rejected(ADD_PET_FALLBACK.to_string()))
            }
            PetsEvent::AddPet(phase) => self.pets.apply_add(phase),
            PetsEvent::FetchPets(phase) => self.pets.apply_fetch(phase),
            PetsEvent::AddActivity(phase) => self.activities.apply_add(phase),
            PetsEvent::FetchActivities(phase) => self.activities.apply_fetch(phase),
            PetsEvent::AddAppointment(phase) => self.appointments.apply_add(phase),
            PetsEvent::FetchAppointments(phase) => self.appointments.apply_fetch(phase),
        }
    }
}

/// Failure text of the owner actions: the provider code when there is one.
pub fn remote_error_text(error: &RemoteError) -> String {
    match error.code() {
        Some(code) => format!("Firebase: {}", code),
        None => error.message().to_string(),
    }
}
