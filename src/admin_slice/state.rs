use crate::model::{Activity, Appointment, AppointmentEdit, Pet, PetEdit, User, UserEdit};
use slice_framework::{Collection, Edited, Phase, Slice};

/// Every account, pet, activity and appointment, as moderated by admins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub users: Collection<User>,
    pub pets: Collection<Pet>,
    pub activities: Collection<Activity>,
    pub appointments: Collection<Appointment>,
}

impl AdminState {
    /// True while any of the four lists is being fetched or edited.
    pub fn any_loading(&self) -> bool {
        self.users.loading || self.pets.loading || self.activities.loading || self.appointments.loading
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminEvent {
    FetchUsers(Phase<Vec<User>>),
    EditUser(Phase<Edited<UserEdit>>),
    FetchPets(Phase<Vec<Pet>>),
    EditPet(Phase<Edited<PetEdit>>),
    FetchActivities(Phase<Vec<Activity>>),
    FetchAppointments(Phase<Vec<Appointment>>),
    EditAppointment(Phase<Edited<AppointmentEdit>>),
}

impl Slice for AdminState {
    type Event = AdminEvent;
    type Context = ();
    type Error = std::convert::Infallible;

    fn reduce(&mut self, event: AdminEvent) {
        match event {
            AdminEvent::FetchUsers(phase) => self.users.apply_fetch(phase),
            AdminEvent::EditUser(phase) => self.users.apply_edit(phase),
            AdminEvent::FetchPets(phase) => self.pets.apply_fetch(phase),
            AdminEvent::EditPet(phase) => self.pets.apply_edit(phase),
            AdminEvent::FetchActivities(phase) => self.activities.apply_fetch(phase),
            AdminEvent::FetchAppointments(phase) => self.appointments.apply_fetch(phase),
            AdminEvent::EditAppointment(phase) => self.appointments.apply_edit(phase),
        }
    }
}
