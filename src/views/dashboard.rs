//! The owner's dashboard: pets, recent activities and upcoming appointments.

use crate::model::{Activity, Appointment, Pet};
use crate::pets_slice::PetsState;
use crate::session_slice::SessionState;
use crate::users_slice::UsersState;
use crate::views::notices::RetryAction;
use crate::views::{format_date, pet_name, truncate_words, user_name, RECENT_LIMIT, UNKNOWN_VET};
use slice_framework::Collection;
use std::cmp::Ordering;

/// Notes and reasons longer than this many words are cut.
pub const NOTE_WORD_LIMIT: usize = 50;

/// One list of the dashboard with its fetch status.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub banner: Option<ErrorBanner>,
}

/// Inline error with a manual retry.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBanner {
    pub message: String,
    pub retry: RetryAction,
}

impl<T> Section<T> {
    pub(crate) fn from_collection<U>(collection: &Collection<U>, retry: RetryAction, items: Vec<T>) -> Self {
        Self {
            items,
            loading: collection.loading,
            banner: collection.error.clone().map(|message| ErrorBanner { message, retry }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PetCard {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLine {
    pub id: String,
    pub pet_name: String,
    pub kind: String,
    pub date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentLine {
    pub id: String,
    pub pet_name: String,
    pub date: String,
    pub vet_name: String,
    pub reason: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerDashboard {
    pub greeting: String,
    pub pets: Section<PetCard>,
    pub activities: Section<ActivityLine>,
    pub appointments: Section<AppointmentLine>,
}

fn or_unknown(text: &str) -> String {
    if text.is_empty() {
        "Unknown".to_string()
    } else {
        text.to_string()
    }
}

fn pet_card(pet: &Pet) -> PetCard {
    PetCard {
        id: pet.id.clone(),
        name: pet.name.clone(),
        breed: or_unknown(&pet.breed),
        age: pet.age,
        weight: pet.weight,
    }
}

fn activity_line(activity: &Activity, pets: &[Pet]) -> ActivityLine {
    ActivityLine {
        id: activity.id.clone(),
        pet_name: pet_name(pets, &activity.pet_id).to_string(),
        kind: or_unknown(activity.kind.as_str()),
        date: format_date(activity.created_at),
        notes: activity
            .notes
            .as_deref()
            .filter(|notes| !notes.is_empty())
            .map(|notes| truncate_words(notes, NOTE_WORD_LIMIT)),
    }
}

/// Earliest first; undated appointments go last.
fn by_date(a: &&Appointment, b: &&Appointment) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The upcoming-appointments list: sorted by date, first [`RECENT_LIMIT`].
pub fn upcoming_appointments<'a>(appointments: &'a [Appointment]) -> Vec<&'a Appointment> {
    let mut sorted: Vec<&Appointment> = appointments.iter().collect();
    sorted.sort_by(by_date);
    sorted.truncate(RECENT_LIMIT);
    sorted
}

pub fn owner_dashboard(session: &SessionState, pets: &PetsState, users: &UsersState) -> OwnerDashboard {
    let display_name = session
        .user
        .as_ref()
        .map(|user| user.display_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("User");
    let owned = &pets.pets.items;

    let activities = pets
        .activities
        .items
        .iter()
        .take(RECENT_LIMIT)
        .map(|activity| activity_line(activity, owned))
        .collect();

    let appointments = upcoming_appointments(&pets.appointments.items)
        .into_iter()
        .map(|appointment| AppointmentLine {
            id: appointment.id.clone(),
            pet_name: pet_name(owned, &appointment.pet_id).to_string(),
            date: format_date(appointment.date),
            vet_name: user_name(&users.all_users.items, &appointment.vet_id, UNKNOWN_VET).to_string(),
            reason: Some(appointment.reason.as_str())
                .filter(|reason| !reason.is_empty())
                .map(|reason| truncate_words(reason, NOTE_WORD_LIMIT)),
            location: appointment.location.clone(),
        })
        .collect();

    OwnerDashboard {
        greeting: format!("Welcome, {}!", display_name),
        pets: Section::from_collection(&pets.pets, RetryAction::FetchPets, owned.iter().map(pet_card).collect()),
        activities: Section::from_collection(&pets.activities, RetryAction::FetchActivities, activities),
        appointments: Section::from_collection(&pets.appointments, RetryAction::FetchAppointments, appointments),
    }
}
