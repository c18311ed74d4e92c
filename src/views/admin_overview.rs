//! The admin dashboard: totals per kind, and the first entries of each list with
//! owner and pet names joined in.

use crate::admin_slice::AdminState;
use crate::model::{Role, Status};
use crate::views::dashboard::{Section, NOTE_WORD_LIMIT};
use crate::views::notices::RetryAction;
use crate::views::{format_date, pet_name, truncate_words, user_name, RECENT_LIMIT, UNKNOWN_USER};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub users: usize,
    pub pets: usize,
    pub activities: usize,
    pub appointments: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentActivity {
    pub id: String,
    pub pet_name: String,
    pub owner_name: String,
    pub date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentAppointment {
    pub id: String,
    pub pet_name: String,
    pub owner_name: String,
    pub date: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminOverview {
    pub totals: Totals,
    /// Shown as a single spinner over the whole page.
    pub loading: bool,
    pub activities: Section<RecentActivity>,
    pub appointments: Section<RecentAppointment>,
    pub users: Section<RecentUser>,
    /// True when a list holds more than the entries shown.
    pub more_activities: bool,
    pub more_appointments: bool,
    pub more_users: bool,
}

pub fn admin_overview(state: &AdminState) -> AdminOverview {
    let users = &state.users.items;
    let pets = &state.pets.items;

    let activities = state
        .activities
        .items
        .iter()
        .take(RECENT_LIMIT)
        .map(|activity| RecentActivity {
            id: activity.id.clone(),
            pet_name: pet_name(pets, &activity.pet_id).to_string(),
            owner_name: user_name(users, &activity.user_id, UNKNOWN_USER).to_string(),
            date: format_date(activity.created_at),
            notes: activity
                .notes
                .as_deref()
                .filter(|notes| !notes.is_empty())
                .map(|notes| truncate_words(notes, NOTE_WORD_LIMIT)),
        })
        .collect();

    let appointments = state
        .appointments
        .items
        .iter()
        .take(RECENT_LIMIT)
        .map(|appointment| RecentAppointment {
            id: appointment.id.clone(),
            pet_name: pet_name(pets, &appointment.pet_id).to_string(),
            owner_name: user_name(users, &appointment.user_id, UNKNOWN_USER).to_string(),
            date: format_date(appointment.date),
            reason: truncate_words(&appointment.reason, NOTE_WORD_LIMIT),
        })
        .collect();

    let recent_users = users
        .iter()
        .take(RECENT_LIMIT)
        .map(|user| RecentUser {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            status: user.status,
        })
        .collect();

    AdminOverview {
        totals: Totals {
            users: users.len(),
            pets: pets.len(),
            activities: state.activities.items.len(),
            appointments: state.appointments.items.len(),
        },
        loading: state.any_loading(),
        activities: Section::from_collection(&state.activities, RetryAction::FetchAllActivities, activities),
        appointments: Section::from_collection(&state.appointments, RetryAction::FetchAllAppointments, appointments),
        users: Section::from_collection(&state.users, RetryAction::FetchAllUsers, recent_users),
        more_activities: state.activities.items.len() > RECENT_LIMIT,
        more_appointments: state.appointments.items.len() > RECENT_LIMIT,
        more_users: users.len() > RECENT_LIMIT,
    }
}
