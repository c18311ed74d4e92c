//! Transient notifications shown after an action settles.

use crate::error::ActionError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The fetch a retry affordance re-issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAction {
    FetchPets,
    FetchActivities,
    FetchAppointments,
    FetchAllUsers,
    FetchAllPets,
    FetchAllActivities,
    FetchAllAppointments,
    FetchDirectory,
}

impl RetryAction {
    /// Plural noun of what the fetch loads.
    pub fn subject(&self) -> &'static str {
        match self {
            RetryAction::FetchPets | RetryAction::FetchAllPets => "pets",
            RetryAction::FetchActivities | RetryAction::FetchAllActivities => "activities",
            RetryAction::FetchAppointments | RetryAction::FetchAllAppointments => "appointments",
            RetryAction::FetchAllUsers | RetryAction::FetchDirectory => "users",
        }
    }
}

const SOMETHING_WENT_WRONG: &str = "Something went wrong";

fn or_generic(error: &ActionError) -> String {
    let text = error.to_string();
    if text.is_empty() {
        SOMETHING_WENT_WRONG.to_string()
    } else {
        text
    }
}

pub fn fetch_failed(action: RetryAction, error: &ActionError) -> Notice {
    Notice::error(format!("Error fetching {}: {}", action.subject(), or_generic(error)))
}

/// Failure of an owner form submission.
pub fn submit_failed(error: &ActionError) -> Notice {
    Notice::error(format!("Error: {}", or_generic(error)))
}

pub fn required_fields_missing() -> Notice {
    Notice::error("Please fill in all required fields")
}

pub fn signed_up() -> Notice {
    Notice::success("Signup successful! Redirecting to login...")
}

pub fn logged_in() -> Notice {
    Notice::success("Login successful! Redirecting...")
}

pub fn pet_added() -> Notice {
    Notice::success("Pet profile added successfully!")
}

pub fn activity_added() -> Notice {
    Notice::success("Activity added successfully!")
}

pub fn appointment_booked() -> Notice {
    Notice::success("Appointment booked!")
}

pub fn appointment_booking_failed() -> Notice {
    Notice::error("Something went wrong.")
}

pub fn user_updated() -> Notice {
    Notice::success("User updated successfully")
}

pub fn user_update_failed() -> Notice {
    Notice::error("Failed to update user")
}

pub fn pet_updated() -> Notice {
    Notice::success("Pet updated successfully")
}

pub fn pet_update_failed(error: &ActionError) -> Notice {
    let text = error.to_string();
    Notice::error(if text.is_empty() { "Failed to update pet".to_string() } else { text })
}

pub fn appointment_updated() -> Notice {
    Notice::success("Appointment updated")
}

pub fn appointment_update_failed(error: &ActionError) -> Notice {
    let text = error.to_string();
    Notice::error(if text.is_empty() { "Update failed".to_string() } else { text })
}

pub fn admin_required() -> Notice {
    Notice::error(ActionError::Forbidden.to_string())
}
