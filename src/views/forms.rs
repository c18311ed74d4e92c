//! # Form Validation
//!
//! Every form is checked on the client before its action is dispatched; invalid input
//! never reaches the remote store. A form's `validate` either returns the payload its
//! action takes or the full list of [`FieldError`]s, keyed by field name so the page can
//! show each message next to its input.

use crate::model::{
    ActivityType, AppointmentEdit, NewActivity, NewAppointment, NewPet, PetEdit, Role, Status, UserEdit,
};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Minimum password length accepted by the login and sign-up forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name used for errors that concern the whole form.
pub const FORM: &str = "form";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite() && *n > 0.0)
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// The add-pet form, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetForm {
    pub name: String,
    pub breed: String,
    pub age: String,
    pub weight: String,
    pub medical_history: String,
}

impl PetForm {
    pub fn validate(&self) -> Result<NewPet, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("name", &self.name, "Name is required");
        errors.require("breed", &self.breed, "Breed is required");
        let age = positive(&self.age);
        if age.is_none() {
            errors.add("age", "Age must be a positive number");
        }
        let weight = positive(&self.weight);
        if weight.is_none() {
            errors.add("weight", "Weight must be a positive number");
        }
        errors.finish(|| NewPet {
            name: self.name.trim().to_string(),
            breed: self.breed.trim().to_string(),
            age: age.unwrap_or_default(),
            weight: weight.unwrap_or_default(),
            medical_history: optional(&self.medical_history),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityForm {
    pub pet_id: String,
    pub kind: String,
    pub notes: String,
}

impl ActivityForm {
    pub fn validate(&self) -> Result<NewActivity, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("petId", &self.pet_id, "Pet is required");
        errors.require("type", &self.kind, "Activity type is required");
        errors.finish(|| NewActivity {
            pet_id: self.pet_id.clone(),
            kind: ActivityType::from(self.kind.trim().to_string()),
            notes: optional(&self.notes),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentForm {
    pub pet_id: String,
    pub date: String,
    pub reason: String,
    pub vet_id: String,
    pub location: String,
    pub notes: String,
}

impl AppointmentForm {
    pub fn validate(&self) -> Result<NewAppointment, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("petId", &self.pet_id, "Pet is required");
        let date = parse_date(&self.date);
        if self.date.trim().is_empty() {
            errors.add("date", "Date is required");
        } else if date.is_none() {
            errors.add("date", "Date must be a valid date");
        }
        errors.require("reason", &self.reason, "Reason is required");
        errors.require("vetId", &self.vet_id, "Vet is required");
        errors.require("location", &self.location, "Location is required");
        errors.finish(|| NewAppointment {
            pet_id: self.pet_id.clone(),
            date: date.unwrap_or_default(),
            reason: self.reason.trim().to_string(),
            vet_id: self.vet_id.clone(),
            location: self.location.trim().to_string(),
            notes: optional(&self.notes),
        })
    }
}

fn check_credentials(errors: &mut ValidationErrors, fields: &[&str], password: &str) {
    if fields.iter().any(|value| value.trim().is_empty()) {
        errors.add(FORM, "Please fill in all fields");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", "Password must be at least 6 characters");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_credentials(&mut errors, &[&self.email, &self.password], &self.password);
        errors.finish(|| ())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_credentials(&mut errors, &[&self.name, &self.email, &self.password], &self.password);
        errors.finish(|| ())
    }
}

/// Inline edit of an account on the moderation page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminUserForm {
    pub name: String,
    pub role: Option<Role>,
    pub status: Option<Status>,
}

impl AdminUserForm {
    pub fn validate(&self) -> Result<UserEdit, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("name", &self.name, "Name cannot be empty");
        if self.role.is_none() || self.status.is_none() {
            errors.add(FORM, "Role and Status are required");
        }
        errors.finish(|| {
            UserEdit::new(
                self.name.trim(),
                self.role.unwrap_or_default(),
                self.status.unwrap_or(Status::Active),
            )
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminPetForm {
    pub name: String,
    pub status: Option<Status>,
}

impl AdminPetForm {
    pub fn validate(&self) -> Result<PetEdit, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("name", &self.name, "Name cannot be empty");
        let status = self.status.unwrap_or(Status::Active);
        errors.finish(|| PetEdit::new(self.name.trim(), status))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminAppointmentForm {
    pub date: String,
    pub location: String,
    /// Unset reads as active.
    pub status: Option<Status>,
}

impl AdminAppointmentForm {
    pub fn validate(&self) -> Result<AppointmentEdit, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let date = parse_date(&self.date);
        if date.is_none() || self.location.trim().is_empty() {
            errors.add(FORM, "Date and Location are required");
        }
        errors.finish(|| {
            AppointmentEdit::new(
                date.unwrap_or_default(),
                self.location.trim(),
                self.status.unwrap_or(Status::Active),
            )
        })
    }
}
