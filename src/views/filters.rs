//! Search and select filters of the moderation pages.
//!
//! Text search is a case-insensitive substring match; an empty search matches everything.
//! A select is either [`Choice::All`] or one value.

use crate::model::{Appointment, Pet, Role, Status, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    /// An unset value only passes [`Choice::All`].
    pub fn matches_optional(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Choice::All, _) => true,
            (Choice::Only(wanted), Some(value)) => wanted == value,
            (Choice::Only(_), None) => false,
        }
    }
}

fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Matched against name and email.
    pub search: String,
    pub role: Choice<Role>,
    pub status: Choice<Status>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        (contains_ignoring_case(&user.name, &self.search) || contains_ignoring_case(&user.email, &self.search))
            && self.role.matches(&user.role)
            && self.status.matches(&user.status)
    }

    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetFilter {
    /// Matched against the pet's name.
    pub search: String,
    pub status: Choice<Status>,
}

impl PetFilter {
    pub fn matches(&self, pet: &Pet) -> bool {
        contains_ignoring_case(&pet.name, &self.search) && self.status.matches_optional(pet.status.as_ref())
    }

    pub fn apply<'a>(&self, pets: &'a [Pet]) -> Vec<&'a Pet> {
        pets.iter().filter(|pet| self.matches(pet)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFilter {
    /// Matched against the location.
    pub search: String,
    pub status: Choice<Status>,
}

impl AppointmentFilter {
    /// Appointments without a status count as active.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        contains_ignoring_case(&appointment.location, &self.search)
            && self.status.matches(&appointment.status.unwrap_or(Status::Active))
    }

    pub fn apply<'a>(&self, appointments: &'a [Appointment]) -> Vec<&'a Appointment> {
        appointments.iter().filter(|a| self.matches(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, role: Role, status: Status) -> User {
        User {
            id: name.to_lowercase(),
            name: name.into(),
            email: email.into(),
            role,
            status,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_user_filter_combines_search_and_selects() {
        let users = vec![
            user("Ann", "ann@pets.io", Role::Admin, Status::Active),
            user("Bob", "bob@vets.io", Role::Vet, Status::Active),
            user("Cid", "cid@vets.io", Role::Vet, Status::Disabled),
        ];

        let all = UserFilter::default();
        assert_eq!(all.apply(&users).len(), 3);

        let vets = UserFilter {
            search: "VETS".into(),
            role: Choice::Only(Role::Vet),
            status: Choice::Only(Status::Active),
        };
        let names: Vec<&str> = vets.apply(&users).iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Bob"]);
    }

    #[test]
    fn test_pet_filter_unset_status_only_matches_all() {
        let pet = Pet {
            id: "p1".into(),
            user_id: "u1".into(),
            name: "Tommy".into(),
            breed: "Labrador".into(),
            age: 3.0,
            weight: 12.0,
            medical_history: None,
            status: None,
            created_at: None,
            updated_at: None,
        };
        assert!(PetFilter { search: "tom".into(), status: Choice::All }.matches(&pet));
        assert!(!PetFilter { search: String::new(), status: Choice::Only(Status::Active) }.matches(&pet));
    }
}
