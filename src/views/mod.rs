//! # View Models
//!
//! Pure functions from slice state to what a page shows. Nothing here dispatches or
//! talks to the remote store; pages call these on every published state.
//!
//! - [`dashboard`] - the owner's dashboard
//! - [`admin_overview`] - totals and recent lists for admins
//! - [`filters`] - search and select filters of the moderation pages
//! - [`notices`] - transient success/error notifications
//! - [`forms`] - client-side validation of every form

pub mod admin_overview;
pub mod dashboard;
pub mod filters;
pub mod forms;
pub mod notices;

use crate::model::{Pet, User};
use chrono::{DateTime, Utc};

pub const UNKNOWN_PET: &str = "Unknown Pet";
pub const UNKNOWN_VET: &str = "Unknown Vet";
pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// How many entries the recent lists show.
pub const RECENT_LIMIT: usize = 5;

/// Name of the pet with `id`, or [`UNKNOWN_PET`].
pub fn pet_name<'a>(pets: &'a [Pet], id: &str) -> &'a str {
    pets.iter()
        .find(|pet| pet.id == id)
        .map_or(UNKNOWN_PET, |pet| pet.name.as_str())
}

/// Name of the account with `id`, or `fallback`.
pub fn user_name<'a>(users: &'a [User], id: &str, fallback: &'a str) -> &'a str {
    users
        .iter()
        .find(|user| user.id == id && !user.name.is_empty())
        .map_or(fallback, |user| user.name.as_str())
}

pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(|| UNKNOWN_DATE.to_string(), |at| at.format("%Y-%m-%d").to_string())
}

/// Keeps the first `limit` space-separated words, marking the cut with `...`.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > limit {
        format!("{}...", words[..limit].join(" "))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_words() {
        assert_eq!(truncate_words("a b c", 3), "a b c");
        assert_eq!(truncate_words("a b c d", 3), "a b c...");
        assert_eq!(truncate_words("", 3), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None), UNKNOWN_DATE);
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 15, 0, 0).unwrap();
        assert_eq!(format_date(Some(at)), "2024-03-09");
    }

    #[test]
    fn test_dangling_references_fall_back() {
        assert_eq!(pet_name(&[], "p404"), UNKNOWN_PET);
        assert_eq!(user_name(&[], "u404", UNKNOWN_VET), UNKNOWN_VET);
    }
}
