//! Plain records of the PetCare domain and the documents they are stored as.

pub mod activity;
pub mod appointment;
pub mod pet;
pub mod session;
pub mod user;

pub use activity::*;
pub use appointment::*;
pub use pet::*;
pub use session::*;
pub use user::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation state shared by accounts, pets and appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Disabled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Disabled => "disabled",
        }
    }

    /// Only `"active"` is active; any other value is disabled.
    pub fn parse(raw: &str) -> Self {
        if raw == "active" {
            Status::Active
        } else {
            Status::Disabled
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
