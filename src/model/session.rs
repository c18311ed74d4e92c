use crate::model::{Role, Status};
use serde::{Deserialize, Serialize};

/// The account bound to the current session, persisted under the `user` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub status: Status,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
