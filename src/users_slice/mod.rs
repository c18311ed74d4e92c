//! # Users Slice
//!
//! The account directory the appointment form picks vets from.

use crate::clients::UsersClient;
use crate::model::{Role, User};
use crate::remote::DocumentStore;
use slice_framework::{Collection, Phase, Slice, SliceActor};
use std::sync::Arc;

/// Text recorded for any failed directory fetch.
pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersState {
    pub all_users: Collection<User>,
}

impl UsersState {
    /// Accounts whose role is vet, in directory order.
    pub fn vets(&self) -> Vec<&User> {
        self.all_users
            .items
            .iter()
            .filter(|user| user.role == Role::Vet)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UsersEvent {
    FetchUsers(Phase<Vec<User>>),
}

impl Slice for UsersState {
    type Event = UsersEvent;
    type Context = ();
    type Error = std::convert::Infallible;

    fn reduce(&mut self, event: UsersEvent) {
        match event {
            UsersEvent::FetchUsers(phase) => self.all_users.apply_fetch(phase),
        }
    }
}

/// Creates the users actor and its client.
pub fn new(buffer_size: usize, store: Arc<dyn DocumentStore>) -> (SliceActor<UsersState>, UsersClient) {
    let (actor, client) = SliceActor::new(UsersState::default(), buffer_size);
    (actor, UsersClient::new(client, store))
}
