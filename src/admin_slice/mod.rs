//! # Admin Slice
//!
//! Mirrors of every collection for the moderation pages, plus edit-by-id for users, pets
//! and appointments. All actions require an admin session.

pub mod state;

pub use state::*;

use crate::clients::{AdminClient, SessionClient};
use crate::remote::DocumentStore;
use slice_framework::SliceActor;
use std::sync::Arc;

/// Creates the admin actor and its client.
pub fn new(
    buffer_size: usize,
    session: SessionClient,
    store: Arc<dyn DocumentStore>,
) -> (SliceActor<AdminState>, AdminClient) {
    let (actor, client) = SliceActor::new(AdminState::default(), buffer_size);
    (actor, AdminClient::new(client, session, store))
}
