//! # Pets Slice
//!
//! The signed-in owner's pets, activities and appointments. Each kind has its own loading
//! flag and error, see [`Collection`](slice_framework::Collection).
//!
//! Every action needs a session and reads or writes only documents whose `userId` is the
//! session's uid.

pub mod state;

pub use state::*;

use crate::clients::{PetsClient, SessionClient};
use crate::remote::DocumentStore;
use slice_framework::SliceActor;
use std::sync::Arc;

/// Creates the pets actor and its client.
pub fn new(
    buffer_size: usize,
    session: SessionClient,
    store: Arc<dyn DocumentStore>,
) -> (SliceActor<PetsState>, PetsClient) {
    let (actor, client) = SliceActor::new(PetsState::default(), buffer_size);
    (actor, PetsClient::new(client, session, store))
}
