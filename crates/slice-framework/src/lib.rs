//! # Slice Framework
//!
//! This crate provides the building blocks for a small, type-safe application state
//! container on top of the **Actor Model**. Application state is split into named
//! **slices**; each slice is owned by one actor that applies events in arrival order and
//! publishes every new state to subscribers.
//!
//! ## Why Slices + Actors?
//!
//! ### Slices
//!
//! - Each partition of the state (session, pets, admin data, ...) is plain data
//! - Changes happen only through events reduced by a synchronous function
//! - Views read a snapshot and subscribe to changes, they never mutate
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor, so two actions dispatching to the same
//!   slice can never interleave a half-applied state
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`Slice`]) - Your data and its reducer
//! 2. **Runtime Layer** ([`SliceActor`]) - Message processing and state publication
//! 3. **Interface Layer** ([`SliceClient`], [`SliceHandle`]) - Type-safe dispatch and reads
//!
//! Async actions live *outside* the slice: a feature client performs the remote work and
//! dispatches a [`Phase`] for each step (`Pending`, then `Fulfilled` or `Rejected`).
//!
//! ```rust
//! use slice_framework::{Collection, Keyed, Phase, Slice, SliceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: String, text: String }
//!
//! impl Keyed for Note {
//!     fn key(&self) -> &str { &self.id }
//! }
//!
//! #[derive(Clone, Debug, Default)]
//! struct Notes { notes: Collection<Note> }
//!
//! #[derive(Debug)]
//! enum NotesEvent { Fetch(Phase<Vec<Note>>) }
//!
//! impl Slice for Notes {
//!     type Event = NotesEvent;
//!     type Context = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(&mut self, event: NotesEvent) {
//!         match event { NotesEvent::Fetch(phase) => self.notes.apply_fetch(phase) }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SliceActor::new(Notes::default(), 16);
//!     tokio::spawn(actor.run(()));
//!
//!     client.dispatch(NotesEvent::Fetch(Phase::Pending)).await.unwrap();
//!     assert!(client.current().notes.loading);
//!
//!     let fetched = vec![Note { id: "n1".into(), text: "hello".into() }];
//!     client.dispatch(NotesEvent::Fetch(Phase::Fulfilled(fetched))).await.unwrap();
//!
//!     let state = client.current();
//!     assert!(!state.notes.loading);
//!     assert_eq!(state.notes.items[0].text, "hello");
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies of a slice's side-effect hook (for example, the local storage a session is
//! persisted to) are injected at **runtime** via `run(context)`, not at construction time.
//!
//! ## Concurrency Model
//!
//! - Each slice actor runs in its own Tokio task
//! - Events are reduced **sequentially** within a slice
//! - Published states are delivered through `tokio::sync::watch`, so a subscriber always
//!   sees the latest state and never a partially applied one
//! - The actor stops once every client has been dropped
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockSlice`, which speaks the same protocol as a real
//! actor but records events instead of reducing them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod collection;
pub mod error;
pub mod message;
pub mod mock;
pub mod phase;
pub mod slice;

// Re-export core types for convenience
pub use actor::SliceActor;
pub use client::SliceClient;
pub use client_trait::SliceHandle;
pub use collection::{Collection, Edited, Keyed, Patch};
pub use error::FrameworkError;
pub use message::{Response, SliceRequest};
pub use phase::Phase;
pub use slice::Slice;
