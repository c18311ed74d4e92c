//! # PetCare
//!
//! > **The application core of a pet-care tracker.**
//!
//! Owners register pets, log activities and book vet appointments; admins moderate every
//! account and record. This crate holds everything below the pages: the state container,
//! the actions that talk to the remote backend, session persistence, access rules, form
//! validation and the view models pages render.
//!
//! ## 🏗️ Design
//!
//! State is split into four slices, each owned by its own actor from the
//! [`slice_framework`] crate:
//!
//! | Slice | State | Client |
//! |-------|-------|--------|
//! | [`session_slice`] | signed-in user, auth error, in-flight flag | [`SessionClient`](clients::SessionClient) |
//! | [`pets_slice`] | the owner's pets, activities, appointments | [`PetsClient`](clients::PetsClient) |
//! | [`admin_slice`] | every user, pet, activity, appointment | [`AdminClient`](clients::AdminClient) |
//! | [`users_slice`] | the account directory (vet names) | [`UsersClient`](clients::UsersClient) |
//!
//! Actions run in three phases (pending, fulfilled, rejected), each a dispatched event.
//! Pages only read published state and call client actions.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Backend ([`remote`])
//! - **Role**: the authentication and document-store seams, plus an in-memory backend.
//! - **Key items**: [`AuthProvider`](remote::AuthProvider), [`DocumentStore`](remote::DocumentStore),
//!   [`MemoryBackend`](remote::MemoryBackend).
//!
//! ### 2. The Records ([`model`])
//! - **Role**: users, pets, activities and appointments, decoded from documents and
//!   serialized with ISO-8601 timestamps.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: the actions. Each client wraps its slice and the collaborators it needs.
//!
//! ### 4. The Pages' Side ([`views`], [`guard`])
//! - **Role**: pure functions from state to what is shown, and the route access rules.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Role**: restores the session, starts and wires every actor, shuts them down.
//! - **Key items**: [`PetCare`](lifecycle::PetCare), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! cargo run
//!
//! # Keep the session somewhere else
//! PETCARE_DATA_DIR=/tmp/petcare cargo run
//! ```

pub mod admin_slice;
pub mod clients;
pub mod config;
pub mod error;
pub mod guard;
pub mod lifecycle;
pub mod model;
pub mod pets_slice;
pub mod remote;
pub mod session_slice;
pub mod storage;
pub mod users_slice;
pub mod views;
