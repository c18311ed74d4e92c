//! Runtime orchestration and lifecycle management.
//!
//! - [`PetCare`] - spawns the four slice actors, wires their clients and shuts them down
//! - [`setup_tracing`] - initializes structured logging

pub mod petcare;
pub mod tracing;

pub use self::petcare::*;
pub use self::tracing::*;
