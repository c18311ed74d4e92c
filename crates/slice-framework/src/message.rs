//! # Slice Messages
//!
//! The request type a [`SliceClient`](crate::SliceClient) sends to its
//! [`SliceActor`](crate::SliceActor).

use crate::error::FrameworkError;
use crate::slice::Slice;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by slice actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message sent to a slice actor.
///
/// - **Dispatch**: run the side-effect hook, reduce the event, publish the new state.
/// - **Snapshot**: read the state after every previously queued event has been reduced.
#[derive(Debug)]
pub enum SliceRequest<S: Slice> {
    Dispatch {
        event: S::Event,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}
