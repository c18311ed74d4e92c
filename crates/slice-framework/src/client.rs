//! # Slice Client
//!
//! The generic client for talking to a [`SliceActor`](crate::SliceActor).

use crate::error::FrameworkError;
use crate::message::SliceRequest;
use crate::slice::Slice;
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe, cloneable handle to one slice.
///
/// * **Dispatch** goes through the actor and resolves once the event has been reduced.
/// * **Reads** come either from the actor (`snapshot`, ordered after queued dispatches) or
///   straight from the published state (`current`, `subscribe`).
#[derive(Clone)]
pub struct SliceClient<S: Slice> {
    sender: mpsc::Sender<SliceRequest<S>>,
    watcher: watch::Receiver<S>,
}

impl<S: Slice> SliceClient<S> {
    pub fn new(sender: mpsc::Sender<SliceRequest<S>>, watcher: watch::Receiver<S>) -> Self {
        Self { sender, watcher }
    }

    pub async fn dispatch(&self, event: S::Event) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::SliceClosed)?;
        response.await.map_err(|_| FrameworkError::SliceDropped)?
    }

    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::SliceClosed)?;
        response.await.map_err(|_| FrameworkError::SliceDropped)?
    }

    /// The most recently published state.
    pub fn current(&self) -> S {
        self.watcher.borrow().clone()
    }

    /// A receiver that wakes on every published state.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.watcher.clone()
    }
}
