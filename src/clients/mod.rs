//! # Action Clients
//!
//! Each client wraps one slice and carries the remote collaborators its actions need.
//! Every action follows the same three steps:
//!
//! 1. dispatch `Phase::Pending`
//! 2. perform the remote round trip and decode the result
//! 3. dispatch `Phase::Fulfilled` or `Phase::Rejected`, then return the same outcome
//!
//! A rejected action has already recorded its text in the slice when the caller sees
//! the `Err`.

pub mod admin_client;
pub mod pets_client;
pub mod session_client;
pub mod users_client;

pub use admin_client::AdminClient;
pub use pets_client::PetsClient;
pub use session_client::SessionClient;
pub use users_client::UsersClient;

use crate::error::ActionError;
use slice_framework::{FrameworkError, Phase, Slice, SliceClient};
use tracing::warn;

/// Dispatches the final phase of an action and hands its outcome back to the caller.
///
/// When the fulfilled event cannot be applied because its side effect failed, the action
/// is rejected instead so the slice never stays pending.
pub(crate) async fn settle<S, T>(
    slice: &SliceClient<S>,
    wrap: fn(Phase<T>) -> S::Event,
    outcome: Result<T, ActionError>,
) -> Result<T, ActionError>
where
    S: Slice,
    T: Clone,
{
    match outcome {
        Ok(value) => match slice.dispatch(wrap(Phase::Fulfilled(value.clone()))).await {
            Ok(()) => Ok(value),
            Err(e @ FrameworkError::EffectFailed(_)) => {
                let error = ActionError::from(e);
                warn!(error = %error, "Fulfilled event rejected by side effect");
                slice.dispatch(wrap(Phase::Rejected(error.to_string()))).await?;
                Err(error)
            }
            Err(e) => Err(e.into()),
        },
        Err(error) => {
            warn!(error = %error, "Action rejected");
            slice.dispatch(wrap(Phase::Rejected(error.to_string()))).await?;
            Err(error)
        }
    }
}
