//! # Action Phases
//!
//! Every asynchronous action moves through the same three phases. Slices reduce them
//! to keep their loading flags and error values in step with the remote call.

/// Lifecycle of one asynchronous action call.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    /// The remote call has been issued.
    Pending,
    /// The remote call succeeded with a payload.
    Fulfilled(T),
    /// The remote call failed; carries the user-facing message.
    Rejected(String),
}

impl<T> Phase<T> {
    /// Returns true for [`Phase::Pending`].
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    /// Maps the fulfilled payload, keeping the other phases as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Phase<U> {
        match self {
            Phase::Pending => Phase::Pending,
            Phase::Fulfilled(value) => Phase::Fulfilled(f(value)),
            Phase::Rejected(message) => Phase::Rejected(message),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Phase<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Phase::Fulfilled(value),
            Err(e) => Phase::Rejected(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Phase<u32> = Ok::<u32, String>(3).into();
        assert_eq!(ok, Phase::Fulfilled(3));

        let err: Phase<u32> = Err::<u32, String>("boom".to_string()).into();
        assert_eq!(err, Phase::Rejected("boom".to_string()));
    }

    #[test]
    fn test_map_keeps_pending_and_rejected() {
        assert!(Phase::<u32>::Pending.map(|v| v + 1).is_pending());
        assert_eq!(
            Phase::<u32>::Rejected("x".into()).map(|v| v + 1),
            Phase::Rejected("x".into())
        );
        assert_eq!(Phase::Fulfilled(1).map(|v| v + 1), Phase::Fulfilled(2));
    }
}
