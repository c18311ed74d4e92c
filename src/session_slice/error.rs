//! User-facing texts for authentication failures.

use crate::remote::{AuthErrorCode, RemoteError};

/// Text for a failed sign-up.
pub fn sign_up_error_text(error: &RemoteError) -> String {
    match error.auth_code() {
        Some(AuthErrorCode::EmailAlreadyInUse) => "This email is already registered.".to_string(),
        Some(AuthErrorCode::InvalidEmail) => "Invalid email format.".to_string(),
        Some(AuthErrorCode::WeakPassword) => "Password must be at least 6 characters.".to_string(),
        _ => error.message().to_string(),
    }
}

/// Text for a failed login.
pub fn login_error_text(error: &RemoteError) -> String {
    match error.auth_code() {
        Some(AuthErrorCode::InvalidEmail) => "Invalid Email".to_string(),
        Some(AuthErrorCode::UserNotFound) => "User not found!".to_string(),
        Some(AuthErrorCode::WrongPassword) => "Password is wrong".to_string(),
        Some(AuthErrorCode::TooManyRequests) => "Too many attempts. Please try again later.".to_string(),
        _ => error.message().to_string(),
    }
}

/// Text for a failed sign-out.
pub fn logout_error_text(error: &RemoteError) -> String {
    if error.message().is_empty() {
        "An error occurred during signout.".to_string()
    } else {
        error.message().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_code_maps_per_flow() {
        let invalid = RemoteError::auth(AuthErrorCode::InvalidEmail);
        assert_eq!(sign_up_error_text(&invalid), "Invalid email format.");
        assert_eq!(login_error_text(&invalid), "Invalid Email");

        let missing = RemoteError::auth(AuthErrorCode::UserNotFound);
        assert_eq!(login_error_text(&missing), "User not found!");
        assert_eq!(sign_up_error_text(&missing), missing.message());
    }

    #[test]
    fn test_provider_failures_use_message() {
        let offline = RemoteError::provider("network error");
        assert_eq!(login_error_text(&offline), "network error");
        assert_eq!(logout_error_text(&offline), "network error");
        assert_eq!(
            logout_error_text(&RemoteError::provider("")),
            "An error occurred during signout."
        );
    }
}
