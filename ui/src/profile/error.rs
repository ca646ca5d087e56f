//! Classified failures for the profile lookup.

use thiserror::Error;

/// Exact message the upstream API returns for unknown usernames. The
/// comparison happens once, here; everything downstream works with tags.
pub const NOT_FOUND_SENTINEL: &str = "That user does not exist.";

/// Outcome classification for a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered and named an unknown user.
    #[error("user does not exist")]
    NotFound,
    /// The API answered with some other domain-level error message.
    #[error("api error: {0}")]
    Api(String),
    /// The request never produced a usable body (network, status, decode).
    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Classify a domain-level error message lifted from the payload.
    pub fn from_api_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message == NOT_FOUND_SENTINEL {
            Self::NotFound
        } else {
            Self::Api(message)
        }
    }

    /// Copy shown in the error banner. Only the not-found case gets a
    /// specific message; every other failure is a generic retry prompt.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => "User not found. Please check the username and try again.",
            Self::Api(_) | Self::Transport(_) => {
                "An error occurred while fetching data. Please try again later."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_message_classifies_as_not_found() {
        let err = FetchError::from_api_message(NOT_FOUND_SENTINEL);
        assert_eq!(err, FetchError::NotFound);
        assert!(err.user_message().starts_with("User not found"));
    }

    #[test]
    fn other_messages_classify_as_api_errors() {
        let err = FetchError::from_api_message("rate limited");
        assert_eq!(err, FetchError::Api("rate limited".into()));
        assert!(err.user_message().starts_with("An error occurred"));
    }

    #[test]
    fn transport_failures_share_the_generic_copy() {
        let api = FetchError::Api("boom".into());
        let transport = FetchError::Transport("connection refused".into());
        assert_eq!(api.user_message(), transport.user_message());
    }
}
