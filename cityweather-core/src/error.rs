use thiserror::Error;

/// What went wrong during one fetch attempt.
///
/// Transport failures, non-success statuses, and undecodable bodies are
/// kept apart so each can surface its own user-facing message instead of
/// collapsing into a silently empty display.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response (connect, send, or
    /// body read failed).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status and no readable
    /// error message in the body.
    #[error("backend returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A response arrived but its body was not the expected report shape.
    #[error("could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short message shown in place of weather data when the attempt
    /// fails. One distinct line per failure class.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network(_) => "Could not reach the weather service".to_string(),
            FetchError::Status { status, .. } => {
                format!("Weather service error ({status})")
            }
            FetchError::Decode(_) => "Weather service sent an unreadable response".to_string(),
        }
    }
}
