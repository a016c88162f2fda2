use thiserror::Error;

/// Shown whenever a failure carries no server-provided message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// Local form checks. The display text is what the form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Please meet all password requirements.")]
    PasswordRequirements,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// Human-readable message sent back by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Image upload failed: {0}")]
    Upload(#[source] GatewayError),

    #[error("Registration failed: {0}")]
    Registration(#[source] GatewayError),

    #[error("Failed to persist session: {0}")]
    Session(#[from] StorageError),

    #[error("Registration response carried a token but no user")]
    IncompleteResponse,
}

impl SubmitError {
    /// Text for the form's error field.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Upload(e) | Self::Registration(e) => e
                .server_message()
                .unwrap_or(GENERIC_ERROR_MESSAGE)
                .to_string(),
            Self::Session(_) | Self::IncompleteResponse => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
