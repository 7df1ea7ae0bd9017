use std::fmt;

/// Client-side failure taxonomy. Every network operation resolves to exactly
/// one of these; nothing is retried or recovered internally.
#[derive(Clone, Debug)]
pub enum Error {
    Config(String),
    Network(String),
    Timeout(String),
    Api { status: u16, message: String },
    Parse(String),
    Validation(String),
}

impl Error {
    /// HTTP status of the failed request, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for direct display: the server-supplied message for
    /// API failures, the local check text for validation failures. Callers
    /// supply their own fallback for the remaining variants.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } | Error::Validation(message)
                if !message.trim().is_empty() =>
            {
                Some(message)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(message) => write!(formatter, "Config error: {message}"),
            Error::Network(message) => write!(formatter, "Network error: {message}"),
            Error::Timeout(message) => write!(formatter, "Timeout: {message}"),
            Error::Api { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            Error::Parse(message) => write!(formatter, "Response error: {message}"),
            Error::Validation(message) => write!(formatter, "Validation error: {message}"),
        }
    }
}

impl std::error::Error for Error {}
