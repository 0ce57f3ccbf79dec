use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarsPhotosError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Network request failed: {message}")]
    Network { message: String },

    #[error("API request failed: {status} {status_text}")]
    Api { status: u16, status_text: String },

    #[error("Failed to parse JSON response: {message}")]
    Parse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminant of [`MarsPhotosError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Network,
    Api,
    Parse,
    Io,
}

impl MarsPhotosError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Network { .. } => ErrorKind::Network,
            Self::Api { .. } => ErrorKind::Api,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// HTTP status carried by API-kind errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Check the rover, date, camera and page arguments",
            Self::Configuration { .. } => {
                "Set NASA_API_KEY or pass --api-key (get one at https://api.nasa.gov/#signUp)"
            }
            Self::Network { .. } => "Check your network connection and the configured base URL",
            Self::Api { status: 429, .. } => "Rate limit reached, wait before sending more requests",
            Self::Api { status: 401 | 403, .. } => "Verify that the API key is valid",
            Self::Api { .. } => "The archive rejected the request, try again later",
            Self::Parse { .. } => "The archive returned an unexpected payload",
            Self::Io(_) => "Make sure the configuration file exists and is readable",
        }
    }
}

impl From<serde_json::Error> for MarsPhotosError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarsPhotosError>;
