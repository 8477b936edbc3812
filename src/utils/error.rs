use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Place lookup failed for '{place_id}': {reason}")]
    PlaceLookupError { place_id: String, reason: String },

    #[error("Venue '{id}' is already in the directory")]
    DuplicateVenueError { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::HttpError(_) | DirectoryError::PlaceLookupError { .. } => {
                ErrorCategory::Network
            }
            DirectoryError::IoError(_) => ErrorCategory::Storage,
            DirectoryError::SerializationError(_) | DirectoryError::DuplicateVenueError { .. } => {
                ErrorCategory::Data
            }
            DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DirectoryError::DuplicateVenueError { .. } => ErrorSeverity::Low,
            DirectoryError::HttpError(_) | DirectoryError::PlaceLookupError { .. } => {
                ErrorSeverity::Medium
            }
            DirectoryError::IoError(_) | DirectoryError::SerializationError(_) => {
                ErrorSeverity::High
            }
            DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DirectoryError::HttpError(_) => {
                "Check the network connection and the service endpoints"
            }
            DirectoryError::PlaceLookupError { .. } => {
                "Verify the place id and that the Google Maps API key has the Places API enabled"
            }
            DirectoryError::IoError(_) => "Check that the preferences directory is writable",
            DirectoryError::SerializationError(_) => "Check that the input file is valid JSON",
            DirectoryError::DuplicateVenueError { .. } => {
                "The venue is already listed; nothing needs to be done"
            }
            DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line arguments"
            }
            DirectoryError::MissingConfigError { .. } => {
                "Set OPENAI_API_KEY / GOOGLE_MAPS_API_KEY or add the key to the configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::HttpError(_) => "Could not reach an external service".to_string(),
            DirectoryError::PlaceLookupError { place_id, .. } => {
                format!("Could not find details for place '{}'", place_id)
            }
            DirectoryError::DuplicateVenueError { id } => {
                format!("Venue '{}' was already added", id)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
