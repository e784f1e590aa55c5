use thiserror::Error;

/// Result type alias for tailzone operations
pub type Result<T> = std::result::Result<T, TailzoneError>;

/// Errors that can occur while fetching devices or producing a zone file
#[derive(Error, Debug)]
pub enum TailzoneError {
    /// Authentication failed - invalid, expired or under-scoped API key
    #[error("authentication failed: invalid API key")]
    Unauthorized,

    /// Resource not found (usually an unknown tailnet)
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A device record could not be turned into an address record
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// All same-day serial revisions have been used
    #[error("serial revisions exhausted for {date}: 99 zone files already generated")]
    SerialExhausted {
        /// The date whose revisions ran out, as `YYYYMMDD`
        date: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading or writing the zone file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TailzoneError {
    /// Returns true if the error came from the device inventory fetch
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized
                | Self::NotFound { .. }
                | Self::Api { .. }
                | Self::Http(_)
                | Self::Timeout(_)
                | Self::Json(_)
        )
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Reasons a single device record is left out of a rendered zone
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The record has no hostname
    #[error("device at position {index} has no hostname")]
    MissingHostname {
        /// Position of the record in the source list
        index: usize,
    },

    /// The hostname is not a single master-file token
    #[error("device hostname {hostname:?} cannot be used as a zone owner name")]
    InvalidHostname {
        /// The rejected hostname
        hostname: String,
    },

    /// The record has an empty address list
    #[error("device {hostname:?} has no addresses")]
    NoAddresses {
        /// Hostname of the offending record
        hostname: String,
    },

    /// The first address is not an IP literal
    #[error("device {hostname:?} has invalid address {address:?}")]
    InvalidAddress {
        /// Hostname of the offending record
        hostname: String,
        /// The address that failed to parse
        address: String,
    },
}
