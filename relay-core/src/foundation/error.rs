use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotOwner,
    UntrustedRelayer,
    AlreadyProcessed,
    EmptyContent,
    ContentTooLarge,
    NullIdentity,
    FingerprintMismatch,
    InvalidIdentity,
    EncodingError,
    ConfigError,
    StorageError,
    SerializationError,
}

/// Coarse failure classes reported to callers of the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller lacks the required role (not the owner, or not a trusted relayer).
    Unauthorized,
    /// The inbound fingerprint was accepted before.
    AlreadyProcessed,
    /// Malformed input: null identity, empty or oversized content, forged fingerprint.
    InvalidArgument,
    /// Host-side failure unrelated to the caller's input.
    Internal,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("caller is not the owner: {caller}")]
    NotOwner { caller: String },

    #[error("caller is not a trusted relayer: {caller}")]
    UntrustedRelayer { caller: String },

    #[error("message already processed: {fingerprint}")]
    AlreadyProcessed { fingerprint: String },

    #[error("message content must not be empty")]
    EmptyContent,

    #[error("message content too large: {size} bytes exceeds max {max}")]
    ContentTooLarge { size: usize, max: usize },

    #[error("{field} must not be the null identity")]
    NullIdentity { field: String },

    #[error("fingerprint mismatch: supplied={supplied} computed={computed}")]
    FingerprintMismatch { supplied: String, computed: String },

    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("storage error during {operation}: {details}")]
    StorageError { operation: String, details: String },

    #[error("{format} serialization error: {details}")]
    SerializationError { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, RelayError>;

impl RelayError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RelayError::NotOwner { .. } => ErrorCode::NotOwner,
            RelayError::UntrustedRelayer { .. } => ErrorCode::UntrustedRelayer,
            RelayError::AlreadyProcessed { .. } => ErrorCode::AlreadyProcessed,
            RelayError::EmptyContent => ErrorCode::EmptyContent,
            RelayError::ContentTooLarge { .. } => ErrorCode::ContentTooLarge,
            RelayError::NullIdentity { .. } => ErrorCode::NullIdentity,
            RelayError::FingerprintMismatch { .. } => ErrorCode::FingerprintMismatch,
            RelayError::InvalidIdentity(_) => ErrorCode::InvalidIdentity,
            RelayError::EncodingError(_) => ErrorCode::EncodingError,
            RelayError::ConfigError(_) => ErrorCode::ConfigError,
            RelayError::StorageError { .. } => ErrorCode::StorageError,
            RelayError::SerializationError { .. } => ErrorCode::SerializationError,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code() {
            ErrorCode::NotOwner | ErrorCode::UntrustedRelayer => ErrorKind::Unauthorized,
            ErrorCode::AlreadyProcessed => ErrorKind::AlreadyProcessed,
            ErrorCode::EmptyContent
            | ErrorCode::ContentTooLarge
            | ErrorCode::NullIdentity
            | ErrorCode::FingerprintMismatch
            | ErrorCode::InvalidIdentity
            | ErrorCode::EncodingError => ErrorKind::InvalidArgument,
            ErrorCode::ConfigError | ErrorCode::StorageError | ErrorCode::SerializationError => ErrorKind::Internal,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    pub fn is_already_processed(&self) -> bool {
        self.kind() == ErrorKind::AlreadyProcessed
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn context(&self) -> ErrorContext {
        ErrorContext { code: self.code(), message: self.to_string() }
    }

    pub fn null_identity(field: impl Into<String>) -> Self {
        RelayError::NullIdentity { field: field.into() }
    }
}

impl From<hex::FromHexError> for RelayError {
    fn from(err: hex::FromHexError) -> Self {
        RelayError::EncodingError(format!("hex decode error: {}", err))
    }
}

impl From<figment::Error> for RelayError {
    fn from(err: figment::Error) -> Self {
        RelayError::ConfigError(format!("config extraction failed: {}", err))
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::SerializationError { format: "json".to_string(), details: err.to_string() }
    }
}

impl From<io::Error> for RelayError {
    fn from(err: io::Error) -> Self {
        RelayError::StorageError { operation: "io".to_string(), details: err.to_string() }
    }
}

#[macro_export]
macro_rules! storage_err {
    ($op:expr, $err:expr) => {
        $crate::foundation::RelayError::StorageError { operation: $op.into(), details: $err.to_string() }
    };
}
