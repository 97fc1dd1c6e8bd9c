//! BlinkUp Error Types
//!
//! Error handling for both halves of the plugin: the provisioning bridge
//! and the build-time patch hooks.

use serde::{Deserialize, Serialize};

/// Result type alias for BlinkUp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// BlinkUp Error Types
///
/// Hook errors (`Read`, `Parse`, `Write`) carry a human-readable message
/// naming the file and operation that failed, so the host build orchestrator
/// can report them without further context. These errors are serializable
/// for transmission across the Tauri IPC boundary.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "type", content = "message")]
pub enum Error {
    /// A patch target or auxiliary file could not be read
    #[error("Read file operation failed for {0}")]
    Read(String),

    /// The project configuration descriptor could not be parsed
    #[error("Configuration descriptor error: {0}")]
    Parse(String),

    /// A patched file could not be written back
    #[error("Write file operation failed for {0}")]
    Write(String),

    /// Opaque error surfaced by the native provisioning bridge, passed
    /// through unexamined
    #[error("Native bridge error: {0}")]
    Native(String),

    /// Invalid input parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Feature not available on this platform
    #[error("Feature not available: {0}")]
    NotAvailable(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Filesystem error outside a patch read/write pair (e.g. plan cache)
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Create a read error with context
    pub fn read(msg: impl Into<String>) -> Self {
        Error::Read(msg.into())
    }

    /// Create a write error with context
    pub fn write(msg: impl Into<String>) -> Self {
        Error::Write(msg.into())
    }

    /// Create a native bridge error with context
    pub fn native(msg: impl Into<String>) -> Self {
        Error::Native(msg.into())
    }

    /// Get the stable error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Error::Read(_) => "BLINKUP_READ",
            Error::Parse(_) => "BLINKUP_PARSE",
            Error::Write(_) => "BLINKUP_WRITE",
            Error::Native(_) => "BLINKUP_NATIVE",
            Error::InvalidInput(_) => "BLINKUP_INVALID_INPUT",
            Error::NotAvailable(_) => "BLINKUP_NOT_AVAILABLE",
            Error::Serialization(_) => "BLINKUP_SERIALIZATION",
            Error::Io(_) => "BLINKUP_IO",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

// Tauri converts Error to InvokeError via the Serialize trait.
