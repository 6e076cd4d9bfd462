//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Why an address lookup failed.
///
/// Each cause is rendered with its own localized notice, so callers can tell
/// a slow endpoint from an unreachable one. The detail string is meant for
/// logs only and is never shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum LookupError {
    /// The local hostname could not be read or resolved to an IPv4 address.
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// The public address endpoint could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The public address endpoint did not answer within the timeout.
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// The endpoint answered with an error status or an unusable body.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Unrecognized command line argument
    #[error("Incorrect argument: {0}")]
    InvalidArgument(String),

    /// Writing to stdout/stderr failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The window front end failed to start or crashed
    #[error("Front end error: {0}")]
    Frontend(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
