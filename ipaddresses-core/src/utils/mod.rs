//! Utility modules.

/// Keeps upstream response bodies short in logs.
pub mod log_sanitizer;
