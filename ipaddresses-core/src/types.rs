//! Public types shared by the dispatcher and the front ends.

use std::process::ExitCode;

use crate::error::LookupError;

/// Outcome of a single address lookup.
///
/// `Ok` carries the address exactly as the OS or the echo service reported it.
pub type AddressResult = Result<String, LookupError>;

/// Result of parsing the raw process arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Open the window front end.
    RunGui,
    /// Run the command line handler with the full, unmodified argument list.
    RunCli(Vec<String>),
}

/// Process exit status produced by a mode handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Normal termination, including best-effort lookups that failed.
    Success,
    /// The caller passed an argument we do not understand.
    UsageError,
}

impl ExitStatus {
    /// Numeric process exit code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::UsageError => 2,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Localized menu labels for the window front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLabels {
    pub file: String,
    pub exit: String,
    pub help: String,
    pub about: String,
}

/// Everything the window front end needs to render.
///
/// Built once by the dispatcher after both lookups completed; the front end
/// only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowContent {
    /// Window title
    pub title: String,
    pub menu: MenuLabels,
    /// First line: private address or its failure notice
    pub private_line: String,
    /// Second line: public address or its failure notice
    pub public_line: String,
    /// Body of the About popup
    pub about_text: String,
    /// Hint shown under popups
    pub dismiss_hint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::UsageError.code(), 2);
        assert!(ExitStatus::Success.is_success());
        assert!(!ExitStatus::UsageError.is_success());
    }
}
