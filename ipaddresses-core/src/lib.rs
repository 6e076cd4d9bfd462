//! ipaddresses core library
//!
//! Provides everything the `ipaddresses` front ends share:
//! - Private and public address lookup (`services`)
//! - English/Portuguese message tables (`i18n`)
//! - Argument parsing and CLI/window dispatch (`dispatcher`)
//!
//! The library never touches a terminal or window toolkit directly. Window
//! front ends plug in through [`GuiFrontend`] and receive a ready-to-render
//! [`WindowContent`].

pub mod app_info;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod i18n;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::AppConfig;
pub use dispatcher::{parse, CliCommand, Dispatcher, GuiFrontend, WindowEvents};
pub use error::{CoreError, CoreResult, LookupError};
pub use i18n::{resolve_locale, text, Locale, MessageKey, Translations};
pub use services::{AddressProvider, PublicIpClient, SystemAddressProvider};
pub use types::{AddressResult, ExitStatus, MenuLabels, ParsedCommand, WindowContent};
