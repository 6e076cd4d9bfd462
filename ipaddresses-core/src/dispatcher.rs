//! Command dispatch
//!
//! ```text
//! Start → ParsingArgs → { CliMode | GuiMode } → Terminal(ExitStatus)
//! ```
//!
//! [`parse`] only decides between CLI and window mode. The CLI handler then
//! re-reads the *whole* argument list (including its first element) through
//! [`CliCommand::from_args`]. Each handler runs to completion in one pass.

use std::io::Write;

use crate::app_info;
use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult, LookupError};
use crate::i18n::Translations;
use crate::services::AddressProvider;
use crate::types::{AddressResult, ExitStatus, MenuLabels, ParsedCommand, WindowContent};

const GUI_FLAGS: [&str; 2] = ["-g", "--gui"];
const HELP_FLAGS: [&str; 2] = ["-h", "--help"];
const VERSION_FLAGS: [&str; 2] = ["-v", "--version"];

fn is_flag(arg: &str, flags: &[&str]) -> bool {
    flags.iter().any(|flag| arg.eq_ignore_ascii_case(flag))
}

/// Decide between window and CLI mode from the raw arguments (program name
/// excluded).
///
/// Only the first argument is inspected. The CLI variant carries the full
/// original list, not the remainder.
pub fn parse<I, S>(args: I) -> ParsedCommand
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    match args.first() {
        Some(first) if is_flag(first, &GUI_FLAGS) => ParsedCommand::RunGui,
        _ => ParsedCommand::RunCli(args),
    }
}

/// What the CLI handler was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// No arguments: print both addresses
    Show,
    Help,
    Version,
}

impl CliCommand {
    /// Interpret the CLI argument list. Only the first argument matters.
    pub fn from_args(args: &[String]) -> CoreResult<Self> {
        let Some(first) = args.first() else {
            return Ok(Self::Show);
        };
        if is_flag(first, &HELP_FLAGS) {
            Ok(Self::Help)
        } else if is_flag(first, &VERSION_FLAGS) {
            Ok(Self::Version)
        } else {
            Err(CoreError::InvalidArgument(first.clone()))
        }
    }
}

/// Callbacks the window front end invokes on user actions.
pub trait WindowEvents {
    /// F1 or Help menu: returns the text to show.
    fn help(&mut self) -> &str;

    /// File→Exit or window closed: returns the process exit status.
    fn exit(&mut self) -> ExitStatus;
}

/// A window that displays [`WindowContent`] until the user closes it.
pub trait GuiFrontend {
    /// Show the window and block until it is closed.
    fn run(
        &mut self,
        content: &WindowContent,
        events: &mut dyn WindowEvents,
    ) -> CoreResult<ExitStatus>;
}

/// Callback state for one window session
struct GuiSession {
    usage: &'static str,
}

impl WindowEvents for GuiSession {
    fn help(&mut self) -> &str {
        log::debug!("Help requested");
        self.usage
    }

    fn exit(&mut self) -> ExitStatus {
        log::debug!("Window closed");
        ExitStatus::Success
    }
}

/// Localized inline notice for a failed lookup
fn failure_notice(t: &Translations, error: &LookupError) -> &'static str {
    match error {
        LookupError::Resolution(_) => t.resolution_failed,
        LookupError::Network(_) => t.network_failed,
        LookupError::Timeout(_) => t.timeout_failed,
        LookupError::Upstream(_) => t.upstream_failed,
    }
}

/// `label + address`, or `label + failure notice`
pub fn format_line(t: &Translations, label: &str, result: &AddressResult) -> String {
    match result {
        Ok(address) => format!("{label}{address}"),
        Err(e) => format!("{label}{}", failure_notice(t, e)),
    }
}

/// Drives the address provider and localizer for one process run.
pub struct Dispatcher<'a, P> {
    config: &'a AppConfig,
    provider: P,
}

impl<'a, P: AddressProvider> Dispatcher<'a, P> {
    pub fn new(config: &'a AppConfig, provider: P) -> Self {
        Self { config, provider }
    }

    fn texts(&self) -> &'static Translations {
        self.config.locale.translations()
    }

    /// Look up both addresses and format them: private line first, public
    /// line second, whichever lookup finishes first.
    pub async fn address_lines(&self) -> (String, String) {
        let (private, public) = tokio::join!(
            self.provider.private_address(),
            self.provider.public_address()
        );
        let t = self.texts();
        (
            format_line(t, t.private_ip, &private),
            format_line(t, t.public_ip, &public),
        )
    }

    /// Parse `args` and run the selected mode.
    pub async fn dispatch<G, W, E>(
        &self,
        args: Vec<String>,
        frontend: &mut G,
        out: &mut W,
        err: &mut E,
    ) -> CoreResult<ExitStatus>
    where
        G: GuiFrontend + ?Sized,
        W: Write,
        E: Write,
    {
        match parse(args) {
            ParsedCommand::RunGui => {
                log::debug!("Mode: window");
                self.run_gui(frontend, out).await
            }
            ParsedCommand::RunCli(args) => {
                log::debug!("Mode: cli {args:?}");
                self.run_cli(&args, out, err).await
            }
        }
    }

    /// Command line mode.
    ///
    /// Lookup failures are printed inline and still exit successfully; only
    /// an unrecognized argument yields [`ExitStatus::UsageError`].
    pub async fn run_cli<W, E>(&self, args: &[String], out: &mut W, err: &mut E) -> CoreResult<ExitStatus>
    where
        W: Write,
        E: Write,
    {
        let t = self.texts();

        match CliCommand::from_args(args) {
            Ok(CliCommand::Show) => {
                let (private_line, public_line) = self.address_lines().await;
                writeln!(out, "{private_line}")?;
                writeln!(out, "{public_line}")?;
            }
            Ok(CliCommand::Help) => writeln!(out, "{}", t.usage)?,
            Ok(CliCommand::Version) => writeln!(out, "{}", app_info::version_line(t))?,
            Err(CoreError::InvalidArgument(arg)) => {
                log::debug!("Rejecting argument {arg:?}");
                writeln!(err, "{}{arg}", t.wrong_arg)?;
                writeln!(err, "{}", t.usage)?;
                return Ok(ExitStatus::UsageError);
            }
            Err(e) => return Err(e),
        }

        out.flush()?;
        Ok(ExitStatus::Success)
    }

    /// Window mode: print the banner, look up both addresses, then hand the
    /// formatted lines to `frontend` until the user closes it.
    pub async fn run_gui<G, W>(&self, frontend: &mut G, out: &mut W) -> CoreResult<ExitStatus>
    where
        G: GuiFrontend + ?Sized,
        W: Write,
    {
        let t = self.texts();
        writeln!(out, "{}", app_info::banner(t))?;
        out.flush()?;

        let (private_line, public_line) = self.address_lines().await;
        let content = WindowContent {
            title: t.win_title.to_string(),
            menu: MenuLabels {
                file: t.file.to_string(),
                exit: t.exit.to_string(),
                help: t.help.to_string(),
                about: t.about.to_string(),
            },
            private_line,
            public_line,
            about_text: app_info::about(t),
            dismiss_hint: t.press_any_key.to_string(),
        };

        let mut session = GuiSession { usage: t.usage };
        frontend.run(&content, &mut session)
    }
}
