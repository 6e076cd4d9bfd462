//! Message key definitions
//!
//! Every piece of user-visible text lives in [`Translations`]. A missing
//! field in either locale table is a compile error, and [`MessageKey`]
//! lookups are an exhaustive `match`, so there is no runtime "missing key".

/// All translated texts for one locale
pub struct Translations {
    pub about: &'static str,
    /// Appended after "name version X" in the start-up banner
    pub banner: &'static str,
    pub exit: &'static str,
    pub file: &'static str,
    pub help: &'static str,
    pub press_any_key: &'static str,
    /// Label in front of the private address, trailing space included
    pub private_ip: &'static str,
    /// Label in front of the public address, trailing space included
    pub public_ip: &'static str,
    pub version: &'static str,
    /// Separator between application name and version (" version ")
    pub version_with_spaces: &'static str,
    pub win_title: &'static str,
    /// Prefix of the wrong argument message, trailing space included
    pub wrong_arg: &'static str,
    /// Full usage text printed by `--help` and shown by the help popup
    pub usage: &'static str,

    // Lookup failure notices
    pub resolution_failed: &'static str,
    pub network_failed: &'static str,
    pub timeout_failed: &'static str,
    pub upstream_failed: &'static str,
}

/// Closed set of message keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    About,
    Banner,
    Exit,
    File,
    Help,
    PressAnyKey,
    PrivateIp,
    PublicIp,
    Version,
    VersionWithSpaces,
    WinTitle,
    WrongArg,
    Usage,
    ResolutionFailed,
    NetworkFailed,
    TimeoutFailed,
    UpstreamFailed,
}

impl MessageKey {
    /// Every key, in declaration order
    pub const ALL: [MessageKey; 17] = [
        MessageKey::About,
        MessageKey::Banner,
        MessageKey::Exit,
        MessageKey::File,
        MessageKey::Help,
        MessageKey::PressAnyKey,
        MessageKey::PrivateIp,
        MessageKey::PublicIp,
        MessageKey::Version,
        MessageKey::VersionWithSpaces,
        MessageKey::WinTitle,
        MessageKey::WrongArg,
        MessageKey::Usage,
        MessageKey::ResolutionFailed,
        MessageKey::NetworkFailed,
        MessageKey::TimeoutFailed,
        MessageKey::UpstreamFailed,
    ];
}

impl Translations {
    /// Look up a text by key
    pub const fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::About => self.about,
            MessageKey::Banner => self.banner,
            MessageKey::Exit => self.exit,
            MessageKey::File => self.file,
            MessageKey::Help => self.help,
            MessageKey::PressAnyKey => self.press_any_key,
            MessageKey::PrivateIp => self.private_ip,
            MessageKey::PublicIp => self.public_ip,
            MessageKey::Version => self.version,
            MessageKey::VersionWithSpaces => self.version_with_spaces,
            MessageKey::WinTitle => self.win_title,
            MessageKey::WrongArg => self.wrong_arg,
            MessageKey::Usage => self.usage,
            MessageKey::ResolutionFailed => self.resolution_failed,
            MessageKey::NetworkFailed => self.network_failed,
            MessageKey::TimeoutFailed => self.timeout_failed,
            MessageKey::UpstreamFailed => self.upstream_failed,
        }
    }
}
