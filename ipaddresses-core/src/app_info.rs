//! Application basic information

use chrono::Datelike;

use crate::i18n::Translations;

pub const APP_NAME: &str = "ipaddresses";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_LICENSE: &str = "GNU General Public License v2 or later (GPLv2+)";
pub const APP_AUTHOR: &str = "Joao Carlos Roseta Matos";
pub const APP_EMAIL: &str = "jcrmatos@gmail.com";
pub const APP_URL: &str = "https://github.com/jcrmatos/ipaddresses";

/// First year of the copyright range
const COPYRIGHT_SINCE: i32 = 2009;

/// `Copyright 2009-<current year> <author>`
pub fn copyright() -> String {
    let year = chrono::Local::now().year().max(COPYRIGHT_SINCE);
    format!("Copyright {COPYRIGHT_SINCE}-{year} {APP_AUTHOR}")
}

/// `ipaddresses version 0.1.0`, localized separator
pub fn version_line(t: &Translations) -> String {
    format!("{APP_NAME}{}{APP_VERSION}", t.version_with_spaces)
}

/// Text of the About popup
pub fn about(t: &Translations) -> String {
    format!(
        "{}\n{}\n{APP_LICENSE}\n{APP_URL}\n<{APP_EMAIL}>",
        version_line(t),
        copyright()
    )
}

/// Start-up banner printed when the window opens.
pub fn banner(t: &Translations) -> String {
    format!(
        "{}, {}\n{APP_NAME}{}",
        version_line(t),
        copyright(),
        t.banner
    )
}
