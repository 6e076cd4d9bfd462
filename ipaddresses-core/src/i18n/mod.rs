//! Internationalisation (i18n)
//!
//! Two locales are supported: English (the default) and Portuguese.
//! Texts are plain Rust structs checked at compile time. The active
//! [`Locale`] is resolved once at start-up and carried in
//! [`AppConfig`](crate::AppConfig); there is no global language state.

mod en_us;
pub mod keys;
mod pt_pt;

use serde::Serialize;

pub use keys::{MessageKey, Translations};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Portuguese
    Pt,
}

impl Locale {
    /// All supported locales
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Pt]
    }

    /// Name of the language in that language
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Pt => "Português",
        }
    }

    /// Language code (BCP 47)
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Pt => "pt-PT",
        }
    }

    /// Text table for this locale
    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::En => &en_us::TRANSLATIONS,
            Locale::Pt => &pt_pt::TRANSLATIONS,
        }
    }

    /// Resolve the locale from the operating system settings.
    ///
    /// Falls back to [`Locale::En`] when the OS reports nothing.
    pub fn detect() -> Locale {
        let tag = sys_locale::get_locale();
        log::debug!("OS locale: {tag:?}");
        resolve_locale(tag.as_deref())
    }
}

/// Map a locale tag such as `pt_PT.UTF-8` or `en-GB` to a [`Locale`].
///
/// Any tag starting with `pt` (case-insensitive) is Portuguese; everything
/// else, including an absent or empty tag, is English.
pub fn resolve_locale(tag: Option<&str>) -> Locale {
    match tag.map(str::trim) {
        Some(tag) if tag.len() >= 2 && tag.as_bytes()[..2].eq_ignore_ascii_case(b"pt") => {
            Locale::Pt
        }
        _ => Locale::En,
    }
}

/// Look up the text for `key` in `locale`
pub fn text(locale: Locale, key: MessageKey) -> &'static str {
    locale.translations().get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_text_in_every_locale() {
        for &locale in Locale::all() {
            for key in MessageKey::ALL {
                assert!(
                    !text(locale, key).trim().is_empty(),
                    "{key:?} is empty for {}",
                    locale.code()
                );
            }
        }
    }

    #[test]
    fn labels_end_with_space() {
        for &locale in Locale::all() {
            let t = locale.translations();
            assert!(t.private_ip.ends_with(' '));
            assert!(t.public_ip.ends_with(' '));
            assert!(t.wrong_arg.ends_with(' '));
        }
    }

    #[test]
    fn portuguese_tags() {
        for tag in ["pt", "pt_PT", "pt-BR", "PT_pt.UTF-8", "Pt", "  pt-PT"] {
            assert_eq!(resolve_locale(Some(tag)), Locale::Pt, "{tag}");
        }
    }

    #[test]
    fn everything_else_is_english() {
        for tag in ["en_US", "en", "fr-FR", "p", "", "   ", "C", "POSIX", "es-PT"] {
            assert_eq!(resolve_locale(Some(tag)), Locale::En, "{tag}");
        }
        assert_eq!(resolve_locale(None), Locale::En);
    }

    #[test]
    fn multibyte_tag_does_not_panic() {
        assert_eq!(resolve_locale(Some("ñ")), Locale::En);
        assert_eq!(resolve_locale(Some("日本")), Locale::En);
    }

    #[test]
    fn locales_differ() {
        assert_ne!(
            text(Locale::En, MessageKey::WinTitle),
            text(Locale::Pt, MessageKey::WinTitle)
        );
        assert_eq!(text(Locale::Pt, MessageKey::PrivateIp), "IP privado: ");
    }
}
