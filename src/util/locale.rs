//! URL-embedded locale: parsing, validation, and locale-preserving paths.
//!
//! The first path segment is the locale (`/ru/explore`). Locale is never
//! stored anywhere else, so it cannot drift from the address bar. An unknown
//! locale is normalized to [`Locale::DEFAULT`], never reported as an error.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::fmt;
use std::str::FromStr;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ru,
    Uz,
}

/// Every supported locale, in switcher order.
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Uz];

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Uz => "uz",
        }
    }

    /// Name shown in the language switcher, in the language itself.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
            Self::Uz => "Oʻzbekcha",
        }
    }

    /// Parse a path segment; `None` for anything unsupported.
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        SUPPORTED_LOCALES.into_iter().find(|l| l.as_str() == segment)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnsupportedLocale(s.to_owned()))
    }
}

/// Membership test against [`SUPPORTED_LOCALES`].
#[must_use]
pub fn is_valid_locale(candidate: &str) -> bool {
    Locale::parse(candidate).is_some()
}

/// First segment of `path` and everything after it.
///
/// `"/ru/explore?x=1"` -> `(Some("ru"), "/explore?x=1")`; `"/"` -> `(None, "")`.
#[must_use]
pub fn split_locale_segment(path: &str) -> (Option<&str>, &str) {
    let trimmed = path.trim_start_matches('/');
    let offset = path.len() - trimmed.len();
    let end = trimmed.find(['/', '?', '#']).unwrap_or(trimmed.len());
    if end == 0 {
        return (None, &path[offset..]);
    }
    (Some(&trimmed[..end]), &path[offset + end..])
}

/// Locale named by the first segment of `path`, or the default.
#[must_use]
pub fn locale_from_path(path: &str) -> Locale {
    split_locale_segment(path).0.and_then(Locale::parse).unwrap_or(Locale::DEFAULT)
}

/// Whether `segment` has the shape of a language tag (`xx`, `xx-YY`).
///
/// Such a segment is treated as a wrong locale to be replaced; anything else
/// is app content and the locale is considered missing.
#[must_use]
pub fn looks_like_locale(segment: &str) -> bool {
    let (lang, region) = match segment.split_once('-') {
        Some((lang, region)) => (lang, Some(region)),
        None => (segment, None),
    };
    let lang_ok = lang.len() == 2 && lang.bytes().all(|b| b.is_ascii_alphabetic());
    let region_ok = region.map_or(true, |r| {
        (2..=4).contains(&r.len()) && r.bytes().all(|b| b.is_ascii_alphanumeric())
    });
    lang_ok && region_ok
}

/// Prefix an app-relative, locale-free `path` with `locale`.
///
/// `localized_path(Ru, "explore")` and `localized_path(Ru, "/explore")` both
/// give `"/ru/explore"`; an empty path gives `"/ru"`.
#[must_use]
pub fn localized_path(locale: Locale, path: &str) -> String {
    let rest = path.trim_start_matches('/');
    if rest.is_empty() {
        format!("/{locale}")
    } else if rest.starts_with(['?', '#']) {
        format!("/{locale}{rest}")
    } else {
        format!("/{locale}/{rest}")
    }
}

/// Rewrite the locale segment of `path`, keeping the rest (query included).
///
/// If `path` carries no recognizable locale segment, `locale` is prepended.
#[must_use]
pub fn replace_locale(path: &str, locale: Locale) -> String {
    let (segment, rest) = split_locale_segment(path);
    match segment {
        Some(seg) if is_valid_locale(seg) || looks_like_locale(seg) => localized_path(locale, rest),
        _ => localized_path(locale, path),
    }
}

/// Where a request for `path` must be redirected, or `None` if its locale is
/// already valid. Applying the redirect to its own target yields `None`.
#[must_use]
pub fn redirect_target(path: &str) -> Option<String> {
    match split_locale_segment(path).0 {
        Some(seg) if is_valid_locale(seg) => None,
        _ => Some(replace_locale(path, Locale::DEFAULT)),
    }
}
