use super::*;

// =============================================================
// Locale parsing
// =============================================================

#[test]
fn default_locale_is_english() {
    assert_eq!(Locale::DEFAULT, Locale::En);
    assert_eq!(Locale::default(), Locale::DEFAULT);
}

#[test]
fn parse_accepts_only_supported_codes() {
    assert_eq!(Locale::parse("ru"), Some(Locale::Ru));
    assert_eq!(Locale::parse("uz"), Some(Locale::Uz));
    assert_eq!(Locale::parse("RU"), None);
    assert_eq!(Locale::parse("xx"), None);
    assert_eq!(Locale::parse(""), None);
}

#[test]
fn from_str_reports_unsupported_value() {
    assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
    assert_eq!("de".parse::<Locale>(), Err(UnsupportedLocale("de".to_owned())));
}

#[test]
fn display_matches_path_segment() {
    for locale in SUPPORTED_LOCALES {
        assert_eq!(locale.to_string(), locale.as_str());
        assert!(is_valid_locale(locale.as_str()));
    }
}

// =============================================================
// Path helpers
// =============================================================

#[test]
fn split_locale_segment_handles_common_shapes() {
    assert_eq!(split_locale_segment("/ru/explore?x=1"), (Some("ru"), "/explore?x=1"));
    assert_eq!(split_locale_segment("/ru"), (Some("ru"), ""));
    assert_eq!(split_locale_segment("/ru?x=1"), (Some("ru"), "?x=1"));
    assert_eq!(split_locale_segment("/"), (None, ""));
    assert_eq!(split_locale_segment(""), (None, ""));
    assert_eq!(split_locale_segment("/?q=a"), (None, "?q=a"));
}

#[test]
fn locale_from_path_falls_back_to_default() {
    assert_eq!(locale_from_path("/ru/explore"), Locale::Ru);
    assert_eq!(locale_from_path("/xx/explore"), Locale::DEFAULT);
    assert_eq!(locale_from_path("/explore"), Locale::DEFAULT);
    assert_eq!(locale_from_path("/"), Locale::DEFAULT);
}

#[test]
fn looks_like_locale_matches_language_tags() {
    assert!(looks_like_locale("xx"));
    assert!(looks_like_locale("de-AT"));
    assert!(looks_like_locale("es-419"));
    assert!(!looks_like_locale("explore"));
    assert!(!looks_like_locale("map"));
    assert!(!looks_like_locale("x1"));
}

#[test]
fn localized_path_prefixes_locale() {
    assert_eq!(localized_path(Locale::Ru, "explore"), "/ru/explore");
    assert_eq!(localized_path(Locale::Ru, "/explore"), "/ru/explore");
    assert_eq!(localized_path(Locale::Uz, ""), "/uz");
    assert_eq!(localized_path(Locale::Uz, "/"), "/uz");
    assert_eq!(localized_path(Locale::En, "?city=3"), "/en?city=3");
}

#[test]
fn replace_locale_keeps_rest_of_path() {
    assert_eq!(replace_locale("/en/explore?city=3", Locale::Ru), "/ru/explore?city=3");
    assert_eq!(replace_locale("/ru", Locale::Uz), "/uz");
    assert_eq!(replace_locale("/xx/compare", Locale::En), "/en/compare");
    assert_eq!(replace_locale("/compare", Locale::Ru), "/ru/compare");
}

// =============================================================
// Redirect rule
// =============================================================

#[test]
fn redirect_target_is_none_for_valid_locale() {
    assert_eq!(redirect_target("/ru/explore"), None);
    assert_eq!(redirect_target("/en"), None);
}

#[test]
fn redirect_target_normalizes_invalid_and_missing_locale() {
    assert_eq!(redirect_target("/xx/explore").as_deref(), Some("/en/explore"));
    assert_eq!(redirect_target("/explore").as_deref(), Some("/en/explore"));
    assert_eq!(redirect_target("/").as_deref(), Some("/en"));
    assert_eq!(redirect_target("/de-AT/compare?a=1").as_deref(), Some("/en/compare?a=1"));
}

#[test]
fn redirect_is_idempotent() {
    for path in ["/", "/xx/explore", "/explore", "/fr", "/compare?x=1", "/en/explore"] {
        let once = redirect_target(path).unwrap_or_else(|| path.to_owned());
        assert_eq!(redirect_target(&once), None, "path {path} -> {once}");
    }
}
