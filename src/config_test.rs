use super::*;

#[test]
fn api_base_defaults_to_same_origin() {
    assert_eq!(parse_api_base(None), "");
    assert_eq!(parse_api_base(Some("   ")), "");
}

#[test]
fn api_base_trims_trailing_slashes() {
    assert_eq!(parse_api_base(Some("https://api.example.com/")), "https://api.example.com");
    assert_eq!(parse_api_base(Some(" https://api.example.com// ")), "https://api.example.com");
}

#[test]
fn notice_ms_falls_back_on_bad_values() {
    assert_eq!(parse_notice_ms(None), DEFAULT_NOTICE_MS);
    assert_eq!(parse_notice_ms(Some("soon")), DEFAULT_NOTICE_MS);
    assert_eq!(parse_notice_ms(Some("-5")), DEFAULT_NOTICE_MS);
    assert_eq!(parse_notice_ms(Some(" 1500 ")), 1500);
}

#[test]
fn api_url_joins_base_and_path() {
    let config = PortalConfig { api_base: "https://api.example.com".to_owned(), ..PortalConfig::default() };
    assert_eq!(config.api_url("/api/cities"), "https://api.example.com/api/cities");
    assert_eq!(PortalConfig::default().api_url("/api/cities"), "/api/cities");
}
