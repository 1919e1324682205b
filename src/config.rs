//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled:
//!
//! - `ESTATE_PORTAL_API_BASE`: REST base URL (default: same origin)
//! - `ESTATE_PORTAL_NOTICE_MS`: comparison notice auto-dismiss delay (default 3000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_NOTICE_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// REST base URL without a trailing slash; empty means same origin.
    pub api_base: String,
    pub notice_ms: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { api_base: String::new(), notice_ms: DEFAULT_NOTICE_MS }
    }
}

impl PortalConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            api_base: parse_api_base(option_env!("ESTATE_PORTAL_API_BASE")),
            notice_ms: parse_notice_ms(option_env!("ESTATE_PORTAL_NOTICE_MS")),
        }
    }

    /// Absolute URL for an API path such as `/api/cities`.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

pub(crate) fn parse_api_base(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned()
}

pub(crate) fn parse_notice_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(DEFAULT_NOTICE_MS)
}
