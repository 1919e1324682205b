//! REST helpers for cities, search filters, layout content, and listings.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / native: every fetch reports [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Raw fetchers return typed errors. The `*_or_default` wrappers log and fall
//! back to built-in content so a flaky backend degrades the page instead of
//! blanking it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use url::form_urlencoded;

use super::types::{City, LayoutContent, NavItem, Property, SearchFilters};
use crate::config::PortalConfig;
use crate::i18n::t;
use crate::util::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Listing search parameters sent to `/api/properties`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyQuery {
    pub city_id: Option<String>,
    pub kind: Option<String>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
}

impl PropertyQuery {
    /// URL-encoded query string, always led by `lang`.
    #[must_use]
    pub fn to_query_string(&self, locale: Locale) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("lang", locale.as_str());
        if let Some(city) = &self.city_id {
            query.append_pair("city", city);
        }
        if let Some(kind) = &self.kind {
            query.append_pair("kind", kind);
        }
        if let Some(min) = self.area_min {
            query.append_pair("area_min", &min.to_string());
        }
        if let Some(max) = self.area_max {
            query.append_pair("area_max", &max.to_string());
        }
        query.finish()
    }
}

fn lang_endpoint(path: &str, locale: Locale) -> String {
    format!("{path}?lang={locale}")
}

fn cities_endpoint(locale: Locale) -> String {
    lang_endpoint("/api/cities", locale)
}

fn search_filters_endpoint(locale: Locale) -> String {
    lang_endpoint("/api/search-filters", locale)
}

fn layout_endpoint(locale: Locale) -> String {
    lang_endpoint("/api/layout", locale)
}

fn properties_endpoint(query: &PropertyQuery, locale: Locale) -> String {
    format!("/api/properties?{}", query.to_query_string(locale))
}

/// Header navigation used when the layout endpoint is unreachable or sparse.
#[must_use]
pub fn default_navigation(locale: Locale) -> Vec<NavItem> {
    [("nav.home", ""), ("nav.explore", "explore"), ("nav.compare", "compare")]
        .into_iter()
        .map(|(key, path)| NavItem { label: t(locale, key).to_owned(), path: path.to_owned() })
        .collect()
}

#[must_use]
pub fn default_layout(locale: Locale) -> LayoutContent {
    LayoutContent { navigation: default_navigation(locale), footer_text: t(locale, "footer.default").to_owned() }
}

/// Fill any empty part of a fetched layout with the built-in defaults.
#[must_use]
pub fn with_layout_defaults(mut layout: LayoutContent, locale: Locale) -> LayoutContent {
    if layout.navigation.is_empty() {
        layout.navigation = default_navigation(locale);
    }
    if layout.footer_text.trim().is_empty() {
        layout.footer_text = t(locale, "footer.default").to_owned();
    }
    layout
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Fetch cities from `/api/cities`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not OK, or the body
/// does not decode.
pub async fn fetch_cities(config: &PortalConfig, locale: Locale) -> Result<Vec<City>, ApiError> {
    fetch_json(&config.api_url(&cities_endpoint(locale))).await
}

/// Fetch filter options from `/api/search-filters`.
///
/// # Errors
///
/// Same conditions as [`fetch_cities`].
pub async fn fetch_search_filters(config: &PortalConfig, locale: Locale) -> Result<SearchFilters, ApiError> {
    fetch_json(&config.api_url(&search_filters_endpoint(locale))).await
}

/// Fetch header/footer content from `/api/layout`.
///
/// # Errors
///
/// Same conditions as [`fetch_cities`].
pub async fn fetch_layout(config: &PortalConfig, locale: Locale) -> Result<LayoutContent, ApiError> {
    fetch_json(&config.api_url(&layout_endpoint(locale))).await
}

/// Fetch listings matching `query` from `/api/properties`.
///
/// # Errors
///
/// Same conditions as [`fetch_cities`].
pub async fn fetch_properties(
    config: &PortalConfig,
    query: &PropertyQuery,
    locale: Locale,
) -> Result<Vec<Property>, ApiError> {
    fetch_json(&config.api_url(&properties_endpoint(query, locale))).await
}

pub async fn fetch_cities_or_default(config: &PortalConfig, locale: Locale) -> Vec<City> {
    fetch_cities(config, locale).await.unwrap_or_else(|e| {
        leptos::logging::warn!("cities fetch failed; using defaults: {e}");
        Vec::new()
    })
}

pub async fn fetch_search_filters_or_default(config: &PortalConfig, locale: Locale) -> SearchFilters {
    fetch_search_filters(config, locale).await.unwrap_or_else(|e| {
        leptos::logging::warn!("search filters fetch failed; using defaults: {e}");
        SearchFilters::default()
    })
}

pub async fn fetch_layout_or_default(config: &PortalConfig, locale: Locale) -> LayoutContent {
    match fetch_layout(config, locale).await {
        Ok(layout) => with_layout_defaults(layout, locale),
        Err(e) => {
            leptos::logging::warn!("layout fetch failed; using defaults: {e}");
            default_layout(locale)
        }
    }
}
