//! REST payload DTOs shared by fetchers, state, and persisted comparison data.
//!
//! DESIGN
//! ======
//! Listing records are treated as opaque value objects beyond their `id`.
//! Fields this client does not model are kept in `extra` so a record written
//! to storage and read back is not silently narrowed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An industrial real-estate listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Stable listing identifier. Numeric ids from the API are stringified.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Human-readable address or district.
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<String>,
    /// Listing category (e.g. `"warehouse"`, `"plant"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Floor area in square metres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Available electrical capacity in kW.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_kw: Option<f64>,
    /// Water supply in cubic metres per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_m3: Option<f64>,
    /// Gas supply in cubic metres per hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_m3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Any other fields the API sends.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Property {
    /// Minimal record carrying only an id; handy for fixtures and placeholders.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }
}

/// A city that has listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub property_count: u32,
}

/// Options offered by the search/filter panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub kinds: Vec<String>,
    #[serde(default)]
    pub area_min: f64,
    #[serde(default = "default_area_max")]
    pub area_max: f64,
}

/// Upper bound of the area slider when the API does not send one.
pub const DEFAULT_AREA_MAX: f64 = 100_000.0;

fn default_area_max() -> f64 {
    DEFAULT_AREA_MAX
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            kinds: vec!["warehouse".to_owned(), "plant".to_owned(), "land".to_owned()],
            area_min: 0.0,
            area_max: DEFAULT_AREA_MAX,
        }
    }
}

/// A header navigation entry. `path` is app-relative and locale-free.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
}

/// Header/footer content served by the layout endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutContent {
    #[serde(default)]
    pub navigation: Vec<NavItem>,
    #[serde(default)]
    pub footer_text: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
