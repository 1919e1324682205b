//! Listing search state for the explore page.
//!
//! DESIGN
//! ======
//! Filter selection is kept apart from the filter *options* the API offers,
//! so a late options response never clobbers what the user already chose.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use crate::net::api::PropertyQuery;
use crate::net::types::{Property, SearchFilters};

/// What the user picked in the filter panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExploreFilters {
    pub city_id: Option<String>,
    pub kind: Option<String>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
}

impl ExploreFilters {
    #[must_use]
    pub fn to_query(&self) -> PropertyQuery {
        PropertyQuery {
            city_id: self.city_id.clone(),
            kind: self.kind.clone(),
            area_min: self.area_min,
            area_max: self.area_max,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Explore page state: the current selection and the options to pick from.
#[derive(Clone, Debug, Default)]
pub struct ExploreState {
    pub filters: ExploreFilters,
    pub options: SearchFilters,
}

/// Order and bound a user-entered area range against the offered limits.
///
/// Negative or non-finite inputs are dropped.
#[must_use]
pub fn clamp_area_range(min: Option<f64>, max: Option<f64>, options: &SearchFilters) -> (Option<f64>, Option<f64>) {
    let clean = |v: Option<f64>| {
        v.filter(|x| x.is_finite() && *x >= 0.0)
            .map(|x| x.clamp(options.area_min, options.area_max.max(options.area_min)))
    };
    match (clean(min), clean(max)) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        pair => pair,
    }
}

/// Narrow `items` to those matching `filters`.
///
/// Listings without an area are kept unless an area bound is set.
#[must_use]
pub fn apply_filters(items: &[Property], filters: &ExploreFilters) -> Vec<Property> {
    items
        .iter()
        .filter(|p| filters.city_id.as_ref().map_or(true, |c| p.city_id.as_ref() == Some(c)))
        .filter(|p| filters.kind.as_ref().map_or(true, |k| p.kind.as_ref() == Some(k)))
        .filter(|p| match (filters.area_min, filters.area_max, p.area) {
            (None, None, _) => true,
            (_, _, None) => false,
            (min, max, Some(area)) => min.map_or(true, |m| area >= m) && max.map_or(true, |m| area <= m),
        })
        .cloned()
        .collect()
}

/// Parse an area input field; blank or invalid input clears the bound.
#[must_use]
pub fn parse_area_input(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Result of the latest listing request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingsView {
    #[default]
    Loading,
    Ready(Vec<Property>),
    Failed,
}

impl ListingsView {
    /// Build the view from a fetch result, re-applying `filters` locally in
    /// case the backend ignored some of them.
    #[must_use]
    pub fn from_fetch<E>(result: Result<Vec<Property>, E>, filters: &ExploreFilters) -> Self {
        match result {
            Ok(items) => Self::Ready(apply_filters(&items, filters)),
            Err(_) => Self::Failed,
        }
    }

    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Ready(items) if items.is_empty())
    }
}
