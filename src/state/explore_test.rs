use super::*;

fn listing(id: &str, city: &str, kind: &str, area: Option<f64>) -> Property {
    Property {
        city_id: Some(city.to_owned()),
        kind: Some(kind.to_owned()),
        area,
        ..Property::with_id(id)
    }
}

fn catalogue() -> Vec<Property> {
    vec![
        listing("a", "1", "warehouse", Some(800.0)),
        listing("b", "1", "plant", Some(5000.0)),
        listing("c", "2", "warehouse", Some(1500.0)),
        listing("d", "2", "land", None),
    ]
}

fn ids(items: &[Property]) -> Vec<&str> {
    items.iter().map(|p| p.id.as_str()).collect()
}

// =============================================================
// ExploreFilters
// =============================================================

#[test]
fn default_filters_are_empty() {
    assert!(ExploreFilters::default().is_empty());
    let filters = ExploreFilters { kind: Some("plant".to_owned()), ..ExploreFilters::default() };
    assert!(!filters.is_empty());
}

#[test]
fn to_query_copies_selection() {
    let filters = ExploreFilters { city_id: Some("2".to_owned()), area_max: Some(900.0), ..ExploreFilters::default() };
    let query = filters.to_query();
    assert_eq!(query.city_id.as_deref(), Some("2"));
    assert_eq!(query.area_max, Some(900.0));
    assert!(query.kind.is_none());
}

// =============================================================
// apply_filters
// =============================================================

#[test]
fn apply_filters_without_selection_keeps_everything() {
    assert_eq!(ids(&apply_filters(&catalogue(), &ExploreFilters::default())), vec!["a", "b", "c", "d"]);
}

#[test]
fn apply_filters_by_city_and_kind() {
    let filters = ExploreFilters {
        city_id: Some("2".to_owned()),
        kind: Some("warehouse".to_owned()),
        ..ExploreFilters::default()
    };
    assert_eq!(ids(&apply_filters(&catalogue(), &filters)), vec!["c"]);
}

#[test]
fn apply_filters_by_area_drops_unknown_area() {
    let filters = ExploreFilters { area_min: Some(1000.0), ..ExploreFilters::default() };
    assert_eq!(ids(&apply_filters(&catalogue(), &filters)), vec!["b", "c"]);

    let filters = ExploreFilters { area_min: Some(800.0), area_max: Some(1500.0), ..ExploreFilters::default() };
    assert_eq!(ids(&apply_filters(&catalogue(), &filters)), vec!["a", "c"]);
}

// =============================================================
// Area inputs
// =============================================================

#[test]
fn clamp_area_range_orders_and_bounds() {
    let options = SearchFilters { area_min: 100.0, area_max: 10_000.0, ..SearchFilters::default() };
    assert_eq!(clamp_area_range(Some(5000.0), Some(200.0), &options), (Some(200.0), Some(5000.0)));
    assert_eq!(clamp_area_range(Some(10.0), Some(50_000.0), &options), (Some(100.0), Some(10_000.0)));
    assert_eq!(clamp_area_range(Some(-1.0), None, &options), (None, None));
    assert_eq!(clamp_area_range(Some(f64::NAN), Some(300.0), &options), (None, Some(300.0)));
}

#[test]
fn parse_area_input_accepts_decimal_comma() {
    assert_eq!(parse_area_input(" 1200 "), Some(1200.0));
    assert_eq!(parse_area_input("1200,5"), Some(1200.5));
    assert_eq!(parse_area_input(""), None);
    assert_eq!(parse_area_input("big"), None);
    assert_eq!(parse_area_input("inf"), None);
}

// =============================================================
// Listings view
// =============================================================

#[test]
fn listings_view_refilters_successful_fetch() {
    let filters = ExploreFilters { area_min: Some(1000.0), ..ExploreFilters::default() };
    let view = ListingsView::from_fetch::<()>(Ok(catalogue()), &filters);
    match view {
        ListingsView::Ready(items) => assert_eq!(ids(&items), vec!["b", "c"]),
        other => panic!("expected ready, got {other:?}"),
    }
}

#[test]
fn listings_view_reports_failure_and_empty() {
    let failed = ListingsView::from_fetch(Err("boom"), &ExploreFilters::default());
    assert_eq!(failed, ListingsView::Failed);
    assert!(!failed.is_empty_result());

    let empty = ListingsView::from_fetch::<()>(Ok(Vec::new()), &ExploreFilters::default());
    assert!(empty.is_empty_result());
    assert!(!ListingsView::Loading.is_empty_result());
}
