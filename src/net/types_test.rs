use super::*;

// =============================================================
// Property
// =============================================================

#[test]
fn property_accepts_numeric_id() {
    let p: Property = serde_json::from_value(serde_json::json!({ "id": 42, "title": "Depot" })).unwrap();
    assert_eq!(p.id, "42");
    assert_eq!(p.title, "Depot");
}

#[test]
fn property_rejects_missing_or_empty_id() {
    assert!(serde_json::from_value::<Property>(serde_json::json!({ "title": "x" })).is_err());
    assert!(serde_json::from_value::<Property>(serde_json::json!({ "id": "" })).is_err());
    assert!(serde_json::from_value::<Property>(serde_json::json!({ "id": null })).is_err());
}

#[test]
fn property_keeps_unknown_fields() {
    let raw = serde_json::json!({
        "id": "p1",
        "title": "Cold store",
        "area": 1200.5,
        "rail_access": true,
        "gallery": ["a.jpg", "b.jpg"],
    });
    let p: Property = serde_json::from_value(raw).unwrap();
    assert_eq!(p.area, Some(1200.5));
    assert_eq!(p.extra.get("rail_access"), Some(&serde_json::json!(true)));

    let back = serde_json::to_value(&p).unwrap();
    assert_eq!(back["gallery"], serde_json::json!(["a.jpg", "b.jpg"]));
    assert_eq!(back["id"], serde_json::json!("p1"));
}

#[test]
fn property_omits_absent_optional_fields() {
    let value = serde_json::to_value(Property::with_id("p1")).unwrap();
    assert!(value.get("area").is_none());
    assert!(value.get("image_url").is_none());
    assert_eq!(value["title"], serde_json::json!(""));
}

// =============================================================
// SearchFilters / LayoutContent
// =============================================================

#[test]
fn search_filters_fill_missing_bounds() {
    let f: SearchFilters = serde_json::from_value(serde_json::json!({ "kinds": ["plant"] })).unwrap();
    assert!(f.cities.is_empty());
    assert_eq!(f.kinds, vec!["plant".to_owned()]);
    assert_eq!(f.area_min, 0.0);
    assert_eq!(f.area_max, DEFAULT_AREA_MAX);
}

#[test]
fn search_filters_default_offers_core_kinds() {
    let f = SearchFilters::default();
    assert!(f.kinds.contains(&"warehouse".to_owned()));
    assert_eq!(f.area_max, DEFAULT_AREA_MAX);
}

#[test]
fn city_count_defaults_to_zero() {
    let c: City = serde_json::from_value(serde_json::json!({ "id": 7, "name": "Almaty" })).unwrap();
    assert_eq!(c.id, "7");
    assert_eq!(c.property_count, 0);
}

#[test]
fn layout_content_tolerates_empty_object() {
    let l: LayoutContent = serde_json::from_str("{}").unwrap();
    assert_eq!(l, LayoutContent::default());
}
