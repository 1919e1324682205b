use super::*;

fn listing(id: &str, area: Option<f64>) -> Property {
    Property {
        title: format!("Listing {id}"),
        location: format!("District {id}"),
        kind: Some("warehouse".to_owned()),
        area,
        ..Property::with_id(id)
    }
}

#[test]
fn rows_have_one_cell_per_listing_in_order() {
    let list = vec![listing("a", Some(1200.0)), listing("b", None)];
    let rows = comparison_rows(&list, Locale::En);

    assert_eq!(rows.len(), 6);
    for row in &rows {
        assert_eq!(row.values.len(), 2);
    }
    assert_eq!(rows[0].values, vec!["District a", "District b"]);
    assert_eq!(rows[2].values, vec!["1\u{2009}200".to_owned(), MISSING_METRIC.to_owned()]);
}

#[test]
fn rows_are_labelled_in_requested_locale() {
    let rows = comparison_rows(&[listing("a", None)], Locale::Ru);
    assert_eq!(rows[2].label, t(Locale::Ru, "property.area"));
    assert_ne!(rows[2].label, t(Locale::En, "property.area"));
}

#[test]
fn blank_text_renders_placeholder() {
    let rows = comparison_rows(&[Property::with_id("x")], Locale::En);
    assert_eq!(rows[0].values, vec![MISSING_METRIC]);
    assert_eq!(rows[1].values, vec![MISSING_METRIC]);
}

#[test]
fn empty_list_still_yields_labels() {
    let rows = comparison_rows(&[], Locale::Uz);
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.values.is_empty()));
}
