//! Side-by-side comparison of the saved listings.
//!
//! DESIGN
//! ======
//! The table is transposed: one column per listing, one row per attribute.
//! Row construction is a pure function of the list so it can be tested
//! without a reactive runtime.

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::t;
use crate::net::types::Property;
use crate::state::comparison::use_comparison;
use crate::util::format::{MISSING_METRIC, format_metric};
use crate::util::locale::{Locale, localized_path};
use crate::util::locale_nav::use_locale;

/// One attribute row of the comparison table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

fn text_or_missing(value: &str) -> String {
    if value.trim().is_empty() { MISSING_METRIC.to_owned() } else { value.to_owned() }
}

/// Attribute rows for `list`, each carrying one cell per listing in list order.
#[must_use]
pub fn comparison_rows(list: &[Property], locale: Locale) -> Vec<ComparisonRow> {
    type Cell = fn(&Property) -> String;
    let columns: [(&str, Cell); 6] = [
        ("property.location", |p| text_or_missing(&p.location)),
        ("property.kind", |p| text_or_missing(p.kind.as_deref().unwrap_or_default())),
        ("property.area", |p| format_metric(p.area)),
        ("property.power", |p| format_metric(p.power_kw)),
        ("property.water", |p| format_metric(p.water_m3)),
        ("property.gas", |p| format_metric(p.gas_m3)),
    ];
    columns
        .iter()
        .map(|(key, cell)| ComparisonRow {
            label: t(locale, key).to_owned(),
            values: list.iter().map(cell).collect(),
        })
        .collect()
}

#[component]
pub fn ComparePage() -> impl IntoView {
    let comparison = use_comparison();
    let locale = use_locale();

    let on_clear = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(comparison.clear_comparison());
    };

    let remove = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            comparison.remove_from_comparison(id).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let table = move || {
        let list = comparison.comparison_list();
        let locale = locale.get();
        let rows = comparison_rows(&list, locale);
        view! {
            <table class="compare-table">
                <thead>
                    <tr>
                        <th></th>
                        {list
                            .into_iter()
                            .map(|property| {
                                let id = property.id.clone();
                                view! {
                                    <th class="compare-table__head">
                                        <span class="compare-table__title">{text_or_missing(&property.title)}</span>
                                        <button
                                            class="compare-table__remove"
                                            on:click=move |_| remove(id.clone())
                                        >
                                            {t(locale, "compare.remove").to_owned()}
                                        </button>
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <th scope="row">{row.label}</th>
                                    {row.values.into_iter().map(|v| view! { <td>{v}</td> }).collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
    };

    let empty = move || {
        view! {
            <div class="compare__empty">
                <p>{move || t(locale.get(), "compare.empty").to_owned()}</p>
                <A href=move || localized_path(locale.get(), "explore")>
                    {move || t(locale.get(), "nav.explore").to_owned()}
                </A>
            </div>
        }
    };

    view! {
        <section class="compare">
            <header class="compare__header">
                <h1>{move || t(locale.get(), "compare.title").to_owned()}</h1>
                <Show when=move || comparison.comparison_count() != 0>
                    <button class="compare__clear" on:click=on_clear>
                        {move || t(locale.get(), "compare.clear").to_owned()}
                    </button>
                </Show>
            </header>
            <Show when=move || comparison.comparison_count() != 0 fallback=empty>
                {table}
            </Show>
        </section>
    }
}
