//! Search filter panel for the explore page.
//!
//! Writes only `ExploreState::filters`; the page reacts to those changes and
//! refetches. Area bounds are re-clamped against the offered range on every
//! edit so the two inputs can never cross.

use leptos::prelude::*;

use crate::i18n::t;
use crate::state::explore::{ExploreFilters, ExploreState, clamp_area_range, parse_area_input};
use crate::state::ui::UiState;
use crate::util::locale_nav::use_locale;

fn none_if_blank(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}

fn fmt_bound(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn FilterPanel(explore: RwSignal<ExploreState>) -> impl IntoView {
    let locale = use_locale();
    let ui = expect_context::<RwSignal<UiState>>();
    let expanded = move || ui.get().filters_expanded;

    let set_area = move |min_edit: Option<Option<f64>>, max_edit: Option<Option<f64>>| {
        explore.update(|state| {
            let min = min_edit.unwrap_or(state.filters.area_min);
            let max = max_edit.unwrap_or(state.filters.area_max);
            let (min, max) = clamp_area_range(min, max, &state.options);
            state.filters.area_min = min;
            state.filters.area_max = max;
        });
    };

    let city_options = move || {
        explore
            .get()
            .options
            .cities
            .into_iter()
            .map(|city| {
                let selected = explore.with(|s| s.filters.city_id.as_ref() == Some(&city.id));
                view! { <option value=city.id selected=selected>{city.name}</option> }
            })
            .collect_view()
    };

    let kind_options = move || {
        explore
            .get()
            .options
            .kinds
            .into_iter()
            .map(|kind| {
                let selected = explore.with(|s| s.filters.kind.as_ref() == Some(&kind));
                let value = kind.clone();
                view! { <option value=value selected=selected>{kind}</option> }
            })
            .collect_view()
    };

    view! {
        <section class="filter-panel" class:filter-panel--open=expanded>
            <button
                class="filter-panel__toggle"
                aria-expanded=move || if expanded() { "true" } else { "false" }
                on:click=move |_| ui.update(|u| u.filters_expanded = !u.filters_expanded)
            >
                {move || t(locale.get(), "explore.filters").to_owned()}
            </button>
            <div class="filter-panel__fields">
                <select
                    class="filter-panel__city"
                    on:change=move |ev| {
                        let value = none_if_blank(event_target_value(&ev));
                        explore.update(|s| s.filters.city_id = value);
                    }
                >
                    <option value="" selected=move || explore.with(|s| s.filters.city_id.is_none())>
                        {move || t(locale.get(), "explore.city_any").to_owned()}
                    </option>
                    {city_options}
                </select>
                <select
                    class="filter-panel__kind"
                    on:change=move |ev| {
                        let value = none_if_blank(event_target_value(&ev));
                        explore.update(|s| s.filters.kind = value);
                    }
                >
                    <option value="" selected=move || explore.with(|s| s.filters.kind.is_none())>
                        {move || t(locale.get(), "explore.kind_any").to_owned()}
                    </option>
                    {kind_options}
                </select>
                <label class="filter-panel__area">
                    <span>{move || t(locale.get(), "explore.area_min").to_owned()}</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || explore.with(|s| fmt_bound(s.filters.area_min))
                        on:change=move |ev| set_area(Some(parse_area_input(&event_target_value(&ev))), None)
                    />
                </label>
                <label class="filter-panel__area">
                    <span>{move || t(locale.get(), "explore.area_max").to_owned()}</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || explore.with(|s| fmt_bound(s.filters.area_max))
                        on:change=move |ev| set_area(None, Some(parse_area_input(&event_target_value(&ev))))
                    />
                </label>
                <button
                    class="filter-panel__reset"
                    disabled=move || explore.with(|s| s.filters.is_empty())
                    on:click=move |_| explore.update(|s| s.filters = ExploreFilters::default())
                >
                    {move || t(locale.get(), "explore.reset").to_owned()}
                </button>
            </div>
        </section>
    }
}
