//! Listing search page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter options come from `/api/search-filters`; listings are refetched
//! whenever the selection or the locale changes. A `?city=` query (as linked
//! from the home page) seeds the initial selection.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::filter_panel::FilterPanel;
use crate::components::property_card::PropertyCard;
use crate::config::PortalConfig;
use crate::i18n::t;
use crate::state::explore::{ExploreFilters, ExploreState, ListingsView};
use crate::util::locale_nav::use_locale;

#[component]
pub fn ExplorePage() -> impl IntoView {
    let locale = use_locale();
    let config = expect_context::<PortalConfig>();
    let query = use_query_map();

    let initial = ExploreFilters {
        city_id: query.with_untracked(|q| q.get("city")).filter(|c| !c.is_empty()),
        ..ExploreFilters::default()
    };
    let explore = RwSignal::new(ExploreState { filters: initial, ..ExploreState::default() });
    let selection = Memo::new(move |_| explore.with(|s| s.filters.clone()));
    let listings = RwSignal::new(ListingsView::Loading);
    // Monotonic request number; only the newest response is applied.
    let request_seq = StoredValue::new(0_u64);

    let options_config = config.clone();
    Effect::new(move || {
        let requested = locale.get();
        #[cfg(feature = "hydrate")]
        {
            let config = options_config.clone();
            leptos::task::spawn_local(async move {
                let options = crate::net::api::fetch_search_filters_or_default(&config, requested).await;
                explore.update(|s| s.options = options);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&options_config, requested);
        }
    });

    Effect::new(move || {
        let requested = locale.get();
        let filters = selection.get();
        request_seq.update_value(|n| *n += 1);
        let seq = request_seq.get_value();
        listings.set(ListingsView::Loading);
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_properties(&config, &filters.to_query(), requested).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("listing fetch failed: {e}");
                }
                if request_seq.get_value() == seq {
                    listings.set(ListingsView::from_fetch(result, &filters));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, requested, filters, seq);
        }
    });

    let status = move || {
        let key = match listings.get() {
            ListingsView::Loading => "explore.loading",
            ListingsView::Failed => "explore.error",
            view if view.is_empty_result() => "explore.no_results",
            ListingsView::Ready(_) => return None,
        };
        Some(view! { <p class="explore__status">{t(locale.get(), key).to_owned()}</p> })
    };

    let items = move || match listings.get() {
        ListingsView::Ready(items) => items,
        _ => Vec::new(),
    };

    view! {
        <section class="explore">
            <h1>{move || t(locale.get(), "explore.title").to_owned()}</h1>
            <FilterPanel explore=explore/>
            {status}
            <div class="explore__grid">
                <For
                    each=items
                    key=|property| property.id.clone()
                    children=move |property| view! { <PropertyCard property=property/> }
                />
            </div>
        </section>
    }
}
