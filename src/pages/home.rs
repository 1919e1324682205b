//! Localized landing page with the city index.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::PortalConfig;
use crate::i18n::t;
use crate::net::types::City;
use crate::util::locale::{Locale, localized_path};
use crate::util::locale_nav::use_locale;

/// Explore link pre-filtered to one city.
pub(crate) fn city_explore_href(locale: Locale, city_id: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("city", city_id)
        .finish();
    format!("{}?{query}", localized_path(locale, "explore"))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = use_locale();
    let config = expect_context::<PortalConfig>();
    let cities = RwSignal::new(Vec::<City>::new());

    Effect::new(move || {
        let requested = locale.get();
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let fetched = crate::net::api::fetch_cities_or_default(&config, requested).await;
                if locale.get_untracked() == requested {
                    cities.set(fetched);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, requested);
        }
    });

    let tr = move |key: &'static str| move || t(locale.get(), key).to_owned();

    view! {
        <section class="home-hero">
            <h1>{tr("home.title")}</h1>
            <p class="home-hero__subtitle">{tr("home.subtitle")}</p>
            <A href=move || localized_path(locale.get(), "explore") attr:class="home-hero__cta">
                {tr("home.cta")}
            </A>
        </section>
        <Show when=move || cities.with(|c| !c.is_empty())>
            <section class="home-cities">
                <h2>{tr("home.cities")}</h2>
                <ul class="home-cities__list">
                    <For
                        each=move || cities.get()
                        key=|city| city.id.clone()
                        children=move |city: City| {
                            let id = city.id;
                            view! {
                                <li>
                                    <A href=move || city_explore_href(locale.get(), &id)>
                                        <span class="home-cities__name">{city.name}</span>
                                        <span class="home-cities__count">{city.property_count}</span>
                                    </A>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </Show>
    }
}
