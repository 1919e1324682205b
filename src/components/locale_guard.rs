//! Locale-scoped layout and the missing/invalid locale redirect.
//!
//! ARCHITECTURE
//! ============
//! Every localized route renders inside `LocaleLayout`. A path whose first
//! segment is not a supported locale is never rendered: it is replaced in
//! history by the default-locale equivalent. The redirect target always
//! carries a valid locale, so the rule settles after one hop.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::notice_banner::NoticeBanner;
use crate::components::site_header::{SiteFooter, SiteHeader};
use crate::config::PortalConfig;
use crate::net::api::default_layout;
use crate::util::locale::redirect_target;
use crate::util::locale_nav::{join_search, use_locale};

/// Redirect (replacing history) whenever the current path lacks a valid locale.
pub fn install_locale_redirect() {
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = join_search(&location.pathname.get(), &location.search.get());
        if let Some(target) = redirect_target(&path) {
            leptos::logging::log!("redirecting {path} -> {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Chrome shared by all `/:locale/*` routes.
#[component]
pub fn LocaleLayout() -> impl IntoView {
    install_locale_redirect();

    let location = use_location();
    let locale = use_locale();
    let config = expect_context::<PortalConfig>();
    let layout = RwSignal::new(default_layout(locale.get_untracked()));

    // Refetch header/footer content whenever the locale changes.
    Effect::new(move || {
        let requested = locale.get();
        layout.set(default_layout(requested));
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let fetched = crate::net::api::fetch_layout_or_default(&config, requested).await;
                // Drop responses for a locale the user already switched away from.
                if locale.get_untracked() == requested {
                    layout.set(fetched);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
        }
    });

    let has_valid_locale = move || redirect_target(&location.pathname.get()).is_none();

    view! {
        <Show when=has_valid_locale>
            <SiteHeader layout=layout/>
            <NoticeBanner/>
            <main class="page">
                <Outlet/>
            </main>
            <SiteFooter layout=layout/>
        </Show>
    }
}
