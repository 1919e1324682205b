//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::locale_guard::LocaleLayout;
use crate::config::PortalConfig;
use crate::pages::{compare::ComparePage, explore::ExplorePage, home::HomePage, not_found::NotFoundPage};
use crate::services::comparison::ComparisonService;
use crate::state::comparison::{ComparisonStore, provide_comparison_context};
use crate::state::ui::UiState;
use crate::util::locale::{Locale, localized_path};
use crate::util::storage::{PersistentStore, StorageBackend};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=Locale::DEFAULT.as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Storage behind the comparison list: `localStorage` in the browser, an
/// in-memory map everywhere else (SSR renders an empty list).
fn comparison_backend() -> Rc<dyn StorageBackend> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(crate::util::local_storage::BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(crate::util::storage::MemoryStorage::new())
    }
}

/// Root application component.
///
/// Provides config, UI state, and the session comparison store, then sets up
/// locale-prefixed routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(PortalConfig::from_build_env());
    provide_context(RwSignal::new(UiState::default()));

    let service = ComparisonService::new(PersistentStore::from_shared(comparison_backend()));
    provide_comparison_context(ComparisonStore::new(service));

    let default_home = localized_path(Locale::DEFAULT, "");

    view! {
        <Stylesheet id="leptos" href="/pkg/estate-portal.css"/>
        <Title text="Industrial Estate Portal"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=move || view! { <Redirect path=default_home.clone()/> }/>
                <ParentRoute path=ParamSegment("locale") view=LocaleLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("explore") view=ExplorePage/>
                    <Route path=StaticSegment("compare") view=ComparePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
