//! Language switcher. Switching rewrites the URL's locale segment in place.

use leptos::prelude::*;

use crate::util::locale::SUPPORTED_LOCALES;
use crate::util::locale_nav::{use_locale, use_locale_router};

#[component]
pub fn LocaleSwitcher() -> impl IntoView {
    let router = use_locale_router();
    let current = use_locale();

    view! {
        <nav class="locale-switcher" aria-label="Language">
            {SUPPORTED_LOCALES
                .into_iter()
                .map(|locale| {
                    let router = router.clone();
                    view! {
                        <button
                            class="locale-switcher__option"
                            class:locale-switcher__option--active=move || current.get() == locale
                            lang=locale.as_str()
                            on:click=move |_| router.change_locale(locale)
                        >
                            {locale.native_name()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
