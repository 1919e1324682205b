//! Fallback route for paths no route matches.
//!
//! A path missing its locale is redirected before this renders anything
//! useful; what remains is a genuinely unknown page under a valid locale.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::locale_guard::install_locale_redirect;
use crate::i18n::t;
use crate::util::locale::localized_path;
use crate::util::locale_nav::use_locale;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    install_locale_redirect();
    let locale = use_locale();

    view! {
        <section class="not-found">
            <h1>{move || t(locale.get(), "not_found.title").to_owned()}</h1>
            <A href=move || localized_path(locale.get(), "")>
                {move || t(locale.get(), "not_found.back").to_owned()}
            </A>
        </section>
    }
}
