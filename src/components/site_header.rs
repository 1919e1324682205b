//! Site chrome: header navigation and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation entries come from the layout endpoint as locale-free paths and
//! are localized here, so API content never hardcodes a language prefix.

use leptos::prelude::*;

use crate::components::comparison_badge::ComparisonBadge;
use crate::components::locale_switcher::LocaleSwitcher;
use crate::net::types::LayoutContent;
use crate::util::locale::localized_path;
use crate::util::locale_nav::use_locale;

#[component]
pub fn SiteHeader(#[prop(into)] layout: Signal<LayoutContent>) -> impl IntoView {
    let locale = use_locale();
    let home_href = move || localized_path(locale.get(), "");

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=home_href>
                "IndustrialEstate"
            </a>
            <nav class="site-header__nav">
                {move || {
                    let locale = locale.get();
                    layout
                        .get()
                        .navigation
                        .into_iter()
                        .map(|item| {
                            let href = localized_path(locale, &item.path);
                            view! { <a class="site-header__link" href=href>{item.label}</a> }
                        })
                        .collect_view()
                }}
            </nav>
            <span class="site-header__spacer"></span>
            <LocaleSwitcher/>
            <ComparisonBadge/>
        </header>
    }
}

#[component]
pub fn SiteFooter(#[prop(into)] layout: Signal<LayoutContent>) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__text">{move || layout.get().footer_text}</p>
        </footer>
    }
}
