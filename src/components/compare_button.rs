//! Per-listing toggle that adds to or removes from the comparison list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads membership from the shared comparison context, so every card and the
//! header badge reflect the same list. Add outcomes surface as notices; the
//! reason code is translated here, never in the comparison service.

use leptos::prelude::*;

use crate::config::PortalConfig;
use crate::i18n::t;
use crate::net::types::Property;
use crate::state::comparison::use_comparison;
use crate::state::ui::UiState;
use crate::util::locale_nav::use_locale;

/// Compare/remove toggle for one listing.
#[component]
pub fn CompareButton(property: Property) -> impl IntoView {
    let comparison = use_comparison();
    let ui = expect_context::<RwSignal<UiState>>();
    let notice_ms = expect_context::<PortalConfig>().notice_ms;
    let locale = use_locale();

    let id = property.id.clone();
    let active = Memo::new(move |_| comparison.is_in_comparison(&id));
    let property = StoredValue::new(property);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        #[cfg(feature = "hydrate")]
        {
            use crate::components::notice_banner::flash_notice;
            use crate::state::ui::add_outcome_notice;

            let locale = locale.get_untracked();
            if active.get_untracked() {
                let id = property.with_value(|p| p.id.clone());
                leptos::task::spawn_local(async move {
                    comparison.remove_from_comparison(id).await;
                });
            } else {
                let candidate = property.get_value();
                leptos::task::spawn_local(async move {
                    let outcome = comparison.add_to_comparison(candidate).await;
                    let (kind, message) = add_outcome_notice(locale, outcome.reason);
                    flash_notice(ui, kind, message, notice_ms);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ui, notice_ms, property);
        }
    };

    let label = move || {
        let key = if active.get() { "compare.remove" } else { "compare.add" };
        t(locale.get(), key).to_owned()
    };

    view! {
        <button
            class="compare-button"
            class:compare-button--active=move || active.get()
            aria-pressed=move || if active.get() { "true" } else { "false" }
            on:click=on_click
        >
            <span class="compare-button__icon" aria-hidden="true">
                {move || if active.get() { "✓" } else { "+" }}
            </span>
            <span class="compare-button__label">{label}</span>
        </button>
    }
}
