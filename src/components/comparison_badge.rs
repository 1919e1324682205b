//! Header link to the comparison page with the live item count.

use leptos::prelude::*;

use crate::i18n::t;
use crate::services::comparison::MAX_COMPARISON_ITEMS;
use crate::state::comparison::use_comparison;
use crate::util::locale::localized_path;
use crate::util::locale_nav::use_locale;

#[component]
pub fn ComparisonBadge() -> impl IntoView {
    let comparison = use_comparison();
    let locale = use_locale();

    let count = move || comparison.comparison_count();
    let href = move || localized_path(locale.get(), "compare");

    view! {
        <a class="comparison-badge" class:comparison-badge--empty=move || count() == 0 href=href>
            <span class="comparison-badge__label">{move || t(locale.get(), "nav.compare").to_owned()}</span>
            <span class="comparison-badge__count" title=format!("max {MAX_COMPARISON_ITEMS}")>
                {count}
            </span>
        </a>
    }
}
