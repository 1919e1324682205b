//! Listing card used in the explore grid.

use leptos::prelude::*;

use crate::components::compare_button::CompareButton;
use crate::i18n::t;
use crate::net::types::Property;
use crate::util::format::format_metric;
use crate::util::locale_nav::use_locale;

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let locale = use_locale();
    let title = property.title.clone();
    let location = property.location.clone();
    let image = property.image_url.clone();
    let area = format_metric(property.area);
    let power = format_metric(property.power_kw);

    view! {
        <article class="property-card">
            {image.map(|src| view! { <img class="property-card__image" src=src alt="" loading="lazy"/> })}
            <div class="property-card__body">
                <h3 class="property-card__title">{title}</h3>
                <p class="property-card__location">{location}</p>
                <dl class="property-card__metrics">
                    <dt>{move || t(locale.get(), "property.area").to_owned()}</dt>
                    <dd>{area}</dd>
                    <dt>{move || t(locale.get(), "property.power").to_owned()}</dt>
                    <dd>{power}</dd>
                </dl>
            </div>
            <CompareButton property=property/>
        </article>
    }
}
