//! Delivery and collection information pages.

use leptos::prelude::*;
use shop::ServiceMode;

use crate::components::service_selector::ServiceSelector;
use crate::util::nav;

#[component]
pub fn DeliveryPage() -> impl IntoView {
    view! {
        <ServicePage
            mode=ServiceMode::Delivery
            blurb="Hot ramen brought to your door. Broth and noodles are packed separately so nothing goes soggy on the way."
        />
    }
}

#[component]
pub fn CollectionPage() -> impl IntoView {
    view! {
        <ServicePage
            mode=ServiceMode::Collection
            blurb="Order ahead and pick up at the counter. We start cooking when you check out."
        />
    }
}

#[component]
fn ServicePage(mode: ServiceMode, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="service-page">
            <h1>{mode.label()}</h1>
            <p>{blurb}</p>
            <ServiceSelector/>
            <button class="btn btn--primary" on:click=move |_| nav::redirect("/menu")>
                "Browse the menu"
            </button>
        </section>
    }
}
