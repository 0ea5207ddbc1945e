//! Landing page with the time-of-day greeting and service choice.

use leptos::prelude::*;

use crate::components::service_selector::ServiceSelector;
use crate::util::{clock, nav};

#[component]
pub fn HomePage() -> impl IntoView {
    // Filled after hydration so the server render stays clock-independent.
    let greeting = RwSignal::new(String::new());
    Effect::new(move || greeting.set(shop::greeting::for_hour(clock::local_hour()).to_owned()));

    view! {
        <section class="hero">
            <h1 class="hero__title">"Welcome to Ichiraku Ramen"</h1>
            <p class="hero__greeting">{move || greeting.get()}</p>
            <button class="btn btn--primary hero__cta" on:click=move |_| nav::redirect("/menu")>
                "Order Now"
            </button>
        </section>
        <section class="home-service">
            <h2>"How would you like your ramen?"</h2>
            <ServiceSelector/>
        </section>
    }
}
