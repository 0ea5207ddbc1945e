//! Delivery / collection selector.
//!
//! Choosing a mode persists it and moves to that mode's page, where the
//! basket and payment views pick up the label.

use leptos::prelude::*;
use shop::ServiceMode;

use crate::state::shop::ShopState;
use crate::util::nav;

#[component]
pub fn ServiceSelector() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();

    let button = move |mode: ServiceMode| {
        view! {
            <button
                class="service-btn"
                class:active=move || shop.with(|s| s.service == mode)
                on:click=move |_| {
                    shop.update(|s| s.choose_service(mode));
                    nav::redirect(mode.route());
                }
            >
                {mode.label()}
            </button>
        }
    };

    view! {
        <div class="service-selector">
            {button(ServiceMode::Delivery)}
            {button(ServiceMode::Collection)}
        </div>
    }
}
