//! Basket modal: line list with quantity controls, total, and checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every +/- click goes through `BasketManager::change_quantity`, which
//! persists and drops lines that reach zero. Checkout hands over to the
//! payment page, which owns clearing the basket.

use leptos::prelude::*;
use shop::money::format_price;

use crate::state::shop::ShopState;
use crate::state::ui::UiState;
use crate::util::{nav, notice};

#[component]
pub fn BasketModal() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move |_| ui.update(|u| u.basket_open = false);

    let change = move |id: String, delta: i32| {
        shop.update(|s| {
            s.basket.change_quantity(&id, delta);
        });
    };

    let on_checkout = move |_| {
        let outcome = shop.with_untracked(|s| s.basket.checkout());
        match outcome {
            Ok(ticket) => {
                log::info!("checkout: {}", ticket.describe());
                ui.update(|u| u.basket_open = false);
                nav::redirect("/payment");
            }
            Err(e) => notice::alert(&e.to_string()),
        }
    };

    let rows = move || {
        shop.with(|s| {
            s.basket
                .lines()
                .iter()
                .map(|line| {
                    let minus_id = line.id.clone();
                    let plus_id = line.id.clone();
                    view! {
                        <div class="basket-row">
                            <span class="basket-row__name">{line.name.clone()}</span>
                            <div class="basket-row__qty">
                                <button
                                    class="qty-btn"
                                    aria-label="Decrease quantity"
                                    on:click=move |_| change(minus_id.clone(), -1)
                                >
                                    "−"
                                </button>
                                <span class="basket-row__count">{line.quantity}</span>
                                <button
                                    class="qty-btn"
                                    aria-label="Increase quantity"
                                    on:click=move |_| change(plus_id.clone(), 1)
                                >
                                    "+"
                                </button>
                            </div>
                            <span class="basket-row__price">{format_price(line.line_total())}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || ui.with(|u| u.basket_open)>
            <div class="modal-backdrop" on:click=close>
                <div class="modal basket-modal" on:click=move |ev| ev.stop_propagation()>
                    <button class="modal__close" on:click=close>"✕"</button>
                    <h2>"Your Basket"</h2>
                    <p class="basket-modal__service">
                        "Service: "
                        <span>{move || shop.with(|s| s.service.label())}</span>
                    </p>
                    <Show
                        when=move || shop.with(|s| !s.basket.is_empty())
                        fallback=|| view! { <p class="basket-modal__empty">"Your basket is empty."</p> }
                    >
                        <div class="basket-modal__items">{rows}</div>
                    </Show>
                    <p class="basket-modal__total">
                        "Total: "
                        <strong>{move || shop.with(|s| s.basket.formatted_total())}</strong>
                    </p>
                    <button class="btn btn--primary" on:click=on_checkout>"Checkout"</button>
                </div>
            </div>
        </Show>
    }
}
