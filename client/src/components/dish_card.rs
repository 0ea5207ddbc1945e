//! Menu card for one dish with add-to-basket and favourite controls.

use leptos::prelude::*;
use shop::menu::Dish;
use shop::money::format_price;

use crate::config;
use crate::state::shop::ShopState;
use crate::state::ui::UiState;
use crate::util::delay;

#[component]
pub fn DishCard(dish: &'static Dish) -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_add = move |_| {
        let mut message = String::new();
        shop.update(|s| message = s.add(&dish.item()));
        let seq = ui.try_update(|u| u.show_toast(message)).unwrap_or_default();
        delay::after(config::TOAST_VISIBLE, move || ui.update(|u| u.hide_toast(seq)));
    };

    let on_favourite = move |_| {
        shop.update(|s| {
            s.basket.toggle_favourite(&dish.item());
        });
    };

    let is_favourite = move || shop.with(|s| s.basket.is_favourite(dish.id));

    view! {
        <article class="menu-item">
            <div class="menu-item__header">
                <h3>{dish.name}</h3>
                <button
                    class="fav-btn"
                    class:active=is_favourite
                    title="Favourite"
                    on:click=on_favourite
                >
                    {move || if is_favourite() { "♥" } else { "♡" }}
                </button>
            </div>
            <p class="menu-item__description">{dish.description}</p>
            <div class="menu-item__footer">
                <span class="price">{format_price(dish.price)}</span>
                <button class="btn add-cart-btn" on:click=on_add>"Add to basket"</button>
            </div>
        </article>
    }
}
