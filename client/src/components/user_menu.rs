//! Three-dot user menu and the info modal it opens.
//!
//! SYSTEM CONTEXT
//! ==============
//! History, favourites, and settings are read-only views over shop state; the
//! theme action toggles in place and logout clears the signed-in profile.

#[cfg(test)]
#[path = "user_menu_test.rs"]
mod user_menu_test;

use leptos::prelude::*;
use shop::money::format_price;
use shop::{Favourite, KeyValueStore, Order, ServiceMode, Theme};

use crate::state::shop::ShopState;
use crate::state::ui::{InfoPanel, UiState};
use crate::util::nav;

/// One `created — service — Name x qty, ...` row per order, oldest first.
pub fn history_rows(orders: &[Order]) -> Vec<String> {
    orders
        .iter()
        .map(|order| format!("{} — {} — {}", order.created, order.service.as_str(), order.items_summary()))
        .collect()
}

/// One `Name — £price` row per favourite.
pub fn favourite_rows(favourites: &[Favourite]) -> Vec<String> {
    favourites
        .iter()
        .map(|fav| format!("{} — {}", fav.name, format_price(fav.price)))
        .collect()
}

/// Current service and theme, as shown under Settings.
pub fn settings_rows(service: ServiceMode, theme: Theme) -> Vec<String> {
    let theme = match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    };
    vec![
        format!("Current service: {}", service.as_str()),
        format!("Theme: {theme}"),
    ]
}

/// Title, rows, and empty-state text for `panel`.
pub fn panel_content<S: KeyValueStore + Clone>(
    panel: InfoPanel,
    state: &ShopState<S>,
) -> (&'static str, Vec<String>, &'static str) {
    match panel {
        InfoPanel::OrderHistory => (
            "Order History",
            history_rows(state.basket.orders()),
            "No orders yet. Go to the menu and add some ramen!",
        ),
        InfoPanel::Favourites => (
            "Favourites",
            favourite_rows(state.basket.favourites()),
            "You don't have any favourites yet. Tap the ♡ on dishes you love.",
        ),
        InfoPanel::Settings => ("Settings", settings_rows(state.service, state.theme), ""),
        InfoPanel::Help => (
            "Help & Support",
            vec![
                "For urgent issues with your order, please use the contact form on the Contact page.".to_owned(),
                "For allergy questions, always speak to staff in-store before eating.".to_owned(),
            ],
            "",
        ),
    }
}

/// Dropdown toggled by the ⋮ button.
#[component]
pub fn UserMenu() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let open = move |panel: InfoPanel| move |_: leptos::ev::MouseEvent| ui.update(|u| u.open_info(panel));

    view! {
        <div class="user-menu">
            <button
                class="btn user-menu__toggle"
                title="More"
                on:click=move |_| ui.update(|u| u.user_menu_open = !u.user_menu_open)
            >
                "⋮"
            </button>
            <Show when=move || ui.with(|u| u.user_menu_open)>
                <div class="user-menu__list">
                    <button on:click=open(InfoPanel::OrderHistory)>"Order History"</button>
                    <button on:click=open(InfoPanel::Favourites)>"Favourites"</button>
                    <button on:click=move |_| {
                        ui.update(|u| u.user_menu_open = false);
                        shop.update(|s| {
                            s.toggle_theme();
                        });
                    }>"Toggle Theme"</button>
                    <button on:click=open(InfoPanel::Settings)>"Settings"</button>
                    <button on:click=open(InfoPanel::Help)>"Help & Support"</button>
                    <button on:click=move |_| {
                        ui.update(|u| u.user_menu_open = false);
                        nav::redirect("/about");
                    }>"About"</button>
                    <Show when=move || shop.with(|s| s.user.is_some())>
                        <button class="user-menu__logout" on:click=move |_| {
                            ui.update(|u| u.user_menu_open = false);
                            shop.update(|s| s.logout());
                        }>"Logout"</button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Modal rendering the panel chosen in [`UserMenu`].
#[component]
pub fn InfoModal() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move |_| ui.update(|u| u.info_panel = None);

    view! {
        {move || {
            ui.with(|u| u.info_panel).map(|panel| {
                let (title, rows, empty) = shop.with(|s| panel_content(panel, s));
                view! {
                    <div class="modal-backdrop" on:click=close>
                        <div class="modal info-modal" on:click=move |ev| ev.stop_propagation()>
                            <button class="modal__close" on:click=close>"✕"</button>
                            <h2>{title}</h2>
                            {if rows.is_empty() {
                                view! { <p>{empty}</p> }.into_any()
                            } else {
                                view! {
                                    <ul>
                                        {rows.into_iter().map(|row| view! { <li>{row}</li> }).collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }}
                        </div>
                    </div>
                }
            })
        }}
    }
}
