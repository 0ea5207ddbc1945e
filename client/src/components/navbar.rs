//! Top navigation bar: page links, theme toggle, basket badge, and account controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. It is the entry point for the basket modal, the
//! auth modals, and the user menu.

use leptos::prelude::*;

use crate::components::user_menu::UserMenu;
use crate::state::shop::ShopState;
use crate::state::ui::{AuthModal, UiState};

/// Site-wide navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let basket_count = move || shop.with(|s| s.basket.item_count());
    let username = move || shop.with(|s| s.user.as_ref().map(|u| u.username.clone()));

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"🍜 Ichiraku Ramen"</a>
            <ul class="navbar__links">
                <li><a href="/">"Home"</a></li>
                <li><a href="/menu">"Menu"</a></li>
                <li><a href="/about">"About"</a></li>
                <li><a href="/contact">"Contact"</a></li>
            </ul>

            <div class="navbar__right">
                <Show
                    when=move || username().is_some()
                    fallback=move || {
                        view! {
                            <button class="btn navbar__login" on:click=move |_| ui.update(|u| u.open_auth(AuthModal::Login))>
                                "Login"
                            </button>
                            <button class="btn navbar__register" on:click=move |_| ui.update(|u| u.open_auth(AuthModal::Register))>
                                "Register"
                            </button>
                        }
                    }
                >
                    <span class="navbar__user-badge">"👤 " {move || username().unwrap_or_default()}</span>
                </Show>

                <button
                    class="btn navbar__theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| {
                        shop.update(|s| {
                            s.toggle_theme();
                        });
                    }
                >
                    {move || shop.with(|s| s.theme.toggle_icon())}
                </button>

                <button
                    class="btn navbar__basket"
                    title="Open basket"
                    on:click=move |_| ui.update(|u| u.basket_open = true)
                >
                    "🛒 "
                    <span class="navbar__basket-count">{basket_count}</span>
                </button>

                <UserMenu/>
            </div>
        </nav>
    }
}
