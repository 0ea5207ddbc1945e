//! Login and register modals for the mock account flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation and persistence live in `shop::accounts`; these modals collect
//! input, surface rejections as blocking notices, and auto-close after a
//! short success banner.

use leptos::prelude::*;
use shop::Registration;

use crate::config;
use crate::state::shop::ShopState;
use crate::state::ui::{AuthModal, UiState};
use crate::util::{delay, notice};

/// Both auth modals; at most one is visible.
#[component]
pub fn AuthModals() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let is_open = move |modal: AuthModal| ui.with(|u| u.auth_modal == Some(modal));

    view! {
        <Show when=move || is_open(AuthModal::Login)>
            <LoginModal/>
        </Show>
        <Show when=move || is_open(AuthModal::Register)>
            <RegisterModal/>
        </Show>
    }
}

/// Close `modal` once the success banner has been shown long enough.
fn schedule_close(ui: RwSignal<UiState>, modal: AuthModal) {
    ui.update(|u| u.auth_success = true);
    delay::after(config::AUTH_MODAL_CLOSE, move || ui.update(|u| u.finish_auth(modal)));
}

#[component]
fn LoginModal() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get_untracked();
        let mut result = Ok(());
        shop.update(|s| result = s.login(&name));
        match result {
            Ok(()) => {
                username.set(String::new());
                password.set(String::new());
                schedule_close(ui, AuthModal::Login);
            }
            Err(e) => notice::alert(&e.to_string()),
        }
    };

    let close = move |_| ui.update(UiState::close_auth);

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal auth-modal" on:click=move |ev| ev.stop_propagation()>
                <button class="modal__close" on:click=close>"✕"</button>
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Login"</button>
                </form>
                <Show when=move || ui.with(|u| u.auth_success)>
                    <p class="auth-modal__success">"Welcome back! You are now logged in."</p>
                </Show>
                <p class="auth-modal__switch">
                    "No account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ui.update(|u| u.open_auth(AuthModal::Register));
                    }>"Register"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn RegisterModal() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = Registration {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        let mut result = Ok(());
        shop.update(|s| result = s.register(&form));
        match result {
            Ok(()) => {
                for field in [username, email, password, confirm] {
                    field.set(String::new());
                }
                schedule_close(ui, AuthModal::Register);
            }
            Err(e) => notice::alert(&e.to_string()),
        }
    };

    let close = move |_| ui.update(UiState::close_auth);

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal auth-modal" on:click=move |ev| ev.stop_propagation()>
                <button class="modal__close" on:click=close>"✕"</button>
                <h2>"Register"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Create account"</button>
                </form>
                <Show when=move || ui.with(|u| u.auth_success)>
                    <p class="auth-modal__success">"Account created! You are now logged in."</p>
                </Show>
                <p class="auth-modal__switch">
                    "Already registered? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ui.update(|u| u.open_auth(AuthModal::Login));
                    }>"Login"</a>
                </p>
            </div>
        </div>
    }
}
