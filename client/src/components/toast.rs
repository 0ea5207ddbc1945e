//! Transient confirmation toast.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Toast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast" class:visible=move || ui.with(|u| u.toast.is_some())>
            {move || ui.with(|u| u.toast.clone().unwrap_or_default())}
        </div>
    }
}
