//! Menu page: category filter over the dish catalogue.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;
use shop::menu::{self, Category, CategoryFilter};

use crate::components::dish_card::DishCard;
use crate::state::ui::UiState;

/// Filter buttons in display order, starting with "All".
pub fn filter_options() -> Vec<(CategoryFilter, &'static str)> {
    std::iter::once((CategoryFilter::All, "All"))
        .chain(Category::ALL.into_iter().map(|c| (CategoryFilter::Only(c), c.label())))
        .collect()
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let buttons = filter_options()
        .into_iter()
        .map(|(filter, label)| {
            view! {
                <button
                    class="category-btn"
                    class:active=move || ui.with(|u| u.category == filter)
                    on:click=move |_| ui.update(|u| u.category = filter)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let cards = move || {
        let filter = ui.with(|u| u.category);
        menu::dishes(filter)
            .map(|dish| view! { <DishCard dish=dish/> })
            .collect_view()
    };

    view! {
        <section class="menu-page">
            <h1>"Our Menu"</h1>
            <div class="menu-page__categories">{buttons}</div>
            <div class="menu-page__grid">{cards}</div>
        </section>
    }
}
