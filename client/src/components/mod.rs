//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and interaction surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod auth_modals;
pub mod basket_modal;
pub mod dish_card;
pub mod navbar;
pub mod service_selector;
pub mod toast;
pub mod user_menu;
