//! Reactive state provided through Leptos context.
//!
//! DESIGN
//! ======
//! `shop` wraps the persisted controller; `ui` holds transient chrome (open
//! modals, toast, active filter) that is never written to storage.

pub mod shop;
pub mod ui;
