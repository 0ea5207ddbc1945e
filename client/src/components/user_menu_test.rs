use shop::{BasketLine, Item, MemoryStore, Store};

use super::*;

fn order(created: &str, service: ServiceMode) -> Order {
    let mut ramen = BasketLine::from_item(&Item::new("miso", "Miso", 8.5));
    ramen.quantity = 2;
    Order { created: created.to_owned(), service, items: vec![ramen] }
}

#[test]
fn history_rows_show_created_service_and_items() {
    let rows = history_rows(&[order("1/1/2026", ServiceMode::Collection)]);
    assert_eq!(rows, vec!["1/1/2026 — collection — Miso x 2"]);
}

#[test]
fn favourite_rows_format_price() {
    let rows = favourite_rows(&[Item::new("gyoza", "Gyoza", 5.0)]);
    assert_eq!(rows, vec!["Gyoza — £5.00"]);
}

#[test]
fn settings_rows_name_service_and_theme() {
    let rows = settings_rows(ServiceMode::Delivery, Theme::Light);
    assert_eq!(rows, vec!["Current service: delivery", "Theme: Light"]);
}

#[test]
fn empty_history_uses_hint_text() {
    let state = ShopState::new(Store::new(MemoryStore::new()));
    let (title, rows, empty) = panel_content(InfoPanel::OrderHistory, &state);
    assert_eq!(title, "Order History");
    assert!(rows.is_empty());
    assert!(empty.starts_with("No orders yet"));
}

#[test]
fn favourites_panel_reflects_toggles() {
    let mut state = ShopState::new(Store::new(MemoryStore::new()));
    state.basket.toggle_favourite(&Item::new("gyoza", "Gyoza", 5.0));
    let (_, rows, _) = panel_content(InfoPanel::Favourites, &state);
    assert_eq!(rows.len(), 1);
}
