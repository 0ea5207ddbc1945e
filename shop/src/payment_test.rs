use super::*;
use crate::basket::BasketManager;
use crate::model::Item;
use crate::store::MemoryStore;

fn filled() -> PaymentDetails {
    PaymentDetails {
        full_name: "Naruto Uzumaki".to_owned(),
        email: "naruto@konoha.jp".to_owned(),
        phone: "0123".to_owned(),
        card_name: "N Uzumaki".to_owned(),
        card_number: "4111111111111111".to_owned(),
        expiry: "12/29".to_owned(),
        cvv: "123".to_owned(),
    }
}

fn store_with_basket() -> (MemoryStore, Store<MemoryStore>) {
    let backend = MemoryStore::new();
    let store = Store::new(backend.clone());
    let mut basket = BasketManager::load(store.clone());
    basket.add(&Item::new("miso", "Miso", 8.5));
    basket.add(&Item::new("miso", "Miso", 8.5));
    basket.add(&Item::new("gyoza", "Gyoza", 5.0));
    (backend, store)
}

#[test]
fn missing_field_reports_first_blank_in_form_order() {
    let mut details = filled();
    assert_eq!(details.missing_field(), None);
    details.expiry = "  ".to_owned();
    details.phone = String::new();
    assert_eq!(details.missing_field(), Some("phone"));
}

#[test]
fn summary_reads_basket_and_service() {
    let (_, store) = store_with_basket();
    store.write(keys::SERVICE_MODE, &ServiceMode::Collection);
    let pending = summary(&store);
    assert_eq!(pending.lines.len(), 2);
    assert_eq!(pending.service, ServiceMode::Collection);
    assert_eq!(money::format_price(pending.total), "£22.00");
}

#[test]
fn summary_of_missing_basket_is_empty() {
    let store = Store::new(MemoryStore::new());
    let pending = summary(&store);
    assert!(pending.is_empty());
    assert_eq!(pending.service, ServiceMode::Delivery);
}

#[test]
fn confirm_appends_order_and_clears_basket() {
    let (backend, store) = store_with_basket();
    let order = confirm(&store, &filled(), "16/10/2026, 12:00:00").expect("confirm");
    assert_eq!(order.items_summary(), "Miso x 2, Gyoza x 1");
    assert_eq!(order.service, ServiceMode::Delivery);
    assert_eq!(backend.raw(keys::BASKET), None);

    let orders: Vec<Order> = store.read(keys::ORDERS, Vec::new());
    assert_eq!(orders, vec![order]);
}

#[test]
fn confirm_keeps_earlier_orders() {
    let (_, store) = store_with_basket();
    confirm(&store, &filled(), "first").expect("first order");
    BasketManager::load(store.clone()).add(&Item::new("tea", "Green Tea", 2.5));
    confirm(&store, &filled(), "second").expect("second order");
    let orders: Vec<Order> = store.read(keys::ORDERS, Vec::new());
    let created: Vec<&str> = orders.iter().map(|o| o.created.as_str()).collect();
    assert_eq!(created, vec!["first", "second"]);
}

#[test]
fn confirm_with_blank_field_changes_nothing() {
    let (backend, store) = store_with_basket();
    let before = backend.snapshot();
    let mut details = filled();
    details.cvv = " ".to_owned();
    let err = confirm(&store, &details, "now").expect_err("should reject");
    assert_eq!(err, PaymentError::MissingField("cvv"));
    assert_eq!(err.to_string(), "Please fill in all required fields.");
    assert_eq!(backend.snapshot(), before);
}

#[test]
fn confirm_with_empty_basket_is_rejected() {
    let backend = MemoryStore::new();
    let store = Store::new(backend.clone());
    assert_eq!(confirm(&store, &filled(), "now"), Err(PaymentError::EmptyBasket));
    assert!(backend.snapshot().is_empty());
}

#[test]
fn summary_skips_zero_quantity_lines() {
    let backend = MemoryStore::new();
    backend.insert_raw(
        keys::BASKET,
        r#"[{"id":"a","name":"A","price":1.0,"qty":0},{"id":"b","name":"B","price":2.0,"qty":1}]"#,
    );
    let pending = summary(&Store::new(backend));
    assert_eq!(pending.lines.len(), 1);
    assert_eq!(pending.lines[0].id, "b");
    assert!((pending.total - 2.0).abs() < f64::EPSILON);
}

#[test]
fn confirm_with_only_zero_quantity_lines_is_rejected() {
    let backend = MemoryStore::new();
    backend.insert_raw(keys::BASKET, r#"[{"id":"a","name":"A","price":1.0,"qty":0}]"#);
    let store = Store::new(backend.clone());
    let before = backend.snapshot();
    assert!(summary(&store).is_empty());
    assert_eq!(confirm(&store, &filled(), "now"), Err(PaymentError::EmptyBasket));
    assert_eq!(backend.snapshot(), before);
    assert_eq!(backend.raw(keys::ORDERS), None);
}
