//! Payment page collaborator: summarises the basket and confirms the order.
//!
//! SYSTEM CONTEXT
//! ==============
//! The payment page is reached by full navigation after
//! [`crate::BasketManager::checkout`], so it re-reads the basket and service
//! mode from the store rather than receiving them in memory. Confirmation is
//! the only place orders are appended and the basket is cleared.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use crate::basket;
use crate::keys;
use crate::model::{BasketLine, Order, ServiceMode};
use crate::money;
use crate::store::{KeyValueStore, Store};

/// Rejection from [`confirm`]. The message is shown to the user as-is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("Please fill in all required fields.")]
    MissingField(&'static str),
    #[error("Your basket is empty 🍜")]
    EmptyBasket,
}

/// Contents of the payment form. Only presence is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    /// Name of the first blank required field, in form order.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("full name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("card name", &self.card_name),
            ("card number", &self.card_number),
            ("expiry", &self.expiry),
            ("cvv", &self.cvv),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// What the payment page renders before submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderSummary {
    pub lines: Vec<BasketLine>,
    pub service: ServiceMode,
    pub total: f64,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Read the pending basket and service mode.
pub fn summary<S: KeyValueStore>(store: &Store<S>) -> OrderSummary {
    let lines = basket::load_lines(store);
    let total = money::basket_total(&lines);
    OrderSummary {
        lines,
        service: store.read(keys::SERVICE_MODE, ServiceMode::default()),
        total,
    }
}

/// Validate `details`, record the basket as an order, and clear the basket.
///
/// # Errors
///
/// Returns [`PaymentError::MissingField`] if any field is blank and
/// [`PaymentError::EmptyBasket`] if there is nothing to pay for. Storage is
/// untouched in both cases.
pub fn confirm<S: KeyValueStore>(
    store: &Store<S>,
    details: &PaymentDetails,
    created: &str,
) -> Result<Order, PaymentError> {
    if let Some(field) = details.missing_field() {
        return Err(PaymentError::MissingField(field));
    }
    let pending = summary(store);
    if pending.is_empty() {
        return Err(PaymentError::EmptyBasket);
    }

    let order = Order {
        created: created.to_owned(),
        service: pending.service,
        items: pending.lines,
    };
    let mut orders: Vec<Order> = store.read(keys::ORDERS, Vec::new());
    orders.push(order.clone());
    store.write(keys::ORDERS, &orders);
    store.remove(keys::BASKET);
    log::info!("order confirmed for {} ({} lines)", order.service.as_str(), order.items.len());
    Ok(order)
}
