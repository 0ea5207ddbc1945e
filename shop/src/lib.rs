//! Basket, order, and preference state for the Ichiraku ordering site.
//!
//! This crate owns every rule that touches persisted browser state: the typed
//! key-value [`store`], the [`basket`] manager, the [`payment`] collaborator
//! that turns a basket into an order, and the smaller [`preferences`] and
//! [`accounts`] flows. It has no browser dependency; the `client` crate plugs a
//! `localStorage` backend into [`store::KeyValueStore`].

pub mod accounts;
pub mod basket;
pub mod greeting;
pub mod keys;
pub mod menu;
pub mod model;
pub mod money;
pub mod payment;
pub mod preferences;
pub mod store;

pub use accounts::{Accounts, AuthError, Registration};
pub use basket::{BasketManager, CheckoutError, CheckoutTicket};
pub use model::{BasketLine, Favourite, Item, Order, ServiceMode, Theme, UserProfile};
pub use payment::{OrderSummary, PaymentDetails, PaymentError};
pub use store::{KeyValueStore, MemoryStore, StorageError, Store};
