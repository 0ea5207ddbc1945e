//! Basket manager: the one controller that mutates basket and favourites.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once per page view from the shared [`Store`], handed to UI bindings,
//! and dropped on unload. Every command mutates the in-memory collections and
//! writes them back before returning, so a reload always sees the latest
//! state.
//!
//! DESIGN
//! ======
//! Orders are read here for history views but only written by the payment
//! collaborator (see [`crate::payment`]). Collections hold a few dozen entries
//! at most, so lookups are linear scans.

#[cfg(test)]
#[path = "basket_test.rs"]
mod basket_test;

use crate::keys;
use crate::model::{BasketLine, Favourite, Item, Order, ServiceMode};
use crate::money;
use crate::store::{KeyValueStore, Store};

/// Rejection from [`BasketManager::checkout`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Your basket is empty 🍜")]
    EmptyBasket,
}

/// What checkout hands to the payment page.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutTicket {
    pub lines: Vec<BasketLine>,
    pub service: ServiceMode,
    pub total: f64,
}

impl CheckoutTicket {
    /// One-line description for logs, e.g. `3 items for collection, £22.00`.
    pub fn describe(&self) -> String {
        let count = self.lines.iter().fold(0_u32, |sum, line| sum.saturating_add(line.quantity));
        format!("{count} items for {}, {}", self.service.as_str(), money::format_price(self.total))
    }
}

/// In-memory basket, order history, and favourites backed by a [`Store`].
#[derive(Clone, Debug)]
pub struct BasketManager<S> {
    store: Store<S>,
    lines: Vec<BasketLine>,
    orders: Vec<Order>,
    favourites: Vec<Favourite>,
}

impl<S: KeyValueStore> BasketManager<S> {
    /// Empty manager over `store`. Nothing is read until [`Self::reload`].
    pub fn new(store: Store<S>) -> Self {
        Self {
            store,
            lines: Vec::new(),
            orders: Vec::new(),
            favourites: Vec::new(),
        }
    }

    /// Hydrate all three collections from `store`. Corrupt entries load empty.
    pub fn load(store: Store<S>) -> Self {
        let mut manager = Self::new(store);
        manager.reload();
        manager
    }

    /// Re-read every collection, discarding in-memory state.
    pub fn reload(&mut self) {
        self.lines = load_lines(&self.store);
        self.orders = self.store.read(keys::ORDERS, Vec::new());
        self.favourites = self.store.read(keys::FAVOURITES, Vec::new());
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn favourites(&self) -> &[Favourite] {
        &self.favourites
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number shown on the basket badge: the sum of all quantities.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Basket value, recomputed on every call.
    pub fn total(&self) -> f64 {
        money::basket_total(&self.lines)
    }

    /// [`Self::total`] formatted as `£x.xx`.
    pub fn formatted_total(&self) -> String {
        money::format_price(self.total())
    }

    /// Add one of `item`, merging with an existing line of the same id.
    ///
    /// Returns the line's new quantity.
    pub fn add(&mut self, item: &Item) -> u32 {
        let quantity = if let Some(line) = self.lines.iter_mut().find(|line| line.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            line.quantity
        } else {
            self.lines.push(BasketLine::from_item(item));
            1
        };
        log::debug!("basket add {} -> qty {quantity}", item.id);
        self.persist();
        quantity
    }

    /// Shift the quantity of line `id` by `delta`, removing it at zero or below.
    ///
    /// Returns the remaining quantity, or `None` if the line is gone or was
    /// never there. An unknown id changes nothing and writes nothing.
    pub fn change_quantity(&mut self, id: &str, delta: i32) -> Option<u32> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        let next = i64::from(self.lines[index].quantity) + i64::from(delta);
        let remaining = if next <= 0 {
            self.lines.remove(index);
            None
        } else {
            let quantity = u32::try_from(next).unwrap_or(u32::MAX);
            self.lines[index].quantity = quantity;
            Some(quantity)
        };
        log::debug!("basket change {id} by {delta} -> {remaining:?}");
        self.persist();
        remaining
    }

    /// Add `item` to favourites, or remove it if its id is already there.
    ///
    /// Returns `true` when the item is a favourite afterwards.
    pub fn toggle_favourite(&mut self, item: &Item) -> bool {
        let now_favourite = if let Some(index) = self.favourites.iter().position(|fav| fav.id == item.id) {
            self.favourites.remove(index);
            false
        } else {
            self.favourites.push(item.clone());
            true
        };
        self.persist();
        now_favourite
    }

    pub fn is_favourite(&self, id: &str) -> bool {
        self.favourites.iter().any(|fav| fav.id == id)
    }

    /// Hand the basket to the payment page.
    ///
    /// The basket is flushed but not cleared; the payment collaborator clears
    /// it once the order is confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyBasket`] without touching storage when
    /// there is nothing to buy.
    pub fn checkout(&self) -> Result<CheckoutTicket, CheckoutError> {
        if self.lines.is_empty() {
            return Err(CheckoutError::EmptyBasket);
        }
        self.persist();
        Ok(CheckoutTicket {
            lines: self.lines.clone(),
            service: self.store.read(keys::SERVICE_MODE, ServiceMode::default()),
            total: self.total(),
        })
    }

    fn persist(&self) {
        self.store.write(keys::BASKET, &self.lines);
        self.store.write(keys::FAVOURITES, &self.favourites);
    }
}

/// Stored basket lines, without any zero-quantity lines hand-edited storage
/// may carry.
pub(crate) fn load_lines<S: KeyValueStore>(store: &Store<S>) -> Vec<BasketLine> {
    let mut lines: Vec<BasketLine> = store.read(keys::BASKET, Vec::new());
    lines.retain(|line| line.quantity > 0);
    lines
}
