//! Page-view controller over basket, account, and preference state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ShopState` is created per page load in `App`, loaded from storage after
//! hydration, and mutated only through the command methods below (or the
//! embedded [`BasketManager`]). Each command persists before returning.

#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;

use shop::{
    Accounts, AuthError, BasketManager, Item, KeyValueStore, Registration, ServiceMode, Store, Theme, UserProfile,
    preferences,
};

use crate::util::storage::{self, BrowserStorage};

/// Persisted shop state for the current page view.
#[derive(Clone, Debug)]
pub struct ShopState<S = BrowserStorage> {
    pub basket: BasketManager<S>,
    pub user: Option<UserProfile>,
    pub theme: Theme,
    pub service: ServiceMode,
    /// True once [`ShopState::hydrate`] has read storage.
    pub loaded: bool,
}

impl Default for ShopState<BrowserStorage> {
    fn default() -> Self {
        Self::new(storage::store())
    }
}

impl<S: KeyValueStore + Clone> ShopState<S> {
    /// Unloaded state over `store`; nothing is read yet.
    pub fn new(store: Store<S>) -> Self {
        Self {
            basket: BasketManager::new(store),
            user: None,
            theme: Theme::default(),
            service: ServiceMode::default(),
            loaded: false,
        }
    }

    /// Read every persisted value. Called once per page view.
    pub fn hydrate(&mut self) {
        self.basket.reload();
        let store = self.basket.store();
        self.user = Accounts::new(store.clone()).current();
        self.theme = preferences::theme(store);
        self.service = preferences::service_mode(store);
        self.loaded = true;
    }

    fn accounts(&self) -> Accounts<S> {
        Accounts::new(self.basket.store().clone())
    }

    /// Add one `item` to the basket and return the toast text.
    pub fn add(&mut self, item: &Item) -> String {
        self.basket.add(item);
        format!("{} added to your basket 🍜", item.name)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = preferences::toggle_theme(self.basket.store(), self.theme);
        self.theme
    }

    pub fn choose_service(&mut self, mode: ServiceMode) {
        preferences::set_service_mode(self.basket.store(), mode);
        self.service = mode;
    }

    /// # Errors
    ///
    /// Propagates [`AuthError::InvalidRegistration`]; state is unchanged.
    pub fn register(&mut self, form: &Registration) -> Result<(), AuthError> {
        self.user = Some(self.accounts().register(form)?);
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates [`AuthError::UnknownUser`]; state is unchanged.
    pub fn login(&mut self, username: &str) -> Result<(), AuthError> {
        self.user = Some(self.accounts().login(username)?);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.accounts().logout();
        self.user = None;
    }
}
