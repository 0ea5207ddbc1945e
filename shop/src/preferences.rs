//! Theme and service-mode preferences.
//!
//! Both are single persisted values read by several pages; neither has any
//! rule beyond "missing or corrupt means default".

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use crate::keys;
use crate::model::{ServiceMode, Theme};
use crate::store::{KeyValueStore, Store};

/// Stored theme, dark when unset.
pub fn theme<S: KeyValueStore>(store: &Store<S>) -> Theme {
    store.read(keys::THEME, Theme::default())
}

/// Flip the stored theme and return the new value.
pub fn toggle_theme<S: KeyValueStore>(store: &Store<S>, current: Theme) -> Theme {
    let next = current.toggled();
    store.write(keys::THEME, &next);
    next
}

/// Stored service mode, delivery when unset.
pub fn service_mode<S: KeyValueStore>(store: &Store<S>) -> ServiceMode {
    store.read(keys::SERVICE_MODE, ServiceMode::default())
}

pub fn set_service_mode<S: KeyValueStore>(store: &Store<S>, mode: ServiceMode) {
    store.write(keys::SERVICE_MODE, &mode);
}
