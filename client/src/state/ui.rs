//! Local UI chrome state (modals, menus, toast, menu filter).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of persisted shop state so
//! nothing here is ever written to storage.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use shop::menu::CategoryFilter;

/// Which auth modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthModal {
    Login,
    Register,
}

/// Content of the info modal opened from the user menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoPanel {
    OrderHistory,
    Favourites,
    Settings,
    Help,
}

/// UI state for modals, the user menu, toast, and the menu filter.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub basket_open: bool,
    pub auth_modal: Option<AuthModal>,
    /// Success banner inside the open auth modal.
    pub auth_success: bool,
    pub user_menu_open: bool,
    pub info_panel: Option<InfoPanel>,
    pub toast: Option<String>,
    /// Bumped on every toast so a stale hide timer leaves a newer toast alone.
    pub toast_seq: u64,
    pub category: CategoryFilter,
}

impl UiState {
    /// Show `message` and return the sequence number its hide timer must pass back.
    pub fn show_toast(&mut self, message: String) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(message);
        self.toast_seq
    }

    /// Hide the toast if it is still the one identified by `seq`.
    pub fn hide_toast(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }

    pub fn open_auth(&mut self, modal: AuthModal) {
        self.auth_modal = Some(modal);
        self.auth_success = false;
    }

    pub fn close_auth(&mut self) {
        self.auth_modal = None;
        self.auth_success = false;
    }

    /// Close `modal` after its success delay unless the user already moved on.
    pub fn finish_auth(&mut self, modal: AuthModal) {
        if self.auth_modal == Some(modal) && self.auth_success {
            self.close_auth();
        }
    }

    pub fn open_info(&mut self, panel: InfoPanel) {
        self.user_menu_open = false;
        self.info_panel = Some(panel);
    }
}
