use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_everything_closed() {
    let state = UiState::default();
    assert!(!state.basket_open);
    assert_eq!(state.auth_modal, None);
    assert!(!state.user_menu_open);
    assert_eq!(state.info_panel, None);
    assert_eq!(state.toast, None);
    assert_eq!(state.category, CategoryFilter::All);
}

// =============================================================
// Toast
// =============================================================

#[test]
fn hide_toast_clears_matching_sequence() {
    let mut state = UiState::default();
    let seq = state.show_toast("Gyoza added".to_owned());
    state.hide_toast(seq);
    assert_eq!(state.toast, None);
}

#[test]
fn stale_hide_leaves_newer_toast_visible() {
    let mut state = UiState::default();
    let first = state.show_toast("one".to_owned());
    let second = state.show_toast("two".to_owned());
    assert_ne!(first, second);
    state.hide_toast(first);
    assert_eq!(state.toast.as_deref(), Some("two"));
    state.hide_toast(second);
    assert_eq!(state.toast, None);
}

// =============================================================
// Auth modals
// =============================================================

#[test]
fn open_auth_resets_success_banner() {
    let mut state = UiState::default();
    state.auth_success = true;
    state.open_auth(AuthModal::Register);
    assert_eq!(state.auth_modal, Some(AuthModal::Register));
    assert!(!state.auth_success);
}

#[test]
fn finish_auth_closes_only_after_success_on_same_modal() {
    let mut state = UiState::default();
    state.open_auth(AuthModal::Login);
    state.finish_auth(AuthModal::Login);
    assert_eq!(state.auth_modal, Some(AuthModal::Login));

    state.auth_success = true;
    state.finish_auth(AuthModal::Register);
    assert_eq!(state.auth_modal, Some(AuthModal::Login));

    state.finish_auth(AuthModal::Login);
    assert_eq!(state.auth_modal, None);
}

// =============================================================
// Info panel
// =============================================================

#[test]
fn open_info_closes_user_menu() {
    let mut state = UiState::default();
    state.user_menu_open = true;
    state.open_info(InfoPanel::Settings);
    assert!(!state.user_menu_open);
    assert_eq!(state.info_panel, Some(InfoPanel::Settings));
}
