use super::*;
use crate::store::MemoryStore;

fn accounts() -> (MemoryStore, Accounts<MemoryStore>) {
    let backend = MemoryStore::new();
    (backend.clone(), Accounts::new(Store::new(backend)))
}

fn form(username: &str, email: &str, password: &str, confirm: &str) -> Registration {
    Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[test]
fn register_trims_and_logs_in() {
    let (_, accounts) = accounts();
    let profile = accounts
        .register(&form("  teuchi ", " teuchi@ichiraku.jp ", "ramen", "ramen"))
        .expect("register");
    assert_eq!(profile.username, "teuchi");
    assert_eq!(profile.email, "teuchi@ichiraku.jp");
    assert_eq!(accounts.current(), Some(profile));
}

#[test]
fn register_never_stores_password() {
    let (backend, accounts) = accounts();
    accounts.register(&form("teuchi", "t@i.jp", "secret", "secret")).expect("register");
    let raw = backend.raw(keys::REGISTERED_USER).expect("registered user stored");
    assert!(!raw.contains("secret"));
}

#[test]
fn register_rejects_mismatched_passwords() {
    let (backend, accounts) = accounts();
    let err = accounts.register(&form("a", "a@b.c", "one", "two")).expect_err("mismatch");
    assert_eq!(err.to_string(), "Please check your details. Passwords must match.");
    assert!(backend.snapshot().is_empty());
}

#[test]
fn register_rejects_blank_username_or_email() {
    let (_, accounts) = accounts();
    assert_eq!(accounts.register(&form("  ", "a@b.c", "p", "p")), Err(AuthError::InvalidRegistration));
    assert_eq!(accounts.register(&form("a", "", "p", "p")), Err(AuthError::InvalidRegistration));
}

#[test]
fn login_requires_registered_username() {
    let (_, accounts) = accounts();
    assert_eq!(accounts.login("teuchi"), Err(AuthError::UnknownUser));
    accounts.register(&form("teuchi", "t@i.jp", "p", "p")).expect("register");
    accounts.logout();
    assert_eq!(accounts.login("ayame"), Err(AuthError::UnknownUser));
    assert_eq!(accounts.current(), None);
    let profile = accounts.login(" teuchi ").expect("login");
    assert_eq!(accounts.current(), Some(profile));
}

#[test]
fn logout_writes_null_and_keeps_registration() {
    let (backend, accounts) = accounts();
    accounts.register(&form("teuchi", "t@i.jp", "p", "p")).expect("register");
    accounts.logout();
    assert_eq!(backend.raw(keys::LOGGED_IN_USER).as_deref(), Some("null"));
    assert_eq!(accounts.current(), None);
    assert!(accounts.login("teuchi").is_ok());
}
