//! Mock registration, login, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no identity provider. One registered profile lives in the store
//! and "logging in" means typing its username. Passwords are compared at
//! registration and then discarded.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use crate::keys;
use crate::model::UserProfile;
use crate::store::{KeyValueStore, Store};

/// Rejection from the auth forms. The message is shown to the user as-is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please check your details. Passwords must match.")]
    InvalidRegistration,
    #[error("User not found. Please register first.")]
    UnknownUser,
}

/// Registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Auth flow over the registered-user and logged-in-user keys.
#[derive(Clone, Debug)]
pub struct Accounts<S> {
    store: Store<S>,
}

impl<S: KeyValueStore> Accounts<S> {
    pub fn new(store: Store<S>) -> Self {
        Self { store }
    }

    /// Profile of the signed-in user, if any.
    pub fn current(&self) -> Option<UserProfile> {
        self.store.read(keys::LOGGED_IN_USER, None)
    }

    /// Save a profile and sign it in.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidRegistration`] when the trimmed username or email is
    /// empty, or the passwords differ. Nothing is stored in that case.
    pub fn register(&self, form: &Registration) -> Result<UserProfile, AuthError> {
        let username = form.username.trim();
        let email = form.email.trim();
        if username.is_empty() || email.is_empty() || form.password != form.confirm_password {
            return Err(AuthError::InvalidRegistration);
        }
        let profile = UserProfile {
            username: username.to_owned(),
            email: email.to_owned(),
        };
        self.store.write(keys::REGISTERED_USER, &profile);
        self.store.write(keys::LOGGED_IN_USER, &profile);
        log::info!("registered {username}");
        Ok(profile)
    }

    /// Sign in as the registered user named `username`.
    ///
    /// # Errors
    ///
    /// [`AuthError::UnknownUser`] when nobody registered or the name differs.
    pub fn login(&self, username: &str) -> Result<UserProfile, AuthError> {
        let registered: Option<UserProfile> = self.store.read(keys::REGISTERED_USER, None);
        match registered {
            Some(profile) if profile.username == username.trim() => {
                self.store.write(keys::LOGGED_IN_USER, &profile);
                Ok(profile)
            }
            _ => Err(AuthError::UnknownUser),
        }
    }

    /// Sign out. The registered profile is kept.
    pub fn logout(&self) {
        self.store.write(keys::LOGGED_IN_USER, &None::<UserProfile>);
    }
}
