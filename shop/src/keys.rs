//! Fixed storage keys shared by every page of the site.

/// Ordered list of [`crate::model::BasketLine`].
pub const BASKET: &str = "basket";
/// Ordered list of [`crate::model::Order`].
pub const ORDERS: &str = "orders";
/// Ordered list of [`crate::model::Favourite`].
pub const FAVOURITES: &str = "favourites";
/// `"light"` or `"dark"`.
pub const THEME: &str = "theme";
/// `"delivery"` or `"collection"`.
pub const SERVICE_MODE: &str = "service-mode";
/// Profile saved by the registration flow.
pub const REGISTERED_USER: &str = "registered-user";
/// Profile of the signed-in user, or `null`.
pub const LOGGED_IN_USER: &str = "logged-in-user";
