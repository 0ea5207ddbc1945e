//! Persisted shapes: basket lines, orders, favourites, and preferences.
//!
//! Field names follow the on-disk JSON (`qty`, `created`) so existing browser
//! data keeps loading after an upgrade.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::money;

/// A purchasable dish as handed to basket and favourite commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self { id: id.into(), name: name.into(), price }
    }
}

/// A favourited dish. Same shape as [`Item`]; set-like by `id`.
pub type Favourite = Item;

/// One basket entry. `quantity` is at least 1 while the line exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BasketLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl BasketLine {
    /// New line for `item` with quantity 1.
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }

    /// Unit price times quantity, rounded to pence.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        money::round_pence(self.price * f64::from(self.quantity))
    }
}

/// Fulfilment mode chosen on the service selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    #[default]
    Delivery,
    Collection,
}

impl ServiceMode {
    /// Wire value, e.g. `"delivery"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::Collection => "collection",
        }
    }

    /// Capitalised label for headings, e.g. `"Delivery"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Delivery => "Delivery",
            Self::Collection => "Collection",
        }
    }

    /// Route of the page explaining this mode.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Delivery => "/delivery",
            Self::Collection => "/collection",
        }
    }
}

/// Colour scheme. The site opens dark unless the visitor switched to light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown on the toggle button: the sun while light mode is on.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

/// An immutable snapshot of a basket taken at payment confirmation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Human-readable creation timestamp.
    pub created: String,
    pub service: ServiceMode,
    pub items: Vec<BasketLine>,
}

impl Order {
    /// Order value at the time it was placed.
    #[must_use]
    pub fn total(&self) -> f64 {
        money::basket_total(&self.items)
    }

    /// Comma-separated `Name x qty` list for history views.
    #[must_use]
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|line| format!("{} x {}", line.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Mock account profile. No password is ever persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}
