//! The dish catalogue and category filter used by the menu page.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::model::Item;

/// Menu section a dish is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Ramen,
    Sides,
    Drinks,
    Desserts,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Ramen, Self::Sides, Self::Drinks, Self::Desserts];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ramen => "Ramen",
            Self::Sides => "Sides",
            Self::Drinks => "Drinks",
            Self::Desserts => "Desserts",
        }
    }
}

/// Active filter on the menu page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// A catalogue entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dish {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub category: Category,
    pub description: &'static str,
}

impl Dish {
    /// Basket/favourite payload for this dish.
    #[must_use]
    pub fn item(&self) -> Item {
        Item::new(self.id, self.name, self.price)
    }
}

pub const CATALOGUE: &[Dish] = &[
    Dish {
        id: "miso-chashu",
        name: "Miso Chashu Ramen",
        price: 8.50,
        category: Category::Ramen,
        description: "Rich miso broth, braised pork belly, menma, and a soft egg.",
    },
    Dish {
        id: "shoyu",
        name: "Shoyu Ramen",
        price: 7.95,
        category: Category::Ramen,
        description: "Clear soy chicken broth with narutomaki and spring onion.",
    },
    Dish {
        id: "tonkotsu",
        name: "Tonkotsu Ramen",
        price: 9.25,
        category: Category::Ramen,
        description: "Creamy pork bone broth, chashu, wood ear mushroom.",
    },
    Dish {
        id: "tantanmen",
        name: "Spicy Tantanmen",
        price: 9.50,
        category: Category::Ramen,
        description: "Sesame chilli broth with minced pork and bok choy.",
    },
    Dish {
        id: "gyoza",
        name: "Gyoza (6)",
        price: 5.00,
        category: Category::Sides,
        description: "Pan-fried pork dumplings with ponzu.",
    },
    Dish {
        id: "karaage",
        name: "Chicken Karaage",
        price: 6.00,
        category: Category::Sides,
        description: "Crisp marinated chicken with kewpie mayo.",
    },
    Dish {
        id: "edamame",
        name: "Edamame",
        price: 3.50,
        category: Category::Sides,
        description: "Steamed soy beans, sea salt.",
    },
    Dish {
        id: "green-tea",
        name: "Green Tea",
        price: 2.50,
        category: Category::Drinks,
        description: "Hot sencha, refilled on request.",
    },
    Dish {
        id: "ramune",
        name: "Ramune",
        price: 3.00,
        category: Category::Drinks,
        description: "Marble soda, original flavour.",
    },
    Dish {
        id: "mochi",
        name: "Mochi Trio",
        price: 4.50,
        category: Category::Desserts,
        description: "Matcha, strawberry, and black sesame.",
    },
];

/// Catalogue entries admitted by `filter`, in menu order.
pub fn dishes(filter: CategoryFilter) -> impl Iterator<Item = &'static Dish> {
    CATALOGUE.iter().filter(move |dish| filter.admits(dish.category))
}
