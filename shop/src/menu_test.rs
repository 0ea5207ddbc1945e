use std::collections::HashSet;

use super::*;

#[test]
fn catalogue_ids_are_unique() {
    let ids: HashSet<&str> = CATALOGUE.iter().map(|d| d.id).collect();
    assert_eq!(ids.len(), CATALOGUE.len());
}

#[test]
fn catalogue_prices_are_non_negative() {
    assert!(CATALOGUE.iter().all(|d| d.price >= 0.0));
}

#[test]
fn all_filter_shows_everything() {
    assert_eq!(dishes(CategoryFilter::All).count(), CATALOGUE.len());
}

#[test]
fn category_filter_shows_only_matching_dishes() {
    for category in Category::ALL {
        let shown: Vec<&Dish> = dishes(CategoryFilter::Only(category)).collect();
        assert!(!shown.is_empty(), "{} has no dishes", category.label());
        assert!(shown.iter().all(|d| d.category == category));
    }
}

#[test]
fn dish_item_carries_id_name_and_price() {
    let gyoza = CATALOGUE.iter().find(|d| d.id == "gyoza").expect("gyoza listed");
    let item = gyoza.item();
    assert_eq!(item.id, "gyoza");
    assert_eq!(item.name, gyoza.name);
    assert!((item.price - 5.0).abs() < f64::EPSILON);
}
