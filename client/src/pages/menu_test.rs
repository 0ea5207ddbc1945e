use super::*;

#[test]
fn filter_options_start_with_all() {
    let options = filter_options();
    assert_eq!(options[0], (CategoryFilter::All, "All"));
    assert_eq!(options.len(), Category::ALL.len() + 1);
}

#[test]
fn filter_options_cover_every_category() {
    let options = filter_options();
    for category in Category::ALL {
        assert!(options.contains(&(CategoryFilter::Only(category), category.label())));
    }
}
