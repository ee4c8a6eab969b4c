//! Integration tests for the restaurant listing over the default catalog fixture

use rust_decimal::Decimal;
use testresult::TestResult;

use storefront::{
    catalog::filter::{filter_restaurants, toggle_category},
    fixtures::Fixture,
};

fn names<'r>(restaurants: &[&'r storefront::catalog::Restaurant]) -> Vec<&'r str> {
    restaurants
        .iter()
        .map(|restaurant| restaurant.name.as_str())
        .collect()
}

#[test]
fn catalog_fixture_loads_listing_in_order() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let catalog = fixture.catalog()?;

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.categories().len(), 6);
    assert_eq!(
        catalog.restaurant("3").and_then(|restaurant| restaurant.rating),
        Some(Decimal::new(48, 1))
    );
    assert_eq!(
        names(&catalog.search("", None)),
        vec![
            "The Gourmet Place",
            "Burger Queen",
            "Sushi Central",
            "Healthy Bites"
        ]
    );

    Ok(())
}

#[test]
fn sushi_query_finds_only_sushi_central() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let catalog = fixture.catalog()?;

    let matches = filter_restaurants(catalog.restaurants(), "sushi", None);

    assert_eq!(names(&matches), vec!["Sushi Central"]);

    Ok(())
}

#[test]
fn query_matches_cuisines_case_insensitively() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let catalog = fixture.catalog()?;

    assert_eq!(names(&catalog.search("FAST", None)), vec!["Burger Queen"]);
    assert_eq!(names(&catalog.search("place", None)), vec!["The Gourmet Place"]);

    Ok(())
}

#[test]
fn category_is_matched_exactly() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let catalog = fixture.catalog()?;

    assert_eq!(names(&catalog.search("", Some("Salads"))), vec!["Healthy Bites"]);
    assert!(catalog.search("", Some("salads")).is_empty());
    assert!(catalog.search("", Some("Pizza")).is_empty());
    assert!(catalog.search("burger", Some("Sushi")).is_empty());

    Ok(())
}

#[test]
fn clicking_the_active_category_clears_it() {
    let active = toggle_category(None, "Sushi");

    assert_eq!(active, Some("Sushi"));
    assert_eq!(toggle_category(active, "Sushi"), None);
    assert_eq!(toggle_category(active, "Burgers"), Some("Burgers"));
}

#[test]
fn restaurants_without_a_menu_get_the_default_menu() -> TestResult {
    let fixture = Fixture::from_set("default")?;
    let catalog = fixture.catalog()?;

    let gourmet: Vec<&str> = catalog
        .menu("1")
        .iter()
        .map(|category| category.name.as_str())
        .collect();

    assert_eq!(gourmet, vec!["Appetizers", "Main Courses", "Drinks"]);
    assert!(catalog.menu_item("2", "d_m1").is_some());
    assert!(catalog.menu_item("unknown", "d_s1").is_some());
    assert!(catalog.menu_item("1", "d_s1").is_none());
    assert_eq!(
        catalog.menu_item("1", "main2").map(|item| item.max_quantity),
        Some(5)
    );

    Ok(())
}
