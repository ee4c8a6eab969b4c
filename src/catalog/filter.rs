//! Restaurant search and category filtering

use crate::catalog::models::Restaurant;

/// Select the restaurants whose name or any cuisine contains `query` (case-insensitive),
/// restricted to those serving `active_category` when one is set. Input order is kept.
///
/// An empty query matches everything.
pub fn filter_restaurants<'r>(
    restaurants: impl IntoIterator<Item = &'r Restaurant>,
    query: &str,
    active_category: Option<&str>,
) -> Vec<&'r Restaurant> {
    let needle = query.to_lowercase();

    restaurants
        .into_iter()
        .filter(|restaurant| matches_query(restaurant, &needle))
        .filter(|restaurant| {
            active_category.is_none_or(|category| restaurant.cuisines.contains(category))
        })
        .collect()
}

/// The category that is active after a chip is clicked: clicking the active chip clears it.
pub fn toggle_category<'c>(active: Option<&str>, clicked: &'c str) -> Option<&'c str> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

fn matches_query(restaurant: &Restaurant, needle: &str) -> bool {
    restaurant.name.to_lowercase().contains(needle)
        || restaurant.cuisines.any_contains_lowercase(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tags::CuisineTags;

    fn restaurant(id: &str, name: &str, cuisines: &[&str]) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: name.to_string(),
            cuisines: CuisineTags::from_strs(cuisines),
            tags: Vec::new(),
            logo_url: None,
            image_url: None,
            rating: None,
            delivery_time: None,
            offer: None,
            is_new: false,
        }
    }

    fn listing() -> [Restaurant; 4] {
        [
            restaurant("1", "The Gourmet Place", &["Italian", "Cafe"]),
            restaurant("2", "Burger Queen", &["Burgers", "Fast Food"]),
            restaurant("3", "Sushi Central", &["Japanese", "Sushi"]),
            restaurant("4", "Healthy Bites", &["Salads", "Healthy"]),
        ]
    }

    fn ids(restaurants: &[&Restaurant]) -> Vec<String> {
        restaurants.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn empty_query_without_category_returns_everything() {
        let restaurants = listing();

        assert_eq!(
            ids(&filter_restaurants(&restaurants, "", None)),
            ["1", "2", "3", "4"]
        );
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let restaurants = listing();

        assert_eq!(ids(&filter_restaurants(&restaurants, "SUSHI", None)), ["3"]);
        assert_eq!(ids(&filter_restaurants(&restaurants, "queen", None)), ["2"]);
    }

    #[test]
    fn query_matches_cuisine_substring() {
        let restaurants = listing();

        assert_eq!(ids(&filter_restaurants(&restaurants, "fast", None)), ["2"]);
        assert_eq!(ids(&filter_restaurants(&restaurants, "a", None)).len(), 4);
    }

    #[test]
    fn category_requires_exact_cuisine() {
        let restaurants = listing();

        assert_eq!(
            ids(&filter_restaurants(&restaurants, "", Some("Salads"))),
            ["4"]
        );
        assert!(filter_restaurants(&restaurants, "", Some("salads")).is_empty());
    }

    #[test]
    fn query_and_category_combine() {
        let restaurants = listing();

        assert!(filter_restaurants(&restaurants, "burger", Some("Sushi")).is_empty());
        assert_eq!(
            ids(&filter_restaurants(&restaurants, "central", Some("Sushi"))),
            ["3"]
        );
    }

    #[test]
    fn toggle_category_clears_active_chip() {
        assert_eq!(toggle_category(None, "Pizza"), Some("Pizza"));
        assert_eq!(toggle_category(Some("Pizza"), "Pizza"), None);
        assert_eq!(toggle_category(Some("Pizza"), "Sushi"), Some("Sushi"));
    }
}
