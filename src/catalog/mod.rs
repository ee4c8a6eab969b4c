//! Catalog
//!
//! Read-only restaurant and menu reference data for a storefront session.

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::{SecondaryMap, SlotMap, new_key_type};
use thiserror::Error;

pub mod filter;
pub mod models;
pub mod tags;

pub use models::{CuisineCategory, DEFAULT_MAX_QUANTITY, MenuCategory, MenuItem, Restaurant};

new_key_type! {
    /// Restaurant Key
    pub struct RestaurantKey;
}

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A restaurant with this id was already inserted.
    #[error("Duplicate restaurant id: {0}")]
    DuplicateRestaurant(String),

    /// A menu item is priced in a different currency (item id, item currency, catalog currency).
    #[error("Menu item {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// A menu item declares a quantity cap of zero.
    #[error("Menu item {0} has a maximum quantity of zero")]
    ZeroMaxQuantity(String),

    /// A menu item is priced below zero.
    #[error("Menu item {0} has a negative price")]
    NegativePrice(String),
}

/// Restaurants, their menus and the home-page cuisine chips.
#[derive(Debug)]
pub struct Catalog<'a> {
    restaurants: SlotMap<RestaurantKey, Restaurant>,
    menus: SecondaryMap<RestaurantKey, Vec<MenuCategory<'a>>>,

    /// Listing order
    listing: Vec<RestaurantKey>,

    /// Restaurant id -> `SlotMap` key
    restaurant_keys: FxHashMap<String, RestaurantKey>,

    /// Served for restaurants without a menu of their own
    default_menu: Vec<MenuCategory<'a>>,

    categories: Vec<CuisineCategory>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            restaurants: SlotMap::with_key(),
            menus: SecondaryMap::new(),
            listing: Vec::new(),
            restaurant_keys: FxHashMap::default(),
            default_menu: Vec::new(),
            categories: Vec::new(),
            currency,
        }
    }

    /// Add a restaurant and its menu to the end of the listing.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the id is already taken or the menu is invalid.
    pub fn insert_restaurant(
        &mut self,
        restaurant: Restaurant,
        menu: Vec<MenuCategory<'a>>,
    ) -> Result<RestaurantKey, CatalogError> {
        if self.restaurant_keys.contains_key(&restaurant.id) {
            return Err(CatalogError::DuplicateRestaurant(restaurant.id));
        }

        self.check_menu(&menu)?;

        let id = restaurant.id.clone();
        let key = self.restaurants.insert(restaurant);

        self.menus.insert(key, menu);
        self.listing.push(key);
        self.restaurant_keys.insert(id, key);

        Ok(key)
    }

    /// Replace the fallback menu.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the menu is invalid.
    pub fn set_default_menu(&mut self, menu: Vec<MenuCategory<'a>>) -> Result<(), CatalogError> {
        self.check_menu(&menu)?;
        self.default_menu = menu;

        Ok(())
    }

    /// Append a home-page cuisine chip.
    pub fn add_category(&mut self, category: CuisineCategory) {
        self.categories.push(category);
    }

    /// Restaurants in listing order.
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.listing
            .iter()
            .filter_map(|key| self.restaurants.get(*key))
    }

    /// Look up a restaurant by id.
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurant_key(id)
            .and_then(|key| self.restaurants.get(key))
    }

    /// Look up a restaurant's `SlotMap` key by id.
    pub fn restaurant_key(&self, id: &str) -> Option<RestaurantKey> {
        self.restaurant_keys.get(id).copied()
    }

    /// The menu for a restaurant id, or the fallback menu when the id is unknown or the
    /// restaurant has an empty menu.
    pub fn menu(&self, restaurant_id: &str) -> &[MenuCategory<'a>] {
        self.restaurant_key(restaurant_id)
            .and_then(|key| self.menus.get(key))
            .filter(|menu| !menu.is_empty())
            .unwrap_or(&self.default_menu)
    }

    /// Find a single item on a restaurant's menu.
    pub fn menu_item(&self, restaurant_id: &str, item_id: &str) -> Option<&MenuItem<'a>> {
        self.menu(restaurant_id)
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == item_id)
    }

    /// Home-page cuisine chips.
    pub fn categories(&self) -> &[CuisineCategory] {
        &self.categories
    }

    /// Restaurants matching a search box query and optional active category.
    pub fn search(&self, query: &str, active_category: Option<&str>) -> Vec<&Restaurant> {
        filter::filter_restaurants(self.restaurants(), query, active_category)
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.listing.len()
    }

    /// Whether the catalog has no restaurants.
    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    /// Currency every menu price is in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn check_menu(&self, menu: &[MenuCategory<'a>]) -> Result<(), CatalogError> {
        menu.iter()
            .flat_map(|category| category.items.iter())
            .try_for_each(|item| {
                let item_currency = item.price.currency();

                if item_currency != self.currency {
                    return Err(CatalogError::CurrencyMismatch(
                        item.id.clone(),
                        item_currency.iso_alpha_code,
                        self.currency.iso_alpha_code,
                    ));
                }

                if item.max_quantity == 0 {
                    return Err(CatalogError::ZeroMaxQuantity(item.id.clone()));
                }

                if item.price.is_negative() {
                    return Err(CatalogError::NegativePrice(item.id.clone()));
                }

                Ok(())
            })
    }
}
