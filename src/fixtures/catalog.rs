//! Catalog Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    catalog::{
        CuisineCategory, DEFAULT_MAX_QUANTITY, MenuCategory, MenuItem, Restaurant,
        tags::CuisineTags,
    },
    fixtures::{FixtureError, prices::parse_price},
};

/// Wrapper for the catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Restaurants in listing order
    pub restaurants: Vec<RestaurantFixture>,

    /// Menu served for restaurants without one
    #[serde(default)]
    pub default_menu: Vec<MenuCategoryFixture>,

    /// Home-page cuisine chips
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,
}

/// Restaurant Fixture
#[derive(Debug, Deserialize)]
pub struct RestaurantFixture {
    /// Restaurant id
    pub id: String,

    /// Display name
    pub name: String,

    /// Cuisines served
    #[serde(default)]
    pub cuisines: Vec<String>,

    /// Display badges
    #[serde(default)]
    pub tags: Vec<String>,

    /// Logo URL
    pub logo_url: Option<String>,

    /// Listing image URL
    pub image_url: Option<String>,

    /// Rating (e.g., "4.5")
    pub rating: Option<String>,

    /// Delivery time label
    pub delivery_time: Option<String>,

    /// Offer label
    pub offer: Option<String>,

    /// Newly listed
    #[serde(default)]
    pub is_new: bool,

    /// Menu sections
    #[serde(default)]
    pub menu: Vec<MenuCategoryFixture>,
}

impl RestaurantFixture {
    /// Split into the restaurant record and its (still unparsed) menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the rating is not a decimal number.
    pub fn into_parts(self) -> Result<(Restaurant, Vec<MenuCategoryFixture>), FixtureError> {
        let rating = self
            .rating
            .map(|rating| {
                Decimal::from_str(&rating).map_err(|_err| FixtureError::InvalidRating(rating))
            })
            .transpose()?;

        let restaurant = Restaurant {
            id: self.id,
            name: self.name,
            cuisines: CuisineTags::new(self.cuisines),
            tags: self.tags,
            logo_url: self.logo_url,
            image_url: self.image_url,
            rating,
            delivery_time: self.delivery_time,
            offer: self.offer,
            is_new: self.is_new,
        };

        Ok((restaurant, self.menu))
    }
}

/// Menu Category Fixture
#[derive(Debug, Deserialize)]
pub struct MenuCategoryFixture {
    /// Section heading
    pub name: String,

    /// Items in the section
    pub items: Vec<MenuItemFixture>,
}

impl MenuCategoryFixture {
    /// Convert to a menu section, returning the currency of its prices alongside.
    ///
    /// # Errors
    ///
    /// Returns an error if a price cannot be parsed or the section mixes currencies.
    pub fn try_into_category<'a>(
        self,
    ) -> Result<(MenuCategory<'a>, Option<&'static Currency>), FixtureError> {
        let mut currency: Option<&'static Currency> = None;
        let mut items = Vec::with_capacity(self.items.len());

        for item_fixture in self.items {
            let (item, item_currency) = item_fixture.try_into_item()?;

            match currency {
                Some(existing) if existing != item_currency => {
                    return Err(FixtureError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        item_currency.iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => currency = Some(item_currency),
            }

            items.push(item);
        }

        Ok((
            MenuCategory {
                name: self.name,
                items,
            },
            currency,
        ))
    }
}

/// Menu Item Fixture
#[derive(Debug, Deserialize)]
pub struct MenuItemFixture {
    /// Item id
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: Option<String>,

    /// Unit price (e.g., "8.50 INR")
    pub price: String,

    /// Photo URL
    pub image_url: Option<String>,

    /// Quantity cap; defaults to [`DEFAULT_MAX_QUANTITY`]
    pub max_quantity: Option<u32>,

    /// Vegetarian
    #[serde(default)]
    pub is_veg: bool,

    /// Bestseller
    #[serde(default)]
    pub is_bestseller: bool,

    /// Customisable
    #[serde(default)]
    pub is_customizable: bool,
}

impl MenuItemFixture {
    /// Convert to a menu item, returning the currency of its price alongside.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed.
    pub fn try_into_item<'a>(self) -> Result<(MenuItem<'a>, &'static Currency), FixtureError> {
        let (minor_units, currency) = parse_price(&self.price)?;

        let item = MenuItem {
            id: self.id,
            name: self.name,
            description: self.description,
            price: Money::from_minor(minor_units, currency),
            image_url: self.image_url,
            max_quantity: self.max_quantity.unwrap_or(DEFAULT_MAX_QUANTITY),
            is_veg: self.is_veg,
            is_bestseller: self.is_bestseller,
            is_customizable: self.is_customizable,
        };

        Ok((item, currency))
    }
}

/// Cuisine Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Cuisine name
    pub name: String,

    /// Chip image URL
    pub image_url: Option<String>,
}

impl From<CategoryFixture> for CuisineCategory {
    fn from(fixture: CategoryFixture) -> Self {
        CuisineCategory {
            name: fixture.name,
            image_url: fixture.image_url,
        }
    }
}
