//! Catalog records

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::catalog::tags::CuisineTags;

/// Quantity cap applied to menu items that do not state their own.
pub const DEFAULT_MAX_QUANTITY: u32 = 10;

/// A restaurant listed on the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// Restaurant identifier, used for routing and menu lookup
    pub id: String,

    /// Display name
    pub name: String,

    /// Cuisines served; these drive search and category filtering
    pub cuisines: CuisineTags,

    /// Extra display badges (e.g. "Top Rated")
    pub tags: Vec<String>,

    /// Small logo shown on the menu page
    pub logo_url: Option<String>,

    /// Hero image shown on the listing card
    pub image_url: Option<String>,

    /// Average rating out of 5
    pub rating: Option<Decimal>,

    /// Delivery time estimate label (e.g. "25-35 min")
    pub delivery_time: Option<String>,

    /// Offer label (e.g. "10% OFF")
    pub offer: Option<String>,

    /// Newly listed
    pub is_new: bool,
}

/// A single orderable dish.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<'a> {
    /// Item identifier; becomes the cart line id
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: Option<String>,

    /// Unit price
    pub price: Money<'a, Currency>,

    /// Dish photo
    pub image_url: Option<String>,

    /// Most units of this item a single cart may hold
    pub max_quantity: u32,

    /// Vegetarian
    pub is_veg: bool,

    /// Bestseller badge
    pub is_bestseller: bool,

    /// Offers a customisation dialog
    pub is_customizable: bool,
}

impl<'a> MenuItem<'a> {
    /// Create a plain menu item with the default quantity cap and no flags set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            image_url: None,
            max_quantity: DEFAULT_MAX_QUANTITY,
            is_veg: false,
            is_bestseller: false,
            is_customizable: false,
        }
    }
}

/// A named section of a restaurant menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory<'a> {
    /// Section heading (e.g. "Appetizers")
    pub name: String,

    /// Items in display order
    pub items: Vec<MenuItem<'a>>,
}

/// A cuisine chip on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineCategory {
    /// Cuisine name; matched exactly against [`Restaurant::cuisines`]
    pub name: String,

    /// Chip image
    pub image_url: Option<String>,
}
