//! Fixtures
//!
//! YAML reference data for a storefront: the catalog, the pricing and promo settings with a
//! sample cart, and a customer's order history. Each kind lives in its own directory under
//! the base path (`./fixtures` by default) as `<kind>/<name>.yml`.

use std::{fs, path::PathBuf};

use rusty_money::{Money, iso::Currency};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError},
    catalog::{Catalog, CatalogError, MenuCategory, MenuItem},
    fixtures::{
        catalog::{CatalogFixture, MenuCategoryFixture},
        orders::OrdersFixture,
        prices::{parse_percentage, parse_price},
        storefront::StorefrontFixture,
    },
    orders::{CustomerProfile, OrderHistory},
    pricing::PricingConfig,
    promotions::PromoCodeTable,
};

pub mod catalog;
pub mod orders;
pub mod prices;
pub mod storefront;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Invalid rating
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No prices loaded yet
    #[error("No prices loaded yet; currency unknown")]
    NoCurrency,

    /// A fixture kind was requested before being loaded
    #[error("No {0} fixture loaded")]
    NotLoaded(&'static str),

    /// Catalog assembly error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Sample cart assembly error
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    catalog: Option<Catalog<'a>>,
    pricing: Option<PricingConfig<'a>>,
    promo_codes: PromoCodeTable,

    /// Sample cart from the storefront file
    cart: Option<Cart<'a>>,

    orders: OrderHistory<'a>,
    profile: Option<CustomerProfile>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            pricing: None,
            promo_codes: PromoCodeTable::new(),
            cart: None,
            orders: OrderHistory::default(),
            profile: None,
            currency: None,
        }
    }

    /// Load restaurants, menus and cuisine categories from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if prices are in mixed
    /// currencies, or if the catalog is inconsistent (e.g. duplicate restaurant ids).
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CatalogFixture = self.read("catalog", name)?;

        let mut currency = self.currency;
        let mut restaurants = Vec::with_capacity(fixture.restaurants.len());

        for restaurant_fixture in fixture.restaurants {
            let (restaurant, menu) = restaurant_fixture.into_parts()?;

            restaurants.push((restaurant, convert_menu(&mut currency, menu)?));
        }

        let default_menu = convert_menu(&mut currency, fixture.default_menu)?;
        let catalog_currency = currency.ok_or(FixtureError::NoCurrency)?;

        let mut catalog = Catalog::new(catalog_currency);

        for (restaurant, menu) in restaurants {
            catalog.insert_restaurant(restaurant, menu)?;
        }

        catalog.set_default_menu(default_menu)?;

        for category in fixture.categories {
            catalog.add_category(category.into());
        }

        debug!(name, restaurants = catalog.len(), "loaded catalog fixture");

        self.catalog = Some(catalog);
        self.currency = currency;

        Ok(self)
    }

    /// Load the delivery fee, tax rate, promo codes and sample cart from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if prices or percentages
    /// are malformed or in mixed currencies.
    pub fn load_storefront(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: StorefrontFixture = self.read("storefront", name)?;

        let (fee_minor, currency) = parse_price(&fixture.delivery_fee)?;

        check_currency(self.currency, currency)?;

        let pricing = PricingConfig::new(
            Money::from_minor(fee_minor, currency),
            parse_percentage(&fixture.tax_rate)?,
        );

        let mut promo_codes = PromoCodeTable::new();

        for (code, rate) in &fixture.promo_codes {
            promo_codes.insert(code, parse_percentage(rate)?);
        }

        let mut cart = Cart::new(currency);

        for line in fixture.cart {
            let (price_minor, line_currency) = parse_price(&line.price)?;

            check_currency(Some(currency), line_currency)?;

            let mut item = MenuItem::new(
                line.id,
                line.name,
                Money::from_minor(price_minor, line_currency),
            );

            item.image_url = line.image_url;
            item.max_quantity = line.max_quantity;

            cart.add_menu_item(&item, line.quantity)?;
        }

        debug!(
            name,
            promo_codes = promo_codes.len(),
            cart_lines = cart.len(),
            "loaded storefront fixture"
        );

        self.pricing = Some(pricing);
        self.promo_codes = promo_codes;
        self.cart = Some(cart);
        self.currency = Some(currency);

        Ok(self)
    }

    /// Load the customer profile and past orders from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if order totals are
    /// malformed or in mixed currencies.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: OrdersFixture = self.read("orders", name)?;

        let mut currency = self.currency;
        let mut orders = Vec::with_capacity(fixture.orders.len());

        for order_fixture in fixture.orders {
            let (summary, order_currency) = order_fixture.try_into_summary()?;

            currency = Some(check_currency(currency, order_currency)?);

            orders.push(summary);
        }

        self.orders = OrderHistory::new(orders);
        self.profile = fixture.profile;
        self.currency = currency;

        Ok(self)
    }

    /// Load a complete fixture set (storefront, catalog, and orders with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_storefront(name)?
            .load_catalog(name)?
            .load_orders(name)?;

        Ok(fixture)
    }

    /// The loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog has been loaded.
    pub fn catalog(&self) -> Result<&Catalog<'a>, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NotLoaded("catalog"))
    }

    /// The loaded pricing configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no storefront has been loaded.
    pub fn pricing_config(&self) -> Result<&PricingConfig<'a>, FixtureError> {
        self.pricing
            .as_ref()
            .ok_or(FixtureError::NotLoaded("storefront"))
    }

    /// The loaded promo codes; empty until a storefront is loaded
    pub fn promo_codes(&self) -> &PromoCodeTable {
        &self.promo_codes
    }

    /// A fresh copy of the sample cart
    ///
    /// # Errors
    ///
    /// Returns an error if no storefront has been loaded.
    pub fn cart(&self) -> Result<Cart<'a>, FixtureError> {
        self.cart
            .clone()
            .ok_or(FixtureError::NotLoaded("storefront"))
    }

    /// The loaded order history; empty until orders are loaded
    pub fn orders(&self) -> &OrderHistory<'a> {
        &self.orders
    }

    /// The loaded customer profile
    pub fn profile(&self) -> Option<&CustomerProfile> {
        self.profile.as_ref()
    }

    /// Get the currency used by this fixture
    ///
    /// # Errors
    ///
    /// Returns an error if no prices have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    fn read<T: DeserializeOwned>(&self, kind: &str, name: &str) -> Result<T, FixtureError> {
        let file_path = self.base_path.join(kind).join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }
}

/// Convert menu fixtures, settling `currency` on the first priced item.
fn convert_menu<'a>(
    currency: &mut Option<&'static Currency>,
    menu: Vec<MenuCategoryFixture>,
) -> Result<Vec<MenuCategory<'a>>, FixtureError> {
    menu.into_iter()
        .map(|category_fixture| {
            let (category, category_currency) = category_fixture.try_into_category()?;

            if let Some(category_currency) = category_currency {
                *currency = Some(check_currency(*currency, category_currency)?);
            }

            Ok(category)
        })
        .collect()
}

/// The currency to keep after seeing `found`: `expected` if set, otherwise `found`.
fn check_currency(
    expected: Option<&'static Currency>,
    found: &'static Currency,
) -> Result<&'static Currency, FixtureError> {
    match expected {
        Some(existing) if existing != found => Err(FixtureError::CurrencyMismatch(
            existing.iso_alpha_code.to_string(),
            found.iso_alpha_code.to_string(),
        )),
        _ => Ok(found),
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
