//! Storefront Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Wrapper for storefront settings in YAML
#[derive(Debug, Deserialize)]
pub struct StorefrontFixture {
    /// Delivery fee (e.g., "5.00 INR")
    pub delivery_fee: String,

    /// Tax rate (e.g., "8%")
    pub tax_rate: String,

    /// Map of promo code -> discount rate (e.g., "10%")
    #[serde(default)]
    pub promo_codes: FxHashMap<String, String>,

    /// Lines preloaded into the sample cart
    #[serde(default)]
    pub cart: Vec<CartLineFixture>,
}

/// Cart Line Fixture
#[derive(Debug, Deserialize)]
pub struct CartLineFixture {
    /// Line id
    pub id: String,

    /// Display name
    pub name: String,

    /// Thumbnail URL
    pub image_url: Option<String>,

    /// Unit price (e.g., "15.00 INR")
    pub price: String,

    /// Units in the cart
    pub quantity: u32,

    /// Quantity cap
    pub max_quantity: u32,
}
