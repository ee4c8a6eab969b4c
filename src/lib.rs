//! Storefront
//!
//! Storefront is the state and pricing core of a food-delivery app: the cart, its price
//! breakdown, promo codes, restaurant search, and checkout. Presentation layers forward user
//! intents to a [`session::ShoppingSession`] and render the values it returns.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod discounts;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod receipt;
pub mod session;
pub mod utils;
