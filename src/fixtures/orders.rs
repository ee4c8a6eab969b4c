//! Order History Fixtures

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, prices::parse_price},
    orders::{CustomerProfile, OrderItemPreview, OrderStatus, OrderSummary},
};

/// Wrapper for the profile page in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Signed-in customer
    pub profile: Option<CustomerProfile>,

    /// Orders, newest first
    #[serde(default)]
    pub orders: Vec<OrderFixture>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order id
    pub order_id: String,

    /// Restaurant name
    pub restaurant_name: String,

    /// Day placed (e.g., 2023-11-15)
    pub order_date: Date,

    /// Amount charged (e.g., "45.50 INR")
    pub total: String,

    /// Status (e.g., `DELIVERED`)
    pub status: OrderStatus,

    /// Items ordered
    #[serde(default)]
    pub items: Vec<OrderItemPreview>,
}

impl OrderFixture {
    /// Convert to an order summary, returning the currency of its total alongside.
    ///
    /// # Errors
    ///
    /// Returns an error if the total cannot be parsed.
    pub fn try_into_summary<'a>(
        self,
    ) -> Result<(OrderSummary<'a>, &'static Currency), FixtureError> {
        let (minor_units, currency) = parse_price(&self.total)?;

        let summary = OrderSummary {
            order_id: self.order_id,
            restaurant_name: self.restaurant_name,
            order_date: self.order_date,
            total: Money::from_minor(minor_units, currency),
            status: self.status,
            items: self.items,
        };

        Ok((summary, currency))
    }
}
