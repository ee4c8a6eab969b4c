//! Orders
//!
//! The customer profile and past orders shown on the profile page.

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::checkout::OrderConfirmation;

/// Items listed on an order card before collapsing the rest into "...and N more".
pub const PREVIEW_LIMIT: usize = 3;

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Received, not yet confirmed
    Pending,
    /// Accepted by the restaurant
    Confirmed,
    /// Being cooked
    Preparing,
    /// With the courier
    OutForDelivery,
    /// Handed over
    Delivered,
    /// Called off
    Cancelled,
    /// Could not be completed
    Failed,
}

impl OrderStatus {
    /// Badge text
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Failed => "Failed",
        }
    }

    /// Whether the order is over, one way or another.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Failed
        )
    }
}

/// A dish and quantity on an order card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderItemPreview {
    /// Dish name
    pub name: String,

    /// Units ordered
    pub quantity: u32,
}

/// A past or in-flight order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    /// Order identifier
    pub order_id: String,

    /// Restaurant the order was placed with
    pub restaurant_name: String,

    /// Day the order was placed
    pub order_date: Date,

    /// Amount charged
    pub total: Money<'a, Currency>,

    /// Current status
    pub status: OrderStatus,

    /// Items ordered
    pub items: Vec<OrderItemPreview>,
}

impl<'a> OrderSummary<'a> {
    /// Record a freshly confirmed order.
    pub fn from_confirmation(
        confirmation: &OrderConfirmation<'a>,
        restaurant_name: impl Into<String>,
        order_date: Date,
    ) -> Self {
        Self {
            order_id: confirmation.order_id.clone(),
            restaurant_name: restaurant_name.into(),
            order_date,
            total: confirmation.total,
            status: OrderStatus::Confirmed,
            items: confirmation.items.to_vec(),
        }
    }

    /// Delivered and cancelled orders offer a re-order button.
    pub fn can_reorder(&self) -> bool {
        matches!(self.status, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// First eight characters of the order id, for the card title.
    pub fn short_id(&self) -> &str {
        self.order_id
            .char_indices()
            .nth(8)
            .and_then(|(idx, _)| self.order_id.get(..idx))
            .unwrap_or(&self.order_id)
    }

    /// Up to [`PREVIEW_LIMIT`] items and how many more were left out.
    pub fn preview(&self) -> (&[OrderItemPreview], usize) {
        let shown = self.items.len().min(PREVIEW_LIMIT);

        (
            self.items.get(..shown).unwrap_or_default(),
            self.items.len() - shown,
        )
    }
}

/// Orders for one customer, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory<'a> {
    orders: Vec<OrderSummary<'a>>,
}

impl<'a> OrderHistory<'a> {
    /// Create a history from orders already sorted newest first.
    pub fn new(orders: Vec<OrderSummary<'a>>) -> Self {
        Self { orders }
    }

    /// Put a new order at the top.
    pub fn record(&mut self, order: OrderSummary<'a>) {
        self.orders.insert(0, order);
    }

    /// Orders, newest first.
    pub fn orders(&self) -> &[OrderSummary<'a>] {
        &self.orders
    }

    /// Look up an order by id.
    pub fn find(&self, order_id: &str) -> Option<&OrderSummary<'a>> {
        self.orders.iter().find(|order| order.order_id == order_id)
    }

    /// Orders not yet delivered, cancelled or failed.
    pub fn active(&self) -> impl Iterator<Item = &OrderSummary<'a>> {
        self.orders.iter().filter(|order| !order.status.is_final())
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether there are no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// The signed-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerProfile {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number
    pub phone: String,
}

impl CustomerProfile {
    /// First letter of each word of the name, for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
