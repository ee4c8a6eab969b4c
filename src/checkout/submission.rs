//! Order submission
//!
//! The boundary to whatever accepts a finalised order. The storefront ships with
//! [`InstantSubmitter`], which confirms every order on the spot.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::CartLineItem,
    checkout::{DeliveryAddress, PaymentKind},
    orders::OrderItemPreview,
    pricing::PricingResult,
};

/// First id handed out by [`InstantSubmitter`].
pub const FIRST_ORDER_NUMBER: u64 = 12345;

/// Errors returned by an [`OrderSubmitter`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The order was refused, with the collaborator's reason.
    #[error("Order rejected: {0}")]
    Rejected(String),
}

/// Everything needed to place an order.
#[derive(Debug, Clone)]
pub struct OrderRequest<'a> {
    /// Cart lines at the time of submission
    pub lines: Vec<CartLineItem<'a>>,

    /// Price breakdown the customer agreed to
    pub pricing: PricingResult<'a>,

    /// Applied promo code, if any
    pub promo_code: Option<String>,

    /// Where to deliver
    pub address: DeliveryAddress,

    /// How the customer pays
    pub payment: PaymentKind,
}

impl OrderRequest<'_> {
    /// Line names and quantities, for previews.
    pub fn item_previews(&self) -> SmallVec<[OrderItemPreview; 4]> {
        self.lines
            .iter()
            .map(|line| OrderItemPreview {
                name: line.name().to_string(),
                quantity: line.quantity(),
            })
            .collect()
    }
}

/// Proof that an order was accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation<'a> {
    /// Order identifier (e.g. `ORD12345`)
    pub order_id: String,

    /// Amount charged
    pub total: Money<'a, Currency>,

    /// Items ordered
    pub items: SmallVec<[OrderItemPreview; 4]>,
}

/// Accepts finalised orders.
pub trait OrderSubmitter {
    /// Submit an order and wait for the verdict.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] if the order is not accepted.
    fn submit<'a>(
        &mut self,
        order: &OrderRequest<'a>,
    ) -> Result<OrderConfirmation<'a>, SubmissionError>;
}

/// Confirms every order immediately, numbering them `ORD12345`, `ORD12346`, …
#[derive(Debug, Clone)]
pub struct InstantSubmitter {
    next_number: u64,
}

impl InstantSubmitter {
    /// Create a submitter whose first order is [`FIRST_ORDER_NUMBER`].
    pub fn new() -> Self {
        Self::starting_at(FIRST_ORDER_NUMBER)
    }

    /// Create a submitter whose first order number is `number`.
    pub fn starting_at(number: u64) -> Self {
        Self {
            next_number: number,
        }
    }
}

impl Default for InstantSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSubmitter for InstantSubmitter {
    fn submit<'a>(
        &mut self,
        order: &OrderRequest<'a>,
    ) -> Result<OrderConfirmation<'a>, SubmissionError> {
        let order_id = format!("ORD{}", self.next_number);

        self.next_number = self.next_number.saturating_add(1);

        Ok(OrderConfirmation {
            order_id,
            total: order.pricing.total(),
            items: order.item_previews(),
        })
    }
}
