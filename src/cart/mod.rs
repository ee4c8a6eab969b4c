//! Cart
//!
//! The ordered list of line items for one shopping session, and the mutations the cart page
//! can request of it. Every mutation keeps each line's quantity within `1..=max_quantity`.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::MenuItem,
    pricing::{PricingError, subtotal},
};

mod line_item;

pub use line_item::CartLineItem;

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No line with this id is in the cart.
    #[error("No cart line with id {0}")]
    NotFound(String),

    /// A line was offered with a quantity cap of zero.
    #[error("Cart line {0} must allow at least one unit")]
    InvalidMaxQuantity(String),

    /// A line was offered with a unit price below zero.
    #[error("Cart line {0} has a negative unit price")]
    NegativePrice(String),

    /// A line's unit price is in a different currency (line id, line currency, cart currency).
    #[error("Cart line {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// What a mutation did to the affected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line now holds `quantity` units.
    Updated {
        /// New quantity
        quantity: u32,
    },

    /// More units were requested than the line allows; it was capped.
    Clamped {
        /// Quantity that was asked for
        requested: u32,

        /// Quantity the line holds
        quantity: u32,
    },

    /// The line was removed.
    Removed,

    /// Nothing changed.
    Unchanged,
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    lines: Vec<CartLineItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `initial_qty` units of an item, merging into an existing line with the same id.
    ///
    /// Quantities above the line's cap are clamped, not rejected. Adding zero units does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if `max_quantity` is zero, or if the price is negative or in
    /// another currency.
    pub fn add_item(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        max_quantity: u32,
        initial_qty: u32,
    ) -> Result<LineOutcome, CartError> {
        self.add_line(
            id.into(),
            name.into(),
            None,
            unit_price,
            max_quantity,
            initial_qty,
        )
    }

    /// Add `quantity` units of a menu item.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the item is invalid for this cart.
    pub fn add_menu_item(
        &mut self,
        item: &MenuItem<'a>,
        quantity: u32,
    ) -> Result<LineOutcome, CartError> {
        self.add_line(
            item.id.clone(),
            item.name.clone(),
            item.image_url.clone(),
            item.price,
            item.max_quantity,
            quantity,
        )
    }

    /// Set a line's quantity. Zero removes the line; values above the cap are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no line has this id.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) -> Result<LineOutcome, CartError> {
        let idx = self.position(id)?;

        if quantity == 0 {
            self.lines.remove(idx);

            return Ok(LineOutcome::Removed);
        }

        let line = self
            .lines
            .get_mut(idx)
            .ok_or_else(|| CartError::NotFound(id.to_string()))?;

        Ok(apply_clamped(line, quantity))
    }

    /// Add one unit to a line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no line has this id.
    pub fn increment(&mut self, id: &str) -> Result<LineOutcome, CartError> {
        let quantity = self.quantity_of(id)?;

        self.set_quantity(id, quantity.saturating_add(1))
    }

    /// Take one unit from a line, removing it when it reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no line has this id.
    pub fn decrement(&mut self, id: &str) -> Result<LineOutcome, CartError> {
        let quantity = self.quantity_of(id)?;

        self.set_quantity(id, quantity.saturating_sub(1))
    }

    /// Remove a line. Removing an id that is not in the cart is a no-op.
    pub fn remove_item(&mut self, id: &str) -> LineOutcome {
        match self.position(id) {
            Ok(idx) => {
                self.lines.remove(idx);

                LineOutcome::Removed
            }
            Err(_) => LineOutcome::Unchanged,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[CartLineItem<'a>] {
        &self.lines
    }

    /// Look up a line by id.
    pub fn get(&self, id: &str) -> Option<&CartLineItem<'a>> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Sum of unit price times quantity over every line.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] on overflow.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, PricingError> {
        subtotal(self)
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency of every line in the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn add_line(
        &mut self,
        id: String,
        name: String,
        image_url: Option<String>,
        unit_price: Money<'a, Currency>,
        max_quantity: u32,
        quantity: u32,
    ) -> Result<LineOutcome, CartError> {
        let price_currency = unit_price.currency();

        if price_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                id,
                price_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if max_quantity == 0 {
            return Err(CartError::InvalidMaxQuantity(id));
        }

        if unit_price.is_negative() {
            return Err(CartError::NegativePrice(id));
        }

        if quantity == 0 {
            return Ok(LineOutcome::Unchanged);
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == id) {
            let requested = line.quantity().saturating_add(quantity);

            return Ok(apply_clamped(line, requested));
        }

        let line = CartLineItem::new(
            id,
            name,
            image_url,
            unit_price,
            quantity.min(max_quantity),
            max_quantity,
        );

        let outcome = outcome_for(&line, quantity);

        self.lines.push(line);

        Ok(outcome)
    }

    fn position(&self, id: &str) -> Result<usize, CartError> {
        self.lines
            .iter()
            .position(|line| line.id() == id)
            .ok_or_else(|| CartError::NotFound(id.to_string()))
    }

    fn quantity_of(&self, id: &str) -> Result<u32, CartError> {
        self.get(id)
            .map(CartLineItem::quantity)
            .ok_or_else(|| CartError::NotFound(id.to_string()))
    }
}

/// Store `requested` on the line, capped at its maximum. `requested` must be non-zero.
fn apply_clamped(line: &mut CartLineItem<'_>, requested: u32) -> LineOutcome {
    line.set_quantity(requested.min(line.max_quantity()));

    outcome_for(line, requested)
}

fn outcome_for(line: &CartLineItem<'_>, requested: u32) -> LineOutcome {
    if requested > line.quantity() {
        debug!(
            line = line.id(),
            requested,
            max_quantity = line.max_quantity(),
            "clamped cart line quantity"
        );

        LineOutcome::Clamped {
            requested,
            quantity: line.quantity(),
        }
    } else {
        LineOutcome::Updated {
            quantity: line.quantity(),
        }
    }
}
