//! Shopping session
//!
//! One customer's cart and promo state, together with the storefront configuration used to
//! price it. Presentation code forwards user intents here and renders the returned values.

use decimal_percentage::Percentage;
use tracing::{debug, info, warn};

use crate::{
    cart::{Cart, CartError, CartLineItem, LineOutcome},
    catalog::MenuItem,
    checkout::{CheckoutError, CheckoutForm, OrderConfirmation, OrderSubmitter, place_order},
    pricing::{PricingConfig, PricingError, PricingResult, compute_pricing},
    promotions::{PromoCodeTable, PromoError, PromoState},
};

/// Shopping session
#[derive(Debug)]
pub struct ShoppingSession<'s, 'a> {
    cart: Cart<'a>,
    promo: PromoState,
    config: &'s PricingConfig<'a>,
    promo_codes: &'s PromoCodeTable,
}

impl<'s> ShoppingSession<'s, 'static> {
    /// Start a session with an empty cart in the configuration's currency.
    pub fn new(config: &'s PricingConfig<'static>, promo_codes: &'s PromoCodeTable) -> Self {
        Self::with_cart(Cart::new(config.currency()), config, promo_codes)
    }
}

impl<'s, 'a> ShoppingSession<'s, 'a> {
    /// Start a session around an existing cart.
    pub fn with_cart(
        cart: Cart<'a>,
        config: &'s PricingConfig<'a>,
        promo_codes: &'s PromoCodeTable,
    ) -> Self {
        Self {
            cart,
            promo: PromoState::Unapplied,
            config,
            promo_codes,
        }
    }

    /// Add a menu item to the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the item cannot go in this cart.
    pub fn add_menu_item(
        &mut self,
        item: &MenuItem<'a>,
        quantity: u32,
    ) -> Result<LineOutcome, CartError> {
        let outcome = self.cart.add_menu_item(item, quantity)?;

        debug!(item = %item.id, quantity, ?outcome, "added to cart");

        Ok(outcome)
    }

    /// Change a line's quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the line is not in the cart.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) -> Result<LineOutcome, CartError> {
        let outcome = self.cart.set_quantity(id, quantity)?;

        Ok(self.after_mutation(id, outcome))
    }

    /// The "+" control on a cart row.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the line is not in the cart.
    pub fn increment(&mut self, id: &str) -> Result<LineOutcome, CartError> {
        let outcome = self.cart.increment(id)?;

        Ok(self.after_mutation(id, outcome))
    }

    /// The "−" control on a cart row.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the line is not in the cart.
    pub fn decrement(&mut self, id: &str) -> Result<LineOutcome, CartError> {
        let outcome = self.cart.decrement(id)?;

        Ok(self.after_mutation(id, outcome))
    }

    /// Remove a line; absent lines are ignored.
    pub fn remove_item(&mut self, id: &str) -> LineOutcome {
        let outcome = self.cart.remove_item(id);

        self.after_mutation(id, outcome)
    }

    /// Apply a promo code.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::InvalidPromoCode`] if the code is unknown; any applied code
    /// stays applied.
    pub fn apply_promo(&mut self, code: &str) -> Result<Percentage, PromoError> {
        match self.promo.apply(self.promo_codes, code) {
            Ok(rate) => {
                info!(code, "promo code applied");

                Ok(rate)
            }
            Err(error) => {
                warn!(code, "promo code rejected");

                Err(error)
            }
        }
    }

    /// Remove the applied promo code.
    pub fn clear_promo(&mut self) {
        self.promo.clear();
    }

    /// Price the cart as it stands.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] on overflow.
    pub fn pricing(&self) -> Result<PricingResult<'a>, PricingError> {
        compute_pricing(&self.cart, &self.promo, self.config)
    }

    /// Place the order. On success the cart is emptied and the promo cleared.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the order cannot be placed; the cart is left as is.
    pub fn place_order(
        &mut self,
        form: &CheckoutForm,
        submitter: &mut impl OrderSubmitter,
    ) -> Result<OrderConfirmation<'a>, CheckoutError> {
        let confirmation = place_order(&self.cart, &self.promo, self.config, form, submitter)?;

        self.cart.clear();
        self.promo.clear();

        Ok(confirmation)
    }

    /// Cart lines in display order.
    pub fn items(&self) -> &[CartLineItem<'a>] {
        self.cart.items()
    }

    /// The session's cart.
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// The session's promo state.
    pub fn promo(&self) -> &PromoState {
        &self.promo
    }

    /// An emptied cart drops its promo code.
    fn after_mutation(&mut self, id: &str, outcome: LineOutcome) -> LineOutcome {
        debug!(line = id, ?outcome, "cart line changed");

        if self.cart.is_empty() && self.promo.is_applied() {
            debug!("cart emptied; clearing promo code");
            self.promo.clear();
        }

        outcome
    }
}
