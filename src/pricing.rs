//! Pricing
//!
//! Order totals for a cart: subtotal, delivery fee, tax, promo discount and grand total.
//! Everything here is a pure function of its inputs.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{
    Money, MoneyError,
    iso::{Currency, INR},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    discounts::{DiscountError, percent_of},
    promotions::PromoState,
};

/// Delivery fee charged on any non-empty order, in minor units of [`INR`].
pub const DEFAULT_DELIVERY_FEE_MINOR: i64 = 500;

/// Tax rate applied to the subtotal (8%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Errors that can occur while pricing a cart.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A line total or the subtotal does not fit in `i64` minor units.
    #[error("cart total overflowed")]
    Overflow,

    /// Wrapped percentage calculation error.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Fees and rates applied on top of the cart subtotal.
#[derive(Debug, Clone, Copy)]
pub struct PricingConfig<'a> {
    delivery_fee: Money<'a, Currency>,
    tax_rate: Percentage,
}

impl<'a> PricingConfig<'a> {
    /// Create a pricing configuration.
    pub fn new(delivery_fee: Money<'a, Currency>, tax_rate: Percentage) -> Self {
        Self {
            delivery_fee,
            tax_rate,
        }
    }

    /// Flat fee charged on any non-empty order
    pub fn delivery_fee(&self) -> Money<'a, Currency> {
        self.delivery_fee
    }

    /// Tax rate applied to the pre-discount subtotal
    pub fn tax_rate(&self) -> Percentage {
        self.tax_rate
    }

    /// Currency of the fee, and so of every cart priced with this configuration.
    pub fn currency(&self) -> &'a Currency {
        self.delivery_fee.currency()
    }
}

impl Default for PricingConfig<'_> {
    fn default() -> Self {
        Self::new(
            Money::from_minor(DEFAULT_DELIVERY_FEE_MINOR, INR),
            Percentage::from(DEFAULT_TAX_RATE),
        )
    }
}

/// Price breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult<'a> {
    subtotal: Money<'a, Currency>,
    delivery_fee: Money<'a, Currency>,
    tax: Money<'a, Currency>,
    discount: Money<'a, Currency>,
    total: Money<'a, Currency>,
}

impl<'a> PricingResult<'a> {
    /// All-zero breakdown, as for an empty cart.
    pub fn zero(currency: &'a Currency) -> Self {
        let zero = Money::from_minor(0, currency);

        Self {
            subtotal: zero,
            delivery_fee: zero,
            tax: zero,
            discount: zero,
            total: zero,
        }
    }

    /// Sum of line totals
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Delivery fee; zero for an empty cart
    pub fn delivery_fee(&self) -> Money<'a, Currency> {
        self.delivery_fee
    }

    /// Tax on the subtotal
    pub fn tax(&self) -> Money<'a, Currency> {
        self.tax
    }

    /// Promo discount on the subtotal
    pub fn discount(&self) -> Money<'a, Currency> {
        self.discount
    }

    /// Amount payable
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }
}

/// Sum unit price times quantity over every line, exactly, in minor units.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the sum does not fit in `i64` minor units.
pub fn subtotal<'a>(cart: &Cart<'a>) -> Result<Money<'a, Currency>, PricingError> {
    let minor = cart.items().iter().try_fold(0i64, |acc, line| {
        line.line_total_minor()
            .and_then(|line_total| acc.checked_add(line_total))
            .ok_or(PricingError::Overflow)
    })?;

    Ok(Money::from_minor(minor, cart.currency()))
}

/// Price a cart.
///
/// Tax is charged on the subtotal before any promo discount. An empty cart prices to zero
/// across the board, and the total never goes below zero.
///
/// # Errors
///
/// Returns a [`PricingError`] on overflow or if the configuration is in another currency.
pub fn compute_pricing<'a>(
    cart: &Cart<'a>,
    promo: &PromoState,
    config: &PricingConfig<'a>,
) -> Result<PricingResult<'a>, PricingError> {
    let subtotal = subtotal(cart)?;

    if subtotal.to_minor_units() == 0 {
        return Ok(PricingResult::zero(cart.currency()));
    }

    let delivery_fee = config.delivery_fee();
    let tax = percent_of(&config.tax_rate(), &subtotal)?;

    let discount = match promo.rate() {
        Some(rate) => percent_of(&rate, &subtotal)?,
        None => Money::from_minor(0, cart.currency()),
    };

    let total = subtotal.add(delivery_fee)?.add(tax)?.sub(discount)?;

    let total = if total.to_minor_units() < 0 {
        Money::from_minor(0, cart.currency())
    } else {
        total
    };

    Ok(PricingResult {
        subtotal,
        delivery_fee,
        tax,
        discount,
        total,
    })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;
    use crate::promotions::PromoCode;

    fn scenario_cart<'a>() -> Result<Cart<'a>, crate::cart::CartError> {
        let mut cart = Cart::new(INR);

        cart.add_item("item1", "Margherita Pizza", Money::from_minor(1500, INR), 5, 1)?;
        cart.add_item("item2", "Calamari Fritti", Money::from_minor(1200, INR), 3, 2)?;
        cart.add_item("item3", "Coke", Money::from_minor(200, INR), 10, 4)?;

        Ok(cart)
    }

    #[test]
    fn empty_cart_prices_to_zero() -> TestResult {
        let cart = Cart::new(INR);
        let pricing = compute_pricing(&cart, &PromoState::Unapplied, &PricingConfig::default())?;

        assert_eq!(pricing, PricingResult::zero(INR));

        Ok(())
    }

    #[test]
    fn empty_cart_with_promo_prices_to_zero() -> TestResult {
        let cart = Cart::new(INR);
        let promo = PromoState::Applied(PromoCode::new("DISCOUNT10", Percentage::from(0.1)));
        let pricing = compute_pricing(&cart, &promo, &PricingConfig::default())?;

        assert_eq!(pricing.total(), Money::from_minor(0, INR));
        assert_eq!(pricing.discount(), Money::from_minor(0, INR));

        Ok(())
    }

    #[test]
    fn scenario_without_promo() -> TestResult {
        let cart = scenario_cart()?;
        let pricing = compute_pricing(&cart, &PromoState::Unapplied, &PricingConfig::default())?;

        assert_eq!(pricing.subtotal(), Money::from_minor(4700, INR));
        assert_eq!(pricing.delivery_fee(), Money::from_minor(500, INR));
        assert_eq!(pricing.tax(), Money::from_minor(376, INR));
        assert_eq!(pricing.discount(), Money::from_minor(0, INR));
        assert_eq!(pricing.total(), Money::from_minor(5576, INR));

        Ok(())
    }

    #[test]
    fn scenario_with_ten_percent_promo() -> TestResult {
        let cart = scenario_cart()?;
        let promo = PromoState::Applied(PromoCode::new("DISCOUNT10", Percentage::from(0.1)));
        let pricing = compute_pricing(&cart, &promo, &PricingConfig::default())?;

        assert_eq!(pricing.tax(), Money::from_minor(376, INR));
        assert_eq!(pricing.discount(), Money::from_minor(470, INR));
        assert_eq!(pricing.total(), Money::from_minor(5106, INR));

        Ok(())
    }

    #[test]
    fn tax_rounds_once_on_the_subtotal() -> TestResult {
        let mut cart = Cart::new(INR);

        // 3 x 0.33 = 0.99; 8% of 99 paise is 7.92, rounded once to 8
        cart.add_item("a", "A", Money::from_minor(33, INR), 10, 3)?;

        let pricing = compute_pricing(&cart, &PromoState::Unapplied, &PricingConfig::default())?;

        assert_eq!(pricing.tax(), Money::from_minor(8, INR));

        Ok(())
    }

    #[test]
    fn total_is_floored_at_zero() -> TestResult {
        let cart = scenario_cart()?;
        let config = PricingConfig::new(Money::from_minor(0, INR), Percentage::from(0.0));
        let promo = PromoState::Applied(PromoCode::new("EVERYTHING", Percentage::from(1.5)));

        let pricing = compute_pricing(&cart, &promo, &config)?;

        assert_eq!(pricing.total(), Money::from_minor(0, INR));

        Ok(())
    }

    #[test]
    fn foreign_currency_config_is_rejected() -> TestResult {
        let cart = scenario_cart()?;
        let config = PricingConfig::new(Money::from_minor(500, USD), Percentage::from(0.08));

        let result = compute_pricing(&cart, &PromoState::Unapplied, &config);

        assert!(matches!(result, Err(PricingError::Money(_))));

        Ok(())
    }

    #[test]
    fn default_config_is_five_rupees_and_eight_percent() {
        let config = PricingConfig::default();

        assert_eq!(config.delivery_fee(), Money::from_minor(500, INR));
        assert_eq!(config.tax_rate(), Percentage::from(Decimal::new(8, 2)));
        assert_eq!(config.currency(), INR);
    }

    #[test]
    fn default_tax_rate_is_exact_in_minor_units() -> TestResult {
        let mut cart = Cart::new(INR);

        // 8% of 475 paise is exactly 38, and 0.48 paise rounds down
        cart.add_item("a", "A", Money::from_minor(475, INR), 10, 1)?;

        let pricing = compute_pricing(&cart, &PromoState::Unapplied, &PricingConfig::default())?;

        assert_eq!(pricing.tax(), Money::from_minor(38, INR));

        cart.set_quantity("a", 0)?;
        cart.add_item("b", "B", Money::from_minor(6, INR), 10, 1)?;

        let pricing = compute_pricing(&cart, &PromoState::Unapplied, &PricingConfig::default())?;

        assert_eq!(pricing.tax(), Money::from_minor(0, INR));

        Ok(())
    }
}
