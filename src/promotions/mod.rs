//! Promotions
//!
//! Promo codes: a fixed table of codes and their discount rates, and the per-session state of
//! whether one has been applied.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Code accepted by the default promo table.
pub const DEFAULT_PROMO_CODE: &str = "DISCOUNT10";

/// Errors raised when applying a promo code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromoError {
    /// The submitted code is not in the promo table.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),
}

/// A matched promo code and the rate it discounts the subtotal by.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoCode {
    code: String,
    rate: Percentage,
}

impl PromoCode {
    /// Create a promo code; the code is stored upper-cased.
    pub fn new(code: &str, rate: Percentage) -> Self {
        Self {
            code: code.to_uppercase(),
            rate,
        }
    }

    /// Canonical (upper-cased) code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Fraction of the subtotal taken off
    pub fn rate(&self) -> Percentage {
        self.rate
    }
}

/// The codes a storefront accepts.
#[derive(Debug, Clone, Default)]
pub struct PromoCodeTable {
    codes: FxHashMap<String, Percentage>,
}

impl PromoCodeTable {
    /// Create an empty table; every code is rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the storefront: `DISCOUNT10` for 10% off.
    pub fn storefront_defaults() -> Self {
        let mut table = Self::new();

        table.insert(DEFAULT_PROMO_CODE, Percentage::from(Decimal::new(10, 2)));

        table
    }

    /// Add or replace a code. Codes are matched case-insensitively.
    pub fn insert(&mut self, code: &str, rate: Percentage) -> &mut Self {
        self.codes.insert(code.to_uppercase(), rate);

        self
    }

    /// Look up a submitted code.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::InvalidPromoCode`] if the code is not in the table.
    pub fn evaluate(&self, code: &str) -> Result<PromoCode, PromoError> {
        let canonical = code.to_uppercase();

        match self.codes.get(&canonical) {
            Some(rate) => Ok(PromoCode {
                code: canonical,
                rate: *rate,
            }),
            None => Err(PromoError::InvalidPromoCode(code.to_string())),
        }
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table accepts no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Look up a submitted promo code in `table`.
///
/// # Errors
///
/// Returns [`PromoError::InvalidPromoCode`] if the code is not in the table.
pub fn evaluate_promo_code(table: &PromoCodeTable, code: &str) -> Result<PromoCode, PromoError> {
    table.evaluate(code)
}

/// Whether a promo code is applied to the session's cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PromoState {
    /// No promo code applied
    #[default]
    Unapplied,

    /// A valid promo code is applied
    Applied(PromoCode),
}

impl PromoState {
    /// Apply a submitted code. An unknown code leaves the state as it was.
    ///
    /// # Errors
    ///
    /// Returns [`PromoError::InvalidPromoCode`] if the code is not in the table.
    pub fn apply(&mut self, table: &PromoCodeTable, code: &str) -> Result<Percentage, PromoError> {
        let promo = table.evaluate(code)?;
        let rate = promo.rate();

        *self = PromoState::Applied(promo);

        Ok(rate)
    }

    /// Remove any applied code.
    pub fn clear(&mut self) {
        *self = PromoState::Unapplied;
    }

    /// Discount rate of the applied code, if any.
    pub fn rate(&self) -> Option<Percentage> {
        match self {
            PromoState::Applied(promo) => Some(promo.rate()),
            PromoState::Unapplied => None,
        }
    }

    /// Whether a code is applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, PromoState::Applied(_))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn table() -> PromoCodeTable {
        PromoCodeTable::storefront_defaults()
    }

    #[test]
    fn evaluate_is_case_insensitive() -> TestResult {
        let upper = evaluate_promo_code(&table(), "DISCOUNT10")?;
        let lower = evaluate_promo_code(&table(), "discount10")?;

        assert_eq!(upper, lower);
        assert_eq!(upper.code(), "DISCOUNT10");
        assert_eq!(upper.rate(), Percentage::from(0.1));

        Ok(())
    }

    #[test]
    fn evaluate_rejects_unknown_code() {
        assert_eq!(
            evaluate_promo_code(&table(), "FREEFOOD"),
            Err(PromoError::InvalidPromoCode("FREEFOOD".to_string()))
        );
    }

    #[test]
    fn evaluate_rejects_empty_code() {
        assert!(evaluate_promo_code(&table(), "").is_err());
    }

    #[test]
    fn apply_moves_to_applied() -> TestResult {
        let mut state = PromoState::default();

        state.apply(&table(), "Discount10")?;

        assert!(state.is_applied());
        assert_eq!(state.rate(), Some(Percentage::from(0.1)));

        Ok(())
    }

    #[test]
    fn apply_invalid_code_leaves_state_unapplied() {
        let mut state = PromoState::Unapplied;

        assert!(state.apply(&table(), "nope").is_err());
        assert_eq!(state, PromoState::Unapplied);
    }

    #[test]
    fn apply_invalid_code_keeps_existing_promo() -> TestResult {
        let mut state = PromoState::Unapplied;

        state.apply(&table(), "DISCOUNT10")?;

        assert!(state.apply(&table(), "nope").is_err());
        assert!(state.is_applied());

        Ok(())
    }

    #[test]
    fn clear_reverts_to_unapplied() -> TestResult {
        let mut state = PromoState::Unapplied;

        state.apply(&table(), "DISCOUNT10")?;
        state.clear();

        assert_eq!(state, PromoState::Unapplied);
        assert_eq!(state.rate(), None);

        Ok(())
    }

    #[test]
    fn insert_overrides_existing_rate() -> TestResult {
        let mut table = PromoCodeTable::new();

        table
            .insert("welcome", Percentage::from(0.05))
            .insert("WELCOME", Percentage::from(0.2));

        assert_eq!(table.len(), 1);
        assert_eq!(table.evaluate("Welcome")?.rate(), Percentage::from(0.2));

        Ok(())
    }
}
