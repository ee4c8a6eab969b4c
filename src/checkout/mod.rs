//! Checkout
//!
//! The delivery and payment form, its validation, and placing an order for a priced cart.

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{Span, info, warn};

use crate::{
    cart::Cart,
    pricing::{PricingConfig, PricingError, compute_pricing},
    promotions::PromoState,
};

pub mod submission;

pub use submission::{
    InstantSubmitter, OrderConfirmation, OrderRequest, OrderSubmitter, SubmissionError,
};

/// A checkout form field that can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Street address
    Street,
    /// City
    City,
    /// ZIP / postal code
    Zip,
    /// Country
    Country,
    /// Card number
    CardNumber,
    /// Card expiry (MM/YY)
    CardExpiry,
    /// Card CVV
    CardCvv,
    /// UPI id
    UpiId,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Street => "street",
            Field::City => "city",
            Field::Zip => "zip",
            Field::Country => "country",
            Field::CardNumber => "card number",
            Field::CardExpiry => "card expiry",
            Field::CardCvv => "card cvv",
            Field::UpiId => "upi id",
        };

        f.write_str(label)
    }
}

/// The checkout form has missing required fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("missing required fields: {}", field_list(.missing))]
pub struct ValidationError {
    missing: SmallVec<[Field; 4]>,
}

impl ValidationError {
    /// Fields that must be filled in, in form order.
    pub fn missing(&self) -> &[Field] {
        &self.missing
    }
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Countries the storefront delivers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    /// United States
    Usa,
    /// Canada
    Canada,
    /// India
    India,
}

impl Country {
    /// Parse the form's country value (`USA`, `Canada`, `India`), ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "usa" => Some(Country::Usa),
            "canada" => Some(Country::Canada),
            "india" => Some(Country::India),
            _ => None,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Country::Usa => "United States",
            Country::Canada => "Canada",
            Country::India => "India",
        }
    }
}

/// Where an order is delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryAddress {
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// ZIP / postal code
    pub zip: String,
    /// Country, once selected
    pub country: Option<Country>,
}

/// Card details entered at checkout.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    /// Card number
    pub number: String,
    /// Expiry (MM/YY)
    pub expiry: String,
    /// Security code
    pub cvv: String,
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &"<redacted>")
            .field("expiry", &self.expiry)
            .field("cvv", &"<redacted>")
            .finish()
    }
}

/// How the customer pays, with the details each method needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Credit or debit card
    Card(CardDetails),

    /// UPI transfer
    Upi {
        /// UPI id (e.g. `yourname@bank`)
        upi_id: String,
    },

    /// Pay the courier on delivery
    CashOnDelivery,
}

/// Payment method without its details, as passed on with an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    /// Credit or debit card
    Card,
    /// UPI transfer
    Upi,
    /// Pay on delivery
    CashOnDelivery,
}

impl PaymentMethod {
    /// The method without its details.
    pub fn kind(&self) -> PaymentKind {
        match self {
            PaymentMethod::Card(_) => PaymentKind::Card,
            PaymentMethod::Upi { .. } => PaymentKind::Upi,
            PaymentMethod::CashOnDelivery => PaymentKind::CashOnDelivery,
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Card(CardDetails::default())
    }
}

/// The checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    /// Delivery address
    pub address: DeliveryAddress,

    /// Payment method
    pub payment: PaymentMethod,

    /// Remember the address for future orders
    pub save_address: bool,

    /// Remember the card for future orders
    pub save_payment: bool,
}

impl CheckoutForm {
    /// Check every required field is filled in.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every missing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = SmallVec::new();

        let address = &self.address;

        require(&mut missing, Field::Street, &address.street);
        require(&mut missing, Field::City, &address.city);
        require(&mut missing, Field::Zip, &address.zip);

        if address.country.is_none() {
            missing.push(Field::Country);
        }

        match &self.payment {
            PaymentMethod::Card(card) => {
                require(&mut missing, Field::CardNumber, &card.number);
                require(&mut missing, Field::CardExpiry, &card.expiry);
                require(&mut missing, Field::CardCvv, &card.cvv);
            }
            PaymentMethod::Upi { upi_id } => require(&mut missing, Field::UpiId, upi_id),
            PaymentMethod::CashOnDelivery => {}
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

fn require(missing: &mut SmallVec<[Field; 4]>, field: Field, value: &str) {
    if value.trim().is_empty() {
        missing.push(field);
    }
}

/// Errors that stop an order from being placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The form is incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// There is nothing to order.
    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    /// The cart could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The order collaborator refused the order.
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Validate the form, price the cart and submit the order.
///
/// # Errors
///
/// Returns a [`CheckoutError`] if the form is incomplete, the cart is empty or cannot be
/// priced, or the submitter rejects the order.
#[tracing::instrument(
    name = "checkout.place_order",
    skip_all,
    fields(
        lines = cart.len(),
        payment = ?form.payment.kind(),
        promo_applied = promo.is_applied(),
        order_id = tracing::field::Empty
    ),
    err
)]
pub fn place_order<'a>(
    cart: &Cart<'a>,
    promo: &PromoState,
    config: &PricingConfig<'a>,
    form: &CheckoutForm,
    submitter: &mut impl OrderSubmitter,
) -> Result<OrderConfirmation<'a>, CheckoutError> {
    if let Err(error) = form.validate() {
        warn!(%error, "checkout form rejected");

        return Err(error.into());
    }

    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let pricing = compute_pricing(cart, promo, config)?;

    let promo_code = match promo {
        PromoState::Applied(code) => Some(code.code().to_string()),
        PromoState::Unapplied => None,
    };

    let request = OrderRequest {
        lines: cart.items().to_vec(),
        pricing,
        promo_code,
        address: form.address.clone(),
        payment: form.payment.kind(),
    };

    let confirmation = submitter.submit(&request)?;

    Span::current().record("order_id", tracing::field::display(&confirmation.order_id));

    info!(
        order_id = %confirmation.order_id,
        total = %confirmation.total,
        lines = request.lines.len(),
        "order placed"
    );

    Ok(confirmation)
}
