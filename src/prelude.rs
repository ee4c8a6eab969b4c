//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLineItem, LineOutcome},
    catalog::{
        Catalog, CatalogError, CuisineCategory, MenuCategory, MenuItem, Restaurant,
        RestaurantKey,
        filter::{filter_restaurants, toggle_category},
        tags::CuisineTags,
    },
    checkout::{
        CardDetails, CheckoutError, CheckoutForm, Country, DeliveryAddress, Field,
        PaymentKind, PaymentMethod, ValidationError, place_order,
        submission::{
            InstantSubmitter, OrderConfirmation, OrderRequest, OrderSubmitter, SubmissionError,
        },
    },
    discounts::DiscountError,
    fixtures::{Fixture, FixtureError},
    orders::{CustomerProfile, OrderHistory, OrderItemPreview, OrderStatus, OrderSummary},
    pricing::{PricingConfig, PricingError, PricingResult, compute_pricing, subtotal},
    promotions::{PromoCode, PromoCodeTable, PromoError, PromoState, evaluate_promo_code},
    receipt::{OrderSummaryTable, ReceiptError},
    session::ShoppingSession,
};
