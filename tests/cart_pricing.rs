//! Integration tests for cart mutations and pricing over the default storefront fixture

use decimal_percentage::Percentage;
use rusty_money::{Money, iso::INR};
use testresult::TestResult;

use storefront::{
    cart::{Cart, LineOutcome},
    fixtures::Fixture,
    pricing::{PricingConfig, PricingResult, compute_pricing},
    promotions::{PromoState, evaluate_promo_code},
};

#[test]
fn sample_cart_prices_like_the_cart_page() -> TestResult {
    let mut fixture = Fixture::new();

    fixture.load_storefront("default")?;

    let cart = fixture.cart()?;
    let pricing = compute_pricing(&cart, &PromoState::Unapplied, fixture.pricing_config()?)?;

    assert_eq!(pricing.subtotal(), Money::from_minor(4700, INR));
    assert_eq!(pricing.delivery_fee(), Money::from_minor(500, INR));
    assert_eq!(pricing.tax(), Money::from_minor(376, INR));
    assert_eq!(pricing.discount(), Money::from_minor(0, INR));
    assert_eq!(pricing.total(), Money::from_minor(5576, INR));

    Ok(())
}

#[test]
fn discount10_takes_ten_percent_off_the_subtotal() -> TestResult {
    let mut fixture = Fixture::new();

    fixture.load_storefront("default")?;

    let cart = fixture.cart()?;
    let mut promo = PromoState::Unapplied;

    let rate = promo.apply(fixture.promo_codes(), "discount10")?;

    assert_eq!(rate, Percentage::from(0.1));

    let pricing = compute_pricing(&cart, &promo, fixture.pricing_config()?)?;

    assert_eq!(pricing.discount(), Money::from_minor(470, INR));
    assert_eq!(pricing.tax(), Money::from_minor(376, INR));
    assert_eq!(pricing.total(), Money::from_minor(5106, INR));

    Ok(())
}

#[test]
fn fixture_promo_codes_match_the_builtin_table() -> TestResult {
    let mut fixture = Fixture::new();

    fixture.load_storefront("default")?;

    let loaded = evaluate_promo_code(fixture.promo_codes(), "DISCOUNT10")?;
    let builtin = evaluate_promo_code(
        &storefront::promotions::PromoCodeTable::storefront_defaults(),
        "DISCOUNT10",
    )?;

    assert_eq!(loaded, builtin);
    assert!(evaluate_promo_code(fixture.promo_codes(), "FREEFOOD").is_err());

    Ok(())
}

#[test]
fn sample_cart_quantities_stay_within_caps() -> TestResult {
    let mut fixture = Fixture::new();

    fixture.load_storefront("default")?;

    let mut cart = fixture.cart()?;

    // Calamari Fritti is capped at 3 and starts at 2
    assert_eq!(cart.increment("item2")?, LineOutcome::Updated { quantity: 3 });
    assert_eq!(
        cart.increment("item2")?,
        LineOutcome::Clamped {
            requested: 4,
            quantity: 3
        }
    );

    assert_eq!(cart.total_quantity(), 8);

    Ok(())
}

#[test]
fn removing_every_line_prices_to_zero() -> TestResult {
    let mut fixture = Fixture::new();

    fixture.load_storefront("default")?;

    let mut cart = fixture.cart()?;

    cart.set_quantity("item1", 0)?;
    cart.remove_item("item2");
    cart.decrement("item3")?;
    cart.set_quantity("item3", 0)?;

    assert!(cart.is_empty());

    let pricing = compute_pricing(&cart, &PromoState::Unapplied, fixture.pricing_config()?)?;

    assert_eq!(pricing, PricingResult::zero(INR));

    Ok(())
}

#[test]
fn subtotal_is_independent_of_operation_order() -> TestResult {
    let config = PricingConfig::default();

    let mut forward = Cart::new(INR);

    forward.add_item("a", "Tea", Money::from_minor(150, INR), 10, 2)?;
    forward.add_item("b", "Samosa", Money::from_minor(325, INR), 10, 1)?;
    forward.increment("b")?;

    let mut backward = Cart::new(INR);

    backward.add_item("b", "Samosa", Money::from_minor(325, INR), 10, 3)?;
    backward.add_item("a", "Tea", Money::from_minor(150, INR), 10, 1)?;
    backward.decrement("b")?;
    backward.add_item("a", "Tea", Money::from_minor(150, INR), 10, 1)?;

    let forward_pricing = compute_pricing(&forward, &PromoState::Unapplied, &config)?;
    let backward_pricing = compute_pricing(&backward, &PromoState::Unapplied, &config)?;

    assert_eq!(forward_pricing.subtotal(), Money::from_minor(950, INR));
    assert_eq!(forward_pricing, backward_pricing);

    Ok(())
}
