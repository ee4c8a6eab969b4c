//! Cart Example
//!
//! This example searches the restaurant listing, fills a cart from a menu, prints the order
//! summary and places the order.
//!
//! Use `-f` to load a fixture set by name
//! Use `-r` to pick the restaurant whose menu to order from
//! Use `-q` and `-c` to search the listing by text and cuisine category
//! Use `-p` to apply a promo code

use std::io;

use anyhow::Result;

use clap::Parser;
use jiff::Zoned;
use storefront::{
    checkout::{CheckoutForm, Country, DeliveryAddress, InstantSubmitter, PaymentMethod},
    fixtures::Fixture,
    orders::OrderSummary,
    receipt::OrderSummaryTable,
    session::ShoppingSession,
    utils::{DemoArgs, init_logging},
};

/// Cart Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    init_logging(&args)?;

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog()?;

    println!("Restaurants:");

    for restaurant in catalog.search(&args.query, args.category.as_deref()) {
        let cuisines: Vec<&str> = restaurant.cuisines.iter().collect();

        println!("  {} ({})", restaurant.name, cuisines.join(", "));
    }

    let mut session = ShoppingSession::with_cart(
        fixture.cart()?,
        fixture.pricing_config()?,
        fixture.promo_codes(),
    );

    if let Some(item) = catalog
        .menu(&args.restaurant)
        .iter()
        .flat_map(|category| category.items.iter())
        .next()
    {
        session.add_menu_item(item, 1)?;
    }

    if let Some(code) = args.promo.as_deref()
        && let Err(error) = session.apply_promo(code)
    {
        println!("\n{error}");
    }

    let pricing = session.pricing()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    OrderSummaryTable::new(session.cart(), &pricing, fixture.pricing_config()?)
        .write_to(&mut handle)?;

    let form = CheckoutForm {
        address: DeliveryAddress {
            street: "123 Main St".to_string(),
            city: "Anytown".to_string(),
            zip: "12345".to_string(),
            country: Some(Country::India),
        },
        payment: PaymentMethod::CashOnDelivery,
        ..CheckoutForm::default()
    };

    let restaurant_name = catalog
        .restaurant(&args.restaurant)
        .map_or("Restaurant", |restaurant| restaurant.name.as_str())
        .to_string();

    let confirmation = session.place_order(&form, &mut InstantSubmitter::new())?;

    let mut history = fixture.orders().clone();

    history.record(OrderSummary::from_confirmation(
        &confirmation,
        restaurant_name,
        Zoned::now().date(),
    ));

    println!(
        "Order {} placed for {}. {} orders on file, {} active.",
        confirmation.order_id,
        confirmation.total,
        history.len(),
        history.active().count()
    );

    Ok(())
}
