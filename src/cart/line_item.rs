//! Cart line items

use rusty_money::{Money, iso::Currency};

/// One row in the cart: a catalog item and how many of it were ordered.
///
/// `quantity` always lies in `1..=max_quantity`; the cart removes a line rather than let it
/// reach zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem<'a> {
    id: String,
    name: String,
    image_url: Option<String>,
    unit_price: Money<'a, Currency>,
    quantity: u32,
    max_quantity: u32,
}

impl<'a> CartLineItem<'a> {
    pub(crate) fn new(
        id: String,
        name: String,
        image_url: Option<String>,
        unit_price: Money<'a, Currency>,
        quantity: u32,
        max_quantity: u32,
    ) -> Self {
        Self {
            id,
            name,
            image_url,
            unit_price,
            quantity,
            max_quantity,
        }
    }

    /// Catalog item id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Thumbnail
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Price of a single unit
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Units ordered
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Most units this line may hold
    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// Whether the increase control should be disabled.
    pub fn at_max(&self) -> bool {
        self.quantity >= self.max_quantity
    }

    /// Unit price times quantity, in minor units, or `None` on overflow.
    pub fn line_total_minor(&self) -> Option<i64> {
        self.unit_price
            .to_minor_units()
            .checked_mul(i64::from(self.quantity))
    }

    /// Unit price times quantity, or `None` on overflow.
    pub fn line_total(&self) -> Option<Money<'a, Currency>> {
        self.line_total_minor()
            .map(|minor| Money::from_minor(minor, self.unit_price.currency()))
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::INR;

    use super::*;

    fn calamari(quantity: u32) -> CartLineItem<'static> {
        CartLineItem::new(
            "item2".to_string(),
            "Calamari Fritti".to_string(),
            None,
            Money::from_minor(1200, INR),
            quantity,
            3,
        )
    }

    #[test]
    fn line_total_multiplies_unit_price() {
        assert_eq!(calamari(2).line_total(), Some(Money::from_minor(2400, INR)));
    }

    #[test]
    fn line_total_overflow_is_reported() {
        let line = CartLineItem::new(
            "big".to_string(),
            "Big".to_string(),
            None,
            Money::from_minor(i64::MAX, INR),
            2,
            2,
        );

        assert_eq!(line.line_total_minor(), None);
    }

    #[test]
    fn at_max_tracks_cap() {
        assert!(!calamari(2).at_max());
        assert!(calamari(3).at_max());
    }
}
