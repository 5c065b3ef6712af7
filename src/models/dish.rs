use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced menu item; `restaurant` is a lookup key into the restaurant index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub restaurant: String,
    pub price: Decimal,
}

impl Dish {
    pub fn new(name: String, restaurant: String, price: Decimal) -> Self {
        Self {
            name,
            restaurant,
            price,
        }
    }

    /// Check whether the price lies in the closed range [min_price, max_price]
    pub fn is_priced_within(&self, min_price: Decimal, max_price: Decimal) -> bool {
        self.price >= min_price && self.price <= max_price
    }
}
