use serde::{Deserialize, Serialize};

use crate::models::{Order, OrderNumber};

/// Constraints of one delivery round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRound {
    pub delivery_time: i32,
    pub max_distance: i32,
    pub max_orders: i32,
}

impl DeliveryRound {
    pub fn new(delivery_time: i32, max_distance: i32, max_orders: i32) -> Self {
        Self {
            delivery_time,
            max_distance,
            max_orders,
        }
    }

    /// How many orders the round may take; non-positive limits take none
    pub fn capacity(&self) -> usize {
        usize::try_from(self.max_orders).unwrap_or(0)
    }
}

/// Pick the orders for a delivery round.
///
/// `orders` must be in arrival order. The first `capacity()` unassigned
/// orders due at the round's hour within its distance are returned, in the
/// same order. Nothing is mutated here.
pub fn select_orders<'a, I>(orders: I, round: &DeliveryRound) -> Vec<OrderNumber>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders
        .into_iter()
        .filter(|order| order.is_deliverable(round.delivery_time, round.max_distance))
        .take(round.capacity())
        .map(|order| order.number)
        .collect()
}
