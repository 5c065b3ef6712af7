use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{Order, OrderNumber, PlaceOrderRequest};

/// In-memory order index keyed by order number.
///
/// Numbers come from a per-instance counter starting at 1, so ascending key
/// order is arrival order.
#[derive(Debug)]
pub struct OrderBook {
    orders: BTreeMap<OrderNumber, Order>,
    next_number: OrderNumber,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_number: 1,
        }
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new order under the next number and return that number
    pub fn place(&mut self, request: PlaceOrderRequest) -> OrderNumber {
        let number = self.next_number;
        self.next_number += 1;
        self.orders.insert(number, Order::new(number, request));
        debug!(order_number = number, "Order stored");
        number
    }

    pub fn get(&self, number: OrderNumber) -> Option<&Order> {
        self.orders.get(&number)
    }

    /// Orders in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Flip the assigned flag of the given orders, returns how many changed
    pub fn mark_assigned(&mut self, numbers: &[OrderNumber]) -> usize {
        let mut changed = 0;
        for number in numbers {
            if let Some(order) = self.orders.get_mut(number) {
                if !order.assigned {
                    order.assign();
                    changed += 1;
                }
            }
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.orders.values().filter(|order| order.is_pending()).count()
    }
}
