use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progressive order identifier, the first order of a service is number 1
pub type OrderNumber = u32;

/// One dish of an order with the requested quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub dish: String,
    pub quantity: i32,
}

impl OrderLine {
    pub fn new(dish: impl Into<String>, quantity: i32) -> Self {
        Self {
            dish: dish.into(),
            quantity,
        }
    }
}

impl<S: Into<String>> From<(S, i32)> for OrderLine {
    fn from((dish, quantity): (S, i32)) -> Self {
        OrderLine::new(dish, quantity)
    }
}

/// Request model for placing an order
///
/// Dish names, quantities, hour and distance are stored as given; only the
/// restaurant is checked against the catalog when the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub lines: Vec<OrderLine>,
    pub customer: String,
    pub restaurant: String,
    pub delivery_time: i32,
    pub delivery_distance: i32,
}

impl PlaceOrderRequest {
    /// Build a request from co-indexed dish and quantity sequences.
    ///
    /// Extra entries in the longer sequence are dropped.
    pub fn from_parallel<S: AsRef<str>>(
        dish_names: &[S],
        quantities: &[i32],
        customer: impl Into<String>,
        restaurant: impl Into<String>,
        delivery_time: i32,
        delivery_distance: i32,
    ) -> Self {
        let lines = dish_names
            .iter()
            .zip(quantities)
            .map(|(dish, &quantity)| OrderLine::new(dish.as_ref(), quantity))
            .collect();

        Self {
            lines,
            customer: customer.into(),
            restaurant: restaurant.into(),
            delivery_time,
            delivery_distance,
        }
    }
}

/// A placed delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub number: OrderNumber,
    pub lines: Vec<OrderLine>,
    pub customer: String,
    pub restaurant: String,
    pub delivery_time: i32,
    pub delivery_distance: i32,
    pub assigned: bool,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Create a new, not yet assigned order
    pub fn new(number: OrderNumber, request: PlaceOrderRequest) -> Self {
        Self {
            number,
            lines: request.lines,
            customer: request.customer,
            restaurant: request.restaurant,
            delivery_time: request.delivery_time,
            delivery_distance: request.delivery_distance,
            assigned: false,
            placed_at: Utc::now(),
        }
    }

    /// Whether the order can go out in a delivery round at `delivery_time`
    /// covering at most `max_distance` kilometers
    pub fn is_deliverable(&self, delivery_time: i32, max_distance: i32) -> bool {
        !self.assigned
            && self.delivery_time == delivery_time
            && self.delivery_distance <= max_distance
    }

    /// Mark the order as assigned to a delivery; there is no way back
    pub fn assign(&mut self) {
        self.assigned = true;
    }

    pub fn is_pending(&self) -> bool {
        !self.assigned
    }

    /// Total number of items over all lines
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_request() -> PlaceOrderRequest {
        PlaceOrderRequest {
            lines: vec![OrderLine::new("margherita", 2), OrderLine::new("cola", 1)],
            customer: "Alice".to_string(),
            restaurant: "R1".to_string(),
            delivery_time: 20,
            delivery_distance: 3,
        }
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = Order::new(1, create_test_request());
        assert_eq!(order.number, 1);
        assert!(!order.assigned);
        assert!(order.is_pending());
        assert_eq!(order.total_quantity(), 3);
    }

    #[test]
    fn test_from_parallel_pairs_names_with_quantities() {
        let request =
            PlaceOrderRequest::from_parallel(&["ramen", "gyoza"], &[1, 4], "Bob", "R2", 12, 7);

        assert_eq!(
            request.lines,
            vec![OrderLine::new("ramen", 1), OrderLine::new("gyoza", 4)]
        );
        assert_eq!(request.customer, "Bob");
        assert_eq!(request.restaurant, "R2");
        assert_eq!(request.delivery_time, 12);
        assert_eq!(request.delivery_distance, 7);
    }

    #[test]
    fn test_from_parallel_truncates_to_shorter_sequence() {
        let request = PlaceOrderRequest::from_parallel(&["ramen", "gyoza"], &[1], "Bob", "R2", 12, 7);
        assert_eq!(request.lines, vec![OrderLine::new("ramen", 1)]);
    }

    #[test]
    fn test_is_deliverable() {
        let mut order = Order::new(1, create_test_request());

        assert!(order.is_deliverable(20, 3));
        assert!(order.is_deliverable(20, 10));
        assert!(!order.is_deliverable(20, 2));
        assert!(!order.is_deliverable(19, 10));

        order.assign();
        assert!(!order.is_deliverable(20, 10));
        assert!(!order.is_pending());
    }

    #[test]
    fn test_order_line_from_tuple() {
        let line: OrderLine = ("tiramisu", 2).into();
        assert_eq!(line, OrderLine::new("tiramisu", 2));
    }
}
