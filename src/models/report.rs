use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time summary of the service state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub categories: Vec<String>,
    pub restaurant_count: usize,
    pub total_orders: usize,
    pub pending_orders: usize,
    pub orders_per_category: BTreeMap<String, u64>,
    pub rating_ranking: Vec<RatedRestaurant>,
    pub best_restaurant: Option<String>,
}

/// A restaurant entry in the rating ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedRestaurant {
    pub name: String,
    pub average_rating: f64,
    pub rating_count: usize,
}
