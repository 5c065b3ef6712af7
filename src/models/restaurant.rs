use serde::{Deserialize, Serialize};

/// A named seller registered under exactly one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub category: String,
    pub ratings: Vec<i32>,
}

impl Restaurant {
    /// Create a restaurant with no ratings yet
    pub fn new(name: String, category: String) -> Self {
        Self {
            name,
            category,
            ratings: Vec::new(),
        }
    }

    /// Record a rating; range checks happen in the service
    pub fn add_rating(&mut self, rating: i32) {
        self.ratings.push(rating);
    }

    /// Arithmetic mean of the recorded ratings, 0.0 when there are none
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.ratings.iter().map(|&r| i64::from(r)).sum();
        sum as f64 / self.ratings.len() as f64
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_rated(&self) -> bool {
        self.average_rating() > 0.0
    }
}
