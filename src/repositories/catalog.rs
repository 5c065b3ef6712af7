use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{DeliveryError, DeliveryResult, Dish, Restaurant};

/// In-memory category, restaurant and dish indexes.
///
/// Name-keyed maps iterate in ascending lexicographic order. Restaurant
/// buckets per category and dish lists per restaurant keep insertion order.
#[derive(Debug, Default)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<String>>,
    restaurants: BTreeMap<String, Restaurant>,
    dishes: BTreeMap<String, Vec<Dish>>,
    registration_order: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category with an empty restaurant bucket
    pub fn insert_category(&mut self, name: &str) -> DeliveryResult<()> {
        if self.categories.contains_key(name) {
            return Err(DeliveryError::DuplicateCategory {
                name: name.to_string(),
            });
        }
        self.categories.insert(name.to_string(), Vec::new());
        debug!(category = %name, "Category stored");
        Ok(())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Category names in ascending order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Restaurant names of a category in registration order, empty for unknown categories
    pub fn restaurants_in_category(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Register a restaurant under an existing category with an empty dish list
    pub fn insert_restaurant(&mut self, name: &str, category: &str) -> DeliveryResult<()> {
        let bucket = self
            .categories
            .get_mut(category)
            .ok_or_else(|| DeliveryError::UnknownCategory {
                name: category.to_string(),
            })?;

        if self.restaurants.contains_key(name) {
            return Err(DeliveryError::DuplicateRestaurant {
                name: name.to_string(),
            });
        }

        bucket.push(name.to_string());
        self.restaurants.insert(
            name.to_string(),
            Restaurant::new(name.to_string(), category.to_string()),
        );
        self.dishes.insert(name.to_string(), Vec::new());
        self.registration_order.push(name.to_string());
        debug!(restaurant = %name, category = %category, "Restaurant stored");
        Ok(())
    }

    pub fn restaurant(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.get(name)
    }

    pub fn restaurant_mut(&mut self, name: &str) -> DeliveryResult<&mut Restaurant> {
        self.restaurants
            .get_mut(name)
            .ok_or_else(|| DeliveryError::UnknownRestaurant {
                name: name.to_string(),
            })
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    /// Restaurants in ascending name order
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.values()
    }

    /// Restaurants in the order they were registered
    pub fn restaurants_by_registration(&self) -> impl Iterator<Item = &Restaurant> {
        self.registration_order
            .iter()
            .filter_map(|name| self.restaurants.get(name))
    }

    /// Append a dish to a restaurant's menu
    pub fn insert_dish(&mut self, name: &str, restaurant: &str, price: Decimal) -> DeliveryResult<()> {
        let menu = self
            .dishes
            .get_mut(restaurant)
            .ok_or_else(|| DeliveryError::UnknownRestaurant {
                name: restaurant.to_string(),
            })?;

        if menu.iter().any(|dish| dish.name == name) {
            return Err(DeliveryError::DuplicateDish {
                restaurant: restaurant.to_string(),
                dish: name.to_string(),
            });
        }

        menu.push(Dish::new(name.to_string(), restaurant.to_string(), price));
        debug!(dish = %name, restaurant = %restaurant, price = %price, "Dish stored");
        Ok(())
    }

    /// Dishes of a restaurant in insertion order, empty for unknown restaurants
    pub fn dishes_of(&self, restaurant: &str) -> &[Dish] {
        self.dishes
            .get(restaurant)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn dish(&self, restaurant: &str, name: &str) -> Option<&Dish> {
        self.dishes_of(restaurant).iter().find(|dish| dish.name == name)
    }

    /// Menus keyed by restaurant, in ascending restaurant name order
    pub fn menus(&self) -> impl Iterator<Item = (&str, &[Dish])> {
        self.dishes
            .iter()
            .map(|(restaurant, dishes)| (restaurant.as_str(), dishes.as_slice()))
    }
}
