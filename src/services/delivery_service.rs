use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::models::{
    is_valid_rating, validate_dish_price, validate_name, DeliveryError, DeliveryReport,
    DeliveryResult, Dish, Order, OrderLine, OrderNumber, PlaceOrderRequest, RatedRestaurant, Restaurant,
};
use crate::observability::Metrics;
use crate::repositories::{Catalog, OrderBook};
use crate::services::ratings::{best_rated, rank_by_average};
use crate::services::scheduling::{select_orders, DeliveryRound};

/// Facade over the category, restaurant, dish and order indexes
#[derive(Debug, Default)]
pub struct DeliveryService {
    catalog: Catalog,
    orders: OrderBook,
    metrics: Option<Arc<Metrics>>,
}

impl DeliveryService {
    /// Create an empty service; order numbering starts at 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty service that reports to the given metrics
    pub fn with_metrics(metrics: Arc<Metrics>) -> Self {
        Self {
            metrics: Some(metrics),
            ..Self::default()
        }
    }

    fn record_catalog_operation<T>(&self, operation: &str, result: &DeliveryResult<T>) {
        if let Some(ref metrics) = self.metrics {
            metrics.record_catalog_operation(operation, result.is_ok());
        }
        if let Err(e) = result {
            warn!(operation = operation, error = %e, kind = e.kind(), "Catalog operation rejected");
        }
    }

    fn update_pending_gauge(&self) {
        if let Some(ref metrics) = self.metrics {
            metrics.set_pending_orders(self.orders.pending_count());
        }
    }

    // Categories

    /// Register a new category
    #[instrument(skip(self))]
    pub fn add_category(&mut self, name: &str) -> DeliveryResult<()> {
        let result = validate_name("category_name", name)
            .map_err(Into::into)
            .and_then(|_| self.catalog.insert_category(name));
        self.record_catalog_operation("add_category", &result);

        if result.is_ok() {
            info!("Category registered");
        }
        result
    }

    /// All category names in ascending order
    pub fn categories(&self) -> Vec<String> {
        self.catalog.category_names().map(str::to_string).collect()
    }

    // Restaurants

    /// Register a restaurant under an existing category
    #[instrument(skip(self))]
    pub fn add_restaurant(&mut self, name: &str, category: &str) -> DeliveryResult<()> {
        let result = validate_name("restaurant_name", name)
            .map_err(Into::into)
            .and_then(|_| self.catalog.insert_restaurant(name, category));
        self.record_catalog_operation("add_restaurant", &result);

        if result.is_ok() {
            info!("Restaurant registered");
        }
        result
    }

    /// Restaurant names of a category in ascending order, empty for unknown categories
    pub fn restaurants_for_category(&self, category: &str) -> Vec<String> {
        let mut names = self.catalog.restaurants_in_category(category).to_vec();
        names.sort();
        names
    }

    pub fn restaurant(&self, name: &str) -> Option<&Restaurant> {
        self.catalog.restaurant(name)
    }

    // Dishes

    /// Add a dish to a restaurant's menu
    #[instrument(skip(self))]
    pub fn add_dish(&mut self, name: &str, restaurant: &str, price: Decimal) -> DeliveryResult<()> {
        let result = validate_name("dish_name", name)
            .and_then(|_| validate_dish_price(&price))
            .map_err(Into::into)
            .and_then(|_| self.catalog.insert_dish(name, restaurant, price));
        self.record_catalog_operation("add_dish", &result);

        if result.is_ok() {
            info!("Dish added");
        }
        result
    }

    /// Dish names of a restaurant in ascending order, empty for unknown restaurants
    pub fn dishes_for_restaurant(&self, restaurant: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .catalog
            .dishes_of(restaurant)
            .iter()
            .map(|dish| dish.name.clone())
            .collect();
        names.sort();
        names
    }

    /// All dish names sold in a category.
    ///
    /// Restaurants are visited in registration order and each menu in
    /// insertion order. Unknown categories yield an empty list.
    pub fn dishes_by_category(&self, category: &str) -> Vec<String> {
        self.catalog
            .restaurants_in_category(category)
            .iter()
            .flat_map(|restaurant| self.catalog.dishes_of(restaurant))
            .map(|dish| dish.name.clone())
            .collect()
    }

    /// Dish names priced within [min_price, max_price], keyed by restaurant.
    ///
    /// Restaurants without a matching dish are left out.
    #[instrument(skip(self))]
    pub fn dishes_by_price(
        &self,
        min_price: Decimal,
        max_price: Decimal,
    ) -> BTreeMap<String, Vec<String>> {
        let mut by_restaurant = BTreeMap::new();

        for (restaurant, menu) in self.catalog.menus() {
            let matching: Vec<String> = menu
                .iter()
                .filter(|dish| dish.is_priced_within(min_price, max_price))
                .map(|dish| dish.name.clone())
                .collect();

            if !matching.is_empty() {
                by_restaurant.insert(restaurant.to_string(), matching);
            }
        }

        debug!("{} restaurants with dishes in price range", by_restaurant.len());
        by_restaurant
    }

    pub fn dish(&self, restaurant: &str, name: &str) -> Option<&Dish> {
        self.catalog.dish(restaurant, name)
    }

    // Orders

    /// Place an order and return its number.
    ///
    /// Only the restaurant is checked; dish names, quantities, delivery hour
    /// and distance are stored as given.
    #[instrument(skip(self, request), fields(restaurant = %request.restaurant, customer = %request.customer))]
    pub fn place_order(&mut self, request: PlaceOrderRequest) -> DeliveryResult<OrderNumber> {
        if self.catalog.restaurant(&request.restaurant).is_none() {
            let error = DeliveryError::UnknownRestaurant {
                name: request.restaurant.clone(),
            };
            warn!(error = %error, "Order rejected");
            return Err(error);
        }

        let number = self.orders.place(request);

        if let Some(ref metrics) = self.metrics {
            metrics.record_order_placed();
        }
        self.update_pending_gauge();

        info!(order_number = number, "Order placed");
        Ok(number)
    }

    /// Place an order from co-indexed dish and quantity sequences
    pub fn add_order<S: AsRef<str>>(
        &mut self,
        dish_names: &[S],
        quantities: &[i32],
        customer: &str,
        restaurant: &str,
        delivery_time: i32,
        delivery_distance: i32,
    ) -> DeliveryResult<OrderNumber> {
        self.place_order(PlaceOrderRequest::from_parallel(
            dish_names,
            quantities,
            customer,
            restaurant,
            delivery_time,
            delivery_distance,
        ))
    }

    /// Place an order from (dish, quantity) lines
    pub fn add_order_lines<L>(
        &mut self,
        lines: L,
        customer: &str,
        restaurant: &str,
        delivery_time: i32,
        delivery_distance: i32,
    ) -> DeliveryResult<OrderNumber>
    where
        L: IntoIterator,
        L::Item: Into<OrderLine>,
    {
        self.place_order(PlaceOrderRequest {
            lines: lines.into_iter().map(Into::into).collect(),
            customer: customer.to_string(),
            restaurant: restaurant.to_string(),
            delivery_time,
            delivery_distance,
        })
    }

    pub fn order(&self, number: OrderNumber) -> Option<&Order> {
        self.orders.get(number)
    }

    /// Number of orders ever placed
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of orders not yet assigned to a delivery
    pub fn pending_orders(&self) -> usize {
        self.orders.pending_count()
    }

    // Scheduling

    /// Assign orders to a delivery round and return their numbers in arrival order.
    ///
    /// Picks the first `max_orders` unassigned orders due at `delivery_time`
    /// whose distance is at most `max_distance`. A returned order is never
    /// returned again.
    #[instrument(skip(self))]
    pub fn schedule_delivery(
        &mut self,
        delivery_time: i32,
        max_distance: i32,
        max_orders: i32,
    ) -> Vec<OrderNumber> {
        let round = DeliveryRound::new(delivery_time, max_distance, max_orders);
        let selected = select_orders(self.orders.iter(), &round);
        let assigned = self.orders.mark_assigned(&selected);

        if let Some(ref metrics) = self.metrics {
            metrics.record_orders_assigned(assigned);
        }
        self.update_pending_gauge();

        info!(
            assigned = assigned,
            pending = self.orders.pending_count(),
            "Delivery scheduled"
        );
        selected
    }

    // Ratings

    /// Record a rating for a restaurant.
    ///
    /// Ratings outside 0..=5 are discarded without error; an unknown
    /// restaurant is an error.
    #[instrument(skip(self))]
    pub fn set_rating(&mut self, restaurant: &str, rating: i32) -> DeliveryResult<()> {
        let target = match self.catalog.restaurant_mut(restaurant) {
            Ok(target) => target,
            Err(e) => {
                warn!(error = %e, "Rating rejected");
                return Err(e);
            }
        };

        let recorded = is_valid_rating(rating);
        if recorded {
            target.add_rating(rating);
            debug!("Rating recorded");
        } else {
            debug!("Rating out of range, discarded");
        }

        if let Some(ref metrics) = self.metrics {
            metrics.record_rating(recorded);
        }
        Ok(())
    }

    /// Mean rating of a restaurant, 0.0 when unrated, `None` when unknown
    pub fn average_rating(&self, restaurant: &str) -> Option<f64> {
        self.catalog.restaurant(restaurant).map(Restaurant::average_rating)
    }

    /// Names of restaurants with an average above 0, best first.
    ///
    /// Equal averages are ordered by rating count (more first), and only then
    /// by registration order. The count comes before registration order so that
    /// [5, 3] ranks below [4, 4, 4]; a plain stable sort on the average alone
    /// would keep registration order there.
    pub fn restaurants_by_average_rating(&self) -> Vec<String> {
        rank_by_average(self.catalog.restaurants_by_registration())
            .into_iter()
            .map(|restaurant| restaurant.name.clone())
            .collect()
    }

    /// The restaurant with the highest average rating, if any is rated above 0.
    ///
    /// Restaurants are visited in name order and a later one only wins when
    /// strictly better.
    pub fn best_restaurant(&self) -> Option<String> {
        best_rated(self.catalog.restaurants()).map(|restaurant| restaurant.name.clone())
    }

    // Aggregation

    /// Number of orders per category; every registered category is present
    pub fn orders_per_category(&self) -> BTreeMap<String, u64> {
        let mut counts: BTreeMap<String, u64> = self
            .catalog
            .category_names()
            .map(|category| (category.to_string(), 0))
            .collect();

        for order in self.orders.iter() {
            if let Some(restaurant) = self.catalog.restaurant(&order.restaurant) {
                *counts.entry(restaurant.category.clone()).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Snapshot of categories, orders and ratings
    pub fn report(&self) -> DeliveryReport {
        DeliveryReport {
            categories: self.categories(),
            restaurant_count: self.catalog.restaurant_count(),
            total_orders: self.order_count(),
            pending_orders: self.pending_orders(),
            orders_per_category: self.orders_per_category(),
            rating_ranking: rank_by_average(self.catalog.restaurants_by_registration())
                .into_iter()
                .map(RatedRestaurant::from)
                .collect(),
            best_restaurant: self.best_restaurant(),
        }
    }
}
