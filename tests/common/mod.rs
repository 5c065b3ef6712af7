#![allow(dead_code)]

use delivery_rs::DeliveryService;
use rust_decimal::Decimal;

/// Service with the given categories registered
pub fn service_with_categories(categories: &[&str]) -> DeliveryService {
    let mut service = DeliveryService::new();
    for category in categories {
        service
            .add_category(category)
            .expect("category registration should succeed");
    }
    service
}

/// Service built from (restaurant, category) pairs, registering categories on first use
pub fn service_with_restaurants(restaurants: &[(&str, &str)]) -> DeliveryService {
    let mut service = DeliveryService::new();
    for (restaurant, category) in restaurants {
        if !service.categories().iter().any(|c| c.as_str() == *category) {
            service
                .add_category(category)
                .expect("category registration should succeed");
        }
        service
            .add_restaurant(restaurant, category)
            .expect("restaurant registration should succeed");
    }
    service
}

/// Add a menu of (dish, price) to a restaurant
pub fn add_menu(service: &mut DeliveryService, restaurant: &str, menu: &[(&str, Decimal)]) {
    for (dish, price) in menu {
        service
            .add_dish(dish, restaurant, *price)
            .expect("dish registration should succeed");
    }
}

/// Place a single-dish order and return its number
pub fn place_simple_order(
    service: &mut DeliveryService,
    restaurant: &str,
    delivery_time: i32,
    delivery_distance: i32,
) -> u32 {
    service
        .add_order(
            &["house special"],
            &[1],
            "Test Customer",
            restaurant,
            delivery_time,
            delivery_distance,
        )
        .expect("order placement should succeed")
}
