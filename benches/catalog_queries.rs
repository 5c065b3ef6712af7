use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;

use delivery_rs::DeliveryService;

const CATEGORIES: [&str; 4] = ["Pizza", "Sushi", "Burger", "Curry"];

fn setup_catalog(num_restaurants: usize, dishes_per_restaurant: usize) -> DeliveryService {
    let mut service = DeliveryService::new();
    for category in CATEGORIES {
        service.add_category(category).unwrap();
    }

    for r in 0..num_restaurants {
        let restaurant = format!("Restaurant {:05}", r);
        service
            .add_restaurant(&restaurant, CATEGORIES[r % CATEGORIES.len()])
            .unwrap();

        for d in 0..dishes_per_restaurant {
            let price = dec!(2.50) + Decimal::from((r + d) % 30);
            service
                .add_dish(&format!("Dish {:03}", d), &restaurant, price)
                .unwrap();
        }

        for rating in 0..(r % 5) {
            service.set_rating(&restaurant, (rating % 6) as i32).unwrap();
        }
    }

    service
}

fn bench_dishes_by_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("dishes_by_price");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));

    for dataset_size in [10, 100, 1000].iter() {
        let service = setup_catalog(*dataset_size, 20);
        group.bench_with_input(
            BenchmarkId::new("restaurants", dataset_size),
            &service,
            |b, service| b.iter(|| service.dishes_by_price(black_box(dec!(5.00)), dec!(15.00))),
        );
    }

    group.finish();
}

fn bench_category_queries(c: &mut Criterion) {
    let service = setup_catalog(1000, 20);

    c.bench_function("dishes_by_category_1000", |b| {
        b.iter(|| service.dishes_by_category(black_box("Sushi")))
    });

    c.bench_function("restaurants_for_category_1000", |b| {
        b.iter(|| service.restaurants_for_category(black_box("Pizza")))
    });
}

fn bench_rating_queries(c: &mut Criterion) {
    let service = setup_catalog(1000, 1);

    c.bench_function("restaurants_by_average_rating_1000", |b| {
        b.iter(|| black_box(service.restaurants_by_average_rating()))
    });

    c.bench_function("best_restaurant_1000", |b| {
        b.iter(|| black_box(service.best_restaurant()))
    });
}

criterion_group!(
    benches,
    bench_dishes_by_price,
    bench_category_queries,
    bench_rating_queries
);
criterion_main!(benches);
