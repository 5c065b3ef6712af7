use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use delivery_rs::DeliveryService;

/// Service with `num_orders` orders spread over the evening hours and 0..20 km
fn setup_orders(num_orders: usize) -> DeliveryService {
    let mut service = DeliveryService::new();
    service.add_category("Pizza").unwrap();
    service.add_restaurant("Benchmark Pizzeria", "Pizza").unwrap();

    for i in 0..num_orders {
        let delivery_time = 18 + (i % 6) as i32;
        let delivery_distance = (i % 20) as i32;
        service
            .add_order(
                &["margherita", "cola"],
                &[1, 2],
                &format!("Customer {}", i),
                "Benchmark Pizzeria",
                delivery_time,
                delivery_distance,
            )
            .unwrap();
    }

    service
}

fn bench_schedule_delivery(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_delivery");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));

    for dataset_size in [100, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("dataset_size", dataset_size),
            dataset_size,
            |b, &size| {
                b.iter_batched(
                    || setup_orders(size),
                    |mut service| {
                        // Drain the 20:00 slot in rounds of 10
                        loop {
                            let round = service.schedule_delivery(black_box(20), 10, 10);
                            if round.is_empty() {
                                break;
                            }
                        }
                        service
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_pending_orders(c: &mut Criterion) {
    let service = setup_orders(10000);

    c.bench_function("pending_orders_10000", |b| {
        b.iter(|| black_box(service.pending_orders()))
    });
}

criterion_group!(benches, bench_schedule_delivery, bench_pending_orders);
criterion_main!(benches);
