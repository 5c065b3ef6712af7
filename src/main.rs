use anyhow::Context;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::{debug, info};

use delivery_rs::{init_observability, Config, DeliveryService, Metrics};

fn main() -> anyhow::Result<()> {
    let config = Config::from_environment().context("failed to load configuration")?;

    init_observability(
        &config.observability.service_name,
        &config.observability.service_version,
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )?;

    info!(
        "Starting {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let metrics = if config.observability.enable_metrics {
        Some(Arc::new(Metrics::new()?))
    } else {
        info!("Metrics disabled");
        None
    };

    let mut service = match metrics.clone() {
        Some(metrics) => DeliveryService::with_metrics(metrics),
        None => DeliveryService::new(),
    };

    seed_demo_catalog(&mut service)?;
    run_demo_evening(&mut service)?;

    let report = service.report();
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(metrics) = metrics {
        debug!("Metrics snapshot:\n{}", metrics.encode()?);
    }

    info!("Demo run complete");
    Ok(())
}

fn seed_demo_catalog(service: &mut DeliveryService) -> anyhow::Result<()> {
    for category in ["Pizza", "Sushi", "Burger"] {
        service.add_category(category)?;
    }

    service.add_restaurant("Da Mario", "Pizza")?;
    service.add_restaurant("Forno Rosso", "Pizza")?;
    service.add_restaurant("Kyoto Bar", "Sushi")?;

    service.add_dish("margherita", "Da Mario", dec!(5.00))?;
    service.add_dish("marinara", "Da Mario", dec!(4.00))?;
    service.add_dish("truffle", "Da Mario", dec!(20.00))?;
    service.add_dish("diavola", "Forno Rosso", dec!(7.50))?;
    service.add_dish("ramen", "Kyoto Bar", dec!(12.00))?;
    service.add_dish("nigiri", "Kyoto Bar", dec!(3.50))?;

    info!(
        "Demo catalog seeded with {} categories",
        service.categories().len()
    );
    Ok(())
}

fn run_demo_evening(service: &mut DeliveryService) -> anyhow::Result<()> {
    service.add_order(&["margherita", "marinara"], &[2, 1], "Alice", "Da Mario", 20, 3)?;
    service.add_order(&["diavola"], &[1], "Bob", "Forno Rosso", 20, 10)?;
    service.add_order(&["ramen", "nigiri"], &[1, 6], "Carol", "Kyoto Bar", 20, 4)?;
    service.add_order(&["truffle"], &[1], "Dave", "Da Mario", 21, 2)?;

    let first_round = service.schedule_delivery(20, 5, 2);
    info!("First delivery round: {:?}", first_round);

    for (restaurant, rating) in [
        ("Da Mario", 5),
        ("Da Mario", 3),
        ("Kyoto Bar", 4),
        ("Kyoto Bar", 4),
        ("Kyoto Bar", 4),
        ("Forno Rosso", 7),
    ] {
        service.set_rating(restaurant, rating)?;
    }

    info!(
        "Pending orders after first round: {}",
        service.pending_orders()
    );
    Ok(())
}
