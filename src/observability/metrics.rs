use prometheus::{CounterVec, Encoder, Gauge, Opts, Registry, TextEncoder};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to register metric: {0}")]
    Registration(#[from] prometheus::Error),
    #[error("Failed to encode metrics: {0}")]
    Encoding(String),
}

/// Prometheus metrics for the delivery service
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,

    pub catalog_operations_total: CounterVec,
    pub orders_total: CounterVec,
    pub ratings_total: CounterVec,
    pub pending_orders: Gauge,
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("families", &self.registry.gather().len())
            .finish()
    }
}

impl Metrics {
    /// Create a new metrics instance with all required metrics registered
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        info!("Initializing Prometheus metrics");

        let catalog_operations_total = CounterVec::new(
            Opts::new(
                "delivery_catalog_operations_total",
                "Total number of catalog registrations",
            ),
            &["operation", "status"],
        )?;

        let orders_total = CounterVec::new(
            Opts::new(
                "delivery_orders_total",
                "Total number of orders by lifecycle step",
            ),
            &["status"],
        )?;

        let ratings_total = CounterVec::new(
            Opts::new(
                "delivery_ratings_total",
                "Total number of restaurant ratings received",
            ),
            &["status"],
        )?;

        let pending_orders = Gauge::new(
            "delivery_pending_orders",
            "Number of orders not yet assigned to a delivery",
        )?;

        registry.register(Box::new(catalog_operations_total.clone()))?;
        registry.register(Box::new(orders_total.clone()))?;
        registry.register(Box::new(ratings_total.clone()))?;
        registry.register(Box::new(pending_orders.clone()))?;

        info!("Prometheus metrics initialized successfully");

        Ok(Metrics {
            registry,
            catalog_operations_total,
            orders_total,
            ratings_total,
            pending_orders,
        })
    }

    /// Get the metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encode all metrics in Prometheus text format
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| MetricsError::Encoding(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| MetricsError::Encoding(e.to_string()))
    }

    /// Record a category, restaurant or dish registration
    pub fn record_catalog_operation(&self, operation: &str, success: bool) {
        let status = if success { "success" } else { "error" };

        self.catalog_operations_total
            .with_label_values(&[operation, status])
            .inc();
    }

    pub fn record_order_placed(&self) {
        self.orders_total.with_label_values(&["placed"]).inc();
    }

    pub fn record_orders_assigned(&self, count: usize) {
        self.orders_total
            .with_label_values(&["assigned"])
            .inc_by(count as f64);
    }

    /// Record a rating, `recorded` is false when it was discarded as out of range
    pub fn record_rating(&self, recorded: bool) {
        let status = if recorded { "recorded" } else { "discarded" };

        self.ratings_total.with_label_values(&[status]).inc();
    }

    pub fn set_pending_orders(&self, count: usize) {
        self.pending_orders.set(count as f64);
    }
}
