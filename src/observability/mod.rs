pub mod logging;
pub mod metrics;

pub use logging::{default_filter_directive, init_observability, ObservabilityError};
pub use metrics::{Metrics, MetricsError};
