//! Observability for the product card showcase.
//!
//! - `StructuredLogger` - Request-scoped structured logging
//! - `MetricsCollector` - Shell, section and listing fetch timings

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;
