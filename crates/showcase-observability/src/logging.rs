//! Per-request structured logging.
//!
//! Entries go to stderr, where Spin captures them, either as one JSON object
//! per line or as a short human-readable line. `LogFormat::Tracing` hands
//! them to the `tracing` facade instead.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::{json, Value};
use showcase_core::{LoggingConfig, RequestId};

type Fields = BTreeMap<String, Value>;

/// Log level, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Case-insensitive; `warning` is accepted for `warn`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Where and how entries are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line on stderr.
    #[default]
    Json,
    /// `[LEVEL] message` lines on stderr.
    Human,
    /// Requires a subscriber installed by the host.
    Tracing,
}

impl LogFormat {
    /// Case-insensitive; `pretty` is accepted for `human`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "human" | "pretty" => Some(Self::Human),
            "tracing" => Some(Self::Tracing),
            _ => None,
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Severity.
    pub level: LogLevel,
    /// Human-readable message.
    pub message: String,
    /// Request ID for correlation.
    pub request_id: String,
    /// Workload name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    /// Request path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Structured fields, flattened into the JSON object.
    #[serde(flatten)]
    pub fields: Fields,
    /// Microseconds since the request's logger was created.
    pub elapsed_us: u64,
}

impl LogEntry {
    /// Format as a single-line JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// `[LEVEL] message (Nus) | k=v k=v`
    pub fn to_human(&self) -> String {
        let mut line = format!("[{}] {} ({}us)", self.level.label(), self.message, self.elapsed_us);
        if !self.fields.is_empty() {
            let pairs: Vec<String> = self.fields.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            line.push_str(" | ");
            line.push_str(&pairs.join(" "));
        }
        line
    }
}

/// Logger for one request: every entry carries its request id, and the
/// workload and route once set.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    created: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    /// Logger at `info` level writing JSON.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            created: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Unknown format or level names leave the current setting alone.
    pub fn with_config(mut self, config: &LoggingConfig) -> Self {
        self.format = LogFormat::parse(&config.format).unwrap_or(self.format);
        self.min_level = LogLevel::parse(&config.min_level).unwrap_or(self.min_level);
        self
    }

    /// Attach the workload name to every entry.
    pub fn with_workload(mut self, workload: impl Into<String>) -> Self {
        self.workload = Some(workload.into());
        self
    }

    /// Attach the request path to every entry.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Drop entries below `level`.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Whether entries at `level` are written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Request ID stamped on every entry.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.debug_builder(message).emit();
    }

    /// Start a debug entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }

    /// Start an info entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start a warning entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start an error entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    fn entry(&self, level: LogLevel, message: String, fields: Fields) -> Option<LogEntry> {
        self.enabled(level).then(|| LogEntry {
            level,
            message,
            request_id: self.request_id.to_string(),
            workload: self.workload.clone(),
            route: self.route.clone(),
            fields,
            elapsed_us: self.created.elapsed().as_micros() as u64,
        })
    }

    fn write(&self, entry: &LogEntry) {
        match self.format {
            LogFormat::Json => eprintln!("{}", entry.to_json()),
            LogFormat::Human => eprintln!("{}", entry.to_human()),
            LogFormat::Tracing => forward_to_tracing(entry),
        }
    }
}

fn forward_to_tracing(entry: &LogEntry) {
    let fields = serde_json::to_string(&entry.fields).unwrap_or_default();
    let request_id = entry.request_id.as_str();
    let route = entry.route.as_deref().unwrap_or("");
    let message = entry.message.as_str();

    match entry.level {
        LogLevel::Debug => tracing::debug!(%request_id, %route, %fields, "{}", message),
        LogLevel::Info => tracing::info!(%request_id, %route, %fields, "{}", message),
        LogLevel::Warn => tracing::warn!(%request_id, %route, %fields, "{}", message),
        LogLevel::Error => tracing::error!(%request_id, %route, %fields, "{}", message),
    }
}

/// Fluent entry construction: `logger.info_builder(..).field(..).emit()`.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: Fields,
}

impl<'a> LogBuilder<'a> {
    fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: Fields::new(),
        }
    }

    fn with(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a string field.
    pub fn field(self, key: &str, value: impl Into<String>) -> Self {
        self.with(key, Value::String(value.into()))
    }

    /// Add an integer field.
    pub fn field_u64(self, key: &str, value: u64) -> Self {
        self.with(key, json!(value))
    }

    /// Add a boolean field.
    pub fn field_bool(self, key: &str, value: bool) -> Self {
        self.with(key, Value::Bool(value))
    }

    /// Add a duration field, in whole milliseconds.
    pub fn duration_ms(self, key: &str, duration: Duration) -> Self {
        self.with(key, json!(duration.as_millis() as u64))
    }

    /// The entry `emit` would write; `None` below the minimum level.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, self.message, self.fields)
    }

    /// Write the entry unless it is below the minimum level.
    pub fn emit(self) {
        let logger = self.logger;
        if let Some(entry) = self.build() {
            logger.write(&entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("req-1"))
            .with_workload("product-showcase")
            .with_route("/")
    }

    #[test]
    fn test_entries_below_min_level_are_dropped() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert_eq!(logger.request_id().0, "req-1");
        assert!(logger.debug_builder("noise").build().is_none());
        assert!(logger.info_builder("noise").build().is_none());
        assert!(logger.warn_builder("listing fetch failed").build().is_some());
    }

    #[test]
    fn test_json_entry_flattens_fields() {
        let entry = logger()
            .info_builder("Listing served")
            .field("endpoint", "/api/products")
            .field_u64("products", 10)
            .duration_ms("fetch_ms", Duration::from_millis(12))
            .build()
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["message"], "Listing served");
        assert_eq!(json["request_id"], "req-1");
        assert_eq!(json["workload"], "product-showcase");
        assert_eq!(json["route"], "/");
        assert_eq!(json["endpoint"], "/api/products");
        assert_eq!(json["products"], 10);
        assert_eq!(json["fetch_ms"], 12);
    }

    #[test]
    fn test_human_entry() {
        let entry = logger()
            .warn_builder("Listing fetch failed")
            .field_bool("fallback", true)
            .build()
            .unwrap();

        let line = entry.to_human();
        assert!(line.starts_with("[WARN] Listing fetch failed ("));
        assert!(line.ends_with("| fallback=true"));
    }

    #[test]
    fn test_config_applies_known_names_only() {
        let config = LoggingConfig {
            format: "human".to_string(),
            min_level: "debug".to_string(),
        };
        let logger = logger().with_config(&config);
        assert!(logger.enabled(LogLevel::Debug));

        let config = LoggingConfig {
            format: "xml".to_string(),
            min_level: "loud".to_string(),
        };
        let logger = StructuredLogger::new(RequestId::from_string("r")).with_config(&config);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Info));
    }

    #[test]
    fn test_level_and_format_parsing() {
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert_eq!(LogFormat::parse("Tracing"), Some(LogFormat::Tracing));
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Human));
    }
}
