//! Per-request timing metrics, printed once the response is done.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use showcase_core::RequestId;

/// Offsets are microseconds from the moment the collector was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Workload name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    /// Request path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Final HTTP status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Time until the shell was flushed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time until the first section was flushed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_section_us: Option<u64>,
    /// Time until `finalize`.
    pub total_duration_us: u64,
    /// In the order they were flushed.
    pub sections: Vec<SectionMetrics>,
    /// The page's listing fetch; absent on other routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_fetch: Option<FetchMetrics>,
}

/// Metrics for one streamed section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    /// Section name.
    pub name: String,
    /// Flush offset.
    pub sent_us: u64,
    /// Size of the section HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Rendered from the in-process listing instead of the fetched one.
    pub used_fallback: bool,
}

/// Metrics for one outbound fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchMetrics {
    /// URL, or `inline` for an in-process source.
    pub location: String,
    /// Time the fetch took.
    pub duration_us: u64,
    /// Failure message, if the fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FetchMetrics {
    /// Whether the fetch returned a listing.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Collects metrics over one request; `finalize` produces the record.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    start: Instant,
    shell_sent: Option<Duration>,
    sections: Vec<SectionMetrics>,
    listing_fetch: Option<FetchMetrics>,
}

impl MetricsCollector {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            start: Instant::now(),
            shell_sent: None,
            sections: Vec::new(),
            listing_fetch: None,
        }
    }

    /// Set the workload name.
    pub fn set_workload(&mut self, workload: impl Into<String>) {
        self.workload = Some(workload.into());
    }

    /// Set the request path.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record that the shell was flushed.
    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(self.start.elapsed());
    }

    /// Record that a section was flushed.
    pub fn record_section_sent(&mut self, name: &str, bytes: Option<usize>, used_fallback: bool) {
        self.sections.push(SectionMetrics {
            name: name.to_string(),
            sent_us: micros(self.start.elapsed()),
            bytes,
            used_fallback,
        });
    }

    /// The page loads its listing once; a second call replaces the first.
    pub fn record_listing_fetch(&mut self, location: &str, duration: Duration, error: Option<String>) {
        self.listing_fetch = Some(FetchMetrics {
            location: location.to_string(),
            duration_us: micros(duration),
            error,
        });
    }

    /// Stop the clock and produce the metrics record.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        RequestMetrics {
            request_id: self.request_id.to_string(),
            workload: self.workload,
            route: self.route,
            status_code,
            time_to_shell_us: self.shell_sent.map(micros),
            time_to_first_section_us: self.sections.first().map(|s| s.sent_us),
            total_duration_us: micros(self.start.elapsed()),
            sections: self.sections,
            listing_fetch: self.listing_fetch,
        }
    }
}

fn micros(d: Duration) -> u64 {
    d.as_micros() as u64
}

fn with_ms(us: u64) -> String {
    format!("{}us ({:.2}ms)", us, us as f64 / 1000.0)
}

impl RequestMetrics {
    /// Format as a single-line JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Multi-line summary for `LogFormat::Human`.
    pub fn to_summary(&self) -> String {
        let mut out = format!("Request: {}", self.request_id);
        if let Some(status) = self.status_code {
            let _ = write!(out, " -> {}", status);
        }

        if let Some(tts) = self.time_to_shell_us {
            let _ = write!(out, "\n  Time to shell: {}", with_ms(tts));
        }
        if let Some(ttfs) = self.time_to_first_section_us {
            let _ = write!(out, "\n  Time to first section: {}", with_ms(ttfs));
        }
        let _ = write!(out, "\n  Total: {}", with_ms(self.total_duration_us));

        for section in &self.sections {
            let _ = write!(out, "\n  Section {}: sent at {}us", section.name, section.sent_us);
            if let Some(bytes) = section.bytes {
                let _ = write!(out, " {}B", bytes);
            }
            if section.used_fallback {
                out.push_str(" [fallback]");
            }
        }

        if let Some(fetch) = &self.listing_fetch {
            let outcome = if fetch.succeeded() { "ok" } else { "FAILED" };
            let _ = write!(
                out,
                "\n  Listing fetch [{}] {}us - {}",
                outcome, fetch.duration_us, fetch.location
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_collects_sections_and_fetch() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-9"));
        metrics.set_workload("product-showcase");
        metrics.set_route("/");
        metrics.record_shell_sent();
        metrics.record_listing_fetch(
            "http://localhost:3000/api/products",
            Duration::from_millis(3),
            Some("connection refused".to_string()),
        );
        metrics.record_section_sent("products", Some(2048), true);

        let result = metrics.finalize(Some(200));
        assert_eq!(result.request_id, "req-9");
        assert!(result.time_to_shell_us.is_some());
        assert_eq!(result.time_to_first_section_us, Some(result.sections[0].sent_us));
        assert!(result.sections[0].used_fallback);

        let fetch = result.listing_fetch.as_ref().unwrap();
        assert!(!fetch.succeeded());
        assert_eq!(fetch.duration_us, 3000);

        let summary = result.to_summary();
        assert!(summary.starts_with("Request: req-9 -> 200"));
        assert!(summary.contains("Section products: sent at"));
        assert!(summary.contains("2048B [fallback]"));
        assert!(summary.contains("Listing fetch [FAILED] 3000us - http://localhost:3000/api/products"));
    }

    #[test]
    fn test_json_skips_unset_fields() {
        let result = MetricsCollector::new(RequestId::from_string("r")).finalize(None);
        let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();
        assert!(json.get("time_to_shell_us").is_none());
        assert!(json.get("status_code").is_none());
        assert!(json.get("listing_fetch").is_none());
        assert_eq!(json["request_id"], "r");
        assert_eq!(json["sections"], serde_json::json!([]));
    }
}
