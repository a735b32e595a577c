//! Request context with typed headers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::lifecycle::TimingContext;

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            next_seed(),
            next_seed()
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Linear congruential step over a shared seed (no OS randomness in WASI).
fn next_seed() -> u32 {
    static SEED: AtomicU32 = AtomicU32::new(12345);
    let previous = SEED
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
            Some(s.wrapping_mul(1103515245).wrapping_add(12345))
        })
        .unwrap_or(12345);
    previous.wrapping_mul(1103515245).wrapping_add(12345)
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HTTP headers, keyed by the name as received.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl Method {
    /// Parse a method name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "HEAD" => Some(Self::Head),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "PATCH" => Some(Self::Patch),
            "OPTIONS" => Some(Self::Options),
            _ => None,
        }
    }

    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
        }
    }
}

/// Typed request context passed to route handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path, without the query string.
    pub path: String,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context.
    ///
    /// Any query string on `path` is dropped; the showcase routes take no
    /// parameters.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = match path.split_once('?') {
            Some((p, _)) => p.to_string(),
            None => path,
        };

        Self {
            request_id: RequestId::generate(),
            method,
            path,
            headers: HashMap::new(),
            timing: TimingContext::new(),
        }
    }

    /// Attach a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_differ() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let ctx = RequestContext::new(Method::Get, "/")
            .with_header("Host", "shop.example.com")
            .with_header("X-Forwarded-Proto", "https");

        assert_eq!(ctx.header("host"), Some("shop.example.com"));
        assert_eq!(ctx.header("x-forwarded-proto"), Some("https"));
        assert_eq!(ctx.header("accept"), None);
    }

    #[test]
    fn test_query_string_is_dropped() {
        let ctx = RequestContext::new(Method::Get, "/api/products?page=2");
        assert_eq!(ctx.path, "/api/products");
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("get"), Some(Method::Get));
        assert_eq!(Method::parse("POST"), Some(Method::Post));
        assert_eq!(Method::parse("BREW"), None);
        assert_eq!(Method::Head.as_str(), "HEAD");
    }
}
