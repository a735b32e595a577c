//! Workload manifest and error type.

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;

/// Workload manifest - the routes a deployable component answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadManifest {
    /// Unique name for this workload.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes this workload handles.
    pub routes: Vec<RouteConfig>,
}

impl WorkloadManifest {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Find the route whose pattern matches `path` exactly.
    pub fn route_for(&self, path: &str) -> Option<&RouteConfig> {
        self.routes.iter().find(|r| r.matches(path))
    }
}

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    /// Response head could not be built or sent.
    #[error("Response error: {0}")]
    Response(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_lookup() {
        let manifest = WorkloadManifest::new("product-showcase", "0.1.0")
            .with_route(RouteConfig::new("/", "page"))
            .with_route(RouteConfig::new("/api/products", "listing"));

        assert_eq!(manifest.route_for("/api/products").unwrap().handler, "listing");
        assert_eq!(manifest.route_for("/").unwrap().handler, "page");
        assert!(manifest.route_for("/cart").is_none());
    }
}
