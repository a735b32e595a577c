//! Listing sources and fallback loading.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use showcase_catalog::{ListingProvider, ListingResponse, ProductRecord};
use showcase_core::ListingEndpoint;

use crate::client::{FetchClient, FetchError};

/// Somewhere the page can load its listing from.
#[async_trait(?Send)]
pub trait ListingSource {
    /// Human-readable location, used in logs and metrics.
    fn location(&self) -> String;

    async fn load(&self) -> Result<ListingResponse, FetchError>;
}

/// Listing served by the JSON endpoint, fetched over HTTP.
pub struct HttpListingSource {
    client: FetchClient,
    endpoint: ListingEndpoint,
}

impl HttpListingSource {
    pub fn new(client: FetchClient, endpoint: ListingEndpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait(?Send)]
impl ListingSource for HttpListingSource {
    fn location(&self) -> String {
        self.endpoint.url()
    }

    async fn load(&self) -> Result<ListingResponse, FetchError> {
        self.client.fetch(&self.endpoint.url()).await
    }
}

/// Listing taken straight from an in-process provider.
pub struct InlineListingSource<P> {
    provider: P,
}

impl<P: ListingProvider> InlineListingSource<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait(?Send)]
impl<P: ListingProvider> ListingSource for InlineListingSource<P> {
    fn location(&self) -> String {
        "inline".to_string()
    }

    async fn load(&self) -> Result<ListingResponse, FetchError> {
        Ok(ListingResponse::from_provider(&self.provider))
    }
}

/// Result of `load_listing`.
#[derive(Debug)]
pub struct ListingLoad {
    pub products: Vec<ProductRecord>,
    /// Where the primary attempt went.
    pub location: String,
    pub duration: Duration,
    /// Set when the primary source failed and `fallback` was used.
    pub error: Option<FetchError>,
}

impl ListingLoad {
    pub fn used_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Load from `source` once; on any failure take the listing from `fallback`.
pub async fn load_listing(
    source: &dyn ListingSource,
    fallback: &dyn ListingProvider,
) -> ListingLoad {
    let location = source.location();
    let start = Instant::now();
    let result = source.load().await;
    let duration = start.elapsed();

    match result {
        Ok(listing) => ListingLoad {
            products: listing.products,
            location,
            duration,
            error: None,
        },
        Err(error) => ListingLoad {
            products: fallback.list_products(),
            location,
            duration,
            error: Some(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use showcase_catalog::StaticListing;

    struct Unreachable;

    #[async_trait(?Send)]
    impl ListingSource for Unreachable {
        fn location(&self) -> String {
            "http://localhost:3000/api/products".to_string()
        }

        async fn load(&self) -> Result<ListingResponse, FetchError> {
            Err(FetchError::Request("connection refused".to_string()))
        }
    }

    struct Single;

    impl ListingProvider for Single {
        fn list_products(&self) -> Vec<ProductRecord> {
            vec![ProductRecord::new("only", "Only Product", 1.0, "x")]
        }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let source = InlineListingSource::new(Single);
        let load = block_on(load_listing(&source, &StaticListing));

        assert!(!load.used_fallback());
        assert_eq!(load.location, "inline");
        assert_eq!(load.products.len(), 1);
        assert_eq!(load.products[0].id.as_str(), "only");
    }

    #[test]
    fn test_failure_uses_fallback_and_keeps_error() {
        let load = block_on(load_listing(&Unreachable, &StaticListing));

        assert!(load.used_fallback());
        assert_eq!(load.products.len(), 10);
        assert_eq!(load.location, "http://localhost:3000/api/products");
        assert!(matches!(load.error, Some(FetchError::Request(_))));
    }
}
