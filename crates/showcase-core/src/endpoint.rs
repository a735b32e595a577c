//! Absolute address of the listing endpoint.
//!
//! The page shell fetches the listing over HTTP from the same origin that
//! served the page, so the address is rebuilt from the incoming request on
//! every render.

use std::fmt;

use crate::config::EndpointConfig;
use crate::context::RequestContext;

/// Resolved `{protocol}://{host}{path}` of the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEndpoint {
    pub protocol: String,
    pub host: String,
    pub path: String,
}

impl ListingEndpoint {
    /// Build the endpoint from request headers, falling back to `config`
    /// for any header that is missing or blank.
    pub fn resolve(ctx: &RequestContext, config: &EndpointConfig) -> Self {
        let host = non_blank(ctx.header("host")).unwrap_or(&config.default_host);

        // Proxies may append protocols ("https,http"); the first hop wins.
        let protocol = non_blank(ctx.header("x-forwarded-proto"))
            .and_then(|p| p.split(',').next())
            .map(str::trim)
            .unwrap_or(&config.default_protocol);

        Self {
            protocol: protocol.to_ascii_lowercase(),
            host: host.to_string(),
            path: config.listing_path.clone(),
        }
    }

    /// Origin without the path.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.protocol, self.host)
    }

    /// Full URL of the listing endpoint.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url(), self.path)
    }
}

impl fmt::Display for ListingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
