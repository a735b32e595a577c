//! Product Card Showcase workload.
//!
//! Serves:
//! - `GET /api/products` - JSON listing from the in-process catalog
//! - `GET /` - Streamed page: shell, product grid, footer
//!
//! The page fetches the listing from its own origin and falls back to the
//! in-process catalog when that fetch fails.

mod listing;
mod page;
mod response;

use http::StatusCode;
use spin_sdk::http::{IncomingRequest, Method as SpinMethod, ResponseOutparam};
use spin_sdk::http_component;

use showcase_core::{
    ConfigError, Method, RequestContext, RequestId, RouteConfig, ShowcaseConfig,
    WorkloadManifest,
};
use showcase_observability::{LogFormat, MetricsCollector, StructuredLogger};

use response::respond_plain;

const WORKLOAD: &str = "product-showcase";
const CONFIG_SOURCE: &str = include_str!("../showcase.toml");

const LISTING_HANDLER: &str = "listing";
const PAGE_HANDLER: &str = "page";

/// Main HTTP handler.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (ShowcaseConfig::default(), Some(e)),
    };

    let path = req.path_with_query().unwrap_or_default();
    let spin_method = req.method();
    let Some(method) = core_method(&spin_method) else {
        let logger = StructuredLogger::new(RequestId::generate())
            .with_config(&config.logging)
            .with_workload(WORKLOAD)
            .with_route(path.as_str());
        logger
            .warn_builder("Unsupported method")
            .field("method", method_name(&spin_method))
            .emit();

        let status = StatusCode::METHOD_NOT_ALLOWED;
        if let Err(e) = respond_plain(response_out, status, logger.request_id()).await {
            logger
                .error_builder("Request failed")
                .field("error", e.to_string())
                .emit();
        }
        return;
    };

    let ctx = req
        .headers()
        .entries()
        .into_iter()
        .fold(RequestContext::new(method, path), |ctx, (name, value)| {
            ctx.with_header(name, String::from_utf8_lossy(&value).into_owned())
        });
    let request_id = ctx.request_id.clone();

    let logger = StructuredLogger::new(request_id.clone())
        .with_config(&config.logging)
        .with_workload(WORKLOAD)
        .with_route(&ctx.path);

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_workload(WORKLOAD);
    metrics.set_route(&ctx.path);

    if let Some(e) = config_error {
        logger
            .warn_builder("Invalid embedded config, using defaults")
            .field("error", e.to_string())
            .emit();
    }

    logger
        .info_builder("Request started")
        .field("method", method.as_str())
        .emit();

    let manifest = manifest(&config);
    let status = match manifest.route_for(&ctx.path) {
        None => respond_plain(response_out, StatusCode::NOT_FOUND, &request_id).await,
        Some(route) if !route.allows(method.as_str()) => {
            respond_plain(response_out, StatusCode::METHOD_NOT_ALLOWED, &request_id).await
        }
        Some(route) if route.handler == LISTING_HANDLER => {
            listing::serve_listing(&ctx, &logger, response_out).await
        }
        Some(_) => page::serve_page(&ctx, &config, &logger, &mut metrics, response_out).await,
    };

    let status = match status {
        Ok(status) => status,
        Err(e) => {
            logger
                .error_builder("Request failed")
                .field("error", e.to_string())
                .emit();
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let final_metrics = metrics.finalize(Some(status.as_u16()));
    logger
        .info_builder("Request complete")
        .field_u64("status", status.as_u16() as u64)
        .emit();

    match LogFormat::parse(&config.logging.format) {
        Some(LogFormat::Human) => eprintln!("\n{}", final_metrics.to_summary()),
        _ => eprintln!("{}", final_metrics.to_json()),
    }
}

/// Parse the configuration embedded at build time.
fn load_config() -> Result<ShowcaseConfig, ConfigError> {
    ShowcaseConfig::from_toml_str(CONFIG_SOURCE)
}

/// Routes answered by this component.
fn manifest(config: &ShowcaseConfig) -> WorkloadManifest {
    WorkloadManifest::new(WORKLOAD, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new(
            config.endpoint.listing_path.as_str(),
            LISTING_HANDLER,
        ))
        .with_route(RouteConfig::new("/", PAGE_HANDLER).with_alias("/index.html"))
}

fn core_method(method: &SpinMethod) -> Option<Method> {
    match method {
        SpinMethod::Get => Some(Method::Get),
        SpinMethod::Head => Some(Method::Head),
        SpinMethod::Post => Some(Method::Post),
        SpinMethod::Put => Some(Method::Put),
        SpinMethod::Delete => Some(Method::Delete),
        SpinMethod::Patch => Some(Method::Patch),
        SpinMethod::Options => Some(Method::Options),
        _ => None,
    }
}

fn method_name(method: &SpinMethod) -> String {
    match method {
        SpinMethod::Other(name) => name.clone(),
        _ => "unsupported".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = load_config().unwrap();
        assert_eq!(config.site.copyright_year, Some(2024));
        assert_eq!(config.site.profiles.len(), 2);
        assert_eq!(config.endpoint.listing_path, "/api/products");
        assert_eq!(config.card.currency, "$");
    }

    #[test]
    fn test_manifest_routes() {
        let manifest = manifest(&ShowcaseConfig::default());

        assert_eq!(manifest.route_for("/api/products").unwrap().handler, LISTING_HANDLER);
        assert_eq!(manifest.route_for("/").unwrap().handler, PAGE_HANDLER);
        assert_eq!(manifest.route_for("/index.html").unwrap().handler, PAGE_HANDLER);
        assert!(manifest.route_for("/cart").is_none());
        assert!(!manifest.route_for("/").unwrap().allows("POST"));
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(core_method(&SpinMethod::Get), Some(Method::Get));
        assert_eq!(core_method(&SpinMethod::Other("PURGE".to_string())), None);
        assert_eq!(method_name(&SpinMethod::Other("PURGE".to_string())), "PURGE");
    }

    #[test]
    fn test_spin_manifest_allows_loopback_self_fetch() {
        let manifest: toml::Value = toml::from_str(include_str!("../../../spin.toml")).unwrap();
        let hosts = manifest["component"]["product-showcase"]["allowed_outbound_hosts"]
            .as_array()
            .unwrap();

        for host in ["http://self", "http://localhost:3000", "http://127.0.0.1:3000"] {
            assert!(hosts.iter().any(|h| h.as_str() == Some(host)), "missing {}", host);
        }
    }
}
