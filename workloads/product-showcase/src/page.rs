//! `GET /`: the streamed showcase page.

use std::fmt::Display;

use futures::Sink;
use http::StatusCode;
use spin_sdk::http::ResponseOutparam;

use showcase_catalog::StaticListing;
use showcase_core::{ListingEndpoint, RequestContext, ShowcaseConfig, WorkloadError};
use showcase_data::{load_listing, FetchClient, HttpListingSource};
use showcase_observability::{MetricsCollector, StructuredLogger};
use showcase_streaming::StreamingSink;
use showcase_ui::{build_shell, copyright_year, render_grid, CardOverrides, PRODUCTS_SECTION};

use crate::response::{start_response, HTML};

/// Stream shell, product grid and closing chrome.
///
/// Once the head is sent the status is fixed at 200; later failures are
/// logged and cut the stream short.
pub async fn serve_page(
    ctx: &RequestContext,
    config: &ShowcaseConfig,
    logger: &StructuredLogger,
    metrics: &mut MetricsCollector,
    response_out: ResponseOutparam,
) -> anyhow::Result<StatusCode> {
    let response = start_response(StatusCode::OK, HTML, &ctx.request_id)?;
    let body = response.take_body();
    response_out.set(response);

    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    if let Err(e) = stream_page(&mut sink, ctx, config, logger, metrics).await {
        logger
            .error_builder("Page stream aborted")
            .field("phase", format!("{:?}", sink.phase()))
            .field("error", e.to_string())
            .emit();
    }

    Ok(StatusCode::OK)
}

async fn stream_page<S, E>(
    sink: &mut StreamingSink<S, E>,
    ctx: &RequestContext,
    config: &ShowcaseConfig,
    logger: &StructuredLogger,
    metrics: &mut MetricsCollector,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = build_shell(&config.site, copyright_year(&config.site));

    // 1) Shell first
    sink.send_shell(&shell.render_opening()).await?;
    metrics.record_shell_sent();
    logger.debug("Shell sent");

    // 2) Listing, with in-process fallback
    let endpoint = ListingEndpoint::resolve(ctx, &config.endpoint);
    let source = HttpListingSource::new(FetchClient::new(ctx.request_id.clone()), endpoint);
    let load = load_listing(&source, &StaticListing).await;

    metrics.record_listing_fetch(
        &load.location,
        load.duration,
        load.error.as_ref().map(|e| e.to_string()),
    );
    match &load.error {
        Some(e) => logger
            .warn_builder("Listing fetch failed, rendering in-process listing")
            .field("endpoint", load.location.as_str())
            .field("error", e.to_string())
            .duration_ms("fetch_ms", load.duration)
            .emit(),
        None => logger
            .debug_builder("Listing fetched")
            .field("endpoint", load.location.as_str())
            .field_u64("products", load.products.len() as u64)
            .duration_ms("fetch_ms", load.duration)
            .emit(),
    }

    // 3) Product grid
    let overrides = CardOverrides::from_config(&config.card);
    let grid = render_grid(&load.products, &overrides);
    sink.send_section(PRODUCTS_SECTION, &grid).await?;
    metrics.record_section_sent(PRODUCTS_SECTION, Some(grid.len()), load.used_fallback());

    // 4) Footer and closing tags
    sink.send_closing(&shell.render_closing()).await?;

    let mut entry = logger
        .info_builder("Page streamed")
        .field_u64("products", load.products.len() as u64)
        .field_bool("fallback", load.used_fallback());
    if let Some(tts) = sink.timing().time_to_shell() {
        entry = entry.duration_ms("time_to_shell_ms", tts);
    }
    entry.emit();

    Ok(())
}
