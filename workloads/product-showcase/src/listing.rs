//! `GET /api/products`.

use http::StatusCode;
use spin_sdk::http::ResponseOutparam;

use showcase_catalog::{ListingResponse, StaticListing};
use showcase_core::RequestContext;
use showcase_observability::StructuredLogger;

use crate::response::{respond, respond_plain, JSON};

/// Serve the in-process catalog as JSON.
pub async fn serve_listing(
    ctx: &RequestContext,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<StatusCode> {
    let listing = ListingResponse::from_provider(&StaticListing);

    let json = match listing.to_json() {
        Ok(json) => json,
        Err(e) => {
            logger
                .error_builder("Listing serialization failed")
                .field("error", e.to_string())
                .emit();
            return respond_plain(response_out, StatusCode::INTERNAL_SERVER_ERROR, &ctx.request_id)
                .await;
        }
    };

    let status = respond(
        response_out,
        StatusCode::OK,
        JSON,
        &ctx.request_id,
        json.into_bytes(),
    )
    .await?;

    logger
        .info_builder("Listing served")
        .field_u64("products", listing.products.len() as u64)
        .emit();

    Ok(status)
}
