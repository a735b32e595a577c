//! Response head and whole-body helpers.

use futures::SinkExt;
use http::StatusCode;
use spin_sdk::http::{Fields, OutgoingResponse, ResponseOutparam};

use showcase_core::{RequestId, WorkloadError};

pub const HTML: &str = "text/html; charset=utf-8";
pub const JSON: &str = "application/json";
pub const TEXT: &str = "text/plain; charset=utf-8";

/// Build a response head carrying `x-request-id`.
pub fn start_response(
    status: StatusCode,
    content_type: &str,
    request_id: &RequestId,
) -> Result<OutgoingResponse, WorkloadError> {
    let mut header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), content_type.into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
    ];
    if status == StatusCode::METHOD_NOT_ALLOWED {
        header_list.push(("allow".to_owned(), "GET".into()));
    }

    let headers = Fields::from_list(&header_list)
        .map_err(|e| anyhow::anyhow!("invalid response headers: {:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status.as_u16())
        .map_err(|_| anyhow::anyhow!("invalid status code {}", status))?;

    Ok(response)
}

/// Send a complete, non-streamed response.
pub async fn respond(
    response_out: ResponseOutparam,
    status: StatusCode,
    content_type: &str,
    request_id: &RequestId,
    body: Vec<u8>,
) -> anyhow::Result<StatusCode> {
    let response = start_response(status, content_type, request_id)?;
    let out = response.take_body();
    response_out.set(response);
    write_all(out, body).await?;
    Ok(status)
}

/// Plain-text response whose body is the status reason.
pub async fn respond_plain(
    response_out: ResponseOutparam,
    status: StatusCode,
    request_id: &RequestId,
) -> anyhow::Result<StatusCode> {
    let reason = status.canonical_reason().unwrap_or("Error");
    respond(response_out, status, TEXT, request_id, reason.as_bytes().to_vec()).await
}

async fn write_all<S>(mut out: S, bytes: Vec<u8>) -> anyhow::Result<()>
where
    S: futures::Sink<Vec<u8>> + Unpin,
    S::Error: std::fmt::Display,
{
    out.send(bytes)
        .await
        .map_err(|e| anyhow::anyhow!("failed to write body: {}", e))?;
    out.close()
        .await
        .map_err(|e| anyhow::anyhow!("failed to close body: {}", e))
}
