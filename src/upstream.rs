//! Shared response handling for upstream HTTP calls.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::Upstream;
use crate::telemetry;
use crate::{Result, RouterError};

/// Whether a failed response's body is appended to the error reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorBody {
    Include,
    Omit,
}

/// Check the status of `response` and decode its JSON body.
///
/// Non-success statuses become [`RouterError::UpstreamUnavailable`]. Every
/// call is counted under [`telemetry::UPSTREAM_REQUESTS_TOTAL`].
pub(crate) async fn decode<T: DeserializeOwned>(
    upstream: Upstream,
    response: Response,
    error_body: ErrorBody,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        record(upstream, false);
        let mut reason = status.canonical_reason().unwrap_or("").to_string();
        if error_body == ErrorBody::Include {
            let body = response.text().await.unwrap_or_default();
            if !body.is_empty() {
                reason = format!("{reason}: {body}");
            }
        }
        warn!(%upstream, status = status.as_u16(), "upstream request failed");
        return Err(RouterError::UpstreamUnavailable {
            upstream,
            status: status.as_u16(),
            reason,
        });
    }

    let body = response.text().await.inspect_err(|_| record(upstream, false))?;
    let decoded = serde_json::from_str(&body).inspect_err(|_| record(upstream, false))?;
    record(upstream, true);
    Ok(decoded)
}

/// Count a transport-level failure (no response at all).
pub(crate) fn transport_error(upstream: Upstream, err: reqwest::Error) -> RouterError {
    record(upstream, false);
    warn!(%upstream, error = %err, "upstream unreachable");
    RouterError::from(err)
}

fn record(upstream: Upstream, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(
        telemetry::UPSTREAM_REQUESTS_TOTAL,
        "upstream" => upstream.label(),
        "status" => status
    )
    .increment(1);
}
