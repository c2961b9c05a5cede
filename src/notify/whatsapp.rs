//! Single-message delivery to the WhatsApp gateway.

use std::time::Duration;

use serde::Serialize;

use crate::config;
use crate::error::Error;

#[derive(Serialize)]
struct MessagePayload<'a> {
    target: &'a str,
    message: &'a str,
}

/// POST the report text to the gateway.
///
/// Delivered only means HTTP 200; any other status, a timeout, or a
/// connection failure comes back as [`Error::Notification`], which the
/// caller logs without touching the exit code.
pub async fn send_message(endpoint: &str, target: &str, message: &str) -> Result<(), Error> {
    log::info!("sending WhatsApp message to {target} ...");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config::GATEWAY_TIMEOUT_SECS))
        .build()
        .map_err(|e| Error::Notification(format!("could not build HTTP client: {e}")))?;

    let response = client
        .post(endpoint)
        .json(&MessagePayload { target, message })
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                Error::Notification(format!(
                    "gateway request timed out after {}s",
                    config::GATEWAY_TIMEOUT_SECS
                ))
            } else if e.is_connect() {
                Error::Notification(format!("could not reach gateway: {e}"))
            } else {
                Error::Notification(e.to_string())
            }
        })?;

    if response.status() == reqwest::StatusCode::OK {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(Error::Notification(format!(
            "gateway returned HTTP {status}: {body}"
        )))
    }
}
