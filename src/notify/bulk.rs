//! Bulk document delivery to every enabled recipient.
//!
//! Peripheral job, separate from the extraction run: recipients come from
//! a relational store consumed through the [`RecipientStore`] seam, phone
//! numbers are normalized to a country-code prefix, and the gateway's
//! `send-with-path` endpoint pushes one document per recipient.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::Error;

/// Country code prepended to bare national numbers.
pub const COUNTRY_CODE: &str = "57";
/// Phones with fewer digits than this are rejected outright.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Digits with an optional leading `+`.
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?[0-9]+$").expect("Invalid Regex"))
}

/// One notification recipient as stored in the relational store.
#[derive(Debug, Clone)]
pub struct Recipient {
    pub id: u64,
    pub name: String,
    pub surname: String,
    pub phone: String,
}

/// Narrow seam over the relational store; only enabled, active recipients
/// come back.
#[async_trait]
pub trait RecipientStore: Send + Sync {
    async fn fetch_enabled_recipients(&self) -> Result<Vec<Recipient>, Error>;
}

/// Delivery totals of one bulk run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BulkStats {
    pub successful: usize,
    pub failed: usize,
}

/// Normalize a phone number to `+<country-code><national-number>`.
///
/// Numbers already carrying `+` are kept verbatim; a bare number starting
/// with the country code only gains the `+`. `None` for anything too short
/// or non-numeric.
pub fn normalize_phone(phone: &str) -> Option<String> {
    let phone = phone.trim();
    if !phone_regex().is_match(phone) {
        return None;
    }
    if phone.trim_start_matches('+').len() < MIN_PHONE_DIGITS {
        return None;
    }

    if phone.starts_with('+') {
        Some(phone.to_string())
    } else if phone.starts_with(COUNTRY_CODE) {
        Some(format!("+{phone}"))
    } else {
        Some(format!("+{COUNTRY_CODE}{phone}"))
    }
}

#[derive(Serialize)]
struct DocumentPayload<'a> {
    phone: &'a str,
    message: &'a str,
    #[serde(rename = "pdfPath")]
    pdf_path: &'a str,
}

#[derive(Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    success: bool,
}

/// Push `pdf_path` with a personalized greeting to every enabled recipient.
///
/// Invalid phones and failed deliveries are logged and counted; the job
/// keeps going and reports the totals.
pub async fn send_document_to_recipients(
    store: &dyn RecipientStore,
    endpoint: &str,
    message: &str,
    pdf_path: &str,
) -> Result<BulkStats, Error> {
    let recipients = store.fetch_enabled_recipients().await?;
    log::info!("{} recipients with WhatsApp enabled", recipients.len());

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config::GATEWAY_TIMEOUT_SECS))
        .build()
        .map_err(|e| Error::Notification(format!("could not build HTTP client: {e}")))?;

    let mut stats = BulkStats::default();
    for recipient in &recipients {
        let full_name = format!("{} {}", recipient.name, recipient.surname);

        let Some(phone) = normalize_phone(&recipient.phone) else {
            log::warn!(
                "invalid phone number for {full_name} (id {id}): {phone}",
                id = recipient.id,
                phone = recipient.phone
            );
            stats.failed += 1;
            continue;
        };

        let personalized = format!("Hola {full_name}, {message}");
        match send_document(&client, endpoint, &phone, &personalized, pdf_path).await {
            Ok(()) => {
                log::info!(
                    "document delivered to {full_name} (id {id}) - {phone}",
                    id = recipient.id
                );
                stats.successful += 1;
            }
            Err(e) => {
                log::error!(
                    "delivery to {full_name} (id {id}) - {phone} failed: {e}",
                    id = recipient.id
                );
                stats.failed += 1;
            }
        }
    }

    log::info!(
        "bulk send finished: {successful} delivered, {failed} failed",
        successful = stats.successful,
        failed = stats.failed
    );
    Ok(stats)
}

/// Delivered only when the gateway answers HTTP 200 with `success: true`.
async fn send_document(
    client: &reqwest::Client,
    endpoint: &str,
    phone: &str,
    message: &str,
    pdf_path: &str,
) -> Result<(), Error> {
    let response = client
        .post(endpoint)
        .json(&DocumentPayload {
            phone,
            message,
            pdf_path,
        })
        .send()
        .await
        .map_err(|e| Error::Notification(e.to_string()))?;

    if response.status() != reqwest::StatusCode::OK {
        return Err(Error::Notification(format!(
            "gateway returned HTTP {}",
            response.status()
        )));
    }

    let body: GatewayResponse = response
        .json()
        .await
        .map_err(|e| Error::Notification(format!("unreadable gateway response: {e}")))?;
    if body.success {
        Ok(())
    } else {
        Err(Error::Notification(
            "gateway reported success=false".to_string(),
        ))
    }
}
