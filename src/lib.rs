//! Active-ARP extraction and subnet reporting for MikroTik and Ubiquiti
//! devices.
//!
//! One run polls a single device over SSH, pulls its active ARP table,
//! summarizes the addresses by /24 network, evaluates the critical-subnet
//! minimums and pushes the rendered report to the WhatsApp gateway.

pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod models;
pub mod notify;
pub mod output;
pub mod processing;
pub mod ssh;

pub use cli::{Cli, DeviceTypeArg};
pub use config::Settings;
pub use error::Error;
pub use models::{is_valid_ipv4, DeviceType, Report};
pub use output::{format_whatsapp_message, print_report};
pub use ssh::SshSessionProvider;

use ssh::{establish_connection, SessionProvider, ShellSession};

/// Run the whole extraction pipeline against one device.
///
/// `requested` forces a device type; `None` means auto-detection. Every
/// failure on the extraction path becomes a failure [`Report`] - callers
/// always get something to print and notify.
pub async fn run_extraction(
    provider: &dyn SessionProvider,
    host: &str,
    requested: Option<DeviceType>,
    settings: &Settings,
) -> Report {
    log::info!("starting ARP extraction for {host}");

    match try_extract(provider, host, requested, settings).await {
        Ok((device_type, entries)) => {
            let summary = processing::summarize_by_subnet(&entries);
            let alerts = processing::check_subnet_alerts(host, summary.as_deref());
            Report::success(host, device_type, entries, summary, alerts)
        }
        Err(e) => {
            log::error!("{e}");
            Report::failure(host, e.to_string())
        }
    }
}

/// Open a session, run the extraction state machine, and always close the
/// session afterwards.
async fn try_extract(
    provider: &dyn SessionProvider,
    host: &str,
    requested: Option<DeviceType>,
    settings: &Settings,
) -> Result<(DeviceType, Vec<String>), Error> {
    let credentials = settings.credentials_for(requested);
    if credentials.is_empty() {
        return Err(Error::Config(
            requested.map_or("auto mode", |t| t.as_str()).to_string(),
        ));
    }

    let mut session = establish_connection(provider, host, &credentials).await?;
    let outcome = extract_with_session(session.as_mut(), requested).await;
    session.close().await;
    log::info!("SSH session closed");
    Ok(outcome)
}

/// The detection/extraction state machine.
///
/// `Unknown` triggers the documented two-attempt fallback: MikroTik first,
/// Ubiquiti only if that yielded nothing, and the type records whichever
/// variant actually produced entries.
async fn extract_with_session(
    session: &mut dyn ShellSession,
    requested: Option<DeviceType>,
) -> (DeviceType, Vec<String>) {
    let detected = match requested {
        Some(device_type) => device_type,
        None => device::detect::detect_device_type(session).await,
    };

    match detected {
        DeviceType::Mikrotik => {
            let entries = entries_or_empty(
                device::mikrotik::extract_arp(session).await,
                DeviceType::Mikrotik,
            );
            (DeviceType::Mikrotik, entries)
        }
        DeviceType::Ubiquiti => {
            let entries = entries_or_empty(
                device::ubiquiti::extract_arp(session).await,
                DeviceType::Ubiquiti,
            );
            (DeviceType::Ubiquiti, entries)
        }
        DeviceType::Unknown => {
            log::info!("unidentified device, trying both extraction methods");
            let entries = entries_or_empty(
                device::mikrotik::extract_arp(session).await,
                DeviceType::Mikrotik,
            );
            if !entries.is_empty() {
                return (DeviceType::Mikrotik, entries);
            }
            let entries = entries_or_empty(
                device::ubiquiti::extract_arp(session).await,
                DeviceType::Ubiquiti,
            );
            if entries.is_empty() {
                (DeviceType::Unknown, Vec::new())
            } else {
                (DeviceType::Ubiquiti, entries)
            }
        }
    }
}

/// A failed strategy is logged and observed as "zero entries", never as a
/// propagated error.
fn entries_or_empty(result: Result<Vec<String>, Error>, device_type: DeviceType) -> Vec<String> {
    match result {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("extraction via {device_type} failed: {e}");
            Vec::new()
        }
    }
}
