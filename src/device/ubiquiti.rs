//! Linux neighbor-table extraction for Ubiquiti devices.

use std::time::Duration;

use super::clean_entries;
use crate::config;
use crate::error::Error;
use crate::ssh::ShellSession;

/// Resolved neighbors in state REACHABLE or STALE, first field only.
pub const NEIGHBOR_COMMAND: &str = r#"ip neigh show | grep -E "lladdr [0-9a-f]{2}(:[0-9a-f]{2}){5}" | grep -E "REACHABLE|STALE" | awk '{print $1}'"#;

/// Classic neighbor-table listing, header line skipped.
pub const FALLBACK_COMMAND: &str = "arp -e | tail -n +2 | awk '{print $1}'";

/// Extract the active ARP addresses of a Ubiquiti/Linux device.
///
/// The kernel neighbor table is the primary source; when it produces no
/// output at all the classic `arp` listing is tried instead.
pub async fn extract_arp(session: &mut dyn ShellSession) -> Result<Vec<String>, Error> {
    log::info!("extracting active ARP entries (Ubiquiti) ...");
    log::debug!("command: {NEIGHBOR_COMMAND}");
    let timeout = Duration::from_secs(config::COMMAND_TIMEOUT_SECS);

    let mut output = session.exec(NEIGHBOR_COMMAND, timeout).await?;
    if !output.stderr.trim().is_empty() {
        log::warn!("device stderr: {}", output.stderr.trim());
    }

    if output.stdout.trim().is_empty() {
        log::info!("neighbor table gave no output, trying classic arp listing");
        log::debug!("command: {FALLBACK_COMMAND}");
        output = session.exec(FALLBACK_COMMAND, timeout).await?;
        if !output.stdout.trim().is_empty() {
            log::info!("classic arp listing produced output");
        }
    }

    let entries = clean_entries(&output.stdout);
    if entries.is_empty() {
        log::info!("no active ARP entries found");
    } else {
        log::info!("{} active ARP entries found", entries.len());
    }
    Ok(entries)
}
