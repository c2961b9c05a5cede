//! RouterOS address-table extraction.

use std::time::Duration;

use super::clean_entries;
use crate::config;
use crate::error::Error;
use crate::ssh::ShellSession;

/// Lists dynamic+complete ARP entries, one address per line.
pub const ARP_COMMAND: &str = ":foreach i in=[/ip arp find where dynamic=yes and complete=yes] do={ :put [/ip arp get $i address] }";

/// Extract the active (dynamic and complete) ARP addresses of a MikroTik.
///
/// Returns the cleaned, numerically sorted list; command failures surface
/// as [`Error::Command`] and the orchestrator decides what to do with them.
pub async fn extract_arp(session: &mut dyn ShellSession) -> Result<Vec<String>, Error> {
    log::info!("extracting active ARP entries (MikroTik) ...");
    log::debug!("command: {ARP_COMMAND}");

    let output = session
        .exec(ARP_COMMAND, Duration::from_secs(config::COMMAND_TIMEOUT_SECS))
        .await?;

    if !output.stderr.trim().is_empty() {
        log::warn!("device stderr: {}", output.stderr.trim());
    }

    let entries = clean_entries(&output.stdout);
    if entries.is_empty() {
        log::info!("no active ARP entries found");
    } else {
        log::info!("{} active ARP entries found", entries.len());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssh::testing::{FailingSession, ScriptedSession};

    #[tokio::test]
    async fn test_extracts_sorted_addresses() {
        let mut session = ScriptedSession::new().with_response(
            ARP_COMMAND,
            "192.168.88.10\r\n192.168.88.2\r\n192.168.88.1\r\n",
            "",
        );
        let entries = extract_arp(&mut session).await.unwrap();
        assert_eq!(entries, vec!["192.168.88.1", "192.168.88.2", "192.168.88.10"]);
    }

    #[tokio::test]
    async fn test_garbage_lines_are_dropped() {
        let mut session = ScriptedSession::new().with_response(
            ARP_COMMAND,
            "expected end of command\n192.168.88.5\n",
            "",
        );
        let entries = extract_arp(&mut session).await.unwrap();
        assert_eq!(entries, vec!["192.168.88.5"]);
    }

    #[tokio::test]
    async fn test_empty_table_yields_empty_list() {
        let mut session = ScriptedSession::new();
        let entries = extract_arp(&mut session).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_command_error_propagates() {
        let mut session = FailingSession;
        assert!(matches!(
            extract_arp(&mut session).await,
            Err(Error::Command(_))
        ));
    }
}
