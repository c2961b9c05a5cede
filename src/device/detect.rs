//! Best-effort device-type detection.

use std::time::Duration;

use crate::config;
use crate::models::DeviceType;
use crate::ssh::ShellSession;

/// RouterOS identity probe.
pub const ROUTEROS_PROBE: &str = "/system resource print";
/// Generic system-identity probe for Linux-family devices.
pub const UNAME_PROBE: &str = "uname -a";

/// Classify the remote device with one or two short probes.
///
/// A RouterOS marker in the first probe wins; otherwise a clean non-empty
/// `uname -a` means Ubiquiti/Linux. Probe failures are swallowed - a wrong
/// or missing classification never halts the pipeline, the extraction
/// stage falls back on its own.
pub async fn detect_device_type(session: &mut dyn ShellSession) -> DeviceType {
    log::info!("detecting device type ...");
    let timeout = Duration::from_secs(config::PROBE_TIMEOUT_SECS);

    match session.exec(ROUTEROS_PROBE, timeout).await {
        Ok(output)
            if output.stdout.contains("RouterOS")
                || output.stdout.to_lowercase().contains("mikrotik") =>
        {
            log::info!("device identified as MikroTik RouterOS");
            return DeviceType::Mikrotik;
        }
        Ok(_) => {}
        Err(e) => log::debug!("RouterOS probe failed: {e}"),
    }

    match session.exec(UNAME_PROBE, timeout).await {
        Ok(output) if !output.stdout.trim().is_empty() && output.stderr.trim().is_empty() => {
            log::info!("device identified as Ubiquiti/Linux");
            return DeviceType::Ubiquiti;
        }
        Ok(_) => {}
        Err(e) => log::debug!("uname probe failed: {e}"),
    }

    log::warn!("device type could not be detected");
    DeviceType::Unknown
}
