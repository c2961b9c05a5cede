//! Per-run report data model.

use std::fmt;

/// Classification of the polled device.
///
/// Set once by detection (or forced by the caller) and immutable afterwards;
/// `Unknown` triggers the two-attempt extraction fallback in the
/// orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Mikrotik,
    Ubiquiti,
    Unknown,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Mikrotik => "mikrotik",
            DeviceType::Ubiquiti => "ubiquiti",
            DeviceType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the subnet summary: a /24 network and its device count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetCount {
    /// Network in `a.b.c.0/24` form.
    pub network: String,
    /// Number of ARP entries inside the network.
    pub count: usize,
}

impl fmt::Display for SubnetCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} dispositivos", self.network, self.count)
    }
}

/// Severity of a critical-subnet deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    /// The subnet has no devices at all.
    Zero,
    /// The subnet has devices, but fewer than the required minimum.
    BelowThreshold,
}

/// A critical subnet whose device count fell below its minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub subnet: String,
    pub current: usize,
    pub minimum: usize,
    pub severity: AlertSeverity,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            AlertSeverity::Zero => write!(f, "❌ {}: SIN DISPOSITIVOS", self.subnet),
            AlertSeverity::BelowThreshold => write!(
                f,
                "⚠️ {}: {} dispositivos (< {})",
                self.subnet, self.current, self.minimum
            ),
        }
    }
}

/// Outcome of one extraction run.
///
/// Constructed once, consumed by the formatters and never mutated.
#[derive(Debug, Clone)]
pub struct Report {
    pub target_host: String,
    pub success: bool,
    pub device_type: DeviceType,
    /// Validated, numerically sorted addresses.
    pub entries: Vec<String>,
    /// Present only when more than 10 entries were extracted.
    pub summary: Option<Vec<SubnetCount>>,
    pub alerts: Vec<Alert>,
    /// Failure reason, set only on failure reports.
    pub error: Option<String>,
    /// Local wall-clock stamp, `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
}

impl Report {
    pub fn success(
        target_host: &str,
        device_type: DeviceType,
        entries: Vec<String>,
        summary: Option<Vec<SubnetCount>>,
        alerts: Vec<Alert>,
    ) -> Report {
        Report {
            target_host: target_host.to_string(),
            success: true,
            device_type,
            entries,
            summary,
            alerts,
            error: None,
            timestamp: now_stamp(),
        }
    }

    pub fn failure(target_host: &str, error: String) -> Report {
        Report {
            target_host: target_host.to_string(),
            success: false,
            device_type: DeviceType::Unknown,
            entries: Vec::new(),
            summary: None,
            alerts: Vec::new(),
            error: Some(error),
            timestamp: now_stamp(),
        }
    }
}

/// Current wall-clock time in the deployment timezone.
fn now_stamp() -> String {
    chrono::Utc::now()
        .with_timezone(&chrono_tz::America::Bogota)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
