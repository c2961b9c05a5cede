//! Critical-subnet threshold alerting.

use std::collections::HashMap;

use crate::models::{Alert, AlertSeverity, SubnetCount};

/// Alerts only apply to runs against this device.
pub const MONITORED_HOST: &str = "192.168.26.1";

/// Subnets that must hold at least this many devices.
pub const CRITICAL_SUBNETS: [(&str, usize); 3] = [
    ("192.168.26.0/24", 10),
    ("192.168.20.0/24", 10),
    ("192.168.30.0/24", 10),
];

/// Evaluate the critical-subnet minimums against the summary.
///
/// Returns nothing unless the run targeted [`MONITORED_HOST`] and a summary
/// exists. A critical network absent from the summary counts as zero
/// devices.
pub fn check_subnet_alerts(target_host: &str, summary: Option<&[SubnetCount]>) -> Vec<Alert> {
    if target_host != MONITORED_HOST {
        return Vec::new();
    }
    let Some(summary) = summary else {
        return Vec::new();
    };

    let counts: HashMap<&str, usize> = summary
        .iter()
        .map(|row| (row.network.as_str(), row.count))
        .collect();

    let mut alerts = Vec::new();
    for (subnet, minimum) in CRITICAL_SUBNETS {
        let current = counts.get(subnet).copied().unwrap_or(0);
        if current < minimum {
            let severity = if current == 0 {
                AlertSeverity::Zero
            } else {
                AlertSeverity::BelowThreshold
            };
            alerts.push(Alert {
                subnet: subnet.to_string(),
                current,
                minimum,
                severity,
            });
        }
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(network: &str, count: usize) -> SubnetCount {
        SubnetCount {
            network: network.to_string(),
            count,
        }
    }

    #[test]
    fn test_deficient_and_absent_subnets_alert() {
        let summary = vec![row("192.168.26.0/24", 5)];
        let alerts = check_subnet_alerts(MONITORED_HOST, Some(&summary));

        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].subnet, "192.168.26.0/24");
        assert_eq!(alerts[0].severity, AlertSeverity::BelowThreshold);
        assert_eq!(alerts[0].current, 5);
        assert_eq!(alerts[1].severity, AlertSeverity::Zero);
        assert_eq!(alerts[2].severity, AlertSeverity::Zero);
    }

    #[test]
    fn test_satisfied_subnets_produce_no_alerts() {
        let summary = vec![
            row("192.168.26.0/24", 63),
            row("192.168.20.0/24", 10),
            row("192.168.30.0/24", 12),
        ];
        assert!(check_subnet_alerts(MONITORED_HOST, Some(&summary)).is_empty());
    }

    #[test]
    fn test_other_hosts_never_alert() {
        let summary = vec![row("192.168.26.0/24", 0)];
        assert!(check_subnet_alerts("192.168.1.1", Some(&summary)).is_empty());
    }

    #[test]
    fn test_no_summary_means_no_alerts() {
        assert!(check_subnet_alerts(MONITORED_HOST, None).is_empty());
    }

    #[test]
    fn test_non_critical_subnets_are_ignored() {
        let summary = vec![
            row("192.168.26.0/24", 20),
            row("192.168.20.0/24", 20),
            row("192.168.30.0/24", 20),
            row("10.50.0.0/24", 1),
        ];
        assert!(check_subnet_alerts(MONITORED_HOST, Some(&summary)).is_empty());
    }
}
