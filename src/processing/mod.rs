//! Subnet summarization and threshold alerting.
//!
//! - [`summarize`] - /24 grouping and device counts
//! - [`alerts`] - critical-subnet minimums for the monitoring host

mod alerts;
mod summarize;

// Re-export public functions
pub use alerts::{check_subnet_alerts, CRITICAL_SUBNETS, MONITORED_HOST};
pub use summarize::{summarize_by_subnet, summary_lines, SUMMARY_THRESHOLD};
