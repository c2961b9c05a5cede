//! /24 subnet summarization.

use std::collections::HashMap;

use itertools::Itertools;

use crate::models::{network_24, SubnetCount};

/// A summary is only produced above this many entries.
pub const SUMMARY_THRESHOLD: usize = 10;

/// Group entries by their /24 network and count members.
///
/// `None` for small batches (at most [`SUMMARY_THRESHOLD`] entries).
/// Malformed entries are skipped without aborting the batch. Networks come
/// out sorted by count descending; ties keep first-encountered order.
pub fn summarize_by_subnet(entries: &[String]) -> Option<Vec<SubnetCount>> {
    if entries.len() <= SUMMARY_THRESHOLD {
        return None;
    }

    let networks: Vec<String> = entries.iter().filter_map(|ip| network_24(ip)).collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for network in &networks {
        *counts.entry(network.as_str()).or_insert(0) += 1;
    }

    let mut summary: Vec<SubnetCount> = networks
        .iter()
        .map(String::as_str)
        .unique()
        .map(|network| SubnetCount {
            network: network.to_string(),
            count: counts[network],
        })
        .collect();
    summary.sort_by_key(|row| std::cmp::Reverse(row.count));

    Some(summary)
}

/// Render summary rows as `"<network>: <count> dispositivos"` lines.
pub fn summary_lines(summary: &[SubnetCount]) -> Vec<String> {
    summary.iter().map(SubnetCount::to_string).collect()
}
