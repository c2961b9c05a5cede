//! IPv4 validation and subnet derivation.
//!
//! Raw device output is filtered through [`is_valid_ipv4`], ordered with
//! [`sort_ips`] and grouped by the /24 network from [`network_24`].

use std::net::Ipv4Addr;

/// Maximum length for an IPv4 network prefix (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// True iff `s` (after trimming) parses as a dotted-quad IPv4 address.
///
/// Lines of device output that fail this check are silently dropped, not
/// errored.
pub fn is_valid_ipv4(s: &str) -> bool {
    s.trim().parse::<Ipv4Addr>().is_ok()
}

/// Sort addresses ascending by their 32-bit numeric value.
///
/// If any element fails to parse the whole batch falls back to a
/// lexicographic sort; the two orders are never mixed.
pub fn sort_ips(ips: &mut [String]) {
    if ips.iter().all(|ip| ip.trim().parse::<Ipv4Addr>().is_ok()) {
        ips.sort_by_cached_key(|ip| {
            ip.trim()
                .parse::<Ipv4Addr>()
                .map(u32::from)
                .unwrap_or(u32::MAX)
        });
    } else {
        ips.sort();
    }
}

/// Get the network address for a given IP and prefix length.
///
/// Host bits are masked off; `None` if the prefix is longer than 32.
pub fn network_address(addr: Ipv4Addr, prefix: u8) -> Option<Ipv4Addr> {
    if prefix > MAX_PREFIX {
        return None;
    }
    let right_len = u32::from(MAX_PREFIX - prefix);
    let bits = u64::from(u32::from(addr));
    let network_bits = (bits >> right_len) << right_len;
    Some(Ipv4Addr::from(network_bits as u32))
}

/// The `a.b.c.0/24` network containing `ip`, or `None` for malformed input.
///
/// Non-strict: host bits are masked rather than rejected.
pub fn network_24(ip: &str) -> Option<String> {
    let addr: Ipv4Addr = ip.trim().parse().ok()?;
    let network = network_address(addr, 24)?;
    Some(format!("{network}/24"))
}
