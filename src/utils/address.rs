// src/utils/address.rs
use std::net::{IpAddr, Ipv6Addr};

/// Returns true when `candidate` is an IPv4 or IPv6 literal.
///
/// Scoped IPv6 literals (`fe80::1%eth0`) count as addresses. Absent, empty
/// and unparseable input all yield `false`; this never errors. The string is
/// checked as given, callers trim beforehand.
pub fn is_valid_address(candidate: Option<&str>) -> bool {
    match candidate {
        Some(s) if !s.is_empty() => match s.split_once('%') {
            Some((addr, zone)) => !zone.is_empty() && addr.parse::<Ipv6Addr>().is_ok(),
            None => s.parse::<IpAddr>().is_ok(),
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ipv4_and_ipv6_literals() {
        assert!(is_valid_address(Some("192.168.1.1")));
        assert!(is_valid_address(Some("10.0.0.5")));
        assert!(is_valid_address(Some("::1")));
        assert!(is_valid_address(Some("2001:db8::ff00:42:8329")));
    }

    #[test]
    fn accepts_scoped_ipv6_literals() {
        assert!(is_valid_address(Some("fe80::1%eth0")));
        assert!(is_valid_address(Some("fe80::1%3")));
    }

    #[test]
    fn rejects_malformed_scopes() {
        assert!(!is_valid_address(Some("fe80::1%")));
        assert!(!is_valid_address(Some("10.0.0.1%eth0")));
        assert!(!is_valid_address(Some("example.com%eth0")));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_valid_address(None));
        assert!(!is_valid_address(Some("")));
        assert!(!is_valid_address(Some("abc")));
        assert!(!is_valid_address(Some("999.999.999.999")));
        assert!(!is_valid_address(Some("example.com")));
        assert!(!is_valid_address(Some("192.168.1")));
        // Untrimmed input is not an address literal
        assert!(!is_valid_address(Some(" 10.0.0.5 ")));
    }
}
