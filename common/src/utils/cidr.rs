//! ip-in-range containment over cidr notation

use std::net::IpAddr;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CidrError {
    #[error("invalid ip range: {0}")]
    InvalidRange(String),
    #[error("invalid prefix length in range: {0}")]
    InvalidPrefixLen(String),
}

/// One address range in prefix notation. A bare address is treated as a
/// full-length prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CidrRange {
    network: IpAddr,
    prefix_len: u8,
}

impl FromStr for CidrRange {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (network, prefix_len) = match s.split_once('/') {
            Some((addr, len)) => {
                let network: IpAddr = addr
                    .parse()
                    .map_err(|_| CidrError::InvalidRange(s.to_string()))?;
                let prefix_len: u8 = len
                    .parse()
                    .map_err(|_| CidrError::InvalidPrefixLen(s.to_string()))?;
                (network, prefix_len)
            }
            None => {
                let network: IpAddr = s
                    .parse()
                    .map_err(|_| CidrError::InvalidRange(s.to_string()))?;
                (network, if network.is_ipv4() { 32 } else { 128 })
            }
        };
        let max_len = if network.is_ipv4() { 32 } else { 128 };
        if prefix_len > max_len {
            return Err(CidrError::InvalidPrefixLen(s.to_string()));
        }
        Ok(CidrRange {
            network,
            prefix_len,
        })
    }
}

impl CidrRange {
    /// Prefix match over the numeric address. Mismatched address families
    /// never match.
    pub fn contains(&self, candidate: IpAddr) -> bool {
        match (self.network, candidate) {
            (IpAddr::V4(network), IpAddr::V4(candidate)) => {
                if self.prefix_len == 0 {
                    return true;
                }
                let shift = 32 - u32::from(self.prefix_len);
                u32::from(network) >> shift == u32::from(candidate) >> shift
            }
            (IpAddr::V6(network), IpAddr::V6(candidate)) => {
                if self.prefix_len == 0 {
                    return true;
                }
                let shift = 128 - u32::from(self.prefix_len);
                u128::from(network) >> shift == u128::from(candidate) >> shift
            }
            (_, _) => false,
        }
    }
}

/// Containment over a set of ranges, parsed once per request.
#[derive(Debug, Clone)]
pub struct CidrMatcher {
    ranges: Vec<CidrRange>,
}

impl CidrMatcher {
    pub fn new(ranges: &[String]) -> Result<Self, CidrError> {
        let ranges = ranges
            .iter()
            .map(|range| range.parse())
            .collect::<Result<Vec<CidrRange>, CidrError>>()?;
        Ok(CidrMatcher { ranges })
    }

    pub fn contains(&self, candidate: IpAddr) -> bool {
        self.ranges.iter().any(|range| range.contains(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn v4_prefix_containment() {
        let range: CidrRange = "203.0.113.0/24".parse().unwrap();
        assert!(range.contains(ip("203.0.113.0")));
        assert!(range.contains(ip("203.0.113.5")));
        assert!(range.contains(ip("203.0.113.255")));
        assert!(!range.contains(ip("203.0.114.0")));
        assert!(!range.contains(ip("203.0.112.255")));
    }

    #[test]
    fn full_length_prefix_is_exact_match() {
        let range: CidrRange = "10.1.2.3/32".parse().unwrap();
        assert!(range.contains(ip("10.1.2.3")));
        assert!(!range.contains(ip("10.1.2.4")));
    }

    #[test]
    fn bare_address_behaves_as_full_length() {
        let range: CidrRange = "10.1.2.3".parse().unwrap();
        let explicit: CidrRange = "10.1.2.3/32".parse().unwrap();
        assert_eq!(range, explicit);
    }

    #[test]
    fn zero_prefix_matches_whole_family_only() {
        let range: CidrRange = "0.0.0.0/0".parse().unwrap();
        assert!(range.contains(ip("198.51.100.7")));
        assert!(!range.contains(ip("2001:db8::1")));
    }

    #[test]
    fn mismatched_families_never_match() {
        let v4: CidrRange = "203.0.113.0/24".parse().unwrap();
        assert!(!v4.contains(ip("2001:db8::1")));
        //a v4-mapped candidate is still a v6 address, no normalization
        assert!(!v4.contains(ip("::ffff:203.0.113.5")));

        let v6: CidrRange = "2001:db8::/32".parse().unwrap();
        assert!(v6.contains(ip("2001:db8:0:1::7")));
        assert!(!v6.contains(ip("203.0.113.5")));
    }

    #[test]
    fn malformed_ranges_are_errors() {
        assert!("203.0.113.0/33".parse::<CidrRange>().is_err());
        assert!("2001:db8::/129".parse::<CidrRange>().is_err());
        assert!("not-an-ip/8".parse::<CidrRange>().is_err());
        assert!("203.0.113.0/abc".parse::<CidrRange>().is_err());
    }

    #[test]
    fn matcher_answers_over_any_range() {
        let matcher = CidrMatcher::new(&[
            "203.0.113.0/24".to_string(),
            "198.51.100.7/32".to_string(),
        ])
        .unwrap();
        assert!(matcher.contains(ip("203.0.113.9")));
        assert!(matcher.contains(ip("198.51.100.7")));
        assert!(!matcher.contains(ip("198.51.100.8")));
    }

    #[test]
    fn empty_range_set_contains_nothing() {
        let matcher = CidrMatcher::new(&[]).unwrap();
        assert!(!matcher.contains(ip("203.0.113.9")));
    }

    #[test]
    fn one_bad_range_poisons_the_matcher() {
        let res = CidrMatcher::new(&["203.0.113.0/24".to_string(), "bogus".to_string()]);
        assert!(res.is_err());
    }
}
