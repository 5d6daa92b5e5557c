//! Address families managed by the DDNS system

use serde::{Deserialize, Serialize};
use std::fmt;

/// IP version (v4 or v6)
///
/// Each version gets its own independently maintained list of domains:
/// `A` records for [`IpVersion::V4`] and `AAAA` records for [`IpVersion::V6`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IpVersion {
    #[serde(rename = "ip4")]
    V4,
    #[serde(rename = "ip6")]
    V6,
}

impl IpVersion {
    /// Both versions, in the order they are reported
    pub const ALL: [IpVersion; 2] = [IpVersion::V4, IpVersion::V6];

    /// DNS record type maintained for this version
    pub fn record_type(self) -> &'static str {
        match self {
            IpVersion::V4 => "A",
            IpVersion::V6 => "AAAA",
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => f.write_str("IPv4"),
            IpVersion::V6 => f.write_str("IPv6"),
        }
    }
}
