//! The consolidated per-version domain map

use super::{Domain, IpVersion};
use serde::Serialize;
use std::collections::BTreeMap;

/// Domains to keep updated, per IP version
///
/// A map always holds exactly one entry per [`IpVersion`]. Each list is
/// sorted and free of duplicates, and at least one of the two lists is
/// non-empty. Only [`DomainMapBuilder`](crate::DomainMapBuilder) constructs
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DomainMap {
    entries: BTreeMap<IpVersion, Vec<Domain>>,
}

impl DomainMap {
    /// Assemble a map from already normalized lists
    pub(crate) fn new(ip4: Vec<Domain>, ip6: Vec<Domain>) -> Self {
        let entries = BTreeMap::from([(IpVersion::V4, ip4), (IpVersion::V6, ip6)]);
        Self { entries }
    }

    /// Domains for one IP version (possibly empty)
    pub fn get(&self, version: IpVersion) -> &[Domain] {
        self.entries.get(&version).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over `(version, domains)` pairs, IPv4 first
    pub fn iter(&self) -> impl Iterator<Item = (IpVersion, &[Domain])> {
        self.entries
            .iter()
            .map(|(version, domains)| (*version, domains.as_slice()))
    }

    /// Total number of (version, domain) pairs
    pub fn total_len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether neither version has any domain
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_has_both_versions() {
        let map = DomainMap::new(vec![Domain::new("a.com").unwrap()], Vec::new());

        assert_eq!(map.get(IpVersion::V4).len(), 1);
        assert!(map.get(IpVersion::V6).is_empty());
        assert_eq!(map.iter().count(), 2);
        assert_eq!(map.total_len(), 1);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_serializes_by_version() {
        let map = DomainMap::new(
            vec![Domain::new("a.com").unwrap()],
            vec![Domain::new("b.com").unwrap()],
        );

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"ip4": ["a.com"], "ip6": ["b.com"]}));
    }
}
