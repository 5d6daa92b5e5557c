//! Configuration types for the DDNS domain pipeline
//!
//! This module defines where the domain sources look for their input.

use serde::{Deserialize, Serialize};

/// Environment variable holding domains for both IP versions
pub const DEFAULT_DOMAINS_KEY: &str = "DOMAINS";

/// Environment variable holding IPv4-only domains
pub const DEFAULT_IP4_DOMAINS_KEY: &str = "IP4_DOMAINS";

/// Environment variable holding IPv6-only domains
pub const DEFAULT_IP6_DOMAINS_KEY: &str = "IP6_DOMAINS";

/// Container label holding domains for both IP versions
pub const DEFAULT_LABEL_KEY: &str = "cf_ddns_domain";

/// Domain source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSourceConfig {
    /// Variable with domains for both IP versions
    #[serde(default = "default_domains_key")]
    pub domains_key: String,

    /// Variable with IPv4-only domains
    #[serde(default = "default_ip4_domains_key")]
    pub ip4_domains_key: String,

    /// Variable with IPv6-only domains
    #[serde(default = "default_ip6_domains_key")]
    pub ip6_domains_key: String,

    /// Container label consulted on every container
    #[serde(default = "default_label_key")]
    pub label_key: String,

    /// Whether to read container labels at all
    #[serde(default = "default_container_labels")]
    pub container_labels: bool,
}

impl DomainSourceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            domains_key: default_domains_key(),
            ip4_domains_key: default_ip4_domains_key(),
            ip6_domains_key: default_ip6_domains_key(),
            label_key: default_label_key(),
            container_labels: default_container_labels(),
        }
    }

    /// Parse and validate a configuration from JSON
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Enable or disable reading container labels
    pub fn with_container_labels(mut self, enabled: bool) -> Self {
        self.container_labels = enabled;
        self
    }

    /// Use a different container label key
    pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        let keys = [
            ("domains_key", &self.domains_key),
            ("ip4_domains_key", &self.ip4_domains_key),
            ("ip6_domains_key", &self.ip6_domains_key),
            ("label_key", &self.label_key),
        ];

        for (field, key) in keys {
            if key.trim().is_empty() {
                return Err(crate::Error::config(format!("{} cannot be empty", field)));
            }
        }

        if self.domains_key == self.ip4_domains_key
            || self.domains_key == self.ip6_domains_key
            || self.ip4_domains_key == self.ip6_domains_key
        {
            return Err(crate::Error::config(
                "domains_key, ip4_domains_key and ip6_domains_key must be distinct",
            ));
        }

        Ok(())
    }
}

impl Default for DomainSourceConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_domains_key() -> String {
    DEFAULT_DOMAINS_KEY.to_string()
}

fn default_ip4_domains_key() -> String {
    DEFAULT_IP4_DOMAINS_KEY.to_string()
}

fn default_ip6_domains_key() -> String {
    DEFAULT_IP6_DOMAINS_KEY.to_string()
}

fn default_label_key() -> String {
    DEFAULT_LABEL_KEY.to_string()
}

fn default_container_labels() -> bool {
    true
}
