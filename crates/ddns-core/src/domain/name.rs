//! Domain name values
//!
//! A [`Domain`] is produced only through [`Domain::new`], which normalizes
//! case and the trailing dot and then validates the name against the basic
//! RFC 1035 rules. Two domains compare by their rendered DNS form, so the
//! order is total and stable across runs.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Maximum length of a full domain name (RFC 1035)
const MAX_NAME_LEN: usize = 253;

/// Maximum length of a single label (RFC 1035)
const MAX_LABEL_LEN: usize = 63;

/// A validated, normalized domain name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Domain {
    /// A plain fully-qualified domain name, e.g. `www.example.com`
    Fqdn(String),
    /// A wildcard domain `*.example.com`, stored without the `*.` prefix
    Wildcard(String),
}

impl Domain {
    /// Parse and normalize a single domain name
    ///
    /// Leading and trailing whitespace is ignored, ASCII letters are
    /// lowercased and one trailing dot is dropped. A leading `*.` makes the
    /// result a [`Domain::Wildcard`].
    ///
    /// # Returns
    ///
    /// - `Ok(Domain)`: The normalized domain
    /// - `Err(String)`: A human-readable reason the name was rejected
    pub fn new(raw: &str) -> Result<Self, String> {
        let lowered = raw.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix('.').unwrap_or(&lowered);

        match name.strip_prefix("*.") {
            Some(rest) => {
                validate_name(rest)?;
                Ok(Domain::Wildcard(rest.to_string()))
            }
            None => {
                validate_name(name)?;
                Ok(Domain::Fqdn(name.to_string()))
            }
        }
    }

    /// The name without any wildcard prefix
    pub fn base_name(&self) -> &str {
        match self {
            Domain::Fqdn(name) | Domain::Wildcard(name) => name,
        }
    }

    /// Whether this is a wildcard domain
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Domain::Wildcard(_))
    }

    /// Bytes of the rendered DNS form, without building a string
    fn rendered_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let prefix: &[u8] = if self.is_wildcard() { b"*." } else { b"" };
        prefix.iter().copied().chain(self.base_name().bytes())
    }
}

/// Validate a domain name without wildcard prefix
fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("domain name cannot be empty".to_string());
    }

    if name.len() > MAX_NAME_LEN {
        return Err(format!(
            "domain name too long: {} chars (max {}): '{}'",
            name.len(),
            MAX_NAME_LEN,
            name
        ));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(format!("domain name has empty label: '{}'", name));
        }

        if label.len() > MAX_LABEL_LEN {
            return Err(format!(
                "domain label too long: {} chars (max {}): '{}'",
                label.len(),
                MAX_LABEL_LEN,
                label
            ));
        }

        // Underscores show up in service labels such as _acme-challenge
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!(
                "domain label contains invalid characters: '{}'",
                label
            ));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!(
                "domain label cannot start or end with hyphen: '{}'",
                label
            ));
        }
    }

    Ok(())
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Fqdn(name) => f.write_str(name),
            Domain::Wildcard(name) => write!(f, "*.{}", name),
        }
    }
}

impl Ord for Domain {
    fn cmp(&self, other: &Self) -> Ordering {
        // Byte order of the rendered form, so `*.x` lands before `x`
        self.rendered_bytes().cmp(other.rendered_bytes())
    }
}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
