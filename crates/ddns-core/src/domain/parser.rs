//! Parser for comma-separated domain lists
//!
//! Lists come from environment variables such as `DOMAINS` and from
//! container labels. Items may be separated by commas, whitespace or both:
//!
//! ```text
//! DOMAINS="example.com, www.example.com *.dev.example.com"
//! ```
//!
//! Empty items are skipped, so an unset variable parses to an empty list.
//! A single invalid item rejects the whole list.

use super::Domain;
use crate::error::{Error, Result};
use tracing::warn;

/// Parse a comma-separated domain list
///
/// # Parameters
///
/// - `label`: Where the list came from, used in the diagnostic on failure
/// - `raw`: The raw list
///
/// # Returns
///
/// - `Ok(Vec<Domain>)`: The domains in input order, duplicates preserved
/// - `Err(Error::MalformedList)`: The list had an invalid item. A warning
///   naming `label` has already been logged.
pub fn parse_list(label: &str, raw: &str) -> Result<Vec<Domain>> {
    let mut domains = Vec::new();

    for item in raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
    {
        match Domain::new(item) {
            Ok(domain) => domains.push(domain),
            Err(reason) => {
                warn!(source = label, item, "Failed to parse domain list: {}", reason);
                return Err(Error::malformed_list(label, reason));
            }
        }
    }

    Ok(domains)
}
