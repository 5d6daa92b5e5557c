//! Domain lists from environment variables

use crate::domain::{Domain, parse_list};
use crate::error::Result;
use crate::traits::Environment;

/// Read a comma-separated domain list from one variable
///
/// An unset variable reads as an empty list. The key doubles as the
/// diagnostic label, so a malformed value is reported against it by the
/// parser. Nothing is deduplicated here.
///
/// # Returns
///
/// - `Ok(Vec<Domain>)`: The parsed list, in input order
/// - `Err(Error::MalformedList)`: If the value is not a valid list
pub fn read_domains(env: &dyn Environment, key: &str) -> Result<Vec<Domain>> {
    parse_list(key, &env.var_or_empty(key))
}
