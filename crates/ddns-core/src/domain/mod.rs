//! Domain model for the DDNS system
//!
//! - [`Domain`]: A validated, normalized domain name
//! - [`IpVersion`]: The address family a domain list applies to
//! - [`DomainMap`]: The consolidated per-version result
//! - [`parse_list`]: Parser for comma-separated domain lists
//! - [`normalize`]: Sort and deduplicate a domain sequence

pub mod ip_version;
pub mod map;
pub mod name;
pub mod normalize;
pub mod parser;

pub use ip_version::IpVersion;
pub use map::DomainMap;
pub use name::Domain;
pub use normalize::normalize;
pub use parser::parse_list;
