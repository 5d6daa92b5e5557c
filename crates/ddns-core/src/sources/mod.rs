//! Domain sources
//!
//! - [`read_domains`]: One environment variable
//! - [`read_domains_from_labels`]: A label on every container of a runtime

pub mod container_labels;
pub mod env;

pub use container_labels::{LabelScan, read_domains_from_labels};
pub use env::read_domains;
