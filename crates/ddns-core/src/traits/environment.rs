//! # Environment Trait
//!
//! Abstracts lookup of named configuration variables so the domain sources
//! can be driven by the process environment in production and by a plain
//! map when embedded or under test.
//!
//! ## Usage
//!
//! ```rust
//! use ddns_core::traits::Environment;
//! use std::collections::HashMap;
//!
//! let env = HashMap::from([("DOMAINS".to_string(), "example.com".to_string())]);
//! assert_eq!(env.var("DOMAINS").as_deref(), Some("example.com"));
//! assert_eq!(env.var("IP4_DOMAINS"), None);
//! ```

use std::collections::HashMap;

/// Read-only lookup of configuration variables by exact key
pub trait Environment: Send + Sync {
    /// Get the value of a variable, or `None` if it is not set
    fn var(&self, key: &str) -> Option<String>;

    /// Get the value of a variable, treating an unset one as empty
    fn var_or_empty(&self, key: &str) -> String {
        self.var(key).unwrap_or_default()
    }
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated like unset ones
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
