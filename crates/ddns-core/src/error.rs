//! Error types for the DDNS domain pipeline
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for DDNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DDNS domain pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// The container runtime client could not be created
    #[error("Container runtime unavailable: {0}")]
    ClientUnavailable(String),

    /// The container runtime refused or failed to list containers
    #[error("Failed to list containers: {0}")]
    ListingFailed(String),

    /// A comma-separated domain list could not be parsed
    #[error("Malformed domain list in {label}: {reason}")]
    MalformedList {
        /// Where the list came from (variable name or container label)
        label: String,
        /// What was wrong with it
        reason: String,
    },

    /// No source produced a single domain for either IP version
    #[error("No domains configured (checked environment variables and container labels)")]
    NoDomainsConfigured,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a client-unavailable error
    pub fn client_unavailable(msg: impl Into<String>) -> Self {
        Self::ClientUnavailable(msg.into())
    }

    /// Create a listing-failed error
    pub fn listing_failed(msg: impl Into<String>) -> Self {
        Self::ListingFailed(msg.into())
    }

    /// Create a malformed-list error
    pub fn malformed_list(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedList {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
