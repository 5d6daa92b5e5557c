// # ddns-core
//
// Core library for consolidating the domains a DDNS updater keeps current.
//
// ## Architecture Overview
//
// This library turns several, possibly overlapping, domain sources into one
// sorted, deduplicated list per IP version:
// - **Environment**: Trait for reading `DOMAINS`, `IP4_DOMAINS`, `IP6_DOMAINS`
// - **ContainerRuntime**: Trait for enumerating containers and their labels
// - **DomainMapBuilder**: Orchestrates the sources into a `DomainMap`
// - **parse_list / normalize**: Domain list parsing and canonical ordering
//
// ## Design Principles
//
// 1. **Independent Sources**: A failing source contributes nothing, it never aborts the build
// 2. **Deterministic Output**: Lists are fully sorted, then deduplicated
// 3. **Scoped Resources**: Runtime handles are dropped before the label source returns
// 4. **Library-First**: The daemon is a thin wrapper around `DomainMapBuilder`

pub mod builder;
pub mod config;
pub mod domain;
pub mod error;
pub mod sources;
pub mod traits;

// Re-export core types for convenience
pub use builder::DomainMapBuilder;
pub use config::DomainSourceConfig;
pub use domain::{Domain, DomainMap, IpVersion, normalize, parse_list};
pub use error::{Error, Result};
pub use traits::{ContainerRecord, ContainerRuntime, ContainerRuntimeFactory, Environment};
