//! Core traits for the DDNS domain pipeline
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`Environment`]: Lookup of named configuration variables
//! - [`ContainerRuntime`]: Enumerate containers and their labels
//! - [`ContainerRuntimeFactory`]: Acquire container runtime handles

pub mod container_runtime;
pub mod environment;

pub use container_runtime::{ContainerRecord, ContainerRuntime, ContainerRuntimeFactory};
pub use environment::{Environment, ProcessEnvironment};
