//! Test doubles and common utilities for contract tests
//!
//! This module provides minimal test doubles for the environment and the
//! container runtime that record how they were used.

#![allow(dead_code)]

use ddns_core::error::{Error, Result};
use ddns_core::traits::{ContainerRecord, ContainerRuntime, ContainerRuntimeFactory};
use ddns_core::{Domain, DomainMap, IpVersion};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Build an environment from `(key, value)` pairs
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Parse a list of known-good domains
pub fn domains(names: &[&str]) -> Vec<Domain> {
    names.iter().map(|n| Domain::new(n).unwrap()).collect()
}

/// Render one version's list for easy comparison
pub fn rendered(map: &DomainMap, version: IpVersion) -> Vec<String> {
    map.get(version).iter().map(ToString::to_string).collect()
}

/// A container with a `cf_ddns_domain` label
pub fn labeled(id: &str, value: &str) -> ContainerRecord {
    ContainerRecord::new(id)
        .with_name(format!("/{}", id))
        .with_label("cf_ddns_domain", value)
}

/// A container without any label
pub fn unlabeled(id: &str) -> ContainerRecord {
    ContainerRecord::new(id).with_name(format!("/{}", id))
}

/// Counters shared between a factory and the handles it hands out
#[derive(Debug, Default)]
pub struct HandleCounters {
    connected: AtomicUsize,
    released: AtomicUsize,
    list_calls: AtomicUsize,
    included_stopped: AtomicUsize,
}

impl HandleCounters {
    /// Number of handles acquired
    pub fn connected(&self) -> usize {
        self.connected.load(Ordering::SeqCst)
    }

    /// Number of handles dropped
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Number of list_containers() calls
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of list_containers() calls that asked for stopped containers
    pub fn included_stopped(&self) -> usize {
        self.included_stopped.load(Ordering::SeqCst)
    }
}

/// What the scripted runtime does when asked to connect or list
#[derive(Debug, Clone)]
pub enum Script {
    /// Connecting fails
    Unreachable,
    /// Connecting works, listing fails
    ListingFails,
    /// Both work and return these containers
    Containers(Vec<ContainerRecord>),
}

/// A container runtime factory that follows a fixed script
pub struct ScriptedRuntimeFactory {
    script: Script,
    counters: Arc<HandleCounters>,
}

impl ScriptedRuntimeFactory {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            counters: Arc::new(HandleCounters::default()),
        }
    }

    /// A runtime returning `containers`
    pub fn with_containers(containers: Vec<ContainerRecord>) -> Self {
        Self::new(Script::Containers(containers))
    }

    /// Counters for handles created by this factory
    pub fn counters(&self) -> &HandleCounters {
        &self.counters
    }
}

impl ContainerRuntimeFactory for ScriptedRuntimeFactory {
    fn connect(&self) -> Result<Box<dyn ContainerRuntime>> {
        if let Script::Unreachable = self.script {
            return Err(Error::client_unavailable("socket not found"));
        }

        self.counters.connected.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedRuntime {
            script: self.script.clone(),
            counters: Arc::clone(&self.counters),
        }))
    }
}

/// Handle created by [`ScriptedRuntimeFactory`]
struct ScriptedRuntime {
    script: Script,
    counters: Arc<HandleCounters>,
}

#[async_trait::async_trait]
impl ContainerRuntime for ScriptedRuntime {
    async fn list_containers(&self, include_stopped: bool) -> Result<Vec<ContainerRecord>> {
        self.counters.list_calls.fetch_add(1, Ordering::SeqCst);
        if include_stopped {
            self.counters.included_stopped.fetch_add(1, Ordering::SeqCst);
        }

        match &self.script {
            Script::Containers(containers) => Ok(containers.clone()),
            _ => Err(Error::listing_failed("permission denied")),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

impl Drop for ScriptedRuntime {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}
