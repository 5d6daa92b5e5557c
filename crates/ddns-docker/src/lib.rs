// # Docker Container Runtime
//
// This crate lets the DDNS label domain source read container labels from a
// Docker Engine.
//
// ## Connection
//
// By default the client connects the way the `docker` CLI does:
// - `DOCKER_HOST` if set (unix socket, tcp or named pipe)
// - Otherwise the local socket (`/var/run/docker.sock` on Linux)
//
// A specific unix socket can be chosen with
// [`DockerRuntimeFactory::with_socket`].
//
// Creating a client for a unix socket checks that the socket file exists,
// so a missing socket is reported by `connect()` as
// `Error::ClientUnavailable`. A daemon that exists but does not answer is
// reported when listing, as `Error::ListingFailed`.
//
// ## Access
//
// Only `GET /containers/json?all=true` is issued. Nothing is modified.

use async_trait::async_trait;
use bollard::Docker;
use bollard::container::ListContainersOptions;
use bollard::models::ContainerSummary;
use ddns_core::traits::{ContainerRecord, ContainerRuntime, ContainerRuntimeFactory};
use ddns_core::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Runtime name reported in diagnostics
const RUNTIME_NAME: &str = "docker";

/// Default timeout for requests to the Docker Engine
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Factory creating Docker clients
#[derive(Debug, Clone)]
pub struct DockerRuntimeFactory {
    /// Per-request timeout
    timeout: Duration,

    /// Unix socket to use instead of the default connection
    socket: Option<PathBuf>,
}

impl DockerRuntimeFactory {
    /// Create a factory with the default connection and request timeout
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            socket: None,
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Connect through this unix socket instead of the default connection
    pub fn with_socket(mut self, path: impl Into<PathBuf>) -> Self {
        self.socket = Some(path.into());
        self
    }
}

impl Default for DockerRuntimeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerRuntimeFactory for DockerRuntimeFactory {
    fn connect(&self) -> Result<Box<dyn ContainerRuntime>> {
        let docker = match &self.socket {
            Some(path) => connect_socket(path, self.timeout)?,
            None => Docker::connect_with_defaults()
                .map_err(|e| {
                    Error::client_unavailable(format!("Failed to create Docker client: {}", e))
                })?
                .with_timeout(self.timeout),
        };

        debug!(timeout = ?self.timeout, socket = ?self.socket, "Docker client created");
        Ok(Box::new(DockerRuntime { docker }))
    }
}

/// Create a client for a unix socket
#[cfg(unix)]
fn connect_socket(path: &Path, timeout: Duration) -> Result<Docker> {
    let path = path.to_str().ok_or_else(|| {
        Error::client_unavailable(format!("Docker socket path is not UTF-8: {}", path.display()))
    })?;

    Docker::connect_with_unix(path, timeout.as_secs(), bollard::API_DEFAULT_VERSION)
        .map_err(|e| Error::client_unavailable(format!("Failed to create Docker client: {}", e)))
}

/// Unix sockets are not available on this platform
#[cfg(not(unix))]
fn connect_socket(path: &Path, _timeout: Duration) -> Result<Docker> {
    Err(Error::client_unavailable(format!(
        "Unix sockets are not supported on this platform: {}",
        path.display()
    )))
}

/// Live Docker client; the connection pool is released on drop
pub struct DockerRuntime {
    docker: Docker,
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn list_containers(&self, include_stopped: bool) -> Result<Vec<ContainerRecord>> {
        let options = ListContainersOptions::<String> {
            all: include_stopped,
            ..Default::default()
        };

        let summaries = self
            .docker
            .list_containers(Some(options))
            .await
            .map_err(|e| Error::listing_failed(format!("Docker API request failed: {}", e)))?;

        debug!(count = summaries.len(), "Listed Docker containers");
        Ok(summaries.into_iter().map(to_record).collect())
    }

    fn name(&self) -> &str {
        RUNTIME_NAME
    }
}

/// Convert a Docker API summary into a runtime-neutral record
fn to_record(summary: ContainerSummary) -> ContainerRecord {
    ContainerRecord {
        id: summary.id.unwrap_or_default(),
        names: summary.names.unwrap_or_default(),
        labels: summary.labels.unwrap_or_default(),
    }
}
