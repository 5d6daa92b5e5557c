// # Container Runtime Trait
//
// Defines the interface for enumerating containers and reading their labels.
//
// ## Implementations
//
// - Docker Engine API: `ddns-docker` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::traits::ContainerRuntimeFactory;
//
// async fn labels(factory: &dyn ContainerRuntimeFactory) -> ddns_core::Result<()> {
//     // Acquire a handle; it is released when dropped
//     let runtime = factory.connect()?;
//
//     for container in runtime.list_containers(true).await? {
//         println!("{}: {:?}", container.display_name(), container.label("cf_ddns_domain"));
//     }
//
//     Ok(())
// }
// ```

use async_trait::async_trait;
use std::collections::HashMap;

/// Length of the abbreviated container id used in diagnostics
const SHORT_ID_LEN: usize = 12;

/// Metadata of one enumerated container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRecord {
    /// Full container id
    pub id: String,
    /// Container names as reported by the runtime (Docker prefixes them with `/`)
    pub names: Vec<String>,
    /// Container labels
    pub labels: HashMap<String, String>,
}

impl ContainerRecord {
    /// Create a record with the given id and no names or labels
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Add a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add a label
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Look up one label
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Human-readable identification for diagnostics
    ///
    /// The first name without its leading `/`, or the short id if the
    /// container has no name.
    pub fn display_name(&self) -> &str {
        match self.names.first() {
            Some(name) => name.trim_start_matches('/'),
            None => {
                let end = self
                    .id
                    .char_indices()
                    .nth(SHORT_ID_LEN)
                    .map_or(self.id.len(), |(i, _)| i);
                &self.id[..end]
            }
        }
    }
}

/// Trait for container runtime clients
///
/// A value of this trait is a live handle to the runtime. The handle is
/// released when the value is dropped, which is how callers guarantee
/// release on every exit path.
///
/// # Trust Level: Read-Only
///
/// ## Allowed Capabilities
/// - ✅ Query the runtime for container metadata
///
/// ## Forbidden Capabilities
/// - ❌ Start, stop or modify containers
/// - ❌ Parse or interpret label values (use `parse_list`)
/// - ❌ Retry failed requests
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// List containers
    ///
    /// # Parameters
    ///
    /// - `include_stopped`: Also list containers that are not running
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<ContainerRecord>)`: Containers in runtime-defined order
    /// - `Err(Error::ListingFailed)`: If the runtime could not be queried
    async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<ContainerRecord>, crate::Error>;

    /// Get the runtime name (e.g., "docker")
    fn name(&self) -> &str;
}

/// Helper trait for acquiring container runtime handles
pub trait ContainerRuntimeFactory: Send + Sync {
    /// Acquire a handle to the runtime
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn ContainerRuntime>)`: A live handle
    /// - `Err(Error::ClientUnavailable)`: If no client could be created
    fn connect(&self) -> Result<Box<dyn ContainerRuntime>, crate::Error>;
}
