//! Domain map builder
//!
//! The DomainMapBuilder is responsible for:
//! - Reading every configured domain source
//! - Merging domains for both IP versions into each version's list
//! - Sorting and deduplicating the lists
//! - Deciding whether anything was configured at all
//!
//! ## Architecture
//!
//! ```text
//!  DOMAINS ──────────┐
//!                    ├──► both versions ──┬──────────────┐
//!  container labels ─┘                    │              │
//!                                         ▼              ▼
//!  IP4_DOMAINS ──────────────────────► IPv4 list     IPv6 list ◄── IP6_DOMAINS
//!                                         │              │
//!                                    normalize      normalize
//!                                         └──► DomainMap ◄┘
//! ```
//!
//! ## Failure Model
//!
//! Every source is read independently. A source that fails contributes
//! nothing and the build continues; the collaborator that failed has
//! already logged why. The build only fails, with
//! [`Error::NoDomainsConfigured`], when both final lists are empty.

use crate::config::DomainSourceConfig;
use crate::domain::{Domain, DomainMap, normalize};
use crate::error::{Error, Result};
use crate::sources::{read_domains, read_domains_from_labels};
use crate::traits::{ContainerRuntimeFactory, Environment};
use tracing::debug;

/// Builds the per-version domain map from all configured sources
///
/// Nothing is cached between builds: each call to [`build`](Self::build)
/// reads every source again.
///
/// The build is sequential. It imposes no timeout of its own; a caller that
/// needs one wraps the future, e.g. in `tokio::time::timeout`, and dropping
/// the future abandons the build.
pub struct DomainMapBuilder<'a> {
    /// Source of environment variables
    env: &'a dyn Environment,

    /// Container runtime, if labels should be read
    runtime: Option<&'a dyn ContainerRuntimeFactory>,

    /// Where to look for domains
    config: DomainSourceConfig,
}

impl<'a> DomainMapBuilder<'a> {
    /// Create a builder reading only from `env`
    pub fn new(env: &'a dyn Environment) -> Self {
        Self {
            env,
            runtime: None,
            config: DomainSourceConfig::default(),
        }
    }

    /// Also read container labels through `runtime`
    pub fn with_container_runtime(mut self, runtime: &'a dyn ContainerRuntimeFactory) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Use a non-default source configuration
    pub fn with_config(mut self, config: DomainSourceConfig) -> Self {
        self.config = config;
        self
    }

    /// Read all sources and build the domain map
    ///
    /// # Returns
    ///
    /// - `Ok(DomainMap)`: At least one IP version has a domain
    /// - `Err(Error::NoDomainsConfigured)`: No source yielded any domain
    /// - `Err(Error::Config)`: The source configuration is invalid
    pub async fn build(&self) -> Result<DomainMap> {
        self.config.validate()?;

        let mut both: Vec<Domain> = Vec::new();
        let mut ip4: Vec<Domain> = Vec::new();
        let mut ip6: Vec<Domain> = Vec::new();

        self.read_env_into(&self.config.domains_key, &mut both);

        if let Some(runtime) = self.runtime.filter(|_| self.config.container_labels) {
            // Not running next to a container runtime is normal; the
            // environment variables still count.
            if let Ok(scan) =
                read_domains_from_labels(runtime, &self.config.label_key, &mut both).await
            {
                debug!(domains = scan.domains, "Container labels read");
            }
        }

        self.read_env_into(&self.config.ip4_domains_key, &mut ip4);
        self.read_env_into(&self.config.ip6_domains_key, &mut ip6);

        ip4.extend(both.iter().cloned());
        ip6.extend(both);

        let ip4 = normalize(ip4);
        let ip6 = normalize(ip6);

        if ip4.is_empty() && ip6.is_empty() {
            return Err(Error::NoDomainsConfigured);
        }

        Ok(DomainMap::new(ip4, ip6))
    }

    /// Read one variable into `domains`, leaving it untouched on failure
    fn read_env_into(&self, key: &str, domains: &mut Vec<Domain>) {
        if let Ok(list) = read_domains(self.env, key) {
            debug!(key, count = list.len(), "Environment variable read");
            *domains = list;
        }
    }
}
