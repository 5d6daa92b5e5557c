// # ddnsd - DDNS Daemon
//
// The ddnsd daemon is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Resolving the domains to keep updated, per IP version
// 4. Printing the resulting domain map as JSON on stdout
//
// This is a thin integration layer. Source reading, merging and
// deduplication all live in ddns-core.
//
// ## Configuration
//
// ### Domains
// - `DOMAINS`: Comma-separated domains for both IPv4 and IPv6
// - `IP4_DOMAINS`: Comma-separated IPv4-only domains
// - `IP6_DOMAINS`: Comma-separated IPv6-only domains
// - Container label `cf_ddns_domain`: Domains for both versions, per container
//
// ### Daemon
// - `DDNS_CONTAINER_LABELS`: Read container labels (true, false; default true)
// - `DDNS_RESOLVE_TIMEOUT_SECS`: Upper bound for resolving domains (1-300; default 30)
// - `DDNS_LOG_LEVEL`: Log level (trace, debug, info, warn, error; default info)
// - `DDNS_DOCKER_SOCKET`: Unix socket of the Docker Engine (optional)
// - `DOCKER_HOST`: Docker Engine address, used when no socket is set (default: local socket)
//
// ## Example
//
// ```bash
// export DOMAINS=example.com,www.example.com
// export IP6_DOMAINS=v6.example.com
//
// ddnsd > domains.json
// ```

use anyhow::Result;
use ddns_core::traits::{ContainerRuntimeFactory, Environment, ProcessEnvironment};
use ddns_core::{DomainMap, DomainMapBuilder, DomainSourceConfig, Error};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Domain map resolved
/// - 1: Configuration error, including no domains configured
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DdnsExitCode {
    /// Domain map resolved and printed
    Success = 0,
    /// Configuration error or nothing to manage
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<DdnsExitCode> for ExitCode {
    fn from(code: DdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    container_labels: bool,
    resolve_timeout_secs: u64,
    docker_socket: Option<String>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env(env: &dyn Environment) -> Result<Self> {
        let container_labels = match env.var("DDNS_CONTAINER_LABELS") {
            None => true,
            Some(value) => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                other => anyhow::bail!(
                    "DDNS_CONTAINER_LABELS '{}' is not a boolean. Use true or false.",
                    other
                ),
            },
        };

        let resolve_timeout_secs = match env.var("DDNS_RESOLVE_TIMEOUT_SECS") {
            None => 30,
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!(
                    "DDNS_RESOLVE_TIMEOUT_SECS must be a whole number of seconds. Got: {}",
                    value
                )
            })?,
        };

        Ok(Self {
            container_labels,
            resolve_timeout_secs,
            docker_socket: env.var("DDNS_DOCKER_SOCKET").filter(|s| !s.trim().is_empty()),
            log_level: env
                .var("DDNS_LOG_LEVEL")
                .unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if !(1..=300).contains(&self.resolve_timeout_secs) {
            anyhow::bail!(
                "DDNS_RESOLVE_TIMEOUT_SECS must be between 1 and 300 seconds. Got: {}",
                self.resolve_timeout_secs
            );
        }

        if let Some(socket) = self.docker_socket.as_deref().filter(|s| !Path::new(s).is_absolute()) {
            anyhow::bail!(
                "DDNS_DOCKER_SOCKET must be an absolute path. Got: {}",
                socket
            );
        }

        self.level()?;
        Ok(())
    }

    /// Parse the configured log level
    fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "DDNS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }

    /// Upper bound for resolving domains
    fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }

    /// Domain source settings derived from this configuration
    fn sources(&self) -> DomainSourceConfig {
        DomainSourceConfig::new().with_container_labels(self.container_labels)
    }
}

fn main() -> ExitCode {
    let env = ProcessEnvironment;

    // Load configuration from environment
    let config = match Config::from_env(&env) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return DdnsExitCode::ConfigError.into();
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return DdnsExitCode::ConfigError.into();
    }

    // Initialize tracing; stdout is reserved for the domain map
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level().unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DdnsExitCode::ConfigError.into();
    }

    info!("Starting ddnsd");

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DdnsExitCode::RuntimeError.into();
        }
    };

    let runtime = container_runtime(&config);

    let code = rt.block_on(async {
        match resolve(&env, &config, runtime.as_deref()).await {
            Ok(map) => match print_map(&map) {
                Ok(()) => DdnsExitCode::Success,
                Err(e) => {
                    error!("Failed to write domain map: {}", e);
                    DdnsExitCode::RuntimeError
                }
            },
            Err(e) => {
                let code = exit_code_for(&e);
                if code == DdnsExitCode::ConfigError {
                    error!("{}", e);
                } else {
                    error!("Failed to resolve domains: {}", e);
                }
                code
            }
        }
    });

    code.into()
}

/// Map a resolve failure to the exit code reported to the supervisor
fn exit_code_for(err: &anyhow::Error) -> DdnsExitCode {
    match err.downcast_ref::<Error>() {
        Some(Error::NoDomainsConfigured) | Some(Error::Config(_)) => DdnsExitCode::ConfigError,
        _ => DdnsExitCode::RuntimeError,
    }
}

/// Resolve the domain map within the configured timeout
async fn resolve(
    env: &dyn Environment,
    config: &Config,
    runtime: Option<&dyn ContainerRuntimeFactory>,
) -> Result<DomainMap> {
    use tokio::time::timeout;

    let mut builder = DomainMapBuilder::new(env).with_config(config.sources());
    if let Some(runtime) = runtime {
        builder = builder.with_container_runtime(runtime);
    }

    let timeout_duration = config.resolve_timeout();
    let map = timeout(timeout_duration, builder.build())
        .await
        .map_err(|_| anyhow::anyhow!("Resolving domains timed out after {:?}", timeout_duration))??;

    for (version, domains) in map.iter() {
        if domains.is_empty() {
            info!("No {} domains ({} records)", version, version.record_type());
        }
        for domain in domains {
            info!("Managing {} record: {}", version.record_type(), domain);
        }
    }

    Ok(map)
}

/// Container runtime used for label domains, if enabled
fn container_runtime(config: &Config) -> Option<Box<dyn ContainerRuntimeFactory>> {
    if !config.container_labels {
        info!("Container labels disabled");
        return None;
    }

    default_container_runtime(config)
}

#[cfg(feature = "docker")]
fn default_container_runtime(config: &Config) -> Option<Box<dyn ContainerRuntimeFactory>> {
    info!("Reading container labels from Docker");

    // Each Docker request gets the whole resolve budget at most
    let mut factory = ddns_docker::DockerRuntimeFactory::new().with_timeout(config.resolve_timeout());
    if let Some(ref socket) = config.docker_socket {
        factory = factory.with_socket(socket);
    }

    Some(Box::new(factory))
}

#[cfg(not(feature = "docker"))]
fn default_container_runtime(_config: &Config) -> Option<Box<dyn ContainerRuntimeFactory>> {
    tracing::warn!("Container labels enabled but no container runtime compiled in");
    None
}

/// Write the domain map to stdout as pretty JSON
fn print_map(map: &DomainMap) -> Result<()> {
    let json = serde_json::to_string_pretty(map)?;
    println!("{}", json);
    Ok(())
}
