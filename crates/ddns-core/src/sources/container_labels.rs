//! Domain lists from container labels
//!
//! Every container known to the runtime, running or not, may carry a label
//! (by default `cf_ddns_domain`) holding a comma-separated domain list.
//!
//! ## Failure Handling
//!
//! | Failure                         | Effect                                   |
//! |---------------------------------|------------------------------------------|
//! | Runtime client cannot be created | Whole source fails, nothing appended    |
//! | Containers cannot be listed      | Whole source fails, nothing appended    |
//! | One label is malformed           | Warning, that container is skipped      |
//!
//! The runtime handle is owned by [`read_domains_from_labels`] and dropped
//! before it returns, whichever of the paths above is taken.

use crate::domain::{Domain, parse_list};
use crate::error::Result;
use crate::traits::ContainerRuntimeFactory;
use tracing::{debug, info, warn};

/// Summary of one pass over the container runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelScan {
    /// Containers returned by the runtime
    pub containers: usize,
    /// Containers carrying the label
    pub labeled: usize,
    /// Labeled containers whose value could not be parsed
    pub rejected: usize,
    /// Domains appended to the output
    pub domains: usize,
}

/// Append domains found in container labels to `domains`
///
/// # Parameters
///
/// - `factory`: Acquires the runtime handle
/// - `label_key`: Label consulted on every container
/// - `domains`: Accumulator; parsed lists are appended in container order
///
/// # Returns
///
/// - `Ok(LabelScan)`: Enumeration completed, possibly skipping bad labels
/// - `Err(Error::ClientUnavailable)` or `Err(Error::ListingFailed)`: Nothing
///   was appended
pub async fn read_domains_from_labels(
    factory: &dyn ContainerRuntimeFactory,
    label_key: &str,
    domains: &mut Vec<Domain>,
) -> Result<LabelScan> {
    let runtime = factory.connect().inspect_err(|e| {
        warn!("Failed to create container runtime client: {}", e);
    })?;

    let containers = runtime.list_containers(true).await.inspect_err(|e| {
        warn!(runtime = runtime.name(), "Failed to list containers: {}", e);
    })?;

    let mut scan = LabelScan {
        containers: containers.len(),
        ..LabelScan::default()
    };

    for container in &containers {
        let Some(value) = container.label(label_key) else {
            continue;
        };
        scan.labeled += 1;

        let source = format!(
            "label {} on container {}",
            label_key,
            container.display_name()
        );

        match parse_list(&source, value) {
            Ok(parsed) => {
                debug!(
                    container = container.display_name(),
                    count = parsed.len(),
                    "Read domains from container label"
                );
                scan.domains += parsed.len();
                domains.extend(parsed);
            }
            Err(_) => {
                // parse_list already reported what was wrong with the value
                warn!(
                    container = container.display_name(),
                    id = %container.id,
                    "Skipping container with malformed {} label",
                    label_key
                );
                scan.rejected += 1;
            }
        }
    }

    info!(
        runtime = runtime.name(),
        containers = scan.containers,
        labeled = scan.labeled,
        rejected = scan.rejected,
        "Read domains from container labels"
    );

    Ok(scan)
}
