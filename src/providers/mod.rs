//! Host implementations of the page providers

use std::io;
use std::process::Command;

use gateway_oled_core::{ProviderError, Providers};
use log::debug;

use crate::config::{METRICS_TIMEOUT, METRICS_URL, OS_RELEASE};
use crate::error::Error;

pub mod docker;
pub mod metrics;
pub mod network;
pub mod stats;
pub mod version;

pub use docker::DockerPs;
pub use metrics::HttpMetrics;
pub use network::HostNetwork;
pub use stats::HostStats;
pub use version::OsReleaseVersion;

/// Build the provider set for this host.
pub fn host_providers() -> Result<Providers, Error> {
    Ok(Providers {
        version: Box::new(OsReleaseVersion::new(OS_RELEASE.into())),
        network: Box::new(HostNetwork),
        stats: Box::new(HostStats::new()),
        processes: Box::new(DockerPs),
        metrics: Box::new(HttpMetrics::new(METRICS_URL.into(), METRICS_TIMEOUT)?),
    })
}

/// Run the docker CLI and return its stdout.
pub(crate) fn run_docker(args: &[&str]) -> Result<String, ProviderError> {
    let output = Command::new("docker").args(args).output().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ProviderError::Unavailable("docker is not installed".into())
        } else {
            ProviderError::Io(e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("docker {} failed: {}", args.join(" "), stderr.trim());
        return Err(ProviderError::Unavailable(format!(
            "docker exited with {}",
            output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
