//! Data provider traits and the snapshot types they return.
//!
//! Every provider is queried fresh on each render. Implementations live
//! outside this crate: the daemon talks to the OS, the container engine and
//! the metrics endpoint; the simulator returns synthetic data.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::time::Duration;

use thiserror::Error;

use crate::metrics::MetricsSnapshot;

/// Why a provider could not produce a snapshot.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The source could not be reached (connection refused, timeout, missing binary)
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with something that does not parse
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Local I/O failure while querying the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One IPv4 address bound to a network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub name: String,
    pub address: Ipv4Addr,
}

impl InterfaceAddress {
    pub fn new(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// Interfaces on the host together with the bridges owned by the container engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkSnapshot {
    /// Every (interface, IPv4) pair in enumeration order
    pub interfaces: Vec<InterfaceAddress>,
    /// Bridge interface names created by the container engine (`br-<id>`)
    pub container_bridges: BTreeSet<String>,
}

/// Point-in-time system statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemStats {
    /// CPU utilization, 0-100
    pub cpu_percent: f32,
    /// Memory in use, 0-100
    pub memory_percent: f32,
    /// Preformatted SoC temperature, `None` when no sensor is present
    pub temperature: Option<String>,
    /// Time since boot
    pub uptime: Duration,
}

/// A container or background service and its status word (`Up`, `Exited`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub status: String,
}

impl Service {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}

/// Short build identifier for the splash page.
pub trait VersionSource {
    fn version(&mut self) -> Option<String>;
}

/// Host network interfaces.
pub trait NetworkInfo {
    fn snapshot(&mut self) -> Result<NetworkSnapshot, ProviderError>;
}

/// CPU, memory, temperature and uptime.
pub trait SystemStatsSource {
    fn stats(&mut self) -> SystemStats;
}

/// Container status list, pre-sorted by status then name.
pub trait ProcessList {
    fn services(&mut self) -> Result<Vec<Service>, ProviderError>;
}

/// Bucketed packet counters.
pub trait MetricsSource {
    fn metrics(&mut self) -> Result<MetricsSnapshot, ProviderError>;
}

/// The full set of providers a page rotation renders from.
///
/// Boxed so the daemon can move the whole set into a blocking task each tick.
pub struct Providers {
    pub version: Box<dyn VersionSource + Send>,
    pub network: Box<dyn NetworkInfo + Send>,
    pub stats: Box<dyn SystemStatsSource + Send>,
    pub processes: Box<dyn ProcessList + Send>,
    pub metrics: Box<dyn MetricsSource + Send>,
}
