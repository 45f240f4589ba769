use std::collections::BTreeSet;
use std::io;

use gateway_oled_core::ProviderError;
use gateway_oled_core::providers::{InterfaceAddress, NetworkInfo, NetworkSnapshot};
use log::debug;
use nix::ifaddrs::getifaddrs;

use super::run_docker;

/// IPv4 interfaces from `getifaddrs` plus the container engine's bridges.
pub struct HostNetwork;

impl NetworkInfo for HostNetwork {
    fn snapshot(&mut self) -> Result<NetworkSnapshot, ProviderError> {
        let interfaces = getifaddrs()
            .map_err(|e| ProviderError::Io(io::Error::from(e)))?
            .filter_map(|ifa| {
                let ip = ifa.address.as_ref()?.as_sockaddr_in()?.ip();
                Some(InterfaceAddress::new(ifa.interface_name, ip))
            })
            .collect();

        // No docker simply means no bridges to hide
        let container_bridges = match run_docker(&[
            "network",
            "ls",
            "-f",
            "driver=bridge",
            "--format",
            "br-{{.ID}}",
        ]) {
            Ok(stdout) => parse_bridge_names(&stdout),
            Err(e) => {
                debug!("Container bridges unknown: {}", e);
                BTreeSet::new()
            }
        };

        Ok(NetworkSnapshot {
            interfaces,
            container_bridges,
        })
    }
}

/// One interface name per line.
pub fn parse_bridge_names(stdout: &str) -> BTreeSet<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bridge_names() {
        let names = parse_bridge_names("br-1a2b3c4d5e6f\n br-0f9e8d7c6b5a \n\n");
        assert_eq!(names.len(), 2);
        assert!(names.contains("br-1a2b3c4d5e6f"));
        assert!(names.contains("br-0f9e8d7c6b5a"));
    }
}
