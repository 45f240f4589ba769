use gateway_oled_core::ProviderError;
use gateway_oled_core::providers::{ProcessList, Service};

use super::run_docker;

/// Containers as reported by `docker ps -a`.
pub struct DockerPs;

impl ProcessList for DockerPs {
    fn services(&mut self) -> Result<Vec<Service>, ProviderError> {
        let stdout = run_docker(&["ps", "-a", "--format", "{{.Names}}\t{{.Status}}"])?;
        Ok(parse_services(&stdout))
    }
}

/// Parse `name<TAB>status` lines.
///
/// Only the first word of the status is kept (`Up 3 hours` is `Up`). The
/// result is ordered by status then name, both descending, so running
/// containers come before exited ones.
pub fn parse_services(stdout: &str) -> Vec<Service> {
    let mut services: Vec<Service> = stdout
        .lines()
        .filter_map(|line| {
            let (name, status) = line.split_once('\t')?;
            let name = name.trim();
            let status = status.split_whitespace().next()?;
            (!name.is_empty()).then(|| Service::new(name, status))
        })
        .collect();

    services.sort_by(|a, b| {
        b.status
            .cmp(&a.status)
            .then_with(|| b.name.cmp(&a.name))
    });
    services
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_order() {
        let stdout = "chirpstack\tExited (0) 2 days ago\n\
                      udp-packet-forwarder\tUp 3 hours\n\
                      basicstation\tUp 3 hours (healthy)\n\
                      \n\
                      redis\tCreated\n";

        assert_eq!(
            parse_services(stdout),
            vec![
                Service::new("udp-packet-forwarder", "Up"),
                Service::new("basicstation", "Up"),
                Service::new("chirpstack", "Exited"),
                Service::new("redis", "Created"),
            ]
        );
    }

    #[test]
    fn test_no_containers() {
        assert!(parse_services("").is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        assert!(parse_services("no tab here\nname\t\n").is_empty());
    }
}
