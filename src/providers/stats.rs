use std::fs;
use std::thread;
use std::time::Duration;

use gateway_oled_core::providers::{SystemStats, SystemStatsSource};
use sysinfo::{Components, MINIMUM_CPU_UPDATE_INTERVAL, System};

/// Kernel thermal zone read when no hwmon sensor matches
const THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Sensor labels that identify the SoC or CPU temperature
const CPU_LABELS: [&str; 4] = ["cpu", "soc", "package", "core"];

/// CPU, memory, temperature and uptime via `sysinfo`.
pub struct HostStats {
    system: System,
    components: Components,
}

impl Default for HostStats {
    fn default() -> Self {
        Self::new()
    }
}

impl HostStats {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            components: Components::new_with_refreshed_list(),
        }
    }

    fn temperature(&mut self) -> Option<f32> {
        self.components.refresh();
        let hwmon = self
            .components
            .list()
            .iter()
            .find(|component| {
                let label = component.label().to_lowercase();
                CPU_LABELS.iter().any(|l| label.contains(l))
            })
            .map(|component| component.temperature())
            .filter(|t| t.is_finite());

        hwmon.or_else(|| {
            fs::read_to_string(THERMAL_ZONE)
                .ok()
                .and_then(|text| parse_millidegrees(&text))
        })
    }
}

impl SystemStatsSource for HostStats {
    fn stats(&mut self) -> SystemStats {
        // CPU usage is a delta between two refreshes
        self.system.refresh_cpu_all();
        thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu_all();
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let memory_percent = if total == 0 {
            0.0
        } else {
            (self.system.used_memory() as f64 / total as f64 * 100.0) as f32
        };

        SystemStats {
            cpu_percent: self.system.global_cpu_usage(),
            memory_percent,
            temperature: self.temperature().map(format_celsius),
            uptime: Duration::from_secs(System::uptime()),
        }
    }
}

/// Parse a sysfs thermal reading in millidegrees Celsius.
pub fn parse_millidegrees(text: &str) -> Option<f32> {
    text.trim()
        .parse::<i64>()
        .ok()
        .map(|milli| milli as f32 / 1000.0)
}

/// Format like `vcgencmd measure_temp`, e.g. `48.3'C`.
pub fn format_celsius(celsius: f32) -> String {
    format!("{celsius:.1}'C")
}
