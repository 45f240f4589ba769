//! Canned providers and a recording sink for scheduler tests.

use std::net::Ipv4Addr;
use std::time::Duration;

use crate::framebuffer::FrameBuffer;
use crate::metrics::{BucketCounts, MetricsSnapshot, Totals};
use crate::providers::{
    InterfaceAddress, MetricsSource, NetworkInfo, NetworkSnapshot, ProcessList, ProviderError,
    Providers, Service, SystemStats, SystemStatsSource, VersionSource,
};
use crate::sink::DisplaySink;
use crate::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

struct Fixed<T>(T);

impl VersionSource for Fixed<Option<String>> {
    fn version(&mut self) -> Option<String> {
        self.0.clone()
    }
}

impl NetworkInfo for Fixed<NetworkSnapshot> {
    fn snapshot(&mut self) -> Result<NetworkSnapshot, ProviderError> {
        Ok(self.0.clone())
    }
}

impl SystemStatsSource for Fixed<SystemStats> {
    fn stats(&mut self) -> SystemStats {
        self.0.clone()
    }
}

impl ProcessList for Fixed<Option<Vec<Service>>> {
    fn services(&mut self) -> Result<Vec<Service>, ProviderError> {
        self.0
            .clone()
            .ok_or_else(|| ProviderError::Unavailable("docker not installed".into()))
    }
}

impl MetricsSource for Fixed<Option<MetricsSnapshot>> {
    fn metrics(&mut self) -> Result<MetricsSnapshot, ProviderError> {
        self.0
            .clone()
            .ok_or_else(|| ProviderError::Unavailable("connection refused".into()))
    }
}

/// Knobs for the canned provider set.
pub(crate) struct MockProviders {
    /// `None` makes the container list fail
    pub services: Option<Vec<Service>>,
    pub metrics_up: bool,
}

impl Default for MockProviders {
    fn default() -> Self {
        Self {
            services: Some(vec![
                Service::new("udp-packet-forwarder", "Up"),
                Service::new("chirpstack", "Exited"),
            ]),
            metrics_up: true,
        }
    }
}

impl MockProviders {
    pub fn build(self) -> Providers {
        let network = NetworkSnapshot {
            interfaces: vec![InterfaceAddress::new(
                "eth0",
                Ipv4Addr::new(192, 168, 1, 20),
            )],
            container_bridges: Default::default(),
        };
        let stats = SystemStats {
            cpu_percent: 7.5,
            memory_percent: 40.0,
            temperature: Some("45.0'C".into()),
            uptime: Duration::from_secs(3_600),
        };
        let metrics = self.metrics_up.then(|| MetricsSnapshot {
            buckets: [(53, BucketCounts { rx: 4, tx: 1 })].into_iter().collect(),
            totals: Totals { rx_max: 4, tx_max: 1 },
        });

        Providers {
            version: Box::new(Fixed(Some("1.4.2".to_string()))),
            network: Box::new(Fixed(network)),
            stats: Box::new(Fixed(stats)),
            processes: Box::new(Fixed(self.services)),
            metrics: Box::new(Fixed(metrics)),
        }
    }
}

/// Sink that keeps a copy of every committed frame.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub commits: usize,
    pub last_frame: Option<FrameBuffer>,
    /// Make every commit fail
    pub fail: bool,
}

#[derive(Debug)]
pub(crate) struct SinkFailed;

impl DisplaySink for RecordingSink {
    type Error = SinkFailed;

    fn commit(&mut self, frame: &mut FrameBuffer) -> Result<(), Self::Error> {
        if self.fail {
            return Err(SinkFailed);
        }
        self.commits += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn power_off(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Sink that mirrors what a buffered panel would show.
///
/// Commits flush the frame's dirty region into `panel`. A failing commit
/// consumes the dirty region like a real transfer but leaves `panel` as it
/// was.
#[derive(Default)]
pub(crate) struct PanelSink {
    pub panel: FrameBuffer,
    /// Fail this many commits before succeeding
    pub failures: usize,
}

impl DisplaySink for PanelSink {
    type Error = SinkFailed;

    fn commit(&mut self, frame: &mut FrameBuffer) -> Result<(), Self::Error> {
        if self.failures > 0 {
            self.failures -= 1;
            let mut lost = FrameBuffer::new();
            let Ok(()) = frame.flush(&mut lost);
            return Err(SinkFailed);
        }
        let Ok(()) = frame.flush(&mut self.panel);
        Ok(())
    }

    fn power_off(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Whether two frames hold the same pixels.
pub(crate) fn same_pixels(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    (0..DISPLAY_HEIGHT_PX as i32)
        .all(|y| (0..DISPLAY_WIDTH_PX as i32).all(|x| a.pixel(x, y) == b.pixel(x, y)))
}
