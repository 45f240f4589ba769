//! Page identifiers and render dispatch

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use log::{debug, warn};

use crate::config::PageConfig;
use crate::pages::{docker, intro, lorawan, network, stats};
use crate::providers::Providers;

/// Every page the display can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Intro,
    Network,
    Stats,
    Docker,
    Lorawan,
}

impl PageKind {
    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Intro => "Intro",
            PageKind::Network => "Network",
            PageKind::Stats => "Stats",
            PageKind::Docker => "Docker",
            PageKind::Lorawan => "LoRaWAN",
        }
    }

    /// Query this page's providers and draw it.
    ///
    /// Returns whether the page had anything worth showing. Provider failures
    /// are logged and folded into the result, never propagated; only errors
    /// from the draw target escape.
    pub fn render<D>(
        &self,
        providers: &mut Providers,
        config: &PageConfig,
        display: &mut D,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self {
            PageKind::Intro => {
                let version = providers.version.version().unwrap_or_default();
                intro::draw(display, &config.title, &version)
            }
            PageKind::Network => match providers.network.snapshot() {
                Ok(snapshot) => network::draw(display, Some(&snapshot)),
                Err(e) => {
                    warn!("Network interfaces unavailable: {}", e);
                    network::draw(display, None)
                }
            },
            PageKind::Stats => {
                let snapshot = providers.stats.stats();
                stats::draw(display, &snapshot)
            }
            PageKind::Docker => match providers.processes.services() {
                Ok(services) => docker::draw(display, &services),
                Err(e) => {
                    debug!("Container list unavailable: {}", e);
                    docker::draw(display, &[])
                }
            },
            PageKind::Lorawan => match providers.metrics.metrics() {
                Ok(metrics) => lorawan::draw(display, Some(&metrics), config.bucket_count),
                Err(e) => {
                    debug!("Packet metrics unavailable: {}", e);
                    lorawan::draw(display, None, config.bucket_count)
                }
            },
        }
    }
}
