//! Desktop simulator for the gateway OLED status pages.
//!
//! Runs the real page rotation from gateway-oled-core against synthetic
//! providers and shows the result in an SDL2 window via
//! `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key | Action                               |
//! |-----|--------------------------------------|
//! | N   | Advance the rotation now             |
//! | D   | Toggle an empty container list       |
//! | M   | Toggle the metrics endpoint down/up  |
//! | Q   | Quit                                 |

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::Keycode,
};
use log::{info, warn};

use gateway_oled_core::metrics::BucketCounts;
use gateway_oled_core::providers::{
    InterfaceAddress, MetricsSource, NetworkInfo, NetworkSnapshot, ProcessList, Service,
    SystemStats, SystemStatsSource, VersionSource,
};
use gateway_oled_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use gateway_oled_core::{
    DisplaySink, FrameBuffer, MetricsSnapshot, PageConfig, PageManager, ProviderError, Providers,
    Totals,
};

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 4;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Time between rotation ticks, same as the daemon default.
const ROTATION_PERIOD: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Synthetic providers
// ---------------------------------------------------------------------------

/// Failure toggles flipped from the keyboard.
#[derive(Clone, Default)]
struct Toggles {
    no_containers: Arc<AtomicBool>,
    metrics_down: Arc<AtomicBool>,
}

impl Toggles {
    fn flip(flag: &AtomicBool) -> bool {
        !flag.fetch_xor(true, Ordering::Relaxed)
    }
}

struct MockVersion;

impl VersionSource for MockVersion {
    fn version(&mut self) -> Option<String> {
        Some("simulator".into())
    }
}

struct MockNetwork;

impl NetworkInfo for MockNetwork {
    fn snapshot(&mut self) -> Result<NetworkSnapshot, ProviderError> {
        Ok(NetworkSnapshot {
            interfaces: vec![
                InterfaceAddress::new("lo", Ipv4Addr::LOCALHOST),
                InterfaceAddress::new("eth0", Ipv4Addr::new(192, 168, 1, 42)),
                InterfaceAddress::new("wlan0", Ipv4Addr::new(10, 3, 141, 1)),
                InterfaceAddress::new("docker0", Ipv4Addr::new(172, 17, 0, 1)),
                InterfaceAddress::new("br-5f2e8a9c", Ipv4Addr::new(172, 18, 0, 1)),
            ],
            container_bridges: ["br-5f2e8a9c".to_string()].into_iter().collect(),
        })
    }
}

/// Slowly varying CPU and memory load.
struct MockStats {
    started: Instant,
}

impl SystemStatsSource for MockStats {
    fn stats(&mut self) -> SystemStats {
        let t = self.started.elapsed().as_secs_f32();
        SystemStats {
            cpu_percent: 15.0 + 10.0 * (t / 20.0).sin(),
            memory_percent: 45.0 + 5.0 * (t / 60.0).cos(),
            temperature: Some(format!("{:.1}'C", 47.0 + 2.0 * (t / 30.0).sin())),
            uptime: Duration::from_secs(3 * 86_400 + 4 * 3_600) + self.started.elapsed(),
        }
    }
}

struct MockContainers {
    toggles: Toggles,
}

impl ProcessList for MockContainers {
    fn services(&mut self) -> Result<Vec<Service>, ProviderError> {
        if self.toggles.no_containers.load(Ordering::Relaxed) {
            return Ok(Vec::new());
        }
        Ok(vec![
            Service::new("udp-packet-forwarder", "Up"),
            Service::new("chirpstack", "Up"),
            Service::new("chirpstack-gateway-bridge", "Up"),
            Service::new("mosquitto", "Up"),
            Service::new("redis", "Up"),
            Service::new("postgresql", "Exited"),
        ])
    }
}

/// Bursty received-packet counts that scroll left as time passes.
struct MockMetrics {
    toggles: Toggles,
    started: Instant,
    bucket_count: u32,
}

impl MetricsSource for MockMetrics {
    fn metrics(&mut self) -> Result<MetricsSnapshot, ProviderError> {
        if self.toggles.metrics_down.load(Ordering::Relaxed) {
            return Err(ProviderError::Unavailable("connection refused".into()));
        }

        let offset = self.started.elapsed().as_secs();
        let buckets: std::collections::BTreeMap<u32, BucketCounts> = (0..self.bucket_count)
            .filter_map(|i| {
                let t = (offset + u64::from(i)) as f64;
                let rx = (6.0 + 5.0 * (t / 4.0).sin() + 3.0 * (t / 1.7).cos()).max(0.0) as u64;
                (rx > 0).then_some((i, BucketCounts { rx, tx: rx / 4 }))
            })
            .collect();
        let rx_max = buckets.values().map(|b| b.rx).max().unwrap_or(0);
        let tx_max = buckets.values().map(|b| b.tx).max().unwrap_or(0);

        Ok(MetricsSnapshot {
            buckets,
            totals: Totals { rx_max, tx_max },
        })
    }
}

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

struct SimulatorSink {
    display: SimulatorDisplay<BinaryColor>,
}

impl DisplaySink for SimulatorSink {
    type Error = core::convert::Infallible;

    fn commit(&mut self, frame: &mut FrameBuffer) -> Result<(), Self::Error> {
        frame.flush(&mut self.display)
    }

    fn power_off(&mut self) -> Result<(), Self::Error> {
        self.display.clear(BinaryColor::Off)
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting gateway-oled simulator");
    info!(
        "Display: {}x{} (scale {}x)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: N=Next  D=Toggle containers  M=Toggle metrics  Q=Quit");

    let config = PageConfig::default();
    let toggles = Toggles::default();
    let started = Instant::now();

    let mut providers = Providers {
        version: Box::new(MockVersion),
        network: Box::new(MockNetwork),
        stats: Box::new(MockStats { started }),
        processes: Box::new(MockContainers {
            toggles: toggles.clone(),
        }),
        metrics: Box::new(MockMetrics {
            toggles: toggles.clone(),
            started,
            bucket_count: config.bucket_count,
        }),
    };

    let mut sink = SimulatorSink {
        display: SimulatorDisplay::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)),
    };

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(WINDOW_SCALE)
        .build();
    let mut window = Window::new("Gateway OLED Simulator", &output_settings);

    let mut pages = PageManager::with_default_rotation(config);
    let _ = pages.show_intro(&mut providers, &mut sink);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    window.update(&sink.display);
    let mut last_tick = Instant::now();

    'running: loop {
        let frame_start = Instant::now();
        let mut advance_now = false;

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::N => advance_now = true,
                    Keycode::D => {
                        let on = Toggles::flip(&toggles.no_containers);
                        info!("Container list empty: {}", on);
                    }
                    Keycode::M => {
                        let on = Toggles::flip(&toggles.metrics_down);
                        info!("Metrics endpoint down: {}", on);
                    }
                    _ => {}
                },

                _ => {}
            }
        }

        if advance_now || last_tick.elapsed() >= ROTATION_PERIOD {
            match pages.advance(&mut providers, &mut sink) {
                Ok(outcome) => info!(
                    "Showing {} page after {} attempt(s)",
                    outcome.page.title(),
                    outcome.attempts
                ),
                Err(e) => warn!("Commit failed: {:?}", e),
            }
            last_tick = Instant::now();
        }

        window.update(&sink.display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    let _ = sink.power_off();
    info!("Simulator exiting");
}
