//! Display manager: owns the panel, the providers and the page rotation
//!
//! A tokio interval signals ticks. Each tick runs on the current worker via
//! `block_in_place`, because providers shell out and make HTTP requests. Ticks
//! therefore never overlap and a slow tick delays the next one instead of
//! queueing a burst. The manager stays with the caller, so the panel can be
//! powered off however the loop ends.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use gateway_oled_core::{DisplaySink, PageManager, Providers};
use log::{debug, error, info};
use tokio::task;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::Error;

pub struct DisplayManager<S> {
    pages: PageManager,
    providers: Providers,
    sink: S,
}

impl<S> DisplayManager<S>
where
    S: DisplaySink,
{
    pub fn new(pages: PageManager, providers: Providers, sink: S) -> Self {
        Self {
            pages,
            providers,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Show the splash page. Called once before the rotation starts.
    pub fn show_intro(&mut self) {
        if let Err(e) = self.pages.show_intro(&mut self.providers, &mut self.sink) {
            error!("Display commit failed: {:?}", e);
        }
    }

    /// Advance the rotation by one page and commit it.
    pub fn tick(&mut self) {
        match self.pages.advance(&mut self.providers, &mut self.sink) {
            Ok(outcome) => {
                if outcome.displayable {
                    debug!(
                        "Showing {} page after {} attempt(s)",
                        outcome.page.title(),
                        outcome.attempts
                    );
                } else {
                    info!("No page had anything to show this tick");
                }
            }
            Err(e) => error!("Display commit failed: {:?}", e),
        }
    }

    /// Run the rotation every `period` until `shutdown` resolves.
    ///
    /// Needs a multi-threaded runtime. A panicking tick ends the loop with
    /// [`Error::TickPanicked`]; the manager is left usable for [`shutdown`].
    ///
    /// [`shutdown`]: Self::shutdown
    pub async fn run<F>(&mut self, period: Duration, shutdown: F) -> Result<(), Error>
    where
        F: Future<Output = ()>,
    {
        info!("Display manager started, rotating every {:?}", period);

        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!("Shutdown requested");
                    return Ok(());
                }
                _ = interval.tick() => {
                    task::block_in_place(|| panic::catch_unwind(AssertUnwindSafe(|| self.tick())))
                        .map_err(|payload| Error::TickPanicked(panic_message(payload.as_ref())))?;
                }
            }
        }
    }

    /// Blank and switch off the panel.
    pub fn shutdown(mut self) {
        match self.sink.power_off() {
            Ok(()) => info!("Display powered off"),
            Err(e) => error!("Display power-off failed: {:?}", e),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
