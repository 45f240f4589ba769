//! Page rotation scheduler
//!
//! The first page of a rotation is the intro, shown once at startup. Every
//! later tick walks the remaining pages in order, skipping the ones that have
//! nothing to show, and commits exactly one frame.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use heapless::Vec;
use log::{debug, info};
use thiserror::Error;

use crate::config::PageConfig;
use crate::framebuffer::FrameBuffer;
use crate::pages::PageKind;
use crate::providers::Providers;
use crate::sink::DisplaySink;

/// Longest rotation a manager can hold
pub const MAX_PAGES: usize = 8;

/// Startup order of the gateway display.
pub const DEFAULT_ROTATION: [PageKind; 5] = [
    PageKind::Intro,
    PageKind::Network,
    PageKind::Stats,
    PageKind::Docker,
    PageKind::Lorawan,
];

/// Why a page sequence cannot be rotated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RotationError {
    #[error("rotation needs the intro and at least one recurring page, got {0} page(s)")]
    TooFewPages(usize),

    #[error("the first page of a rotation must be the intro")]
    IntroNotFirst,

    #[error("rotation holds at most {MAX_PAGES} pages")]
    Capacity,
}

/// What one rotation tick ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Last page rendered this tick, the one now on screen
    pub page: PageKind,
    /// Whether that page reported itself displayable
    pub displayable: bool,
    /// Pages rendered before settling
    pub attempts: usize,
}

/// Owns the rotation order, the cursor and the frame pages draw into.
pub struct PageManager {
    pages: Vec<PageKind, MAX_PAGES>,
    cursor: usize,
    frame: FrameBuffer,
    config: PageConfig,
}

impl PageManager {
    /// Build a manager over `pages`. The intro must come first and at least
    /// one recurring page must follow it.
    pub fn new(pages: &[PageKind], config: PageConfig) -> Result<Self, RotationError> {
        if pages.len() < 2 {
            return Err(RotationError::TooFewPages(pages.len()));
        }
        if pages[0] != PageKind::Intro {
            return Err(RotationError::IntroNotFirst);
        }
        let pages = Vec::from_slice(pages).map_err(|_| RotationError::Capacity)?;

        Ok(Self {
            pages,
            cursor: 1,
            frame: FrameBuffer::new(),
            config,
        })
    }

    /// Manager over [`DEFAULT_ROTATION`].
    pub fn with_default_rotation(config: PageConfig) -> Self {
        const {
            assert!(DEFAULT_ROTATION.len() <= MAX_PAGES);
        }
        let pages = DEFAULT_ROTATION.into_iter().collect();
        Self {
            pages,
            cursor: 1,
            frame: FrameBuffer::new(),
            config,
        }
    }

    /// Index of the page the next tick tries first. Never 0.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The last frame drawn.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Render the intro page and commit it. Does not move the cursor.
    pub fn show_intro<S: DisplaySink>(
        &mut self,
        providers: &mut Providers,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        let intro = self.pages[0];
        self.render(intro, providers);
        info!("Showing {} page", intro.title());
        self.commit(sink)
    }

    /// Run one rotation tick.
    ///
    /// Pages are tried from the cursor onwards until one is displayable or
    /// every recurring page has been tried once. Whatever was drawn last is
    /// committed, so an all-empty rotation still shows a frame.
    pub fn advance<S: DisplaySink>(
        &mut self,
        providers: &mut Providers,
        sink: &mut S,
    ) -> Result<TickOutcome, S::Error> {
        let recurring = self.pages.len() - 1;
        let mut attempts = 0;

        let outcome = loop {
            let page = self.pages[self.cursor];
            let displayable = self.render(page, providers);
            attempts += 1;
            debug!(
                "Rendered {} page (attempt {}/{}): displayable={}",
                page.title(),
                attempts,
                recurring,
                displayable
            );

            self.cursor += 1;
            if self.cursor >= self.pages.len() {
                self.cursor = 1;
            }

            if displayable || attempts >= recurring {
                break TickOutcome {
                    page,
                    displayable,
                    attempts,
                };
            }
        };

        self.commit(sink)?;
        Ok(outcome)
    }

    /// Commit the frame. After a failure the panel contents are unknown, so
    /// the next commit resends every pixel.
    fn commit<S: DisplaySink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        sink.commit(&mut self.frame).inspect_err(|_| self.frame.invalidate())
    }

    fn render(&mut self, page: PageKind, providers: &mut Providers) -> bool {
        let cleared: Result<(), Infallible> = self.frame.clear(BinaryColor::Off);
        if let Err(never) = cleared {
            match never {}
        }
        match page.render(providers, &self.config, &mut self.frame) {
            Ok(displayable) => displayable,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockProviders, PanelSink, RecordingSink, same_pixels};

    fn manager(pages: &[PageKind]) -> PageManager {
        PageManager::new(pages, PageConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_invalid_rotations() {
        let config = PageConfig::default;
        assert_eq!(
            PageManager::new(&[PageKind::Intro], config()).err(),
            Some(RotationError::TooFewPages(1))
        );
        assert_eq!(
            PageManager::new(&[PageKind::Stats, PageKind::Intro], config()).err(),
            Some(RotationError::IntroNotFirst)
        );
        assert_eq!(
            PageManager::new(&[PageKind::Intro; 9], config()).err(),
            Some(RotationError::Capacity)
        );
    }

    #[test]
    fn test_intro_is_shown_once_and_cursor_starts_after_it() {
        let mut providers = MockProviders::default().build();
        let mut sink = RecordingSink::default();
        let mut pm = PageManager::with_default_rotation(PageConfig::default());

        pm.show_intro(&mut providers, &mut sink).unwrap();
        assert_eq!(sink.commits, 1);
        assert_eq!(pm.cursor(), 1);

        // a full lap never lands on the intro again
        for _ in 0..12 {
            let outcome = pm.advance(&mut providers, &mut sink).unwrap();
            assert_ne!(outcome.page, PageKind::Intro);
            assert_ne!(pm.cursor(), 0);
        }
    }

    #[test]
    fn test_rotation_order_when_everything_displays() {
        let mut providers = MockProviders::default().build();
        let mut sink = RecordingSink::default();
        let mut pm = PageManager::with_default_rotation(PageConfig::default());

        let shown: std::vec::Vec<PageKind> = (0..5)
            .map(|_| pm.advance(&mut providers, &mut sink).unwrap().page)
            .collect();
        assert_eq!(
            shown,
            vec![
                PageKind::Network,
                PageKind::Stats,
                PageKind::Docker,
                PageKind::Lorawan,
                PageKind::Network,
            ]
        );
        assert_eq!(sink.commits, 5);
    }

    #[test]
    fn test_empty_pages_are_skipped_within_one_tick() {
        let mut providers = MockProviders {
            services: None,
            metrics_up: false,
            ..MockProviders::default()
        }
        .build();
        let mut sink = RecordingSink::default();
        let mut pm = PageManager::with_default_rotation(PageConfig::default());

        // Network, Stats
        pm.advance(&mut providers, &mut sink).unwrap();
        pm.advance(&mut providers, &mut sink).unwrap();

        // Docker and LoRaWAN are empty: this tick wraps round to Network
        let outcome = pm.advance(&mut providers, &mut sink).unwrap();
        assert_eq!(outcome.page, PageKind::Network);
        assert!(outcome.displayable);
        assert_eq!(outcome.attempts, 3);
        assert_eq!(pm.cursor(), 2);
        assert_eq!(sink.commits, 3);
    }

    #[test]
    fn test_all_empty_commits_last_attempt() {
        let mut providers = MockProviders {
            services: None,
            metrics_up: false,
            ..MockProviders::default()
        }
        .build();
        let mut sink = RecordingSink::default();
        let mut pm = manager(&[PageKind::Intro, PageKind::Docker, PageKind::Lorawan]);

        let outcome = pm.advance(&mut providers, &mut sink).unwrap();
        assert_eq!(outcome.page, PageKind::Lorawan);
        assert!(!outcome.displayable);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(sink.commits, 1);
        assert_eq!(pm.cursor(), 1);

        // the committed frame is the unavailable outline
        let frame = sink.last_frame.as_ref().unwrap();
        assert_eq!(frame.pixel(0, 0), BinaryColor::On);
        assert_eq!(frame.pixel(64, 32), BinaryColor::Off);
    }

    #[test]
    fn test_frame_is_cleared_between_attempts() {
        let mut providers = MockProviders {
            services: None,
            ..MockProviders::default()
        }
        .build();
        let mut sink = RecordingSink::default();
        let mut pm = manager(&[PageKind::Intro, PageKind::Docker, PageKind::Stats]);

        pm.show_intro(&mut providers, &mut sink).unwrap();
        let outcome = pm.advance(&mut providers, &mut sink).unwrap();
        assert_eq!(outcome.page, PageKind::Stats);

        // nothing left over from the intro's lit border
        assert_eq!(pm.frame().pixel(0, 63), BinaryColor::Off);
    }

    #[test]
    fn test_sink_failure_still_advances_cursor() {
        let mut providers = MockProviders::default().build();
        let mut sink = RecordingSink {
            fail: true,
            ..RecordingSink::default()
        };
        let mut pm = PageManager::with_default_rotation(PageConfig::default());

        assert!(pm.advance(&mut providers, &mut sink).is_err());
        assert_eq!(pm.cursor(), 2);
    }

    #[test]
    fn test_failed_commit_is_resent_in_full() {
        let mut providers = MockProviders::default().build();
        let mut sink = PanelSink::default();
        let mut pm = PageManager::with_default_rotation(PageConfig::default());

        pm.show_intro(&mut providers, &mut sink).unwrap();
        assert!(same_pixels(&sink.panel, pm.frame()));

        // Network is lost on the wire, the panel still shows the intro
        sink.failures = 1;
        assert!(pm.advance(&mut providers, &mut sink).is_err());
        assert_eq!(sink.panel.pixel(0, 63), BinaryColor::On);

        // Stats agrees with Network where the intro border was, yet the
        // border must still be cleared
        let outcome = pm.advance(&mut providers, &mut sink).unwrap();
        assert_eq!(outcome.page, PageKind::Stats);
        assert_eq!(sink.panel.pixel(0, 63), BinaryColor::Off);
        assert!(same_pixels(&sink.panel, pm.frame()));
    }
}
