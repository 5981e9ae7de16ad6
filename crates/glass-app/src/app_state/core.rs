//! `ShellApp` struct definition and constructor.

use std::time::Instant;

use glass_config::ShellConfig;
use glass_webview::{WebViewHandle, WebViewManager};
use winit::window::Window;

use crate::display::DisplayController;
use crate::reachability::ReachabilityProbe;
use crate::window::WindowController;

/// The chrome page is the DOM sink, the guest webview the embedded surface.
pub(super) type Display = DisplayController<WebViewHandle, WebViewHandle>;

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: ShellConfig,

    // Privileged side
    pub(super) controller: WindowController<Window>,

    // Display side; dropped before the window on close
    pub(super) display: Option<Display>,
    pub(super) webviews: Option<WebViewManager>,
    /// Set after the guest webview failed to build, to stop retrying.
    pub(super) guest_failed: bool,

    pub(super) probe: Option<ReachabilityProbe>,

    pub(super) last_poll: Instant,
    pub(super) should_exit: bool,
}

impl ShellApp {
    pub fn new(config: ShellConfig) -> Self {
        let probe = match ReachabilityProbe::start() {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(error = %e, "reachability probe unavailable; load failures will not show the overlay");
                None
            }
        };

        Self {
            controller: WindowController::new(config.glass.enabled),
            config,
            display: None,
            webviews: None,
            guest_failed: false,
            probe,
            last_poll: Instant::now(),
            should_exit: false,
        }
    }
}
