//! Polling of webview, bridge and probe events.

use std::time::Instant;

use glass_webview::{PageLoadState, SurfaceId, WebViewEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use crate::display::GuestEvent;

use super::core::ShellApp;
use super::types::POLL_INTERVAL;

impl ShellApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_probe();
            self.pump_bridge(event_loop);
        }

        if !self.should_exit {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
        }
    }

    /// Route webview events to the window controller or the display.
    fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::PageLoad {
                    surface: SurfaceId::Chrome,
                    state: PageLoadState::Finished,
                    ..
                } => {
                    self.controller.show();
                }
                WebViewEvent::PageLoad {
                    surface: SurfaceId::Guest,
                    state,
                    url,
                } => self.handle_guest_load(state, &url),
                WebViewEvent::IpcMessage {
                    surface: SurfaceId::Chrome,
                    body,
                } => {
                    if let Some(display) = self.display.as_mut() {
                        display.handle_chrome_message(&body);
                    }
                    self.ensure_guest();
                }
                WebViewEvent::NewWindowRequested { surface, url } => {
                    if let Some(display) = self.display.as_mut() {
                        tracing::debug!(%surface, url = %url, "new-window request");
                        display.handle_guest_event(GuestEvent::NewWindow { url });
                    }
                }
                WebViewEvent::Closed { surface } => {
                    tracing::debug!(%surface, "WebView closed");
                }
                other => {
                    tracing::trace!(?other, "webview event ignored");
                }
            }
        }
    }

    fn handle_guest_load(&mut self, state: PageLoadState, url: &str) {
        let Some(display) = self.display.as_mut() else {
            return;
        };
        match state {
            PageLoadState::Started => {
                display.handle_guest_event(GuestEvent::LoadStarted);
                if let Some(probe) = self.probe.as_mut() {
                    probe.probe(url);
                }
            }
            PageLoadState::Finished => display.handle_guest_event(GuestEvent::LoadStopped),
        }
    }

    fn poll_probe(&mut self) {
        let (Some(probe), Some(display)) = (&self.probe, self.display.as_mut()) else {
            return;
        };
        for outcome in probe.drain() {
            display.handle_guest_event(outcome.to_guest_event());
        }
    }

    /// Display -> window requests, then window -> display replies and events.
    fn pump_bridge(&mut self, event_loop: &ActiveEventLoop) {
        if self.controller.service_requests() {
            self.close_window(event_loop);
            return;
        }
        if let Some(display) = self.display.as_mut() {
            display.poll_bridge();
        }
    }
}
