//! The privileged window side.
//!
//! `WindowController` is the only owner of the native window. It services
//! bridge requests and relays platform signals as bridge events.

use std::io;

use glass_bridge::{
    is_external_url_allowed, BridgeEvent, BridgeHost, BridgeReply, BridgeRequest, ThemeUpdate,
};
use glass_common::{ThemeMode, ThemeState, WindowState};
use serde_json::Value;

use super::native::NativeWindow;
use super::theme;

/// How a visible window is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Uninitialized,
    /// Created but not shown until the chrome page is ready.
    Hidden,
    Visible(Presentation),
    Closed,
}

type Opener = Box<dyn Fn(&str) -> io::Result<()>>;

pub struct WindowController<W: NativeWindow> {
    window: Option<W>,
    host: Option<BridgeHost>,
    phase: WindowPhase,
    state: WindowState,
    glass_enabled: bool,
    opener: Opener,
}

impl<W: NativeWindow> WindowController<W> {
    pub fn new(glass_enabled: bool) -> Self {
        Self {
            window: None,
            host: None,
            phase: WindowPhase::Uninitialized,
            state: WindowState::default(),
            glass_enabled,
            opener: Box::new(|url: &str| open::that(url)),
        }
    }

    /// Replace how external URLs are opened.
    pub fn with_opener(mut self, opener: impl Fn(&str) -> io::Result<()> + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    pub fn glass_enabled(&self) -> bool {
        self.glass_enabled
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Take ownership of a freshly created (hidden) window and the host end
    /// of its bridge.
    pub fn attach(&mut self, window: W, host: BridgeHost) {
        if self.window.is_some() {
            tracing::warn!("replacing an existing window");
        }
        self.state = WindowState {
            focused: false,
            maximized: window.is_maximized(),
        };
        self.window = Some(window);
        self.host = Some(host);
        self.phase = WindowPhase::Hidden;
    }

    /// Show the window once the display is ready. Only acts while hidden.
    pub fn show(&mut self) -> bool {
        if self.phase != WindowPhase::Hidden {
            return false;
        }
        let Some(window) = &self.window else {
            return false;
        };
        window.set_visible(true);
        window.focus();
        self.phase = WindowPhase::Visible(self.presentation());
        tracing::info!("window shown");
        true
    }

    /// Give up the window. The caller drops it after its webviews.
    pub fn detach(&mut self) -> Option<W> {
        self.host = None;
        self.phase = WindowPhase::Closed;
        self.state = WindowState::default();
        self.window.take()
    }

    fn presentation(&self) -> Presentation {
        match &self.window {
            Some(w) if w.is_minimized() == Some(true) => Presentation::Minimized,
            Some(w) if w.is_maximized() => Presentation::Maximized,
            _ => Presentation::Normal,
        }
    }

    fn set_presentation(&mut self, presentation: Presentation) {
        if let WindowPhase::Visible(_) = self.phase {
            self.phase = WindowPhase::Visible(presentation);
        }
    }

    // -------------------------------------------------------------------------
    // Platform signals
    // -------------------------------------------------------------------------

    pub fn focus_changed(&mut self, focused: bool) {
        self.state.focused = focused;
        if focused {
            let presentation = self.presentation();
            self.set_presentation(presentation);
        }
        self.emit(BridgeEvent::WindowFocus(focused));
    }

    /// Re-read maximize/minimize after a resize or move. A maximize change is
    /// relayed once.
    pub fn refresh(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let maximized = window.is_maximized();
        let presentation = self.presentation();
        self.set_presentation(presentation);

        if maximized != self.state.maximized {
            self.state.maximized = maximized;
            self.emit(BridgeEvent::WindowMaximized(maximized));
        }
    }

    pub fn current_theme(&self) -> ThemeMode {
        theme::resolve(self.window.as_ref().and_then(|w| w.theme()))
    }

    /// Push the full theme state to the display.
    pub fn notify_theme(&self) {
        self.theme_changed(self.current_theme());
    }

    /// Relay an OS theme change.
    pub fn theme_changed(&self, mode: ThemeMode) {
        self.emit(BridgeEvent::ThemeUpdated(ThemeUpdate::full(ThemeState {
            mode,
            glass_enabled: self.glass_enabled,
        })));
    }

    fn emit(&self, event: BridgeEvent) {
        let Some(host) = &self.host else {
            tracing::debug!(channel = event.channel(), "no display attached; event dropped");
            return;
        };
        if let Err(e) = host.emit(event) {
            tracing::warn!(channel = event.channel(), error = %e, "bridge event not delivered");
        }
    }

    // -------------------------------------------------------------------------
    // Bridge requests
    // -------------------------------------------------------------------------

    /// Answer every pending request in arrival order. Returns `true` if the
    /// display asked to close the window.
    pub fn service_requests(&mut self) -> bool {
        let Some(host) = &self.host else {
            return false;
        };
        let envelopes = host.drain_requests();

        let mut close_requested = false;
        for envelope in envelopes {
            tracing::debug!(id = %envelope.id, channel = envelope.request.channel(), "bridge request");
            let reply = self.handle_request(&envelope.request);
            if envelope.request == BridgeRequest::Close {
                close_requested = true;
            }
            if let Some(host) = &self.host {
                if let Err(e) = host.reply(envelope.id, reply) {
                    tracing::debug!(id = %envelope.id, error = %e, "reply not delivered");
                }
            }
        }
        close_requested
    }

    /// Perform one request. `Close` only acknowledges; the caller tears the
    /// window down so webviews are dropped first.
    pub fn handle_request(&mut self, request: &BridgeRequest) -> BridgeReply {
        match request {
            BridgeRequest::Minimize => {
                if let Some(window) = &self.window {
                    window.set_minimized(true);
                    self.set_presentation(Presentation::Minimized);
                }
                BridgeReply::Done
            }
            BridgeRequest::ToggleMaximize => BridgeReply::Maximized(self.toggle_maximize()),
            BridgeRequest::Close => BridgeReply::Done,
            BridgeRequest::GetTheme => BridgeReply::Theme(self.current_theme()),
            BridgeRequest::OpenExternal { url } => BridgeReply::Opened(self.open_external(url)),
            BridgeRequest::DebugLog { values } => {
                tracing::info!(target: "glass_debug", "{}", format_debug_values(values));
                BridgeReply::Done
            }
            BridgeRequest::StartDrag => {
                if let Some(window) = &self.window {
                    if let Err(e) = window.drag() {
                        tracing::debug!(error = %e, "window drag not started");
                    }
                }
                BridgeReply::Done
            }
        }
    }

    /// Maximize if not maximized, restore otherwise. Returns the new state.
    pub fn toggle_maximize(&mut self) -> bool {
        let Some(window) = &self.window else {
            return false;
        };
        if window.is_maximized() {
            window.set_maximized(false);
            self.set_presentation(Presentation::Normal);
            false
        } else {
            window.set_maximized(true);
            self.set_presentation(Presentation::Maximized);
            true
        }
    }

    fn open_external(&self, url: &str) -> bool {
        if !is_external_url_allowed(url) {
            tracing::warn!(url = %url, "external open rejected: scheme not allowed");
            return false;
        }
        match (self.opener)(url) {
            Ok(()) => {
                tracing::info!(url = %url, "opened externally");
                true
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "external open failed");
                false
            }
        }
    }
}

/// Render debug values like a console line: strings bare, everything else as
/// JSON, separated by spaces.
pub fn format_debug_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::window::native::fakes::FakeWindow;
    use glass_bridge::{channel, BridgeClient, Inbound};
    use serde_json::json;

    fn attached(window: FakeWindow) -> (WindowController<FakeWindow>, BridgeClient) {
        let (client, host) = channel();
        let mut controller = WindowController::new(true).with_opener(|_| Ok(()));
        controller.attach(window, host);
        (controller, client)
    }

    fn events(client: &BridgeClient) -> Vec<BridgeEvent> {
        client
            .drain()
            .into_iter()
            .filter_map(|m| match m {
                Inbound::Event { event } => Some(event),
                _ => None,
            })
            .collect()
    }

    // -- Phases --

    #[test]
    fn phases_follow_lifecycle() {
        let mut controller: WindowController<FakeWindow> = WindowController::new(true);
        assert_eq!(controller.phase(), WindowPhase::Uninitialized);
        assert!(!controller.show());

        let (_client, host) = channel();
        controller.attach(FakeWindow::default(), host);
        assert_eq!(controller.phase(), WindowPhase::Hidden);
        assert!(!controller.window().unwrap().visible.get());

        assert!(controller.show());
        assert_eq!(
            controller.phase(),
            WindowPhase::Visible(Presentation::Normal)
        );
        assert!(controller.window().unwrap().visible.get());
        // only once
        assert!(!controller.show());

        let window = controller.detach();
        assert!(window.is_some());
        assert_eq!(controller.phase(), WindowPhase::Closed);
        assert!(!controller.has_window());
    }

    #[test]
    fn reattach_after_close_starts_hidden() {
        let (mut controller, _client) = attached(FakeWindow::default());
        controller.show();
        controller.detach();

        let (_client, host) = channel();
        controller.attach(FakeWindow::default(), host);
        assert_eq!(controller.phase(), WindowPhase::Hidden);
    }

    // -- Maximize --

    #[test]
    fn toggle_maximize_twice_returns_true_then_false() {
        let (mut controller, _client) = attached(FakeWindow::default());
        controller.show();

        let results = [controller.toggle_maximize(), controller.toggle_maximize()];
        assert_eq!(results, [true, false]);
        assert_eq!(
            controller.phase(),
            WindowPhase::Visible(Presentation::Normal)
        );
        assert!(!controller.window().unwrap().maximized.get());
    }

    #[test]
    fn toggle_without_window_is_false() {
        let mut controller: WindowController<FakeWindow> = WindowController::new(true);
        assert!(!controller.toggle_maximize());
    }

    #[test]
    fn maximize_change_is_relayed_once() {
        let (mut controller, client) = attached(FakeWindow::default());
        controller.show();

        controller.window().unwrap().maximized.set(true);
        controller.refresh();
        controller.refresh();
        controller.window().unwrap().maximized.set(false);
        controller.refresh();

        assert_eq!(
            events(&client),
            vec![
                BridgeEvent::WindowMaximized(true),
                BridgeEvent::WindowMaximized(false),
            ]
        );
    }

    // -- Focus and theme --

    #[test]
    fn every_focus_change_is_relayed_in_order() {
        let (mut controller, client) = attached(FakeWindow::default());
        controller.focus_changed(true);
        controller.focus_changed(false);
        controller.focus_changed(false);
        assert_eq!(
            events(&client),
            vec![
                BridgeEvent::WindowFocus(true),
                BridgeEvent::WindowFocus(false),
                BridgeEvent::WindowFocus(false),
            ]
        );
        assert!(!controller.state.focused);
    }

    #[test]
    fn theme_notification_carries_glass_flag() {
        let (controller, client) = attached(FakeWindow::with_theme(ThemeMode::Dark));
        controller.notify_theme();
        assert_eq!(
            events(&client),
            vec![BridgeEvent::ThemeUpdated(ThemeUpdate::full(ThemeState {
                mode: ThemeMode::Dark,
                glass_enabled: true,
            }))]
        );
    }

    #[test]
    fn theme_change_uses_reported_mode() {
        let (controller, client) = attached(FakeWindow::with_theme(ThemeMode::Light));
        controller.theme_changed(ThemeMode::Dark);
        assert_eq!(
            events(&client),
            vec![BridgeEvent::ThemeUpdated(ThemeUpdate::Detailed {
                mode: Some(ThemeMode::Dark),
                glass_enabled: Some(true),
            })]
        );
    }

    // -- Requests --

    #[test]
    fn requests_are_answered_in_order() {
        let (mut controller, mut client) = attached(FakeWindow::with_theme(ThemeMode::Light));
        let a = client.toggle_maximize().unwrap();
        let b = client.get_theme().unwrap();
        let c = client.toggle_maximize().unwrap();

        assert!(!controller.service_requests());
        assert_eq!(
            client.drain(),
            vec![
                Inbound::Reply {
                    id: a,
                    reply: BridgeReply::Maximized(true)
                },
                Inbound::Reply {
                    id: b,
                    reply: BridgeReply::Theme(ThemeMode::Light)
                },
                Inbound::Reply {
                    id: c,
                    reply: BridgeReply::Maximized(false)
                },
            ]
        );
    }

    #[test]
    fn minimize_updates_window() {
        let (mut controller, _client) = attached(FakeWindow::default());
        controller.show();
        assert_eq!(
            controller.handle_request(&BridgeRequest::Minimize),
            BridgeReply::Done
        );
        assert!(controller.window().unwrap().minimized.get());
        assert_eq!(
            controller.phase(),
            WindowPhase::Visible(Presentation::Minimized)
        );
    }

    #[test]
    fn close_request_is_reported_to_caller() {
        let (mut controller, mut client) = attached(FakeWindow::default());
        client.close().unwrap();
        assert!(controller.service_requests());
        // still attached until the caller detaches
        assert!(controller.has_window());
    }

    #[test]
    fn start_drag_moves_window() {
        let (mut controller, _client) = attached(FakeWindow::default());
        controller.handle_request(&BridgeRequest::StartDrag);
        assert_eq!(controller.window().unwrap().drags.get(), 1);
    }

    #[test]
    fn open_external_rejects_disallowed_schemes() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        let (client_end, host) = channel();
        let mut controller = WindowController::new(true).with_opener(move |url| {
            sink.borrow_mut().push(url.to_string());
            Ok(())
        });
        controller.attach(FakeWindow::default(), host);
        drop(client_end);

        for url in ["file:///etc/passwd", "javascript:alert(1)", "", "ftp://x"] {
            assert_eq!(
                controller.handle_request(&BridgeRequest::OpenExternal { url: url.into() }),
                BridgeReply::Opened(false)
            );
        }
        assert!(opened.borrow().is_empty());

        assert_eq!(
            controller.handle_request(&BridgeRequest::OpenExternal {
                url: "https://status.openai.com/".into()
            }),
            BridgeReply::Opened(true)
        );
        assert_eq!(*opened.borrow(), vec!["https://status.openai.com/".to_string()]);
    }

    #[test]
    fn open_external_os_failure_is_false() {
        let (client, host) = channel();
        let mut controller = WindowController::new(true)
            .with_opener(|_| Err(io::Error::new(io::ErrorKind::NotFound, "no browser")));
        controller.attach(FakeWindow::default(), host);
        assert_eq!(
            controller.handle_request(&BridgeRequest::OpenExternal {
                url: "https://example.com".into()
            }),
            BridgeReply::Opened(false)
        );
        drop(client);
    }

    #[test]
    fn events_without_display_are_dropped_quietly() {
        let (mut controller, client) = attached(FakeWindow::default());
        drop(client);
        controller.focus_changed(true);
        controller.notify_theme();
        assert!(!controller.service_requests());
    }

    #[test]
    fn debug_values_render_like_console() {
        assert_eq!(
            format_debug_values(&[json!("container rect"), json!({"width": 10}), json!(3)]),
            "container rect {\"width\":10} 3"
        );
        assert_eq!(format_debug_values(&[]), "");
    }
}
