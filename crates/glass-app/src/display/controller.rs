//! The unprivileged display side.
//!
//! Owns the chrome page (through a [`DomSink`]) and, once attached, the guest
//! surface. Its only route to the native window is the [`BridgeClient`].

use std::collections::HashMap;

use glass_bridge::{BridgeClient, BridgeEvent, BridgeReply, Inbound, RequestId, ThemeUpdate};
use glass_common::{BridgeError, GeometrySnapshot, ThemeMode};
use glass_config::UrlConfig;
use glass_webview::{decide_new_window, DomCommand, NewWindowDecision};

use super::input::{parse_chrome_message, ChromeInput, UiAction};
use super::resize::ResizeSynchronizer;
use super::surface::{DomSink, GuestSurface};
use super::theme_sync::ThemeSynchronizer;

/// What the guest surface reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestEvent {
    LoadStarted,
    LoadStopped,
    /// The main frame's document was reachable.
    LoadFinished,
    /// The reachability check only observes the main frame, so sub-frame
    /// failures reach this variant only from a platform that reports them.
    LoadFailed { main_frame: bool },
    NewWindow { url: String },
}

/// Continuation for an in-flight bridge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingReply {
    ToggleMaximize,
    GetTheme,
    OpenExternal,
}

pub struct DisplayController<D: DomSink, G: GuestSurface> {
    bridge: BridgeClient,
    dom: D,
    guest: Option<G>,
    urls: UrlConfig,
    resize: ResizeSynchronizer,
    theme: ThemeSynchronizer,
    pending: HashMap<RequestId, PendingReply>,
    overlay_visible: bool,
    loading: bool,
    /// The guest finished rendering its current main-frame load.
    rendered: bool,
    /// DOM commands issued before the chrome page could receive them.
    queued: Vec<DomCommand>,
    chrome_ready: bool,
}

impl<D: DomSink, G: GuestSurface> DisplayController<D, G> {
    pub fn new(bridge: BridgeClient, dom: D, urls: UrlConfig) -> Self {
        Self {
            bridge,
            dom,
            guest: None,
            urls,
            resize: ResizeSynchronizer::new(),
            theme: ThemeSynchronizer::new(),
            pending: HashMap::new(),
            overlay_visible: false,
            loading: false,
            rendered: false,
            queued: Vec::new(),
            chrome_ready: false,
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn guest(&self) -> Option<&G> {
        self.guest.as_ref()
    }

    pub fn is_guest_attached(&self) -> bool {
        self.guest.is_some()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn theme(&self) -> &ThemeSynchronizer {
        &self.theme
    }

    /// Last container geometry, once the chrome page has reported one.
    pub fn geometry(&self) -> Option<GeometrySnapshot> {
        self.resize.last()
    }

    /// Hand over the guest surface once it exists. It receives the current
    /// geometry immediately and becomes visible unless the overlay is up.
    pub fn attach_guest(&mut self, mut guest: G) {
        self.resize.sync_attached(&mut guest);
        if let Err(e) = guest.set_visible(!self.overlay_visible) {
            tracing::warn!(error = %e, "guest visibility update failed");
        }
        self.bridge.debug_log(serde_json::json!("webview attached"));
        self.guest = Some(guest);
    }

    /// Drop the guest surface.
    pub fn detach_guest(&mut self) -> Option<G> {
        self.guest.take()
    }

    // -------------------------------------------------------------------------
    // Chrome page
    // -------------------------------------------------------------------------

    /// Validate and handle one raw IPC body from the chrome page.
    pub fn handle_chrome_message(&mut self, body: &str) {
        match parse_chrome_message(body) {
            Ok(input) => self.handle_chrome_input(input),
            Err(e) => tracing::warn!(body_len = body.len(), error = %e, "chrome IPC rejected"),
        }
    }

    pub fn handle_chrome_input(&mut self, input: ChromeInput) {
        match input {
            ChromeInput::Ready { dark } => {
                self.chrome_ready = true;
                for command in std::mem::take(&mut self.queued) {
                    self.dom.apply(command);
                }
                self.theme.observe_media_query(dark);
                self.request(PendingReply::GetTheme, BridgeClient::get_theme);
            }
            ChromeInput::Action(action) => self.handle_action(action),
            ChromeInput::ContainerResized { observed, bounding } => {
                let mut outer: Vec<DomCommand> = Vec::new();
                self.resize
                    .apply(observed, bounding, &mut outer, self.guest.as_mut());
                for command in outer {
                    self.apply_dom(command);
                }
            }
            ChromeInput::ColorScheme { dark } => {
                let state = self.theme.apply_media_query(dark);
                self.apply_dom(DomCommand::SetTheme { mode: state.mode });
            }
            ChromeInput::TitleDrag => {
                log_send_error("window:start-drag", self.bridge.start_drag());
            }
            ChromeInput::DebugLog(value) => self.bridge.debug_log(value),
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Minimize => log_send_error("window:minimize", self.bridge.minimize()),
            UiAction::Maximize => {
                self.request(PendingReply::ToggleMaximize, BridgeClient::toggle_maximize)
            }
            UiAction::Close => log_send_error("window:close", self.bridge.close()),
            UiAction::Reload => {
                self.set_overlay_visible(false);
                self.with_guest("reload", |guest| guest.reload());
            }
            UiAction::Retry => {
                self.set_overlay_visible(false);
                let url = self.urls.app_url.clone();
                self.with_guest("retry", |guest| guest.navigate(&url));
            }
            UiAction::OpenStatus => {
                let url = self.urls.status_page_url.clone();
                self.open_external(url);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Guest surface
    // -------------------------------------------------------------------------

    pub fn handle_guest_event(&mut self, event: GuestEvent) {
        match event {
            GuestEvent::LoadStarted => {
                self.rendered = false;
                self.set_loading(true);
            }
            GuestEvent::LoadStopped => {
                self.rendered = true;
                self.set_loading(false);
            }
            GuestEvent::LoadFinished => self.set_overlay_visible(false),
            GuestEvent::LoadFailed { main_frame: true } if self.rendered => {
                tracing::warn!("reachability check failed after the guest rendered; overlay not shown");
            }
            GuestEvent::LoadFailed { main_frame: true } => self.set_overlay_visible(true),
            GuestEvent::LoadFailed { main_frame: false } => {
                tracing::debug!("sub-frame load failure ignored");
            }
            GuestEvent::NewWindow { url } => match decide_new_window(&url, &self.urls.app_url) {
                NewWindowDecision::NavigateInPlace(url) => {
                    self.with_guest("new-window", |guest| guest.navigate(&url));
                }
                NewWindowDecision::OpenExternal(url) => self.open_external(url),
                NewWindowDecision::Ignore => {
                    tracing::debug!(url = %url, "new-window request ignored");
                }
            },
        }
    }

    // -------------------------------------------------------------------------
    // Bridge
    // -------------------------------------------------------------------------

    /// Drain and handle every reply and event that has arrived.
    pub fn poll_bridge(&mut self) {
        for inbound in self.bridge.drain() {
            match inbound {
                Inbound::Reply { id, reply } => self.handle_reply(id, reply),
                Inbound::Event { event } => self.handle_event(event),
            }
        }
    }

    fn handle_reply(&mut self, id: RequestId, reply: BridgeReply) {
        let Some(pending) = self.pending.remove(&id) else {
            if reply != BridgeReply::Done {
                tracing::debug!(%id, ?reply, "reply without continuation");
            }
            return;
        };

        match (pending, reply) {
            (PendingReply::ToggleMaximize, BridgeReply::Maximized(maximized)) => {
                self.apply_dom(DomCommand::SetMaximizePressed { pressed: maximized });
            }
            (PendingReply::GetTheme, BridgeReply::Theme(mode)) => {
                self.apply_theme_mode(mode);
                self.apply_dom(DomCommand::SetFocused { focused: true });
            }
            (PendingReply::OpenExternal, BridgeReply::Opened(opened)) => {
                if !opened {
                    tracing::warn!(%id, "external open was rejected");
                }
            }
            (pending, reply) => {
                tracing::warn!(%id, ?pending, ?reply, "mismatched bridge reply");
            }
        }
    }

    fn handle_event(&mut self, event: BridgeEvent) {
        match event {
            BridgeEvent::WindowFocus(focused) => {
                self.apply_dom(DomCommand::SetFocused { focused });
            }
            BridgeEvent::WindowMaximized(maximized) => {
                self.apply_dom(DomCommand::SetMaximizePressed { pressed: maximized });
            }
            BridgeEvent::ThemeUpdated(update) => self.apply_theme_update(&update),
        }
    }

    fn apply_theme_update(&mut self, update: &ThemeUpdate) {
        let glass_before = self.theme.glass_enabled();
        self.theme.apply_update(update);
        if let Some(mode) = self.theme.mode() {
            self.apply_dom(DomCommand::SetTheme { mode });
        }
        if let Some(enabled) = self.theme.glass_enabled() {
            if glass_before != Some(enabled) {
                self.apply_dom(DomCommand::SetGlass { enabled });
            }
        }
    }

    fn apply_theme_mode(&mut self, mode: ThemeMode) {
        let state = self.theme.apply_mode(mode);
        self.apply_dom(DomCommand::SetTheme { mode: state.mode });
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn apply_dom(&mut self, command: DomCommand) {
        if self.chrome_ready {
            self.dom.apply(command);
        } else {
            self.queued.push(command);
        }
    }

    fn request(
        &mut self,
        pending: PendingReply,
        send: fn(&mut BridgeClient) -> Result<RequestId, BridgeError>,
    ) {
        match send(&mut self.bridge) {
            Ok(id) => {
                self.pending.insert(id, pending);
            }
            Err(e) => tracing::warn!(?pending, error = %e, "bridge unavailable"),
        }
    }

    fn open_external(&mut self, url: String) {
        match self.bridge.open_external(url) {
            Ok(id) => {
                self.pending.insert(id, PendingReply::OpenExternal);
            }
            Err(e) => tracing::warn!(error = %e, "bridge unavailable for external open"),
        }
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.apply_dom(DomCommand::SetLoading { loading });
    }

    /// The guest is a native view stacked above the chrome page, so it is
    /// hidden whenever the overlay must be seen.
    fn set_overlay_visible(&mut self, visible: bool) {
        self.apply_dom(DomCommand::SetOverlayVisible { visible });
        if self.overlay_visible != visible {
            self.overlay_visible = visible;
            if let Some(guest) = self.guest.as_mut() {
                if let Err(e) = guest.set_visible(!visible) {
                    tracing::warn!(error = %e, "guest visibility update failed");
                }
            }
        }
    }

    fn with_guest(
        &mut self,
        what: &str,
        op: impl FnOnce(&mut G) -> Result<(), glass_common::SurfaceError>,
    ) {
        match self.guest.as_mut() {
            Some(guest) => {
                if let Err(e) = op(guest) {
                    tracing::warn!(what, error = %e, "guest operation failed");
                }
            }
            None => tracing::info!(what, "guest not attached; ignored"),
        }
    }
}

fn log_send_error(channel: &str, result: Result<RequestId, BridgeError>) {
    if let Err(e) = result {
        tracing::warn!(channel, error = %e, "bridge unavailable");
    }
}

// =============================================================================
// TESTS
// =============================================================================
