//! WebView lifecycle management.
//!
//! `WebViewManager` creates the two `wry::WebView` instances the shell needs
//! (chrome and guest) and collects their events for the main loop.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::{SurfaceId, WebViewEvent};

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::{snapshot_to_wry, WebViewHandle};
pub use types::WebViewConfig;

/// Creates webviews and owns their shared event sink.
pub struct WebViewManager {
    /// Event sink: handlers push here, the main loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Content provider for the `glass://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }

    /// Record that a surface has been torn down.
    pub fn notify_closed(&self, surface: SurfaceId) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(WebViewEvent::Closed { surface });
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
