use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, SurfaceId, WebViewEvent};
use crate::navigation::{is_chrome_navigation_allowed, is_secure_navigation};

use super::WebViewManager;

/// Navigation policy for a surface.
pub fn is_navigation_allowed(surface: SurfaceId, url: &str) -> bool {
    match surface {
        SurfaceId::Chrome => is_chrome_navigation_allowed(url),
        SurfaceId::Guest => is_secure_navigation(url),
    }
}

fn push(events: &Arc<Mutex<Vec<WebViewEvent>>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    %surface,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(%surface, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { surface, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%surface, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { surface, state, url });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(surface, &url) {
                warn!(%surface, url = %url, "navigation blocked");
                push(&events, WebViewEvent::NavigationBlocked { surface, url });
                return false;
            }
            true
        })
    }

    /// Every new-window request is refused; the URL is handed to the main
    /// loop which decides between in-place navigation and the system browser.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(%surface, url = %url, "new window requested");
            push(&events, WebViewEvent::NewWindowRequested { surface, url });
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
