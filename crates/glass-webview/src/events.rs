//! WebView event types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two webviews an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceId {
    /// Our own UI: title bar, content container, overlay.
    Chrome,
    /// The embedded remote application.
    Guest,
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chrome => f.write_str("chrome"),
            Self::Guest => f.write_str("guest"),
        }
    }
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Loading has stopped (successfully or not).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        surface: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    /// An IPC message was received from JavaScript (chrome only).
    IpcMessage { surface: SurfaceId, body: String },
    /// A navigation was refused by the surface's policy.
    NavigationBlocked { surface: SurfaceId, url: String },
    /// The page asked for a new window. The request itself was refused; the
    /// receiver decides what to do with the URL.
    NewWindowRequested { surface: SurfaceId, url: String },
    /// WebView was closed / destroyed.
    Closed { surface: SurfaceId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_id_display() {
        assert_eq!(SurfaceId::Chrome.to_string(), "chrome");
        assert_eq!(SurfaceId::Guest.to_string(), "guest");
    }

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }
}
