use glass_common::{Color, GeometrySnapshot};
use wry::WebView;

use crate::dom::DomCommand;

/// Convert a content-area snapshot (logical px) to a wry `Rect`.
pub fn snapshot_to_wry(geometry: &GeometrySnapshot) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            f64::from(geometry.x),
            f64::from(geometry.y),
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            f64::from(geometry.width),
            f64::from(geometry.height),
        )),
    }
}

/// Handle to a live WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Navigate to a URL.
    pub fn load_url(&self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)
    }

    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.reload()
    }

    /// Apply a DOM command in the chrome page.
    pub fn apply_dom(&self, command: &DomCommand) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&command.to_script())
    }

    /// Place the WebView within the parent window.
    pub fn set_geometry(&self, geometry: &GeometrySnapshot) -> Result<(), wry::Error> {
        self.webview.set_bounds(snapshot_to_wry(geometry))
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn set_background_color(&self, color: Color) -> Result<(), wry::Error> {
        self.webview.set_background_color(color.to_rgba_tuple())
    }
}
