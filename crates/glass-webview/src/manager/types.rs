use glass_common::Color;

use crate::events::SurfaceId;

/// Configuration for creating a WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Which surface this is. Decides IPC, protocol and navigation policy.
    pub surface: SurfaceId,
    /// Initial URL to load.
    pub url: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Background painted behind the page, if any.
    pub background: Option<Color>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
    /// Start hidden; shown once the first geometry has been applied.
    pub visible: bool,
}

impl WebViewConfig {
    /// The chrome page, served from bundled assets.
    pub fn chrome(url: impl Into<String>, transparent: bool, background: Color) -> Self {
        Self {
            surface: SurfaceId::Chrome,
            url: url.into(),
            transparent,
            background: Some(background),
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: false,
            visible: true,
        }
    }

    /// The remote application.
    pub fn guest(url: impl Into<String>) -> Self {
        Self {
            surface: SurfaceId::Guest,
            url: url.into(),
            transparent: false,
            background: None,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
            visible: false,
        }
    }
}
