use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider, CHROME_SCHEME};
use crate::events::SurfaceId;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a WebView as a child of the given window.
    ///
    /// The chrome surface gets the IPC bridge and the `glass://` protocol.
    /// The guest gets neither; it only gets the https navigation policy and
    /// new-window interception.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let surface = config.surface;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_visible(config.visible)
            .with_focused(surface == SurfaceId::Guest);

        if let Some(color) = config.background {
            builder = builder.with_background_color(color.to_rgba_tuple());
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), surface);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), surface);

        match surface {
            SurfaceId::Chrome => {
                builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
                builder = Self::attach_ipc_handler(builder, Arc::clone(&events), surface);
                builder = self.attach_custom_protocol(builder);
            }
            SurfaceId::Guest => {
                builder = Self::attach_new_window_handler(builder, Arc::clone(&events), surface);
            }
        }

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(%surface, url = %config.url, "WebView created");

        Ok(WebViewHandle { webview })
    }

    /// Set the content provider for serving bundled assets via `glass://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(CHROME_SCHEME.to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = request_path(&uri);

                let response = match cp.resolve(path) {
                    Some((mime, data)) => wry::http::Response::builder()
                        .status(200)
                        .header("Content-Type", mime)
                        .body(data),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        wry::http::Response::builder()
                            .status(404)
                            .body(Cow::Borrowed(&b"Not Found"[..]))
                    }
                };
                response.unwrap_or_else(|e| {
                    warn!(error = %e, "custom protocol: bad response");
                    wry::http::Response::new(Cow::Borrowed(&b""[..]))
                })
            });
        }
        builder
    }
}
