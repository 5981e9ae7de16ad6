//! Bundled chrome assets served via custom protocol.
//!
//! Registers a `glass://` custom protocol so the chrome webview can load its
//! HTML/JS/CSS without a local HTTP server or files on disk.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

/// Custom protocol scheme for the chrome page.
pub const CHROME_SCHEME: &str = "glass";

/// Entry point of the chrome page.
///
/// WebView2 exposes custom protocols as `http://<scheme>.localhost`.
pub fn chrome_url() -> &'static str {
    if cfg!(target_os = "windows") {
        "http://glass.localhost/index.html"
    } else {
        "glass://localhost/index.html"
    }
}

/// Map a custom-protocol request URI to an asset path.
pub fn request_path(uri: &str) -> &str {
    let path = uri
        .strip_prefix("glass://localhost/")
        .or_else(|| uri.strip_prefix("glass://localhost"))
        .or_else(|| uri.strip_prefix("http://glass.localhost/"))
        .or_else(|| uri.strip_prefix("glass:///"))
        .or_else(|| uri.strip_prefix("glass://"))
        .unwrap_or("");
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// In-memory asset table for the `glass://` protocol.
pub struct ContentProvider {
    assets: HashMap<String, (&'static str, Cow<'static, [u8]>)>,
}

impl ContentProvider {
    /// An empty provider.
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
        }
    }

    /// The chrome page compiled into the binary.
    pub fn bundled() -> Self {
        let mut provider = Self::new();
        provider.add_static(
            "index.html",
            include_str!("../assets/chrome/index.html").as_bytes(),
        );
        provider.add_static(
            "shell.css",
            include_str!("../assets/chrome/shell.css").as_bytes(),
        );
        provider.add_static(
            "shell.js",
            include_str!("../assets/chrome/shell.js").as_bytes(),
        );
        provider
    }

    /// Register a static asset; the MIME type is derived from the extension.
    pub fn add_static(&mut self, path: &str, data: &'static [u8]) {
        let clean = path.trim_start_matches('/').to_string();
        let mime = mime_from_extension(Path::new(&clean));
        self.assets.insert(clean, (mime, Cow::Borrowed(data)));
    }

    /// Resolve a request path to MIME type and content. An empty path serves
    /// `index.html`.
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Cow<'static, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };
        self.assets
            .get(clean)
            .map(|(mime, data)| (*mime, data.clone()))
    }
}

impl Default for ContentProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
