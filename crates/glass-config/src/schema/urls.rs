//! Fixed remote URLs.

use serde::{Deserialize, Serialize};

/// The application loaded into the embedded surface.
pub const APP_URL: &str = "https://chatgpt.com";

/// Opened in the system browser from the unreachable overlay.
pub const STATUS_PAGE_URL: &str = "https://status.openai.com/";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    pub app_url: String,
    pub status_page_url: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            app_url: APP_URL.into(),
            status_page_url: STATUS_PAGE_URL.into(),
        }
    }
}
