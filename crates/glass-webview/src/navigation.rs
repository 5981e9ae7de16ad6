//! Navigation and new-window policy.
//!
//! Pure functions so the decisions can be tested without a webview.

use url::Url;

// =============================================================================
// CHROME ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for the chrome webview.
///
/// - `glass://` custom protocol for bundled chrome assets
/// - WebView2 rewrites custom protocols: `glass://localhost/…` → `http://glass.localhost/…`
/// - `about:blank` default empty page
pub const CHROME_NAV_PREFIXES: &[&str] = &["glass://", "http://glass.localhost", "about:blank"];

/// Check whether the chrome webview may navigate to `url`.
pub fn is_chrome_navigation_allowed(url: &str) -> bool {
    CHROME_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// GUEST POLICY
// =============================================================================

/// The guest surface only ever navigates over `https`.
pub fn is_secure_navigation(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| parsed.scheme() == "https")
        .unwrap_or(false)
}

/// What to do with a page's request to open a new window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewWindowDecision {
    /// Same origin as the application: load it in the guest surface.
    NavigateInPlace(String),
    /// Anything else goes to the system's default handler.
    OpenExternal(String),
    /// Empty or unparsable target.
    Ignore,
}

/// Decide how to handle a new-window request for `target`. No new native
/// window is ever created.
pub fn decide_new_window(target: &str, app_url: &str) -> NewWindowDecision {
    let target = target.trim();
    if target.is_empty() {
        return NewWindowDecision::Ignore;
    }

    let Ok(parsed) = Url::parse(target) else {
        return NewWindowDecision::Ignore;
    };

    let same_origin = Url::parse(app_url)
        .map(|app| app.origin() == parsed.origin())
        .unwrap_or(false);

    if same_origin {
        NewWindowDecision::NavigateInPlace(target.to_string())
    } else {
        NewWindowDecision::OpenExternal(target.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
