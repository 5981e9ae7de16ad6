//! WebView layer for the glass shell.
//!
//! Wraps the `wry` crate to provide:
//! - The chrome webview (title bar, content container, overlay) served from
//!   bundled assets over the `glass://` custom protocol
//! - The guest webview hosting the remote application
//! - Chrome IPC (Rust <-> JavaScript) and DOM commands
//! - Navigation and new-window policy

pub mod content;
pub mod dom;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use content::{chrome_url, ContentProvider, CHROME_SCHEME};
pub use dom::{DomCommand, DOM_IPC_KIND};
pub use events::{PageLoadState, SurfaceId, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{snapshot_to_wry, WebViewConfig, WebViewHandle, WebViewManager};
pub use navigation::{
    decide_new_window, is_chrome_navigation_allowed, is_secure_navigation, NewWindowDecision,
};
