//! Wire schema for the bridge.
//!
//! Names follow the `area:action` channel convention so log lines read the
//! same on both sides.

use glass_common::{ThemeMode, ThemeState};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// EXTERNAL URL ALLOWLIST
// =============================================================================

/// Scheme prefixes that may be handed to the system's default handler.
pub const ALLOWED_EXTERNAL_PREFIXES: &[&str] = &["https://", "http://"];

/// Check whether a URL may be opened externally.
pub fn is_external_url_allowed(url: &str) -> bool {
    ALLOWED_EXTERNAL_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// DISPLAY -> WINDOW
// =============================================================================

/// Every operation the display side can ask of the window side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum BridgeRequest {
    #[serde(rename = "window:minimize")]
    Minimize,

    /// Replies with the resulting maximized state.
    #[serde(rename = "window:toggle-maximize")]
    ToggleMaximize,

    #[serde(rename = "window:close")]
    Close,

    /// Replies with the current OS theme.
    #[serde(rename = "theme:get")]
    GetTheme,

    /// Replies `Opened(false)` for disallowed schemes.
    #[serde(rename = "app:open-external")]
    OpenExternal { url: String },

    /// Fire-and-forget diagnostic output.
    #[serde(rename = "debug:log")]
    DebugLog { values: Vec<Value> },

    /// Begin an OS-level move of the frameless window.
    #[serde(rename = "window:start-drag")]
    StartDrag,
}

impl BridgeRequest {
    /// Channel name, used for logging.
    pub fn channel(&self) -> &'static str {
        match self {
            Self::Minimize => "window:minimize",
            Self::ToggleMaximize => "window:toggle-maximize",
            Self::Close => "window:close",
            Self::GetTheme => "theme:get",
            Self::OpenExternal { .. } => "app:open-external",
            Self::DebugLog { .. } => "debug:log",
            Self::StartDrag => "window:start-drag",
        }
    }
}

/// Payload of a `debug:log` call: one value or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DebugPayload {
    Many(Vec<Value>),
    One(Value),
}

impl DebugPayload {
    /// Normalize to an ordered list.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }
}

impl From<Value> for DebugPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => Self::Many(values),
            other => Self::One(other),
        }
    }
}

impl From<&str> for DebugPayload {
    fn from(text: &str) -> Self {
        Self::One(Value::String(text.to_string()))
    }
}

impl From<String> for DebugPayload {
    fn from(text: String) -> Self {
        Self::One(Value::String(text))
    }
}

impl From<Vec<Value>> for DebugPayload {
    fn from(values: Vec<Value>) -> Self {
        Self::Many(values)
    }
}

// =============================================================================
// WINDOW -> DISPLAY
// =============================================================================

/// Response to a [`BridgeRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum BridgeReply {
    /// The operation has no result.
    Done,
    Maximized(bool),
    Theme(ThemeMode),
    Opened(bool),
}

/// Theme payload. Older senders push a bare mode string; newer ones send an
/// object where either field may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeUpdate {
    Mode(ThemeMode),
    Detailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<ThemeMode>,
        #[serde(
            default,
            rename = "glassEnabled",
            skip_serializing_if = "Option::is_none"
        )]
        glass_enabled: Option<bool>,
    },
}

impl ThemeUpdate {
    pub fn full(state: ThemeState) -> Self {
        Self::Detailed {
            mode: Some(state.mode),
            glass_enabled: Some(state.glass_enabled),
        }
    }

    pub fn mode(&self) -> Option<ThemeMode> {
        match self {
            Self::Mode(mode) => Some(*mode),
            Self::Detailed { mode, .. } => *mode,
        }
    }

    pub fn glass_enabled(&self) -> Option<bool> {
        match self {
            Self::Mode(_) => None,
            Self::Detailed { glass_enabled, .. } => *glass_enabled,
        }
    }
}

/// Pushed notifications, one per underlying platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "payload")]
pub enum BridgeEvent {
    #[serde(rename = "theme:updated")]
    ThemeUpdated(ThemeUpdate),

    #[serde(rename = "window:focus")]
    WindowFocus(bool),

    #[serde(rename = "window:maximized")]
    WindowMaximized(bool),
}

impl BridgeEvent {
    pub fn channel(&self) -> &'static str {
        match self {
            Self::ThemeUpdated(_) => "theme:updated",
            Self::WindowFocus(_) => "window:focus",
            Self::WindowMaximized(_) => "window:maximized",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
