//! Chrome IPC validation and parsing.

use glass_common::{BridgeError, RawRect};
use glass_webview::IpcMessage;
use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from the chrome page.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "chrome_ready",
    "ui_action",
    "container_resized",
    "color_scheme",
    "title_drag",
    "debug_log",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// INPUTS
// =============================================================================

/// Buttons in the chrome page, by their `data-action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Minimize,
    Maximize,
    Close,
    Reload,
    Retry,
    OpenStatus,
}

impl UiAction {
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "minimize" => Some(Self::Minimize),
            "maximize" => Some(Self::Maximize),
            "close" => Some(Self::Close),
            "reload" => Some(Self::Reload),
            "retry" => Some(Self::Retry),
            "open-status" => Some(Self::OpenStatus),
            _ => None,
        }
    }
}

/// A validated message from the chrome page.
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeInput {
    /// The page script has wired itself up.
    Ready { dark: bool },
    Action(UiAction),
    /// A layout report for the content container.
    ContainerResized {
        observed: Option<RawRect>,
        bounding: RawRect,
    },
    ColorScheme { dark: bool },
    TitleDrag,
    DebugLog(Value),
}

#[derive(Deserialize)]
struct DarkPayload {
    dark: bool,
}

#[derive(Deserialize)]
struct ActionPayload {
    action: String,
}

#[derive(Deserialize)]
struct ResizePayload {
    #[serde(default)]
    observed: Option<RawRect>,
    #[serde(default)]
    bounding: RawRect,
}

fn payload<T: for<'de> Deserialize<'de>>(kind: &str, value: Value) -> Result<T, BridgeError> {
    serde_json::from_value(value)
        .map_err(|e| BridgeError::Rejected(format!("bad {kind} payload: {e}")))
}

/// Parse a raw chrome IPC body.
pub fn parse_chrome_message(body: &str) -> Result<ChromeInput, BridgeError> {
    let msg = IpcMessage::from_json(body)
        .ok_or_else(|| BridgeError::Rejected("failed to parse".into()))?;

    if !is_ipc_kind_allowed(&msg.kind) {
        return Err(BridgeError::Rejected(format!("unknown kind {:?}", msg.kind)));
    }

    let value = msg.payload.to_value();
    match msg.kind.as_str() {
        "chrome_ready" => {
            let p: DarkPayload = payload(&msg.kind, value)?;
            Ok(ChromeInput::Ready { dark: p.dark })
        }
        "ui_action" => {
            let p: ActionPayload = payload(&msg.kind, value)?;
            UiAction::from_action(&p.action)
                .map(ChromeInput::Action)
                .ok_or_else(|| BridgeError::Rejected(format!("unknown action {:?}", p.action)))
        }
        "container_resized" => {
            let p: ResizePayload = payload(&msg.kind, value)?;
            Ok(ChromeInput::ContainerResized {
                observed: p.observed,
                bounding: p.bounding,
            })
        }
        "color_scheme" => {
            let p: DarkPayload = payload(&msg.kind, value)?;
            Ok(ChromeInput::ColorScheme { dark: p.dark })
        }
        "title_drag" => Ok(ChromeInput::TitleDrag),
        "debug_log" => Ok(ChromeInput::DebugLog(value)),
        _ => Err(BridgeError::Rejected(format!("unhandled kind {:?}", msg.kind))),
    }
}

// =============================================================================
// TESTS
// =============================================================================
