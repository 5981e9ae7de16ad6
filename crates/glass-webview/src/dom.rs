//! DOM commands applied to the chrome page.
//!
//! The chrome page never decides anything itself: it receives these commands
//! under the `dom` IPC kind and applies them verbatim.

use glass_common::ThemeMode;
use serde::{Deserialize, Serialize};

use crate::ipc::js_dispatch_message;

/// IPC kind the chrome page listens on for DOM commands.
pub const DOM_IPC_KIND: &str = "dom";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomCommand {
    /// `data-theme` on `<body>`.
    SetTheme { mode: ThemeMode },
    /// `data-glass` on the app shell.
    SetGlass { enabled: bool },
    /// `focused` class on `<body>`.
    SetFocused { focused: bool },
    /// `loading` class on `<body>`.
    SetLoading { loading: bool },
    /// `is-active` / `aria-pressed` on the maximize button.
    SetMaximizePressed { pressed: bool },
    /// Visibility of the unreachable overlay.
    SetOverlayVisible { visible: bool },
    /// Style dimensions of the surface placeholder, in CSS pixels.
    SetSurfaceSize { width: u32, height: u32 },
}

impl DomCommand {
    /// JavaScript that applies this command in the chrome page.
    pub fn to_script(&self) -> String {
        let payload = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        js_dispatch_message(DOM_IPC_KIND, &payload)
    }
}
