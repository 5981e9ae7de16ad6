//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Native window geometry and decoration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: u32,
    pub height: u32,
    /// Minimum inner size in logical pixels.
    pub min_width: u32,
    pub min_height: u32,
    /// Draw our own title bar instead of the platform's.
    pub frameless: bool,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ChatGPT".into(),
            width: 1280,
            height: 720,
            min_width: 960,
            min_height: 600,
            frameless: true,
            resizable: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
