use serde::{Deserialize, Serialize};

/// Focus and maximize flags of the single native window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub focused: bool,
    pub maximized: bool,
}
