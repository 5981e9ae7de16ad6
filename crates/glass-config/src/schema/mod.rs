//! Configuration schema types.
//!
//! All structs use `serde(default)` so a partial JSON dump still
//! deserializes into a complete config.

mod glass;
mod urls;
mod window;

pub use glass::*;
pub use urls::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub glass: GlassConfig,
    pub urls: UrlConfig,
}
