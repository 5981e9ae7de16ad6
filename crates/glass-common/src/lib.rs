pub mod errors;
pub mod types;

pub use errors::{BridgeError, ConfigError, GlassError, SurfaceError};
pub use types::{Color, GeometrySnapshot, RawRect, ThemeMode, ThemeState, WindowState};

pub type Result<T> = std::result::Result<T, GlassError>;
