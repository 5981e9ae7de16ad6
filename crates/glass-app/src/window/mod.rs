//! Window side: the native window, its options and its controller.

pub mod controller;
pub mod native;
pub mod options;
pub mod theme;

pub use controller::{WindowController, WindowPhase};
pub use options::WindowOptions;
