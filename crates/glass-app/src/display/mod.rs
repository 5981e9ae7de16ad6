//! Display side: chrome page logic, resize and theme synchronization.

pub mod controller;
pub mod input;
pub mod resize;
pub mod surface;
pub mod theme_sync;

pub use controller::{DisplayController, GuestEvent};
