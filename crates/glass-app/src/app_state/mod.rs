//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Connects the window controller, the two webviews, the display
//! controller and the reachability probe.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::ShellApp;
