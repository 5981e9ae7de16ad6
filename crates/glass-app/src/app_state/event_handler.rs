//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::window::{theme, WindowPhase};

use super::core::ShellApp;

impl ApplicationHandler for ShellApp {
    /// Startup: create the window if none exists.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.controller.has_window() {
            return;
        }

        let first_launch = self.controller.phase() == WindowPhase::Uninitialized;
        if let Err(e) = self.create_window(event_loop) {
            tracing::error!(error = %e, "Failed to create window");
            if first_launch {
                self.should_exit = true;
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.close_window(event_loop);
            }

            WindowEvent::Resized(_) => {
                self.resize_chrome();
                self.controller.refresh();
            }

            WindowEvent::Moved(_) => {
                self.controller.refresh();
            }

            WindowEvent::Focused(focused) => {
                self.controller.focus_changed(focused);
            }

            WindowEvent::ThemeChanged(os_theme) => {
                let mode = theme::from_winit(os_theme);
                tracing::info!(%mode, "OS theme changed");
                self.controller.theme_changed(mode);
                self.sync_chrome_background(mode);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl ShellApp {
    /// Tear everything down and leave the event loop. The shell has a single
    /// window, so closing it ends the process on every platform.
    pub(super) fn close_window(&mut self, event_loop: &ActiveEventLoop) {
        self.request_exit();
        event_loop.exit();
    }
}
