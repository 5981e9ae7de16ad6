//! The native window seam.

use glass_common::ThemeMode;
use winit::window::Window;

use super::theme::from_winit;

/// What the controller needs from a native window.
pub trait NativeWindow {
    fn set_visible(&self, visible: bool);
    fn focus(&self);
    fn set_minimized(&self, minimized: bool);
    /// `None` when the platform cannot tell.
    fn is_minimized(&self) -> Option<bool>;
    fn set_maximized(&self, maximized: bool);
    fn is_maximized(&self) -> bool;
    /// The theme the OS reports for this window, if any.
    fn theme(&self) -> Option<ThemeMode>;
    /// Start an interactive move with the pointer.
    fn drag(&self) -> Result<(), String>;
}

impl NativeWindow for Window {
    fn set_visible(&self, visible: bool) {
        Window::set_visible(self, visible);
    }

    fn focus(&self) {
        self.focus_window();
    }

    fn set_minimized(&self, minimized: bool) {
        Window::set_minimized(self, minimized);
    }

    fn is_minimized(&self) -> Option<bool> {
        Window::is_minimized(self)
    }

    fn set_maximized(&self, maximized: bool) {
        Window::set_maximized(self, maximized);
    }

    fn is_maximized(&self) -> bool {
        Window::is_maximized(self)
    }

    fn theme(&self) -> Option<ThemeMode> {
        Window::theme(self).map(from_winit)
    }

    fn drag(&self) -> Result<(), String> {
        self.drag_window().map_err(|e| e.to_string())
    }
}

// =============================================================================
// TEST DOUBLES
// =============================================================================

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::Cell;

    use super::*;

    /// In-memory window whose state changes synchronously.
    #[derive(Debug, Default)]
    pub struct FakeWindow {
        pub visible: Cell<bool>,
        pub minimized: Cell<bool>,
        pub maximized: Cell<bool>,
        pub theme: Cell<Option<ThemeMode>>,
        pub drags: Cell<u32>,
        pub focus_calls: Cell<u32>,
    }

    impl FakeWindow {
        pub fn with_theme(mode: ThemeMode) -> Self {
            let w = Self::default();
            w.theme.set(Some(mode));
            w
        }
    }

    impl NativeWindow for FakeWindow {
        fn set_visible(&self, visible: bool) {
            self.visible.set(visible);
        }

        fn focus(&self) {
            self.focus_calls.set(self.focus_calls.get() + 1);
        }

        fn set_minimized(&self, minimized: bool) {
            self.minimized.set(minimized);
        }

        fn is_minimized(&self) -> Option<bool> {
            Some(self.minimized.get())
        }

        fn set_maximized(&self, maximized: bool) {
            self.maximized.set(maximized);
        }

        fn is_maximized(&self) -> bool {
            self.maximized.get()
        }

        fn theme(&self) -> Option<ThemeMode> {
            self.theme.get()
        }

        fn drag(&self) -> Result<(), String> {
            self.drags.set(self.drags.get() + 1);
            Ok(())
        }
    }
}
