//! Window teardown and graceful shutdown.

use glass_webview::SurfaceId;

use super::core::ShellApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ShellApp {
    /// Drop the webviews, then the native window.
    pub(super) fn teardown_window(&mut self) {
        if let Some(mut display) = self.display.take() {
            if let Some(manager) = &self.webviews {
                if display.detach_guest().is_some() {
                    manager.notify_closed(SurfaceId::Guest);
                }
                manager.notify_closed(SurfaceId::Chrome);
            }
        }
        drop(self.controller.detach());
    }

    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Destroy webviews and the window
    /// 2. Shut down the probe runtime (cancel in-flight probes)
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.teardown_window();
        self.webviews = None;

        if let Some(probe) = self.probe.take() {
            probe.shutdown();
        }

        tracing::info!("Graceful shutdown complete");
    }

    /// Shut down and mark the app so the next loop turn exits.
    pub(super) fn request_exit(&mut self) {
        self.shutdown();
        self.should_exit = true;
    }
}

// =============================================================================
// TESTS
// =============================================================================
