//! Seams between the display logic and the two webviews.

use glass_common::{GeometrySnapshot, SurfaceError};
use glass_webview::{DomCommand, WebViewHandle};

/// Where DOM commands for the chrome page go.
pub trait DomSink {
    fn apply(&mut self, command: DomCommand);
}

impl DomSink for Vec<DomCommand> {
    fn apply(&mut self, command: DomCommand) {
        self.push(command);
    }
}

impl DomSink for WebViewHandle {
    fn apply(&mut self, command: DomCommand) {
        if let Err(e) = self.apply_dom(&command) {
            tracing::warn!(?command, error = %e, "Failed to apply DOM command");
        }
    }
}

/// The embedded browsable surface (the guest webview).
pub trait GuestSurface {
    /// Tell the surface its size and position explicitly.
    fn set_geometry(&mut self, geometry: &GeometrySnapshot) -> Result<(), SurfaceError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError>;
    fn reload(&mut self) -> Result<(), SurfaceError>;
    fn navigate(&mut self, url: &str) -> Result<(), SurfaceError>;
}

fn platform(e: wry::Error) -> SurfaceError {
    SurfaceError::Platform(e.to_string())
}

impl GuestSurface for WebViewHandle {
    fn set_geometry(&mut self, geometry: &GeometrySnapshot) -> Result<(), SurfaceError> {
        WebViewHandle::set_geometry(self, geometry).map_err(platform)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), SurfaceError> {
        WebViewHandle::set_visible(self, visible).map_err(platform)
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        WebViewHandle::reload(self).map_err(platform)
    }

    fn navigate(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.load_url(url).map_err(platform)
    }
}

// =============================================================================
// TEST DOUBLES
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use glass_common::ThemeMode;

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<DomCommand> = Vec::new();
        sink.apply(DomCommand::SetLoading { loading: true });
        sink.apply(DomCommand::SetTheme {
            mode: ThemeMode::Dark,
        });
        assert_eq!(
            sink,
            vec![
                DomCommand::SetLoading { loading: true },
                DomCommand::SetTheme {
                    mode: ThemeMode::Dark
                },
            ]
        );
    }
}
