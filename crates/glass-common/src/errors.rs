#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures on the display/window bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The other end of the bridge has been dropped (or is not up yet).
    #[error("bridge disconnected")]
    Disconnected,

    #[error("bridge message rejected: {0}")]
    Rejected(String),
}

/// Failures of operations against the embedded browsable surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("embedded surface error: {0}")]
    Platform(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlassError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "CHATGPT_DISABLE_GLASS".into(),
            value: "maybe".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for CHATGPT_DISABLE_GLASS: \"maybe\""
        );

        let err = ConfigError::ValidationError("min width exceeds width".into());
        assert_eq!(
            err.to_string(),
            "config validation error: min width exceeds width"
        );
    }

    #[test]
    fn bridge_error_display() {
        assert_eq!(BridgeError::Disconnected.to_string(), "bridge disconnected");
        assert_eq!(
            BridgeError::Rejected("unknown op".into()).to_string(),
            "bridge message rejected: unknown op"
        );
    }

    #[test]
    fn surface_error_display() {
        assert_eq!(
            SurfaceError::Platform("set_bounds failed".into()).to_string(),
            "embedded surface error: set_bounds failed"
        );
    }

    #[test]
    fn glass_error_from_variants() {
        let err: GlassError = BridgeError::Disconnected.into();
        assert!(matches!(err, GlassError::Bridge(_)));
        assert_eq!(err.to_string(), "bridge disconnected");

        let err: GlassError = SurfaceError::Platform("gone".into()).into();
        assert!(matches!(err, GlassError::Surface(_)));

        let err: GlassError = ConfigError::ValidationError("bad".into()).into();
        assert!(matches!(err, GlassError::Config(_)));
        assert!(err.to_string().contains("bad"));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GlassError = io_err.into();
        assert!(matches!(err, GlassError::Io(_)));
    }

    #[test]
    fn glass_error_other_variants() {
        assert_eq!(
            GlassError::Window("no event loop".into()).to_string(),
            "window error: no event loop"
        );
        assert_eq!(
            GlassError::WebView("js error".into()).to_string(),
            "webview error: js error"
        );
        assert_eq!(GlassError::Other("oops".into()).to_string(), "oops");
    }
}
