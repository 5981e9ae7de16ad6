mod color;
mod geometry;
mod theme;
mod window;

pub use color::*;
pub use geometry::*;
pub use theme::*;
pub use window::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#1e1e1e").unwrap();
        assert_eq!(c, Color::from_rgba(30, 30, 30, 255));
        assert!(c.is_opaque());
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#00000000").unwrap();
        assert_eq!(c, Color::TRANSPARENT);
        assert!(!c.is_opaque());
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn color_to_hex() {
        assert_eq!(Color::from_rgba(246, 246, 246, 255).to_hex(), "#f6f6f6");
        assert_eq!(Color::from_rgba(255, 0, 128, 128).to_hex(), "#ff008080");
        assert_eq!(Color::from_rgba(1, 2, 3, 4).to_rgba_tuple(), (1, 2, 3, 4));
    }

    #[test]
    fn theme_mode_parse_and_display() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
        assert!(ThemeMode::from_dark(true).is_dark());
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn theme_state_uses_camel_case() {
        let state = ThemeState {
            mode: ThemeMode::Dark,
            glass_enabled: true,
        };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "dark", "glassEnabled": true}));
    }

    #[test]
    fn window_state_defaults_to_unfocused_normal() {
        let state = WindowState::default();
        assert!(!state.focused);
        assert!(!state.maximized);
    }

    #[test]
    fn snapshot_floors_dimensions() {
        let snap = GeometrySnapshot::from_rect(&RawRect::new(12.7, 40.2, 1279.9, 679.5));
        assert_eq!(
            snap,
            GeometrySnapshot {
                x: 12,
                y: 40,
                width: 1279,
                height: 679
            }
        );
    }

    #[test]
    fn snapshot_never_negative() {
        let snap = GeometrySnapshot::from_rect(&RawRect::new(-3.0, -0.5, -120.0, -0.1));
        assert_eq!(snap, GeometrySnapshot::default());
    }

    #[test]
    fn snapshot_handles_non_finite() {
        let snap = GeometrySnapshot::from_rect(&RawRect::new(f64::NAN, 0.0, f64::INFINITY, f64::NAN));
        assert_eq!(snap.x, 0);
        assert_eq!(snap.width, u32::MAX);
        assert_eq!(snap.height, 0);
    }

    #[test]
    fn snapshot_property_matches_floor_of_clamped() {
        for w in [-10.0, 0.0, 0.4, 1.0, 99.99, 640.5, 3840.0] {
            for h in [-1.0, 0.0, 0.999, 480.0, 2160.7] {
                let snap = GeometrySnapshot::from_rect(&RawRect::new(0.0, 0.0, w, h));
                assert_eq!(snap.width as f64, f64::max(w, 0.0).floor());
                assert_eq!(snap.height as f64, f64::max(h, 0.0).floor());
            }
        }
    }

    #[test]
    fn raw_rect_partial_json_defaults() {
        let rect: RawRect = serde_json::from_str(r#"{"width": 10.5, "height": 3}"#).unwrap();
        assert_eq!(rect, RawRect::new(0.0, 0.0, 10.5, 3.0));
    }
}
