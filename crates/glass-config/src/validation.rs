//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError`.

use glass_common::{Color, ConfigError};

use crate::schema::ShellConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_colors(&mut errors, config);
    validate_urls(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &ShellConfig) {
    let w = &config.window;
    if w.min_width == 0 || w.min_height == 0 {
        errors.push("window minimum size must be non-zero".into());
    }
    if w.min_width > w.width {
        errors.push(format!(
            "window.min_width = {} exceeds window.width = {}",
            w.min_width, w.width
        ));
    }
    if w.min_height > w.height {
        errors.push(format!(
            "window.min_height = {} exceeds window.height = {}",
            w.min_height, w.height
        ));
    }
}

fn validate_colors(errors: &mut Vec<String>, config: &ShellConfig) {
    for (name, value) in [
        ("glass.dark_background", &config.glass.dark_background),
        ("glass.light_background", &config.glass.light_background),
    ] {
        match Color::from_hex(value) {
            Some(c) if c.is_opaque() => {}
            Some(_) => errors.push(format!("{name} = {value} must be opaque")),
            None => errors.push(format!("{name} = {value} is not a hex color")),
        }
    }
}

fn validate_urls(errors: &mut Vec<String>, config: &ShellConfig) {
    for (name, value) in [
        ("urls.app_url", &config.urls.app_url),
        ("urls.status_page_url", &config.urls.status_page_url),
    ] {
        match url::Url::parse(value) {
            Ok(parsed) if parsed.scheme() == "https" => {}
            Ok(parsed) => errors.push(format!(
                "{name} must use https, got scheme {}",
                parsed.scheme()
            )),
            Err(e) => errors.push(format!("{name} = {value} is not a valid URL: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&ShellConfig::default()).is_ok());
    }

    #[test]
    fn min_size_larger_than_initial_is_rejected() {
        let mut config = ShellConfig::default();
        config.window.min_width = 2000;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.min_width"));
    }

    #[test]
    fn translucent_background_is_rejected() {
        let mut config = ShellConfig::default();
        config.glass.dark_background = "#1e1e1e80".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("must be opaque"));
    }

    #[test]
    fn plaintext_app_url_is_rejected() {
        let mut config = ShellConfig::default();
        config.urls.app_url = "http://chatgpt.com".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("must use https"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = ShellConfig::default();
        config.window.min_height = 5000;
        config.glass.light_background = "nope".into();
        config.urls.status_page_url = "::".into();
        let err = validate(&config).unwrap_err().to_string();
        assert_eq!(err.matches("; ").count(), 2);
    }
}
