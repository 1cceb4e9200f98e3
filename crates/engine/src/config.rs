//! Engine construction parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use cge_core::{Error, Result};

use crate::types::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH,
    KEY_COUNT, MOUSE_BUTTON_COUNT,
};

/// Everything needed to open an engine session.
///
/// `cell_width` and `cell_height` are a font size hint for the platform; the
/// core only checks that they are positive. Missing JSON fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    pub key_count: usize,
    pub mouse_button_count: usize,
    /// Optional sleep after every frame.
    pub frame_delay_ms: Option<u64>,
    pub show_fps_in_title: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Undefined".to_string(),
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            key_count: KEY_COUNT,
            mouse_button_count: MOUSE_BUTTON_COUNT,
            frame_delay_ms: None,
            show_fps_in_title: true,
        }
    }
}

impl EngineConfig {
    pub fn new(screen_width: i32, screen_height: i32, cell_width: i32, cell_height: i32) -> Self {
        Self {
            screen_width,
            screen_height,
            cell_width,
            cell_height,
            ..Self::default()
        }
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay_ms = Some(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn frame_delay(&self) -> Option<Duration> {
        self.frame_delay_ms.map(Duration::from_millis)
    }

    /// Parse a JSON document. Parse errors and rejected values are both reported
    /// as `InvalidConfiguration`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfiguration(format!("malformed engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ];
        for (field, value) in sizes {
            if value <= 0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }
        if self.key_count == 0 {
            return Err(Error::InvalidConfiguration(
                "key_count must be positive".to_string(),
            ));
        }
        if self.mouse_button_count == 0 {
            return Err(Error::InvalidConfiguration(
                "mouse_button_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_console_engine() {
        let c = EngineConfig::default();
        assert_eq!(c.app_name, "Undefined");
        assert_eq!((c.screen_width, c.screen_height), (120, 40));
        assert_eq!((c.cell_width, c.cell_height), (4, 4));
        assert_eq!((c.key_count, c.mouse_button_count), (256, 5));
        assert_eq!(c.frame_delay(), None);
        assert!(c.show_fps_in_title);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_every_size_parameter_is_validated() {
        for (w, h, cw, ch, field) in [
            (0, 40, 4, 4, "screen_width"),
            (120, -1, 4, 4, "screen_height"),
            (120, 40, 0, 4, "cell_width"),
            (120, 40, 4, -8, "cell_height"),
        ] {
            match EngineConfig::new(w, h, cw, ch).validate() {
                Err(Error::InvalidConfiguration(msg)) => assert!(msg.contains(field), "{msg}"),
                other => panic!("expected InvalidConfiguration for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_input_counts_must_be_positive() {
        let mut c = EngineConfig::default();
        c.key_count = 0;
        assert!(matches!(c.validate(), Err(Error::InvalidConfiguration(_))));

        let mut c = EngineConfig::default();
        c.mouse_button_count = 0;
        assert!(matches!(c.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_json_fills_missing_fields_with_defaults() {
        let c = EngineConfig::from_json_str(
            r#"{ "app_name": "Asteroids", "screen_width": 160, "frame_delay_ms": 16 }"#,
        )
        .unwrap();
        assert_eq!(c.app_name, "Asteroids");
        assert_eq!(c.screen_width, 160);
        assert_eq!(c.screen_height, 40);
        assert_eq!(c.frame_delay(), Some(Duration::from_millis(16)));
    }

    #[test]
    fn test_json_errors_are_invalid_configuration() {
        assert!(matches!(
            EngineConfig::from_json_str("{ not json"),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "cell_height": 0 }"#),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_builder_sets_name_and_delay() {
        let c = EngineConfig::new(80, 30, 8, 16)
            .with_app_name("Breakout")
            .with_frame_delay(Duration::from_millis(5));
        assert_eq!(c.app_name, "Breakout");
        assert_eq!(c.frame_delay_ms, Some(5));
    }
}
