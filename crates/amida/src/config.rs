//! Configuration types for Amida rendering.
//!
//! This module provides configuration structures that control the canvas a
//! lottery is drawn on and how it is styled. All types implement
//! [`serde::Deserialize`] for loading from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Canvas dimensions, the ladder inset and the label offset.
//! - [`StyleConfig`] - Colors, stroke width and font size.
//!
//! # Example
//!
//! ```
//! # use amida::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 640.0);
//! assert!(config.style().line_color().is_ok());
//! ```

use serde::Deserialize;

use amida_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Canvas geometry.
///
/// `width` is the span the vertical lines are spread over. The verticals run
/// from `margin` down to `height - margin`, and the labels sit
/// `label_offset` beyond either end.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    margin: f32,
    label_offset: f32,
}

impl CanvasConfig {
    /// Creates a new [`CanvasConfig`].
    pub fn new(width: f32, height: f32, margin: f32, label_offset: f32) -> Self {
        Self {
            width,
            height,
            margin,
            label_offset,
        }
    }

    /// Returns the canvas width, which is also the span of the vertical lines.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the canvas height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the vertical inset of the ladder from the canvas edges.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the distance between the ladder ends and their labels.
    pub fn label_offset(&self) -> f32 {
        self.label_offset
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(640.0, 480.0, 50.0, 20.0)
    }
}

/// Visual styling configuration for rendered lotteries.
///
/// Colors are CSS color strings. An unset background leaves the canvas
/// transparent; unset line and label colors are black.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    line_color: Option<String>,
    label_color: Option<String>,
    stroke_width: f32,
    font_size: f32,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the [`Color`] of vertical lines and rungs.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn line_color(&self) -> Result<Color, String> {
        parse_or_default(self.line_color.as_deref())
            .map_err(|err| format!("Invalid line color in config: {err}"))
    }

    /// Returns the [`Color`] of the start and result labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn label_color(&self) -> Result<Color, String> {
        parse_or_default(self.label_color.as_deref())
            .map_err(|err| format!("Invalid label color in config: {err}"))
    }

    /// Returns the stroke width of vertical lines and rungs.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the label font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            line_color: None,
            label_color: None,
            stroke_width: 1.0,
            font_size: 16.0,
        }
    }
}

fn parse_or_default(color: Option<&str>) -> Result<Color, String> {
    color.map_or_else(|| Ok(Color::default()), Color::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.canvas().width(), 640.0);
        assert_eq!(config.canvas().height(), 480.0);
        assert_eq!(config.canvas().margin(), 50.0);
        assert_eq!(config.canvas().label_offset(), 20.0);
        assert_eq!(config.style().stroke_width(), 1.0);
        assert_eq!(config.style().font_size(), 16.0);
        assert_eq!(config.style().background_color(), Ok(None));
        assert_eq!(config.style().line_color(), Ok(Color::default()));
    }

    #[test]
    fn test_deserialize_partial_sections() {
        let config: AppConfig = toml::from_str(
            r##"
            [canvas]
            width = 800

            [style]
            line_color = "#336699"
            stroke_width = 2.5
            "##,
        )
        .unwrap();

        assert_eq!(config.canvas().width(), 800.0);
        assert_eq!(config.canvas().height(), 480.0);
        assert_eq!(config.style().stroke_width(), 2.5);
        assert_eq!(config.style().font_size(), 16.0);
        assert_eq!(
            config.style().line_color(),
            Ok(Color::new("#336699").unwrap())
        );
    }

    #[test]
    fn test_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.canvas().margin(), 50.0);
    }

    #[test]
    fn test_invalid_color_reported_on_access() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "not-a-color"
            "#,
        )
        .unwrap();

        let err = config.style().background_color().unwrap_err();
        assert!(err.starts_with("Invalid background color in config"));
    }
}
