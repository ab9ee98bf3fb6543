//! Render configuration.
//!
//! Deserializable from a JSON file; every field has a default, so a
//! partial (or absent) file works. The defaults are the canonical
//! frame: 600×600 canvas, zoom 1.5, iteration cap 1000.

use crate::fractal::View;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one rendered frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Scale of the pixel-to-plane map.
    pub zoom: f32,
    /// Iteration cap.
    pub max_iterations: f32,
    /// Where the demo binary writes the frame.
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 600,
            height: 600,
            zoom: 1.5,
            max_iterations: 1000.0,
            output: PathBuf::from("mandelbrot.ppm"),
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// The view parameters this config describes.
    pub fn view(&self) -> View {
        View {
            zoom: self.zoom,
            max_iterations: self.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_canonical_frame() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 600);
        assert_eq!(config.height, 600);
        assert_eq!(config.zoom, 1.5);
        assert_eq!(config.max_iterations, 1000.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{ "zoom": 0.75 }"#).unwrap();
        assert_eq!(config.zoom, 0.75);
        assert_eq!(config.width, 600);
        assert_eq!(config.max_iterations, 1000.0);
    }

    #[test]
    fn view_carries_the_frame_parameters() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "zoom": 2.0, "max_iterations": 64.0 }"#).unwrap();
        let view = config.view();
        assert_eq!(view.zoom, 2.0);
        assert_eq!(view.max_iterations, 64.0);
    }
}
