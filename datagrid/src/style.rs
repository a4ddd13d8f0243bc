//! File-backed style overrides.
//!
//! A [`GridStyle`] holds the knobs a user may want to tweak without code:
//! spacing, row heights, dividers and text styles. Every field is optional;
//! unset fields keep the builder's value.
//!
//! ```json
//! {
//!   "horizontal_margin": 16,
//!   "divider_color": "#e0e0e0",
//!   "heading_text": { "text_style": { "bold": true, "size": 14 } },
//!   "sort_arrow_duration_ms": 200
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gridkit::{Color, Style};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read style file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid grid style: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridStyle {
    pub horizontal_margin: Option<f32>,
    pub column_spacing: Option<f32>,
    pub checkbox_horizontal_margin: Option<f32>,
    pub heading_row_height: Option<f32>,
    pub data_row_height: Option<f32>,
    pub divider_thickness: Option<f32>,
    pub divider_color: Option<Color>,
    pub show_bottom_border: Option<bool>,
    pub heading_text: Option<Style>,
    pub data_text: Option<Style>,
    pub sort_arrow_duration_ms: Option<u64>,
    pub min_width: Option<f32>,
}

impl GridStyle {
    pub fn from_json_str(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = Self::from_json_str(&json)?;
        log::debug!("loaded grid style from {}", path.display());
        Ok(style)
    }

    pub fn sort_arrow_duration(&self) -> Option<Duration> {
        self.sort_arrow_duration_ms.map(Duration::from_millis)
    }
}
