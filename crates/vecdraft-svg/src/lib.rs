//! Vecdraft SVG Library
//!
//! Converts between [`vecdraft_core::Drawing`] documents and SVG markup.
//! Export writes one `<g>` per visible layer; import flattens foreign SVG into
//! path shapes with every transform baked into the points.

mod export;
mod import;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vecdraft_core::ShapeStyle;

pub use export::{export_svg, export_view_box, write_svg};
pub use import::{import_into, import_svg};

/// Margin added around the shape bounds when no artboard is set.
pub const DEFAULT_EXPORT_PADDING: f64 = 10.0;

/// Errors that can occur while importing SVG markup.
#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("Malformed SVG: {0}")]
    MalformedSvg(String),
    #[error("SVG contains no importable shapes")]
    EmptyImport,
    #[error("Layer not found: {0}")]
    UnknownLayer(String),
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Viewport used when there is neither an artboard nor any shape to frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Optional document `<title>`.
    pub title: Option<String>,
    pub padding: f64,
    pub fallback_viewport: Viewport,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            padding: DEFAULT_EXPORT_PADDING,
            fallback_viewport: Viewport::default(),
        }
    }
}

impl ExportOptions {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Import settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Style used for paint properties the markup leaves unset.
    pub default_style: ShapeStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults_from_empty_json() {
        let export: ExportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(export, ExportOptions::default());
        assert_eq!(export.padding, DEFAULT_EXPORT_PADDING);
        assert_eq!(export.fallback_viewport, Viewport { width: 1000.0, height: 800.0 });

        let import: ImportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(import.default_style, ShapeStyle::default());
    }

    #[test]
    fn test_partial_export_options() {
        let export: ExportOptions = serde_json::from_str(r#"{"title":"Plan","padding":4}"#).unwrap();
        assert_eq!(export.title.as_deref(), Some("Plan"));
        assert_eq!(export.padding, 4.0);
        assert_eq!(export.fallback_viewport, Viewport::default());
    }
}
