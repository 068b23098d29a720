//! Conversions between core types and JavaScript values.

use crate::error::BindingError;
use arrowgrid_core::{ArrowPoints, Layout, Scene, SceneConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Everything a host needs to redraw or inspect the scene, in one object.
#[derive(Debug, Serialize)]
pub(crate) struct JsSnapshot<'a> {
    /// Grid dimensions for the current viewport
    pub layout: &'a Layout,
    /// Untransformed arrow vertices
    pub reference: &'a ArrowPoints,
    /// Arrow vertices as drawn
    pub displayed: &'a ArrowPoints,
}

impl<'a> From<&'a Scene> for JsSnapshot<'a> {
    fn from(scene: &'a Scene) -> Self {
        Self {
            layout: scene.layout(),
            reference: scene.reference(),
            displayed: scene.displayed(),
        }
    }
}

/// Deserialize a scene configuration passed from JavaScript.
///
/// `undefined` and `null` select the defaults; missing keys fall back to
/// their defaults individually.
///
/// ```typescript
/// new ArrowGrid({ square_size: 25, arrow: { width_cells: 4 } });
/// ```
pub(crate) fn config_from_js(value: JsValue) -> Result<SceneConfig, BindingError> {
    if value.is_undefined() || value.is_null() {
        return Ok(SceneConfig::default());
    }
    let config: SceneConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| BindingError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Convert a viewport dimension reported by the browser into whole pixels.
///
/// Non-numeric, negative and non-finite values become 0.
pub(crate) fn viewport_dimension(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.min(f64::from(u32::MAX)) as u32,
        _ => 0,
    }
}
