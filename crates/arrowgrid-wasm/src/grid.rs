//! The `ArrowGrid` handle exported to JavaScript.
//!
//! One handle owns the scene and the page bindings. The page wires its
//! events to the handle's methods:
//!
//! ```typescript
//! import init, { ArrowGrid } from '@arrowgrid/wasm';
//!
//! await init();
//! const grid = new ArrowGrid();
//!
//! window.addEventListener('resize', () => grid.resize());
//! resetButton.onclick = () => grid.reset();
//! matrixButton.onclick = () => grid.apply_matrix();
//! for (const input of coordinateInputs) {
//!   input.addEventListener('change', () => grid.apply_input(input.id));
//! }
//! row.onmouseenter = () => grid.highlight('c3');
//! row.onmouseleave = () => grid.remove_highlight('c3');
//! ```
//!
//! Rejected edits throw a JavaScript `Error` and are logged to the console;
//! the drawing is left as it was.

use crate::dom::{DomFields, DomView};
use crate::error::BindingError;
use crate::types::{config_from_js, viewport_dimension, JsSnapshot};
use arrowgrid_core::{FieldId, Highlight, MarkerId, Scene};
use wasm_bindgen::prelude::*;
use web_sys::{console, Window};

/// Interactive grid with a transformable arrow.
#[wasm_bindgen]
pub struct ArrowGrid {
    window: Window,
    scene: Scene,
    view: DomView,
    fields: DomFields,
}

#[wasm_bindgen]
impl ArrowGrid {
    /// Build the grid for the current window size and draw the arrow.
    ///
    /// # Arguments
    /// * `config` - Optional configuration object; `undefined` for defaults
    ///
    /// # Errors
    ///
    /// Throws if the configuration is invalid or the page lacks the
    /// container or polygon.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ArrowGrid, JsValue> {
        let config = config_from_js(config)?;
        let window = web_sys::window().ok_or_else(|| BindingError::missing("window"))?;
        let document = window
            .document()
            .ok_or_else(|| BindingError::missing("document"))?;

        let mut view = DomView::new(document.clone())?;
        let fields = DomFields::new(document);
        let (width, height) = viewport(&window)?;
        let scene = Scene::load(config, width, height, &mut view).map_err(BindingError::from)?;

        Ok(ArrowGrid {
            window,
            scene,
            view,
            fields,
        })
    }

    /// Rebuild the grid for the current window size and redraw the arrow.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let (width, height) = viewport(&self.window)?;
        self.scene
            .resize(width, height, &mut self.view)
            .map_err(rejected)
    }

    /// Redraw the untransformed arrow.
    pub fn reset(&mut self) {
        self.scene.reset(&mut self.view);
    }

    /// Move the arrow to the coordinates typed into the input fields.
    pub fn apply_inputs(&mut self) -> Result<(), JsValue> {
        self.scene
            .apply_inputs(&self.fields, &mut self.view)
            .map_err(rejected)
    }

    /// Move one vertex after its coordinate field was edited.
    ///
    /// # Arguments
    /// * `field_id` - Input element id, `p0-input-x` to `p6-input-y`
    pub fn apply_input(&mut self, field_id: &str) -> Result<(), JsValue> {
        let field: FieldId = field_id.parse().map_err(rejected)?;
        self.scene
            .apply_field(field, &self.fields, &mut self.view)
            .map_err(rejected)
    }

    /// Apply the matrix typed into the matrix fields to the reference arrow.
    pub fn apply_matrix(&mut self) -> Result<(), JsValue> {
        self.scene
            .apply_matrix(&self.fields, &mut self.view)
            .map(|_| ())
            .map_err(rejected)
    }

    /// Highlight a vertex marker (pointer enter).
    ///
    /// # Arguments
    /// * `marker_id` - Marker element id, `c0` to `c6`
    pub fn highlight(&mut self, marker_id: &str) -> Result<(), JsValue> {
        self.set_highlight(marker_id, Highlight::On)
    }

    /// Restore a vertex marker's default fill (pointer leave).
    pub fn remove_highlight(&mut self, marker_id: &str) -> Result<(), JsValue> {
        self.set_highlight(marker_id, Highlight::Off)
    }

    /// Current grid layout as a plain object.
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.scene.layout()).map_err(JsValue::from)
    }

    /// The arrow as drawn: an array of `{x, y}` in absolute pixels.
    pub fn displayed_points(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.scene.displayed()).map_err(JsValue::from)
    }

    /// The untransformed arrow: an array of `{x, y}` in absolute pixels.
    pub fn reference_points(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.scene.reference()).map_err(JsValue::from)
    }

    /// Layout, reference and displayed points in one object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&JsSnapshot::from(&self.scene)).map_err(JsValue::from)
    }
}

impl ArrowGrid {
    fn set_highlight(&mut self, marker_id: &str, state: Highlight) -> Result<(), JsValue> {
        let marker: MarkerId = marker_id.parse().map_err(rejected)?;
        self.scene.set_highlight(marker, state, &mut self.view);
        Ok(())
    }
}

fn viewport(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = viewport_dimension(window.inner_width()?.as_f64());
    let height = viewport_dimension(window.inner_height()?.as_f64());
    Ok((width, height))
}

fn rejected(err: impl Into<BindingError>) -> JsValue {
    let err: BindingError = err.into();
    console::warn_1(&format!("ArrowGrid: {err}").into());
    err.into()
}
