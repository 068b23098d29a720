//! Errors raised by the browser bindings.

use arrowgrid_core::ArrowGridError;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Everything that can go wrong between the page and the scene.
///
/// Thrown to JavaScript as an `Error` whose message is the display text.
#[derive(Debug, Error)]
pub(crate) enum BindingError {
    /// The scene rejected an edit or could not be built.
    #[error(transparent)]
    Core(#[from] ArrowGridError),

    /// A required page element or browser global is missing or has the
    /// wrong type.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The configuration object could not be deserialized.
    #[error("Invalid config: {0}")]
    Config(String),
}

impl BindingError {
    pub(crate) fn missing(what: &str) -> Self {
        BindingError::Dom(format!("required element {what} not found"))
    }
}

impl From<BindingError> for JsValue {
    fn from(err: BindingError) -> Self {
        js_sys::Error::new(&format!("ArrowGrid: {err}")).into()
    }
}
