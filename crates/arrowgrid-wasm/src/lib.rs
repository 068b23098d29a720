//! ArrowGrid WASM - WebAssembly bindings for ArrowGrid
//!
//! This crate binds the arrowgrid-core scene to a browser page so the
//! interactive runs entirely in WebAssembly. The page supplies the markup
//! and wires its events; this crate keeps the drawing and the inputs in
//! step.
//!
//! # Module Structure
//!
//! - `grid` - The `ArrowGrid` handle and its event methods
//! - `dom` - Render sink and field source over the DOM
//! - `error` - Binding errors thrown to JavaScript
//! - `types` - Conversions between core types and JS values
//!
//! # Usage
//!
//! ```typescript
//! import init, { ArrowGrid } from '@arrowgrid/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const grid = new ArrowGrid();
//! window.addEventListener('resize', () => grid.resize());
//! ```

use wasm_bindgen::prelude::*;

mod dom;
mod error;
mod grid;
mod types;

pub use grid::ArrowGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
