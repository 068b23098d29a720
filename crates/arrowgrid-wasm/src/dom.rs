//! DOM-backed render sink and field source.
//!
//! The page provides the elements; this module only finds and updates them:
//!
//! - `#container` - grid container, sized and given a background per layout
//! - `polygon` - the first `<polygon>` in the document, the arrow
//! - `#c0`..`#c6` - SVG circles marking each vertex
//! - `#p{n}-input-{x,y}` and `#matrix-row-{r}-col-{c}` - numeric inputs
//!
//! Render operations cannot fail from the scene's point of view, so DOM
//! errors during rendering are reported to the browser console instead of
//! being returned.

use crate::error::BindingError;
use arrowgrid_core::fields::format_number;
use arrowgrid_core::{ArrowPoints, FieldId, FieldSource, Layout, MarkerId, Point, RenderSink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlElement, HtmlInputElement, SvgElement};

/// Id of the grid container element.
pub(crate) const CONTAINER_ID: &str = "container";

/// Selector for the arrow polygon.
pub(crate) const POLYGON_SELECTOR: &str = "polygon";

/// Writes scene changes into the page.
pub(crate) struct DomView {
    document: Document,
    container: HtmlElement,
    polygon: Element,
}

impl DomView {
    /// Locate the container and polygon in `document`.
    ///
    /// # Errors
    ///
    /// Returns an error if either element is missing.
    pub(crate) fn new(document: Document) -> Result<Self, BindingError> {
        let container = document
            .get_element_by_id(CONTAINER_ID)
            .ok_or_else(|| BindingError::missing(CONTAINER_ID))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BindingError::Dom(format!("#{CONTAINER_ID} is not an HTML element")))?;
        let polygon = document
            .query_selector(POLYGON_SELECTOR)
            .map_err(|e| BindingError::Dom(format!("{e:?}")))?
            .ok_or_else(|| BindingError::missing(POLYGON_SELECTOR))?;

        Ok(Self {
            document,
            container,
            polygon,
        })
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            console::warn_1(&format!("ArrowGrid: no element #{id}").into());
        }
        element
    }
}

impl RenderSink for DomView {
    fn set_grid(&mut self, layout: &Layout) {
        let style = self.container.style();
        let properties = [
            ("width", format!("{}px", layout.container_width)),
            ("height", format!("{}px", layout.container_height)),
            ("margin-top", format!("{}px", format_number(layout.top_margin))),
            ("background-size", layout.background_size()),
        ];
        for (name, value) in properties {
            report(style.set_property(name, &value));
        }
    }

    fn set_vertices(&mut self, points: &ArrowPoints) {
        report(self.polygon.set_attribute("points", &points_attribute(points)));
    }

    fn set_marker_position(&mut self, marker: MarkerId, point: Point) {
        if let Some(circle) = self.element(&marker.to_string()) {
            report(circle.set_attribute("cx", &format_number(point.x)));
            report(circle.set_attribute("cy", &format_number(point.y)));
        }
    }

    fn set_field_value(&mut self, field: FieldId, text: &str) {
        if let Some(input) = self.element(&field.to_string()).and_then(as_input) {
            input.set_value(text);
        }
    }

    fn set_marker_fill(&mut self, marker: MarkerId, color: &str) {
        let Some(circle) = self.element(&marker.to_string()) else {
            return;
        };
        match circle.dyn_into::<SvgElement>() {
            Ok(circle) => report(circle.style().set_property("fill", color)),
            Err(_) => console::warn_1(&format!("ArrowGrid: #{marker} is not an SVG element").into()),
        }
    }
}

/// Reads the numeric inputs of the page.
pub(crate) struct DomFields {
    document: Document,
}

impl DomFields {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FieldSource for DomFields {
    fn read_field(&self, field: FieldId) -> Option<String> {
        self.document
            .get_element_by_id(&field.to_string())
            .and_then(as_input)
            .map(|input| input.value())
    }
}

/// SVG `points` attribute for the polygon: `"x0,y0 x1,y1 ..."`.
pub(crate) fn points_attribute(points: &ArrowPoints) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn as_input(element: Element) -> Option<HtmlInputElement> {
    element.dyn_into::<HtmlInputElement>().ok()
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::warn_2(&"ArrowGrid: DOM update failed".into(), &err);
    }
}
