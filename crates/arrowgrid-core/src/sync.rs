//! The seams between the scene and whatever draws it.
//!
//! The browser implements these traits over the DOM; tests implement them
//! over plain maps.

use crate::fields::FieldId;
use crate::layout::Layout;
use crate::marker::MarkerId;
use crate::{ArrowPoints, Point};

/// Receives every visual change the scene makes.
pub trait RenderSink {
    /// Size the grid container and its background for a new layout.
    fn set_grid(&mut self, layout: &Layout);

    /// Replace the polygon's vertices, in order.
    fn set_vertices(&mut self, points: &ArrowPoints);

    /// Move one vertex marker.
    fn set_marker_position(&mut self, marker: MarkerId, point: Point);

    /// Write the text of one input field.
    fn set_field_value(&mut self, field: FieldId, text: &str);

    /// Change the fill color of one vertex marker.
    fn set_marker_fill(&mut self, marker: MarkerId, color: &str);
}

/// Supplies the current text of input fields.
pub trait FieldSource {
    /// Current text of `field`, or `None` if the field does not exist.
    fn read_field(&self, field: FieldId) -> Option<String>;
}
