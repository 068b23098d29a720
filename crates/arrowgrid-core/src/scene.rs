//! The scene context: layout, reference arrow and displayed arrow.
//!
//! A [`Scene`] is created on load and replaces its derived state wholesale
//! on resize. Every path that moves the arrow (load, reset, coordinate
//! edits, matrix transforms) ends in [`Scene::sync`], which updates the
//! polygon, the markers and the coordinate fields together so they can
//! never disagree.
//!
//! Edits are parsed completely before anything is mutated. An edit with one
//! bad field is rejected as a whole and leaves the scene untouched.

use crate::arrow::reference_positions;
use crate::config::SceneConfig;
use crate::error::{ArrowGridError, Result};
use crate::fields::{format_number, parse_number, FieldId, MATRIX_FIELDS};
use crate::layout::Layout;
use crate::marker::{Highlight, MarkerId};
use crate::matrix::Matrix2;
use crate::sync::{FieldSource, RenderSink};
use crate::{ArrowPoints, Point, VERTEX_COUNT};

/// State shared by every handler of the interactive.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    layout: Layout,
    reference: ArrowPoints,
    displayed: ArrowPoints,
}

impl Scene {
    /// Build the scene for a viewport without drawing anything.
    pub fn new(config: SceneConfig, viewport_width: u32, viewport_height: u32) -> Result<Self> {
        config.validate()?;
        let layout = Layout::compute(viewport_width, viewport_height, config.square_size)?;
        let reference = reference_positions(&layout, &config.arrow);

        Ok(Self {
            config,
            layout,
            reference,
            displayed: reference,
        })
    }

    /// Build the scene and draw the grid and the reference arrow.
    pub fn load(
        config: SceneConfig,
        viewport_width: u32,
        viewport_height: u32,
        sink: &mut impl RenderSink,
    ) -> Result<Self> {
        let mut scene = Self::new(config, viewport_width, viewport_height)?;
        sink.set_grid(&scene.layout);
        scene.reset(sink);
        Ok(scene)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The untransformed arrow for the current layout.
    pub fn reference(&self) -> &ArrowPoints {
        &self.reference
    }

    /// The arrow as last drawn, in absolute pixels.
    pub fn displayed(&self) -> &ArrowPoints {
        &self.displayed
    }

    /// Rebuild the grid for a new viewport and redraw the reference arrow.
    ///
    /// Any transform or edit shown before the resize is discarded.
    pub fn resize(
        &mut self,
        viewport_width: u32,
        viewport_height: u32,
        sink: &mut impl RenderSink,
    ) -> Result<()> {
        let layout = Layout::compute(viewport_width, viewport_height, self.config.square_size)?;
        self.layout = layout;
        self.reference = reference_positions(&self.layout, &self.config.arrow);
        sink.set_grid(&self.layout);
        self.reset(sink);
        Ok(())
    }

    /// Redraw the reference arrow.
    pub fn reset(&mut self, sink: &mut impl RenderSink) {
        let reference = self.reference;
        self.sync(&reference, sink);
    }

    /// Move the arrow to the coordinates currently typed into the fields.
    ///
    /// Field values are relative to the intercept.
    pub fn apply_inputs(
        &mut self,
        source: &impl FieldSource,
        sink: &mut impl RenderSink,
    ) -> Result<()> {
        let points = match self.read_points(source) {
            Ok(points) => points,
            Err(err) => {
                crate::log::warn!(%err, "rejected coordinate edit");
                return Err(err);
            }
        };
        self.sync(&points, sink);
        Ok(())
    }

    /// Move one vertex to the value typed into a single coordinate field.
    ///
    /// Only `field` is read; the other vertices keep their displayed
    /// positions.
    pub fn apply_field(
        &mut self,
        field: FieldId,
        source: &impl FieldSource,
        sink: &mut impl RenderSink,
    ) -> Result<()> {
        let vertex = field
            .vertex()
            .ok_or(ArrowGridError::NotCoordinateField(field))?;
        let value = match read_number(source, field) {
            Ok(value) => value,
            Err(err) => {
                crate::log::warn!(%err, "rejected coordinate edit");
                return Err(err);
            }
        };

        let origin = self.layout.intercept();
        let mut points = self.displayed;
        let mut relative = points[vertex].relative_to(origin);
        match field {
            FieldId::PointX(_) => relative.x = value,
            _ => relative.y = value,
        }
        points[vertex] = relative.offset_by(origin);
        self.sync(&points, sink);
        Ok(())
    }

    /// Read the matrix fields and apply the matrix to the reference arrow.
    ///
    /// Returns the matrix that was applied.
    pub fn apply_matrix(
        &mut self,
        source: &impl FieldSource,
        sink: &mut impl RenderSink,
    ) -> Result<Matrix2> {
        let matrix = match read_matrix(source) {
            Ok(matrix) => matrix,
            Err(err) => {
                crate::log::warn!(%err, "rejected matrix");
                return Err(err);
            }
        };
        if let Err(err) = self.transform(matrix, sink) {
            crate::log::warn!(%err, "rejected matrix");
            return Err(err);
        }
        Ok(matrix)
    }

    /// Apply `matrix` to the reference arrow about the intercept.
    ///
    /// The displayed arrow is ignored, so applying the same matrix twice
    /// gives the same result as applying it once.
    ///
    /// # Errors
    ///
    /// Returns [`ArrowGridError::NonFiniteResult`] if any vertex overflows;
    /// nothing is drawn in that case.
    pub fn transform(&mut self, matrix: Matrix2, sink: &mut impl RenderSink) -> Result<()> {
        crate::log::debug!(?matrix, "applying matrix");
        let points = matrix.transform_about(&self.reference, self.layout.intercept());
        if let Some(vertex) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ArrowGridError::NonFiniteResult {
                matrix: matrix.to_string(),
                vertex,
            });
        }
        self.sync(&points, sink);
        Ok(())
    }

    /// Draw `points` and write them into the coordinate fields.
    pub fn sync(&mut self, points: &ArrowPoints, sink: &mut impl RenderSink) {
        let origin = self.layout.intercept();

        sink.set_vertices(points);
        for (marker, point) in MarkerId::all().zip(points.iter()) {
            sink.set_marker_position(marker, *point);

            let relative = point.relative_to(origin);
            let (x_field, y_field) = FieldId::coordinate_pair(marker.index());
            sink.set_field_value(x_field, &format_number(relative.x));
            sink.set_field_value(y_field, &format_number(relative.y));
        }

        self.displayed = *points;
    }

    /// Color a marker for pointer enter (`On`) or leave (`Off`).
    pub fn set_highlight(&self, marker: MarkerId, state: Highlight, sink: &mut impl RenderSink) {
        sink.set_marker_fill(marker, state.fill(&self.config));
    }

    /// Parse all 14 coordinate fields into absolute points.
    pub fn read_points(&self, source: &impl FieldSource) -> Result<ArrowPoints> {
        let origin = self.layout.intercept();
        let mut points = [Point::default(); VERTEX_COUNT];

        for (index, point) in points.iter_mut().enumerate() {
            let (x_field, y_field) = FieldId::coordinate_pair(index);
            let relative = Point::new(read_number(source, x_field)?, read_number(source, y_field)?);
            *point = relative.offset_by(origin);
        }

        Ok(points)
    }
}

/// Parse the four matrix fields.
pub fn read_matrix(source: &impl FieldSource) -> Result<Matrix2> {
    let mut entries = [0.0; 4];
    for (entry, field) in entries.iter_mut().zip(MATRIX_FIELDS) {
        *entry = read_number(source, field)?;
    }
    Ok(Matrix2::from_row_major(entries))
}

fn read_number(source: &impl FieldSource, field: FieldId) -> Result<f64> {
    let text = source
        .read_field(field)
        .ok_or(ArrowGridError::MissingField(field))?;
    parse_number(field, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stand-in for the page: input fields plus everything drawn.
    #[derive(Default)]
    struct MemoryView {
        fields: HashMap<FieldId, String>,
        grid: Option<Layout>,
        vertices: Option<ArrowPoints>,
        markers: HashMap<MarkerId, Point>,
        fills: HashMap<MarkerId, String>,
        writes: usize,
    }

    impl MemoryView {
        fn with_matrix(entries: [&str; 4]) -> Self {
            let mut view = Self::default();
            view.set_matrix(entries);
            view
        }

        fn set_matrix(&mut self, entries: [&str; 4]) {
            for (field, text) in MATRIX_FIELDS.into_iter().zip(entries) {
                self.fields.insert(field, text.to_string());
            }
        }

        fn field(&self, field: FieldId) -> &str {
            &self.fields[&field]
        }
    }

    impl RenderSink for MemoryView {
        fn set_grid(&mut self, layout: &Layout) {
            self.grid = Some(*layout);
            self.writes += 1;
        }

        fn set_vertices(&mut self, points: &ArrowPoints) {
            self.vertices = Some(*points);
            self.writes += 1;
        }

        fn set_marker_position(&mut self, marker: MarkerId, point: Point) {
            self.markers.insert(marker, point);
            self.writes += 1;
        }

        fn set_field_value(&mut self, field: FieldId, text: &str) {
            self.fields.insert(field, text.to_string());
            self.writes += 1;
        }

        fn set_marker_fill(&mut self, marker: MarkerId, color: &str) {
            self.fills.insert(marker, color.to_string());
            self.writes += 1;
        }
    }

    impl FieldSource for MemoryView {
        fn read_field(&self, field: FieldId) -> Option<String> {
            self.fields.get(&field).cloned()
        }
    }

    fn loaded() -> (Scene, MemoryView) {
        let mut view = MemoryView::with_matrix(["1", "0", "0", "1"]);
        let scene = Scene::load(SceneConfig::default(), 800, 600, &mut view).unwrap();
        (scene, view)
    }

    /// Run an edit that reads from and writes to the same view.
    fn apply_inputs(scene: &mut Scene, view: &mut MemoryView) -> Result<()> {
        let source = MemoryView {
            fields: view.fields.clone(),
            ..Default::default()
        };
        scene.apply_inputs(&source, view)
    }

    fn apply_matrix(scene: &mut Scene, view: &mut MemoryView) -> Result<Matrix2> {
        let source = MemoryView {
            fields: view.fields.clone(),
            ..Default::default()
        };
        scene.apply_matrix(&source, view)
    }

    fn assert_view_matches(scene: &Scene, view: &MemoryView) {
        let origin = scene.layout().intercept();
        assert_eq!(view.vertices.as_ref(), Some(scene.displayed()));
        for marker in MarkerId::all() {
            let point = scene.displayed()[marker.index()];
            assert_eq!(view.markers[&marker], point);

            let relative = point.relative_to(origin);
            let (x_field, y_field) = FieldId::coordinate_pair(marker.index());
            assert_eq!(view.field(x_field), format_number(relative.x));
            assert_eq!(view.field(y_field), format_number(relative.y));
        }
    }

    #[test]
    fn test_load_draws_reference_arrow() {
        let (scene, view) = loaded();

        assert_eq!(view.grid, Some(*scene.layout()));
        assert_eq!(scene.displayed(), scene.reference());
        assert_view_matches(&scene, &view);

        assert_eq!(view.field(FieldId::PointX(0)), "0");
        assert_eq!(view.field(FieldId::PointY(0)), "-80");
        assert_eq!(view.field(FieldId::PointX(1)), "-60");
        assert_eq!(view.field(FieldId::PointY(3)), "80");
    }

    #[test]
    fn test_new_rejects_zero_square_size() {
        let mut config = SceneConfig::default();
        config.square_size = 0;
        assert_eq!(
            Scene::new(config, 800, 600).unwrap_err(),
            ArrowGridError::ZeroSquareSize
        );
    }

    #[test]
    fn test_identity_matrix_reproduces_reference() {
        let (mut scene, mut view) = loaded();
        let matrix = apply_matrix(&mut scene, &mut view).unwrap();

        assert_eq!(matrix, Matrix2::IDENTITY);
        assert_eq!(scene.displayed(), scene.reference());
        assert_view_matches(&scene, &view);
    }

    #[test]
    fn test_matrix_is_not_compounded() {
        let (mut scene, mut view) = loaded();
        view.set_matrix(["2", "0.5", "0", "-1"]);

        apply_matrix(&mut scene, &mut view).unwrap();
        let first = *scene.displayed();
        apply_matrix(&mut scene, &mut view).unwrap();

        assert_eq!(*scene.displayed(), first);
        assert_ne!(first, *scene.reference());
    }

    #[test]
    fn test_matrix_ignores_edited_arrow() {
        let (mut scene, mut view) = loaded();
        view.fields.insert(FieldId::PointX(0), "100".to_string());
        apply_inputs(&mut scene, &mut view).unwrap();

        apply_matrix(&mut scene, &mut view).unwrap();
        assert_eq!(scene.displayed(), scene.reference());
    }

    #[test]
    fn test_axis_swap_updates_fields() {
        let (mut scene, mut view) = loaded();
        view.set_matrix(["0", "1", "1", "0"]);
        apply_matrix(&mut scene, &mut view).unwrap();

        // tip moves from (0, -80) to (-80, 0)
        assert_eq!(view.field(FieldId::PointX(0)), "-80");
        assert_eq!(view.field(FieldId::PointY(0)), "0");
        assert_eq!(scene.displayed()[0], Point::new(320.0, 300.0));
        assert_view_matches(&scene, &view);
    }

    #[test]
    fn test_single_field_edit_moves_one_vertex() {
        let (mut scene, mut view) = loaded();
        let before = *scene.displayed();
        let fields_before = view.fields.clone();

        view.fields.insert(FieldId::PointX(2), "35".to_string());
        apply_inputs(&mut scene, &mut view).unwrap();

        let after = scene.displayed();
        assert_eq!(after[2], Point::new(435.0, before[2].y));
        for index in (0..VERTEX_COUNT).filter(|&i| i != 2) {
            assert_eq!(after[index], before[index]);
            let (x_field, y_field) = FieldId::coordinate_pair(index);
            assert_eq!(view.fields[&x_field], fields_before[&x_field]);
            assert_eq!(view.fields[&y_field], fields_before[&y_field]);
        }
        assert_eq!(view.field(FieldId::PointY(2)), fields_before[&FieldId::PointY(2)]);
        assert_view_matches(&scene, &view);
    }

    #[test]
    fn test_direct_edit_round_trip() {
        let (mut scene, mut view) = loaded();
        view.fields.insert(FieldId::PointX(4), "-7".to_string());
        view.fields.insert(FieldId::PointY(6), " 12 ".to_string());
        apply_inputs(&mut scene, &mut view).unwrap();
        let first = *scene.displayed();

        // the fields now hold what sync wrote; feeding them back is stable
        apply_inputs(&mut scene, &mut view).unwrap();
        assert_eq!(*scene.displayed(), first);
        assert_eq!(view.field(FieldId::PointY(6)), "12");
    }

    #[test]
    fn test_fractional_matrix_fields_read_back() {
        let (mut scene, mut view) = loaded();
        view.set_matrix(["0.5", "0.25", "-0.75", "1.5"]);
        apply_matrix(&mut scene, &mut view).unwrap();
        let transformed = *scene.displayed();

        apply_inputs(&mut scene, &mut view).unwrap();
        assert_eq!(*scene.displayed(), transformed);
    }

    #[test]
    fn test_invalid_coordinate_leaves_scene_untouched() {
        let (mut scene, mut view) = loaded();
        let before = *scene.displayed();
        view.fields.insert(FieldId::PointY(5), "abc".to_string());
        let writes = view.writes;

        let err = apply_inputs(&mut scene, &mut view).unwrap_err();
        assert_eq!(
            err,
            ArrowGridError::InvalidNumber {
                field: FieldId::PointY(5),
                text: "abc".to_string(),
            }
        );
        assert_eq!(*scene.displayed(), before);
        assert_eq!(view.writes, writes);
    }

    #[test]
    fn test_invalid_matrix_leaves_scene_untouched() {
        let (mut scene, mut view) = loaded();
        view.set_matrix(["1", "", "0", "1"]);
        let writes = view.writes;

        let err = apply_matrix(&mut scene, &mut view).unwrap_err();
        assert!(matches!(
            err,
            ArrowGridError::InvalidNumber {
                field: FieldId::Matrix { row: 0, col: 1 },
                ..
            }
        ));
        assert_eq!(scene.displayed(), scene.reference());
        assert_eq!(view.writes, writes);
    }

    #[test]
    fn test_overflowing_matrix_rejected() {
        let (mut scene, mut view) = loaded();
        view.set_matrix(["1e308", "1e308", "0", "1"]);
        let fields_before = view.fields.clone();
        let writes = view.writes;

        let err = apply_matrix(&mut scene, &mut view).unwrap_err();
        assert!(matches!(err, ArrowGridError::NonFiniteResult { .. }));
        assert_eq!(scene.displayed(), scene.reference());
        assert_eq!(view.writes, writes);
        assert_eq!(view.fields, fields_before);

        // the fields still hold readable numbers
        apply_inputs(&mut scene, &mut view).unwrap();
        assert_eq!(scene.displayed(), scene.reference());
    }

    #[test]
    fn test_large_finite_matrix_accepted() {
        let (mut scene, mut view) = loaded();
        view.set_matrix(["1e300", "0", "0", "1"]);
        apply_matrix(&mut scene, &mut view).unwrap();

        assert!(scene.displayed().iter().all(|p| p.x.is_finite()));
        let transformed = *scene.displayed();
        apply_inputs(&mut scene, &mut view).unwrap();
        assert_eq!(*scene.displayed(), transformed);
    }

    #[test]
    fn test_apply_field_moves_only_that_coordinate() {
        let (mut scene, mut view) = loaded();
        let before = *scene.displayed();
        view.fields.insert(FieldId::PointY(4), "-15".to_string());
        // an unrelated field with bad text is never read
        view.fields.insert(FieldId::PointX(1), "oops".to_string());

        let source = MemoryView {
            fields: view.fields.clone(),
            ..Default::default()
        };
        scene.apply_field(FieldId::PointY(4), &source, &mut view).unwrap();

        assert_eq!(scene.displayed()[4], Point::new(before[4].x, 285.0));
        for index in (0..VERTEX_COUNT).filter(|&i| i != 4) {
            assert_eq!(scene.displayed()[index], before[index]);
        }
        // sync rewrites the stray field from the displayed arrow
        assert_eq!(view.field(FieldId::PointX(1)), "-60");
        assert_view_matches(&scene, &view);
    }

    #[test]
    fn test_apply_field_rejects_matrix_field() {
        let (mut scene, mut view) = loaded();
        let source = MemoryView {
            fields: view.fields.clone(),
            ..Default::default()
        };
        let field = MATRIX_FIELDS[3];

        assert_eq!(
            scene.apply_field(field, &source, &mut view),
            Err(ArrowGridError::NotCoordinateField(field))
        );
    }

    #[test]
    fn test_missing_field() {
        let (mut scene, mut view) = loaded();
        view.fields.remove(&FieldId::PointX(6));

        assert_eq!(
            apply_inputs(&mut scene, &mut view),
            Err(ArrowGridError::MissingField(FieldId::PointX(6)))
        );
    }

    #[test]
    fn test_reset_discards_edits() {
        let (mut scene, mut view) = loaded();
        view.set_matrix(["3", "0", "0", "3"]);
        apply_matrix(&mut scene, &mut view).unwrap();

        scene.reset(&mut view);
        assert_eq!(scene.displayed(), scene.reference());
        assert_view_matches(&scene, &view);
    }

    #[test]
    fn test_resize_rebuilds_everything() {
        let (mut scene, mut view) = loaded();
        view.set_matrix(["0", "-1", "1", "0"]);
        apply_matrix(&mut scene, &mut view).unwrap();

        scene.resize(1024, 768, &mut view).unwrap();

        assert_eq!(scene.layout().intercept(), Point::new(500.0, 380.0));
        assert_eq!(view.grid, Some(*scene.layout()));
        assert_eq!(scene.displayed(), scene.reference());
        assert_eq!(scene.reference()[0], Point::new(500.0, 300.0));
        // relative coordinates do not depend on the viewport
        assert_eq!(view.field(FieldId::PointY(0)), "-80");
        assert_view_matches(&scene, &view);
    }

    #[test]
    fn test_matrix_after_resize_uses_new_reference() {
        let (mut scene, mut view) = loaded();
        scene.resize(1024, 768, &mut view).unwrap();

        apply_matrix(&mut scene, &mut view).unwrap();
        assert_eq!(scene.displayed()[0], Point::new(500.0, 300.0));
    }

    #[test]
    fn test_highlight_toggles_fill() {
        let (scene, mut view) = loaded();
        let marker = MarkerId::new(3).unwrap();

        scene.set_highlight(marker, Highlight::On, &mut view);
        assert_eq!(view.fills[&marker], "#FF7043");

        scene.set_highlight(marker, Highlight::Off, &mut view);
        assert_eq!(view.fills[&marker], "#000");
        assert_eq!(view.fills.len(), 1);
    }

    #[test]
    fn test_custom_config() {
        let mut config = SceneConfig::default();
        config.square_size = 10;
        config.highlight_fill = "red".to_string();
        let mut view = MemoryView::default();
        let scene = Scene::load(config, 800, 600, &mut view).unwrap();

        assert_eq!(scene.layout().x_num_squares, 80);
        assert_eq!(view.field(FieldId::PointY(0)), "-40");

        scene.set_highlight(MarkerId::new(0).unwrap(), Highlight::On, &mut view);
        assert_eq!(view.fills[&MarkerId::new(0).unwrap()], "red");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
