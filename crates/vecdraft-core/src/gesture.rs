//! Pointer and slider interaction state machines.
//!
//! Both machines freeze the selected shapes at interaction start and derive
//! every frame from that snapshot. Updates flow out through an
//! [`UpdateSink`], one batch per interaction.

use crate::geometry::{BBox, group_bounding_box};
use crate::selection::{
    Handle, move_request, resize_request, rotate_request, rotation_request, scale_request,
};
use crate::shapes::{Shape, ShapePatch, ShapeUpdate};
use crate::transform::apply_group_transform;
use kurbo::Point;

/// Receiver of shape updates, typically a history-aware store.
///
/// Within a batch each `apply_updates` call replaces the effect of the
/// previous one, so undo sees a single entry per interaction.
pub trait UpdateSink {
    fn begin_batch(&mut self);
    fn apply_updates(&mut self, updates: Vec<ShapeUpdate>);
    fn end_batch(&mut self);
}

/// Immutable state captured when a drag starts.
#[derive(Debug, Clone)]
pub struct DragSnapshot {
    pub handle: Handle,
    pub start_pointer: Point,
    /// Selection box at pointer-down.
    pub bbox: BBox,
    /// Deep copy of the selected shapes at pointer-down.
    pub shapes: Vec<Shape>,
}

impl DragSnapshot {
    /// The box requested by the pointer at `pointer`, or `None` to hold the
    /// previous frame.
    pub fn requested_bbox(&self, pointer: Point, snap_angle: bool) -> Option<BBox> {
        let delta = pointer - self.start_pointer;
        match self.handle {
            Handle::Move => Some(move_request(&self.bbox, delta)),
            Handle::Rotate => Some(rotate_request(&self.bbox, pointer, snap_angle)),
            handle => resize_request(&self.bbox, handle, delta),
        }
    }

    pub fn updates_for(&self, requested: &BBox) -> Vec<ShapeUpdate> {
        apply_group_transform(&self.shapes, &self.bbox, requested)
    }
}

#[derive(Debug, Clone, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSnapshot),
}

/// Drives `idle -> dragging -> idle` for handle drags.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    state: GestureState,
    /// Snap rotation to fixed increments (usually while shift is held).
    pub snap_angle: bool,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    pub fn active_handle(&self) -> Option<Handle> {
        match &self.state {
            GestureState::Dragging(snapshot) => Some(snapshot.handle),
            GestureState::Idle => None,
        }
    }

    /// Start dragging `handle`. Returns false (and stays idle) for an empty
    /// selection. A drag still open is closed out first.
    pub fn pointer_down<S: UpdateSink + ?Sized>(
        &mut self,
        handle: Handle,
        pointer: Point,
        selection: &[Shape],
        sink: &mut S,
    ) -> bool {
        if self.is_dragging() {
            log::debug!("pointer down while dragging, closing previous gesture");
            self.close(sink);
        }
        let Some(bbox) = group_bounding_box(selection) else {
            return false;
        };
        log::debug!(
            "begin {:?} gesture on {} shape(s) at ({}, {})",
            handle,
            selection.len(),
            pointer.x,
            pointer.y
        );
        sink.begin_batch();
        self.state = GestureState::Dragging(DragSnapshot {
            handle,
            start_pointer: pointer,
            bbox,
            shapes: selection.to_vec(),
        });
        true
    }

    /// Recompute the frame for `pointer` from the snapshot. Ignored while idle.
    pub fn pointer_move<S: UpdateSink + ?Sized>(&mut self, pointer: Point, sink: &mut S) {
        let GestureState::Dragging(snapshot) = &self.state else {
            return;
        };
        match snapshot.requested_bbox(pointer, self.snap_angle) {
            Some(requested) => {
                log::trace!("gesture frame {:?}", requested);
                sink.apply_updates(snapshot.updates_for(&requested));
            }
            None => log::trace!("resize below minimum, holding previous frame"),
        }
    }

    /// Apply the final frame for the release `pointer` and close the batch.
    /// A pointer-up while idle does nothing.
    pub fn pointer_up<S: UpdateSink + ?Sized>(&mut self, pointer: Point, sink: &mut S) {
        self.pointer_move(pointer, sink);
        self.close(sink);
    }

    fn close<S: UpdateSink + ?Sized>(&mut self, sink: &mut S) {
        if let GestureState::Dragging(snapshot) = std::mem::take(&mut self.state) {
            log::debug!("end {:?} gesture", snapshot.handle);
            sink.end_batch();
        }
    }
}

/// What a slider session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    /// Uniform scale factor, 1.0 at the start.
    Scale,
    /// Absolute selection rotation in degrees.
    Rotation,
    /// Corner radius applied to every rectangle and polygon.
    CornerRadius,
}

/// A slider interaction over a frozen snapshot.
///
/// Returning the slider to [`SliderSession::initial_value`] restores the
/// snapshot exactly.
#[derive(Debug, Clone)]
pub struct SliderSession {
    kind: SliderKind,
    bbox: BBox,
    shapes: Vec<Shape>,
    initial_value: f64,
}

impl SliderSession {
    /// Start a session over `selection`. `None` for an empty selection.
    pub fn begin<S: UpdateSink + ?Sized>(
        kind: SliderKind,
        selection: &[Shape],
        sink: &mut S,
    ) -> Option<Self> {
        let bbox = group_bounding_box(selection)?;
        let initial_value = match kind {
            SliderKind::Scale => 1.0,
            SliderKind::Rotation => bbox.rotation,
            SliderKind::CornerRadius => selection
                .iter()
                .find_map(Shape::corner_radius)
                .unwrap_or(0.0),
        };
        log::debug!("begin {:?} slider on {} shape(s)", kind, selection.len());
        sink.begin_batch();
        Some(Self {
            kind,
            bbox,
            shapes: selection.to_vec(),
            initial_value,
        })
    }

    pub fn kind(&self) -> SliderKind {
        self.kind
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Updates for slider position `value`, computed from the snapshot.
    pub fn updates_for(&self, value: f64) -> Vec<ShapeUpdate> {
        match self.kind {
            SliderKind::Scale => {
                apply_group_transform(&self.shapes, &self.bbox, &scale_request(&self.bbox, value))
            }
            SliderKind::Rotation => apply_group_transform(
                &self.shapes,
                &self.bbox,
                &rotation_request(&self.bbox, value),
            ),
            SliderKind::CornerRadius if value == self.initial_value => self
                .shapes
                .iter()
                .filter_map(|s| {
                    s.corner_radius()
                        .map(|r| ShapeUpdate::new(s.id(), ShapePatch::corner_radius(r)))
                })
                .collect(),
            SliderKind::CornerRadius => corner_radius_updates(&self.shapes, value),
        }
    }

    pub fn update<S: UpdateSink + ?Sized>(&self, value: f64, sink: &mut S) {
        log::trace!("{:?} slider at {}", self.kind, value);
        sink.apply_updates(self.updates_for(value));
    }

    pub fn finish<S: UpdateSink + ?Sized>(self, sink: &mut S) {
        log::debug!("end {:?} slider", self.kind);
        sink.end_batch();
    }
}

/// Set the corner radius of every rectangle and polygon in `shapes`.
/// Negative radii clamp to 0; other variants are left out.
pub fn corner_radius_updates(shapes: &[Shape], radius: f64) -> Vec<ShapeUpdate> {
    let radius = radius.max(0.0);
    shapes
        .iter()
        .filter(|s| s.supports_corner_radius())
        .map(|s| ShapeUpdate::new(s.id(), ShapePatch::corner_radius(radius)))
        .collect()
}
