//! Vecdraft Core Library
//!
//! Shape model, geometry kernel, path codec and the transform engine behind
//! the vecdraft vector editor. Everything here is pure and synchronous; the
//! only state is the in-memory [`Drawing`] store.

pub mod drawing;
pub mod geometry;
pub mod gesture;
pub mod path_data;
pub mod rounding;
pub mod selection;
pub mod shapes;
pub mod transform;

pub use drawing::{Artboard, DUPLICATE_OFFSET, DocumentError, DocumentResult, Drawing, Layer};
pub use geometry::{Aabb, BBox, group_bounding_box, rotate_point};
pub use gesture::{DragSnapshot, GestureController, GestureState, SliderKind, SliderSession, UpdateSink};
pub use path_data::{ArcParams, PathCommand, PathSegment};
pub use rounding::rounded_path;
pub use selection::{
    ANGLE_SNAP_INCREMENT, HANDLE_SIZE, Handle, MIN_RESIZE_DIMENSION, ROTATE_HANDLE_OFFSET,
};
pub use shapes::{
    Ellipse, FillRule, PathShape, Polygon, Rectangle, SerializableColor, Shape, ShapeId,
    ShapePatch, ShapeStyle, ShapeTrait, ShapeUpdate,
};
pub use transform::{GroupTransform, apply_group_transform};
