//! Layered shape store.

use crate::gesture::UpdateSink;
use crate::shapes::{Shape, ShapeId, ShapePatch};
use crate::transform::GroupTransform;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use uuid::Uuid;

/// Offset applied to duplicated shapes on both axes.
pub const DUPLICATE_OFFSET: f64 = 10.0;

/// Document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Layer not found: {0}")]
    LayerNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

fn default_visible() -> bool {
    true
}

/// A named, ordered list of shapes. Array order is z-order within the layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            shapes: Vec::new(),
            is_visible: true,
        }
    }

    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.find_shape(id).is_some()
    }
}

/// Fixed export frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artboard {
    pub width: f64,
    pub height: f64,
    /// Preset tag such as `16:9`, or `custom`.
    pub aspect_ratio: String,
}

impl Artboard {
    pub const PRESETS: [(&'static str, f64, f64); 4] = [
        ("16:9", 1920.0, 1080.0),
        ("9:16", 1080.0, 1920.0),
        ("4:3", 1024.0, 768.0),
        ("1:1", 1080.0, 1080.0),
    ];

    /// Artboard for a preset tag, `None` if the tag is unknown.
    pub fn preset(tag: &str) -> Option<Self> {
        Self::PRESETS
            .iter()
            .find(|(name, _, _)| *name == tag)
            .map(|&(name, width, height)| Self {
                width,
                height,
                aspect_ratio: name.to_string(),
            })
    }

    pub fn custom(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            aspect_ratio: "custom".to_string(),
        }
    }
}

/// A drawing: layers plus an optional artboard.
///
/// `layers[0]` is the topmost layer. Rendering and export walk the layers in
/// reverse, so the last layer is painted first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Drawing {
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub artboard: Option<Artboard>,
    #[serde(skip)]
    batch_open: bool,
}

impl PartialEq for Drawing {
    fn eq(&self, other: &Self) -> bool {
        self.layers == other.layers && self.artboard == other.artboard
    }
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer on top of the others. Returns its id.
    pub fn add_layer(&mut self, name: impl Into<String>) -> String {
        let layer = Layer::new(name);
        let id = layer.id.clone();
        self.layers.insert(0, layer);
        id
    }

    pub fn layer(&self, layer_id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == layer_id)
    }

    pub fn layer_mut(&mut self, layer_id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == layer_id)
    }

    fn require_layer_mut(&mut self, layer_id: &str) -> DocumentResult<&mut Layer> {
        self.layer_mut(layer_id)
            .ok_or_else(|| DocumentError::LayerNotFound(layer_id.to_string()))
    }

    /// Append a shape to the top of a layer.
    pub fn add_shape(&mut self, layer_id: &str, shape: Shape) -> DocumentResult<ShapeId> {
        let layer = self.require_layer_mut(layer_id)?;
        let id = shape.id();
        layer.shapes.push(shape);
        Ok(id)
    }

    /// Append several shapes to a layer at once.
    pub fn add_shapes(
        &mut self,
        layer_id: &str,
        shapes: impl IntoIterator<Item = Shape>,
    ) -> DocumentResult<Vec<ShapeId>> {
        let layer = self.require_layer_mut(layer_id)?;
        let mut ids = Vec::new();
        for shape in shapes {
            ids.push(shape.id());
            layer.shapes.push(shape);
        }
        Ok(ids)
    }

    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.layers.iter().find_map(|l| l.find_shape(id))
    }

    pub fn find_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.layers
            .iter_mut()
            .flat_map(|l| l.shapes.iter_mut())
            .find(|s| s.id() == id)
    }

    /// Id of the layer holding a shape.
    pub fn layer_of(&self, id: ShapeId) -> Option<&str> {
        self.layers
            .iter()
            .find(|l| l.contains(id))
            .map(|l| l.id.as_str())
    }

    /// Copies of the shapes with the given ids, in document order.
    pub fn shapes_by_ids(&self, ids: &[ShapeId]) -> Vec<Shape> {
        let wanted: HashSet<ShapeId> = ids.iter().copied().collect();
        self.layers
            .iter()
            .flat_map(|l| l.shapes.iter())
            .filter(|s| wanted.contains(&s.id()))
            .cloned()
            .collect()
    }

    /// Remove shapes by id, returning the removed shapes.
    pub fn remove_shapes(&mut self, ids: &[ShapeId]) -> Vec<Shape> {
        let wanted: HashSet<ShapeId> = ids.iter().copied().collect();
        let mut removed = Vec::new();
        for layer in &mut self.layers {
            let (gone, kept): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut layer.shapes)
                .into_iter()
                .partition(|s| wanted.contains(&s.id()));
            layer.shapes = kept;
            removed.extend(gone);
        }
        removed
    }

    /// Copy the shapes of `layer_id` with the given ids, offset by
    /// [`DUPLICATE_OFFSET`], and append the copies to the same layer.
    ///
    /// Copies get fresh ids; copies of a group form a new group of their own.
    pub fn duplicate_shapes(
        &mut self,
        layer_id: &str,
        ids: &[ShapeId],
    ) -> DocumentResult<Vec<ShapeId>> {
        let layer = self.require_layer_mut(layer_id)?;
        let wanted: HashSet<ShapeId> = ids.iter().copied().collect();
        let offset = GroupTransform::translation(Vec2::new(DUPLICATE_OFFSET, DUPLICATE_OFFSET));
        let mut new_groups: HashMap<String, String> = HashMap::new();

        let copies: Vec<Shape> = layer
            .shapes
            .iter()
            .filter(|s| wanted.contains(&s.id()))
            .map(|original| {
                let mut copy = original.patched(&original.transformed(&offset));
                copy.regenerate_id();
                if let Some(group) = original.group_id() {
                    let fresh = new_groups
                        .entry(group.to_string())
                        .or_insert_with(|| Uuid::new_v4().to_string())
                        .clone();
                    copy.apply_patch(&ShapePatch::group(Some(fresh)));
                }
                copy
            })
            .collect();

        let new_ids = copies.iter().map(Shape::id).collect();
        layer.shapes.extend(copies);
        log::debug!("duplicated {} shape(s) in layer {}", ids.len(), layer_id);
        Ok(new_ids)
    }

    /// Grow a selection so that selecting one member of a group selects the
    /// whole group within its layer. Order follows the document.
    pub fn expand_group_selection(&self, ids: &[ShapeId]) -> Vec<ShapeId> {
        let selected: HashSet<ShapeId> = ids.iter().copied().collect();
        let mut result = Vec::new();
        for layer in &self.layers {
            let groups: HashSet<&str> = layer
                .shapes
                .iter()
                .filter(|s| selected.contains(&s.id()))
                .filter_map(Shape::group_id)
                .collect();
            result.extend(
                layer
                    .shapes
                    .iter()
                    .filter(|s| {
                        selected.contains(&s.id())
                            || s.group_id().is_some_and(|g| groups.contains(g))
                    })
                    .map(Shape::id),
            );
        }
        result
    }

    /// Put the shapes in a new group. Needs at least two existing shapes.
    pub fn group_shapes(&mut self, ids: &[ShapeId]) -> Option<String> {
        let present: Vec<ShapeId> = ids
            .iter()
            .copied()
            .filter(|id| self.find_shape(*id).is_some())
            .collect();
        if present.len() < 2 {
            return None;
        }
        let group_id = Uuid::new_v4().to_string();
        let patch = ShapePatch::group(Some(group_id.clone()));
        for id in present {
            if let Some(shape) = self.find_shape_mut(id) {
                shape.apply_patch(&patch);
            }
        }
        Some(group_id)
    }

    /// Dissolve every group touched by `ids`. Returns the ungrouped shape ids.
    pub fn ungroup_shapes(&mut self, ids: &[ShapeId]) -> Vec<ShapeId> {
        let members = self.expand_group_selection(ids);
        let patch = ShapePatch::group(None);
        let mut ungrouped = Vec::new();
        for id in members {
            if let Some(shape) = self.find_shape_mut(id) {
                if shape.group_id().is_some() {
                    shape.apply_patch(&patch);
                    ungrouped.push(id);
                }
            }
        }
        ungrouped
    }

    /// Visible layers in paint order (bottom first).
    pub fn visible_layers_bottom_to_top(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().rev().filter(|l| l.is_visible)
    }

    /// Whether a gesture batch is currently open.
    pub fn is_batch_open(&self) -> bool {
        self.batch_open
    }

    pub fn to_json(&self) -> DocumentResult<String> {
        serde_json::to_string(self).map_err(|e| DocumentError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> DocumentResult<Self> {
        serde_json::from_str(json).map_err(|e| DocumentError::Serialization(e.to_string()))
    }
}

impl UpdateSink for Drawing {
    fn begin_batch(&mut self) {
        if self.batch_open {
            log::warn!("begin_batch while a batch is open");
        }
        self.batch_open = true;
    }

    fn apply_updates(&mut self, updates: Vec<crate::shapes::ShapeUpdate>) {
        for update in updates {
            match self.find_shape_mut(update.shape_id) {
                Some(shape) => shape.apply_patch(&update.patch),
                None => log::warn!("update for unknown shape {}", update.shape_id),
            }
        }
    }

    fn end_batch(&mut self) {
        self.batch_open = false;
    }
}
