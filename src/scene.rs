use log::debug;
use thiserror::Error;

use crate::element::{PropertyError, PropertyKey, PropertyValue, Shape, ShapeKind};

/// Errors from scene mutations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("shape index {index} is out of range (scene has {len} shapes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// Direction for [`Scene::reorder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirection {
    /// Toward the end of the list, painted later
    Up,
    /// Toward the start of the list, painted earlier
    Down,
}

/// The ordered shape list plus the current selection.
///
/// Paint order is list order, so later shapes are drawn on top. The selection is either
/// `None` or a valid index; every mutation keeps it pointing at the same shape or clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    selected: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|index| self.shapes.get(index))
    }

    pub fn contains_kind(&self, kind: ShapeKind) -> bool {
        self.shapes.iter().any(|shape| shape.kind() == kind)
    }

    fn check_index(&self, index: usize) -> Result<(), SceneError> {
        if index < self.shapes.len() {
            Ok(())
        } else {
            Err(SceneError::IndexOutOfRange {
                index,
                len: self.shapes.len(),
            })
        }
    }

    /// Add a shape on top and select it
    pub fn append(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        let index = self.shapes.len() - 1;
        self.selected = Some(index);
        debug!("Appended shape {} ({} total)", index, self.shapes.len());
        index
    }

    /// Remove a shape, keeping the selection on the same shape when it survives
    pub fn remove(&mut self, index: usize) -> Result<Shape, SceneError> {
        self.check_index(index)?;
        let shape = self.shapes.remove(index);

        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        debug!("Removed shape {}, selection now {:?}", index, self.selected);
        Ok(shape)
    }

    /// Swap a shape with its neighbour and select it at its new index.
    ///
    /// Returns false at the list boundaries, leaving order and selection untouched.
    pub fn reorder(&mut self, index: usize, direction: ReorderDirection) -> Result<bool, SceneError> {
        self.check_index(index)?;
        let target = match direction {
            ReorderDirection::Up if index + 1 < self.shapes.len() => index + 1,
            ReorderDirection::Down if index > 0 => index - 1,
            _ => return Ok(false),
        };

        self.shapes.swap(index, target);
        self.selected = Some(target);
        debug!("Moved shape {} to {}", index, target);
        Ok(true)
    }

    /// Edit one field of a shape in place.
    ///
    /// Arc edits that leave the start angle past the end angle swap the two.
    pub fn set_property(
        &mut self,
        index: usize,
        key: PropertyKey,
        value: PropertyValue,
    ) -> Result<(), SceneError> {
        self.check_index(index)?;
        self.shapes[index].set_property(key, value)?;
        Ok(())
    }

    pub fn select(&mut self, index: Option<usize>) -> Result<(), SceneError> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        self.selected = index;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }
}
