use log::{info, warn};
use thiserror::Error;

use crate::config::EditorConfig;
use crate::element::{PropertyError, PropertyKey, PropertyValue, Shape, property};
use crate::scene::{ReorderDirection, Scene, SceneError};

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("rejected edit: {0}")]
    Rejected(#[from] PropertyError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Scene mutations requested by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddShape(Shape),
    RemoveShape { index: usize },
    Reorder { index: usize, direction: ReorderDirection },
    /// Property edit, range-checked against the config before it reaches the scene
    SetProperty {
        index: usize,
        key: PropertyKey,
        value: PropertyValue,
    },
    Select(Option<usize>),
    Clear,
}

impl Command {
    pub fn execute(self, scene: &mut Scene, config: &EditorConfig) -> CommandResult {
        match self {
            Command::AddShape(shape) => {
                let kind = shape.kind();
                let index = scene.append(shape);
                info!("Added {} as shape {}", kind, index);
            }
            Command::RemoveShape { index } => {
                let shape = scene.remove(index)?;
                info!("Removed {} at {}", shape.kind(), index);
            }
            Command::Reorder { index, direction } => {
                if !scene.reorder(index, direction)? {
                    info!("Shape {} is already at the {:?} boundary", index, direction);
                }
            }
            Command::SetProperty { index, key, value } => {
                if let Err(err) = property::validate(key, &value, config) {
                    warn!("Rejected edit of shape {}: {}", index, err);
                    return Err(err.into());
                }
                scene.set_property(index, key, value)?;
            }
            Command::Select(index) => scene.select(index)?,
            Command::Clear => scene.clear(),
        }
        Ok(())
    }
}
