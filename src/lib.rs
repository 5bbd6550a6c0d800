#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod codegen;
pub mod color;
pub mod command;
pub mod config;
pub mod element;
pub mod geometry;
pub mod input;
pub mod painter_surface;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod tools;

pub use app::DesignerApp;
pub use codegen::{CodeGenerator, generate};
pub use color::{ColorParseError, Rgb565};
pub use command::{Command, CommandError, CommandResult};
pub use config::{ConfigError, EditorConfig};
pub use element::{
    PropertyError, PropertyKey, PropertyValue, Shape, ShapeKind, StyleContext, create_shape,
    create_text,
};
pub use geometry::Point;
pub use geometry::hit_testing::HitTester;
pub use raster::RasterSurface;
pub use renderer::{ApproxSansMetrics, Renderer, Surface, TextMeasure};
pub use scene::{ReorderDirection, Scene, SceneError};
pub use state::{EditorContext, EditorState, PointerDown};
pub use tools::Tool;
