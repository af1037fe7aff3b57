#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod download;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use canvas::{Canvas, Gesture};
pub use config::AppConfig;
pub use error::{SketchError, SketchResult};
pub use export::{ExportFormat, ExportRequest};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use stroke::{StrokeSegment, StrokeStyle};
pub use surface::DrawingSurface;
pub use tools::{HexColor, Tool, ToolState};
