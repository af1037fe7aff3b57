use egui::Pos2;

use crate::error::SketchResult;
use crate::export::{self, ExportRequest};
use crate::input::InputEvent;
use crate::stroke::{self, StrokeSegment, StrokeStyle};
use crate::surface::DrawingSurface;
use crate::tools::{HexColor, Tool, ToolState};

/// Whether a pointer gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// `last` is the previous sample; the next move paints from here
    Drawing { last: Pos2 },
}

/// The drawing surface together with the tool settings and the gesture that
/// writes to it. Only one gesture can be active at a time.
#[derive(Debug, Clone)]
pub struct Canvas {
    surface: DrawingSurface,
    tools: ToolState,
    gesture: Gesture,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: HexColor, tools: ToolState) -> Self {
        Self {
            surface: DrawingSurface::new(width, height, background),
            tools,
            gesture: Gesture::Idle,
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }

    pub fn select_color(&mut self, color: HexColor) {
        self.tools.select_color(color);
    }

    pub fn select_brush_size(&mut self, size: u32) {
        self.tools.select_brush_size(size);
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tools.select_tool(tool);
    }

    /// Style for the next painted segment, read from the current tool state.
    ///
    /// The eraser is hard-edged so retracing a pen stroke at the same size
    /// leaves no anti-aliased fringe behind.
    pub fn current_style(&self) -> StrokeStyle {
        let color = self.tools.stroke_color(self.surface.background());
        let width = self.tools.brush_size as f32;
        match self.tools.active_tool {
            Tool::Pen => StrokeStyle::new(color, width),
            Tool::Eraser => StrokeStyle::solid(color, width),
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos } | InputEvent::TouchStart { pos } => {
                self.begin_gesture(pos);
            }
            InputEvent::PointerMove { pos } | InputEvent::TouchMove { pos } => {
                self.extend_gesture(pos);
            }
            InputEvent::PointerUp | InputEvent::PointerLeave | InputEvent::TouchEnd => {
                self.end_gesture();
            }
        }
    }

    /// Start a stroke at `pos`. Nothing is painted until the first move.
    pub fn begin_gesture(&mut self, pos: Pos2) {
        log::debug!("Gesture started at {:?}", pos);
        self.gesture = Gesture::Drawing { last: pos };
    }

    /// Paint from the previous sample to `pos` with the current style.
    /// Ignored while idle.
    pub fn extend_gesture(&mut self, pos: Pos2) {
        let Gesture::Drawing { last } = self.gesture else {
            return;
        };
        let style = self.current_style();
        stroke::paint_segment(&mut self.surface, StrokeSegment::new(last, pos), style);
        self.gesture = Gesture::Drawing { last: pos };
    }

    pub fn end_gesture(&mut self) {
        if self.is_drawing() {
            log::debug!("Gesture ended");
        }
        self.gesture = Gesture::Idle;
    }

    /// Match the container size. A change wipes the surface and ends any gesture.
    pub fn fit_to(&mut self, width: u32, height: u32) -> bool {
        let resized = self.surface.resize(width, height);
        if resized {
            self.gesture = Gesture::Idle;
        }
        resized
    }

    /// Repaint the whole surface with the background. No confirmation, no undo.
    pub fn clear(&mut self) {
        log::info!("Clearing canvas");
        self.surface.clear();
    }

    pub fn export(&self, request: ExportRequest) -> SketchResult<Vec<u8>> {
        export::encode(&self.surface, request)
    }
}
