use crate::canvas::Canvas;
use crate::config::AppConfig;
use crate::download;
use crate::export::{ExportFormat, ExportRequest};
use crate::input::InputHandler;
use crate::panels::{self, MenuState, PanelAction};
use crate::renderer::Renderer;

pub struct SketchApp {
    config: AppConfig,
    canvas: Canvas,
    renderer: Renderer,
    input: InputHandler,
    menu: MenuState,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::default()
    }

    /// The surface starts empty and is sized to its container on the first frame.
    pub fn with_config(config: AppConfig) -> Self {
        let canvas = Canvas::new(0, 0, config.background, config.initial_tools);
        Self {
            config,
            canvas,
            renderer: Renderer::new(),
            input: InputHandler::default(),
            menu: MenuState::default(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    /// Resize the surface to the canvas area, in whole points
    pub fn fit_canvas(&mut self, rect: egui::Rect) {
        let width = rect.width().max(0.0).floor() as u32;
        let height = rect.height().max(0.0).floor() as u32;
        self.canvas.fit_to(width, height);
    }

    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        let events = self.input.process_input(ctx);
        // The overlay sits on top of the canvas; nothing underneath gets input
        if self.menu.is_open() {
            self.canvas.end_gesture();
            return;
        }
        for event in events {
            self.canvas.handle(event);
        }
    }

    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(ctx, painter, rect, self.canvas.surface());
    }

    pub fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::SelectColor(color) => {
                log::info!("Color selected: {}", color);
                self.canvas.select_color(color);
            }
            PanelAction::SelectBrushSize(size) => {
                log::info!("Brush size selected: {}px", size);
                self.canvas.select_brush_size(size);
            }
            PanelAction::SelectTool(tool) => {
                log::info!("Tool selected: {}", tool.label());
                self.canvas.select_tool(tool);
            }
            PanelAction::Export(format) => self.export(format),
            PanelAction::Clear => self.canvas.clear(),
        }
    }

    /// Encode and offer the surface for download. Failures are only logged.
    pub fn export(&self, format: ExportFormat) {
        let request = ExportRequest::new(format).with_jpeg_quality(self.config.jpeg_quality);
        let result = self
            .canvas
            .export(request)
            .and_then(|bytes| download::offer_download(format, &bytes));
        if let Err(err) = result {
            log::error!("Export to {} failed: {}", request.file_name(), err);
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let narrow = self.config.is_narrow(ctx.screen_rect().width());
        let menu_was_open = self.menu.is_open();

        if narrow {
            panels::top_bar(self, ctx);
        } else {
            self.menu.close();
            panels::tools_panel(self, ctx);
        }

        panels::central_panel(self, ctx);

        if narrow && self.menu.is_open() {
            panels::overlay(self, ctx, menu_was_open);
        }
    }
}
