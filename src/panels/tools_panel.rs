use eframe::egui;

use crate::SketchApp;
use crate::components::Swatch;
use crate::config::AppConfig;
use crate::export::ExportFormat;
use crate::tools::{HexColor, Tool, ToolState};

/// Something the user picked in the options panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    SelectColor(HexColor),
    SelectBrushSize(u32),
    SelectTool(Tool),
    Export(ExportFormat),
    Clear,
}

/// The "Canvas Options" controls, shared by the sidebar and the mobile overlay.
///
/// Returns the control clicked this frame, if any.
pub fn tool_controls(
    ui: &mut egui::Ui,
    config: &AppConfig,
    tools: &ToolState,
) -> Option<PanelAction> {
    let mut action = None;

    ui.heading("Canvas Options");
    ui.separator();

    ui.strong("Color");
    ui.horizontal_wrapped(|ui| {
        for &color in &config.palette {
            let swatch = Swatch::color(color.to_color32(), tools.active_color == color);
            if swatch.show(ui).on_hover_text(color.to_string()).clicked() {
                action = Some(PanelAction::SelectColor(color));
            }
        }
    });
    ui.add_space(8.0);

    ui.strong("Brush Size");
    ui.horizontal_wrapped(|ui| {
        for &size in &config.brush_sizes {
            let swatch = Swatch::size(size, tools.brush_size == size);
            if swatch.show(ui).on_hover_text(format!("{size}px")).clicked() {
                action = Some(PanelAction::SelectBrushSize(size));
            }
        }
    });
    ui.add_space(8.0);

    ui.strong("Tools");
    ui.horizontal(|ui| {
        for tool in Tool::ALL {
            if ui.selectable_label(tools.active_tool == tool, tool.label()).clicked() {
                action = Some(PanelAction::SelectTool(tool));
            }
        }
    });
    ui.add_space(8.0);

    ui.strong("Export");
    for format in ExportFormat::ALL {
        if ui.button(format.button_label()).clicked() {
            action = Some(PanelAction::Export(format));
        }
    }
    ui.separator();

    let clear = egui::Button::new(egui::RichText::new("Clear Canvas").color(egui::Color32::WHITE))
        .fill(egui::Color32::from_rgb(220, 53, 69));
    if ui.add(clear).clicked() {
        action = Some(PanelAction::Clear);
    }

    action
}

/// Fixed sidebar shown on wide screens
pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let width = app.config().sidebar_width;
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            if let Some(action) = tool_controls(ui, app.config(), app.canvas().tools()) {
                app.apply(action);
            }
        });
}
