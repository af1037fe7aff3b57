use eframe::egui;

use crate::SketchApp;
use crate::panels::tool_controls;

/// Open/closed state of the small-screen options overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Top bar with the "Menu" button, shown on narrow screens instead of the sidebar
pub fn top_bar(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("mobile_top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Menu").clicked() {
                log::info!("Opening options menu");
                app.menu_mut().open();
            }
        });
    });
}

/// Full-screen overlay with the options controls.
///
/// Any click inside the overlay dismisses it once its action has been
/// applied, including clicks on the dimmed backdrop. `accepts_clicks` is false
/// on the frame that opened the menu so the opening click doesn't close it.
pub fn overlay(app: &mut SketchApp, ctx: &egui::Context, accepts_clicks: bool) {
    let screen_rect = ctx.screen_rect();

    egui::Area::new(egui::Id::new("mobile_menu_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen_rect.min)
        .show(ctx, |ui| {
            ui.allocate_rect(screen_rect, egui::Sense::click());
            ui.painter()
                .rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(128));
        });

    egui::Area::new(egui::Id::new("mobile_menu_content"))
        .order(egui::Order::Tooltip)
        .fixed_pos(screen_rect.min)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(app.config().sidebar_width.min(screen_rect.width()));
                if let Some(action) = tool_controls(ui, app.config(), app.canvas().tools()) {
                    app.apply(action);
                }
            });
        });

    if accepts_clicks && ctx.input(|i| i.pointer.any_click()) {
        log::info!("Closing options menu");
        app.menu_mut().close();
    }
}
