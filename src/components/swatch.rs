use eframe::egui;

/// What a swatch shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwatchKind {
    /// Filled with a palette color
    Color(egui::Color32),
    /// A dark dot whose diameter follows the brush size
    Size(u32),
}

/// A clickable palette or brush-size square
pub struct Swatch {
    pub kind: SwatchKind,
    pub selected: bool,
}

impl Swatch {
    pub fn color(color: egui::Color32, selected: bool) -> Self {
        Self {
            kind: SwatchKind::Color(color),
            selected,
        }
    }

    pub fn size(size: u32, selected: bool) -> Self {
        Self {
            kind: SwatchKind::Size(size),
            selected,
        }
    }

    fn edge(&self) -> f32 {
        match self.kind {
            SwatchKind::Color(_) => 30.0,
            SwatchKind::Size(size) => size as f32 + 10.0,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(self.edge(), self.edge());
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            match self.kind {
                SwatchKind::Color(color) => {
                    ui.painter().rect_filled(rect, 4.0, color);
                    // White swatches would vanish on a light panel
                    let outline = egui::Stroke::new(1.0, egui::Color32::from_gray(160));
                    ui.painter().rect_stroke(rect, 4.0, outline);
                }
                SwatchKind::Size(size) => {
                    let bg_color = if response.hovered() {
                        egui::Color32::from_gray(220)
                    } else {
                        egui::Color32::from_gray(200)
                    };
                    ui.painter().circle_filled(rect.center(), rect.width() / 2.0, bg_color);
                    let dot_color = egui::Color32::from_gray(40);
                    ui.painter().circle_filled(rect.center(), size as f32 / 2.0, dot_color);
                }
            }

            if self.selected {
                ui.painter().rect_stroke(
                    rect.expand(2.0),
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
