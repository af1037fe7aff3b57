use eframe::egui::{self, Color32, TextureHandle, TextureOptions};

use crate::surface::DrawingSurface;

/// Shows the drawing surface as an egui texture.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Surface version the texture was built from
    uploaded_version: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_version", &self.uploaded_version)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the texture is missing or older than the surface
    pub fn needs_upload(&self, surface: &DrawingSurface) -> bool {
        self.texture.is_none() || self.uploaded_version != Some(surface.version())
    }

    fn sync_texture(&mut self, ctx: &egui::Context, surface: &DrawingSurface) {
        if !self.needs_upload(surface) {
            return;
        }
        let image = surface.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                let texture = ctx.load_texture("drawing_surface", image, TextureOptions::NEAREST);
                self.texture = Some(texture);
            }
        }
        self.uploaded_version = Some(surface.version());
    }

    /// Draw the surface 1:1 at the top-left of `rect`
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: egui::Rect,
        surface: &DrawingSurface,
    ) {
        if surface.is_empty() {
            return;
        }
        self.sync_texture(ctx, surface);

        if let Some(texture) = &self.texture {
            let size = egui::vec2(surface.width() as f32, surface.height() as f32);
            painter.image(
                texture.id(),
                egui::Rect::from_min_size(rect.min, size),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}
