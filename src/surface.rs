use egui::ColorImage;
use image::{Rgba, RgbaImage};

use crate::tools::HexColor;

/// The raster being drawn on.
///
/// There is no record of what was painted: resizing or clearing refills the
/// whole buffer with the background and prior content is gone.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    image: RgbaImage,
    background: HexColor,
    /// Bumped on every mutation so the renderer knows when to re-upload
    version: u64,
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32, background: HexColor) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba())),
            background,
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn background(&self) -> HexColor {
        self.background
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Match the container's dimensions. Any change discards all content.
    ///
    /// Returns `true` if the buffer was recreated.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.size() == [width, height] {
            return false;
        }
        log::info!(
            "Resizing surface {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        self.image = RgbaImage::from_pixel(width, height, Rgba(self.background.to_rgba()));
        self.mark_changed();
        true
    }

    /// Fill every pixel with the background color.
    pub fn clear(&mut self) {
        let fill = Rgba(self.background.to_rgba());
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
        self.mark_changed();
    }

    /// Returns `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<HexColor> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgba([r, g, b, _])| HexColor::rgb(*r, *g, *b))
    }

    /// True if every pixel is the background color.
    pub fn is_blank(&self) -> bool {
        let fill = Rgba(self.background.to_rgba());
        self.image.pixels().all(|pixel| *pixel == fill)
    }

    /// Source-over blend of an opaque color at the given coverage (0..=1).
    /// Full coverage writes the color exactly.
    pub(crate) fn blend_pixel(&mut self, x: u32, y: u32, color: HexColor, coverage: f32) {
        let Some(pixel) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };
        if coverage >= 1.0 {
            *pixel = Rgba(color.to_rgba());
            return;
        }
        let src = color.to_rgba();
        for (dst, src) in pixel.0.iter_mut().zip(src).take(3) {
            let blended = f32::from(src) * coverage + f32::from(*dst) * (1.0 - coverage);
            *dst = blended.round().clamp(0.0, 255.0) as u8;
        }
    }

    pub(crate) fn mark_changed(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Copy of the pixels in the layout egui textures expect.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.image.as_raw(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_blank() {
        let surface = DrawingSurface::new(8, 4, HexColor::WHITE);
        assert_eq!(surface.size(), [8, 4]);
        assert!(surface.is_blank());
        assert_eq!(surface.pixel(7, 3), Some(HexColor::WHITE));
        assert_eq!(surface.pixel(8, 0), None);
    }

    #[test]
    fn test_resize_to_same_size_keeps_content() {
        let mut surface = DrawingSurface::new(4, 4, HexColor::WHITE);
        surface.blend_pixel(1, 1, HexColor::BLACK, 1.0);
        let version = surface.version();

        assert!(!surface.resize(4, 4));
        assert_eq!(surface.pixel(1, 1), Some(HexColor::BLACK));
        assert_eq!(surface.version(), version);
    }

    #[test]
    fn test_resize_discards_content() {
        let mut surface = DrawingSurface::new(4, 4, HexColor::WHITE);
        surface.blend_pixel(1, 1, HexColor::BLACK, 1.0);

        assert!(surface.resize(6, 2));
        assert_eq!(surface.size(), [6, 2]);
        assert!(surface.is_blank());
    }

    #[test]
    fn test_partial_coverage_blends() {
        let mut surface = DrawingSurface::new(1, 1, HexColor::WHITE);
        surface.blend_pixel(0, 0, HexColor::BLACK, 0.5);
        assert_eq!(surface.pixel(0, 0), Some(HexColor::rgb(128, 128, 128)));
    }

    #[test]
    fn test_zero_sized_surface() {
        let mut surface = DrawingSurface::new(0, 0, HexColor::WHITE);
        assert!(surface.is_empty());
        assert!(surface.is_blank());
        surface.blend_pixel(0, 0, HexColor::BLACK, 1.0);
        surface.clear();
        assert_eq!(surface.to_color_image().size, [0, 0]);
    }
}
