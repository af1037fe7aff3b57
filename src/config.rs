use crate::tools::{HexColor, ToolState};

/// Swatches offered in the color picker, in display order.
pub const PALETTE: [HexColor; 8] = [
    HexColor::rgb(0x00, 0x00, 0x00),
    HexColor::rgb(0xFF, 0x00, 0x00),
    HexColor::rgb(0x00, 0xFF, 0x00),
    HexColor::rgb(0x00, 0x00, 0xFF),
    HexColor::rgb(0xFF, 0xFF, 0x00),
    HexColor::rgb(0xFF, 0x00, 0xFF),
    HexColor::rgb(0x00, 0xFF, 0xFF),
    HexColor::rgb(0xFF, 0xFF, 0xFF),
];

/// Brush widths offered in the size picker, in pixels.
pub const BRUSH_SIZES: [u32; 5] = [2, 5, 10, 15, 20];

/// JPEG export quality (0.9 on a 0..1 scale)
pub const JPEG_QUALITY: u8 = 90;

/// Compiled-in application settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub palette: Vec<HexColor>,
    pub brush_sizes: Vec<u32>,
    pub initial_tools: ToolState,
    /// Surface fill color, also used by the eraser
    pub background: HexColor,
    /// Screens narrower than this (in points) get the menu overlay instead of the sidebar
    pub mobile_breakpoint: f32,
    pub sidebar_width: f32,
    /// JPEG export quality, 1..=100
    pub jpeg_quality: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: PALETTE.to_vec(),
            brush_sizes: BRUSH_SIZES.to_vec(),
            initial_tools: ToolState::default(),
            background: HexColor::WHITE,
            mobile_breakpoint: 768.0,
            sidebar_width: 250.0,
            jpeg_quality: JPEG_QUALITY,
        }
    }
}

impl AppConfig {
    pub fn is_narrow(&self, screen_width: f32) -> bool {
        screen_width < self.mobile_breakpoint
    }
}
