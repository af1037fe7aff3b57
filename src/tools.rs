use std::fmt;
use std::str::FromStr;

use egui::Color32;

use crate::error::SketchError;

/// The paint semantics applied during a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Paints with the active color.
    #[default]
    Pen,
    /// Paints with the background color. Nothing is made transparent.
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Pen, Tool::Eraser];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
        }
    }
}

/// An opaque RGB color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

impl FromStr for HexColor {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SketchError::InvalidColor(s.to_owned());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// User-selected drawing settings, read on every painted segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    pub active_color: HexColor,
    /// Line width in pixels
    pub brush_size: u32,
    pub active_tool: Tool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active_color: HexColor::BLACK,
            brush_size: 5,
            active_tool: Tool::Pen,
        }
    }
}

impl ToolState {
    pub fn select_color(&mut self, color: HexColor) {
        self.active_color = color;
    }

    pub fn select_brush_size(&mut self, size: u32) {
        self.brush_size = size;
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.active_tool = tool;
    }

    /// The color a stroke is painted with: the active color for the pen,
    /// the background for the eraser.
    pub fn stroke_color(&self, background: HexColor) -> HexColor {
        match self.active_tool {
            Tool::Pen => self.active_color,
            Tool::Eraser => background,
        }
    }
}
