use egui::{Pos2, Rect};

use crate::surface::DrawingSurface;
use crate::tools::HexColor;

/// How a segment is painted. Caps are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: HexColor,
    /// Full line width in pixels
    pub width: f32,
    /// Every touched pixel takes the color outright, no anti-aliased edge
    pub solid: bool,
}

impl StrokeStyle {
    /// Anti-aliased pen stroke
    pub fn new(color: HexColor, width: f32) -> Self {
        Self {
            color,
            width,
            solid: false,
        }
    }

    /// Hard-edged stroke. Covers the whole footprint of an anti-aliased
    /// stroke of the same width, edge pixels included.
    pub fn solid(color: HexColor, width: f32) -> Self {
        Self {
            color,
            width,
            solid: true,
        }
    }
}

/// Two consecutive pointer samples. Painted once, then dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSegment {
    pub from: Pos2,
    pub to: Pos2,
}

impl StrokeSegment {
    pub fn new(from: Pos2, to: Pos2) -> Self {
        Self { from, to }
    }

    /// Bounding box of the segment grown by `padding` on every side
    pub fn bounds(&self, padding: f32) -> Rect {
        Rect::from_two_pos(self.from, self.to).expand(padding)
    }
}

/// Distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let dot = point_vec.x * line_vec.x + point_vec.y * line_vec.y;
    let t = (dot / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Paint a round-capped segment onto the surface.
///
/// Coverage is anti-aliased over one pixel at the edge, sampled at pixel
/// centres, unless the style is solid. Anything outside the surface is clipped.
pub fn paint_segment(surface: &mut DrawingSurface, segment: StrokeSegment, style: StrokeStyle) {
    if surface.is_empty() || style.width <= 0.0 {
        return;
    }
    let radius = style.width / 2.0;

    let bounds = segment.bounds(radius + 1.0);
    let x_min = bounds.min.x.floor().max(0.0) as u32;
    let y_min = bounds.min.y.floor().max(0.0) as u32;
    let x_max = (bounds.max.x.ceil().max(0.0) as u32).min(surface.width());
    let y_max = (bounds.max.y.ceil().max(0.0) as u32).min(surface.height());
    if x_min >= x_max || y_min >= y_max {
        return;
    }

    for y in y_min..y_max {
        for x in x_min..x_max {
            let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            let distance = distance_to_line_segment(center, segment.from, segment.to);
            let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let coverage = if style.solid { 1.0 } else { coverage };
                surface.blend_pixel(x, y, style.color, coverage);
            }
        }
    }
    surface.mark_changed();
}
