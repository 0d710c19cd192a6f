//! Monochrome menu-bar glyph: a flat microphone on a transparent canvas,
//! drawn in one colour so the OS can tint it as a template image.

use crate::canvas::{self, BBox};
use image::{Rgba, RgbaImage};

/// Canvas size the glyph constants are authored for (macOS menu bar height).
pub const REFERENCE_SIZE: f32 = 22.0;

/// Template glyphs are drawn in opaque black; only their alpha matters.
pub const TEMPLATE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn px(value: f32, scale: f32) -> i32 {
    (value * scale) as i32
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphGeometry {
    pub body: BBox,
    pub stand_arc: BBox,
    pub stroke: i32,
    pub stem_x: i32,
    pub stem_top: i32,
    pub stem_bottom: i32,
    pub base_left: i32,
    pub base_right: i32,
    pub base_y: i32,
}

impl GlyphGeometry {
    pub fn new(size: u32) -> Self {
        let s = size as f32 / REFERENCE_SIZE;
        Self {
            body: BBox::new(px(7.0, s), px(3.0, s), px(15.0, s), px(14.0, s)),
            stand_arc: BBox::new(px(5.0, s), px(8.0, s), px(17.0, s), px(20.0, s)),
            stroke: px(1.5, s).max(1),
            stem_x: size as i32 / 2,
            stem_top: px(17.0, s),
            stem_bottom: px(19.0, s),
            base_left: px(8.0, s),
            base_right: px(14.0, s),
            base_y: px(19.0, s),
        }
    }
}

/// Bounding box of the recording dot; nothing outside it depends on `recording`.
pub fn indicator_region(size: u32) -> BBox {
    let s = size as f32 / REFERENCE_SIZE;
    let dot = px(4.0, s).max(3);
    let x = px(16.0, s);
    let y = px(4.0, s);
    BBox::new(x, y, x + dot, y + dot)
}

/// Render the glyph at `size` pixels in `color`, with the recording dot when
/// `recording` is set.
pub fn render(size: u32, color: Rgba<u8>, recording: bool) -> RgbaImage {
    let g = GlyphGeometry::new(size);
    let mut img = RgbaImage::new(size, size);

    canvas::fill_ellipse(&mut img, g.body, color);
    canvas::stroke_arc(&mut img, g.stand_arc, 0.0, 180.0, g.stroke, color);
    canvas::draw_line(
        &mut img,
        (g.stem_x, g.stem_top),
        (g.stem_x, g.stem_bottom),
        g.stroke,
        color,
    );
    canvas::draw_line(
        &mut img,
        (g.base_left, g.base_y),
        (g.base_right, g.base_y),
        g.stroke,
        color,
    );

    if recording {
        canvas::fill_ellipse(&mut img, indicator_region(size), color);
    }

    img
}
