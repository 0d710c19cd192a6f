//! Full-colour app icon.
//!
//! Purple→blue gradient, a faint rounded panel outline, and a white
//! microphone on a stand with sound waves on both sides. Every constant is
//! authored against a 512 px canvas and truncated after scaling.

use crate::canvas::{self, BBox};
use image::{Rgba, RgbaImage};

/// Canvas size the geometry constants are authored for.
pub const REFERENCE_SIZE: f32 = 512.0;

pub const GRADIENT_TOP: Rgba<u8> = Rgba([88, 86, 214, 255]);
pub const GRADIENT_BOTTOM: Rgba<u8> = Rgba([45, 135, 255, 255]);

const BODY: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BODY_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 40]);
const PANEL_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 30]);
const GRILLE: Rgba<u8> = Rgba([200, 200, 220, 255]);

const PANEL_PASSES: i32 = 3;
const WAVE_RADII: [f32; 3] = [30.0, 50.0, 70.0];
const WAVE_ALPHAS: [u8; 3] = [100, 70, 40];
const WAVE_HALF_SPAN_DEG: f32 = 60.0;

/// Scale a reference constant and truncate toward zero.
fn px(value: f32, scale: f32) -> i32 {
    (value * scale) as i32
}

/// All scaled geometry for one icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct AppIconGeometry {
    pub size: i32,
    pub scale: f32,

    pub panel_margin: i32,
    pub panel_radius: i32,
    pub panel_stroke: i32,

    /// Microphone capsule; its corner radius is half the width.
    pub mic: BBox,
    pub mic_radius: i32,
    pub shadow_offset: i32,

    pub grille_start: i32,
    pub grille_end: i32,
    pub grille_spacing: i32,
    pub grille_margin: i32,
    pub grille_width: i32,

    pub stand_arc: BBox,
    pub stand_arc_width: i32,
    pub stand_bar: BBox,
    pub base: BBox,
    pub base_radius: i32,

    pub wave_center_y: i32,
    pub wave_right_x: i32,
    pub wave_left_x: i32,
    pub wave_width: i32,
}

impl AppIconGeometry {
    pub fn new(size: u32) -> Self {
        let size = size as i32;
        let s = size as f32 / REFERENCE_SIZE;

        let mic_w = px(140.0, s);
        let mic_h = px(200.0, s);
        let mic_x = (size - mic_w) / 2;
        let mic_y = px(100.0, s);
        let mic = BBox::new(mic_x, mic_y, mic_x + mic_w, mic_y + mic_h);

        let arc_w = px(220.0, s);
        let arc_h = px(100.0, s);
        let arc_x = (size - arc_w) / 2;
        let arc_y = mic_y + mic_h - px(30.0, s);

        let bar_w = px(12.0, s).max(1);
        let bar_x = (size - bar_w) / 2;
        let bar_top = arc_y + arc_h / 2;
        let bar_bottom = px(380.0, s);

        let base_w = px(120.0, s);
        let base_h = px(12.0, s);
        let base_x = (size - base_w) / 2;

        Self {
            size,
            scale: s,
            panel_margin: px(10.0, s),
            panel_radius: px(100.0, s),
            panel_stroke: px(2.0, s).max(1),
            mic,
            mic_radius: mic_w / 2,
            shadow_offset: px(8.0, s),
            grille_start: mic_y + px(40.0, s),
            grille_end: mic_y + mic_h - px(40.0, s),
            grille_spacing: px(20.0, s).max(4),
            grille_margin: px(25.0, s).max(3),
            grille_width: px(2.0, s).max(1),
            stand_arc: BBox::new(arc_x, arc_y, arc_x + arc_w, arc_y + arc_h),
            stand_arc_width: px(12.0, s).max(1),
            stand_bar: BBox::new(bar_x, bar_top, bar_x + bar_w, bar_bottom),
            base: BBox::new(base_x, bar_bottom, base_x + base_w, bar_bottom + base_h),
            base_radius: px(6.0, s),
            wave_center_y: mic_y + mic_h / 2,
            wave_right_x: mic_x + mic_w + px(30.0, s),
            wave_left_x: mic_x - px(30.0, s),
            wave_width: px(4.0, s).max(1),
        }
    }

    /// Width of the microphone body in pixels.
    pub fn mic_width(&self) -> i32 {
        self.mic.x1 - self.mic.x0
    }

    pub fn mic_height(&self) -> i32 {
        self.mic.y1 - self.mic.y0
    }

    /// Rows that carry a grille line, top to bottom.
    pub fn grille_rows(&self) -> Vec<i32> {
        let step = self.grille_spacing.max(1) as usize;
        (self.grille_start..self.grille_end).step_by(step).collect()
    }

    /// Panel outline box for shadow pass `pass` (0 is the outermost inset).
    fn panel_box(&self, pass: i32) -> (BBox, i32) {
        let offset = px((PANEL_PASSES - pass) as f32, self.scale);
        let inset = self.panel_margin + offset;
        (
            BBox::new(inset, inset, self.size - inset, self.size - inset),
            self.panel_radius - offset,
        )
    }

    fn wave_radius(&self, idx: usize) -> i32 {
        px(WAVE_RADII[idx], self.scale)
    }
}

/// Render the app icon at `size` pixels. `size` must be positive.
pub fn render(size: u32) -> RgbaImage {
    let g = AppIconGeometry::new(size);
    log::debug!("app icon geometry for {size}px: {g:?}");

    let mut img = canvas::vertical_gradient(size, GRADIENT_TOP, GRADIENT_BOTTOM);

    draw_panel(&mut img, &g);
    draw_body(&mut img, &g);
    draw_grille(&mut img, &g);
    draw_stand(&mut img, &g);
    draw_waves(&mut img, &g);

    img
}

fn draw_panel(img: &mut RgbaImage, g: &AppIconGeometry) {
    for pass in 0..PANEL_PASSES {
        let (bbox, radius) = g.panel_box(pass);
        canvas::stroke_rounded_rect(img, bbox, radius, g.panel_stroke, PANEL_SHADOW);
    }
}

fn draw_body(img: &mut RgbaImage, g: &AppIconGeometry) {
    let shadow = g.mic.offset(g.shadow_offset);
    canvas::fill_rounded_rect(img, shadow, g.mic_radius, BODY_SHADOW);
    canvas::fill_rounded_rect(img, g.mic, g.mic_radius, BODY);
}

fn draw_grille(img: &mut RgbaImage, g: &AppIconGeometry) {
    let left = g.mic.x0 + g.grille_margin;
    let right = g.mic.x1 - g.grille_margin;
    for y in g.grille_rows() {
        canvas::draw_line(img, (left, y), (right, y), g.grille_width, GRILLE);
    }
}

fn draw_stand(img: &mut RgbaImage, g: &AppIconGeometry) {
    let d = g.shadow_offset;

    canvas::stroke_arc(img, g.stand_arc.offset(d), 0.0, 180.0, g.stand_arc_width, BODY_SHADOW);
    canvas::stroke_arc(img, g.stand_arc, 0.0, 180.0, g.stand_arc_width, BODY);

    canvas::fill_rect(img, g.stand_bar.offset(d), BODY_SHADOW);
    canvas::fill_rect(img, g.stand_bar, BODY);

    canvas::fill_rounded_rect(img, g.base.offset(d), g.base_radius, BODY_SHADOW);
    canvas::fill_rounded_rect(img, g.base, g.base_radius, BODY);
}

fn draw_waves(img: &mut RgbaImage, g: &AppIconGeometry) {
    let cy = g.wave_center_y;

    for (idx, alpha) in WAVE_ALPHAS.iter().enumerate() {
        let r = g.wave_radius(idx);
        let color = Rgba([255, 255, 255, *alpha]);

        let right = BBox::new(g.wave_right_x, cy - r, g.wave_right_x + r * 2, cy + r);
        canvas::stroke_arc(
            img,
            right,
            -WAVE_HALF_SPAN_DEG,
            WAVE_HALF_SPAN_DEG,
            g.wave_width,
            color,
        );

        let left = BBox::new(g.wave_left_x - r * 2, cy - r, g.wave_left_x, cy + r);
        canvas::stroke_arc(
            img,
            left,
            180.0 - WAVE_HALF_SPAN_DEG,
            180.0 + WAVE_HALF_SPAN_DEG,
            g.wave_width,
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::APP_ICON_SLOTS;

    #[test]
    fn test_render_dimensions_for_every_slot() {
        for slot in APP_ICON_SLOTS {
            let img = render(slot.pixel_size);
            assert_eq!(img.dimensions(), (slot.pixel_size, slot.pixel_size));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for size in [16, 64, 256] {
            assert_eq!(render(size).as_raw(), render(size).as_raw());
        }
    }

    #[test]
    fn test_reference_geometry() {
        let g = AppIconGeometry::new(512);
        assert_eq!(g.mic, BBox::new(186, 100, 326, 300));
        assert_eq!(g.mic_radius, 70);
        assert_eq!(g.shadow_offset, 8);
        assert_eq!(g.stand_arc, BBox::new(146, 270, 366, 370));
        assert_eq!(g.stand_bar, BBox::new(250, 320, 262, 380));
        assert_eq!(g.base, BBox::new(196, 380, 316, 392));
        assert_eq!(g.grille_rows(), vec![140, 160, 180, 200, 220, 240]);
    }

    #[test]
    fn test_mic_ratio_is_scale_invariant() {
        let expected_w = 140.0 / REFERENCE_SIZE;
        let expected_h = 200.0 / REFERENCE_SIZE;
        for slot in APP_ICON_SLOTS {
            let g = AppIconGeometry::new(slot.pixel_size);
            let size = slot.pixel_size as f32;
            let tolerance = 1.0 / size + 1e-6;
            assert!((g.mic_width() as f32 / size - expected_w).abs() <= tolerance);
            assert!((g.mic_height() as f32 / size - expected_h).abs() <= tolerance);
        }
    }

    #[test]
    fn test_smallest_size_keeps_grille_and_strokes() {
        let g = AppIconGeometry::new(16);
        assert!(!g.grille_rows().is_empty());
        assert!(g.grille_spacing >= 1);
        assert!(g.grille_width >= 1);
        assert!(g.panel_stroke >= 1);
        assert!(g.stand_arc_width >= 1);
        assert!(g.wave_width >= 1);
    }

    #[test]
    fn test_smallest_size_draws_microphone() {
        let img = render(16);
        assert!(img.pixels().any(|p| p[3] != 0));

        let g = AppIconGeometry::new(16);
        let cx = (g.mic.x0 + g.mic.x1) / 2;
        let cy = (g.mic.y0 + g.mic.y1) / 2;
        let bg = canvas::vertical_gradient(16, GRADIENT_TOP, GRADIENT_BOTTOM);
        assert_ne!(
            img.get_pixel(cx as u32, cy as u32),
            bg.get_pixel(cx as u32, cy as u32)
        );
    }

    #[test]
    fn test_body_is_white_at_reference_size() {
        let img = render(512);
        // Centre column of the capsule, between grille rows.
        assert_eq!(*img.get_pixel(256, 150), BODY);
        // Stand bar.
        assert_eq!(*img.get_pixel(256, 350), BODY);
    }

    #[test]
    fn test_waves_are_translucent_and_mirrored() {
        let img = render(512);
        let g = AppIconGeometry::new(512);
        let cy = g.wave_center_y as u32;

        // Outer edge of the innermost wave on each side.
        let r = g.wave_radius(0);
        let right_x = (g.wave_right_x + r * 2) as u32;
        let left_x = (g.wave_left_x - r * 2) as u32;

        let background = *canvas::vertical_gradient(512, GRADIENT_TOP, GRADIENT_BOTTOM)
            .get_pixel(0, cy);
        let expected = canvas::over(Rgba([255, 255, 255, 100]), background);
        assert_eq!(*img.get_pixel(right_x, cy), expected);
        assert_eq!(*img.get_pixel(left_x, cy), expected);
    }

    #[test]
    fn test_corners_keep_gradient() {
        let size = 256;
        let img = render(size);
        let bg = canvas::vertical_gradient(size, GRADIENT_TOP, GRADIENT_BOTTOM);
        assert_eq!(img.get_pixel(0, 0), bg.get_pixel(0, 0));
        assert_eq!(img.get_pixel(size - 1, size - 1), bg.get_pixel(size - 1, size - 1));
    }
}
