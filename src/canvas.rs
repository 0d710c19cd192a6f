// ---------------------------------------------------------------------------
// Canvas — raster primitives over `image::RgbaImage`
// ---------------------------------------------------------------------------
//
// Every shape is a coverage test on pixel centres (x + 0.5, y + 0.5) and each
// covered pixel is blended exactly once, source-over. Boxes are inclusive on
// both ends, so `BBox::new(0, 0, 3, 3)` spans 4×4 pixels.

use image::{Rgba, RgbaImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Same box shifted by `d` on both axes (drop shadows).
    pub const fn offset(self, d: i32) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 + d, self.y1 + d)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1 + 1) as f32 / 2.0,
            (self.y0 + self.y1 + 1) as f32 / 2.0,
        )
    }

    fn half_extents(&self) -> (f32, f32) {
        (self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }

    fn grow(self, by: i32) -> Self {
        Self::new(self.x0 - by, self.y0 - by, self.x1 + by, self.y1 + by)
    }
}

// ---------------------------------------------------------------------------
// Blending
// ---------------------------------------------------------------------------

/// Porter-Duff source-over of `src` onto `dst`, straight (non-premultiplied) alpha.
pub fn over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    if src[3] == 255 {
        return src;
    }
    if src[3] == 0 {
        return dst;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let mut out = [0u8; 4];
    for c in 0..3 {
        let v = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}

/// Blend a single pixel; coordinates outside the canvas are ignored.
pub fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    *dst = over(color, *dst);
}

fn fill_where(
    img: &mut RgbaImage,
    bounds: BBox,
    color: Rgba<u8>,
    inside: impl Fn(f32, f32) -> bool,
) {
    let x_lo = bounds.x0.max(0);
    let y_lo = bounds.y0.max(0);
    let x_hi = bounds.x1.min(img.width() as i32 - 1);
    let y_hi = bounds.y1.min(img.height() as i32 - 1);

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            if inside(x as f32 + 0.5, y as f32 + 0.5) {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Fills
// ---------------------------------------------------------------------------

/// Vertical two-stop gradient. Row 0 is exactly `top`, the last row exactly `bottom`.
pub fn vertical_gradient(size: u32, top: Rgba<u8>, bottom: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let span = size.saturating_sub(1).max(1) as f32;

    for y in 0..size {
        let t = y as f32 / span;
        let mut row = [0u8; 4];
        for c in 0..4 {
            let v = top[c] as f32 + (bottom[c] as f32 - top[c] as f32) * t;
            row[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        for x in 0..size {
            img.put_pixel(x, y, Rgba(row));
        }
    }
    img
}

pub fn fill_rect(img: &mut RgbaImage, bbox: BBox, color: Rgba<u8>) {
    fill_where(img, bbox, color, |_, _| true);
}

pub fn fill_ellipse(img: &mut RgbaImage, bbox: BBox, color: Rgba<u8>) {
    let (cx, cy) = bbox.center();
    let (rx, ry) = bbox.half_extents();
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    fill_where(img, bbox, color, |px, py| in_ellipse(px, py, cx, cy, rx, ry));
}

pub fn fill_rounded_rect(img: &mut RgbaImage, bbox: BBox, radius: i32, color: Rgba<u8>) {
    let shape = RoundedRect::from_bbox(bbox, radius as f32);
    fill_where(img, bbox, color, |px, py| shape.contains(px, py));
}

/// Outline of a rounded rectangle; the stroke grows inward from the box edge.
pub fn stroke_rounded_rect(
    img: &mut RgbaImage,
    bbox: BBox,
    radius: i32,
    width: i32,
    color: Rgba<u8>,
) {
    let width = width.max(1) as f32;
    let outer = RoundedRect::from_bbox(bbox, radius as f32);
    let inner = outer.inset(width);
    fill_where(img, bbox, color, |px, py| {
        outer.contains(px, py) && !inner.as_ref().is_some_and(|i| i.contains(px, py))
    });
}

// ---------------------------------------------------------------------------
// Strokes
// ---------------------------------------------------------------------------

/// Partial elliptical arc inscribed in `bbox`, `width` pixels thick (inward).
///
/// Angles are degrees clockwise from the positive x axis with y pointing down,
/// so 0..180 is the lower half. `start > end` or negative angles wrap.
pub fn stroke_arc(
    img: &mut RgbaImage,
    bbox: BBox,
    start_deg: f32,
    end_deg: f32,
    width: i32,
    color: Rgba<u8>,
) {
    let (cx, cy) = bbox.center();
    let (rx, ry) = bbox.half_extents();
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let width = width.max(1) as f32;
    let (irx, iry) = (rx - width, ry - width);
    let span = angular_span(start_deg, end_deg);
    let start = start_deg.rem_euclid(360.0);

    fill_where(img, bbox, color, |px, py| {
        if !in_ellipse(px, py, cx, cy, rx, ry) {
            return false;
        }
        if irx > 0.0 && iry > 0.0 && strictly_in_ellipse(px, py, cx, cy, irx, iry) {
            return false;
        }
        let angle = ((py - cy) / ry).atan2((px - cx) / rx).to_degrees();
        (angle - start).rem_euclid(360.0) <= span
    });
}

/// Thick segment between two pixel positions, both endpoints included.
///
/// Axis-aligned lines of width `w` cover exactly `w` rows (or columns).
pub fn draw_line(
    img: &mut RgbaImage,
    from: (i32, i32),
    to: (i32, i32),
    width: i32,
    color: Rgba<u8>,
) {
    let width = width.max(1);
    let half = width as f32 / 2.0;
    let (ax, ay) = (from.0 as f32 + 0.5, from.1 as f32 + 0.5);
    let (dx, dy) = ((to.0 - from.0) as f32, (to.1 - from.1) as f32);
    let len = (dx * dx + dy * dy).sqrt();

    let bounds = BBox::new(
        from.0.min(to.0),
        from.1.min(to.1),
        from.0.max(to.0),
        from.1.max(to.1),
    )
    .grow(width);

    if len < f32::EPSILON {
        fill_where(img, bounds, color, |px, py| {
            let (ox, oy) = (px - ax, py - ay);
            ox >= -half && ox < half && oy >= -half && oy < half
        });
        return;
    }

    let (ux, uy) = (dx / len, dy / len);
    let (nx, ny) = (-uy, ux);
    const EPS: f32 = 1e-3;
    fill_where(img, bounds, color, |px, py| {
        let (ox, oy) = (px - ax, py - ay);
        let along = ox * ux + oy * uy;
        let across = ox * nx + oy * ny;
        along >= -EPS && along <= len + EPS && across >= -half && across < half
    });
}

// ---------------------------------------------------------------------------
// Coverage helpers
// ---------------------------------------------------------------------------

fn in_ellipse(px: f32, py: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    let nx = (px - cx) / rx;
    let ny = (py - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

fn strictly_in_ellipse(px: f32, py: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    let nx = (px - cx) / rx;
    let ny = (py - cy) / ry;
    nx * nx + ny * ny < 1.0
}

fn angular_span(start_deg: f32, end_deg: f32) -> f32 {
    let raw = end_deg - start_deg;
    if raw >= 360.0 {
        360.0
    } else {
        raw.rem_euclid(360.0)
    }
}

/// Continuous rounded rectangle: `[left, right) × [top, bottom)`.
#[derive(Debug, Clone, Copy)]
struct RoundedRect {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    radius: f32,
}

impl RoundedRect {
    fn from_bbox(bbox: BBox, radius: f32) -> Self {
        let left = bbox.x0 as f32;
        let top = bbox.y0 as f32;
        let right = (bbox.x1 + 1) as f32;
        let bottom = (bbox.y1 + 1) as f32;
        let max_radius = ((right - left) / 2.0).min((bottom - top) / 2.0).max(0.0);
        Self {
            left,
            top,
            right,
            bottom,
            radius: radius.clamp(0.0, max_radius),
        }
    }

    /// Shrink by `by` on every side; `None` once nothing is left.
    fn inset(&self, by: f32) -> Option<Self> {
        let left = self.left + by;
        let top = self.top + by;
        let right = self.right - by;
        let bottom = self.bottom - by;
        if right <= left || bottom <= top {
            return None;
        }
        let max_radius = ((right - left) / 2.0).min((bottom - top) / 2.0);
        Some(Self {
            left,
            top,
            right,
            bottom,
            radius: (self.radius - by).clamp(0.0, max_radius),
        })
    }

    fn contains(&self, px: f32, py: f32) -> bool {
        if px < self.left || px >= self.right || py < self.top || py >= self.bottom {
            return false;
        }
        if self.radius <= 0.0 {
            return true;
        }
        // Distance from the inner core rectangle decides the corners.
        let qx = px.clamp(self.left + self.radius, self.right - self.radius);
        let qy = py.clamp(self.top + self.radius, self.bottom - self.radius);
        let (dx, dy) = (px - qx, py - qy);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
