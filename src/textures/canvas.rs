//! Small software canvas for procedural textures.
//!
//! Shapes are rasterized by sampling pixel centres and composited with
//! source-over alpha blending, which is enough for flat-shaded sprites and
//! soft radial glows.

use bevy::math::Vec2;
use image::{Rgba, RgbaImage};

/// Opaque color from `0xRRGGBB`.
pub fn hex(rgb: u32) -> Rgba<u8> {
    Rgba([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255])
}

/// Color from 8-bit channels and a `0.0..=1.0` alpha.
pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Rgba<u8> {
    Rgba([r, g, b, (a.clamp(0.0, 1.0) * 255.0).round() as u8])
}

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Composite `color` over the pixel at `(x, y)`. Out-of-bounds is ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
        *dst = over(color, *dst);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgba<u8>) {
        for py in y..y + height {
            for px in x..x + width {
                self.blend(px, py, color);
            }
        }
    }

    /// One-pixel outline along the inside edge of the rectangle.
    pub fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgba<u8>) {
        if width <= 0 || height <= 0 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;

        for px in x..=right {
            self.blend(px, y, color);
            if bottom != y {
                self.blend(px, bottom, color);
            }
        }
        for py in y + 1..bottom {
            self.blend(x, py, color);
            if right != x {
                self.blend(right, py, color);
            }
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba<u8>) {
        self.fill_where(color, |p| p.distance(center) <= radius);
    }

    /// Fill the whole canvas with a radial gradient. `stops` are
    /// `(offset, color)` pairs with offsets ascending in `0.0..=1.0`.
    pub fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[(f32, Rgba<u8>)]) {
        if stops.is_empty() || radius <= 0.0 {
            return;
        }
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let t = (pixel_centre(x, y).distance(center) / radius).min(1.0);
                self.blend(x, y, sample_gradient(stops, t));
            }
        }
    }

    /// Line segment with square-ish caps, `width` pixels thick.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba<u8>) {
        let half = width / 2.0;
        self.fill_where(color, |p| distance_to_segment(p, from, to) <= half);
    }

    /// Fill a closed polygon using the even-odd rule.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }
        self.fill_where(color, |p| contains_point(points, p));
    }

    fn fill_where(&mut self, color: Rgba<u8>, inside: impl Fn(Vec2) -> bool) {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                if inside(pixel_centre(x, y)) {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

fn pixel_centre(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Source-over compositing on straight (non-premultiplied) alpha.
fn over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return TRANSPARENT;
    }

    let channel = |i: usize| {
        let c = (src[i] as f32 * sa + dst[i] as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([channel(0), channel(1), channel(2), (out_a * 255.0).round() as u8])
}

fn lerp_color(a: Rgba<u8>, b: Rgba<u8>, t: f32) -> Rgba<u8> {
    let mix = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
    Rgba([mix(0), mix(1), mix(2), mix(3)])
}

fn sample_gradient(stops: &[(f32, Rgba<u8>)], t: f32) -> Rgba<u8> {
    let (first_offset, first) = stops[0];
    if t <= first_offset {
        return first;
    }
    for pair in stops.windows(2) {
        let (start, from) = pair[0];
        let (end, to) = pair[1];
        if t <= end {
            let span = end - start;
            let local = if span > 0.0 { (t - start) / span } else { 1.0 };
            return lerp_color(from, to, local);
        }
    }
    stops[stops.len() - 1].1
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn contains_point(points: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_is_clipped_to_canvas() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(2, 2, 10, 10, hex(0xff0000));

        assert_eq!(canvas.pixel(3, 3), Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(1, 1), TRANSPARENT);
    }

    #[test]
    fn translucent_over_opaque_blends() {
        let mut canvas = Canvas::new(1, 1);
        canvas.fill_rect(0, 0, 1, 1, hex(0x000000));
        canvas.fill_rect(0, 0, 1, 1, rgba(255, 255, 255, 0.5));

        let px = canvas.pixel(0, 0);
        assert_eq!(px[3], 255);
        assert!((127..=129).contains(&px[0]));
    }

    #[test]
    fn stroke_rect_leaves_interior_untouched() {
        let mut canvas = Canvas::new(8, 8);
        canvas.stroke_rect(1, 1, 5, 5, hex(0x2c3e50));

        assert_eq!(canvas.pixel(1, 1), hex(0x2c3e50));
        assert_eq!(canvas.pixel(5, 5), hex(0x2c3e50));
        assert_eq!(canvas.pixel(3, 3), TRANSPARENT);
    }

    #[test]
    fn radial_gradient_fades_outward() {
        let mut canvas = Canvas::new(64, 64);
        canvas.fill_radial_gradient(
            Vec2::splat(32.0),
            32.0,
            &[(0.0, rgba(255, 0, 0, 0.8)), (1.0, rgba(255, 0, 0, 0.0))],
        );

        assert!(canvas.pixel(32, 32)[3] > 190);
        assert_eq!(canvas.pixel(0, 0)[3], 0);
    }

    #[test]
    fn polygon_fill_even_odd() {
        let mut canvas = Canvas::new(10, 10);
        let square = [
            Vec2::new(2.0, 2.0),
            Vec2::new(8.0, 2.0),
            Vec2::new(8.0, 8.0),
            Vec2::new(2.0, 8.0),
        ];
        canvas.fill_polygon(&square, hex(0x00ff00));

        assert_eq!(canvas.pixel(5, 5), hex(0x00ff00));
        assert_eq!(canvas.pixel(9, 9), TRANSPARENT);
    }
}
