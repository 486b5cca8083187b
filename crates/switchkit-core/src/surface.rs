//! Off-screen surfaces backed by a `tiny_skia` pixmap.
//!
//! Rasterization is anti-aliased and deterministic: filling the same shape
//! twice yields bit-identical pixels.

use crate::{Color, Point, Rect, Size};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Transform};

/// Control point distance for a quarter circle drawn as one cubic.
const KAPPA: f32 = 0.552_284_8;

/// An off-screen pixel buffer.
///
/// Pixels read back as non-premultiplied `0xAARRGGBB`. A surface with a zero
/// dimension holds no pixmap and ignores all drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixmap: Option<Pixmap>,
}

impl Surface {
    /// Create a fully transparent surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixmap: Pixmap::new(width, height),
        }
    }

    /// Create a transparent surface large enough for a layout size.
    #[must_use]
    pub fn with_size(size: Size) -> Self {
        Self::new(Self::pixel_extent(size.width), Self::pixel_extent(size.height))
    }

    fn pixel_extent(v: f32) -> u32 {
        if v.is_finite() {
            v.max(0.0).round() as u32
        } else {
            0
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size in layout units.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// All pixels as `0xAARRGGBB`, row by row from the top.
    #[must_use]
    pub fn pixels(&self) -> Vec<u32> {
        self.pixmap.as_ref().map_or_else(Vec::new, |pixmap| {
            pixmap
                .pixels()
                .iter()
                .map(|p| pack_argb(p.demultiply()))
                .collect()
        })
    }

    /// Pixel at a coordinate, if inside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let pixmap = self.pixmap.as_ref()?;
        pixmap.pixel(x, y).map(|p| pack_argb(p.demultiply()))
    }

    /// Heap size of the pixel buffer in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.pixmap.as_ref().map_or(0, |pixmap| pixmap.data().len())
    }

    /// Overwrite every pixel with a color.
    pub fn clear(&mut self, color: Color) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(skia_color(color));
        }
    }

    /// Fill a rounded rectangle. The corner radius is clamped to half the
    /// shorter side.
    pub fn fill_rounded_rect(&mut self, rect: Rect, corner_radius: f32, color: Color) {
        if let Some(path) = rounded_rect_path(rect, corner_radius) {
            self.fill_path(&path, color);
        }
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.fill_path(&path, color);
        }
    }

    /// Composite another surface on top of this one (source-over), with the
    /// origin rounded to whole pixels.
    pub fn blit(&mut self, source: &Self, origin: Point) {
        let (Some(target), Some(source)) = (self.pixmap.as_mut(), source.pixmap.as_ref()) else {
            return;
        };
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return;
        }
        target.draw_pixmap(
            origin.x.round() as i32,
            origin.y.round() as i32,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = true;
        pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

/// Outline of a rounded rectangle with circular corners.
fn rounded_rect_path(rect: Rect, corner_radius: f32) -> Option<Path> {
    let finite = [rect.x, rect.y, rect.width, rect.height].iter().all(|v| v.is_finite());
    if !finite || rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let r = if corner_radius.is_finite() {
        corner_radius.clamp(0.0, rect.width.min(rect.height) / 2.0)
    } else {
        0.0
    };
    if r <= 0.0 {
        return tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
            .map(PathBuilder::from_rect);
    }

    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
    let k = r * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

fn skia_color(color: Color) -> tiny_skia::Color {
    let argb = color.to_argb();
    let byte = |shift: u32| ((argb >> shift) & 0xff) as u8;
    tiny_skia::Color::from_rgba8(byte(16), byte(8), byte(0), byte(24))
}

fn pack_argb(c: tiny_skia::ColorU8) -> u32 {
    (u32::from(c.alpha()) << 24)
        | (u32::from(c.red()) << 16)
        | (u32::from(c.green()) << 8)
        | u32::from(c.blue())
}
