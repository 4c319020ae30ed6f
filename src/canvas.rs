use raqote::{DrawOptions, DrawTarget, PathBuilder, Source};

use crate::color::Hsba;

/// The raster surface a [`Pencil`](crate::pencil::Pencil) draws on.
///
/// The renderer needs exactly three things from its target: the canvas
/// bounds, a filled-dot primitive, and mutable access to the packed pixel
/// buffer (raqote layout, `0xAARRGGBB`) for the paper blend pass. Injecting
/// the surface keeps every drawing call reproducible under test.
pub trait Canvas {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Draws one filled circle of the given diameter centered at `(x, y)`.
    fn dot(&mut self, x: f64, y: f64, diameter: f64, color: Hsba);

    /// The backing pixel buffer, row-major, `width * height` packed ARGB
    /// values.
    fn pixels_mut(&mut self) -> &mut [u32];
}

/// A real raster canvas backed by a [`raqote::DrawTarget`].
pub struct RaqoteCanvas {
    dt: DrawTarget,
}

impl RaqoteCanvas {
    /// Creates a canvas cleared to an opaque white sheet.
    pub fn new(width: i32, height: i32) -> RaqoteCanvas {
        let mut canvas = RaqoteCanvas {
            dt: DrawTarget::new(width, height),
        };
        canvas.clear(Hsba::new(0.0, 0.0, 100.0, 100.0));
        canvas
    }

    pub fn clear(&mut self, color: Hsba) {
        self.dt.clear(color.to_solid_source());
    }

    pub fn draw_target(&self) -> &DrawTarget {
        &self.dt
    }

    pub fn into_draw_target(self) -> DrawTarget {
        self.dt
    }
}

impl Canvas for RaqoteCanvas {
    fn width(&self) -> f64 {
        f64::from(self.dt.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.dt.height())
    }

    fn dot(&mut self, x: f64, y: f64, diameter: f64, color: Hsba) {
        let radius = (diameter / 2.0) as f32;
        if radius <= 0.0 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.arc(x as f32, y as f32, radius, 0.0, 2.0 * std::f32::consts::PI);
        self.dt.fill(
            &pb.finish(),
            &Source::Solid(color.to_solid_source()),
            &DrawOptions::new(),
        );
    }

    fn pixels_mut(&mut self) -> &mut [u32] {
        self.dt.get_data_mut()
    }
}

/// One recorded draw call on a [`TraceCanvas`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    pub color: Hsba,
}

/// A canvas that records every dot instead of rasterizing it.
///
/// This backs the renderer's observable contract: tests (and tools) can
/// count draw calls, check sample colors, and bound jitter without decoding
/// pixels. The pixel buffer is still real so the paper blend pass works.
pub struct TraceCanvas {
    width: u32,
    height: u32,
    pub dots: Vec<Dot>,
    pixels: Vec<u32>,
}

impl TraceCanvas {
    pub fn new(width: u32, height: u32) -> TraceCanvas {
        TraceCanvas {
            width,
            height,
            dots: Vec::new(),
            pixels: vec![crate::color::PACKED_WHITE; (width * height) as usize],
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl Canvas for TraceCanvas {
    fn width(&self) -> f64 {
        f64::from(self.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.height)
    }

    fn dot(&mut self, x: f64, y: f64, diameter: f64, color: Hsba) {
        self.dots.push(Dot {
            x,
            y,
            diameter,
            color,
        });
    }

    fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }
}

/// Blends every pixel of `canvas` toward `target` by a caller-supplied
/// per-pixel factor. Used by the paper pass with random factors in `[0, 0.5)`.
pub fn blend_pixels<C: Canvas, F: FnMut() -> f64>(canvas: &mut C, target: u32, mut factor: F) {
    for pixel in canvas.pixels_mut() {
        *pixel = crate::color::lerp_packed(*pixel, target, factor());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trace_canvas_records_dots() {
        let mut canvas = TraceCanvas::new(10, 5);
        assert_eq!((canvas.width(), canvas.height()), (10.0, 5.0));
        canvas.dot(1.0, 2.0, 1.5, Hsba::new(0.0, 0.0, 0.0, 30.0));
        canvas.dot(3.0, 4.0, 0.5, Hsba::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(canvas.dots.len(), 2);
        assert_eq!(canvas.dots[0].x, 1.0);
        assert_eq!(canvas.dots[1].color.h, 10.0);
        assert_eq!(canvas.pixels().len(), 50);
    }

    #[test]
    fn test_raqote_canvas_dot_leaves_marks() {
        let mut canvas = RaqoteCanvas::new(16, 16);
        canvas.dot(8.0, 8.0, 6.0, Hsba::new(0.0, 0.0, 0.0, 100.0));
        let darkened = canvas
            .pixels_mut()
            .iter()
            .filter(|&&px| px != crate::color::PACKED_WHITE)
            .count();
        assert!(darkened > 0, "an opaque dot must change some pixels");
    }

    #[test]
    fn test_blend_pixels_toward_white() {
        let mut canvas = TraceCanvas::new(2, 2);
        for px in canvas.pixels_mut() {
            *px = 0xff000000;
        }
        blend_pixels(&mut canvas, crate::color::PACKED_WHITE, || 1.0);
        assert!(canvas.pixels().iter().all(|&px| px == crate::color::PACKED_WHITE));
    }
}
