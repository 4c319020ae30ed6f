use crate::canvas::{blend_pixels, Canvas};
use crate::color::{Hsba, PACKED_WHITE};
use crate::curve::{spline_segments, Curve, FadeWindow, SamplePlan};
use crate::math::Point;
use crate::rand::Rng;

/// Maximum diameter of one plotted dot. Fixed, independent of the jitter
/// spread, so heavy jitter scatters dots without fattening them.
pub const DOT_DIAMETER: f64 = 2.0;

const FILL_RECT_STEP: f64 = 4.0;
const FILL_CIRCLE_STEP: f64 = 1.2;
const FILL_CIRCLE_STEP_PRINT: f64 = 1.3;

const PAPER_SCATTER_DOTS: usize = 100_000;
const PAPER_SCATTER_ALPHA_MAX: f64 = 20.0;
const PAPER_BLEND_MAX: f64 = 0.5;

/// The mutable pencil state read by every drawing operation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PencilStyle {
    /// Base stroke color; fading only ever scales its alpha.
    pub color: Hsba,
    /// Jitter radius added to each dot position, `U(0, spread)` per axis.
    pub spread: f64,
    /// Sample curves at double density, as for print output.
    pub print_mode: bool,
}

impl Default for PencilStyle {
    fn default() -> PencilStyle {
        PencilStyle {
            color: Hsba::new(0.0, 0.0, 0.0, 30.0),
            spread: 2.0,
            print_mode: false,
        }
    }
}

/// How alpha fades across a multi-segment spline.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SplineFade {
    /// Every segment at full strength.
    None,
    /// One continuous transparent-to-opaque ramp across all segments.
    Across,
    /// Only the first segment fades in; the rest draw at full strength.
    LeadIn,
}

/// The stroke renderer: samples parametric curves and plots jittered,
/// optionally fading dots onto an injected [`Canvas`] using an injected
/// [`Rng`], so everything it draws is reproducible per seed.
pub struct Pencil<'c, C: Canvas> {
    canvas: &'c mut C,
    rng: Rng,
    style: PencilStyle,
}

impl<'c, C: Canvas> Pencil<'c, C> {
    pub fn new(canvas: &'c mut C, rng: Rng) -> Pencil<'c, C> {
        Pencil::with_style(canvas, rng, PencilStyle::default())
    }

    pub fn with_style(canvas: &'c mut C, rng: Rng, style: PencilStyle) -> Pencil<'c, C> {
        Pencil { canvas, rng, style }
    }

    pub fn style(&self) -> PencilStyle {
        self.style
    }

    pub fn set_pencil_color(&mut self, color: Hsba) {
        self.style.color = color;
    }

    pub fn pencil_color(&self) -> Hsba {
        self.style.color
    }

    pub fn set_spread(&mut self, spread: f64) {
        self.style.spread = spread.max(0.0);
    }

    pub fn spread(&self) -> f64 {
        self.style.spread
    }

    pub fn set_print_mode(&mut self, print_mode: bool) {
        self.style.print_mode = print_mode;
    }

    pub fn print_mode(&self) -> bool {
        self.style.print_mode
    }

    /// Draws a full pencil circle.
    pub fn circle(&mut self, center_x: f64, center_y: f64, diameter: f64, fade: FadeWindow) {
        self.arc(
            center_x,
            center_y,
            diameter,
            0.0,
            2.0 * std::f64::consts::PI,
            fade,
        );
    }

    /// Draws a pencil arc; angles are radians, swept from `start` to `end`.
    pub fn arc(
        &mut self,
        center_x: f64,
        center_y: f64,
        diameter: f64,
        start: f64,
        end: f64,
        fade: FadeWindow,
    ) {
        self.stroke(
            Curve::Arc {
                center: Point::new(center_x, center_y),
                diameter,
                start,
                end,
            },
            fade,
        );
    }

    /// Draws a pencil line segment.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, fade: FadeWindow) {
        self.stroke(
            Curve::Line {
                from: Point::new(x1, y1),
                to: Point::new(x2, y2),
            },
            fade,
        );
    }

    /// Draws one cubic Bézier pencil stroke.
    pub fn bezier(&mut self, from: Point, ctrl1: Point, ctrl2: Point, to: Point, fade: FadeWindow) {
        self.stroke(
            Curve::Bezier {
                from,
                ctrl1,
                ctrl2,
                to,
            },
            fade,
        );
    }

    /// Outlines a rectangle with four unfaded lines.
    pub fn rect(&mut self, left_x: f64, top_y: f64, width: f64, height: f64) {
        self.line(left_x, top_y, left_x + width, top_y, FadeWindow::NONE);
        self.line(left_x, top_y, left_x, top_y + height, FadeWindow::NONE);
        self.line(
            left_x + width,
            top_y,
            left_x + width,
            top_y + height,
            FadeWindow::NONE,
        );
        self.line(
            left_x,
            top_y + height,
            left_x + width,
            top_y + height,
            FadeWindow::NONE,
        );
    }

    /// Fills a rectangle with concentric growing rectangles. The fixed
    /// increment bands visibly when it does not divide the span; that
    /// banding is part of the look.
    pub fn fill_rect(&mut self, left_x: f64, top_y: f64, width: f64, height: f64) {
        let center_x = left_x + width / 2.0;
        let center_y = top_y + height / 2.0;
        let mut size = 2.0;
        while size < width.max(height) {
            let rect_width = size.min(width);
            let rect_height = size.min(height);
            self.rect(
                center_x - rect_width / 2.0,
                center_y - rect_height / 2.0,
                rect_width,
                rect_height,
            );
            size += FILL_RECT_STEP;
        }
    }

    /// Fills a circle with concentric growing circles, spaced a little
    /// wider in print mode to compensate for the denser sampling.
    pub fn fill_circle(&mut self, center_x: f64, center_y: f64, diameter: f64) {
        let increment = if self.style.print_mode {
            FILL_CIRCLE_STEP_PRINT
        } else {
            FILL_CIRCLE_STEP
        };
        let mut d = 2.0;
        while d < diameter {
            self.circle(center_x, center_y, d, FadeWindow::NONE);
            d += increment;
        }
    }

    /// Draws an interpolating tension spline through the flat coordinate
    /// list `x0, y0, x1, y1, …`. Fewer than two points, or an odd
    /// coordinate count, draws nothing.
    pub fn spline(&mut self, coords: &[f64], fade: SplineFade) {
        let segments = spline_segments(coords);
        let count = segments.len();
        for (i, segment) in segments.into_iter().enumerate() {
            let window = match fade {
                SplineFade::None => FadeWindow::NONE,
                SplineFade::LeadIn if i == 0 => FadeWindow::FULL,
                SplineFade::LeadIn => FadeWindow::NONE,
                SplineFade::Across => {
                    FadeWindow::new(i as f64 / count as f64, (i + 1) as f64 / count as f64)
                }
            };
            self.stroke(segment, window);
        }
    }

    /// Regenerates the full-canvas paper texture: 100 000 translucent
    /// scatter dots, then every pixel blended toward white by a random
    /// factor in `[0, 0.5)`.
    pub fn paper(&mut self) {
        let width = self.canvas.width();
        let height = self.canvas.height();
        for _ in 0..PAPER_SCATTER_DOTS {
            let color = Hsba::new(
                self.rng.uniform(360.0),
                self.rng.uniform(100.0),
                self.rng.uniform(100.0),
                self.rng.uniform(PAPER_SCATTER_ALPHA_MAX),
            );
            let x = self.rng.uniform(width);
            let y = self.rng.uniform(height);
            let diameter = self.rng.uniform(DOT_DIAMETER);
            self.canvas.dot(x, y, diameter, color);
        }
        let rng = &mut self.rng;
        blend_pixels(&mut *self.canvas, PACKED_WHITE, || {
            rng.uniform(PAPER_BLEND_MAX)
        });
    }

    /// Samples `curve`, plotting one jittered dot per step with the fade
    /// window applied to the stroke color.
    fn stroke(&mut self, curve: Curve, window: FadeWindow) {
        match curve.sample_plan(self.style.print_mode) {
            SamplePlan::Empty => {}
            SamplePlan::Degenerate => {
                if cfg!(debug_assertions) {
                    eprintln!("pencil: degenerate curve {:?}; plotting one dot", curve);
                }
                let color = window.color_at(self.style.color, 0.0);
                self.plot_dot(curve.point_at(0.0), color);
            }
            SamplePlan::Steps {
                count,
                end_inclusive,
            } => {
                let last = if end_inclusive { count } else { count - 1 };
                for i in 0..=last {
                    let progress = i as f64 / count as f64;
                    let color = window.color_at(self.style.color, progress);
                    self.plot_dot(curve.point_at(progress), color);
                }
            }
        }
    }

    /// Plots one dot: position jittered by `U(0, spread)` per axis,
    /// diameter `U(0, 2)`.
    fn plot_dot(&mut self, point: Point, color: Hsba) {
        let x = point.x + self.rng.uniform(self.style.spread);
        let y = point.y + self.rng.uniform(self.style.spread);
        let diameter = self.rng.uniform(DOT_DIAMETER);
        self.canvas.dot(x, y, diameter, color);
    }
}
