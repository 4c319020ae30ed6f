use crate::color::Hsba;
use crate::math::{lerp, Point};

/// Angular step scale for arcs: radians advanced per sample, divided by the
/// arc's diameter so bigger circles get proportionally more dots.
const ARC_STEP: f64 = 0.3;
/// Curve length covered per sample for lines and Bézier segments.
const SCREEN_STEP: f64 = 0.15;
/// Print output samples twice as densely.
const PRINT_STEP: f64 = 0.075;

/// The alpha-interpolation range applied across one sampled curve.
///
/// The factor multiplied into the base alpha ramps linearly from `start`
/// (at progress 0) to `end` (at progress 1). [`FadeWindow::NONE`] is the
/// degenerate `{1, 1}` window, which reproduces the base color exactly;
/// "no fade" is this window rather than a separate code path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FadeWindow {
    pub start: f64,
    pub end: f64,
}

impl FadeWindow {
    /// No fading: a constant alpha factor of 1.
    pub const NONE: FadeWindow = FadeWindow {
        start: 1.0,
        end: 1.0,
    };
    /// A full transparent-to-opaque ramp across the curve.
    pub const FULL: FadeWindow = FadeWindow {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f64, end: f64) -> FadeWindow {
        FadeWindow { start, end }
    }

    /// The alpha factor at `progress`, which callers supply already clamped
    /// to `[0, 1]`.
    pub fn factor(self, progress: f64) -> f64 {
        lerp(self.start, self.end, progress)
    }

    /// The color to plot at `progress`: `base` with alpha scaled by
    /// [`factor`](Self::factor); hue, saturation, and brightness pass
    /// through untouched.
    pub fn color_at(self, base: Hsba, progress: f64) -> Hsba {
        base.with_alpha_factor(self.factor(progress))
    }
}

/// A parametric curve the sampler can walk. Angles are radians; `point_at`
/// takes a normalized parameter in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Curve {
    Arc {
        center: Point,
        diameter: f64,
        start: f64,
        end: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
    Bezier {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

/// How many dots to plot along a curve, precomputed as an integer so the
/// sampling loop cannot divide by zero or drift by accumulating a float
/// step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SamplePlan {
    /// Empty angular range: the loop body never runs.
    Empty,
    /// Zero-length or non-positive-size geometry: plot a single dot at the
    /// curve start.
    Degenerate,
    /// Plot `count` dots at `i / count` for `i` in `0..count`, plus the
    /// curve end itself when `end_inclusive`.
    Steps { count: usize, end_inclusive: bool },
}

impl Curve {
    /// Evaluates the curve at normalized parameter `t`.
    pub fn point_at(&self, t: f64) -> Point {
        match *self {
            Curve::Arc {
                center,
                diameter,
                start,
                end,
            } => {
                let theta = lerp(start, end, t);
                Point::new(
                    center.x + diameter / 2.0 * theta.cos(),
                    center.y + diameter / 2.0 * theta.sin(),
                )
            }
            Curve::Line { from, to } => from.lerp(to, t),
            Curve::Bezier {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let u = 1.0 - t;
                let (b0, b1) = (u * u * u, 3.0 * u * u * t);
                let (b2, b3) = (3.0 * u * t * t, t * t * t);
                Point::new(
                    b0 * from.x + b1 * ctrl1.x + b2 * ctrl2.x + b3 * to.x,
                    b0 * from.y + b1 * ctrl1.y + b2 * ctrl2.y + b3 * to.y,
                )
            }
        }
    }

    /// Estimated length driving the sample count: the control-polygon
    /// length for lines and Béziers, and the full swept arc length for
    /// arcs.
    pub fn approx_length(&self) -> f64 {
        match *self {
            Curve::Arc {
                diameter,
                start,
                end,
                ..
            } => diameter.max(0.0) / 2.0 * (end - start).max(0.0),
            Curve::Line { from, to } => from.dist(to),
            Curve::Bezier {
                from,
                ctrl1,
                ctrl2,
                to,
            } => from.dist(ctrl1) + ctrl1.dist(ctrl2) + ctrl2.dist(to),
        }
    }

    /// Plans the sampling of this curve.
    ///
    /// Arcs advance `0.3 / diameter` radians per dot; lines and Béziers
    /// advance `0.15 / length` (halved in print mode) of their parameter
    /// per dot. Arcs and lines stop short of the curve end, Béziers land
    /// on it, matching how each primitive chains with its neighbors.
    pub fn sample_plan(&self, print_mode: bool) -> SamplePlan {
        match *self {
            Curve::Arc {
                diameter,
                start,
                end,
                ..
            } => {
                let range = end - start;
                if range <= 0.0 {
                    SamplePlan::Empty
                } else if diameter <= 0.0 {
                    SamplePlan::Degenerate
                } else {
                    let count = (range * diameter / ARC_STEP).ceil() as usize;
                    SamplePlan::Steps {
                        count,
                        end_inclusive: false,
                    }
                }
            }
            Curve::Line { .. } => plan_by_length(self.approx_length(), print_mode, false),
            Curve::Bezier { .. } => plan_by_length(self.approx_length(), print_mode, true),
        }
    }
}

fn plan_by_length(length: f64, print_mode: bool, end_inclusive: bool) -> SamplePlan {
    if length <= 0.0 {
        return SamplePlan::Degenerate;
    }
    let step = if print_mode { PRINT_STEP } else { SCREEN_STEP };
    SamplePlan::Steps {
        count: (length / step).ceil() as usize,
        end_inclusive,
    }
}

/// Tension coefficient for spline control-point derivation.
pub const SPLINE_TENSION: f64 = 0.5;

/// Derives the chained Bézier segments of an interpolating tension spline.
///
/// `coords` is a flat `x0, y0, x1, y1, …` list. It must encode at least two
/// points (even length of at least four); anything shorter or odd yields no
/// segments, by contract a silent no-op. Segment `i` runs from point `i` to
/// point `i + 1`, with control points pulled along the neighbor chords
/// (Catmull-Rom style); missing neighbors at the ends are substituted with
/// the segment's own endpoints.
pub fn spline_segments(coords: &[f64]) -> Vec<Curve> {
    if coords.len() < 4 || coords.len() % 2 != 0 {
        return Vec::new();
    }
    let points: Vec<Point> = coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect();

    let mut segments = Vec::with_capacity(points.len() - 1);
    for i in 0..points.len() - 1 {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = if i == 0 { p1 } else { points[i - 1] };
        let p3 = *points.get(i + 2).unwrap_or(&p2);
        let ctrl1 = Point::new(
            p1.x + SPLINE_TENSION * (p2.x - p0.x),
            p1.y + SPLINE_TENSION * (p2.y - p0.y),
        );
        let ctrl2 = Point::new(
            p2.x - SPLINE_TENSION * (p3.x - p1.x),
            p2.y - SPLINE_TENSION * (p3.y - p1.y),
        );
        segments.push(Curve::Bezier {
            from: p1,
            ctrl1,
            ctrl2,
            to: p2,
        });
    }
    segments
}
