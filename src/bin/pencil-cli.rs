use core::fmt::Debug;
use std::{fmt::Display, str::FromStr};

use clap::Parser;

use pencil::canvas::RaqoteCanvas;
use pencil::curve::FadeWindow;
use pencil::math::Point;
use pencil::palette::Palette;
use pencil::pencil::{Pencil, SplineFade};
use pencil::rand::Rng;

#[derive(Parser)]
struct Opts {
    seed: Seed,
    #[clap(short, default_value = "800")]
    width: i32,
    #[clap(flatten)]
    config: pencil::config::Config,
}

#[derive(Clone)]
struct Seed(pub Vec<u8>);
impl FromStr for Seed {
    type Err = anyhow::Error;
    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") {
            s = &s[2..];
        }
        Ok(Seed(hex::decode(s)?))
    }
}
impl Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("0x")?;
        f.write_str(&hex::encode(&self.0))
    }
}
impl Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

fn main() {
    let opts = Opts::parse();

    let palette = Palette::from_bundle();
    let color = match palette.color_by_name(&opts.config.color) {
        Some(color) => color,
        None => {
            let names: Vec<&str> = palette.names().collect();
            eprintln!(
                "unknown pencil color {:?}; bundled colors: {}",
                opts.config.color,
                names.join(", ")
            );
            std::process::exit(2);
        }
    };

    let width = opts.width;
    let height = width * 5 / 4;
    let mut canvas = RaqoteCanvas::new(width, height);
    let mut pen = Pencil::new(&mut canvas, Rng::from_seed(&opts.seed.0));
    pen.set_print_mode(opts.config.print_mode);
    pen.set_spread(opts.config.spread);
    pen.set_pencil_color(color);
    draw_demo_sheet(&mut pen, f64::from(width), f64::from(height));

    let filename = format!("{}.png", opts.seed);
    canvas
        .draw_target()
        .write_png(&filename)
        .expect("dt.write_png");
    eprintln!("wrote png: {}", filename);
}

/// One sheet exercising every primitive: paper texture, outlined and filled
/// shapes, a faded arc, a Bézier stroke, and a spline squiggle.
fn draw_demo_sheet(pen: &mut Pencil<'_, RaqoteCanvas>, w: f64, h: f64) {
    pen.paper();

    let margin = 0.05 * w;
    pen.rect(margin, margin, w - 2.0 * margin, h - 2.0 * margin);

    pen.fill_circle(0.3 * w, 0.22 * h, 0.25 * w);
    pen.circle(0.7 * w, 0.22 * h, 0.25 * w, FadeWindow::FULL);

    pen.fill_rect(0.15 * w, 0.42 * h, 0.3 * w, 0.12 * h);
    pen.arc(
        0.7 * w,
        0.48 * h,
        0.22 * w,
        0.0,
        std::f64::consts::PI,
        FadeWindow::NONE,
    );

    pen.bezier(
        Point::new(0.1 * w, 0.68 * h),
        Point::new(0.35 * w, 0.60 * h),
        Point::new(0.55 * w, 0.76 * h),
        Point::new(0.9 * w, 0.66 * h),
        FadeWindow::FULL,
    );

    pen.spline(
        &[
            0.10 * w,
            0.85 * h,
            0.30 * w,
            0.80 * h,
            0.50 * w,
            0.90 * h,
            0.70 * w,
            0.78 * h,
            0.90 * w,
            0.86 * h,
        ],
        SplineFade::Across,
    );

    // a few hatching strokes fading out toward the right
    for i in 0..5 {
        let y = (0.58 + 0.01 * f64::from(i)) * h;
        pen.line(0.1 * w, y, 0.35 * w, y - 0.02 * h, FadeWindow::new(1.0, 0.0));
    }
}
