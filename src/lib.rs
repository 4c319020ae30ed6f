//! Hand-drawn-looking "pencil" strokes on a 2-D raster canvas: parametric
//! curves sampled into small jittered dots, with optional alpha fading,
//! tension splines, composed shapes, and a stochastic paper texture. All
//! randomness flows through a seedable [`rand::Rng`], so renders are
//! reproducible.

pub mod canvas;
pub mod color;
pub mod config;
pub mod curve;
pub mod math;
pub mod palette;
pub mod pencil;
pub mod rand;
