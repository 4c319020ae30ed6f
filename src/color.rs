use raqote::SolidSource;

/// A pencil color in the HSB ranges the original sketches used:
/// hue in degrees (wrapped into `[0, 360)`), saturation, brightness, and
/// alpha each on a 0–100 scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsba {
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub a: f64,
}

impl Hsba {
    pub fn new(h: f64, s: f64, b: f64, a: f64) -> Hsba {
        Hsba { h, s, b, a }
    }

    /// Returns the same color with alpha scaled by `factor`. This is the
    /// whole of fade compositing: hue, saturation, and brightness never
    /// change across a stroke.
    pub fn with_alpha_factor(self, factor: f64) -> Hsba {
        Hsba {
            a: self.a * factor,
            ..self
        }
    }

    /// Converts to 8-bit straight (non-premultiplied) RGBA. Out-of-range
    /// saturation/brightness/alpha are clamped; hue wraps.
    pub fn to_rgba8(self) -> [u8; 4] {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let v = self.b.clamp(0.0, 100.0) / 100.0;
        let a = self.a.clamp(0.0, 100.0) / 100.0;

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        [
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
            (a * 255.0).round() as u8,
        ]
    }

    /// Decomposes 8-bit straight RGBA back into hue/saturation/brightness/alpha.
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Hsba {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };
        Hsba {
            h,
            s: s * 100.0,
            b: max * 100.0,
            a: f64::from(a) / 255.0 * 100.0,
        }
    }

    /// Converts to a raqote fill source (premultiplied internally by raqote).
    pub fn to_solid_source(self) -> SolidSource {
        let [r, g, b, a] = self.to_rgba8();
        SolidSource::from_unpremultiplied_argb(a, r, g, b)
    }
}

/// Blends one packed ARGB pixel toward `target` by `t` in `[0, 1]`,
/// channel-wise. Pixels use the raqote layout (`0xAARRGGBB`, premultiplied);
/// blending toward opaque white is what the paper pass wants, and for a
/// fully opaque target the premultiplied and straight results agree.
pub fn lerp_packed(pixel: u32, target: u32, t: f64) -> u32 {
    let mut out = 0u32;
    for shift in [24, 16, 8, 0] {
        let from = f64::from((pixel >> shift) & 0xff);
        let to = f64::from((target >> shift) & 0xff);
        let channel = (from + (to - from) * t).round() as u32;
        out |= channel << shift;
    }
    out
}

/// Opaque white in the packed raqote pixel layout.
pub const PACKED_WHITE: u32 = 0xffff_ffff;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Hsba::new(0.0, 100.0, 100.0, 100.0).to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Hsba::new(120.0, 100.0, 100.0, 100.0).to_rgba8(), [0, 255, 0, 255]);
        assert_eq!(Hsba::new(240.0, 100.0, 100.0, 100.0).to_rgba8(), [0, 0, 255, 255]);
        assert_eq!(Hsba::new(0.0, 0.0, 50.0, 100.0).to_rgba8(), [128, 128, 128, 255]);
        // The default pencil color: black at 30% alpha.
        assert_eq!(Hsba::new(0.0, 0.0, 0.0, 30.0).to_rgba8(), [0, 0, 0, 77]);
        assert_eq!(Hsba::new(30.0, 80.0, 90.0, 100.0).to_rgba8(), [230, 138, 46, 255]);
        assert_eq!(Hsba::new(210.0, 40.0, 60.0, 75.0).to_rgba8(), [92, 122, 153, 191]);
    }

    #[test]
    fn test_to_rgba8_hue_wraps() {
        assert_eq!(Hsba::new(360.0, 100.0, 100.0, 100.0).to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Hsba::new(-90.0, 100.0, 100.0, 50.0).to_rgba8(), [128, 0, 255, 128]);
    }

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(
            Hsba::new(0.0, -10.0, 150.0, 120.0).to_rgba8(),
            [255, 255, 255, 255]
        );
    }

    #[test]
    fn test_from_rgba8() {
        assert_eq!(
            Hsba::from_rgba8([255, 0, 0, 255]),
            Hsba::new(0.0, 100.0, 100.0, 100.0)
        );
        assert_eq!(
            Hsba::from_rgba8([0, 255, 0, 255]),
            Hsba::new(120.0, 100.0, 100.0, 100.0)
        );
        assert_eq!(
            Hsba::from_rgba8([0, 0, 255, 255]),
            Hsba::new(240.0, 100.0, 100.0, 100.0)
        );
        assert_eq!(Hsba::from_rgba8([0, 0, 0, 0]), Hsba::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(
            Hsba::from_rgba8([255, 255, 255, 255]),
            Hsba::new(0.0, 0.0, 100.0, 100.0)
        );
    }

    #[test]
    fn test_with_alpha_factor() {
        let base = Hsba::new(200.0, 50.0, 50.0, 80.0);
        let faded = base.with_alpha_factor(0.25);
        assert_eq!(faded, Hsba::new(200.0, 50.0, 50.0, 20.0));
        assert_eq!(base.with_alpha_factor(1.0), base);
    }

    #[test]
    fn test_lerp_packed() {
        assert_eq!(lerp_packed(0xff000000, PACKED_WHITE, 0.0), 0xff000000);
        assert_eq!(lerp_packed(0xff000000, PACKED_WHITE, 1.0), PACKED_WHITE);
        assert_eq!(lerp_packed(0x00000000, PACKED_WHITE, 0.5), 0x80808080);
        // Already-white pixels are a fixed point of the blend.
        assert_eq!(lerp_packed(PACKED_WHITE, PACKED_WHITE, 0.37), PACKED_WHITE);
    }
}
