//! RGB color and the small amount of color math palettes need.

use std::fmt;

use serde::{Serialize, Serializer};

/// RGB triplet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Saturates each raw channel into `0..=255`.
    pub const fn from_channels(channels: [i64; 3]) -> Self {
        Rgb(
            clamp8(channels[0]),
            clamp8(channels[1]),
            clamp8(channels[2]),
        )
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    pub fn channels(self) -> [i64; 3] {
        [self.0 as i64, self.1 as i64, self.2 as i64]
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Linear interpolation toward `base` by `amount`. See [`blend`].
    pub fn blend(self, base: Rgb, amount: f64) -> Rgb {
        blend(self, base, amount)
    }

    /// Component-wise integer mean, rounding down.
    pub fn average(self, other: Rgb) -> Rgb {
        let mean = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Rgb(
            mean(self.0, other.0),
            mean(self.1, other.1),
            mean(self.2, other.2),
        )
    }

    /// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
    /// Achromatic colors report a hue of 0.
    pub fn to_hsv(self) -> (f64, f64, f64) {
        let r = self.0 as f64 / 255.0;
        let g = self.1 as f64 / 255.0;
        let b = self.2 as f64 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max > 0.0 { delta / max } else { 0.0 };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        (h, s, max)
    }

    pub fn from_hsv(h: f64, s: f64, v: f64) -> Rgb {
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let c = v * s;
        let h = h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        let to_u8 = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Brighter color by HSV value scaling: `lighter(150)` is 50% brighter.
    ///
    /// When the scaled value passes full scale, the overflow is taken out of
    /// saturation instead, so bright colors wash toward white. A factor below
    /// 100 darkens by the reciprocal; a non-positive factor is a no-op.
    pub fn lighter(self, factor: i32) -> Rgb {
        if factor <= 0 {
            return self;
        }
        if factor < 100 {
            return self.darker(10_000 / factor);
        }
        let (h, mut s, v) = self.to_hsv();
        let mut v = v * factor as f64 / 100.0;
        if v > 1.0 {
            s = (s - (v - 1.0)).max(0.0);
            v = 1.0;
        }
        Rgb::from_hsv(h, s, v)
    }

    /// Darker color by HSV value scaling: `darker(150)` divides value by 1.5.
    pub fn darker(self, factor: i32) -> Rgb {
        if factor <= 0 {
            return self;
        }
        if factor < 100 {
            return self.lighter(10_000 / factor);
        }
        let (h, s, v) = self.to_hsv();
        Rgb::from_hsv(h, s, v * 100.0 / factor as f64)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Restricts an integer to the 8-bit channel range.
pub const fn clamp8(value: i64) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Alpha-blend `base` over `source` with `amount` as the alpha.
///
/// Each channel is `clamp8(trunc(src * (1 - amount) + base * amount))`,
/// evaluated as `src + (base - src) * amount` so that blending a color with
/// itself, or with `amount` at 0 or 1, is exact.
pub fn blend(source: Rgb, base: Rgb, amount: f64) -> Rgb {
    blend_channels(source.channels(), base.channels(), amount)
}

/// [`blend`] over raw, possibly out-of-range channels as parsed from a theme.
pub fn blend_channels(source: [i64; 3], base: [i64; 3], amount: f64) -> Rgb {
    let mix = |s: i64, b: i64| {
        let s = s as f64;
        // `as` truncates toward zero and saturates on overflow.
        clamp8((s + (b as f64 - s) * amount) as i64)
    };
    Rgb(
        mix(source[0], base[0]),
        mix(source[1], base[1]),
        mix(source[2], base[2]),
    )
}
