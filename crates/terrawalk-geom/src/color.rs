use serde::{Deserialize, Serialize};

/// Linear RGB color with components in `[0, 1]`.
///
/// Serializes as a packed `0xRRGGBB` integer so TOML configs can write
/// `color = 0xdeb887`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    pub fn to_hex(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Hue, saturation, lightness, each in `[0, 1]`.
    pub fn to_hsl(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (min + max) / 2.0;
        if max == min {
            return (0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l <= 0.5 { d / (max + min) } else { d / (2.0 - max - min) };
        let h = if max == self.r {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };
        (h / 6.0, s, l)
    }

    /// Hue wraps; saturation and lightness clamp to `[0, 1]`.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::new(l, l, l);
        }
        let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let lo = 2.0 * l - hi;
        Self::new(
            hue_to_rgb(lo, hi, h + 1.0 / 3.0),
            hue_to_rgb(lo, hi, h),
            hue_to_rgb(lo, hi, h - 1.0 / 3.0),
        )
    }

    /// Offsets hue, saturation and lightness by `(roll - 0.5) * variance`.
    ///
    /// `rolls` are uniform samples in `[0, 1)`, one per HSL channel.
    pub fn jittered(self, variance: f32, rolls: [f32; 3]) -> Self {
        if variance == 0.0 {
            return self;
        }
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(
            h + (rolls[0] - 0.5) * variance,
            s + (rolls[1] - 0.5) * variance,
            l + (rolls[2] - 0.5) * variance,
        )
    }
}

fn hue_to_rgb(lo: f32, hi: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Rgb::from_hex(hex)
    }
}

impl From<Rgb> for u32 {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}
