//! Pixel type and escape-count colorizer.
//!
//! `Rgba` is a u32 newtype; bytes are `[R, G, B, A]` in memory order.
//! The colorizer maps an escape count through a sine palette: smooth,
//! cyclic, non-monotonic, and with no special case for points inside
//! the set — the cap count gets whatever the formula yields.

/// RGBA pixel: bytes are `[R, G, B, A]` in memory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Creates a pixel from component values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    /// Returns the red component.
    #[inline]
    pub fn r(self) -> u8 {
        self.0.to_le_bytes()[0]
    }
    /// Returns the green component.
    #[inline]
    pub fn g(self) -> u8 {
        self.0.to_le_bytes()[1]
    }
    /// Returns the blue component.
    #[inline]
    pub fn b(self) -> u8 {
        self.0.to_le_bytes()[2]
    }
    /// Returns the alpha component.
    #[inline]
    pub fn a(self) -> u8 {
        self.0.to_le_bytes()[3]
    }
}

/// Palette period: one full color cycle every 20π iterations.
const FREQUENCY: f32 = 0.1;

/// One palette channel: `(sin(x) + 1) / 2` scaled to a byte.
///
/// The scaled value sits in `[0, 255]`, so the cast truncation can
/// never wrap.
#[inline]
fn channel(x: f32) -> u8 {
    ((x.sin() + 1.0) * 0.5 * 255.0) as u8
}

/// Map an escape count to a color.
///
/// The three channels sample the same sine at phase offsets 0.2, 0.4
/// and 0.6, giving the familiar banded rainbow. Pure function: equal
/// counts always produce equal pixels.
#[inline]
pub fn shade(escape_count: f32) -> Rgba {
    Rgba::new(
        channel(escape_count * FREQUENCY + 0.2),
        channel(escape_count * FREQUENCY + 0.4),
        channel(escape_count * FREQUENCY + 0.6),
        0xFF,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_components() {
        let c = Rgba::new(0x11, 0x22, 0x33, 0xFF);
        assert_eq!(c.r(), 0x11);
        assert_eq!(c.g(), 0x22);
        assert_eq!(c.b(), 0x33);
        assert_eq!(c.a(), 0xFF);
    }

    #[test]
    fn shade_is_deterministic() {
        for count in [0.0f32, 1.0, 17.0, 999.0, 1000.0] {
            assert_eq!(shade(count), shade(count));
        }
    }

    #[test]
    fn shade_is_opaque() {
        for count in 0..=1000 {
            assert_eq!(shade(count as f32).a(), 0xFF);
        }
    }

    #[test]
    fn channel_covers_extremes() {
        use core::f32::consts::FRAC_PI_2;
        // sin(±π/2) may land an ulp shy of ±1.0 depending on libm.
        assert!(channel(FRAC_PI_2) >= 254);
        assert_eq!(channel(-FRAC_PI_2), 0);
    }

    #[test]
    fn neighboring_counts_shade_smoothly() {
        // Frequency 0.1 means adjacent counts move each channel by at
        // most ~13 steps.
        for count in 0..100 {
            let a = shade(count as f32);
            let b = shade(count as f32 + 1.0);
            assert!((a.r() as i16 - b.r() as i16).abs() <= 14);
            assert!((a.g() as i16 - b.g() as i16).abs() <= 14);
            assert!((a.b() as i16 - b.b() as i16).abs() <= 14);
        }
    }
}
