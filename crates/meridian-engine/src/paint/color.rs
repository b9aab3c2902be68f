/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are linear and already multiplied by `a`.
///
/// The surface is configured with an sRGB format when available, so the GPU
/// encodes linear values on write. Colors authored in sRGB (hex literals,
/// design tools) go through [`from_srgb_u8`](Self::from_srgb_u8) or
/// [`from_hex`](Self::from_hex).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Opaque color from a `0xRRGGBB` sRGB literal.
    #[inline]
    pub fn from_hex(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, 255)
    }

    /// Creates a premultiplied linear color from straight sRGB bytes.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
            a as f32 / 255.0,
        )
    }

    /// Creates a premultiplied color from straight-alpha linear components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}

/// sRGB transfer function, decoding direction.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn hex_endpoints() {
        let white = Color::from_hex(0xffffff);
        assert!(approx(white.r, 1.0) && approx(white.g, 1.0) && approx(white.b, 1.0));
        assert_eq!(white.a, 1.0);
        assert_eq!(Color::from_hex(0x000000), Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 });
    }

    #[test]
    fn hex_decodes_to_linear() {
        // sRGB mid-grey 0x80 is ~0.2158 in linear light.
        let c = Color::from_hex(0x808080);
        assert!(approx(c.r, 0.21586), "{}", c.r);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn hex_channel_order() {
        let c = Color::from_hex(0xce3c1b);
        assert!(c.r > c.g && c.g > c.b);
    }

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert!(approx(c.r, 0.5) && approx(c.g, 0.25) && approx(c.b, 0.0));
        assert!(!c.is_transparent());
        assert!(Color::transparent().is_transparent());
    }
}
