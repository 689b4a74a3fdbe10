//! Color type and pixel packing.
//!
//! Colors are specified as straight (non-premultiplied) RGBA. Surfaces store
//! premultiplied BGRA bytes, which read as a little-endian `0xAARRGGBB` word.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Premultiply the color channels by alpha.
    ///
    /// Uses `c * (a + 1) >> 8`, so opaque colors come back unchanged and
    /// fully transparent ones collapse to [`Rgba::TRANSPARENT`].
    #[must_use]
    pub const fn premultiplied(self) -> Self {
        match self.a {
            255 => self,
            0 => Self::TRANSPARENT,
            a => {
                let f = a as u16 + 1;
                Self::new(
                    ((self.r as u16 * f) >> 8) as u8,
                    ((self.g as u16 * f) >> 8) as u8,
                    ((self.b as u16 * f) >> 8) as u8,
                    a,
                )
            }
        }
    }

    /// Undo [`Rgba::premultiplied`] (rounded, saturating).
    #[must_use]
    pub fn unpremultiplied(self) -> Self {
        match self.a {
            255 => self,
            0 => Self::TRANSPARENT,
            a => {
                let a16 = u16::from(a);
                let un = |c: u8| ((u16::from(c) * 255 + a16 / 2) / a16).min(255) as u8;
                Self::new(un(self.r), un(self.g), un(self.b), a)
            }
        }
    }

    /// Byte layout of this color in a BGRA buffer.
    #[must_use]
    pub const fn to_bgra(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    /// Read a color from BGRA bytes.
    #[must_use]
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        Self::new(bytes[2], bytes[1], bytes[0], bytes[3])
    }

    /// Packed `0xAARRGGBB` word (the little-endian reading of BGRA bytes).
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        u32::from_le_bytes(self.to_bgra())
    }

    /// Convert to array representation (R, G, B, A).
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_bgra_byte_order() {
        assert_eq!(Rgba::RED.to_bgra(), [0, 0, 255, 255]);
        assert_eq!(Rgba::new(1, 2, 3, 4).to_bgra(), [3, 2, 1, 4]);
        assert_eq!(Rgba::from_bgra([3, 2, 1, 4]), Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn test_argb_packing() {
        assert_eq!(Rgba::RED.to_argb(), 0xFFFF_0000);
        assert_eq!(Rgba::new(0x11, 0x22, 0x33, 0x44).to_argb(), 0x4411_2233);
    }

    #[test]
    fn test_premultiply_opaque_is_identity() {
        let c = Rgba::rgb(12, 200, 99);
        assert_eq!(c.premultiplied(), c);
    }

    #[test]
    fn test_premultiply_half_alpha() {
        let c = Rgba::new(255, 128, 0, 127).premultiplied();
        // f = 128: 255 * 128 >> 8 = 127, 128 * 128 >> 8 = 64
        assert_eq!(c, Rgba::new(127, 64, 0, 127));
    }

    #[test]
    fn test_premultiply_transparent() {
        assert_eq!(Rgba::new(200, 10, 10, 0).premultiplied(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_unpremultiply_restores_approximately() {
        let original = Rgba::new(200, 100, 50, 128);
        let back = original.premultiplied().unpremultiplied();
        assert!(back.r.abs_diff(original.r) <= 2);
        assert!(back.g.abs_diff(original.g) <= 2);
        assert!(back.b.abs_diff(original.b) <= 2);
        assert_eq!(back.a, 128);
    }

    #[test]
    fn test_rgba_with_alpha() {
        let semi_red = Rgba::RED.with_alpha(128);
        assert_eq!(semi_red.r, 255);
        assert_eq!(semi_red.a, 128);
    }

    #[test]
    fn test_rgba_default() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }
}
